//! Byte pattern tables for the escaping modes.
//!
//! The character classes follow the `unreserved` and `reserved` rules of
//! [RFC 2396], which is where the historical escaping behavior comes from.
//!
//! [RFC 2396]: https://datatracker.ietf.org/doc/html/rfc2396#section-2

/// A table specifying the ASCII bytes that may appear unescaped in a string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Table(u64, u64);

impl Table {
    /// Creates a table that only allows the given unescaped bytes.
    ///
    /// # Panics
    ///
    /// Panics if any of the bytes is not ASCII or equals `b'%'`.
    #[must_use]
    pub const fn new(mut bytes: &[u8]) -> Self {
        let mut table = 0;
        while let [cur, rem @ ..] = bytes {
            assert!(
                !matches!(cur, b'%' | 128..),
                "cannot allow non-ASCII byte or %"
            );
            table |= 1u128.wrapping_shl(*cur as u32);
            bytes = rem;
        }
        Self(table as u64, (table >> 64) as u64)
    }

    /// Combines two tables into one.
    ///
    /// Returns a new table that allows all the bytes allowed
    /// by `self` or by `other`.
    #[must_use]
    pub const fn or(self, other: Self) -> Self {
        Self(self.0 | other.0, self.1 | other.1)
    }

    /// Subtracts from this table.
    ///
    /// Returns a new table that allows all the bytes allowed
    /// by `self` but not allowed by `other`.
    #[must_use]
    pub const fn sub(self, other: Self) -> Self {
        Self(self.0 & !other.0, self.1 & !other.1)
    }

    /// Checks whether the table is a subset of another, i.e., `other`
    /// allows at least all the bytes allowed by `self`.
    #[must_use]
    pub const fn is_subset(self, other: Self) -> bool {
        self.0 & other.0 == self.0 && self.1 & other.1 == self.1
    }

    /// Checks whether the given byte may be left unescaped.
    ///
    /// Non-ASCII bytes are never allowed.
    #[inline]
    #[must_use]
    pub const fn allows(self, x: u8) -> bool {
        let table = if x < 64 {
            self.0
        } else if x < 128 {
            self.1
        } else {
            0
        };
        table & 1u64.wrapping_shl(x as u32) != 0
    }
}

const fn new(bytes: &[u8]) -> Table {
    Table::new(bytes)
}

/// `alpha = %x41-5A / %x61-7A`
pub const ALPHA: Table = new(b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz");

/// `digit = %x30-39`
pub const DIGIT: Table = new(b"0123456789");

/// `hex = digit / "A" / "B" / "C" / "D" / "E" / "F" / "a" / "b" / "c" / "d" / "e" / "f"`
pub const HEX: Table = DIGIT.or(new(b"ABCDEFabcdef"));

/// `scheme = alpha *( alpha / digit / "+" / "-" / "." )`
pub const SCHEME: Table = ALPHA.or(DIGIT).or(new(b"+-."));

/// `mark = "-" / "_" / "." / "!" / "~" / "*" / "'" / "(" / ")"`
pub const MARK: Table = new(b"-_.!~*'()");

/// `unreserved = alphanum / mark`
pub const UNRESERVED: Table = ALPHA.or(DIGIT).or(MARK);

/// `reserved = ";" / "/" / "?" / ":" / "@" / "&" / "=" / "+" / "$" / ","`
pub const RESERVED: Table = new(b";/?:@&=+$,");

/// Path text: everything reserved except `"?"`, which would start the query.
pub const PATH: Table = UNRESERVED.or(RESERVED.sub(new(b"?")));

/// Userinfo text: `"@"` and `"/"` end the authority and `":"` separates the password.
pub const USERINFO: Table = UNRESERVED.or(RESERVED.sub(new(b"@/:")));

/// Query keys and values: all reserved characters are escaped.
pub const QUERY_COMPONENT: Table = UNRESERVED;

/// Fragment text: every reserved character is kept.
pub const FRAGMENT: Table = UNRESERVED.or(RESERVED);

/// Opaque path text: every reserved character is kept.
///
/// A leading `"/"` still has to be escaped, which is handled by the serializer.
pub const OPAQUE: Table = UNRESERVED.or(RESERVED);
