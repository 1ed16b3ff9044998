//! Percent-encoding utilities.
//!
//! Escaping is driven by an [`Encoder`], which names the set of bytes left
//! as they are. Every other byte is written as `'%'` followed by two
//! lowercase hexadecimal digits, except that [`QueryComponent`] writes a
//! space as `'+'`.
//!
//! [`QueryComponent`]: encoder::QueryComponent

pub mod encoder;
pub mod table;

pub use encoder::Encoder;
pub use table::Table;

use alloc::{borrow::Cow, string::String, vec::Vec};
use encoder::QueryComponent;

/// An error occurred when decoding a percent-encoded string.
///
/// It carries the offending escape: the `'%'` and at most two characters
/// following it, e.g., `"%"`, `"%a"` or `"%zz"`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EscapeError {
    pub(crate) index: usize,
    pub(crate) escape: String,
}

impl EscapeError {
    fn at(s: &str, index: usize) -> Self {
        let mut end = s.len().min(index + 3);
        while !s.is_char_boundary(end) {
            end -= 1;
        }
        Self {
            index,
            escape: s[index..end].into(),
        }
    }

    /// Returns the index of the `'%'` in the decoded string.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the offending escape.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.escape
    }

    pub(crate) fn offset(mut self, by: usize) -> Self {
        self.index += by;
        self
    }
}

#[cfg(feature = "impl-error")]
impl crate::Error for EscapeError {}

const fn gen_octet_table(hi: bool) -> [u8; 256] {
    let mut out = [0xff; 256];
    let shift = if hi { 4 } else { 0 };

    let mut i = 0;
    while i < 10 {
        out[(i + b'0') as usize] = i << shift;
        i += 1;
    }
    while i < 16 {
        out[(i - 10 + b'A') as usize] = i << shift;
        out[(i - 10 + b'a') as usize] = i << shift;
        i += 1;
    }
    out
}

const OCTET_TABLE_HI: &[u8; 256] = &gen_octet_table(true);
const OCTET_TABLE_LO: &[u8; 256] = &gen_octet_table(false);

/// Decodes a percent-encoded octet, assuming that the bytes are hexadecimal.
fn decode_octet(hi: u8, lo: u8) -> u8 {
    debug_assert!(hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit());
    OCTET_TABLE_HI[hi as usize] | OCTET_TABLE_LO[lo as usize]
}

pub(crate) fn encode_byte(x: u8) -> &'static str {
    const TABLE: &[u8; 256 * 3] = &{
        const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

        let mut i = 0;
        let mut table = [0; 256 * 3];
        while i < 256 {
            table[i * 3] = b'%';
            table[i * 3 + 1] = HEX_DIGITS[i >> 4];
            table[i * 3 + 2] = HEX_DIGITS[i & 0b1111];
            i += 1;
        }
        table
    };

    const TABLE_STR: &str = match core::str::from_utf8(TABLE) {
        Ok(s) => s,
        Err(_) => unreachable!(),
    };

    &TABLE_STR[x as usize * 3..x as usize * 3 + 3]
}

/// Percent-encodes a string with the given encoder and appends the result onto `buf`.
pub fn encode_to<E: Encoder>(s: &str, buf: &mut String) {
    let bytes = s.as_bytes();
    let mut start = 0;

    for (i, &x) in bytes.iter().enumerate() {
        if E::TABLE.allows(x) {
            continue;
        }
        // Runs of allowed bytes are ASCII, so `start` and `i` lie on char boundaries.
        buf.push_str(&s[start..i]);
        if x == b' ' && E::SPACE_AS_PLUS {
            buf.push('+');
        } else {
            buf.push_str(encode_byte(x));
        }
        start = i + 1;
    }
    buf.push_str(&s[start..]);
}

/// Percent-encodes a string with the given encoder.
///
/// # Examples
///
/// ```
/// use urlref::pct_enc::{encode, encoder::{Path, Userinfo}};
///
/// assert_eq!(encode::<Path>("/file one&two"), "/file%20one&two");
/// assert_eq!(encode::<Userinfo>("foo:bar"), "foo%3abar");
/// ```
#[must_use]
pub fn encode<E: Encoder>(s: &str) -> String {
    let mut buf = String::with_capacity(s.len());
    encode_to::<E>(s, &mut buf);
    buf
}

/// Decodes a percent-encoded string to bytes.
///
/// # Errors
///
/// Returns `Err` if a `'%'` is not followed by two hexadecimal digits.
pub fn decode_to_bytes<E: Encoder>(s: &str) -> Result<Cow<'_, [u8]>, EscapeError> {
    let bytes = s.as_bytes();
    let plus = E::SPACE_AS_PLUS && bytes.contains(&b'+');
    if !plus && !bytes.contains(&b'%') {
        return Ok(Cow::Borrowed(bytes));
    }

    let mut buf = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'%' => {
                if i + 2 >= bytes.len() {
                    return Err(EscapeError::at(s, i));
                }
                let (hi, lo) = (bytes[i + 1], bytes[i + 2]);
                if !(table::HEX.allows(hi) && table::HEX.allows(lo)) {
                    return Err(EscapeError::at(s, i));
                }
                buf.push(decode_octet(hi, lo));
                i += 3;
            }
            b'+' if E::SPACE_AS_PLUS => {
                buf.push(b' ');
                i += 1;
            }
            x => {
                buf.push(x);
                i += 1;
            }
        }
    }
    Ok(Cow::Owned(buf))
}

/// Decodes a percent-encoded string, replacing any invalid UTF-8 sequences
/// in the decoded bytes with [`U+FFFD REPLACEMENT CHARACTER`][U+FFFD].
///
/// [U+FFFD]: char::REPLACEMENT_CHARACTER
///
/// This function allocates only when the string contains anything to decode.
///
/// # Errors
///
/// Returns `Err` if a `'%'` is not followed by two hexadecimal digits.
///
/// # Examples
///
/// ```
/// use urlref::pct_enc::{decode, encoder::Path};
///
/// assert_eq!(decode::<Path>("/a%20b+c").unwrap(), "/a b+c");
/// assert_eq!(decode::<Path>("%zzzzz").unwrap_err().as_str(), "%zz");
/// ```
pub fn decode<E: Encoder>(s: &str) -> Result<Cow<'_, str>, EscapeError> {
    Ok(match decode_to_bytes::<E>(s)? {
        Cow::Borrowed(_) => Cow::Borrowed(s),
        Cow::Owned(bytes) => match String::from_utf8(bytes) {
            Ok(string) => Cow::Owned(string),
            Err(e) => Cow::Owned(String::from_utf8_lossy(e.as_bytes()).into_owned()),
        },
    })
}

/// Escapes a string for use as a query key or value.
///
/// A space is written as `'+'` and every byte outside the unreserved set
/// is percent-encoded with lowercase hexadecimal digits.
///
/// # Examples
///
/// ```
/// assert_eq!(urlref::escape("one two"), "one+two");
/// assert_eq!(urlref::escape("10%"), "10%25");
/// ```
#[must_use]
pub fn escape(s: &str) -> String {
    encode::<QueryComponent>(s)
}

/// Reverses [`escape`], turning `'+'` back into a space.
///
/// # Errors
///
/// Returns `Err` if a `'%'` is not followed by two hexadecimal digits.
///
/// # Examples
///
/// ```
/// assert_eq!(urlref::unescape("1%41%42%43").unwrap(), "1ABC");
/// assert_eq!(urlref::unescape("123%45%6").unwrap_err().as_str(), "%6");
/// ```
pub fn unescape(s: &str) -> Result<String, EscapeError> {
    decode::<QueryComponent>(s).map(Cow::into_owned)
}

#[cfg(test)]
mod tests {
    use super::{encoder::*, *};

    #[test]
    fn octets() {
        assert_eq!(decode_octet(b'4', b'a'), 0x4a);
        assert_eq!(decode_octet(b'F', b'f'), 0xff);
        assert_eq!(encode_byte(0xe2), "%e2");
        assert_eq!(encode_byte(b'\t'), "%09");
    }

    #[test]
    fn borrows_when_nothing_to_decode() {
        assert!(matches!(decode::<Path>("abc+def"), Ok(Cow::Borrowed(_))));
        assert!(matches!(
            decode::<QueryComponent>("abc+def"),
            Ok(Cow::Owned(_))
        ));
    }

    #[test]
    fn error_slice_on_char_boundary() {
        let e = decode::<Path>("a%é").unwrap_err();
        assert_eq!(e.index(), 1);
        assert_eq!(e.as_str(), "%é");

        let e = decode::<Path>("%aé").unwrap_err();
        assert_eq!(e.as_str(), "%a");
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        assert_eq!(decode::<Path>("a%ffb").unwrap(), "a\u{fffd}b");
        assert_eq!(&*decode_to_bytes::<Path>("a%ffb").unwrap(), b"a\xffb");
    }
}
