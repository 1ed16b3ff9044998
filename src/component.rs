//! Components of a URL reference.

use crate::pct_enc::{self, encoder, EscapeError};
use alloc::string::String;
use ref_cast::{ref_cast_custom, RefCastCustom};

/// The [authority] component of a URL reference, in the form `userinfo@host`.
///
/// Nothing in the authority is decoded.
///
/// [authority]: https://datatracker.ietf.org/doc/html/rfc3986/#section-3.2
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Authority {
    raw: String,
    host_start: usize,
}

impl Authority {
    /// Splits an authority on its last `'@'`.
    pub(crate) fn new(raw: &str) -> Self {
        let host_start = raw.rfind('@').map_or(0, |i| i + 1);
        Self {
            raw: raw.into(),
            host_start,
        }
    }

    /// Returns the authority as a string slice.
    ///
    /// # Examples
    ///
    /// ```
    /// use urlref::Url;
    ///
    /// let url = Url::parse("ftp://webmaster@www.google.com/")?;
    /// assert_eq!(url.authority().unwrap().as_str(), "webmaster@www.google.com");
    /// # Ok::<_, urlref::ParseError>(())
    /// ```
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns the [userinfo] subcomponent, if any.
    ///
    /// [userinfo]: https://datatracker.ietf.org/doc/html/rfc3986/#section-3.2.1
    #[must_use]
    pub fn userinfo(&self) -> Option<&Userinfo> {
        match self.host_start {
            0 => None,
            i => Some(Userinfo::new(&self.raw[..i - 1])),
        }
    }

    /// Returns the host subcomponent, i.e., everything after the last `'@'`.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.raw[self.host_start..]
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }
}

/// The [userinfo] subcomponent of an authority, still percent-encoded.
///
/// Its [`Display`] and [`Debug`] forms mask the password with `"******"`.
///
/// [userinfo]: https://datatracker.ietf.org/doc/html/rfc3986/#section-3.2.1
/// [`Display`]: core::fmt::Display
/// [`Debug`]: core::fmt::Debug
#[derive(RefCastCustom, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Userinfo {
    inner: str,
}

impl Userinfo {
    #[ref_cast_custom]
    pub(crate) const fn new(s: &str) -> &Self;

    /// Returns the userinfo as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Returns the encoded user name, i.e., everything before the first `':'`.
    #[must_use]
    pub fn user(&self) -> &str {
        self.inner
            .split_once(':')
            .map_or(&self.inner, |(user, _)| user)
    }

    /// Returns the encoded password, i.e., everything after the first `':'`.
    #[must_use]
    pub fn password(&self) -> Option<&str> {
        self.inner.split_once(':').map(|(_, password)| password)
    }

    /// Decodes the user name and the password.
    ///
    /// See [`unescape_userinfo`].
    ///
    /// # Errors
    ///
    /// Returns `Err` if either part contains an invalid escape.
    pub fn decode(&self) -> Result<(String, String), EscapeError> {
        unescape_userinfo(&self.inner)
    }
}

/// Escapes a user name and a password and joins them with `':'`.
///
/// `'@'`, `'/'` and `':'` are escaped along with everything outside the
/// unreserved and reserved sets. The `':'` is left out when the password
/// is empty.
///
/// # Examples
///
/// ```
/// use urlref::escape_userinfo;
///
/// assert_eq!(escape_userinfo("user", "password"), "user:password");
/// assert_eq!(escape_userinfo("foo:bar", "@/"), "foo%3abar:%40%2f");
/// assert_eq!(escape_userinfo("john doe", ""), "john%20doe");
/// ```
#[must_use]
pub fn escape_userinfo(user: &str, password: &str) -> String {
    let mut buf = String::with_capacity(user.len() + password.len() + 1);
    pct_enc::encode_to::<encoder::Userinfo>(user, &mut buf);
    if !password.is_empty() {
        buf.push(':');
        pct_enc::encode_to::<encoder::Userinfo>(password, &mut buf);
    }
    buf
}

/// Splits a raw userinfo on its first `':'` and decodes both parts.
///
/// The password is empty when there is no `':'`.
///
/// # Errors
///
/// Returns `Err` if either part contains an invalid escape. The error
/// index is relative to `raw`.
///
/// # Examples
///
/// ```
/// use urlref::unescape_userinfo;
///
/// let (user, password) = unescape_userinfo("foo%3abar:%40%2f")?;
/// assert_eq!(user, "foo:bar");
/// assert_eq!(password, "@/");
/// # Ok::<_, urlref::EscapeError>(())
/// ```
pub fn unescape_userinfo(raw: &str) -> Result<(String, String), EscapeError> {
    let (user, password) = raw.split_once(':').unwrap_or((raw, ""));
    let user = pct_enc::decode::<encoder::Userinfo>(user)?.into_owned();
    let password = pct_enc::decode::<encoder::Userinfo>(password)
        .map_err(|e| e.offset(user_len(raw)))?
        .into_owned();
    Ok((user, password))
}

fn user_len(raw: &str) -> usize {
    raw.find(':').map_or(raw.len(), |i| i + 1)
}
