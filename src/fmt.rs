use crate::{
    component::{Authority, Userinfo},
    parse::{Component, ParseError},
    pct_enc::{encode_to, encoder, EscapeError},
    resolve::ResolveError,
    url::Url,
};
use alloc::string::String;
use core::fmt::{self, Write};

const PASSWORD_MASK: &str = "******";

impl fmt::Display for EscapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid URL escape {:?}", self.escape)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let component = match self.component {
            Component::Path => "path",
            Component::Fragment => "fragment",
        };
        write!(
            f,
            "invalid URL escape {:?} in {} at index {}",
            self.source.as_str(),
            component,
            self.source.index()
        )
    }
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::PathUnderflow => "underflow in path resolution",
        };
        f.write_str(msg)
    }
}

impl Url {
    /// Writes the path, escaped for the shape of this URL.
    pub(crate) fn write_path(&self, buf: &mut String) {
        if self.opaque_path() {
            // A leading '/' would read back as a hierarchical path.
            let path = match self.path.strip_prefix('/') {
                Some(rest) => {
                    buf.push_str("%2f");
                    rest
                }
                None => self.path.as_str(),
            };
            encode_to::<encoder::Opaque>(path, buf);
        } else if self.scheme_opt().is_none() && self.authority().is_none() {
            // A ':' in the first segment would read back as ending a scheme.
            let (first, rest) = match self.path.find('/') {
                Some(i) => self.path.split_at(i),
                None => (self.path.as_str(), ""),
            };
            for (i, part) in first.split(':').enumerate() {
                if i > 0 {
                    buf.push_str("%3a");
                }
                encode_to::<encoder::Path>(part, buf);
            }
            encode_to::<encoder::Path>(rest, buf);
        } else {
            encode_to::<encoder::Path>(&self.path, buf);
        }
    }

    /// Writes the URL, masking the password if `mask` is set.
    fn write_to(&self, f: &mut fmt::Formatter<'_>, mask: bool) -> fmt::Result {
        if let Some(scheme) = self.scheme_opt() {
            f.write_str(scheme)?;
            f.write_char(':')?;
        }

        match self.authority() {
            Some(authority) if !authority.is_empty() || self.path.starts_with("//") => {
                f.write_str("//")?;
                if mask {
                    fmt::Display::fmt(authority, f)?;
                } else {
                    f.write_str(authority.as_str())?;
                }
            }
            // Left by `clean_for_request`; "//" here would read back as an authority.
            None if self.scheme_opt().is_some() && self.path.starts_with("//") => {
                f.write_str("/.")?;
            }
            _ => {}
        }

        let mut buf = String::with_capacity(self.path.len());
        self.write_path(&mut buf);
        f.write_str(&buf)?;

        if let Some(query) = self.query().filter(|q| !q.is_empty()) {
            f.write_char('?')?;
            f.write_str(query)?;
        }

        if let Some(fragment) = self.fragment_opt().filter(|s| !s.is_empty()) {
            buf.clear();
            encode_to::<encoder::Fragment>(fragment, &mut buf);
            f.write_char('#')?;
            f.write_str(&buf)?;
        }
        Ok(())
    }
}

impl fmt::Display for Url {
    /// Reconstructs the URL from its components.
    ///
    /// The path and the fragment are escaped again from their decoded forms,
    /// and the password in the userinfo is masked.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to(f, true)
    }
}

/// Displays a [`Url`] like its `Display` impl, but with the password intact.
#[cfg(feature = "serde")]
pub(crate) struct Unmasked<'a>(pub(crate) &'a Url);

#[cfg(feature = "serde")]
impl fmt::Display for Unmasked<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.write_to(f, false)
    }
}

impl fmt::Debug for Url {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Url")
            .field("scheme", &self.scheme_opt())
            .field("authority", &self.authority())
            .field("path", &self.path())
            .field("query", &self.query())
            .field("fragment", &self.fragment_opt())
            .finish()
    }
}

impl fmt::Display for Authority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(userinfo) = self.userinfo().filter(|u| !u.as_str().is_empty()) {
            fmt::Display::fmt(userinfo, f)?;
            f.write_char('@')?;
        }
        f.write_str(self.host())
    }
}

impl fmt::Debug for Authority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Authority")
            .field("userinfo", &self.userinfo())
            .field("host", &self.host())
            .finish()
    }
}

impl fmt::Display for Userinfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.user())?;
        if self.password().is_some() {
            f.write_char(':')?;
            f.write_str(PASSWORD_MASK)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Userinfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Userinfo")
            .field("user", &self.user())
            .field("password", &self.password().map(|_| PASSWORD_MASK))
            .finish()
    }
}
