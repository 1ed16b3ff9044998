use crate::{
    component::Authority,
    pct_enc::{decode, encoder, table, EscapeError},
    url::{Kind, Url},
};
use alloc::string::String;

/// The component in which a [`ParseError`] occurred.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Component {
    /// The path, including an opaque path.
    Path,
    /// The fragment.
    Fragment,
}

/// An error occurred when parsing a URL (reference).
///
/// Only an invalid escape in the path or the fragment is an error. A missing
/// scheme or authority, extra slashes or an empty input are not.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseError {
    pub(crate) component: Component,
    pub(crate) source: EscapeError,
}

impl ParseError {
    /// Returns the component containing the invalid escape.
    #[must_use]
    pub fn component(&self) -> Component {
        self.component
    }

    /// Returns the index of the `'%'` of the invalid escape in the input string.
    #[must_use]
    pub fn index(&self) -> usize {
        self.source.index()
    }

    /// Returns the underlying decoding error.
    #[must_use]
    pub fn escape_error(&self) -> &EscapeError {
        &self.source
    }
}

#[cfg(feature = "impl-error")]
impl crate::Error for ParseError {
    fn source(&self) -> Option<&(dyn crate::Error + 'static)> {
        Some(&self.source)
    }
}

type Result<T> = core::result::Result<T, ParseError>;

/// Decodes a component that starts at `offset` in the input.
fn decode_at<E: encoder::Encoder>(
    s: &str,
    offset: usize,
    component: Component,
) -> Result<String> {
    decode::<E>(s)
        .map(|s| s.into_owned())
        .map_err(|e| ParseError {
            component,
            source: e.offset(offset),
        })
}

/// Returns the index of the colon ending the scheme, if there is a scheme.
///
/// A colon directly followed by a digit reads as a port, so there is
/// no scheme in that case.
fn scan_scheme(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    if !bytes.first().map_or(false, u8::is_ascii_alphabetic) {
        return None;
    }
    let i = bytes.iter().position(|&x| !table::SCHEME.allows(x))?;
    if bytes[i] != b':' || bytes.get(i + 1).map_or(false, u8::is_ascii_digit) {
        return None;
    }
    Some(i)
}

pub(crate) fn parse(raw: &str, allow_fragment: bool) -> Result<Url> {
    let (scheme, rest) = match scan_scheme(raw) {
        Some(i) => (Some(&raw[..i]), &raw[i + 1..]),
        None => (None, raw),
    };
    let offset = |s: &str| raw.len() - s.len();

    if let Some(scheme) = scheme {
        if !rest.starts_with('/') {
            // An opaque path runs to the end, question and number signs included.
            let path = decode_at::<encoder::Path>(rest, offset(rest), Component::Path)?;
            return Ok(Url {
                raw: raw.into(),
                kind: Kind::Opaque {
                    scheme: scheme.into(),
                },
                raw_path: rest.into(),
                path,
                query: None,
                fragment: None,
            });
        }
    }

    let is_delim = |x: u8| x == b'?' || (allow_fragment && x == b'#');

    // Without a scheme, "//" only starts an authority if something other
    // than a delimiter follows, so "///path" stays a path.
    let has_authority = rest.starts_with("//")
        && (scheme.is_some()
            || rest
                .as_bytes()
                .get(2)
                .map_or(false, |&x| x != b'/' && !is_delim(x)));

    let (authority, tail) = if has_authority {
        let rest = &rest[2..];
        let end = rest
            .bytes()
            .position(|x| x == b'/' || is_delim(x))
            .unwrap_or(rest.len());
        (Some(Authority::new(&rest[..end])), &rest[end..])
    } else {
        (None, rest)
    };

    let path_end = tail.bytes().position(|x| is_delim(x)).unwrap_or(tail.len());
    let (raw_path_only, mut rem) = tail.split_at(path_end);
    let path = decode_at::<encoder::Path>(raw_path_only, offset(tail), Component::Path)?;

    let mut query = None;
    if let Some(q) = rem.strip_prefix('?') {
        let end = if allow_fragment {
            q.find('#').unwrap_or(q.len())
        } else {
            q.len()
        };
        query = Some(q[..end].into());
        rem = &q[end..];
    }

    let mut fragment = None;
    if let Some(f) = rem.strip_prefix('#') {
        fragment = Some(decode_at::<encoder::Fragment>(f, offset(f), Component::Fragment)?);
    }

    let kind = match (scheme, authority) {
        (Some(scheme), authority) => Kind::Hierarchical {
            scheme: scheme.into(),
            authority,
        },
        (None, Some(authority)) => Kind::NetworkPath { authority },
        (None, None) => Kind::PathReference,
    };

    Ok(Url {
        raw: raw.into(),
        kind,
        raw_path: tail.into(),
        path,
        query,
        fragment,
    })
}
