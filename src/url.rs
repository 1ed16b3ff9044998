use crate::{
    component::{Authority, Userinfo},
    parse::{self, ParseError},
};
use alloc::string::String;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// The shape of a URL: which of scheme and authority it has,
/// and whether its path is opaque.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) enum Kind {
    Hierarchical {
        scheme: String,
        authority: Option<Authority>,
    },
    Opaque {
        scheme: String,
    },
    NetworkPath {
        authority: Authority,
    },
    PathReference,
}

impl Kind {
    /// Picks the shape for a scheme, an authority and a decoded path.
    pub(crate) fn new(scheme: Option<&str>, authority: Option<Authority>, path: &str) -> Self {
        match (scheme, authority) {
            (Some(scheme), None) if !path.starts_with('/') => Kind::Opaque {
                scheme: scheme.into(),
            },
            (Some(scheme), authority) => Kind::Hierarchical {
                scheme: scheme.into(),
                authority,
            },
            (None, Some(authority)) => Kind::NetworkPath { authority },
            (None, None) => Kind::PathReference,
        }
    }
}

/// A borrowed view of the shape of a [`Url`].
///
/// # Examples
///
/// ```
/// use urlref::{Form, Url};
///
/// let url = Url::parse("mailto:webmaster@golang.org")?;
/// assert_eq!(url.form(), Form::Opaque { scheme: "mailto" });
///
/// let url = Url::parse("///threeslashes")?;
/// assert_eq!(url.form(), Form::PathReference);
/// # Ok::<_, urlref::ParseError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Form<'a> {
    /// A scheme followed by an authority, a path starting with `'/'`, or both.
    Hierarchical {
        /// The scheme.
        scheme: &'a str,
        /// The authority, if any.
        authority: Option<&'a Authority>,
    },
    /// A scheme followed by an opaque path, which is empty or
    /// does not start with `'/'`.
    Opaque {
        /// The scheme.
        scheme: &'a str,
    },
    /// An authority without a scheme, as in `//example.com/path`.
    NetworkPath {
        /// The authority.
        authority: &'a Authority,
    },
    /// Neither a scheme nor an authority.
    PathReference,
}

/// A parsed URL or URL reference.
///
/// A `Url` is created by [`parse`], [`parse_reference`] or [`resolve`], and
/// never changes afterwards apart from [`clean_for_request`].
///
/// The accessors give a flat view of the components in which a missing
/// component reads as an empty string. Use [`form`], [`query`] and
/// [`fragment_opt`] when presence matters.
///
/// [`parse`]: Self::parse
/// [`parse_reference`]: Self::parse_reference
/// [`resolve`]: Self::resolve
/// [`clean_for_request`]: Self::clean_for_request
/// [`form`]: Self::form
/// [`query`]: Self::query
/// [`fragment_opt`]: Self::fragment_opt
///
/// # Examples
///
/// ```
/// use urlref::Url;
///
/// let url = Url::parse("http://www.google.com/file%20one%26two")?;
/// assert_eq!(url.scheme(), "http");
/// assert_eq!(url.host(), "www.google.com");
/// assert_eq!(url.raw_path(), "/file%20one%26two");
/// assert_eq!(url.path(), "/file one&two");
/// assert_eq!(url.to_string(), "http://www.google.com/file%20one&two");
/// # Ok::<_, urlref::ParseError>(())
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Url {
    pub(crate) raw: String,
    pub(crate) kind: Kind,
    pub(crate) raw_path: String,
    pub(crate) path: String,
    pub(crate) query: Option<String>,
    pub(crate) fragment: Option<String>,
}

impl Url {
    /// Parses a URL, leaving `'#'` without special meaning.
    ///
    /// A `'#'` and whatever follows it stay in the component that holds
    /// that text, usually the path or the query.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the path contains an invalid escape.
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        parse::parse(raw, false)
    }

    /// Parses a URL reference, splitting off the fragment after the first `'#'`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the path or the fragment contains an invalid escape.
    ///
    /// # Examples
    ///
    /// ```
    /// use urlref::Url;
    ///
    /// let url = Url::parse_reference("http://www.google.com/?q=go+language#foo%26bar")?;
    /// assert_eq!(url.raw_query(), "q=go+language");
    /// assert_eq!(url.fragment(), "foo&bar");
    ///
    /// let url = Url::parse("http://www.google.com/?q=go+language#foo%26bar")?;
    /// assert_eq!(url.raw_query(), "q=go+language#foo%26bar");
    /// assert_eq!(url.fragment(), "");
    /// # Ok::<_, urlref::ParseError>(())
    /// ```
    pub fn parse_reference(raw: &str) -> Result<Self, ParseError> {
        parse::parse(raw, true)
    }

    /// Creates a URL from components produced by resolution.
    pub(crate) fn from_parts(
        kind: Kind,
        path: String,
        query: Option<String>,
        fragment: Option<String>,
    ) -> Self {
        let mut url = Url {
            raw: String::new(),
            kind,
            raw_path: String::new(),
            path,
            query,
            fragment,
        };
        let mut raw_path = String::with_capacity(url.path.len());
        url.write_path(&mut raw_path);
        if let Some(query) = &url.query {
            raw_path.push('?');
            raw_path.push_str(query);
        }
        url.raw_path = raw_path;
        url
    }

    /// Returns the input string this URL was parsed from.
    ///
    /// This is empty for a URL produced by [`resolve`](Self::resolve).
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Returns the shape of this URL.
    #[must_use]
    pub fn form(&self) -> Form<'_> {
        match &self.kind {
            Kind::Hierarchical { scheme, authority } => Form::Hierarchical {
                scheme: scheme.as_str(),
                authority: authority.as_ref(),
            },
            Kind::Opaque { scheme } => Form::Opaque {
                scheme: scheme.as_str(),
            },
            Kind::NetworkPath { authority } => Form::NetworkPath { authority },
            Kind::PathReference => Form::PathReference,
        }
    }

    /// Returns the scheme, if any.
    #[must_use]
    pub fn scheme_opt(&self) -> Option<&str> {
        match &self.kind {
            Kind::Hierarchical { scheme, .. } | Kind::Opaque { scheme } => Some(scheme.as_str()),
            _ => None,
        }
    }

    /// Returns the scheme, or an empty string if there is none.
    ///
    /// The scheme is returned as written; compare it with
    /// [`eq_ignore_ascii_case`](str::eq_ignore_ascii_case).
    #[must_use]
    pub fn scheme(&self) -> &str {
        self.scheme_opt().unwrap_or_default()
    }

    /// Returns the authority, if any.
    ///
    /// The authority may be present but empty, as in `file:///etc/hosts`.
    #[must_use]
    pub fn authority(&self) -> Option<&Authority> {
        match &self.kind {
            Kind::Hierarchical { authority, .. } => authority.as_ref(),
            Kind::NetworkPath { authority } => Some(authority),
            _ => None,
        }
    }

    /// Returns the authority as written, or an empty string if there is none.
    #[must_use]
    pub fn raw_authority(&self) -> &str {
        self.authority().map_or("", Authority::as_str)
    }

    /// Returns the userinfo, if any.
    #[must_use]
    pub fn userinfo(&self) -> Option<&Userinfo> {
        self.authority().and_then(Authority::userinfo)
    }

    /// Returns the userinfo as written, or an empty string if there is none.
    #[must_use]
    pub fn raw_userinfo(&self) -> &str {
        self.userinfo().map_or("", Userinfo::as_str)
    }

    /// Returns the host as written, or an empty string if there is no authority.
    #[must_use]
    pub fn host(&self) -> &str {
        self.authority().map_or("", Authority::host)
    }

    /// Returns everything after the scheme and the authority, as written.
    ///
    /// Unlike [`path`](Self::path), this includes the query and, for a
    /// reference, the fragment.
    #[must_use]
    pub fn raw_path(&self) -> &str {
        &self.raw_path
    }

    /// Returns the decoded path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Checks whether the path is opaque, i.e., there is a scheme but no
    /// authority and the path does not start with `'/'`.
    ///
    /// No query is split off an opaque path.
    #[must_use]
    pub fn opaque_path(&self) -> bool {
        matches!(self.kind, Kind::Opaque { .. })
    }

    /// Returns the query, if any.
    ///
    /// The query is never decoded.
    #[must_use]
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// Returns the query, or an empty string if there is none.
    #[must_use]
    pub fn raw_query(&self) -> &str {
        self.query().unwrap_or_default()
    }

    /// Returns the decoded fragment, if any.
    ///
    /// Only [`parse_reference`](Self::parse_reference) splits off a fragment.
    #[must_use]
    pub fn fragment_opt(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    /// Returns the decoded fragment, or an empty string if there is none.
    #[must_use]
    pub fn fragment(&self) -> &str {
        self.fragment_opt().unwrap_or_default()
    }

    /// Prepares a parsed request target for forwarding by dropping its authority.
    ///
    /// The authority, and with it the userinfo and the host, is cleared.
    /// Without a scheme, a leading `"//authority"` was never an authority to
    /// begin with but the start of the path, so it is put back there.
    ///
    /// # Examples
    ///
    /// ```
    /// use urlref::Url;
    ///
    /// let mut url = Url::parse("//user@foo/bar/")?;
    /// assert_eq!(url.raw_userinfo(), "user");
    ///
    /// url.clean_for_request();
    /// assert_eq!(url.raw_authority(), "");
    /// assert_eq!(url.host(), "");
    /// assert_eq!(url.path(), "//user@foo/bar/");
    ///
    /// let mut url = Url::parse("http://foo/bar?x")?;
    /// url.clean_for_request();
    /// assert_eq!(url.to_string(), "http:/bar?x");
    /// # Ok::<_, urlref::ParseError>(())
    /// ```
    ///
    /// The path is never touched when there is a scheme. So a URL like
    /// `http://foo`, whose path is empty, is left with the scheme alone and
    /// displays as `"http:"`, which parses back as an empty opaque path.
    pub fn clean_for_request(&mut self) {
        match core::mem::replace(&mut self.kind, Kind::PathReference) {
            Kind::Hierarchical { scheme, .. } => {
                self.kind = Kind::Hierarchical {
                    scheme,
                    authority: None,
                };
            }
            Kind::NetworkPath { authority } => {
                let prefix = ["//", authority.as_str()].concat();
                self.raw_path.insert_str(0, &prefix);
                self.path.insert_str(0, &prefix);
            }
            kind => self.kind = kind,
        }
    }
}

impl FromStr for Url {
    type Err = ParseError;

    /// Equivalent to [`Url::parse`].
    fn from_str(s: &str) -> Result<Self, ParseError> {
        Url::parse(s)
    }
}

#[cfg(feature = "serde")]
impl Serialize for Url {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // The password is kept so that deserializing gives the same URL back.
        serializer.collect_str(&crate::fmt::Unmasked(self))
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Url {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Url::parse_reference(&s).map_err(|e| {
            de::Error::custom(format_args!("failed to parse {s:?} as URL reference: {e}"))
        })
    }
}
