//! Module for reference resolution.

use crate::{
    log::trace,
    path::{remove_dot_segments, split_root, DotSegments},
    url::{Kind, Url},
};
use alloc::string::String;

/// An error occurred when resolving a URL reference.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ResolveError {
    /// A `".."` segment climbed above the root of the path.
    PathUnderflow,
}

#[cfg(feature = "impl-error")]
impl crate::Error for ResolveError {}

/// A configurable URL reference resolver against a fixed base.
///
/// # Examples
///
/// ```
/// use urlref::{resolve::{ResolveError, Resolver}, Url};
///
/// let base = Url::parse("http://foo.com/bar/baz")?;
/// let resolver = Resolver::with_base(&base);
/// let r = Url::parse_reference("../../quux")?;
/// assert_eq!(resolver.resolve(&r).unwrap().to_string(), "http://foo.com/quux");
///
/// let resolver = resolver.allow_path_underflow(false);
/// assert_eq!(resolver.resolve(&r).unwrap_err(), ResolveError::PathUnderflow);
/// # Ok::<_, urlref::ParseError>(())
/// ```
#[derive(Clone, Copy, Debug)]
#[must_use]
pub struct Resolver<'a> {
    base: &'a Url,
    allow_path_underflow: bool,
}

impl<'a> Resolver<'a> {
    /// Creates a new `Resolver` with the given base.
    pub fn with_base(base: &'a Url) -> Self {
        Self {
            base,
            allow_path_underflow: true,
        }
    }

    /// Sets whether to allow underflow in path resolution.
    ///
    /// This defaults to `true`, in which case a `".."` segment above the
    /// root is dropped. With `false`, it fails the resolution instead.
    pub fn allow_path_underflow(mut self, value: bool) -> Self {
        self.allow_path_underflow = value;
        self
    }

    /// Resolves the given reference against the configured base.
    ///
    /// See [`Url::resolve`] for the exact behavior of this method.
    ///
    /// # Errors
    ///
    /// Returns `Err` if an underflow occurred in path resolution when
    /// [`allow_path_underflow`] is set to `false`.
    ///
    /// [`allow_path_underflow`]: Self::allow_path_underflow
    pub fn resolve(&self, reference: &Url) -> Result<Url, ResolveError> {
        let (url, underflowed) = resolve(self.base, reference);
        if underflowed && !self.allow_path_underflow {
            return Err(ResolveError::PathUnderflow);
        }
        Ok(url)
    }
}

impl Url {
    /// Resolves a reference against this URL as the base, yielding a new URL.
    ///
    /// - A reference with a scheme wins outright; only the dot segments are
    ///   removed from its path if it starts with `'/'`.
    /// - A reference with an authority keeps the scheme of the base.
    /// - A reference whose path starts with `'/'` keeps the scheme and the
    ///   authority of the base.
    /// - Otherwise the reference path is merged onto the directory of the
    ///   base path, and an empty reference path keeps the base path. The
    ///   query of the base is kept if the reference has none.
    ///
    /// The fragment always comes from the reference. A `".."` segment that
    /// would climb above the root is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use urlref::Url;
    ///
    /// let base = Url::parse_reference("http://foo.com/bar/baz")?;
    ///
    /// let r = Url::parse_reference("../../../../../quux")?;
    /// assert_eq!(base.resolve(&r).to_string(), "http://foo.com/quux");
    ///
    /// let r = Url::parse_reference("./..#top")?;
    /// assert_eq!(base.resolve(&r).to_string(), "http://foo.com/#top");
    /// # Ok::<_, urlref::ParseError>(())
    /// ```
    #[must_use]
    pub fn resolve(&self, reference: &Url) -> Url {
        resolve(self, reference).0
    }
}

/// Resolves `r` against `base`, also reporting whether the path underflowed.
pub(crate) fn resolve(base: &Url, r: &Url) -> (Url, bool) {
    let mut underflowed = false;
    let mut remove_dots = |path: &str| -> String {
        if path.starts_with('/') {
            let (path, u) = remove_dot_segments(path, false);
            underflowed |= u;
            path
        } else {
            path.into()
        }
    };

    let (scheme, authority, path, query);
    if let Some(r_scheme) = r.scheme_opt() {
        trace!("resolving {:?}: absolute reference", r.raw());
        scheme = Some(r_scheme);
        authority = r.authority().cloned();
        path = remove_dots(r.path());
        query = r.query.clone();
    } else if let Some(r_authority) = r.authority() {
        trace!("resolving {:?}: network-path reference", r.raw());
        scheme = base.scheme_opt();
        authority = Some(r_authority.clone());
        path = remove_dots(r.path());
        query = r.query.clone();
    } else if r.raw_path().starts_with('/') {
        trace!("resolving {:?}: absolute-path reference", r.raw());
        scheme = base.scheme_opt();
        authority = base.authority().cloned();
        path = remove_dots(r.path());
        query = r.query.clone();
    } else if r.path().is_empty() {
        trace!("resolving {:?}: same-document reference", r.raw());
        scheme = base.scheme_opt();
        authority = base.authority().cloned();
        path = base.path.clone();
        query = r.query.clone().or_else(|| base.query.clone());
    } else {
        trace!("resolving {:?}: relative-path reference", r.raw());
        scheme = base.scheme_opt();
        authority = base.authority().cloned();

        // An empty base path under an authority stands for "/".
        let (absolute, base_path) = match (authority.is_some(), base.path()) {
            (true, "") => (true, ""),
            (_, base_path) => split_root(base_path),
        };
        let mut segs = DotSegments::new(absolute, false);
        segs.seed(base_path);
        segs.extend(r.path());
        underflowed |= segs.underflowed();
        path = segs.finish();
        query = r.query.clone().or_else(|| base.query.clone());
    }

    // Without an authority, a path starting with "//" would read back as one.
    let path = if authority.is_none() && path.starts_with("//") {
        ["/.", &path].concat()
    } else {
        path
    };

    let kind = Kind::new(scheme, authority, &path);
    let url = Url::from_parts(kind, path, query, r.fragment.clone());
    (url, underflowed)
}
