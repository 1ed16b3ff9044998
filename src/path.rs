//! Dot-segment removal.

use alloc::{string::String, vec::Vec};

/// A stack of path segments that `"."` and `".."` segments are applied to.
///
/// The same stack backs both [`canonical_path`] and the path merge of
/// reference resolution. The two differ only in how they start (empty, or
/// seeded with the directory of a base path) and in what happens to a `".."`
/// with nothing left to remove.
pub(crate) struct DotSegments<'a> {
    absolute: bool,
    keep_underflow: bool,
    underflowed: bool,
    stack: Vec<&'a str>,
}

impl<'a> DotSegments<'a> {
    /// Creates an empty stack.
    ///
    /// With `keep_underflow`, a `".."` that finds nothing to remove is kept
    /// as a literal segment. Otherwise it is dropped.
    pub(crate) fn new(absolute: bool, keep_underflow: bool) -> Self {
        Self {
            absolute,
            keep_underflow,
            underflowed: false,
            stack: Vec::new(),
        }
    }

    /// Pushes the directory part of a path, i.e., every segment but the last.
    ///
    /// A leading `'/'` must already be stripped.
    pub(crate) fn seed(&mut self, path: &'a str) {
        if let Some((dir, _)) = path.rsplit_once('/') {
            for seg in dir.split('/') {
                self.push(seg, false);
            }
        }
    }

    /// Pushes every segment of a relative path.
    pub(crate) fn extend(&mut self, path: &'a str) {
        let mut segs = path.split('/').peekable();
        while let Some(seg) = segs.next() {
            self.push(seg, segs.peek().is_none());
        }
    }

    fn push(&mut self, seg: &'a str, last: bool) {
        match seg {
            "." => {
                if last {
                    self.stack.push("");
                }
            }
            ".." => match self.stack.last() {
                Some(&top) if top != ".." => {
                    self.stack.pop();
                    if last {
                        self.stack.push("");
                    }
                }
                _ => {
                    self.underflowed = true;
                    if self.keep_underflow {
                        self.stack.push("..");
                    } else if last {
                        self.stack.push("");
                    }
                }
            },
            _ => self.stack.push(seg),
        }
    }

    /// Whether a `".."` segment found nothing to remove.
    pub(crate) fn underflowed(&self) -> bool {
        self.underflowed
    }

    pub(crate) fn finish(self) -> String {
        let len = self.stack.iter().map(|seg| seg.len() + 1).sum::<usize>();
        let mut buf = String::with_capacity(len + 1);
        if self.absolute {
            buf.push('/');
        }
        for (i, seg) in self.stack.iter().enumerate() {
            if i > 0 {
                buf.push('/');
            }
            buf.push_str(seg);
        }
        buf
    }
}

/// Splits off the leading `'/'` of a path.
pub(crate) fn split_root(path: &str) -> (bool, &str) {
    match path.strip_prefix('/') {
        Some(rest) => (true, rest),
        None => (false, path),
    }
}

/// Removes the dot segments from a path, keeping or dropping a `".."`
/// that climbs above the first segment.
pub(crate) fn remove_dot_segments(path: &str, keep_underflow: bool) -> (String, bool) {
    let (absolute, rest) = split_root(path);
    let mut segs = DotSegments::new(absolute, keep_underflow);
    if !rest.is_empty() {
        segs.extend(rest);
    }
    let underflowed = segs.underflowed();
    (segs.finish(), underflowed)
}

/// Simplifies a path by removing `"."` and `".."` segments.
///
/// The path is taken as already decoded. Empty segments are kept, so a
/// trailing slash survives, and a path ending in a dot segment gains one.
/// A `".."` with no segment left to remove is kept, for absolute paths too.
///
/// # Examples
///
/// ```
/// use urlref::canonical_path;
///
/// assert_eq!(canonical_path("a/b/g/../.."), "a/");
/// assert_eq!(canonical_path("../.././a"), "../../a");
/// assert_eq!(canonical_path("/../a/b/../../../"), "/../../");
/// assert_eq!(canonical_path("."), "");
/// assert_eq!(canonical_path("/"), "/");
/// ```
#[must_use]
pub fn canonical_path(path: &str) -> String {
    remove_dot_segments(path, true).0
}
