//! Percent-encoders for URL components.

use super::table::{self, Table};

/// A trait used by [`encode`] and [`decode`] to specify the escaping mode.
///
/// [`encode`]: super::encode
/// [`decode`]: super::decode
pub trait Encoder: Send + Sync + 'static {
    /// The table of bytes left unescaped.
    const TABLE: Table;

    /// Whether a space is written as `'+'`, and `'+'` read back as a space.
    const SPACE_AS_PLUS: bool = false;
}

/// An encoder for hierarchical paths.
#[derive(Clone, Copy, Debug)]
pub struct Path(());

/// An encoder for the user name and password of the userinfo.
#[derive(Clone, Copy, Debug)]
pub struct Userinfo(());

/// An encoder for form-style query keys and values.
#[derive(Clone, Copy, Debug)]
pub struct QueryComponent(());

/// An encoder for the fragment.
#[derive(Clone, Copy, Debug)]
pub struct Fragment(());

/// An encoder for opaque paths.
#[derive(Clone, Copy, Debug)]
pub struct Opaque(());

impl Encoder for Path {
    const TABLE: Table = table::PATH;
}

impl Encoder for Userinfo {
    const TABLE: Table = table::USERINFO;
}

impl Encoder for QueryComponent {
    const TABLE: Table = table::QUERY_COMPONENT;
    const SPACE_AS_PLUS: bool = true;
}

impl Encoder for Fragment {
    const TABLE: Table = table::FRAGMENT;
}

impl Encoder for Opaque {
    const TABLE: Table = table::OPAQUE;
}
