//! Catalog node shapes for the MicroPython API surface.

use indexmap::IndexMap;

/// One node of an API catalog.
///
/// The catalogs are hand-authored static trees at most three levels deep:
/// a module holds classes or submodules, which hold member names. Member
/// names are plain strings because nothing is ever nested under them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiNode {
    /// A leaf module or class listing its members (functions, constants).
    Members(&'static [&'static str]),
    /// A composite module mapping submodule or class names to their nodes.
    Submodules(IndexMap<&'static str, ApiNode>),
    /// A name with nothing enumerable under it, such as a module-level
    /// function that takes arguments.
    Bare,
}

impl ApiNode {
    /// Returns the node one level down under `name`, if there is one.
    ///
    /// Member names have no node of their own, so descending into a
    /// [`ApiNode::Members`] list always returns `None`.
    #[must_use]
    pub fn submodule(&self, name: &str) -> Option<&Self> {
        match self {
            Self::Submodules(submodules) => submodules.get(name),
            Self::Members(_) | Self::Bare => None,
        }
    }

    /// Returns whether `name` sits directly under this node, either as a
    /// submodule or as a listed member.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        match self {
            Self::Members(members) => members.contains(&name),
            Self::Submodules(submodules) => submodules.contains_key(name),
            Self::Bare => false,
        }
    }
}
