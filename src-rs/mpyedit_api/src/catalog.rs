//! The API catalog container and the base-plus-extra merge.

use indexmap::IndexMap;

use crate::node::ApiNode;

/// A catalog of MicroPython modules, keyed by top-level module name.
///
/// Key order is the hand-authored order of the static tables. Iteration
/// and flattening follow it, so the same catalog always produces the same
/// word list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiCatalog(IndexMap<&'static str, ApiNode>);

impl ApiCatalog {
    /// Builds a catalog from top-level module entries.
    ///
    /// The catalogs are a closed, hand-authored dataset, so nothing
    /// outside this crate ever constructs one.
    pub(crate) fn new(modules: impl IntoIterator<Item = (&'static str, ApiNode)>) -> Self {
        Self(modules.into_iter().collect())
    }

    /// Returns the top-level modules of the catalog, in catalog order.
    pub fn modules(&self) -> impl Iterator<Item = (&'static str, &ApiNode)> {
        self.0.iter().map(|(name, node)| (*name, node))
    }

    /// Returns the top-level module with the given name, if present.
    #[must_use]
    pub fn module(&self, name: &str) -> Option<&ApiNode> {
        self.0.get(name)
    }

    /// Returns whether a top-level module with the given name is present.
    #[must_use]
    pub fn contains_module(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Returns the number of top-level modules in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether the catalog has no modules at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Recursively unions two catalogs key by key.
///
/// Under a shared module name, the extra catalog's entries appear as new
/// sibling keys after the base keys, preserving insertion order. The
/// datasets are hand-authored and never give one name conflicting shapes;
/// if they ever did, the extra node wins.
pub(crate) fn merge(base: &ApiCatalog, extra: &ApiCatalog) -> ApiCatalog {
    let mut merged = base.0.clone();
    for (&name, extra_node) in &extra.0 {
        match merged.get_mut(name) {
            Some(node) => merge_node(node, extra_node),
            None => {
                merged.insert(name, extra_node.clone());
            }
        }
    }
    ApiCatalog(merged)
}

fn merge_node(node: &mut ApiNode, extra: &ApiNode) {
    if let (ApiNode::Submodules(submodules), ApiNode::Submodules(extra_submodules)) =
        (&mut *node, extra)
    {
        for (&name, extra_submodule) in extra_submodules {
            match submodules.get_mut(name) {
                Some(submodule) => merge_node(submodule, extra_submodule),
                None => {
                    submodules.insert(name, extra_submodule.clone());
                }
            }
        }
    } else {
        *node = extra.clone();
    }
}
