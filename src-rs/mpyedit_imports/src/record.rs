//! The import record tree built from scanning source text.

use indexmap::IndexMap;

/// One name in an import record.
///
/// A node is `imported` when its exact dotted path was the target of an
/// import statement. A node that is not `imported` is merely an ancestor
/// package of something imported: `from microbit import display` records
/// `microbit` as an unmarked node with a marked child `display`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportNode {
    imported: bool,
    children: IndexMap<String, ImportNode>,
}

impl ImportNode {
    /// Returns whether this exact path was the target of an import
    /// statement.
    #[must_use]
    pub const fn is_imported(&self) -> bool {
        self.imported
    }

    /// Returns the names nested under this node, in first-insertion order.
    pub fn children(&self) -> impl Iterator<Item = (&str, &Self)> {
        self.children.iter().map(|(name, node)| (name.as_str(), node))
    }

    /// Returns the child node with the given name, if present.
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&Self> {
        self.children.get(name)
    }

    /// Returns whether any names are nested under this node.
    #[must_use]
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Returns the child node with the given name, creating an unmarked
    /// node if it does not exist yet.
    pub(crate) fn child_entry(&mut self, name: &str) -> &mut Self {
        self.children.entry(name.to_owned()).or_default()
    }

    /// Marks this node as the target of an import statement.
    ///
    /// Marking is sticky: nothing in a scan ever unmarks a node.
    pub(crate) const fn mark_imported(&mut self) {
        self.imported = true;
    }
}

/// The result of scanning source text for import statements.
///
/// The record is a tree of [`ImportNode`]s keyed by module name, one
/// top-level entry per imported top-level module. It is built fresh per
/// scan and never modified afterwards. Key order is the order in which the
/// scan first saw each name, so the same source always yields the same
/// record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportRecord {
    root: ImportNode,
}

impl ImportRecord {
    /// Returns whether the scan found no import statements at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.root.has_children()
    }

    /// Returns the number of top-level modules in the record.
    #[must_use]
    pub fn len(&self) -> usize {
        self.root.children.len()
    }

    /// Returns the top-level modules of the record, in first-insertion
    /// order.
    pub fn modules(&self) -> impl Iterator<Item = (&str, &ImportNode)> {
        self.root.children()
    }

    /// Returns the top-level module with the given name, if present.
    #[must_use]
    pub fn module(&self, name: &str) -> Option<&ImportNode> {
        self.root.child(name)
    }

    /// Returns whether a top-level module with the given name is present.
    #[must_use]
    pub fn contains_module(&self, name: &str) -> bool {
        self.module(name).is_some()
    }

    /// Returns the root node the scanner builds the record under.
    pub(crate) const fn root_mut(&mut self) -> &mut ImportNode {
        &mut self.root
    }
}
