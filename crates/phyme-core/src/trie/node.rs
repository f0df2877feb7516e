use std::collections::btree_set;
use std::fmt;

use super::{NodeId, RhymeTrie, RhymeTrieNode};
use crate::phone::Phone;

/// Borrowed handle to one trie node.
#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
    trie: &'a RhymeTrie,
    id: NodeId,
}

impl<'a> NodeRef<'a> {
    pub(super) fn new(trie: &'a RhymeTrie, id: NodeId) -> Self {
        Self { trie, id }
    }

    fn raw(&self) -> &'a RhymeTrieNode {
        &self.trie.nodes[self.id.index()]
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    /// `None` at the root.
    pub fn phone(&self) -> Option<&'a Phone> {
        self.raw().phone.as_ref()
    }

    pub fn parent(&self) -> Option<NodeRef<'a>> {
        self.raw().parent.map(|id| NodeRef::new(self.trie, id))
    }

    /// Words whose entire reversed pronunciation ends at this node.
    pub fn words(&self) -> impl Iterator<Item = &'a str> {
        self.raw().words.iter().map(String::as_str)
    }

    pub fn has_words(&self) -> bool {
        !self.raw().words.is_empty()
    }

    pub fn child(&self, label: &str) -> Option<NodeRef<'a>> {
        self.trie
            .child(self.id, label)
            .map(|id| NodeRef::new(self.trie, id))
    }

    pub fn children(&self) -> impl Iterator<Item = NodeRef<'a>> {
        let trie = self.trie;
        self.raw()
            .children
            .values()
            .map(move |&id| NodeRef::new(trie, id))
    }

    /// Number of phones consumed from the end of a word to reach this node.
    pub fn depth(&self) -> usize {
        self.assemble().count()
    }

    /// Exact walk starting at this node.
    pub fn search<P: AsRef<str>>(&self, phones: &[P]) -> Option<NodeRef<'a>> {
        phones
            .iter()
            .try_fold(*self, |node, phone| node.child(phone.as_ref()))
    }

    /// Words stored here and at every descendant: every word whose reversed
    /// pronunciation extends the path to this node.
    pub fn sub_words(&self) -> SubWords<'a> {
        SubWords {
            trie: self.trie,
            stack: vec![self.id],
            current: None,
        }
    }

    /// Phones from this node up to (not including) the root.
    pub fn assemble(&self) -> Assemble<'a> {
        Assemble { node: Some(*self) }
    }

    /// Nodes in this subtree, this node included.
    pub fn count_nodes(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self.id];
        while let Some(id) = stack.pop() {
            count += 1;
            stack.extend(self.trie.nodes[id.index()].children.values().copied());
        }
        count
    }

    /// Words in this subtree, this node included.
    pub fn count_words(&self) -> usize {
        self.sub_words().count()
    }
}

impl PartialEq for NodeRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.trie, other.trie) && self.id == other.id
    }
}

impl Eq for NodeRef<'_> {}

impl fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path: Vec<&str> = self.assemble().map(Phone::label).collect();
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("path", &path)
            .field("words", &self.raw().words)
            .finish()
    }
}

/// Depth-first iterator over the words of a subtree.
pub struct SubWords<'a> {
    trie: &'a RhymeTrie,
    stack: Vec<NodeId>,
    current: Option<btree_set::Iter<'a, String>>,
}

impl<'a> Iterator for SubWords<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(word) = self.current.as_mut().and_then(Iterator::next) {
                return Some(word.as_str());
            }
            let id = self.stack.pop()?;
            let node = &self.trie.nodes[id.index()];
            self.stack.extend(node.children.values().copied());
            self.current = Some(node.words.iter());
        }
    }
}

/// Walks parent links, yielding each node's phone.
pub struct Assemble<'a> {
    node: Option<NodeRef<'a>>,
}

impl<'a> Iterator for Assemble<'a> {
    type Item = &'a Phone;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.node.take()?;
        let phone = node.phone()?;
        self.node = node.parent();
        Some(phone)
    }
}
