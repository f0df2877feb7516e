//! Rhyme trie: pronunciations stored reversed (word ending first), each node
//! holding the words whose whole reversed pronunciation ends there.
//!
//! Nodes live in an arena and refer to each other by [`NodeId`]. A node owns
//! its children through the arena; the parent link is a plain index used
//! only to rebuild a node's path.

mod node;
mod search;

pub use node::{Assemble, NodeRef, SubWords};

use std::collections::{BTreeSet, HashMap};

use tracing::{debug_span, warn};

use crate::context::PhoneticContext;
use crate::phone::Phone;
use crate::QueryError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    pub const ROOT: NodeId = NodeId(0);

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug)]
struct RhymeTrieNode {
    phone: Option<Phone>,
    parent: Option<NodeId>,
    children: HashMap<Phone, NodeId>,
    words: BTreeSet<String>,
}

impl RhymeTrieNode {
    fn new(phone: Option<Phone>, parent: Option<NodeId>) -> Self {
        Self {
            phone,
            parent,
            children: HashMap::new(),
            words: BTreeSet::new(),
        }
    }
}

#[derive(Debug)]
pub struct RhymeTrie {
    nodes: Vec<RhymeTrieNode>,
}

impl Default for RhymeTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl RhymeTrie {
    pub fn new() -> Self {
        Self {
            nodes: vec![RhymeTrieNode::new(None, None)],
        }
    }

    /// Index every pronunciation of the context's lexicon, reversed. Words
    /// without phones are skipped so that the root never holds a word.
    pub fn build(ctx: &PhoneticContext) -> Result<Self, QueryError> {
        let _span = debug_span!("build_rhyme_trie").entered();
        let taxonomy = ctx.taxonomy();
        let mut trie = Self::new();
        let mut skipped = 0u64;
        for (word, labels) in ctx.lexicon().pronunciations.iter() {
            if labels.is_empty() {
                warn!(word, "pronunciation without phones, not indexed");
                skipped += 1;
                continue;
            }
            let reversed = labels
                .iter()
                .rev()
                .map(|label| taxonomy.phone(label))
                .collect::<Result<Vec<_>, _>>()?;
            trie.insert(&reversed, word);
        }
        tracing::debug!(
            nodes = trie.count_nodes(),
            words = trie.count_words(),
            skipped,
            "rhyme trie built"
        );
        Ok(trie)
    }

    /// Walk or create the chain for `reversed_phones` and record the
    /// lower-cased word at its end. Re-inserting a pair is a no-op.
    pub fn insert(&mut self, reversed_phones: &[Phone], word: &str) -> NodeId {
        let mut id = NodeId::ROOT;
        for phone in reversed_phones {
            id = match self.nodes[id.index()].children.get(phone) {
                Some(&child) => child,
                None => {
                    let child = NodeId(self.nodes.len() as u32);
                    self.nodes
                        .push(RhymeTrieNode::new(Some(phone.clone()), Some(id)));
                    self.nodes[id.index()]
                        .children
                        .insert(phone.clone(), child);
                    child
                }
            };
        }
        self.nodes[id.index()].words.insert(word.to_lowercase());
        id
    }

    pub fn root(&self) -> NodeRef<'_> {
        NodeRef::new(self, NodeId::ROOT)
    }

    /// Handle for `id`, or `None` when `id` is out of range for this trie.
    pub fn node(&self, id: NodeId) -> Option<NodeRef<'_>> {
        (id.index() < self.nodes.len()).then(|| NodeRef::new(self, id))
    }

    /// Exact walk from the root. `None` unless every phone is consumed.
    pub fn search<P: AsRef<str>>(&self, phones: &[P]) -> Option<NodeRef<'_>> {
        self.root().search(phones)
    }

    /// Like [`search`](Self::search), but the reached node must hold words.
    pub fn contains<P: AsRef<str>>(&self, phones: &[P]) -> bool {
        self.search(phones).is_some_and(|node| node.has_words())
    }

    pub fn count_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn count_words(&self) -> usize {
        self.nodes.iter().map(|n| n.words.len()).sum()
    }

    fn child(&self, id: NodeId, label: &str) -> Option<NodeId> {
        self.nodes[id.index()].children.get(label).copied()
    }
}
