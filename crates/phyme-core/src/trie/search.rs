use std::collections::HashSet;

use tracing::{debug, debug_span};

use super::{NodeId, NodeRef, RhymeTrie};
use crate::permutation::Permutation;
use crate::phone::{Phone, PhoneUnit, QueryPhone};
use crate::taxonomy::PhoneTaxonomy;
use crate::QueryError;

impl RhymeTrie {
    /// Every node reachable by matching `phones` (already reversed) from the
    /// root under their permutations. A node may appear more than once; use
    /// [`matching_nodes`](Self::matching_nodes) for a deduplicated set.
    pub fn search_permutations(
        &self,
        phones: &[QueryPhone],
        taxonomy: &PhoneTaxonomy,
    ) -> Result<Vec<NodeRef<'_>>, QueryError> {
        let mut found = Vec::new();
        self.visit_permutations(NodeId::ROOT, phones, taxonomy, &mut |id| {
            found.push(NodeRef::new(self, id))
        })?;
        Ok(found)
    }

    /// [`search_permutations`](Self::search_permutations) deduplicated by
    /// node identity, in first-reached order.
    pub fn matching_nodes(
        &self,
        phones: &[QueryPhone],
        taxonomy: &PhoneTaxonomy,
    ) -> Result<Vec<NodeRef<'_>>, QueryError> {
        let _span = debug_span!("matching_nodes", query_len = phones.len()).entered();
        let mut seen = HashSet::new();
        let mut found = Vec::new();
        let mut yielded = 0usize;
        self.visit_permutations(NodeId::ROOT, phones, taxonomy, &mut |id| {
            yielded += 1;
            if seen.insert(id) {
                found.push(id);
            }
        })?;
        debug!(yielded, unique = found.len());
        Ok(found.into_iter().map(|id| NodeRef::new(self, id)).collect())
    }

    /// Calls `visit` for each node reached from `start`, duplicates included.
    ///
    /// The head of `phones` decides the move:
    /// - empty sequence: `start` itself is reached;
    /// - equivalence class: each member is tried literally at this depth;
    /// - `Subtractive`: also continue with the tail at this node (phone dropped);
    /// - `Additive`: also descend into every consonant child keeping the whole
    ///   sequence (consonant inserted; repeats allow several);
    /// - otherwise, and in addition for the two cases above, descend into each
    ///   child in the permutation's candidate set with the tail.
    ///
    /// Every branch either shortens the sequence or goes one level deeper, so
    /// the walk ends within trie depth.
    fn visit_permutations<F>(
        &self,
        start: NodeId,
        phones: &[QueryPhone],
        taxonomy: &PhoneTaxonomy,
        visit: &mut F,
    ) -> Result<(), QueryError>
    where
        F: FnMut(NodeId),
    {
        let Some((head, tail)) = phones.split_first() else {
            visit(start);
            return Ok(());
        };

        match head {
            QueryPhone::Plain(PhoneUnit::Literal(phone)) => {
                self.descend(start, phone, tail, taxonomy, visit)?;
            }
            QueryPhone::Plain(PhoneUnit::EquivalenceClass(meta)) => {
                // same as searching `[member] + tail` from this node
                for member in meta.replacements() {
                    self.descend(start, member, tail, taxonomy, visit)?;
                }
            }
            QueryPhone::Permuted(permuted) => {
                match permuted.permutation {
                    Permutation::Subtractive => {
                        self.visit_permutations(start, tail, taxonomy, visit)?;
                    }
                    Permutation::Additive => {
                        for (phone, &child) in &self.nodes[start.index()].children {
                            if phone.is_consonant() {
                                self.visit_permutations(child, phones, taxonomy, visit)?;
                            }
                        }
                    }
                    _ => {}
                }
                for candidate in permuted.permutation.apply(&permuted.unit, taxonomy)? {
                    self.descend(start, candidate, tail, taxonomy, visit)?;
                }
            }
        }
        Ok(())
    }

    fn descend<F>(
        &self,
        at: NodeId,
        phone: &Phone,
        tail: &[QueryPhone],
        taxonomy: &PhoneTaxonomy,
        visit: &mut F,
    ) -> Result<(), QueryError>
    where
        F: FnMut(NodeId),
    {
        match self.child(at, phone.label()) {
            Some(child) => self.visit_permutations(child, tail, taxonomy, visit),
            None => Ok(()),
        }
    }
}
