use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::code::{Code, CodeTable};
use crate::freq::FrequencyTable;
use crate::{HuffmanError, Result};

if_tracing! {
    use tracing::debug;
}

/// Index of a node in the tree arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct NodeId(usize);

/// A vertex of the code tree: either a leaf carrying one symbol or an
/// internal node owning exactly two children. Never unary.
#[derive(Clone, Debug)]
pub struct Node {
    frequency: u64,
    /// Tie-break key under equal frequencies: the symbol itself for a leaf,
    /// the first-extracted (left) child's key for a merged node. Keys of
    /// live forest entries are always distinct because subtrees are
    /// disjoint, so the forest order is total.
    order_key: u8,
    kind: NodeKind,
}

#[derive(Clone, Debug)]
enum NodeKind {
    Leaf { symbol: u8, weight: Option<Code> },
    Internal { left: NodeId, right: NodeId },
}

impl Node {
    /// Occurrence count for a leaf, sum of both children for a merged node.
    /// Fixed at construction time.
    pub fn frequency(&self) -> u64 {
        self.frequency
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf { .. })
    }

    /// Tie-break key: the symbol itself for a leaf, the first-merged
    /// descendant's symbol for an internal node.
    pub fn key(&self) -> u8 {
        self.order_key
    }

    /// The symbol of a leaf, `None` for internal nodes.
    pub fn symbol(&self) -> Option<u8> {
        match self.kind {
            NodeKind::Leaf { symbol, .. } => Some(symbol),
            NodeKind::Internal { .. } => None,
        }
    }

    /// The assigned weight of a leaf, once
    /// [`assign_weights`](CodeTree::assign_weights) has run.
    pub fn weight(&self) -> Option<&Code> {
        match &self.kind {
            NodeKind::Leaf { weight, .. } => weight.as_ref(),
            NodeKind::Internal { .. } => None,
        }
    }

    /// Both children of an internal node, `None` for leaves.
    pub fn children(&self) -> Option<(NodeId, NodeId)> {
        match self.kind {
            NodeKind::Leaf { .. } => None,
            NodeKind::Internal { left, right } => Some((left, right)),
        }
    }
}

/// Handle kept in the forest queue. Derived ordering is (frequency,
/// order_key, id) lexicographic; wrapped in [`Reverse`] the heap pops the
/// globally lowest entry first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct ForestEntry {
    frequency: u64,
    order_key: u8,
    id: NodeId,
}

/// Owns the forest while the greedy merge loop runs.
///
/// Seeded with one leaf per frequency-table entry, the forest shrinks by
/// one node per [`merge_step`](TreeBuilder::merge_step) until a single root
/// remains. Callers can drive the loop themselves or let
/// [`finish`](TreeBuilder::finish) do it.
pub struct TreeBuilder {
    arena: Vec<Node>,
    forest: BinaryHeap<Reverse<ForestEntry>>,
}

impl TreeBuilder {
    /// Seeds the forest with one leaf per table entry, frequencies copied
    /// verbatim.
    pub fn new(table: &FrequencyTable) -> Self {
        let mut arena = Vec::with_capacity(table.len().saturating_mul(2));
        let mut forest = BinaryHeap::with_capacity(table.len());
        for (symbol, frequency) in table.iter() {
            let id = NodeId(arena.len());
            arena.push(Node {
                frequency,
                order_key: symbol,
                kind: NodeKind::Leaf { symbol, weight: None },
            });
            forest.push(Reverse(ForestEntry { frequency, order_key: symbol, id }));
        }
        Self { arena, forest }
    }

    /// True while at least two forest entries remain to be merged.
    pub fn has_pending_merges(&self) -> bool {
        self.forest.len() >= 2
    }

    /// Number of nodes currently in the forest.
    pub fn forest_len(&self) -> usize {
        self.forest.len()
    }

    /// Advances the algorithm by exactly one merge: the two lowest entries
    /// under (frequency, tie-break key) order become the children of a new
    /// node carrying their summed frequency. A strict no-op when fewer than
    /// two nodes remain, so the driving loop needs no guard of its own.
    pub fn merge_step(&mut self) {
        if self.forest.len() < 2 {
            return;
        }
        let Some(Reverse(low1)) = self.forest.pop() else { return };
        let Some(Reverse(low2)) = self.forest.pop() else { return };

        let merged = ForestEntry {
            frequency: low1.frequency + low2.frequency,
            order_key: low1.order_key,
            id: NodeId(self.arena.len()),
        };

        if_tracing! {
            debug!(
                target = "tree",
                low_frequency = low1.frequency,
                next_frequency = low2.frequency,
                merged_frequency = merged.frequency,
                remaining = self.forest.len() + 1,
                "merging two lowest forest entries"
            );
        }

        self.arena.push(Node {
            frequency: merged.frequency,
            order_key: merged.order_key,
            kind: NodeKind::Internal { left: low1.id, right: low2.id },
        });
        self.forest.push(Reverse(merged));
    }

    /// Drives the merge loop to completion and returns the finished tree,
    /// or `None` when the forest was seeded empty. "No root" is a distinct
    /// case from a one-leaf tree and callers must treat it as such.
    pub fn finish(mut self) -> Option<CodeTree> {
        while self.has_pending_merges() {
            self.merge_step();
        }
        let Reverse(root) = self.forest.pop()?;
        Some(CodeTree { arena: self.arena, root: root.id })
    }
}

/// A completed code tree: the node arena plus the root index. Immutable in
/// shape; only leaf weights change, and only through
/// [`assign_weights`](CodeTree::assign_weights).
pub struct CodeTree {
    arena: Vec<Node>,
    root: NodeId,
}

impl CodeTree {
    /// Builds the tree for `table` and assigns all leaf weights in one go.
    /// `None` when the table is empty.
    pub fn from_table(table: &FrequencyTable) -> Option<Self> {
        let mut tree = TreeBuilder::new(table).finish()?;
        tree.assign_weights();
        Some(tree)
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.arena[id.0]
    }

    /// Total number of nodes, leaves and merged nodes together.
    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    pub fn leaf_count(&self) -> usize {
        self.leaves().count()
    }

    /// All leaves, in ascending symbol order.
    pub fn leaves(&self) -> impl Iterator<Item = &Node> + '_ {
        // leaves are seeded in ascending symbol order before any merge
        self.arena.iter().filter(|node| node.is_leaf())
    }

    /// Total frequency of the input the tree was built from.
    pub fn frequency(&self) -> u64 {
        self.node(self.root).frequency()
    }

    /// Walks the tree depth-first from the root, threading the accumulated
    /// bit path: a left edge appends 0, a right edge appends 1. Each leaf's
    /// path becomes its weight; internal nodes receive none.
    ///
    /// Re-running on an unchanged tree overwrites the previous weights with
    /// identical ones. A root that is itself a leaf (single-symbol
    /// alphabet) gets the fixed one-bit code `0`, since no merge ever ran
    /// to give it a path.
    ///
    /// The walk is iterative with an explicit stack, so tree depth is
    /// bounded by memory rather than the call stack.
    pub fn assign_weights(&mut self) {
        if self.node(self.root).is_leaf() {
            let mut code = Code::default();
            code.push(false);
            if let NodeKind::Leaf { weight, .. } = &mut self.arena[self.root.0].kind {
                *weight = Some(code);
            }
            return;
        }

        let mut stack: Vec<(NodeId, Code)> = vec![(self.root, Code::default())];
        while let Some((id, path)) = stack.pop() {
            match &mut self.arena[id.0].kind {
                NodeKind::Leaf { weight, .. } => *weight = Some(path),
                NodeKind::Internal { left, right } => {
                    let (left, right) = (*left, *right);
                    let mut left_path = path.clone();
                    left_path.push(false);
                    let mut right_path = path;
                    right_path.push(true);
                    stack.push((right, right_path));
                    stack.push((left, left_path));
                }
            }
        }
    }

    /// Collects every leaf's symbol and weight into a [`CodeTable`].
    ///
    /// # Errors
    ///
    /// Returns [`HuffmanError::WeightsNotAssigned`] if
    /// [`assign_weights`](CodeTree::assign_weights) has not run yet.
    pub fn code_table(&self) -> Result<CodeTable> {
        let mut table = CodeTable::default();
        for node in self.leaves() {
            let Some(symbol) = node.symbol() else { continue };
            let code = node.weight().cloned().ok_or(HuffmanError::WeightsNotAssigned)?;
            table.insert(symbol, code);
        }
        Ok(table)
    }
}
