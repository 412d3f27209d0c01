//! Arena-backed binary decode tree.
//!
//! Nodes live in a flat `Vec` and refer to each other by [`NodeId`]. The
//! parent link is a plain index, so the tree has no ownership cycle and is
//! released by dropping (or truncating) the vector.
//!
//! # Construction
//!
//! The tree is grown directly from a JPEG-style `BITS` histogram by a
//! stateful depth-first walk. For every code still to be placed the walk
//! starts at the root and descends left before right, creating missing
//! children on the way and skipping children that are leaves or that were
//! already exhausted during the current pass. When both children of a node
//! are exhausted the node is stamped with the pass number and the walk backs
//! up to its parent. Reaching the target depth turns the node into a leaf
//! holding the next value and starts a new pass.
//!
//! Because lengths are processed shortest first and every new leaf is the
//! leftmost free slot at its depth, the resulting codes are canonical.

use crate::MAX_CODE_LENGTH;
use oxijpeg_core::BuildError;

/// Index of a node in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(u32);

impl NodeId {
    #[inline]
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// A tree vertex. `children[0]` is the left (0-bit) edge.
#[derive(Debug, Clone, Default)]
struct Node {
    children: [Option<NodeId>; 2],
    /// Structural parent; only used to back up during construction.
    parent: Option<NodeId>,
    value: u8,
    /// Set once a value has been assigned.
    used: bool,
    /// Last construction pass in which this subtree was exhausted.
    visited: u32,
}

/// A leaf together with the path that reaches it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Leaf {
    pub value: u8,
    pub code: u16,
    pub length: u8,
}

#[derive(Debug, Clone)]
pub(crate) struct CodeTree {
    nodes: Vec<Node>,
}

impl CodeTree {
    pub(crate) const ROOT: NodeId = NodeId(0);

    /// Create a tree holding only an empty root.
    pub(crate) fn new() -> Self {
        Self {
            nodes: vec![Node::default()],
        }
    }

    /// Drop every node except the root, keeping the allocation.
    pub(crate) fn clear(&mut self) {
        self.nodes.truncate(1);
        self.nodes[0] = Node::default();
    }

    /// Rebuild the tree from a length histogram and a value list.
    ///
    /// `code_lengths[i]` is the number of codes of length `i + 1`. Values are
    /// assigned to leaves in the order the walk creates them. On error the
    /// tree is left empty.
    pub(crate) fn build(&mut self, code_lengths: &[u8], values: &[u8]) -> Result<(), BuildError> {
        self.clear();

        let result = self.grow(code_lengths, values);
        match &result {
            Ok(()) => log::trace!(
                "built Huffman tree: {} nodes, {} leaves",
                self.nodes.len(),
                self.leaf_count()
            ),
            Err(err) => {
                log::debug!("rejected Huffman table: {err}");
                self.clear();
            }
        }
        result
    }

    fn grow(&mut self, code_lengths: &[u8], values: &[u8]) -> Result<(), BuildError> {
        if code_lengths.len() > MAX_CODE_LENGTH {
            return Err(BuildError::TableTooLarge {
                buckets: code_lengths.len(),
                max: MAX_CODE_LENGTH,
            });
        }

        let mut pending = [0u8; MAX_CODE_LENGTH];
        pending[..code_lengths.len()].copy_from_slice(code_lengths);

        let mut current = Self::ROOT;
        let mut depth = 0usize;
        let mut order = 1u32;
        let mut next_value = 0usize;
        let mut bucket = 0usize;

        while bucket < code_lengths.len() {
            if pending[bucket] == 0 {
                bucket += 1;
                continue;
            }

            if depth == bucket + 1 {
                let value = *values.get(next_value).ok_or(BuildError::TooFewValues {
                    needed: next_value + 1,
                    available: values.len(),
                })?;

                let node = &mut self.nodes[current.index()];
                node.value = value;
                node.used = true;

                current = Self::ROOT;
                depth = 0;
                order += 1;
                next_value += 1;
                pending[bucket] -= 1;
                continue;
            }

            if let Some(next) = self.descend(current, order) {
                current = next;
                depth += 1;
            } else {
                let node = &mut self.nodes[current.index()];
                match node.parent {
                    Some(parent) => {
                        node.visited = order;
                        current = parent;
                        depth -= 1;
                    }
                    None => return Err(BuildError::Infeasible { length: bucket + 1 }),
                }
            }
        }

        Ok(())
    }

    /// Pick the next child to walk into: left before right, creating a
    /// missing child, skipping leaves and subtrees exhausted in this pass.
    fn descend(&mut self, at: NodeId, order: u32) -> Option<NodeId> {
        for bit in [false, true] {
            match self.child(at, bit) {
                None => return Some(self.attach(at, bit)),
                Some(child) => {
                    let node = &self.nodes[child.index()];
                    if !node.used && node.visited != order {
                        return Some(child);
                    }
                }
            }
        }
        None
    }

    fn attach(&mut self, parent: NodeId, bit: bool) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node {
            parent: Some(parent),
            ..Node::default()
        });
        self.nodes[parent.index()].children[usize::from(bit)] = Some(id);
        id
    }

    /// Follow one edge.
    #[inline]
    pub(crate) fn child(&self, id: NodeId, bit: bool) -> Option<NodeId> {
        self.nodes[id.index()].children[usize::from(bit)]
    }

    /// A node without children terminates a code word.
    #[inline]
    pub(crate) fn is_leaf(&self, id: NodeId) -> bool {
        self.nodes[id.index()].children == [None, None]
    }

    #[inline]
    pub(crate) fn value(&self, id: NodeId) -> u8 {
        self.nodes[id.index()].value
    }

    pub(crate) fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn leaf_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.used).count()
    }

    /// All leaves, left to right, with their decode paths.
    pub(crate) fn leaves(&self) -> Vec<Leaf> {
        let mut leaves = Vec::with_capacity(self.leaf_count());
        let mut stack = vec![(Self::ROOT, 0u16, 0u8)];

        while let Some((id, code, length)) = stack.pop() {
            let node = &self.nodes[id.index()];
            if node.used {
                leaves.push(Leaf {
                    value: node.value,
                    code,
                    length,
                });
                continue;
            }
            // Right first so the left subtree is popped first.
            for bit in [true, false] {
                if let Some(child) = node.children[usize::from(bit)] {
                    stack.push((child, (code << 1) | u16::from(bit), length + 1));
                }
            }
        }

        leaves
    }
}

impl Default for CodeTree {
    fn default() -> Self {
        Self::new()
    }
}
