//! Recursive projection of a flat KLV item stream into a tree of nested
//! containers, grouping repeated sibling keys into an ordered sequence.

use std::collections::HashMap;

use log::{trace, warn};

use crate::config::Limits;
use crate::errors::GpmfError;
use crate::klv::{KlvItem, KlvReader};
use crate::FourCC;

/// A single slot in a [`GpmfTree`]: either a scalar KLV item, a nested
/// container, or - when the same key occurs more than once among a set of
/// siblings - an ordered sequence of nodes recorded under that key.
#[derive(Debug, Clone)]
pub enum GpmfNode<'a> {
    Leaf(KlvItem<'a>),
    Branch(GpmfTree<'a>),
    Sequence(Vec<GpmfNode<'a>>),
}

/// A projected level of a GPMF container: every distinct FourCC key seen
/// among a set of siblings, mapped to the node(s) recorded under it.
#[derive(Debug, Clone, Default)]
pub struct GpmfTree<'a> {
    entries: HashMap<FourCC, GpmfNode<'a>>,
}

impl<'a> GpmfTree<'a> {
    /// The node recorded under `key`, if any.
    pub fn get(&self, key: &FourCC) -> Option<&GpmfNode<'a>> {
        self.entries.get(key)
    }

    /// The first leaf item recorded under `key`, looking inside a
    /// `Sequence` if necessary.
    pub fn leaf(&self, key: &FourCC) -> Option<&KlvItem<'a>> {
        match self.entries.get(key)? {
            GpmfNode::Leaf(item) => Some(item),
            GpmfNode::Sequence(items) => items.iter().find_map(|n| match n {
                GpmfNode::Leaf(item) => Some(item),
                _ => None,
            }),
            GpmfNode::Branch(_) => None,
        }
    }

    /// The branch recorded under `key`, if it is a single container (not a
    /// sequence of them).
    pub fn branch(&self, key: &FourCC) -> Option<&GpmfTree<'a>> {
        match self.entries.get(key)? {
            GpmfNode::Branch(tree) => Some(tree),
            _ => None,
        }
    }

    /// All nodes recorded under `key`, in encounter order. Empty if the key
    /// is absent, one element for a plain `Leaf`/`Branch`, many for a
    /// `Sequence`.
    pub fn all(&self, key: &FourCC) -> Vec<&GpmfNode<'a>> {
        match self.entries.get(key) {
            None => Vec::new(),
            Some(GpmfNode::Sequence(items)) => items.iter().collect(),
            Some(node) => vec![node],
        }
    }

    /// `true` if no key is recorded at this level.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn insert(&mut self, key: FourCC, node: GpmfNode<'a>) {
        match self.entries.remove(&key) {
            None => {
                self.entries.insert(key, node);
            }
            Some(GpmfNode::Sequence(mut items)) => {
                items.push(node);
                self.entries.insert(key, GpmfNode::Sequence(items));
            }
            Some(existing) => {
                self.entries.insert(key, GpmfNode::Sequence(vec![existing, node]));
            }
        }
    }
}

/// Project a buffer into a tree using the default [`Limits`].
pub fn project(bytes: &[u8]) -> Result<GpmfTree<'_>, GpmfError> {
    project_with_limits(bytes, Limits::default())
}

/// Project a buffer into a tree, aborting with [`GpmfError::MalformedInput`]
/// if `limits` is exceeded.
pub fn project_with_limits(bytes: &[u8], limits: Limits) -> Result<GpmfTree<'_>, GpmfError> {
    let mut item_count = 0usize;
    project_inner(bytes, limits, 0, &mut item_count)
}

fn project_inner<'a>(
    bytes: &'a [u8],
    limits: Limits,
    depth: usize,
    item_count: &mut usize,
) -> Result<GpmfTree<'a>, GpmfError> {
    if depth > limits.max_depth {
        warn!("nesting depth {depth} exceeds limit {}", limits.max_depth);
        return Err(GpmfError::MalformedInput {
            reason: format!("nesting depth exceeded {}", limits.max_depth),
        });
    }

    let mut tree = GpmfTree::default();
    for item in KlvReader::new(bytes) {
        *item_count += 1;
        if *item_count > limits.max_items {
            warn!("item count exceeds limit {}", limits.max_items);
            return Err(GpmfError::MalformedInput {
                reason: format!("item count exceeded {}", limits.max_items),
            });
        }

        let key = item.key.clone();
        if item.is_container() && !item.payload.is_empty() {
            trace!("descending into container {key}");
            let child = project_inner(item.payload, limits, depth + 1, item_count)?;
            tree.insert(key, GpmfNode::Branch(child));
        } else {
            tree.insert(key, GpmfNode::Leaf(item));
        }
    }
    Ok(tree)
}
