//! Hierarchy builder: reconstructs nested menu trees from flat entry rows.

use std::collections::HashMap;

use itertools::Itertools;
use tracing::debug;

use crate::domain::entities::Entry;
use crate::domain::error::DomainError;

/// Result type for tree operations.
pub type TreeResult<T> = Result<T, DomainError>;

/// Output of [`build_forest`]: the nested roots plus any entries whose
/// parent chain could not be resolved within the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Forest {
    /// Root entries with fully nested children, in input order
    pub roots: Vec<Entry>,
    /// Entries with an unresolvable parent id (directly or transitively),
    /// in input order, with empty children
    pub orphans: Vec<Entry>,
}

impl Forest {
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty() && self.orphans.is_empty()
    }
}

/// Build an ordered forest from a flat entry collection.
///
/// Entries with parent id 0 become roots; every other entry is bucketed by
/// its parent id and attached in a single map-based pass, so the builder
/// terminates regardless of input order or missing parents. Sibling order at
/// every level matches the relative order of the input collection.
///
/// Unresolvable entries end up in [`Forest::orphans`] instead of being
/// dropped or looping: that covers parents that never appear in the input,
/// entries parented to such an entry transitively, and mutually-parented
/// groups (no member is reachable from a root).
///
/// # Errors
///
/// Returns [`DomainError::DuplicateEntry`] if an id appears more than once.
pub fn build_forest(entries: Vec<Entry>) -> TreeResult<Forest> {
    if let Some(id) = entries.iter().map(|e| e.id).duplicates().next() {
        return Err(DomainError::DuplicateEntry(id));
    }

    let total = entries.len();
    let (mut roots, pending): (Vec<Entry>, Vec<Entry>) =
        entries.into_iter().partition(|e| e.parent == 0);

    // Remember input order so orphans can be reported in it
    let pending_order: Vec<u64> = pending.iter().map(|e| e.id).collect();

    // Deferred-children buckets keyed by parent id; bucket order is the
    // original relative order among siblings
    let mut buckets: HashMap<u64, Vec<Entry>> = HashMap::new();
    for entry in pending {
        buckets.entry(entry.parent).or_default().push(entry);
    }

    for root in &mut roots {
        attach_children(root, &mut buckets);
    }

    // Whatever is still bucketed was never reachable from a root
    let mut unattached: HashMap<u64, Entry> = buckets
        .into_values()
        .flatten()
        .map(|e| (e.id, e))
        .collect();
    let orphans: Vec<Entry> = pending_order
        .into_iter()
        .filter_map(|id| unattached.remove(&id))
        .collect();

    debug!(
        "build_forest: {} entries -> {} roots, {} orphans",
        total,
        roots.len(),
        orphans.len()
    );

    Ok(Forest { roots, orphans })
}

fn attach_children(parent: &mut Entry, buckets: &mut HashMap<u64, Vec<Entry>>) {
    if let Some(mut children) = buckets.remove(&parent.id) {
        for child in &mut children {
            attach_children(child, buckets);
        }
        parent.children = children;
    }
}
