//! Per-export node ID assignment.

use std::collections::HashMap;

/// Identifier of a rendered node.
pub type NodeId = u64;

/// Assigns node IDs by name for one export.
///
/// IDs start at 1 and increase by one for each distinct name, in the order
/// names are first seen. A name keeps its first ID.
#[derive(Debug, Clone)]
pub struct IdAllocator {
    next: NodeId,
    ids: HashMap<String, NodeId>,
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdAllocator {
    /// Create an allocator whose first ID is 1.
    pub fn new() -> Self {
        Self {
            next: 1,
            ids: HashMap::new(),
        }
    }

    /// Assign an ID to `name` if it has none yet.
    ///
    /// Returns `None` when the name was already assigned.
    pub fn assign(&mut self, name: &str) -> Option<NodeId> {
        if self.ids.contains_key(name) {
            return None;
        }
        let id = self.next;
        self.next += 1;
        self.ids.insert(name.to_string(), id);
        Some(id)
    }

    /// ID previously assigned to `name`.
    pub fn get(&self, name: &str) -> Option<NodeId> {
        self.ids.get(name).copied()
    }

    /// Number of names assigned so far.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether no name has been assigned.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
