//! # Undo/Redo History
//!
//! Keeps prior schema values so edits can be undone.
//!
//! ## Design
//!
//! - Schemas are immutable values with shared fields, so a snapshot is just
//!   the previous schema; no inverse operations are needed
//! - Undo swaps the current schema for the latest snapshot and moves the
//!   current one to the redo stack
//! - Recording a new edit clears the redo stack
//! - Depth is bounded; the oldest snapshot is dropped first

use contentkit_model::ComponentSchema;
use std::collections::VecDeque;

use crate::config::DEFAULT_HISTORY_LIMIT;

/// A schema value captured before an edit.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub schema: ComponentSchema,
    pub description: Option<String>,
}

/// Undo/redo stacks of schema snapshots.
#[derive(Debug)]
pub struct SchemaHistory {
    /// Most recent last.
    undo_stack: VecDeque<Snapshot>,
    /// Most recent last.
    redo_stack: Vec<Snapshot>,
    /// Maximum number of undo levels (0 = unlimited).
    max_levels: usize,
}

impl SchemaHistory {
    /// Creates a history with the default depth.
    #[must_use]
    pub fn new() -> Self {
        Self::with_max_levels(DEFAULT_HISTORY_LIMIT)
    }

    /// Creates a history with a custom depth (0 = unlimited).
    #[must_use]
    pub fn with_max_levels(max_levels: usize) -> Self {
        Self {
            undo_stack: VecDeque::new(),
            redo_stack: Vec::new(),
            max_levels,
        }
    }

    /// Records `previous`, the schema as it was before an edit.
    pub fn record(&mut self, previous: ComponentSchema, description: Option<String>) {
        self.undo_stack.push_back(Snapshot {
            schema: previous,
            description,
        });
        if self.max_levels > 0 && self.undo_stack.len() > self.max_levels {
            self.undo_stack.pop_front();
        }
        self.redo_stack.clear();
    }

    /// Steps back. Returns the schema to restore, or `None` if there is nothing to undo.
    pub fn undo(&mut self, current: &ComponentSchema) -> Option<ComponentSchema> {
        let snapshot = self.undo_stack.pop_back()?;
        self.redo_stack.push(Snapshot {
            schema: current.clone(),
            description: snapshot.description.clone(),
        });
        Some(snapshot.schema)
    }

    /// Steps forward again after an undo.
    pub fn redo(&mut self, current: &ComponentSchema) -> Option<ComponentSchema> {
        let snapshot = self.redo_stack.pop()?;
        self.undo_stack.push_back(Snapshot {
            schema: current.clone(),
            description: snapshot.description.clone(),
        });
        Some(snapshot.schema)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_levels(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_levels(&self) -> usize {
        self.redo_stack.len()
    }

    /// Description of the edit the next undo reverts.
    pub fn undo_description(&self) -> Option<&str> {
        self.undo_stack.back().and_then(|s| s.description.as_deref())
    }

    /// Description of the edit the next redo reapplies.
    pub fn redo_description(&self) -> Option<&str> {
        self.redo_stack.last().and_then(|s| s.description.as_deref())
    }

    /// Drops all history.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

impl Default for SchemaHistory {
    fn default() -> Self {
        Self::new()
    }
}
