//! Unit nodes and the relations between them.

use serde::{Deserialize, Serialize};

/// Stable position of a unit in the graph arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UnitIndex(pub usize);

/// A directed conversion from the owning unit to `target`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Relation {
    pub target: UnitIndex,
    /// Never zero.
    pub factor: f64,
    /// Reciprocal relation: `factor / value` instead of `factor * value`.
    pub inverted: bool,
}

impl Relation {
    /// Apply the relation to a value expressed in the source unit.
    ///
    /// Returns `None` when an inverted relation meets a zero value.
    pub fn apply(&self, value: f64) -> Option<f64> {
        if self.inverted {
            if value == 0.0 {
                None
            } else {
                Some(self.factor / value)
            }
        } else {
            Some(self.factor * value)
        }
    }

    /// The relation pointing back to `source` that undoes this one.
    pub fn reverse(&self, source: UnitIndex) -> Relation {
        let factor = if self.inverted {
            self.factor
        } else {
            1.0 / self.factor
        };
        Relation {
            target: source,
            factor,
            inverted: self.inverted,
        }
    }
}

/// A named unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Unit {
    /// Short identifier, the unit's identity.
    pub id: String,

    /// Descriptive name, for display only.
    pub long_name: String,

    /// Outgoing relations in insertion order.
    relations: Vec<Relation>,
}

impl Unit {
    /// Create a unit without relations.
    pub fn new(id: impl Into<String>, long_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            long_name: long_name.into(),
            relations: Vec::new(),
        }
    }

    /// Outgoing relations in traversal order, newest first.
    pub fn relations(&self) -> impl Iterator<Item = &Relation> {
        self.relations.iter().rev()
    }

    /// Number of outgoing relations.
    pub fn relation_count(&self) -> usize {
        self.relations.len()
    }

    /// Relation at a traversal position (0 is the newest).
    pub(crate) fn relation_at(&self, position: usize) -> Option<&Relation> {
        self.relations().nth(position)
    }

    pub(crate) fn push_relation(&mut self, relation: Relation) {
        self.relations.push(relation);
    }
}
