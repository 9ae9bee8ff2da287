//! Unit Graph - the arena of units and their conversion relations.
//!
//! Units live in a vector and are addressed by [`UnitIndex`]; relations hold
//! the index of their target, so the graph has no ownership cycles even
//! though conversions form cycles freely.

mod unit;

pub use unit::*;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, warn};

use crate::error::GraphError;

/// Outcome of [`UnitGraph::add_node`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddNode {
    /// The unit was new and is now stored at this index.
    Inserted(UnitIndex),
    /// A unit with this id already existed at this index; it was kept as is.
    Duplicate(UnitIndex),
}

/// The unit graph.
///
/// Deserialization rejects graphs that `add_node`/`add_relation` could not
/// have produced.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "RawUnitGraph")]
pub struct UnitGraph {
    /// Units in registration order.
    units: Vec<Unit>,

    /// Index: unit id -> arena position.
    index: HashMap<String, UnitIndex>,
}

impl UnitGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a unit.
    ///
    /// A second definition of the same id is ignored with a warning.
    pub fn add_node(&mut self, id: impl Into<String>, long_name: impl Into<String>) -> AddNode {
        let id = id.into();
        if let Some(&existing) = self.index.get(&id) {
            warn!("unit {} is already defined", id);
            return AddNode::Duplicate(existing);
        }

        let position = UnitIndex(self.units.len());
        debug!(unit = %id, index = position.0, "defining unit");
        self.index.insert(id.clone(), position);
        self.units.push(Unit::new(id, long_name));
        AddNode::Inserted(position)
    }

    /// Connect two units.
    ///
    /// Adds `id_a -> id_b` with the given factor and flag, plus the reverse
    /// relation that undoes it.
    pub fn add_relation(
        &mut self,
        id_a: &str,
        factor: f64,
        id_b: &str,
        inverted: bool,
    ) -> Result<(), GraphError> {
        if factor == 0.0 {
            return Err(GraphError::ZeroFactor {
                from: id_a.to_string(),
                to: id_b.to_string(),
            });
        }
        let a = self.require(id_a)?;
        let b = self.require(id_b)?;

        debug!(from = id_a, to = id_b, factor, inverted, "defining relation");
        let forward = Relation {
            target: b,
            factor,
            inverted,
        };
        let backward = forward.reverse(a);
        self.units[a.0].push_relation(forward);
        self.units[b.0].push_relation(backward);
        Ok(())
    }

    /// Look up a unit by id.
    pub fn find(&self, id: &str) -> Option<&Unit> {
        self.index_of(id).map(|i| &self.units[i.0])
    }

    /// Arena position of a unit id.
    pub fn index_of(&self, id: &str) -> Option<UnitIndex> {
        self.index.get(id).copied()
    }

    /// `(id, long_name)` pairs in registration order.
    pub fn list_nodes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.units
            .iter()
            .map(|u| (u.id.as_str(), u.long_name.as_str()))
    }

    /// Number of units.
    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Total number of directed relations.
    pub fn relation_count(&self) -> usize {
        self.units.iter().map(|u| u.relation_count()).sum()
    }

    /// Unit at an index handed out by this graph.
    pub(crate) fn unit_at(&self, index: UnitIndex) -> &Unit {
        &self.units[index.0]
    }

    pub(crate) fn require(&self, id: &str) -> Result<UnitIndex, GraphError> {
        self.index_of(id)
            .ok_or_else(|| GraphError::UnknownUnit(id.to_string()))
    }
}

/// Serialized shape of a `UnitGraph`, checked before use.
#[derive(Debug, Deserialize)]
struct RawUnitGraph {
    units: Vec<Unit>,
    index: HashMap<String, UnitIndex>,
}

impl TryFrom<RawUnitGraph> for UnitGraph {
    type Error = GraphError;

    fn try_from(raw: RawUnitGraph) -> Result<Self, Self::Error> {
        let mut rebuilt = HashMap::with_capacity(raw.units.len());
        for (position, unit) in raw.units.iter().enumerate() {
            if rebuilt.insert(unit.id.clone(), UnitIndex(position)).is_some() {
                return Err(GraphError::InvalidGraph(format!("unit {} stored twice", unit.id)));
            }
        }
        if rebuilt != raw.index {
            return Err(GraphError::InvalidGraph(
                "unit index does not match the stored units".to_string(),
            ));
        }

        for unit in &raw.units {
            for relation in unit.relations() {
                if relation.target.0 >= raw.units.len() {
                    return Err(GraphError::InvalidGraph(format!(
                        "relation from {} points to missing unit {}",
                        unit.id, relation.target.0
                    )));
                }
                if relation.factor == 0.0 {
                    return Err(GraphError::ZeroFactor {
                        from: unit.id.clone(),
                        to: raw.units[relation.target.0].id.clone(),
                    });
                }
            }
        }

        Ok(Self {
            units: raw.units,
            index: raw.index,
        })
    }
}
