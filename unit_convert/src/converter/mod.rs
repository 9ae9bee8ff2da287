//! Path Converter - converts values along relation chains.
//!
//! Only pairwise relations are stored; conversions between any two units of
//! the same connected component follow a chain found by depth-first search.
//!
//! When several chains connect two units the first one found wins. From each
//! unit the most recently defined relation is explored first, so the result
//! depends on definition order, not on chain length or precision.

mod search;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::GraphError;
use crate::graph::UnitGraph;
use search::SearchState;

/// The result of a conversion together with the route taken.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversion {
    pub value: f64,
    /// Unit ids from source to target, both included.
    pub path: Vec<String>,
}

impl Conversion {
    /// Number of relations traversed.
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Runs conversions against a finished graph.
#[derive(Debug, Clone, Copy)]
pub struct PathConverter<'g> {
    graph: &'g UnitGraph,
}

impl<'g> PathConverter<'g> {
    pub fn new(graph: &'g UnitGraph) -> Self {
        Self { graph }
    }

    /// Convert `value` from `from_id` to `to_id`.
    pub fn convert(&self, value: f64, from_id: &str, to_id: &str) -> Result<f64, GraphError> {
        self.trace(value, from_id, to_id).map(|c| c.value)
    }

    /// Convert and report the route taken.
    pub fn trace(&self, value: f64, from_id: &str, to_id: &str) -> Result<Conversion, GraphError> {
        let from = self.graph.require(from_id)?;
        let to = self.graph.require(to_id)?;

        let mut state = SearchState::new(self.graph.len());
        let route = state
            .search(self.graph, from, to, value)?
            .ok_or_else(|| GraphError::NoConversionPath {
                from: from_id.to_string(),
                to: to_id.to_string(),
            })?;

        let conversion = Conversion {
            value: route.value,
            path: route
                .units
                .iter()
                .map(|&index| self.graph.unit_at(index).id.clone())
                .collect(),
        };
        debug!(
            path = %conversion.path.join(" -> "),
            hops = conversion.hops(),
            value = conversion.value,
            "conversion path found"
        );

        Ok(conversion)
    }
}

impl UnitGraph {
    /// Convert `value` from `from_id` to `to_id`.
    pub fn convert(&self, value: f64, from_id: &str, to_id: &str) -> Result<f64, GraphError> {
        PathConverter::new(self).convert(value, from_id, to_id)
    }

    /// Path converter borrowing this graph.
    pub fn converter(&self) -> PathConverter<'_> {
        PathConverter::new(self)
    }
}
