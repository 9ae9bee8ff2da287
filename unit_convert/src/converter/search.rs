//! Per-call search state for the depth-first path search.

use crate::error::GraphError;
use crate::graph::{UnitGraph, UnitIndex};

/// One step of the current route.
#[derive(Debug, Clone, Copy)]
struct Frame {
    unit: UnitIndex,
    /// Input value expressed in `unit`.
    value: f64,
    /// Traversal position of the next relation to try.
    next: usize,
}

/// A route found by the search, source first.
#[derive(Debug, Clone)]
pub(crate) struct Route {
    pub value: f64,
    pub units: Vec<UnitIndex>,
}

/// Visited markings and the explicit DFS stack for a single conversion.
///
/// Created fresh for every conversion, so markings never carry over between
/// calls.
#[derive(Debug)]
pub(crate) struct SearchState {
    visited: Vec<bool>,
    stack: Vec<Frame>,
}

impl SearchState {
    /// State for a graph with `unit_count` units, nothing visited.
    pub fn new(unit_count: usize) -> Self {
        Self {
            visited: vec![false; unit_count],
            stack: Vec::new(),
        }
    }

    #[cfg(test)]
    pub fn is_visited(&self, unit: UnitIndex) -> bool {
        self.visited[unit.0]
    }

    fn enter(&mut self, unit: UnitIndex, value: f64) {
        self.visited[unit.0] = true;
        self.stack.push(Frame {
            unit,
            value,
            next: 0,
        });
    }

    fn route(&self) -> Route {
        let value = self.stack.last().map(|f| f.value).unwrap_or_default();
        Route {
            value,
            units: self.stack.iter().map(|f| f.unit).collect(),
        }
    }

    /// Depth-first search from `from` to `to`.
    ///
    /// Each unit's relations are tried newest first and a unit is entered at
    /// most once, which yields the same route as the recursive formulation.
    /// The first route reaching `to` is returned. A zero value meeting an
    /// inverted relation aborts the whole search.
    pub fn search(
        &mut self,
        graph: &UnitGraph,
        from: UnitIndex,
        to: UnitIndex,
        value: f64,
    ) -> Result<Option<Route>, GraphError> {
        self.enter(from, value);
        if from == to {
            return Ok(Some(self.route()));
        }

        while let Some(frame) = self.stack.last_mut() {
            let unit = graph.unit_at(frame.unit);
            let Some(relation) = unit.relation_at(frame.next) else {
                self.stack.pop();
                continue;
            };
            frame.next += 1;

            let target = relation.target;
            if self.visited[target.0] {
                continue;
            }

            let next_value = relation.apply(frame.value).ok_or_else(|| GraphError::DivisionByZero {
                from: unit.id.clone(),
                to: graph.unit_at(target).id.clone(),
            })?;

            self.enter(target, next_value);
            if target == to {
                return Ok(Some(self.route()));
            }
        }

        Ok(None)
    }
}
