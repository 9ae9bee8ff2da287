//! Graph Builder - applies definition records to a unit graph.

use serde::{Deserialize, Serialize};
use unit_table::DefinitionRecord;

use crate::error::GraphError;
use crate::graph::{AddNode, UnitGraph};

/// A unit id that was defined more than once. Only the first definition is
/// kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuplicateUnit {
    pub id: String,
    /// Long name of the ignored definition.
    pub ignored_long_name: String,
}

impl std::fmt::Display for DuplicateUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unit {} is already defined", self.id)
    }
}

/// Non-fatal findings collected while building.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuildReport {
    pub units: usize,
    pub relations: usize,
    pub duplicates: Vec<DuplicateUnit>,
}

impl BuildReport {
    pub fn has_warnings(&self) -> bool {
        !self.duplicates.is_empty()
    }
}

/// Populates a [`UnitGraph`] from a stream of records.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    graph: UnitGraph,
    report: BuildReport,
}

impl GraphBuilder {
    /// Start from an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one record.
    pub fn apply(&mut self, record: &DefinitionRecord) -> Result<(), GraphError> {
        match record {
            DefinitionRecord::DefineUnit { id, long_name } => {
                match self.graph.add_node(id.as_str(), long_name.as_str()) {
                    AddNode::Inserted(_) => self.report.units += 1,
                    AddNode::Duplicate(_) => self.report.duplicates.push(DuplicateUnit {
                        id: id.clone(),
                        ignored_long_name: long_name.clone(),
                    }),
                }
            }
            DefinitionRecord::DefineRelation {
                from_id,
                factor,
                to_id,
                inverted,
            } => {
                self.graph.add_relation(from_id, *factor, to_id, *inverted)?;
                self.report.relations += 1;
            }
        }
        Ok(())
    }

    /// Apply records in order, stopping at the first fatal error.
    pub fn apply_all<'a, I>(&mut self, records: I) -> Result<(), GraphError>
    where
        I: IntoIterator<Item = &'a DefinitionRecord>,
    {
        for record in records {
            self.apply(record)?;
        }
        Ok(())
    }

    /// Finish building.
    pub fn finish(self) -> (UnitGraph, BuildReport) {
        (self.graph, self.report)
    }
}

impl UnitGraph {
    /// Build a graph from records in one go.
    pub fn from_records<'a, I>(records: I) -> Result<(UnitGraph, BuildReport), GraphError>
    where
        I: IntoIterator<Item = &'a DefinitionRecord>,
    {
        let mut builder = GraphBuilder::new();
        builder.apply_all(records)?;
        Ok(builder.finish())
    }
}
