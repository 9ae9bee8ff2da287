//! Definition records - the unit and relation entries of a definition table.

use serde::{Deserialize, Serialize};

/// One entry of a definition table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DefinitionRecord {
    /// Declares a unit by its short identifier and a descriptive name.
    DefineUnit { id: String, long_name: String },

    /// Declares a conversion between two already defined units.
    ///
    /// Without inversion, `value_in_to = factor * value_in_from`.
    /// With inversion, `value_in_to = factor / value_in_from`.
    DefineRelation {
        from_id: String,
        factor: f64,
        to_id: String,
        inverted: bool,
    },
}

impl DefinitionRecord {
    /// Create a unit definition.
    pub fn unit(id: impl Into<String>, long_name: impl Into<String>) -> Self {
        DefinitionRecord::DefineUnit {
            id: id.into(),
            long_name: long_name.into(),
        }
    }

    /// Create a linear relation `to = factor * from`.
    pub fn relation(from_id: impl Into<String>, factor: f64, to_id: impl Into<String>) -> Self {
        DefinitionRecord::DefineRelation {
            from_id: from_id.into(),
            factor,
            to_id: to_id.into(),
            inverted: false,
        }
    }

    /// Create a reciprocal relation `to = factor / from`.
    pub fn inverted_relation(
        from_id: impl Into<String>,
        factor: f64,
        to_id: impl Into<String>,
    ) -> Self {
        DefinitionRecord::DefineRelation {
            from_id: from_id.into(),
            factor,
            to_id: to_id.into(),
            inverted: true,
        }
    }

    /// Keyword used for this record in a definition file.
    pub fn keyword(&self) -> &'static str {
        match self {
            DefinitionRecord::DefineUnit { .. } => NODE_KEYWORD,
            DefinitionRecord::DefineRelation { .. } => EDGE_KEYWORD,
        }
    }
}

impl std::fmt::Display for DefinitionRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DefinitionRecord::DefineUnit { id, long_name } => {
                write!(f, "{} {} {}", self.keyword(), id, long_name)
            }
            DefinitionRecord::DefineRelation {
                from_id,
                factor,
                to_id,
                inverted,
            } => {
                let flag = if *inverted { INVERT_FLAG } else { NOINVERT_FLAG };
                write!(f, "{} {} {} {} {}", self.keyword(), from_id, factor, to_id, flag)
            }
        }
    }
}

/// Record keyword for unit definitions.
pub const NODE_KEYWORD: &str = "node";
/// Record keyword for relation definitions.
pub const EDGE_KEYWORD: &str = "edge";
/// Inversion flag marking a reciprocal relation.
pub const INVERT_FLAG: &str = "INVERT";
/// Inversion flag marking a linear relation.
pub const NOINVERT_FLAG: &str = "NOINVERT";
