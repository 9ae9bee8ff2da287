//! # Unit Convert
//!
//! Converts values between units described by a sparse table of pairwise
//! relations. The table is loaded into a [`UnitGraph`]; conversions between
//! any two connected units follow a chain of relations found by depth-first
//! search.
//!
//! ## Core Components
//!
//! - **graph**: arena of units and the directed relations between them
//! - **builder**: applies definition records from `unit_table` to a graph
//! - **converter**: the path search and value propagation
//! - **app**: the `convert` command-line front end
//!
//! ```
//! use unit_convert::UnitGraph;
//!
//! let mut graph = UnitGraph::new();
//! graph.add_node("meV", "millielectronvolt");
//! graph.add_node("eV", "electronvolt");
//! graph.add_node("K", "Kelvin");
//! graph.add_relation("meV", 0.001, "eV", false).unwrap();
//! graph.add_relation("eV", 11604.5, "K", false).unwrap();
//!
//! let kelvin = graph.convert(25.0, "meV", "K").unwrap();
//! assert!((kelvin - 290.1125).abs() < 1e-9);
//! ```

pub mod app;
pub mod builder;
pub mod converter;
pub mod error;
pub mod graph;
pub mod load;

pub use builder::*;
pub use converter::*;
pub use error::*;
pub use graph::*;
pub use load::*;
