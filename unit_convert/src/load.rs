//! Loading a graph from a definition file.

use std::path::PathBuf;
use tracing::{debug, info, warn};
use unit_table::{DefinitionFile, DefinitionLocator};

use crate::builder::{BuildReport, GraphBuilder};
use crate::error::Result;
use crate::graph::UnitGraph;

/// A graph built from a definition file.
#[derive(Debug)]
pub struct LoadedGraph {
    pub path: PathBuf,
    pub graph: UnitGraph,
    pub report: BuildReport,
}

/// Locate, parse, and build.
pub fn load_graph(locator: &DefinitionLocator) -> Result<LoadedGraph> {
    let file = locator.load()?;
    build_from_file(file)
}

/// Build a graph from an already parsed definition file.
pub fn build_from_file(file: DefinitionFile) -> Result<LoadedGraph> {
    let mut builder = GraphBuilder::new();
    builder.apply_all(&file.records)?;
    let (graph, report) = builder.finish();

    if report.has_warnings() {
        for duplicate in &report.duplicates {
            debug!(ignored_long_name = %duplicate.ignored_long_name, "{}", duplicate);
        }
    }
    if graph.is_empty() {
        warn!(path = %file.path.display(), "definition file defines no units");
    }
    info!(
        path = %file.path.display(),
        units = report.units,
        relations = report.relations,
        directed = graph.relation_count(),
        "unit graph loaded"
    );

    Ok(LoadedGraph {
        path: file.path,
        graph,
        report,
    })
}
