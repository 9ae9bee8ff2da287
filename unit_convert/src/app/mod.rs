//! The `convert` application: arguments, configuration, and output.

pub mod cli;
pub mod config;
pub mod format;

pub use cli::*;
pub use config::*;

use anyhow::Context;
use serde::Serialize;
use std::path::PathBuf;
use unit_table::DefinitionLocator;

use crate::load::{load_graph, LoadedGraph};

/// Result of one invocation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    Converted {
        value: f64,
        from: String,
        to: String,
        result: f64,
        path: Vec<String>,
    },
    Listed {
        definitions: PathBuf,
        units: Vec<ListedUnit>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListedUnit {
    pub id: String,
    pub long_name: String,
}

/// A configured application with its graph loaded.
#[derive(Debug)]
pub struct App {
    config: AppConfig,
    loaded: LoadedGraph,
}

impl App {
    /// Resolve configuration from the arguments and load the graph.
    pub fn from_cli(cli: &Cli) -> anyhow::Result<Self> {
        let config = match &cli.config {
            Some(path) => AppConfig::load(path)?,
            None => AppConfig::default(),
        };

        let mut locator = DefinitionLocator::new(config.definitions.clone());
        if let Some(path) = &cli.definitions {
            locator = locator.with_path(path);
        }

        let loaded = load_graph(&locator).context("cannot load unit definitions")?;
        Ok(Self::new(config, loaded))
    }

    /// Wrap an already loaded graph.
    pub fn new(config: AppConfig, loaded: LoadedGraph) -> Self {
        Self { config, loaded }
    }

    /// Convert, or list the units when no request is given.
    pub fn run(&self, request: Option<&ConversionRequest>) -> anyhow::Result<Outcome> {
        let Some(request) = request else {
            return Ok(self.listing());
        };

        let conversion = self
            .loaded
            .graph
            .converter()
            .trace(request.value, &request.from, &request.to)?;

        Ok(Outcome::Converted {
            value: request.value,
            from: request.from.clone(),
            to: request.to.clone(),
            result: conversion.value,
            path: conversion.path,
        })
    }

    fn listing(&self) -> Outcome {
        Outcome::Listed {
            definitions: self.loaded.path.clone(),
            units: self
                .loaded
                .graph
                .list_nodes()
                .map(|(id, long_name)| ListedUnit {
                    id: id.to_string(),
                    long_name: long_name.to_string(),
                })
                .collect(),
        }
    }

    /// Render an outcome as text or JSON.
    pub fn render(&self, outcome: &Outcome, json: bool) -> anyhow::Result<String> {
        if json {
            return serde_json::to_string_pretty(outcome).context("cannot encode result as JSON");
        }

        let precision = self.config.output.precision;
        Ok(match outcome {
            Outcome::Converted {
                value,
                from,
                to,
                result,
                ..
            } => format::conversion_line(*value, from, *result, to, precision),
            Outcome::Listed { definitions, units } => format::unit_listing(
                &definitions.display().to_string(),
                units.iter().map(|u| (u.id.as_str(), u.long_name.as_str())),
            ),
        })
    }
}
