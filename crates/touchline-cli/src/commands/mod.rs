//! Subcommand implementations

pub mod classify;
pub mod help;
pub mod list;
pub mod resolve;
pub mod route;
pub mod search;
pub mod stats;

use std::error::Error;

use touchline_core::classification::Classifier;
use touchline_core::model::CommandMetadata;
use touchline_core::registry::CommandRegistry;
use touchline_engine::{
    apply_router_query, bootstrap, load_manifest, FeatureModule, RouterQuery, RouterQueryResult,
    SystemFeature,
};

use crate::GlobalArgs;

pub type CliResult = Result<(), Box<dyn Error>>;

/// Registry and classifier built from the global flags
pub struct Context {
    pub registry: CommandRegistry,
    pub classifier: Classifier,
}

impl Context {
    pub fn load(global: &GlobalArgs) -> Result<Self, Box<dyn Error>> {
        let manifest = global
            .manifest
            .as_deref()
            .map(load_manifest)
            .transpose()?;

        let system = SystemFeature::default();
        let mut modules: Vec<&dyn FeatureModule> = Vec::new();
        if !global.no_builtins {
            modules.push(&system);
        }
        if let Some(manifest) = &manifest {
            modules.extend(manifest.modules());
        }

        let registry = bootstrap(&modules)?;
        let classifier = match &manifest {
            Some(manifest) => manifest.classifier()?,
            None => Classifier::default(),
        };

        Ok(Self {
            registry,
            classifier,
        })
    }

    pub fn query(&self, query: RouterQuery) -> Result<RouterQueryResult, Box<dyn Error>> {
        Ok(apply_router_query(query, &self.registry, &self.classifier)?)
    }
}

/// One-line summary: `/name [scope] - description`
pub fn summary_line(record: &CommandMetadata) -> String {
    format!(
        "{} [{}] - {}",
        record.name, record.scope, record.description
    )
}

fn unexpected(result: &RouterQueryResult) -> Box<dyn Error> {
    format!("unexpected query result: {:?}", result).into()
}
