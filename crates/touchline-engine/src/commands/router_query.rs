//! Engine-level read-only query surface.

use std::sync::Arc;
use std::time::Instant;

use touchline_core::classification::{Classification, Classifier};
use touchline_core::model::{CommandMetadata, PermissionLevel, Scope};
use touchline_core::queries::{search, stats, RegistryStats};
use touchline_core::registry::CommandRegistry;
use touchline_core::render::{render_command_help, render_feature_help};
use touchline_core::{log_op_end, log_op_error, log_op_start};

use crate::errors::Result;

/// Read-only queries supported by the engine.
#[derive(Debug, Clone, PartialEq)]
pub enum RouterQuery {
    /// Resolve a name or alias for a chat context.
    Resolve { name: String, scope: Scope },
    /// Resolve, then classify the visible record.
    Classify { name: String, scope: Scope },
    /// Commands visible in a chat, optionally limited to a permission tier.
    ListForScope {
        scope: Scope,
        permission: Option<PermissionLevel>,
    },
    Search { query: String },
    Stats,
    CommandHelp { name: String, scope: Scope },
    FeatureHelp { feature: String },
}

impl RouterQuery {
    /// Operation name used in boundary logs
    pub fn op_name(&self) -> &'static str {
        match self {
            RouterQuery::Resolve { .. } => "resolve",
            RouterQuery::Classify { .. } => "classify",
            RouterQuery::ListForScope { .. } => "list_for_scope",
            RouterQuery::Search { .. } => "search",
            RouterQuery::Stats => "stats",
            RouterQuery::CommandHelp { .. } => "command_help",
            RouterQuery::FeatureHelp { .. } => "feature_help",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RouterQueryResult {
    Resolve(Arc<CommandMetadata>),
    Classify(Classification),
    ListForScope(Vec<Arc<CommandMetadata>>),
    Search(Vec<Arc<CommandMetadata>>),
    Stats(RegistryStats),
    CommandHelp(String),
    FeatureHelp(String),
}

/// Execute a read-only query against the registry.
///
/// Each call emits one start event and one end (or end_error) event.
///
/// # Errors
///
/// * `CommandNotFound` - `Resolve`, `Classify` or `CommandHelp` for a name
///   not visible from the scope
/// * `FeatureNotFound` - `FeatureHelp` for an unknown feature
/// * classification validation errors
pub fn apply_router_query(
    query: RouterQuery,
    registry: &CommandRegistry,
    classifier: &Classifier,
) -> Result<RouterQueryResult> {
    let op = query.op_name();
    log_op_start!(op);
    let start = Instant::now();

    let result = run(query, registry, classifier);

    let elapsed = start.elapsed().as_millis() as u64;
    match &result {
        Ok(_) => log_op_end!(op, duration_ms = elapsed),
        Err(e) => log_op_error!(op, e.clone(), duration_ms = elapsed),
    }
    result
}

fn run(
    query: RouterQuery,
    registry: &CommandRegistry,
    classifier: &Classifier,
) -> Result<RouterQueryResult> {
    Ok(match query {
        RouterQuery::Resolve { name, scope } => {
            RouterQueryResult::Resolve(registry.require(&name, scope)?)
        }
        RouterQuery::Classify { name, scope } => {
            let record = registry.require(&name, scope)?;
            RouterQueryResult::Classify(classifier.classify(&name, &record)?)
        }
        RouterQuery::ListForScope { scope, permission } => {
            RouterQueryResult::ListForScope(match permission {
                Some(level) => registry.list_for_permission(scope, level),
                None => registry.list_for_scope(scope),
            })
        }
        RouterQuery::Search { query } => RouterQueryResult::Search(search(registry, &query)),
        RouterQuery::Stats => RouterQueryResult::Stats(stats(registry)),
        RouterQuery::CommandHelp { name, scope } => {
            RouterQueryResult::CommandHelp(render_command_help(registry, &name, scope)?)
        }
        RouterQuery::FeatureHelp { feature } => {
            RouterQueryResult::FeatureHelp(render_feature_help(registry, &feature)?)
        }
    })
}
