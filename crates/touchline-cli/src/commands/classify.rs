//! Classify command
//!
//! Usage: touchline classify <NAME> [--scope <SCOPE>]

use clap::Args;
use touchline_core::model::Scope;
use touchline_engine::{RouterQuery, RouterQueryResult};

use super::{unexpected, CliResult, Context};

#[derive(Debug, Args)]
pub struct ClassifyArgs {
    /// Command name or alias
    pub name: String,

    #[arg(short, long, default_value = "main")]
    pub scope: Scope,
}

/// Print the classification as JSON
pub fn execute(ctx: &Context, args: ClassifyArgs) -> CliResult {
    let result = ctx.query(RouterQuery::Classify {
        name: args.name,
        scope: args.scope,
    })?;
    let RouterQueryResult::Classify(classification) = &result else {
        return Err(unexpected(&result));
    };
    println!("{}", serde_json::to_string_pretty(classification)?);
    Ok(())
}
