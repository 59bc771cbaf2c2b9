//! Help commands
//!
//! Usage:
//!   touchline help <NAME> [--scope <SCOPE>]
//!   touchline feature-help <FEATURE>

use clap::Args;
use touchline_core::model::Scope;
use touchline_engine::{RouterQuery, RouterQueryResult};

use super::{unexpected, CliResult, Context};

#[derive(Debug, Args)]
pub struct HelpArgs {
    /// Command name or alias
    pub name: String,

    #[arg(short, long, default_value = "main")]
    pub scope: Scope,
}

#[derive(Debug, Args)]
pub struct FeatureHelpArgs {
    /// Feature name as registered
    pub feature: String,
}

pub fn execute(ctx: &Context, args: HelpArgs) -> CliResult {
    let result = ctx.query(RouterQuery::CommandHelp {
        name: args.name,
        scope: args.scope,
    })?;
    let RouterQueryResult::CommandHelp(text) = &result else {
        return Err(unexpected(&result));
    };
    print!("{}", text);
    Ok(())
}

pub fn execute_feature(ctx: &Context, args: FeatureHelpArgs) -> CliResult {
    let result = ctx.query(RouterQuery::FeatureHelp {
        feature: args.feature,
    })?;
    let RouterQueryResult::FeatureHelp(text) = &result else {
        return Err(unexpected(&result));
    };
    print!("{}", text);
    Ok(())
}
