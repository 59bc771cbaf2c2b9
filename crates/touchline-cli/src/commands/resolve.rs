//! Resolve command
//!
//! Usage: touchline resolve <NAME> [--scope <SCOPE>] [--json]

use clap::Args;
use touchline_core::model::Scope;
use touchline_engine::{RouterQuery, RouterQueryResult};

use super::{summary_line, unexpected, CliResult, Context};

#[derive(Debug, Args)]
pub struct ResolveArgs {
    /// Command name or alias, e.g. /list
    pub name: String,

    /// Chat scope the request comes from
    #[arg(short, long, default_value = "main")]
    pub scope: Scope,

    /// Print the full record as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn execute(ctx: &Context, args: ResolveArgs) -> CliResult {
    let result = ctx.query(RouterQuery::Resolve {
        name: args.name,
        scope: args.scope,
    })?;
    let RouterQueryResult::Resolve(record) = &result else {
        return Err(unexpected(&result));
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&**record)?);
    } else {
        println!("{}", summary_line(record));
        println!("feature: {}", record.feature);
        println!("permission: {}", record.permission);
    }
    Ok(())
}
