//! List command
//!
//! Usage: touchline list [--scope <SCOPE>] [--permission <LEVEL>]

use clap::Args;
use touchline_core::model::{PermissionLevel, Scope};
use touchline_engine::{RouterQuery, RouterQueryResult};

use super::{summary_line, unexpected, CliResult, Context};

#[derive(Debug, Args)]
pub struct ListArgs {
    #[arg(short, long, default_value = "main")]
    pub scope: Scope,

    /// Only commands a caller with this permission may run
    #[arg(short, long)]
    pub permission: Option<PermissionLevel>,
}

pub fn execute(ctx: &Context, args: ListArgs) -> CliResult {
    let result = ctx.query(RouterQuery::ListForScope {
        scope: args.scope,
        permission: args.permission,
    })?;
    let RouterQueryResult::ListForScope(records) = &result else {
        return Err(unexpected(&result));
    };
    for record in records {
        println!("{}", summary_line(record));
    }
    Ok(())
}
