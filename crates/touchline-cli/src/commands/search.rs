//! Search command
//!
//! Usage: touchline search <QUERY>

use clap::Args;
use touchline_engine::{RouterQuery, RouterQueryResult};

use super::{summary_line, unexpected, CliResult, Context};

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Case-insensitive substring
    pub query: String,
}

pub fn execute(ctx: &Context, args: SearchArgs) -> CliResult {
    let result = ctx.query(RouterQuery::Search { query: args.query })?;
    let RouterQueryResult::Search(records) = &result else {
        return Err(unexpected(&result));
    };
    if records.is_empty() {
        println!("No matching commands");
    }
    for record in records {
        println!("{}", summary_line(record));
    }
    Ok(())
}
