use touchline_engine::{RouterQuery, RouterQueryResult};

use super::{unexpected, CliResult, Context};

pub fn execute(ctx: &Context) -> CliResult {
    let result = ctx.query(RouterQuery::Stats)?;
    let RouterQueryResult::Stats(stats) = &result else {
        return Err(unexpected(&result));
    };
    println!("{}", serde_json::to_string_pretty(stats)?);
    Ok(())
}
