//! Route command
//!
//! Usage: touchline route <NAME> [--scope <SCOPE>]

use clap::Args;
use touchline_core::model::{RoutingContext, Scope};
use touchline_engine::{route_command, DispatchMode};

use super::{CliResult, Context};

#[derive(Debug, Args)]
pub struct RouteArgs {
    /// Command name or alias
    pub name: String,

    #[arg(short, long, default_value = "main")]
    pub scope: Scope,
}

pub fn execute(ctx: &Context, args: RouteArgs) -> CliResult {
    let routing = RoutingContext::new(args.scope, args.name.clone());
    let decision = route_command(&ctx.registry, &ctx.classifier, &args.name, &routing)?;

    match &decision.mode {
        DispatchMode::Direct => println!("direct {}", decision.command.name),
        DispatchMode::Escalate { agent } => println!("escalate {}", agent),
    }
    println!(
        "confidence: {:.2}, requires_nlp: {}",
        decision.classification.confidence, decision.classification.requires_nlp
    );
    Ok(())
}
