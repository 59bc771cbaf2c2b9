//! Direct-or-escalate routing decision

use std::sync::Arc;
use std::time::Instant;

use touchline_core::classification::{Classification, Classifier};
use touchline_core::model::{CommandMetadata, CommandParams, HandlerResult, RoutingContext};
use touchline_core::registry::CommandRegistry;
use touchline_core::{log_op_end, log_op_error, log_op_start};

use crate::errors::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchMode {
    /// Run the registered handler
    Direct,
    /// Hand the message to a language-model agent
    Escalate { agent: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct RouteDecision {
    pub command: Arc<CommandMetadata>,
    pub classification: Classification,
    pub mode: DispatchMode,
}

/// Resolve `name` for the message's chat and decide how to dispatch it.
///
/// A command runs directly when it needs no disambiguation and its confidence
/// reaches the policy's direct-dispatch threshold; otherwise it escalates to
/// the recommended agent.
///
/// # Errors
///
/// `CommandNotFound` when nothing is visible from `ctx.scope`, or a
/// classification validation error.
pub fn route_command(
    registry: &CommandRegistry,
    classifier: &Classifier,
    name: &str,
    ctx: &RoutingContext,
) -> Result<RouteDecision> {
    log_op_start!("route_command", request_id = %ctx.request_id, command = name);
    let start = Instant::now();

    let result = (|| -> Result<RouteDecision> {
        let command = registry.require(name, ctx.scope)?;
        let classification = classifier.classify(name, &command)?;

        let threshold = classifier.policy().direct_dispatch_threshold;
        let mode = if !classification.requires_nlp && classification.confidence >= threshold {
            DispatchMode::Direct
        } else {
            DispatchMode::Escalate {
                agent: classification.routing.agent.clone(),
            }
        };

        Ok(RouteDecision {
            command,
            classification,
            mode,
        })
    })();

    let elapsed = start.elapsed().as_millis() as u64;
    match &result {
        Ok(decision) => log_op_end!(
            "route_command",
            duration_ms = elapsed,
            request_id = %ctx.request_id,
            mode = ?decision.mode
        ),
        Err(e) => log_op_error!(
            "route_command",
            e.clone(),
            duration_ms = elapsed,
            request_id = %ctx.request_id
        ),
    }
    result
}

/// Carry out a routing decision.
///
/// Direct decisions invoke the command's handler; escalations return a
/// deferral naming the agent without touching the handler.
pub fn execute_route(
    decision: &RouteDecision,
    ctx: &RoutingContext,
    params: &CommandParams,
) -> HandlerResult {
    match &decision.mode {
        DispatchMode::Direct => decision.command.handler.as_handler().handle(ctx, params),
        DispatchMode::Escalate { agent } => HandlerResult::defer(Some(agent.clone())),
    }
}
