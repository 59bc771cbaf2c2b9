//! Handler contract for registered commands
//!
//! The registry never calls a handler. It only keeps a [`HandlerRef`] and
//! compares handler identity when deciding whether a re-registration is a
//! no-op. The dispatcher that owns chat I/O invokes handlers through
//! [`CommandHandler::handle`].

use std::collections::BTreeMap;
use std::sync::{Arc, OnceLock};

use serde::{Deserialize, Serialize};
use touchline_core_types::{RequestId, TeamId, UserId};

use super::scope::Scope;

/// Context of the chat message a handler is invoked for
#[derive(Debug, Clone)]
pub struct RoutingContext {
    pub request_id: RequestId,
    /// Chat context the message arrived in
    pub scope: Scope,
    pub team_id: Option<TeamId>,
    pub user_id: Option<UserId>,
    /// Message text as received, before parameter extraction
    pub raw_input: String,
}

impl RoutingContext {
    pub fn new(scope: Scope, raw_input: impl Into<String>) -> Self {
        Self {
            request_id: RequestId::new(),
            scope,
            team_id: None,
            user_id: None,
            raw_input: raw_input.into(),
        }
    }

    pub fn with_team(mut self, team_id: TeamId) -> Self {
        self.team_id = Some(team_id);
        self
    }

    pub fn with_user(mut self, user_id: UserId) -> Self {
        self.user_id = Some(user_id);
        self
    }
}

/// Parameters extracted from a command message
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandParams {
    /// Positional arguments in message order
    pub positional: Vec<String>,
    /// Named arguments (`key=value` style)
    pub named: BTreeMap<String, String>,
}

impl CommandParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_positional(mut self, value: impl Into<String>) -> Self {
        self.positional.push(value.into());
        self
    }

    pub fn with_named(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.named.insert(key.into(), value.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.named.is_empty()
    }
}

/// Outcome of a handler invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum HandlerResult {
    /// Reply text to send back to the chat
    Text { text: String },
    /// Handler declined; the agent layer should interpret the message
    DeferToAgent { agent_hint: Option<String> },
    /// Handler ran and failed with a user-presentable reason
    Failed { reason: String },
}

impl HandlerResult {
    pub fn text(text: impl Into<String>) -> Self {
        HandlerResult::Text { text: text.into() }
    }

    pub fn defer(agent_hint: Option<String>) -> Self {
        HandlerResult::DeferToAgent { agent_hint }
    }

    pub fn failed(reason: impl Into<String>) -> Self {
        HandlerResult::Failed {
            reason: reason.into(),
        }
    }
}

/// Fixed handler interface for every command
pub trait CommandHandler: Send + Sync {
    fn handle(&self, ctx: &RoutingContext, params: &CommandParams) -> HandlerResult;
}

impl<F> CommandHandler for F
where
    F: Fn(&RoutingContext, &CommandParams) -> HandlerResult + Send + Sync,
{
    fn handle(&self, ctx: &RoutingContext, params: &CommandParams) -> HandlerResult {
        self(ctx, params)
    }
}

/// Shared handle to a command handler
///
/// Equality is handler identity: two refs are equal only when they point at
/// the same handler allocation. Cloning a `HandlerRef` preserves identity.
#[derive(Clone)]
pub struct HandlerRef(Arc<dyn CommandHandler>);

impl HandlerRef {
    pub fn new<H>(handler: H) -> Self
    where
        H: CommandHandler + 'static,
    {
        Self(Arc::new(handler))
    }

    /// Wrap a closure; the closure's signature is checked here rather than
    /// through the blanket impl, which keeps argument types inferable.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(&RoutingContext, &CommandParams) -> HandlerResult + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    pub fn from_arc(handler: Arc<dyn CommandHandler>) -> Self {
        Self(handler)
    }

    /// Process-wide handler that always defers to the agent layer
    ///
    /// Used for records built from declarative manifests or decoded from JSON,
    /// which carry no executable body.
    pub fn detached() -> Self {
        static DETACHED: OnceLock<HandlerRef> = OnceLock::new();
        DETACHED
            .get_or_init(|| HandlerRef::from_fn(|_, _| HandlerResult::defer(None)))
            .clone()
    }

    pub fn same_as(&self, other: &HandlerRef) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(&self.0), Arc::as_ptr(&other.0))
    }

    /// Borrow the handler for invocation by the dispatcher
    pub fn as_handler(&self) -> &dyn CommandHandler {
        self.0.as_ref()
    }
}

impl Default for HandlerRef {
    fn default() -> Self {
        Self::detached()
    }
}

impl PartialEq for HandlerRef {
    fn eq(&self, other: &Self) -> bool {
        self.same_as(other)
    }
}

impl std::fmt::Debug for HandlerRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "HandlerRef({:p})", Arc::as_ptr(&self.0) as *const ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> RoutingContext {
        RoutingContext::new(Scope::Main, "/ping")
    }

    #[test]
    fn test_clone_preserves_identity() {
        let a = HandlerRef::from_fn(|_, _| HandlerResult::text("pong"));
        let b = a.clone();
        assert_eq!(a, b);
    }

    #[test]
    fn test_distinct_closures_are_distinct_handlers() {
        let a = HandlerRef::from_fn(|_, _| HandlerResult::text("pong"));
        let b = HandlerRef::from_fn(|_, _| HandlerResult::text("pong"));
        assert_ne!(a, b);
    }

    #[test]
    fn test_detached_handler_is_shared_and_defers() {
        let a = HandlerRef::detached();
        let b = HandlerRef::default();
        assert_eq!(a, b);
        assert_eq!(
            a.as_handler().handle(&ctx(), &CommandParams::new()),
            HandlerResult::DeferToAgent { agent_hint: None }
        );
    }

    #[test]
    fn test_struct_handler_receives_params() {
        struct Echo;
        impl CommandHandler for Echo {
            fn handle(&self, _ctx: &RoutingContext, params: &CommandParams) -> HandlerResult {
                HandlerResult::text(params.positional.join(" "))
            }
        }

        let handler = HandlerRef::new(Echo);
        let params = CommandParams::new()
            .with_positional("hello")
            .with_positional("team");
        assert_eq!(
            handler.as_handler().handle(&ctx(), &params),
            HandlerResult::text("hello team")
        );
    }

    #[test]
    fn test_handler_result_serializes_tagged() {
        let json = serde_json::to_value(HandlerResult::failed("no squad")).unwrap();
        assert_eq!(json["status"], "failed");
        assert_eq!(json["reason"], "no squad");
    }
}
