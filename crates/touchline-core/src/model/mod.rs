pub mod handler;
pub mod metadata;
pub mod registration;
pub mod scope;

pub use handler::{CommandHandler, CommandParams, HandlerRef, HandlerResult, RoutingContext};
pub use metadata::{ClarityLevel, CommandKind, CommandMetadata, NluProfile, PermissionLevel};
pub use registration::CommandRegistration;
pub use scope::Scope;
