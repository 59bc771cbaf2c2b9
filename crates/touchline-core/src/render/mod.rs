//! Plain-text help rendering
//!
//! Read-side views for chat help menus. Rendering never classifies.

pub mod command_help;
pub mod feature_help;

pub use command_help::render_command_help;
pub use feature_help::render_feature_help;
