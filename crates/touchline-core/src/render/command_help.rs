use crate::errors::Result;
use crate::model::Scope;
use crate::registry::CommandRegistry;

/// Render help text for one command as seen from `scope`
///
/// Sections, in order: header, long help, parameters, examples, aliases,
/// permission, feature and scope. Empty sections are omitted.
///
/// # Errors
/// * `CommandNotFound` - no variant of `name` is visible from `scope`
pub fn render_command_help(registry: &CommandRegistry, name: &str, scope: Scope) -> Result<String> {
    let record = registry.require(name, scope)?;

    let mut output = String::new();

    output.push_str(&format!("{} - {}\n", record.name, record.description));

    if let Some(help) = record.help_text.as_deref().filter(|h| !h.trim().is_empty()) {
        output.push_str(&format!("\n{}\n", help.trim_end()));
    }

    if !record.parameters.is_empty() {
        output.push_str("\nParameters:\n");
        for (param, description) in &record.parameters {
            output.push_str(&format!("  {} - {}\n", param, description));
        }
    }

    if !record.examples.is_empty() {
        output.push_str("\nExamples:\n");
        for example in &record.examples {
            output.push_str(&format!("  {}\n", example));
        }
    }

    let aliases: Vec<&str> = registry.aliases_of(&record.name).collect();
    output.push('\n');
    if !aliases.is_empty() {
        output.push_str(&format!("Aliases: {}\n", aliases.join(", ")));
    }
    output.push_str(&format!("Permission: {}\n", record.permission));
    output.push_str(&format!("Feature: {}\n", record.feature));
    output.push_str(&format!("Scope: {}\n", record.scope));

    Ok(output)
}
