//! Terminal output utilities.
//!
//! Provides formatting helpers for listing subscriptions and resource groups.

use crate::models::{ResourceGroup, Subscription};
use colored::Colorize;
use serde_json::Value;

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// A quoted, right-aligned string
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    let quoted = format!("\"{value_str}\"");
    let quoted_len = quoted.len();

    if quoted_len >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

/// One line per subscription: id, state, display name.
pub fn subscription_line(sub: &Subscription) -> String {
    format!(
        "{id},{state},{name}",
        id = format_field(sub.subscription_id.as_deref().unwrap_or("-"), 38),
        state = format_field(sub.state.as_deref().unwrap_or("-"), 10),
        name = format_field(sub.display_name.as_deref().unwrap_or("-"), 0),
    )
}

/// One line per resource group: name, location, provisioning state.
pub fn resource_group_line(rg: &ResourceGroup) -> String {
    format!(
        "{name},{location},{state}",
        name = format_field(rg.name.as_deref().unwrap_or("-"), 30),
        location = format_field(rg.location.as_deref().unwrap_or("-"), 16),
        state = format_field(rg.provisioning_state().unwrap_or("-"), 0),
    )
}

/// Print subscriptions, highlighting the one the session is using.
pub fn print_subscriptions(subscriptions: &[Subscription], current: &str) {
    println!("{}", "# Subscriptions".bold());
    for sub in subscriptions {
        let line = subscription_line(sub);
        if sub.subscription_id.as_deref() == Some(current) {
            println!("{}", line.green());
        } else {
            println!("{line}");
        }
    }
}

/// Print the `value` entries of a resource group listing body.
pub fn print_resource_groups(body: &Value) {
    println!("{}", "# Resource groups".bold());
    let groups = body.get("value").and_then(Value::as_array);
    for entry in groups.into_iter().flatten() {
        match serde_json::from_value::<ResourceGroup>(entry.clone()) {
            Ok(rg) => println!("{}", resource_group_line(&rg)),
            Err(e) => log::warn!("Skipping resource group entry: {e}"),
        }
    }
}
