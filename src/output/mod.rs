//! Output formatting for discovery results.
//!
//! - [`terminal`] - Terminal output with colors

mod terminal;

pub use terminal::{
    format_field, print_resource_groups, print_subscriptions, resource_group_line,
    subscription_line,
};
