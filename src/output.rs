//! Output formatting for CLI display.
//!
//! Provides the [`PrettyPrint`] trait for human-readable output
//! as an alternative to JSON serialization.

use crate::{Application, Field, FieldValue, Indexer, SystemStatus};

/// Trait for human-readable key-value output.
///
/// Implemented by entity types to provide formatted output
/// suitable for terminal display when `--json` is not specified.
pub trait PrettyPrint {
    /// Returns a formatted string for terminal display.
    fn pretty_print(&self) -> String;
}

fn header(kind: &str, id: i32, name: Option<&str>) -> Vec<String> {
    let title = match name {
        Some(name) => format!("{kind} #{id}: {name}"),
        None => format!("{kind} #{id}"),
    };
    let divider = "─".repeat(title.chars().count().max(30));
    vec![title, divider]
}

fn push_fields(lines: &mut Vec<String>, fields: &[Field]) {
    if fields.is_empty() {
        return;
    }
    lines.push("Fields:".to_string());
    for field in fields {
        let name = field.name.as_deref().unwrap_or("?");
        let value = match &field.value {
            FieldValue::Absent => "-".to_string(),
            FieldValue::String(s) => s.clone(),
            other => other.to_json().to_string(),
        };
        lines.push(format!("  {name:<22} {value}"));
    }
}

fn join_tags(tags: &[i32]) -> String {
    tags.iter().map(i32::to_string).collect::<Vec<_>>().join(", ")
}

impl PrettyPrint for Indexer {
    fn pretty_print(&self) -> String {
        let mut lines = header("Indexer", self.id, self.name.as_deref());

        if let Some(ref implementation) = self.implementation {
            lines.push(format!("Implementation: {}", implementation));
        }
        lines.push(format!("Protocol:       {}", self.protocol));
        lines.push(format!("Enabled:        {}", if self.enable { "yes" } else { "no" }));
        lines.push(format!("Priority:       {}", self.priority));
        if !self.tags.is_empty() {
            lines.push(format!("Tags:           {}", join_tags(&self.tags)));
        }

        push_fields(&mut lines, &self.fields);
        lines.join("\n")
    }
}

impl PrettyPrint for Application {
    fn pretty_print(&self) -> String {
        let mut lines = header("Application", self.id, self.name.as_deref());

        if let Some(ref implementation) = self.implementation {
            lines.push(format!("Implementation: {}", implementation));
        }
        if let Some(ref sync_level) = self.sync_level {
            lines.push(format!("Sync Level:     {}", sync_level));
        }
        if !self.tags.is_empty() {
            lines.push(format!("Tags:           {}", join_tags(&self.tags)));
        }

        push_fields(&mut lines, &self.fields);
        lines.join("\n")
    }
}

impl PrettyPrint for SystemStatus {
    fn pretty_print(&self) -> String {
        let app = self.app_name.as_deref().unwrap_or("Prowlarr");
        let title = format!("{} {}", app, self.version.as_deref().unwrap_or("(unknown version)"));
        let divider = "─".repeat(title.chars().count().max(30));

        let mut lines = vec![title, divider];

        if let Some(ref instance) = self.instance_name {
            lines.push(format!("Instance:       {}", instance));
        }
        lines.push(format!("Platform:       {}", self.platform()));
        if let Some(ref branch) = self.branch {
            lines.push(format!("Branch:         {}", branch));
        }
        if let Some(ref runtime) = self.runtime_version {
            lines.push(format!("Runtime:        {}", runtime));
        }
        if let Some(ref started) = self.start_time {
            lines.push(format!("Started:        {}", started.format("%Y-%m-%d %H:%M:%S UTC")));
        }
        if self.update_available {
            lines.push("Update:         available".to_string());
        }

        lines.join("\n")
    }
}
