//! Human-readable terminal renderer.

use release_plugin_common::{ExecuteResponse, PluginInfo, ValidateResponse};
use serde_json::Value;

use crate::output::OutputContext;

/// Renders plugin responses as human-readable terminal output using
/// `OutputContext`.
pub struct HumanRenderer<'a> {
    ctx: &'a OutputContext,
}

impl<'a> HumanRenderer<'a> {
    /// Create a new `HumanRenderer` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }

    /// Render the outcome of a hook invocation.
    ///
    /// Failures go to stderr and are shown even when `quiet`.
    pub fn render_execute(&self, response: &ExecuteResponse) {
        if !response.success {
            let error = response.error.as_deref().unwrap_or("hook failed");
            self.ctx.error(error);
            return;
        }
        self.ctx.success(&response.message);
        if let Some(outputs) = &response.outputs {
            for (key, value) in outputs {
                self.ctx.kv(&format!("{key}:"), &display_value(value));
            }
        }
    }

    /// Render configuration validation results.
    pub fn render_validate(&self, response: &ValidateResponse) {
        if response.valid {
            self.ctx.success("Configuration is valid");
            return;
        }
        let count = response.errors.len();
        let noun = if count == 1 { "problem" } else { "problems" };
        self.ctx.error(&format!("Configuration has {count} {noun}"));
        for err in &response.errors {
            self.ctx.error(&err.to_string());
        }
    }

    /// Render plugin metadata.
    pub fn render_info(&self, info: &PluginInfo) {
        self.ctx.header(&format!("{} v{}", info.name, info.version));
        self.ctx.kv("Description:", &info.description);
        self.ctx.kv("Author:", &info.author);
        let hooks: Vec<&str> = info.hooks.iter().map(|h| h.as_str()).collect();
        self.ctx.kv("Hooks:", &hooks.join(", "));
    }

    /// Render the CLI version.
    pub fn render_version(&self, version: &str) {
        if self.ctx.quiet {
            return;
        }
        println!("maven-deploy {version}");
    }
}

/// Display an output value without JSON quoting; sequences are comma-joined.
#[must_use]
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(display_value)
            .collect::<Vec<_>>()
            .join(","),
        other => other.to_string(),
    }
}
