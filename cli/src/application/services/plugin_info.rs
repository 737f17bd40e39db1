//! Application service: plugin metadata advertised to the host.

use release_plugin_common::{Hook, PluginInfo};
use serde_json::json;

pub const PLUGIN_NAME: &str = "maven";

/// Metadata and configuration schema for this plugin.
#[must_use]
pub fn info() -> PluginInfo {
    PluginInfo {
        name: PLUGIN_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        description: "Publish artifacts to Maven Central (Java)".to_string(),
        author: "maven-deploy contributors".to_string(),
        hooks: vec![Hook::PostPublish],
        config_schema: config_schema(),
    }
}

fn config_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "group_id": { "type": "string", "description": "Maven group ID (e.g., com.example)" },
            "artifact_id": { "type": "string", "description": "Maven artifact ID" },
            "pom_path": { "type": "string", "description": "Path to pom.xml", "default": "pom.xml" },
            "username": { "type": "string", "description": "Maven repository username (or use MAVEN_USERNAME env)" },
            "password": { "type": "string", "description": "Maven repository password (or use MAVEN_PASSWORD env)" },
            "repository": { "type": "string", "description": "Maven repository URL (HTTPS; HTTP only for localhost)" },
            "skip_tests": { "type": "boolean", "description": "Skip tests during deploy", "default": false },
            "settings": { "type": "string", "description": "Path to settings.xml (optional)" },
            "profiles": {
                "type": "array",
                "items": { "type": "string" },
                "description": "Maven profiles to activate (optional)"
            }
        },
        "required": ["group_id", "artifact_id"]
    })
}
