//! Info command

use anyhow::Result;

use crate::app::AppContext;
use crate::application::services::plugin_info;

/// Print plugin metadata and its configuration schema.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn run(app: &AppContext) -> Result<()> {
    app.renderer().render_info(&plugin_info::info())
}
