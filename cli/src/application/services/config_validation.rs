//! Application service: exhaustive configuration validation.
//!
//! Unlike the deploy path, every field is checked independently and all
//! problems are returned together.

use release_plugin_common::{ConfigParser, ValidateResponse, ValidationBuilder};

use crate::application::ports::HostResolver;
use crate::application::services::repository_guard::validate_repository_url;
use crate::domain::config::{DEFAULT_POM_PATH, keys};
use crate::domain::validate::{validate_coordinate, validate_path, validate_profile};

/// Validate a configuration map without deploying anything.
pub async fn validate(resolver: &impl HostResolver, parser: &ConfigParser<'_>) -> ValidateResponse {
    let mut vb = ValidationBuilder::new();

    check_coordinate(&mut vb, parser, keys::GROUP_ID, "Maven group ID is required");
    check_coordinate(&mut vb, parser, keys::ARTIFACT_ID, "Maven artifact ID is required");

    let pom_path = parser.get_string(keys::POM_PATH, "", DEFAULT_POM_PATH);
    if let Err(e) = validate_path(&pom_path) {
        vb.add_error(keys::POM_PATH, e.to_string());
    }

    let repository = parser.get_string(keys::REPOSITORY, "", "");
    if !repository.is_empty()
        && let Err(e) = validate_repository_url(resolver, &repository).await
    {
        vb.add_error(keys::REPOSITORY, e.to_string());
    }

    let settings = parser.get_string(keys::SETTINGS, "", "");
    if !settings.is_empty()
        && let Err(e) = validate_path(&settings)
    {
        vb.add_error(keys::SETTINGS, e.to_string());
    }

    for profile in parser.get_string_slice(keys::PROFILES) {
        if let Err(e) = validate_profile(&profile) {
            vb.add_error(keys::PROFILES, format!("invalid profile '{profile}': {e}"));
        }
    }

    let response = vb.build();
    if !response.valid {
        tracing::debug!(errors = response.errors.len(), "configuration invalid");
    }
    response
}

fn check_coordinate(
    vb: &mut ValidationBuilder,
    parser: &ConfigParser<'_>,
    field: &'static str,
    required_message: &str,
) {
    let value = parser.get_string(field, "", "");
    if value.is_empty() {
        vb.add_error(field, required_message);
    } else if let Err(e) = validate_coordinate(&value, field) {
        vb.add_error(field, e.to_string());
    }
}
