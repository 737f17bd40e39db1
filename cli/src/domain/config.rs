//! Deploy configuration record and its mapping from the host config map.
//!
//! Nothing here touches the filesystem. The environment is read only
//! through the injected [`ConfigParser`].

use std::fmt;

use release_plugin_common::ConfigParser;
use serde_json::{Map, Value};

// ── Constants ────────────────────────────────────────────────────────────────

pub const DEFAULT_POM_PATH: &str = "pom.xml";

/// Environment fallbacks for repository credentials.
pub const USERNAME_ENV: &str = "MAVEN_USERNAME";
pub const PASSWORD_ENV: &str = "MAVEN_PASSWORD";

/// Configuration keys as the host sends them.
pub mod keys {
    pub const GROUP_ID: &str = "group_id";
    pub const ARTIFACT_ID: &str = "artifact_id";
    pub const POM_PATH: &str = "pom_path";
    pub const USERNAME: &str = "username";
    pub const PASSWORD: &str = "password";
    pub const REPOSITORY: &str = "repository";
    pub const SKIP_TESTS: &str = "skip_tests";
    pub const SETTINGS: &str = "settings";
    pub const PROFILES: &str = "profiles";
}

// ── Config record ────────────────────────────────────────────────────────────

/// Everything one deploy attempt needs, read once from the config map.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct DeployConfig {
    pub group_id: String,
    pub artifact_id: String,
    pub pom_path: String,
    pub username: String,
    pub password: String,
    pub repository: String,
    pub skip_tests: bool,
    pub settings: String,
    pub profiles: Vec<String>,
}

impl DeployConfig {
    /// Read the config map, applying the `pom.xml` default and the
    /// `MAVEN_USERNAME` / `MAVEN_PASSWORD` fallbacks.
    #[must_use]
    pub fn from_parser(parser: &ConfigParser<'_>) -> Self {
        Self {
            group_id: parser.get_string(keys::GROUP_ID, "", ""),
            artifact_id: parser.get_string(keys::ARTIFACT_ID, "", ""),
            pom_path: parser.get_string(keys::POM_PATH, "", DEFAULT_POM_PATH),
            username: parser.get_string(keys::USERNAME, USERNAME_ENV, ""),
            password: parser.get_string(keys::PASSWORD, PASSWORD_ENV, ""),
            repository: parser.get_string(keys::REPOSITORY, "", ""),
            skip_tests: parser.get_bool(keys::SKIP_TESTS, false),
            settings: parser.get_string(keys::SETTINGS, "", ""),
            profiles: parser.get_string_slice(keys::PROFILES),
        }
    }

    /// Shorthand for [`DeployConfig::from_parser`] over the process environment.
    #[must_use]
    pub fn from_map(raw: &Map<String, Value>) -> Self {
        Self::from_parser(&ConfigParser::new(raw))
    }

    /// `pom_path`, or the default when unset.
    #[must_use]
    pub fn effective_pom_path(&self) -> &str {
        if self.pom_path.is_empty() {
            DEFAULT_POM_PATH
        } else {
            &self.pom_path
        }
    }

    /// Credentials to export to Maven's environment. Empty values are skipped.
    #[must_use]
    pub fn credential_env(&self) -> Vec<(&'static str, &str)> {
        [(USERNAME_ENV, self.username.as_str()), (PASSWORD_ENV, self.password.as_str())]
            .into_iter()
            .filter(|(_, value)| !value.is_empty())
            .collect()
    }
}

impl fmt::Debug for DeployConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let password = if self.password.is_empty() { "" } else { "<redacted>" };
        f.debug_struct("DeployConfig")
            .field("group_id", &self.group_id)
            .field("artifact_id", &self.artifact_id)
            .field("pom_path", &self.pom_path)
            .field("username", &self.username)
            .field("password", &password)
            .field("repository", &self.repository)
            .field("skip_tests", &self.skip_tests)
            .field("settings", &self.settings)
            .field("profiles", &self.profiles)
            .finish()
    }
}

// ── Unit tests ───────────────────────────────────────────────────────────────
