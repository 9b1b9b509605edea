//! Configuration management for acton-admin
//!
//! Configuration is loaded from multiple sources with clear precedence:
//!
//! 1. Environment variables (highest priority, `ACTON_ADMIN_` prefix)
//! 2. `./config.toml` (development)
//! 3. `~/.config/acton-admin/{service}/config.toml` (user config, XDG)
//! 4. `/etc/acton-admin/{service}/config.toml` (system config)
//! 5. Hardcoded defaults (fallback)
//!
//! # Example Configuration
//!
//! ```toml
//! # config.toml
//! [admin]
//! api_prefix = "api/"
//! max_page_size = 100
//!
//! [labels]
//! list_suffix = "列表"
//! create_prefix = "创建"
//! edit_prefix = "编辑"
//! select_prefix = "请选择"
//! ```
//!
//! Nested keys map to environment variables with a double underscore, e.g.
//! `ACTON_ADMIN_ADMIN__MAX_PAGE_SIZE=50`.

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Resource page settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminSettings {
    /// Path prefix stripped from request paths when deriving form endpoints
    pub api_prefix: String,

    /// Upper bound on the `pageSize` a client may request
    pub max_page_size: u64,

    /// Top margin of create/edit forms
    pub form_margin_top: String,
}

impl Default for AdminSettings {
    fn default() -> Self {
        Self {
            api_prefix: "api/".to_string(),
            max_page_size: 100,
            form_margin_top: "30px".to_string(),
        }
    }
}

/// User-facing strings placed on generated pages
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    /// Appended to the resource title on the index page
    pub list_suffix: String,
    /// Prepended to the resource title on the creation page
    pub create_prefix: String,
    /// Prepended to the resource title on the update page
    pub edit_prefix: String,
    /// Form reset button
    pub reset: String,
    /// Form submit button
    pub submit: String,
    /// Back link
    pub back: String,
    /// Placeholder prefix for pick-from-options search controls
    pub select_prefix: String,
    /// Placeholder prefix for typed search controls
    pub enter_prefix: String,
    /// Create link on the index toolbar
    pub create: String,
    /// Edit link on each row
    pub edit: String,
    /// Header of the per-row button column
    pub actions: String,
    /// Delete action
    pub delete: String,
    /// Confirmation shown before deleting
    pub delete_confirm: String,
    /// Message returned after a successful save
    pub saved: String,
    /// Message returned after a successful action
    pub succeeded: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            list_suffix: " List".to_string(),
            create_prefix: "Create ".to_string(),
            edit_prefix: "Edit ".to_string(),
            reset: "Reset".to_string(),
            submit: "Submit".to_string(),
            back: "Back".to_string(),
            select_prefix: "Select ".to_string(),
            enter_prefix: "Enter ".to_string(),
            create: "Create".to_string(),
            edit: "Edit".to_string(),
            actions: "Actions".to_string(),
            delete: "Delete".to_string(),
            delete_confirm: "Delete the selected records?".to_string(),
            saved: "Saved".to_string(),
            succeeded: "Done".to_string(),
        }
    }
}

/// Complete acton-admin configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AdminConfig {
    /// Resource page settings
    #[serde(default)]
    pub admin: AdminSettings,

    /// User-facing strings
    #[serde(default)]
    pub labels: Labels,
}

impl AdminConfig {
    /// Load configuration for a specific service
    ///
    /// Searches for configuration in XDG-compliant locations with precedence:
    /// 1. Environment variables (`ACTON_ADMIN_*`)
    /// 2. `./config.toml`
    /// 3. `~/.config/acton-admin/{service_name}/config.toml`
    /// 4. `/etc/acton-admin/{service_name}/config.toml`
    /// 5. Defaults
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file cannot be parsed or a value
    /// has the wrong type.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use acton_admin::config::AdminConfig;
    ///
    /// # fn example() -> anyhow::Result<()> {
    /// let config = AdminConfig::load_for_service("my-admin")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn load_for_service(service_name: &str) -> anyhow::Result<Self> {
        let mut figment = Figment::new().merge(Toml::string(&toml::to_string(&Self::default())?));

        let system_config = PathBuf::from("/etc/acton-admin")
            .join(service_name)
            .join("config.toml");
        if system_config.exists() {
            figment = figment.merge(Toml::file(&system_config));
        }

        let user_config = Self::recommended_path(service_name);
        if user_config.exists() {
            figment = figment.merge(Toml::file(&user_config));
        }

        let local_config = PathBuf::from("./config.toml");
        if local_config.exists() {
            figment = figment.merge(Toml::file(&local_config));
        }

        let config: Self = figment
            .merge(Env::prefixed("ACTON_ADMIN_").split("__").lowercase(true))
            .extract()?;

        tracing::debug!(service = service_name, "Loaded admin configuration");
        Ok(config)
    }

    /// Load configuration from a specific file
    ///
    /// A missing file leaves the defaults in place.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be parsed or a value has the
    /// wrong type.
    pub fn load_from(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let config = Figment::new()
            .merge(Toml::string(&toml::to_string(&Self::default())?))
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed("ACTON_ADMIN_").split("__").lowercase(true))
            .extract()?;

        Ok(config)
    }

    /// Get the recommended XDG config path for a service
    ///
    /// ```rust
    /// use acton_admin::config::AdminConfig;
    ///
    /// let path = AdminConfig::recommended_path("my-admin");
    /// assert!(path.ends_with("my-admin/config.toml"));
    /// ```
    #[must_use]
    pub fn recommended_path(service_name: &str) -> PathBuf {
        dirs::config_dir().map_or_else(
            || PathBuf::from("./config.toml"),
            |config_dir| {
                config_dir
                    .join("acton-admin")
                    .join(service_name)
                    .join("config.toml")
            },
        )
    }
}
