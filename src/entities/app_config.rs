use async_graphql::{Enum, InputObject, SimpleObject};
use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString, IntoStaticStr};

#[derive(Enum, Copy, Clone, Eq, PartialEq, Debug, Serialize, Deserialize, EnumIter, EnumString, IntoStaticStr)]
#[graphql(name = "Theme")]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Theme {
    Light,
    Dark,
    System,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

/// Application-wide settings. There is exactly one per running instance.
#[derive(SimpleObject, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    pub site_name: String,
    pub company_name: String,
    pub theme: Theme,
    pub language: String,
    pub timezone: String,
    pub email_notifications: bool,
    pub slack_integration: bool,
    pub auto_backup: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            site_name: "Dashboard de Proyectos".to_string(),
            company_name: "Mi Empresa Tech".to_string(),
            theme: Theme::Light,
            language: "es".to_string(),
            timezone: "America/Lima".to_string(),
            email_notifications: true,
            slack_integration: false,
            auto_backup: true,
        }
    }
}

/// Partial settings update. Only the fields that are present are merged.
#[derive(InputObject, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[graphql(name = "ConfigInput")]
#[serde(rename_all = "camelCase", default)]
pub struct ConfigPatch {
    pub site_name: Option<String>,
    pub company_name: Option<String>,
    pub theme: Option<Theme>,
    pub language: Option<String>,
    pub timezone: Option<String>,
    pub email_notifications: Option<bool>,
    pub slack_integration: Option<bool>,
    pub auto_backup: Option<bool>,
}

impl ConfigPatch {
    pub fn is_empty(&self) -> bool {
        *self == ConfigPatch::default()
    }

    /// Shallow merge onto `config`.
    pub fn apply(self, mut config: AppConfig) -> AppConfig {
        if let Some(site_name) = self.site_name {
            config.site_name = site_name;
        }
        if let Some(company_name) = self.company_name {
            config.company_name = company_name;
        }
        if let Some(theme) = self.theme {
            config.theme = theme;
        }
        if let Some(language) = self.language {
            config.language = language;
        }
        if let Some(timezone) = self.timezone {
            config.timezone = timezone;
        }
        if let Some(email_notifications) = self.email_notifications {
            config.email_notifications = email_notifications;
        }
        if let Some(slack_integration) = self.slack_integration {
            config.slack_integration = slack_integration;
        }
        if let Some(auto_backup) = self.auto_backup {
            config.auto_backup = auto_backup;
        }
        config
    }
}
