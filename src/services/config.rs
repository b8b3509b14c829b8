use tracing::info;

use crate::config::Latency;
use crate::entities::{AppConfig, ConfigPatch};
use crate::error::{AppResult, FieldErrors};
use crate::services::submit;
use crate::store::{Action, Store};

#[derive(Clone)]
pub struct ConfigService {
    store: Store,
    latency: Latency,
}

impl ConfigService {
    pub fn new(store: Store, latency: Latency) -> Self {
        Self { store, latency }
    }

    pub async fn get_config(&self) -> AppConfig {
        self.store.read(|s| s.config.clone()).await
    }

    pub async fn is_loading(&self) -> bool {
        self.store.read(|s| s.loading).await
    }

    /// Merge the given fields into the settings and return the result.
    pub async fn update_config(&self, patch: ConfigPatch) -> AppResult<AppConfig> {
        let mut errors = FieldErrors::new();
        if patch.site_name.as_deref().is_some_and(|v| v.trim().is_empty()) {
            errors.add("siteName", "El nombre del sitio es requerido");
        }
        if patch.company_name.as_deref().is_some_and(|v| v.trim().is_empty()) {
            errors.add("companyName", "El nombre de la empresa es requerido");
        }
        errors.into_result()?;

        if patch.is_empty() {
            return Ok(self.get_config().await);
        }

        submit(&self.store, self.latency.config, Action::UpdateConfig(patch)).await;
        let config = self.get_config().await;
        info!(theme = config.theme.as_str(), language = %config.language, "Configuration updated");

        Ok(config)
    }
}
