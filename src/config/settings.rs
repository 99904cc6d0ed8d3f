//! Engine settings
//!
//! Small persisted preferences the engine itself consults: the preferred
//! base currency (the normalization fallback) and whether hidden accounts
//! count toward totals.

use serde::{Deserialize, Serialize};

use super::paths::LedgerPaths;
use crate::error::{LedgerError, LedgerResult};
use crate::models::CurrencyCode;

/// Persisted engine settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Preferred currency; the fallback for normalization
    #[serde(default)]
    pub base_currency: CurrencyCode,

    /// Include hidden accounts in totals
    #[serde(default)]
    pub include_hidden_in_totals: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_currency: CurrencyCode::base(),
            include_hidden_in_totals: false,
        }
    }
}

impl Settings {
    /// Load settings, creating the file with defaults when absent
    pub fn load_or_create(paths: &LedgerPaths) -> LedgerResult<Self> {
        let path = paths.settings_file();
        if path.exists() {
            let contents = std::fs::read_to_string(&path).map_err(|e| {
                LedgerError::Config(format!("Failed to read {}: {}", path.display(), e))
            })?;
            serde_json::from_str(&contents).map_err(|e| {
                LedgerError::Config(format!("Failed to parse {}: {}", path.display(), e))
            })
        } else {
            let settings = Self::default();
            settings.save(paths)?;
            Ok(settings)
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &LedgerPaths) -> LedgerResult<()> {
        paths.ensure_directories()?;
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(paths.settings_file(), json).map_err(|e| {
            LedgerError::Config(format!("Failed to write settings: {}", e))
        })
    }

    /// Change the preferred currency, normalizing the input
    ///
    /// Unsupported codes leave the setting unchanged (the normalizer's
    /// fallback is the current value).
    pub fn set_base_currency(&mut self, code: &str) {
        self.base_currency = CurrencyCode::normalize(code, &self.base_currency);
    }
}
