//! Configuration constants and environment overrides
//!
//! These values control the extraction service client and the loading indicator.

use std::time::Duration;

use tracing::warn;

/// Base URL of the color extraction service when none is configured
/// URL de base du service d'extraction quand aucune n'est configurée
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";

/// Path of the extraction endpoint, appended to the base URL
/// Chemin de l'endpoint d'extraction, ajouté à l'URL de base
pub const EXTRACT_COLORS_PATH: &str = "/extract-colors";

/// Number of colors requested from the service
/// Nombre de couleurs demandées au service
pub const DEFAULT_N_COLORS: u32 = 10;

/// Timeout of one extraction request
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Mime type sent when the file type is unknown
/// Type mime envoyé quand le type du fichier est inconnu
pub const FALLBACK_MIME_TYPE: &str = "application/octet-stream";

/// Environment variable overriding the base URL
pub const API_URL_ENV: &str = "COLOR_EXTRACTOR_API_URL";

/// Environment variable overriding the number of colors
pub const N_COLORS_ENV: &str = "COLOR_EXTRACTOR_N_COLORS";

/// Loading indicator color (bars)
/// Couleur de l'indicateur de chargement (barres)
pub const LOADING_COLOR: &str = "#007BFF";

/// Loading indicator size in pixels
pub const LOADING_SIZE: f64 = 40.0;

/// Number of bars of the loading indicator
pub const LOADING_BARS: usize = 5;

/// Text color on light swatches / Couleur du texte sur les pastilles claires
pub const DARK_TEXT: &str = "#000000";

/// Text color on dark swatches / Couleur du texte sur les pastilles sombres
pub const LIGHT_TEXT: &str = "#FFFFFF";

/// Contrast ratios are rounded to this factor (2 decimals)
/// Les ratios de contraste sont arrondis à ce facteur (2 décimales)
pub const ROUNDING_FACTOR: f32 = 100.0;

// =============================================================================
// CONFIGURATION D'EXÉCUTION / RUNTIME CONFIGURATION
// =============================================================================

/// Configuration résolue au démarrage / Configuration resolved at startup
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub api_url: String,
    pub n_colors: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            n_colors: DEFAULT_N_COLORS,
        }
    }
}

impl AppConfig {
    /// Lit la configuration depuis l'environnement du processus
    /// Reads the configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Construit la configuration à partir d'une fonction de lecture
    /// Builds the configuration from a lookup function
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(API_URL_ENV).filter(|v| !v.trim().is_empty()) {
            config.api_url = url.trim().trim_end_matches('/').to_string();
        }

        if let Some(raw) = lookup(N_COLORS_ENV) {
            match raw.trim().parse::<u32>() {
                Ok(n) if n > 0 => config.n_colors = n,
                _ => warn!(value = %raw, "ignoring invalid {}", N_COLORS_ENV),
            }
        }

        config
    }

    /// URL complète de l'endpoint d'extraction / Full URL of the extraction endpoint
    pub fn extract_url(&self) -> String {
        format!("{}{}", self.api_url, EXTRACT_COLORS_PATH)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(|_| None);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.extract_url(), "http://127.0.0.1:5000/extract-colors");
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(|key| match key {
            API_URL_ENV => Some("https://colors.example.com/".to_string()),
            N_COLORS_ENV => Some("6".to_string()),
            _ => None,
        });
        assert_eq!(config.extract_url(), "https://colors.example.com/extract-colors");
        assert_eq!(config.n_colors, 6);
    }

    #[test]
    fn test_invalid_count_ignored() {
        let config = AppConfig::from_lookup(|key| match key {
            N_COLORS_ENV => Some("lots".to_string()),
            _ => None,
        });
        assert_eq!(config.n_colors, DEFAULT_N_COLORS);
    }
}
