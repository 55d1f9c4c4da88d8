// =============================================================================
// error.rs - Erreurs de l'application / Application errors
// =============================================================================

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Erreur du format de couleur / Color format error
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// Chaîne HSL non reconnue / Unrecognized HSL string
    #[error("invalid HSL format: {0:?}")]
    InvalidHsl(String),

    /// Chaîne hexadécimale non reconnue / Unrecognized hex string
    #[error("invalid hex color: {0:?}")]
    InvalidHex(String),
}

/// Erreurs remontées à l'écran / Errors surfaced to the screen
#[derive(Debug, Error)]
pub enum AppError {
    /// Le sélecteur de fichier a échoué / The file picker failed
    #[error("file selection failed: {0}")]
    FileSelection(#[from] std::io::Error),

    /// Requête impossible (réseau, DNS, délai) / Request failed (network, DNS, timeout)
    #[error("request to the color service failed: {0}")]
    Network(#[from] reqwest::Error),

    /// Le service a répondu avec un statut d'erreur
    /// The service answered with an error status
    #[error("color service returned status {status}: {body}")]
    Server { status: u16, body: String },

    /// Réponse 2xx sans couleurs / 2xx response without colors
    #[error("no colors found in response")]
    EmptyResult,

    /// Réponse JSON illisible / Unreadable JSON response
    #[error("invalid response from the color service: {0}")]
    InvalidResponse(#[from] serde_json::Error),

    /// Presse-papiers indisponible / Clipboard unavailable
    #[error("clipboard error: {0}")]
    Clipboard(String),

    /// Un téléversement est déjà en cours / An upload is already running
    #[error("an upload is already in progress")]
    Busy,
}

impl AppError {
    /// Message affiché à l'utilisateur / Message displayed to the user
    pub fn user_message(&self) -> String {
        match self {
            AppError::FileSelection(_) => "Could not open the selected file.".to_string(),
            AppError::Network(_) => {
                "Could not reach the color service. Check your connection and try again.".to_string()
            }
            AppError::Server { status, .. } => {
                format!("The color service failed (status {status}).")
            }
            AppError::EmptyResult => "No colors were found in this image.".to_string(),
            AppError::InvalidResponse(_) => "The color service sent an invalid response.".to_string(),
            AppError::Clipboard(_) => "Could not copy the color.".to_string(),
            AppError::Busy => "Please wait for the current upload to finish.".to_string(),
        }
    }
}

impl From<arboard::Error> for AppError {
    fn from(err: arboard::Error) -> Self {
        AppError::Clipboard(err.to_string())
    }
}

// Les commandes Tauri exigent des erreurs sérialisables
// Tauri commands require serializable errors
impl Serialize for AppError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.user_message())
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages() {
        let err = AppError::Server {
            status: 502,
            body: "bad gateway".to_string(),
        };
        assert_eq!(err.user_message(), "The color service failed (status 502).");
        assert_eq!(err.to_string(), "color service returned status 502: bad gateway");
    }

    #[test]
    fn test_serializes_as_message() {
        let json = serde_json::to_string(&AppError::EmptyResult).unwrap();
        assert_eq!(json, "\"No colors were found in this image.\"");
    }
}
