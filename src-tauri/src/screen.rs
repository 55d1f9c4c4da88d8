// =============================================================================
// screen.rs - État de l'écran d'extraction / Extraction screen state
// =============================================================================
//
// Toutes les transitions de l'écran passent par ici ; les commandes Tauri ne
// font que verrouiller, appeler et émettre.
// Every screen transition goes through here; Tauri commands only lock, call
// and emit.

use serde::Serialize;
use tracing::{error, info};

use crate::color::{ColorInfo, ColorSwatch};
use crate::error::AppError;
use crate::picker::FileInfo;

/// Instantané de l'écran envoyé au front-end
/// Screen snapshot sent to the front-end
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScreenStore {
    /// Plateforme actuelle (macos, windows, linux, android, ios)
    /// Current platform (macos, windows, linux, android, ios)
    pub platform: &'static str,

    /// Fichier sélectionné, pour l'aperçu / Selected file, for the preview
    pub file: Option<FileInfo>,

    /// Téléversement en cours / Upload in progress
    pub loading: bool,

    /// Couleurs extraites / Extracted colors
    pub colors: Vec<ColorSwatch>,

    /// Message d'erreur affiché / Displayed error message
    pub message: Option<String>,

    /// Le bouton "Clear Selection" est actif / The "Clear Selection" button is enabled
    pub can_clear: bool,
}

impl Default for ScreenStore {
    fn default() -> Self {
        Self {
            platform: std::env::consts::OS,
            file: None,
            loading: false,
            colors: Vec::new(),
            message: None,
            can_clear: false,
        }
    }
}

impl ScreenStore {
    /// Passe en chargement pour `file` / Enters the loading state for `file`
    ///
    /// # Errors
    /// [`AppError::Busy`] si un téléversement est déjà en cours
    /// [`AppError::Busy`] if an upload is already running
    pub fn begin_upload(&mut self, file: FileInfo) -> Result<(), AppError> {
        if self.loading {
            return Err(AppError::Busy);
        }
        self.file = Some(file);
        self.loading = true;
        self.colors.clear();
        self.message = None;
        self.refresh();
        Ok(())
    }

    /// Termine le chargement avec le résultat du service
    /// Leaves the loading state with the service result
    pub fn finish_upload(&mut self, result: Result<Vec<ColorInfo>, AppError>) {
        self.loading = false;
        match result {
            Ok(colors) => {
                self.colors = colors.into_iter().map(ColorSwatch::from_info).collect();
                self.message = None;
            }
            Err(err) => {
                error!("API Error: {err}");
                self.colors.clear();
                self.message = Some(err.user_message());
            }
        }
        self.refresh();
    }

    /// Le sélecteur de fichier a échoué / The file picker failed
    pub fn fail_selection(&mut self, err: &AppError) {
        error!("Error picking file: {err}");
        self.message = Some(err.user_message());
        self.refresh();
    }

    /// Efface le fichier et les couleurs, si autorisé
    /// Clears the file and the colors, when allowed
    ///
    /// # Returns
    /// `true` si l'écran a été effacé / `true` if the screen was cleared
    pub fn clear(&mut self) -> bool {
        if !self.can_clear {
            return false;
        }
        self.file = None;
        self.colors.clear();
        self.message = None;
        self.refresh();
        info!("selection cleared");
        true
    }

    fn refresh(&mut self) {
        self.can_clear = !self.loading && self.file.is_some();
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use crate::picker::SelectedFile;

    fn file() -> FileInfo {
        SelectedFile::from_bytes("/tmp/photo.jpg", vec![0; 4]).info
    }

    fn colors() -> Vec<ColorInfo> {
        vec![ColorInfo {
            hex: "#FAFAFA".to_string(),
            rgb: "rgb(250, 250, 250)".to_string(),
            hsl: "hsl(0, 0%, 98%)".to_string(),
        }]
    }

    #[test]
    fn test_initial_state() {
        let store = ScreenStore::default();
        assert!(!store.loading);
        assert!(!store.can_clear);
        assert!(store.colors.is_empty());
    }

    #[test]
    fn test_successful_upload() {
        let mut store = ScreenStore::default();
        store.begin_upload(file()).unwrap();
        assert!(store.loading);
        assert!(!store.can_clear);

        store.finish_upload(Ok(colors()));
        assert!(!store.loading);
        assert!(store.can_clear);
        assert_eq!(store.colors.len(), 1);
        assert_eq!(store.colors[0].text_color, "#000000");
    }

    #[test]
    fn test_failed_upload_shows_message() {
        let mut store = ScreenStore::default();
        store.begin_upload(file()).unwrap();
        store.finish_upload(Err(AppError::EmptyResult));

        assert!(!store.loading);
        assert!(store.colors.is_empty());
        assert_eq!(store.message.as_deref(), Some("No colors were found in this image."));
        // Le fichier reste affiché / The file stays displayed
        assert!(store.file.is_some());
    }

    #[test]
    fn test_second_upload_rejected_while_loading() {
        let mut store = ScreenStore::default();
        store.begin_upload(file()).unwrap();
        assert!(matches!(store.begin_upload(file()), Err(AppError::Busy)));
    }

    #[test]
    fn test_new_upload_resets_previous_result() {
        let mut store = ScreenStore::default();
        store.begin_upload(file()).unwrap();
        store.finish_upload(Err(AppError::EmptyResult));
        store.begin_upload(file()).unwrap();
        assert_eq!(store.message, None);
        assert!(store.colors.is_empty());
    }

    #[test]
    fn test_clear_rules() {
        let mut store = ScreenStore::default();
        // Rien à effacer / Nothing to clear
        assert!(!store.clear());

        store.begin_upload(file()).unwrap();
        // Interdit pendant le chargement / Forbidden while loading
        assert!(!store.clear());

        store.finish_upload(Ok(colors()));
        assert!(store.clear());
        assert!(store.file.is_none());
        assert!(store.colors.is_empty());
        assert!(!store.can_clear);
    }

    #[test]
    fn test_selection_failure() {
        let mut store = ScreenStore::default();
        let err = AppError::FileSelection(std::io::Error::other("denied"));
        store.fail_selection(&err);
        assert_eq!(store.message.as_deref(), Some("Could not open the selected file."));
    }

    #[test]
    fn test_snapshot_serialization() {
        let mut store = ScreenStore::default();
        store.begin_upload(file()).unwrap();
        let json = serde_json::to_value(&store).unwrap();
        assert_eq!(json["loading"], true);
        assert_eq!(json["canClear"], false);
        assert_eq!(json["file"]["name"], "photo.jpg");
        assert_eq!(json["file"]["mimeType"], "image/jpeg");
    }
}
