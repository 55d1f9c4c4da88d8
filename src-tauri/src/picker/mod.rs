// =============================================================================
// picker/mod.rs - Sélecteur de fichier natif / Native file picker
// =============================================================================

/// Types communs (fichier sélectionné, type mime)
/// Common types (selected file, mime type)
pub mod common;

use std::path::Path;

use tracing::{debug, info};

use crate::error::AppError;
pub use common::{FileInfo, SelectedFile};

// =============================================================================
// FONCTIONS PUBLIQUES
// PUBLIC FUNCTIONS
// =============================================================================

/// Ouvre le sélecteur de fichier natif et charge le fichier choisi
/// Opens the native file picker and loads the chosen file
///
/// # Returns
/// * `Ok(None)` - L'utilisateur a annulé / The user cancelled
/// * `Ok(Some(file))` - Fichier chargé en mémoire / File loaded in memory
pub async fn run() -> Result<Option<SelectedFile>, AppError> {
    let Some(handle) = rfd::AsyncFileDialog::new()
        .set_title("Pick a File")
        .pick_file()
        .await
    else {
        info!("file picking cancelled");
        return Ok(None);
    };

    let file = load(handle.path()).await?;
    info!(name = %file.info.name, size = file.info.size, "file selected");
    Ok(Some(file))
}

/// Charge un fichier depuis le disque / Loads a file from disk
pub async fn load(path: &Path) -> Result<SelectedFile, AppError> {
    debug!(path = %path.display(), "reading selected file");
    let bytes = tokio::fs::read(path).await?;
    Ok(SelectedFile::from_bytes(path, bytes))
}

// =============================================================================
// TESTS
// =============================================================================
