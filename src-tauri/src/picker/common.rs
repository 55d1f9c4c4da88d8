//! =============================================================================
//! common.rs - Fichier sélectionné / Selected file
//! =============================================================================

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config;

/// Métadonnées du fichier choisi, exposées au front-end
/// Metadata of the chosen file, exposed to the front-end
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FileInfo {
    /// Chemin local, utilisé pour l'aperçu / Local path, used for the preview
    pub path: PathBuf,

    /// Nom du fichier / File name
    pub name: String,

    /// Type mime, si connu / Mime type, if known
    pub mime_type: Option<String>,

    /// Taille en octets / Size in bytes
    pub size: u64,
}

impl FileInfo {
    /// Type mime envoyé au service / Mime type sent to the service
    pub fn upload_mime_type(&self) -> &str {
        self.mime_type.as_deref().unwrap_or(config::FALLBACK_MIME_TYPE)
    }
}

/// Fichier prêt à être téléversé / File ready to be uploaded
#[derive(Clone, Debug)]
pub struct SelectedFile {
    pub info: FileInfo,
    pub bytes: Vec<u8>,
}

impl SelectedFile {
    /// Construit un fichier en mémoire / Builds an in-memory file
    pub fn from_bytes(path: impl Into<PathBuf>, bytes: Vec<u8>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image".to_string());
        let mime_type = mime_type_for(&path).map(str::to_string);

        Self {
            info: FileInfo {
                path,
                name,
                mime_type,
                size: bytes.len() as u64,
            },
            bytes,
        }
    }
}

/// Devine le type mime depuis l'extension / Guesses the mime type from the extension
pub fn mime_type_for(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    let mime = match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "tif" | "tiff" => "image/tiff",
        "heic" => "image/heic",
        "svg" => "image/svg+xml",
        _ => return None,
    };
    Some(mime)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_type() {
        assert_eq!(mime_type_for(Path::new("/tmp/photo.JPG")), Some("image/jpeg"));
        assert_eq!(mime_type_for(Path::new("shot.png")), Some("image/png"));
        assert_eq!(mime_type_for(Path::new("notes.txt")), None);
        assert_eq!(mime_type_for(Path::new("README")), None);
    }

    #[test]
    fn test_from_bytes() {
        let file = SelectedFile::from_bytes("/photos/sunset.webp", vec![1, 2, 3]);
        assert_eq!(file.info.name, "sunset.webp");
        assert_eq!(file.info.size, 3);
        assert_eq!(file.info.upload_mime_type(), "image/webp");
    }

    #[test]
    fn test_unknown_type_falls_back() {
        let file = SelectedFile::from_bytes("/data/blob.bin", Vec::new());
        assert_eq!(file.info.mime_type, None);
        assert_eq!(file.info.upload_mime_type(), "application/octet-stream");
    }
}
