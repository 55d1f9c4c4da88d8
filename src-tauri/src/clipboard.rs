//! Clipboard access for copying color codes.

use tracing::{info, warn};

use crate::error::AppError;

/// Destination d'une copie de texte / Destination of a text copy
pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<(), AppError>;
}

/// Presse-papiers du système, ouvert à chaque copie
/// System clipboard, opened for each copy
#[derive(Default, Debug)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), AppError> {
        let mut manager = arboard::Clipboard::new().map_err(|err| {
            warn!("Failed to initialize clipboard: {err}");
            AppError::from(err)
        })?;
        manager.set_text(text.to_string())?;
        Ok(())
    }
}

/// Copie une couleur hexadécimale telle quelle / Copies a hex color verbatim
pub fn copy_color(clipboard: &mut impl Clipboard, hex: &str) -> Result<(), AppError> {
    clipboard.set_text(hex)?;
    info!(hex, "color copied");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct MemoryClipboard {
        text: Option<String>,
    }

    impl Clipboard for MemoryClipboard {
        fn set_text(&mut self, text: &str) -> Result<(), AppError> {
            self.text = Some(text.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_copy_color() {
        let mut clipboard = MemoryClipboard::default();
        copy_color(&mut clipboard, "#A1B2C3").unwrap();
        assert_eq!(clipboard.text.as_deref(), Some("#A1B2C3"));
    }
}
