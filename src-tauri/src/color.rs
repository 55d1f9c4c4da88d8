// =============================================================================
// color.rs - Couleurs extraites et contraste du texte
// color.rs - Extracted colors and text contrast
// =============================================================================

use std::num::IntErrorKind;
use std::sync::LazyLock;

use bigcolor::BigColor;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config;
use crate::error::ColorError;

/// `hsl(H, S%, L%)`, percent signs and spaces after commas optional
static HSL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"hsl\((\d+),\s*(\d+)%?,\s*(\d+)%?\)").expect("HSL pattern is valid")
});

// =============================================================================
// STRUCTURES
// =============================================================================

/// Couleur telle que renvoyée par le service d'extraction
/// Color as returned by the extraction service
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ColorInfo {
    /// Format "#A1B2C3"
    #[serde(rename = "Hex")]
    pub hex: String,

    /// Format "rgb(161, 178, 195)"
    #[serde(rename = "RGB")]
    pub rgb: String,

    /// Format "hsl(210, 20%, 70%)"
    #[serde(rename = "HSL")]
    pub hsl: String,
}

/// Couleur prête à afficher / Color ready for display
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ColorSwatch {
    #[serde(flatten)]
    pub info: ColorInfo,

    /// Couleur du texte posé sur la pastille ("#000000" ou "#FFFFFF")
    /// Color of the text drawn on the swatch ("#000000" or "#FFFFFF")
    pub text_color: String,

    /// Ratio de contraste texte/pastille, arrondi à 2 décimales
    /// Text/swatch contrast ratio, rounded to 2 decimals
    pub contrast_ratio: Option<f32>,
}

impl ColorSwatch {
    pub fn from_info(info: ColorInfo) -> Self {
        // Une couleur mal formée ne doit pas casser toute la liste
        // A malformed color must not break the whole list
        let text_color = match check_color(&info.hsl) {
            Ok(color) => color,
            Err(err) => {
                warn!(hex = %info.hex, "{err}, using light text");
                config::LIGHT_TEXT
            }
        };

        let contrast_ratio = contrast_ratio(&info.hex, text_color).ok();

        Self {
            info,
            text_color: text_color.to_string(),
            contrast_ratio,
        }
    }
}

// =============================================================================
// FONCTIONS / FUNCTIONS
// =============================================================================

/// Choisit un texte noir ou blanc selon la luminosité HSL
/// Picks black or white text from the HSL lightness
///
/// # Returns
/// `"#000000"` si la luminosité dépasse 50 %, sinon `"#FFFFFF"`
/// `"#000000"` when lightness is above 50 %, otherwise `"#FFFFFF"`
///
/// # Errors
/// [`ColorError::InvalidHsl`] when the string does not match `hsl(H, S%, L%)`
pub fn check_color(hsl: &str) -> Result<&'static str, ColorError> {
    let caps = HSL_PATTERN
        .captures(hsl)
        .ok_or_else(|| ColorError::InvalidHsl(hsl.to_string()))?;

    let lightness = match caps[3].parse::<u64>() {
        Ok(value) => value,
        // Trop de chiffres : bien au-delà de 50 / Too many digits: far above 50
        Err(err) if *err.kind() == IntErrorKind::PosOverflow => u64::MAX,
        Err(_) => return Err(ColorError::InvalidHsl(hsl.to_string())),
    };

    Ok(if lightness > 50 {
        config::DARK_TEXT
    } else {
        config::LIGHT_TEXT
    })
}

/// Décode "#RRGGBB" (ou "#RGB") en composantes RGB
/// Decodes "#RRGGBB" (or "#RGB") into RGB components
pub fn parse_hex(hex: &str) -> Result<(u8, u8, u8), ColorError> {
    let invalid = || ColorError::InvalidHex(hex.to_string());
    let digits = hex.trim().strip_prefix('#').ok_or_else(invalid)?;
    if !digits.is_ascii() {
        return Err(invalid());
    }

    let expanded: String = match digits.len() {
        3 => digits.chars().flat_map(|c| [c, c]).collect(),
        6 => digits.to_string(),
        _ => return Err(invalid()),
    };

    let channel = |i: usize| u8::from_str_radix(&expanded[i..i + 2], 16).map_err(|_| invalid());
    Ok((channel(0)?, channel(2)?, channel(4)?))
}

/// Ratio de contraste WCAG entre deux couleurs hexadécimales
/// WCAG contrast ratio between two hex colors
pub fn contrast_ratio(background: &str, foreground: &str) -> Result<f32, ColorError> {
    let (br, bg, bb) = parse_hex(background)?;
    let (fr, fg, fb) = parse_hex(foreground)?;

    let back = BigColor::from_rgb(br, bg, bb, 1.0);
    let front = BigColor::from_rgb(fr, fg, fb, 1.0);
    let ratio = front.get_contrast_ratio(&back);

    Ok((ratio * config::ROUNDING_FACTOR).round() / config::ROUNDING_FACTOR)
}

// =============================================================================
// TESTS
// =============================================================================
