// =============================================================================
// lib.rs - Backend Tauri de l'extracteur de couleurs
// lib.rs - Tauri backend of the color extractor
// =============================================================================

// =============================================================================
// MODULES
// =============================================================================

/// Client du service d'extraction / Extraction service client
pub mod api;

/// Presse-papiers / Clipboard
pub mod clipboard;

/// Couleurs et contraste du texte / Colors and text contrast
pub mod color;

/// Configuration partagée (constantes et environnement)
/// Shared configuration (constants and environment)
pub mod config;

/// Erreurs de l'application / Application errors
pub mod error;

/// Sélecteur de fichier natif / Native file picker
pub mod picker;

/// État de l'écran / Screen state
pub mod screen;

/// Store et commandes Tauri / Store and Tauri commands
pub mod store;

use tracing::info;

use crate::config::AppConfig;
use crate::store::AppState;

// =============================================================================
// JOURNALISATION / LOGGING
// =============================================================================

/// Installe le subscriber tracing ; `RUST_LOG` a priorité
/// Installs the tracing subscriber; `RUST_LOG` takes precedence
fn init_tracing() {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match tracing_subscriber::EnvFilter::try_new(
            "error,color_extractor_lib=info,bar_indicator=info",
        ) {
            Ok(filter) => filter,
            Err(_) => tracing_subscriber::EnvFilter::new("error"),
        },
    };

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

// =============================================================================
// INITIALISATION
// INITIALIZATION
// =============================================================================

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    init_tracing();

    let config = AppConfig::from_env();
    info!(url = %config.extract_url(), n_colors = config.n_colors, "starting color extractor");

    tauri::Builder::default()
        // Initialise l'état global
        // Initialize global state
        .setup(move |app| {
            use tauri::Manager;
            app.manage(AppState::new(config)?);
            Ok(())
        })
        // Enregistre les commandes
        // Register commands
        .invoke_handler(tauri::generate_handler![
            store::get_store,
            store::pick_file,
            store::upload_path,
            store::clear_selection,
            store::copy_color,
            store::indicator_frame,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
