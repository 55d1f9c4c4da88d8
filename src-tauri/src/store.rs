// =============================================================================
// store.rs - Store management module
// =============================================================================

use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use bar_indicator::{BarFrame, BarIndicator, BarIndicatorProps, IndicatorFrame};
use tauri::{AppHandle, Emitter};
use tracing::{info, warn};

use crate::api::ColorApi;
use crate::clipboard::{self, SystemClipboard};
use crate::config::{self, AppConfig};
use crate::error::AppError;
use crate::picker::{self, SelectedFile};
use crate::screen::ScreenStore;

/// Nom de l'événement émis à chaque modification du store
/// Name of the event emitted on every store change
pub const STORE_UPDATED: &str = "store-updated";

/// Longest frame accepted from the front-end clock, in milliseconds
const MAX_FRAME_MS: f64 = 250.0;

// =============================================================================
// ÉTAT DE L'APPLICATION / APPLICATION STATE
// =============================================================================

/// État de l'application wrappé dans des Mutex pour thread-safety
/// Application state wrapped in Mutexes for thread-safety
pub struct AppState {
    pub store: Mutex<ScreenStore>,
    pub indicator: Mutex<BarIndicator>,
    pub api: ColorApi,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Self, Box<dyn std::error::Error>> {
        let props = BarIndicatorProps {
            count: config::LOADING_BARS,
            color: config::LOADING_COLOR.to_string(),
            size: config::LOADING_SIZE,
            ..Default::default()
        };

        Ok(Self {
            store: Mutex::new(ScreenStore::default()),
            indicator: Mutex::new(BarIndicator::bars(props, false)?),
            api: ColorApi::new(&config)?,
        })
    }

    /// Verrouille le store ; un Mutex empoisonné est récupéré
    /// Locks the store; a poisoned Mutex is recovered
    fn store(&self) -> MutexGuard<'_, ScreenStore> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn indicator(&self) -> MutexGuard<'_, BarIndicator> {
        self.indicator.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Applique `update` au store et aligne l'indicateur sur `loading`
    /// Applies `update` to the store and aligns the indicator with `loading`
    fn apply<T>(&self, update: impl FnOnce(&mut ScreenStore) -> T) -> (T, ScreenStore) {
        let (out, snapshot) = {
            let mut store = self.store();
            let out = update(&mut store);
            (out, store.clone())
        };

        self.indicator().set_animating(snapshot.loading);
        (out, snapshot)
    }

    /// Comme [`AppState::apply`], puis émet l'instantané
    /// Like [`AppState::apply`], then emits the snapshot
    fn update<T>(&self, app: &AppHandle, update: impl FnOnce(&mut ScreenStore) -> T) -> (T, ScreenStore) {
        let (out, snapshot) = self.apply(update);

        if let Err(err) = app.emit(STORE_UPDATED, &snapshot) {
            warn!("failed to emit {STORE_UPDATED}: {err}");
        }
        (out, snapshot)
    }

    /// Téléverse `file` et range le résultat dans le store
    /// Uploads `file` and stores the result
    async fn upload(&self, app: &AppHandle, file: SelectedFile) -> Result<ScreenStore, AppError> {
        let (started, _) = self.update(app, |store| store.begin_upload(file.info.clone()));
        started?;

        let result = self.api.extract_colors(&file).await;
        let (_, snapshot) = self.update(app, |store| store.finish_upload(result));
        Ok(snapshot)
    }
}

// =============================================================================
// COMMANDES TAURI
// TAURI COMMANDS
// =============================================================================

/// Récupère l'état actuel du store
/// Gets the current store state
#[tauri::command]
pub fn get_store(state: tauri::State<AppState>) -> ScreenStore {
    state.store().clone()
}

/// Ouvre le sélecteur, puis téléverse le fichier choisi
/// Opens the picker, then uploads the chosen file
#[tauri::command]
pub async fn pick_file(app: AppHandle, state: tauri::State<'_, AppState>) -> Result<ScreenStore, AppError> {
    let file = match picker::run().await {
        Ok(Some(file)) => file,
        // Annulation : rien ne change / Cancellation: nothing changes
        Ok(None) => return Ok(state.store().clone()),
        Err(err) => {
            let (_, snapshot) = state.update(&app, |store| store.fail_selection(&err));
            return Ok(snapshot);
        }
    };

    state.upload(&app, file).await
}

/// Téléverse un fichier désigné par son chemin (glisser-déposer)
/// Uploads a file given by its path (drag and drop)
#[tauri::command]
pub async fn upload_path(
    app: AppHandle,
    state: tauri::State<'_, AppState>,
    path: String,
) -> Result<ScreenStore, AppError> {
    let file = match picker::load(path.as_ref()).await {
        Ok(file) => file,
        Err(err) => {
            let (_, snapshot) = state.update(&app, |store| store.fail_selection(&err));
            return Ok(snapshot);
        }
    };

    state.upload(&app, file).await
}

/// Efface la sélection / Clears the selection
#[tauri::command]
pub fn clear_selection(app: AppHandle, state: tauri::State<AppState>) -> ScreenStore {
    let (cleared, snapshot) = state.update(&app, ScreenStore::clear);
    if !cleared {
        info!("clear ignored");
    }
    snapshot
}

/// Copie le code hexadécimal d'une couleur / Copies a color's hex code
#[tauri::command]
pub fn copy_color(hex: String) -> Result<(), AppError> {
    clipboard::copy_color(&mut SystemClipboard, &hex)
}

/// Avance l'indicateur de chargement d'une frame
/// Advances the loading indicator by one frame
///
/// # Arguments
/// * `elapsed_ms` - Temps écoulé depuis la frame précédente / Time since the previous frame
#[tauri::command]
pub fn indicator_frame(state: tauri::State<AppState>, elapsed_ms: f64) -> IndicatorFrame<BarFrame> {
    state.indicator().tick(frame_duration(elapsed_ms))
}

/// Borne le temps de frame transmis par le front-end
/// Bounds the frame time sent by the front-end
fn frame_duration(elapsed_ms: f64) -> Duration {
    if !elapsed_ms.is_finite() {
        return Duration::ZERO;
    }
    Duration::from_secs_f64(elapsed_ms.clamp(0.0, MAX_FRAME_MS) / 1000.0)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use bar_indicator::RunState;

    #[test]
    fn test_frame_duration_bounds() {
        assert_eq!(frame_duration(16.0), Duration::from_millis(16));
        assert_eq!(frame_duration(-5.0), Duration::ZERO);
        assert_eq!(frame_duration(f64::NAN), Duration::ZERO);
        assert_eq!(frame_duration(10_000.0), Duration::from_millis(250));
    }

    #[test]
    fn test_app_state_starts_idle() {
        let state = AppState::new(AppConfig::default()).unwrap();
        let frame = state.indicator().frame();
        assert_eq!(frame.items.len(), config::LOADING_BARS);
        assert_eq!(frame.opacity, 0.0);
        assert!(!state.store().loading);
    }

    #[test]
    fn test_indicator_follows_loading() {
        let state = AppState::new(AppConfig::default()).unwrap();
        let file = SelectedFile::from_bytes("/tmp/photo.png", vec![0; 8]);

        let (started, snapshot) = state.apply(|store| store.begin_upload(file.info.clone()));
        assert!(started.is_ok());
        assert!(snapshot.loading);
        assert_eq!(state.indicator().driver().state(), RunState::Running);

        // Un second envoi est refusé et ne touche pas l'indicateur
        // A second upload is refused and leaves the indicator alone
        let (again, _) = state.apply(|store| store.begin_upload(file.info.clone()));
        assert!(matches!(again, Err(AppError::Busy)));
        assert_eq!(state.indicator().driver().state(), RunState::Running);

        let (_, snapshot) = state.apply(|store| store.finish_upload(Err(AppError::EmptyResult)));
        assert!(!snapshot.loading);
        assert_eq!(state.indicator().driver().state(), RunState::Stopping);

        state.indicator().tick(Duration::from_millis(16));
        assert_eq!(state.indicator().driver().state(), RunState::Idle);
    }
}
