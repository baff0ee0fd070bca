//! User preferences
//!
//! Persisted in LocalStorage on wasm, separate from any simulation state.
//! Native builds get no-op stubs.

use serde::{Deserialize, Serialize};

use crate::consts::{SPEED_DEFAULT, SPEED_MAX, SPEED_MIN};

/// Which rope geometry to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum RopeVariant {
    /// Closed-form arc from the phase angle
    #[default]
    Parametric,
    /// Verlet mass-point chain under distance constraints
    Strand,
}

impl RopeVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            RopeVariant::Parametric => "parametric",
            RopeVariant::Strand => "strand",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "parametric" | "arc" => Some(RopeVariant::Parametric),
            "strand" | "constraint" => Some(RopeVariant::Strand),
            _ => None,
        }
    }

    /// Session override from a URL query string, e.g. `?rope=strand`
    pub fn from_query(search: &str) -> Option<Self> {
        search
            .trim_start_matches('?')
            .split('&')
            .find_map(|pair| {
                let (key, value) = pair.split_once('=')?;
                (key == "rope").then(|| Self::from_str(value)).flatten()
            })
    }
}

/// Persisted preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Rope geometry variant
    pub rope_variant: RopeVariant,
    /// Last chosen rotation speed (user units per second)
    pub speed: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            rope_variant: RopeVariant::default(),
            speed: SPEED_DEFAULT,
        }
    }
}

impl Settings {
    /// LocalStorage key
    const STORAGE_KEY: &'static str = "rope_hop_settings";

    /// Clamp persisted values back into the control bounds; a hand-edited
    /// or stale entry must not push the simulation outside them.
    fn sanitized(mut self) -> Self {
        if !self.speed.is_finite() {
            self.speed = SPEED_DEFAULT;
        }
        self.speed = self.speed.clamp(SPEED_MIN, SPEED_MAX);
        self
    }

    /// Load settings from LocalStorage (wasm only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(settings) = serde_json::from_str::<Settings>(&json) {
                    log::info!("loaded settings from LocalStorage");
                    return settings.sanitized();
                }
            }
        }

        log::info!("using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (wasm only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default().sanitized()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {}
}
