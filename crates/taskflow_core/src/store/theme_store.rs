//! Theme preference state container.
//!
//! Owns the persisted light/dark preference over the `theme` slot; rendering
//! belongs to frontends.
//!
//! # Invariants
//! - Absent or malformed slot data falls back to `ThemeMode::Light`.
//! - Setting the current mode again skips the write.

use crate::model::theme::ThemeMode;
use crate::repo::slot_repo::SlotRepository;
use log::warn;

/// Fixed slot key holding the serialized theme preference.
pub const THEME_SLOT_KEY: &str = "theme";

/// State container for the appearance preference.
pub struct ThemeStore<R: SlotRepository> {
    repo: R,
    mode: ThemeMode,
}

impl<R: SlotRepository> ThemeStore<R> {
    /// Creates a store over the provided repository and loads the persisted
    /// preference.
    pub fn new(repo: R) -> Self {
        let mode = load_mode(&repo);
        Self { repo, mode }
    }

    /// Current preference.
    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Stores `mode` and persists it. Setting the current mode is a no-op.
    pub fn set(&mut self, mode: ThemeMode) -> ThemeMode {
        if mode != self.mode {
            self.mode = mode;
            self.persist();
        }
        self.mode
    }

    /// Flips the preference, persists it, and returns the new mode.
    pub fn toggle(&mut self) -> ThemeMode {
        self.set(self.mode.toggled())
    }

    fn persist(&self) {
        let encoded = match serde_json::to_string(&self.mode) {
            Ok(encoded) => encoded,
            Err(err) => {
                warn!(
                    "event=theme_save module=store status=error key={THEME_SLOT_KEY} error={err}"
                );
                return;
            }
        };

        if let Err(err) = self.repo.put(THEME_SLOT_KEY, &encoded) {
            warn!("event=theme_save module=store status=error key={THEME_SLOT_KEY} error={err}");
        }
    }
}

fn load_mode<R: SlotRepository>(repo: &R) -> ThemeMode {
    match repo.get(THEME_SLOT_KEY) {
        Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|_| {
            warn!("event=theme_load module=store status=malformed key={THEME_SLOT_KEY}");
            ThemeMode::default()
        }),
        Ok(None) => ThemeMode::default(),
        Err(err) => {
            warn!("event=theme_load module=store status=error key={THEME_SLOT_KEY} error={err}");
            ThemeMode::default()
        }
    }
}
