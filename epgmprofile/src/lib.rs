//! # epgmprofile - Local User Profile Store
//!
//! The onboarding record of the EPGM Companion app: a single JSON document
//! holding the member's display name, a short "about" line, and the chosen
//! avatar. The store is read once at startup to decide onboarding vs. home,
//! written when onboarding completes, and deleted on logout.
//!
//! Semantics are deliberately simple: one key, last write wins, no schema
//! versioning. Durability is "survives until the user clears storage".

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Result type alias for profile-store operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the profile store
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing failed
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Profile record failed validation
    #[error("Invalid profile: {0}")]
    InvalidProfile(String),
}

/// Avatars offered during onboarding
pub const DEFAULT_AVATARS: &[&str] = &["🔥", "🕊️", "📖", "🙏🏾", "🌟", "🕯️"];

/// The onboarding profile record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Profile {
    /// Member display name
    pub name: String,
    /// Short free-text "about" line
    #[serde(default)]
    pub about: String,
    /// Chosen avatar (emoji)
    pub avatar: String,
}

impl Profile {
    /// Build a validated profile, trimming whitespace like the onboarding
    /// form does. Name and avatar are required; "about" may be empty.
    pub fn new(
        name: impl Into<String>,
        about: impl Into<String>,
        avatar: impl Into<String>,
    ) -> Result<Self> {
        let name = name.into().trim().to_string();
        let avatar = avatar.into().trim().to_string();
        if name.is_empty() {
            return Err(Error::InvalidProfile("name must not be empty".to_string()));
        }
        if avatar.is_empty() {
            return Err(Error::InvalidProfile("an avatar must be selected".to_string()));
        }
        Ok(Self {
            name,
            about: about.into().trim().to_string(),
            avatar,
        })
    }
}

/// Single-document JSON store for the profile record
#[derive(Debug, Clone)]
pub struct ProfileStore {
    path: PathBuf,
}

impl ProfileStore {
    /// Create a store backed by the given file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored profile; `None` when no profile has been saved yet
    pub fn load(&self) -> Result<Option<Profile>> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => {
                let profile = serde_json::from_str(&raw)?;
                Ok(Some(profile))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Persist the profile, replacing any previous record
    pub fn save(&self, profile: &Profile) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(profile)?;
        fs::write(&self.path, json)?;
        info!(path = %self.path.display(), "Saved profile");
        Ok(())
    }

    /// Delete the stored profile (logout). No-op when nothing is stored.
    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                info!(path = %self.path.display(), "Cleared profile");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No profile to clear");
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Whether onboarding has completed (a readable profile exists)
    pub fn is_onboarded(&self) -> bool {
        matches!(self.load(), Ok(Some(_)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in_tempdir() -> (tempfile::TempDir, ProfileStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = ProfileStore::new(dir.path().join("profile.json"));
        (dir, store)
    }

    #[test]
    fn test_load_before_save_is_none() {
        let (_dir, store) = store_in_tempdir();
        assert_eq!(store.load().unwrap(), None);
        assert!(!store.is_onboarded());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let (_dir, store) = store_in_tempdir();
        let profile = Profile::new("Ama", "Choir member", "🕊️").unwrap();

        store.save(&profile).unwrap();
        assert_eq!(store.load().unwrap(), Some(profile));
        assert!(store.is_onboarded());
    }

    #[test]
    fn test_last_write_wins() {
        let (_dir, store) = store_in_tempdir();
        store.save(&Profile::new("Ama", "", "🔥").unwrap()).unwrap();
        store.save(&Profile::new("Kofi", "", "📖").unwrap()).unwrap();

        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded.name, "Kofi");
    }

    #[test]
    fn test_clear_is_idempotent() {
        let (_dir, store) = store_in_tempdir();
        store.save(&Profile::new("Ama", "", "🔥").unwrap()).unwrap();

        store.clear().unwrap();
        assert!(!store.is_onboarded());
        // Clearing again must not fail.
        store.clear().unwrap();
    }

    #[test]
    fn test_validation_trims_and_rejects() {
        let profile = Profile::new("  Ama  ", "  hi  ", "🔥").unwrap();
        assert_eq!(profile.name, "Ama");
        assert_eq!(profile.about, "hi");

        assert!(Profile::new("   ", "", "🔥").is_err());
        assert!(Profile::new("Ama", "", "  ").is_err());
    }

    #[test]
    fn test_default_avatars_offered() {
        assert!(DEFAULT_AVATARS.contains(&"🙏🏾"));
        assert_eq!(DEFAULT_AVATARS.len(), 6);
    }
}
