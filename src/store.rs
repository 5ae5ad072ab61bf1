#![cfg(feature = "std")]
//! On-disk persistence of the [`BeliefState`].
//!
//! The whole record is rewritten on every save through a temp file in the
//! same directory followed by a rename, so a reader never sees a partial
//! write. Any problem reading the record starts a new game.

use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use tempfile::NamedTempFile;

use crate::belief::BeliefState;
use crate::config::DEFAULT_STATE_FILE;

/// Encoding used for the state file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateFormat {
    Json,
    Bincode,
}

impl StateFormat {
    /// `.bin` files use bincode; everything else is JSON.
    pub fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("bin") => StateFormat::Bincode,
            _ => StateFormat::Json,
        }
    }

    fn encode(self, state: &BeliefState) -> Result<Vec<u8>, StoreError> {
        match self {
            StateFormat::Json => serde_json::to_vec(state).map_err(StoreError::Json),
            StateFormat::Bincode => bincode::serialize(state).map_err(StoreError::Bincode),
        }
    }

    fn decode(self, bytes: &[u8]) -> Result<BeliefState, StoreError> {
        match self {
            StateFormat::Json => serde_json::from_slice(bytes).map_err(StoreError::Json),
            StateFormat::Bincode => bincode::deserialize(bytes).map_err(StoreError::Bincode),
        }
    }
}

/// Errors raised while reading or writing the state file.
#[derive(Debug)]
pub enum StoreError {
    Io(io::Error),
    Json(serde_json::Error),
    Bincode(bincode::Error),
    Invalid(crate::common::StateError),
}

impl From<io::Error> for StoreError {
    fn from(err: io::Error) -> Self {
        StoreError::Io(err)
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io(e) => write!(f, "I/O error: {}", e),
            StoreError::Json(e) => write!(f, "malformed JSON state: {}", e),
            StoreError::Bincode(e) => write!(f, "malformed bincode state: {}", e),
            StoreError::Invalid(e) => write!(f, "inconsistent state: {}", e),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Io(e) => Some(e),
            StoreError::Json(e) => Some(e),
            StoreError::Bincode(e) => Some(e),
            StoreError::Invalid(e) => Some(e),
        }
    }
}

/// Loads and saves the belief state at a fixed path.
#[derive(Debug, Clone)]
pub struct StateStore {
    path: PathBuf,
    format: StateFormat,
}

impl StateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let format = StateFormat::for_path(&path);
        Self { path, format }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> StateFormat {
        self.format
    }

    /// The stored state, or a freshly persisted new game if the file is
    /// missing, unreadable or inconsistent.
    pub fn load(&self) -> BeliefState {
        match self.try_load() {
            Ok(state) => {
                debug!("loaded state from {}", self.path.display());
                state
            }
            Err(StoreError::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
                info!("no state at {}, starting a new game", self.path.display());
                self.fresh()
            }
            Err(e) => {
                warn!("discarding state at {}: {}", self.path.display(), e);
                self.fresh()
            }
        }
    }

    /// Read and validate the stored state without any recovery.
    pub fn try_load(&self) -> Result<BeliefState, StoreError> {
        let bytes = fs::read(&self.path)?;
        let state = self.format.decode(&bytes)?;
        state.validate().map_err(StoreError::Invalid)?;
        Ok(state)
    }

    /// Replace the stored record with `state`.
    pub fn save(&self, state: &BeliefState) -> Result<(), StoreError> {
        let bytes = self.format.encode(state)?;
        let parent = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };

        let mut tmp = NamedTempFile::new_in(parent)?;
        tmp.write_all(&bytes)?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| StoreError::Io(e.error))?;
        debug!("saved {} bytes to {}", bytes.len(), self.path.display());
        Ok(())
    }

    fn fresh(&self) -> BeliefState {
        let state = BeliefState::new();
        if let Err(e) = self.save(&state) {
            warn!("could not persist new game to {}: {}", self.path.display(), e);
        }
        state
    }
}

impl Default for StateStore {
    fn default() -> Self {
        Self::new(DEFAULT_STATE_FILE)
    }
}
