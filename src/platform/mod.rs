//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Score readout
//! - Best score and settings storage (LocalStorage on web)
//! - Pointer coordinates

#[cfg(target_arch = "wasm32")]
pub mod web;

use glam::Vec2;

/// Failure talking to a storage backend
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage backend is unavailable")]
    Unavailable,
    #[error("storage access failed: {0}")]
    Access(String),
}

/// Somewhere to show the current and best scores
pub trait ScoreDisplay {
    fn show(&mut self, current: u32, best: u32);
}

/// A single durable text slot, such as one LocalStorage key
pub trait TextStore {
    fn read(&self) -> Result<Option<String>, StorageError>;
    fn write(&mut self, value: &str) -> Result<(), StorageError>;
}

/// Translate device coordinates into canvas-local ones
#[inline]
pub fn canvas_local(client: Vec2, canvas_origin: Vec2) -> Vec2 {
    client - canvas_origin
}

/// Store that only lives as long as the process
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    pub value: Option<String>,
}

impl MemoryStore {
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
        }
    }
}

impl TextStore for MemoryStore {
    fn read(&self) -> Result<Option<String>, StorageError> {
        Ok(self.value.clone())
    }

    fn write(&mut self, value: &str) -> Result<(), StorageError> {
        self.value = Some(value.to_string());
        Ok(())
    }
}

/// Score display that writes to the log (native)
#[derive(Debug, Default, Clone, Copy)]
pub struct LogScoreDisplay;

impl ScoreDisplay for LogScoreDisplay {
    fn show(&mut self, current: u32, best: u32) {
        log::info!("Score: {} | Best: {}", current, best);
    }
}
