//! Character-level sliding-window language model.
//!
//! This crate provides:
//! - Per-window frequency lists (counts, probabilities, cumulative probabilities)
//! - A language model trained line by line over a fixed window length
//! - Seeded or entropy-backed weighted sampling for text generation
//! - Internal utilities for corpus I/O
//!
//! The model is single-threaded: training and generation take `&mut self`
//! and callers that share a model across threads must serialize access.

/// Frequency lists, the language model and its configuration.
pub mod model;

/// Crate error type.
pub mod error;

/// Corpus I/O helpers (line readers, corpus directory listing).
pub mod io;

pub use error::{ModelError, ModelResult};
pub use model::frequency_list::{CharRecord, FrequencyList, FALLBACK_CHAR};
pub use model::language_model::{Generation, LanguageModel, StopReason};
pub use model::model_config::{ModelConfig, Seeding, DEFAULT_SEED};
