//! Top-level module for the sliding-window language model, including:
//! - Per-window character statistics (`FrequencyList`, `CharRecord`)
//! - The trained model and its generation loop (`LanguageModel`)
//! - Construction parameters (`ModelConfig`, `Seeding`)

/// Ordered per-window character statistics.
///
/// Tracks occurrence counts and derives probabilities and cumulative
/// probabilities used for inverse-CDF sampling.
pub mod frequency_list;

/// Fixed window-length language model.
///
/// Handles line ingestion, window-to-list bookkeeping,
/// seeded weighted sampling and the sliding generation loop.
pub mod language_model;

/// Construction parameters: window length and seeding strategy.
pub mod model_config;
