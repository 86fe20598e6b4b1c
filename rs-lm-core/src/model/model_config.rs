use crate::error::{ModelError, ModelResult};

/// Seed used by the fixed (reproducible) mode when none is given.
pub const DEFAULT_SEED: u64 = 20;

/// Strategy used to seed the model's random number generator.
///
/// # Variants
/// - `Fixed(u64)`: deterministic sampling. Training on the same corpus and
///   generating with the same arguments yields the same text. Good for debugging.
/// - `Entropy`: seeded from the operating system; every run differs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Seeding {
	Fixed(u64),
	Entropy,
}

impl Default for Seeding {
	fn default() -> Self {
		Seeding::Fixed(DEFAULT_SEED)
	}
}

/// Construction parameters of a [`LanguageModel`](super::language_model::LanguageModel).
///
/// # Invariants
/// - `window_length >= 1`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModelConfig {
	/// Number of characters in a window (the context used to predict the next character).
	window_length: usize,

	/// How the random number generator is seeded.
	pub seeding: Seeding,
}

impl ModelConfig {
	/// Creates a new configuration.
	///
	/// # Errors
	/// Returns `ModelError::InvalidWindowLength` if `window_length` is 0.
	pub fn new(window_length: usize, seeding: Seeding) -> ModelResult<Self> {
		let mut config = Self { window_length: 1, seeding };
		config.set_window_length(window_length)?;
		Ok(config)
	}

	/// Returns the configured window length.
	pub fn window_length(&self) -> usize {
		self.window_length
	}

	/// Sets the window length.
	///
	/// # Errors
	/// Returns an error if the value is 0; the configuration is left unchanged.
	pub fn set_window_length(&mut self, window_length: usize) -> ModelResult<()> {
		if window_length == 0 {
			return Err(ModelError::InvalidWindowLength(window_length));
		}
		self.window_length = window_length;
		Ok(())
	}
}
