use std::collections::HashMap;
use std::fmt;
use std::io::BufRead;
use std::path::Path;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

use super::frequency_list::FrequencyList;
use super::model_config::{ModelConfig, Seeding};
use crate::error::ModelResult;
use crate::io::open_corpus;

/// Why a generation run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
	/// The initial text is shorter than the window; nothing was generated.
	ShortInput,
	/// The current window was never seen during training.
	MissingWindow,
	/// The requested number of letters was produced.
	LengthReached,
}

/// Result of a generation run: the text and the terminal state reached.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Generation {
	pub text: String,
	pub stop: StopReason,
}

/// Character-level language model over a fixed window length.
///
/// For every window (a run of `window_length` consecutive characters)
/// seen in the corpus, the model stores a [`FrequencyList`] of the characters
/// that followed it.
///
/// # Responsibilities
/// - Ingest text line by line, never letting a window span two lines
/// - Generate text by weighted sampling and window sliding
///
/// # Invariants
/// - `window_length >= 1`
/// - Every key of `table` is exactly `window_length` characters long
/// - Keys are never removed; the table only grows
#[derive(Debug)]
pub struct LanguageModel {
	window_length: usize,
	seeding: Seeding,
	rng: StdRng,
	table: HashMap<String, FrequencyList>,
}

impl LanguageModel {
	/// Creates an empty model from a validated configuration.
	pub fn new(config: ModelConfig) -> Self {
		let rng = match config.seeding {
			Seeding::Fixed(seed) => StdRng::seed_from_u64(seed),
			Seeding::Entropy => StdRng::from_os_rng(),
		};
		Self {
			window_length: config.window_length(),
			seeding: config.seeding,
			rng,
			table: HashMap::new(),
		}
	}

	/// Creates a model whose generated texts are reproducible for a given `seed`.
	///
	/// # Errors
	/// Returns an error if `window_length` is 0.
	pub fn with_seed(window_length: usize, seed: u64) -> ModelResult<Self> {
		Ok(Self::new(ModelConfig::new(window_length, Seeding::Fixed(seed))?))
	}

	/// Creates a model seeded from system entropy.
	///
	/// # Errors
	/// Returns an error if `window_length` is 0.
	pub fn with_entropy(window_length: usize) -> ModelResult<Self> {
		Ok(Self::new(ModelConfig::new(window_length, Seeding::Entropy)?))
	}

	pub fn window_length(&self) -> usize {
		self.window_length
	}

	pub fn seeding(&self) -> Seeding {
		self.seeding
	}

	/// Number of distinct windows learned so far.
	pub fn len(&self) -> usize {
		self.table.len()
	}

	pub fn is_empty(&self) -> bool {
		self.table.is_empty()
	}

	/// Returns the frequency list of `window`, if it was seen during training.
	pub fn get(&self, window: &str) -> Option<&FrequencyList> {
		self.table.get(window)
	}

	/// Iterates over learned windows, in unspecified order.
	pub fn windows(&self) -> impl Iterator<Item = &str> {
		self.table.keys().map(String::as_str)
	}

	/// Adds one line of text to the model.
	///
	/// For every position `i >= window_length`, the character at `i` is recorded
	/// in the list of the window made of the `window_length` characters before it.
	///
	/// Returns `false` (and learns nothing) if the line is shorter than
	/// `window_length + 1` characters.
	///
	/// # Notes
	/// - UTF-8 safe: lengths and windows are counted in characters.
	/// - The window restarts with each line: no context spans two lines.
	pub fn train_line(&mut self, line: &str) -> bool {
		let chars: Vec<char> = line.chars().collect();
		if chars.len() <= self.window_length {
			trace!(len = chars.len(), "Line too short, skipped");
			return false;
		}

		let mut window: String = chars[..self.window_length].iter().collect();
		for &next_char in &chars[self.window_length..] {
			match self.table.get_mut(&window) {
				Some(list) => list.update(next_char),
				None => {
					let mut list = FrequencyList::new();
					list.update(next_char);
					self.table.insert(window.clone(), list);
				}
			}

			// Slide
			window.remove(0);
			window.push(next_char);
		}
		true
	}

	/// Adds every line of `lines` to the model. Counts accumulate across calls.
	pub fn train_lines<I, S>(&mut self, lines: I)
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		for line in lines {
			self.train_line(line.as_ref());
		}
	}

	/// Splits `text` on `\n` / `\r\n` and adds each line to the model.
	pub fn train_text(&mut self, text: &str) {
		self.train_lines(text.lines());
	}

	/// Reads `reader` line by line and adds each line to the model.
	///
	/// # Errors
	/// Returns the first read (or UTF-8 decoding) error. Lines read before
	/// the failure remain in the model.
	pub fn train_reader<R: BufRead>(&mut self, reader: R) -> ModelResult<()> {
		let mut nb_lines = 0usize;
		let mut nb_trained = 0usize;
		for line in reader.lines() {
			let line = line?;
			nb_lines += 1;
			if self.train_line(&line) {
				nb_trained += 1;
			}
		}
		debug!(nb_lines, nb_trained, windows = self.table.len(), "Corpus ingested");
		Ok(())
	}

	/// Trains the model on the corpus file at `filepath`.
	///
	/// # Errors
	/// Returns an error if the file cannot be opened or read.
	pub fn train_file<P: AsRef<Path>>(&mut self, filepath: P) -> ModelResult<()> {
		let path = filepath.as_ref();
		debug!("Training on {}", path.display());
		self.train_reader(open_corpus(path)?)
	}

	/// Generates text from `initial_text`; see [`LanguageModel::generate_with_outcome`].
	pub fn generate(&mut self, initial_text: &str, number_of_letters: usize) -> String {
		self.generate_with_outcome(initial_text, number_of_letters).text
	}

	/// Generates text by repeatedly sampling the next character of the current window.
	///
	/// # Behavior
	/// - If `initial_text` is shorter than `window_length`, it is returned unchanged.
	/// - Otherwise the output starts with the last `window_length` characters of
	///   `initial_text`, and grows by one sampled character per step until it is
	///   `number_of_letters + window_length` characters long.
	/// - If the current window was never seen, generation stops early and the
	///   text produced so far is returned.
	///
	/// # Notes
	/// - Counts are never modified; only derived probabilities are refreshed.
	/// - Each step consumes exactly one draw from the model's RNG.
	pub fn generate_with_outcome(&mut self, initial_text: &str, number_of_letters: usize) -> Generation {
		let initial: Vec<char> = initial_text.chars().collect();
		if initial.len() < self.window_length {
			return Generation {
				text: initial_text.to_owned(),
				stop: StopReason::ShortInput,
			};
		}

		let target = number_of_letters.saturating_add(self.window_length);
		let mut generated: Vec<char> = initial[initial.len() - self.window_length..].to_vec();
		let mut stop = StopReason::LengthReached;

		while generated.len() < target {
			let window: String = generated[generated.len() - self.window_length..].iter().collect();
			let Some(list) = self.table.get_mut(&window) else {
				stop = StopReason::MissingWindow;
				break;
			};
			let r: f64 = self.rng.random();
			generated.push(list.sample(r));
		}

		debug!(?stop, len = generated.len(), target, "Generation finished");
		Generation {
			text: generated.into_iter().collect(),
			stop,
		}
	}
}

impl fmt::Display for LanguageModel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (window, list) in &self.table {
			writeln!(f, "{window} : {list}")?;
		}
		Ok(())
	}
}
