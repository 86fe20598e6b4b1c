use std::collections::VecDeque;
use std::collections::vec_deque::Iter;
use std::fmt;

use crate::error::{ModelError, ModelResult};

/// Character returned by [`FrequencyList::sample`] when no record can be selected.
pub const FALLBACK_CHAR: char = '_';

/// Statistics of one character following a given window.
///
/// `count` is only changed by training. `probability` and
/// `cumulative_probability` are derived values, valid after
/// [`FrequencyList::calculate_probabilities`] and stale after any update.
#[derive(Clone, Debug, PartialEq)]
pub struct CharRecord {
	pub character: char,
	pub count: usize,
	pub probability: f64,
	pub cumulative_probability: f64,
}

impl CharRecord {
	/// Creates a record seen once, with no probabilities computed yet.
	pub fn new(character: char) -> Self {
		Self {
			character,
			count: 1,
			probability: 0.0,
			cumulative_probability: 0.0,
		}
	}
}

impl fmt::Display for CharRecord {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"({} {} {:?} {:?})",
			self.character, self.count, self.probability, self.cumulative_probability
		)
	}
}

/// Ordered collection of the characters observed after one window.
///
/// Conceptually, this is the outgoing edge set of a Markov chain node,
/// weighted by the number of observations.
///
/// ## Invariants
/// - Characters are unique
/// - Order is reverse-of-first-occurrence: a newly seen character is
///   inserted at the front, and existing records never move
/// - After `calculate_probabilities`, cumulative probabilities are
///   non-decreasing in traversal order and the last one is 1.0
///
/// Traversal order matters: both the cumulative sums and the
/// "first record >= r" selection in `sample` walk records front to back.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrequencyList {
	records: VecDeque<CharRecord>,
}

impl FrequencyList {
	/// Creates an empty list.
	pub fn new() -> Self {
		Self { records: VecDeque::new() }
	}

	/// Number of distinct characters in the list.
	pub fn len(&self) -> usize {
		self.records.len()
	}

	pub fn is_empty(&self) -> bool {
		self.records.is_empty()
	}

	/// Returns the front record (the most recently introduced character).
	pub fn first(&self) -> Option<&CharRecord> {
		self.records.front()
	}

	/// Sum of the counts of all records.
	pub fn total_count(&self) -> usize {
		self.records.iter().map(|record| record.count).sum()
	}

	/// Inserts a record for `character` at the front of the list.
	fn add_first(&mut self, character: char) {
		self.records.push_front(CharRecord::new(character));
	}

	/// Returns the position of `character` in traversal order.
	pub fn index_of(&self, character: char) -> Option<usize> {
		self.records.iter().position(|record| record.character == character)
	}

	/// Returns the record for `character`, if present.
	pub fn get_by_char(&self, character: char) -> Option<&CharRecord> {
		self.records.iter().find(|record| record.character == character)
	}

	/// Records one occurrence of `character`.
	///
	/// - If the character already exists, its count is increased.
	/// - Otherwise, a new record with a count of 1 is added at the front.
	pub fn update(&mut self, character: char) {
		match self.index_of(character) {
			Some(index) => self.records[index].count += 1,
			None => self.add_first(character),
		}
	}

	/// Removes the record for `character`.
	///
	/// Returns `true` if a record was removed.
	pub fn remove(&mut self, character: char) -> bool {
		match self.index_of(character) {
			Some(index) => self.records.remove(index).is_some(),
			None => false,
		}
	}

	/// Returns the record at `index` in traversal order.
	///
	/// # Errors
	/// Returns `ModelError::IndexOutOfBounds` if `index >= len()`.
	pub fn get(&self, index: usize) -> ModelResult<&CharRecord> {
		self.records.get(index).ok_or(ModelError::IndexOutOfBounds {
			index,
			len: self.records.len(),
		})
	}

	/// Iterates over all records in traversal order.
	pub fn iter(&self) -> Iter<'_, CharRecord> {
		self.records.iter()
	}

	/// Iterates over records in traversal order, starting at `index`.
	///
	/// Yields nothing if `index` is past the end of the list.
	pub fn iter_from(&self, index: usize) -> impl Iterator<Item = &CharRecord> {
		self.records.iter().skip(index)
	}

	/// Recomputes `probability` and `cumulative_probability` of every record.
	///
	/// Probabilities are not maintained incrementally: this must run
	/// whenever counts may have changed. Running it twice without an
	/// intervening update leaves every value unchanged.
	pub fn calculate_probabilities(&mut self) {
		let total = self.total_count();
		if total == 0 {
			return;
		}

		let total = total as f64;
		let mut cumulative = 0.0;
		for record in self.records.iter_mut() {
			record.probability = record.count as f64 / total;
			cumulative += record.probability;
			record.cumulative_probability = cumulative;
		}
	}

	/// Selects a character by inverse-CDF lookup.
	///
	/// For `r` uniform in `[0, 1)`, a character is returned with probability
	/// `count / total_count`. The first record in traversal order whose
	/// cumulative probability is `>= r` wins.
	///
	/// Returns [`FALLBACK_CHAR`] if the list is empty, or if rounding leaves
	/// `r` above the last cumulative probability.
	pub fn sample(&mut self, r: f64) -> char {
		self.calculate_probabilities();
		self.records
			.iter()
			.find(|record| record.cumulative_probability >= r)
			.map_or(FALLBACK_CHAR, |record| record.character)
	}
}

impl<'a> IntoIterator for &'a FrequencyList {
	type Item = &'a CharRecord;
	type IntoIter = Iter<'a, CharRecord>;

	fn into_iter(self) -> Self::IntoIter {
		self.records.iter()
	}
}

impl fmt::Display for FrequencyList {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "(")?;
		for (i, record) in self.records.iter().enumerate() {
			if i > 0 {
				write!(f, " ")?;
			}
			write!(f, "{record}")?;
		}
		write!(f, ")")
	}
}
