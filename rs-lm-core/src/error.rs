use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
	#[error("Invalid window length: {0} (must be >= 1)")]
	InvalidWindowLength(usize),

	#[error("IO Error: {0}")]
	Io(#[from] std::io::Error),

	#[error("Index {index} out of bounds for list of size {len}")]
	IndexOutOfBounds { index: usize, len: usize },

	#[error("Expected a directory, got: {}", .0.display())]
	NotADirectory(PathBuf),
}

pub type ModelResult<T> = Result<T, ModelError>;
