use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use std::env;

use crate::error::{ModelError, ModelResult};

/// Opens a corpus file for line-by-line reading.
///
/// The file is not loaded into memory; lines are decoded lazily by the
/// caller through `BufRead::lines`.
pub fn open_corpus<P: AsRef<Path>>(filename: P) -> io::Result<BufReader<File>> {
	Ok(BufReader::new(File::open(filename)?))
}

/// Normalize a folder path.
///
/// - `"."` or `"./"` resolves to the current working directory
/// - Other paths are returned as-is (not canonicalized)
pub(crate) fn normalize_folder(input: &Path) -> PathBuf {
	if input == Path::new(".") || input == Path::new("./") {
		env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
	} else {
		input.to_path_buf()
	}
}

/// Lists all files with a given extension directly inside `dir`.
///
/// Returns full paths sorted lexicographically, so that training over a
/// directory always visits files in the same order. Subdirectories are ignored.
pub fn list_files<P: AsRef<Path>>(dir: P, extension: &str) -> ModelResult<Vec<PathBuf>> {
	let folder = normalize_folder(dir.as_ref());
	if !folder.is_dir() {
		return Err(ModelError::NotADirectory(folder));
	}

	let mut files = Vec::new();
	for entry in fs::read_dir(&folder)? {
		let path = entry?.path();
		if path.is_file() && path.extension() == Some(std::ffi::OsStr::new(extension)) {
			files.push(path);
		}
	}
	files.sort();

	Ok(files)
}

/// Resolves a corpus argument into the list of files to train on.
///
/// - A file resolves to itself, whatever its extension
/// - A directory resolves to its `extension` files (see [`list_files`])
/// - A missing path is reported as an I/O `NotFound` error
pub fn corpus_files<P: AsRef<Path>>(path: P, extension: &str) -> ModelResult<Vec<PathBuf>> {
	let path = path.as_ref();
	if path.is_file() {
		return Ok(vec![path.to_path_buf()]);
	}
	if path.is_dir() {
		return list_files(path, extension);
	}
	Err(io::Error::new(
		io::ErrorKind::NotFound,
		format!("Corpus not found: {}", path.display()),
	)
	.into())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_normalize_folder_dot_is_current_dir() {
		let cwd = env::current_dir().unwrap();
		assert_eq!(normalize_folder(Path::new(".")), cwd);
		assert_eq!(normalize_folder(Path::new("./")), cwd);
		assert_eq!(normalize_folder(Path::new("data")), PathBuf::from("data"));
	}
}
