use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use rs_lm_core::io::corpus_files;
use rs_lm_core::{LanguageModel, ModelConfig, ModelResult, Seeding, DEFAULT_SEED};
use tracing::{info, Level};

/// Random generation mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
	/// Seeded from system entropy; every run differs
	Random,
	/// Seeded with `--seed`; runs are reproducible
	Fixed,
}

/// Trains a character-level sliding-window model on a corpus and generates text from it.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
	/// Number of characters in a window
	window_length: usize,

	/// Text to start from (its last WINDOW_LENGTH characters seed the generation)
	initial_text: String,

	/// Number of characters to generate after the seed window
	length: usize,

	#[arg(value_enum)]
	mode: Mode,

	/// Corpus files, or directories whose `--extension` files are read in sorted order
	#[arg(required = true)]
	corpus: Vec<PathBuf>,

	/// Seed used in `fixed` mode
	#[arg(long, default_value_t = DEFAULT_SEED)]
	seed: u64,

	/// Extension of corpus files picked up from directories
	#[arg(long, default_value = "txt")]
	extension: String,

	/// Print the learned table after the generated text
	#[arg(long, default_value_t = false)]
	dump: bool,

	#[arg(short, long, default_value_t = false)]
	verbose: bool,
}

impl Cli {
	fn seeding(&self) -> Seeding {
		match self.mode {
			Mode::Random => Seeding::Entropy,
			Mode::Fixed => Seeding::Fixed(self.seed),
		}
	}
}

fn run(cli: &Cli) -> ModelResult<()> {
	let config = ModelConfig::new(cli.window_length, cli.seeding())?;
	let mut model = LanguageModel::new(config);

	for corpus in &cli.corpus {
		for file in corpus_files(corpus, &cli.extension)? {
			info!("📚 Training on {}", file.display());
			model.train_file(&file)?;
		}
	}
	info!("Learned {} windows", model.len());

	println!("{}", model.generate(&cli.initial_text, cli.length));

	if cli.dump {
		print!("{model}");
	}
	Ok(())
}

fn main() {
	let cli = Cli::parse();

	tracing_subscriber::fmt()
		.with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
		.with_writer(std::io::stderr)
		.init();

	if let Err(e) = run(&cli) {
		eprintln!("❌ {e}");
		process::exit(1);
	}
}
