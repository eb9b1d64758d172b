use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use geomatch_core::{MatchOptions, ScorerKind, SplitStrategy};
use std::path::PathBuf;

/// CLI arguments for geomatch
#[derive(Debug, Parser)]
#[command(
    name = "geomatch",
    version,
    about = "Resolve free-form postal addresses to country codes"
)]
pub struct CliArgs {
    /// City -> country table (JSON object, optionally .json.gz). Default: bundled dataset
    #[arg(long = "cities", global = true, requires = "countries")]
    pub cities: Option<PathBuf>,

    /// Country name -> code table (JSON object, optionally .json.gz). Default: bundled dataset
    #[arg(long = "countries", global = true, requires = "cities")]
    pub countries: Option<PathBuf>,

    /// Options file (JSON). Flags given on the command line take precedence
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<PathBuf>,

    /// Minimum confidence (exclusive) a fuzzy city match must exceed
    #[arg(short = 't', long = "threshold", global = true, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub threshold: Option<u8>,

    /// Worker threads for batch resolution (0 = one per core)
    #[arg(short = 'w', long = "workers", global = true)]
    pub workers: Option<usize>,

    /// Similarity scorer
    #[arg(long = "scorer", global = true, value_enum)]
    pub scorer: Option<ScorerArg>,

    /// Tokenization strategy
    #[arg(long = "split", global = true, value_enum)]
    pub split: Option<SplitArg>,

    /// Transliterate accents before scoring (Zürich == Zurich)
    #[arg(long = "fold", global = true)]
    pub fold: bool,

    /// More logging (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short = 'q', long = "quiet", global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Resolve one address and print label and confidence
    Resolve {
        address: String,
    },

    /// Print the SHA-256 of the resolved label for each address
    Hash {
        #[arg(required = true)]
        addresses: Vec<String>,
    },

    /// Resolve every line of a file (use '-' for stdin)
    Batch {
        input: PathBuf,

        /// Lines are JSON objects with an "address" field
        #[arg(long)]
        jsonl: bool,

        /// Print hashes instead of labels
        #[arg(long)]
        hash: bool,
    },

    /// Show the tokens an address is split into
    Tokens {
        address: String,
    },

    /// Measure accuracy on a JSON Lines file of {"address", "country"} records
    Evaluate {
        input: PathBuf,

        /// Exit with an error if accuracy is below this fraction
        #[arg(long)]
        min_accuracy: Option<f64>,
    },

    /// Show a summary of the reference tables
    Stats,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ScorerArg {
    Ratio,
    JaroWinkler,
}

impl From<ScorerArg> for ScorerKind {
    fn from(arg: ScorerArg) -> Self {
        match arg {
            ScorerArg::Ratio => ScorerKind::Ratio,
            ScorerArg::JaroWinkler => ScorerKind::JaroWinkler,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SplitArg {
    /// Split on commas when present, else on whitespace
    Comma,
    /// Drop punctuation, split on whitespace
    Strip,
}

impl From<SplitArg> for SplitStrategy {
    fn from(arg: SplitArg) -> Self {
        match arg {
            SplitArg::Comma => SplitStrategy::CommaAware,
            SplitArg::Strip => SplitStrategy::StripPunctuation,
        }
    }
}

impl CliArgs {
    /// Layers command-line flags over `base`.
    pub fn apply_overrides(&self, mut base: MatchOptions) -> MatchOptions {
        if let Some(t) = self.threshold {
            base.threshold = t;
        }
        if let Some(w) = self.workers {
            base.workers = w;
        }
        if let Some(s) = self.scorer {
            base.scorer = s.into();
        }
        if let Some(s) = self.split {
            base.split = s.into();
        }
        if self.fold {
            base.fold_diacritics = true;
        }
        base
    }
}
