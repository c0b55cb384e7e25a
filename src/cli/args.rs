//! CLI argument definitions using clap

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueHint};

use crate::math::RoundingMode;

/// Everyday utility recipes: joining, splitting, ranges, escaping, checked math, file walking and stopwatch timing
#[derive(Parser, Debug)]
#[command(name = "rscookbook")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Turn debugging information on (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    /// Config file (default: $XDG_CONFIG_HOME/rscookbook/rscookbook.toml)
    #[arg(long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Join parts, treating the null token as a missing part
    Join {
        /// Parts to join
        #[arg(required = true)]
        parts: Vec<String>,
        /// Separator (default from config)
        #[arg(short, long)]
        separator: Option<String>,
        /// Substitute missing parts with this text instead of skipping them
        #[arg(long)]
        use_for_null: Option<String>,
    },

    /// Split "k:v k:v" input into a map
    Split {
        input: String,
        /// Entry separator
        #[arg(long, default_value = " ")]
        entry_sep: String,
        /// Key/value separator
        #[arg(long, default_value = ":")]
        kv_sep: String,
    },

    /// Names of adults among the sample persons
    Adults,

    /// Sample persons grouped by age
    Group,

    /// Sample persons sorted by name, then age
    Sort,

    /// Closed date range checks
    Range {
        /// First day (YYYY-MM-DD)
        first: NaiveDate,
        /// Last day (YYYY-MM-DD)
        last: NaiveDate,
        /// Day to test for containment (default: day after last)
        #[arg(long)]
        probe: Option<NaiveDate>,
    },

    /// Escape text
    Escape {
        #[command(subcommand)]
        command: EscapeCommands,
    },

    /// Checked integer math
    Math {
        #[command(subcommand)]
        command: MathCommands,
    },

    /// Print the lines of a file
    Lines {
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },

    /// Copy a file, replacing the target
    Copy {
        #[arg(value_hint = ValueHint::FilePath)]
        from: PathBuf,
        #[arg(value_hint = ValueHint::FilePath)]
        to: PathBuf,
    },

    /// List a directory tree in post-order
    Tree {
        #[arg(value_hint = ValueHint::DirPath)]
        dir: PathBuf,
        /// Render as a tree instead of a post-order listing
        #[arg(long)]
        render: bool,
    },

    /// Time a blocking sleep
    Stopwatch {
        /// Sleep duration (default from config)
        #[arg(long)]
        millis: Option<u64>,
    },

    /// Run every in-memory recipe on the sample data
    Tour,

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum EscapeCommands {
    /// Escape for HTML text
    Html { text: String },
    /// Escape for a URL form parameter
    Url { text: String },
}

#[derive(Subcommand, Debug)]
pub enum MathCommands {
    /// base^exp with overflow checking
    Pow { base: i32, exp: u32 },
    /// p / q with a rounding mode
    Divide {
        #[arg(allow_negative_numbers = true)]
        p: i32,
        #[arg(allow_negative_numbers = true)]
        q: i32,
        /// Rounding mode constant, e.g. HALF_UP
        #[arg(long, default_value = "HALF_UP")]
        mode: RoundingMode,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective configuration
    Show,
    /// Print a config file template
    Template,
}
