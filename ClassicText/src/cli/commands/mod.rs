use clap::Subcommand;
use std::path::PathBuf;

pub mod execute;
pub mod text;

#[derive(Subcommand)]
pub enum Commands {
    /// Import a TEXT.RSC token dump and report record/overwrite counts
    Import {
        /// Token dump (JSON); defaults to `text_rsc_dump` from the config file
        #[arg(short, long)]
        source: Option<PathBuf>,

        /// Suppress progress output
        #[arg(short, long)]
        quiet: bool,
    },

    /// Search record text (case-insensitive); no query lists everything
    Search {
        /// Search term
        query: Option<String>,

        /// Token dump (JSON); defaults to `text_rsc_dump` from the config file
        #[arg(short, long)]
        source: Option<PathBuf>,

        /// Maximum results to print (defaults to the config value)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Print matching groups as JSON
        #[arg(long)]
        json: bool,

        /// Only print keys
        #[arg(short, long)]
        quiet: bool,
    },

    /// Show a single record by key (e.g. `text.1000`)
    Get {
        /// Record key
        key: String,

        /// Token dump (JSON); defaults to `text_rsc_dump` from the config file
        #[arg(short, long)]
        source: Option<PathBuf>,

        /// Also print the record decoded back into tokens
        #[arg(short, long)]
        tokens: bool,
    },

    /// Decode a markup string into tokens (validates hand-edited text)
    Decode {
        /// Markup text, e.g. "Hi[/pos:x=1,y=2]"
        markup: String,

        /// Print tokens as JSON
        #[arg(long)]
        json: bool,
    },

    /// Verify every record of a dump survives a markup round trip
    Check {
        /// Token dump (JSON); defaults to `text_rsc_dump` from the config file
        #[arg(short, long)]
        source: Option<PathBuf>,

        /// Suppress progress output
        #[arg(short, long)]
        quiet: bool,
    },
}
