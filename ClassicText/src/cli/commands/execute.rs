//! Command execution implementations

use super::{Commands, text};
use crate::config::Config;

impl Commands {
    /// Execute the selected command.
    ///
    /// # Errors
    /// Returns an error if the underlying command fails.
    pub fn execute(&self) -> anyhow::Result<()> {
        let config = Config::load();

        match self {
            Commands::Import { source, quiet } => {
                let source = text::resolve_source(source.as_deref(), &config)?;
                text::import(&source, *quiet)
            }
            Commands::Search {
                query,
                source,
                limit,
                json,
                quiet,
            } => {
                let source = text::resolve_source(source.as_deref(), &config)?;
                text::search(
                    &source,
                    query.as_deref(),
                    limit.unwrap_or(config.search_limit),
                    config.preview_width,
                    *json,
                    *quiet,
                )
            }
            Commands::Get {
                key,
                source,
                tokens,
            } => {
                let source = text::resolve_source(source.as_deref(), &config)?;
                text::get(&source, key, *tokens)
            }
            Commands::Decode { markup, json } => text::decode(markup, *json),
            Commands::Check { source, quiet } => {
                let source = text::resolve_source(source.as_deref(), &config)?;
                text::check(&source, *quiet)
            }
        }
    }
}
