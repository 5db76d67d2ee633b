//! CLI commands for the localization text database

use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::cli::progress::{GEAR, LINK, LOOKING_GLASS, print_done, print_step, record_bar};
use crate::config::Config;
use crate::converter::markup;
use crate::database::{ImportPhase, ImportReport, TextDatabase, import_text_rsc_file};

/// Pick the dump given on the command line, falling back to the config file
pub fn resolve_source(source: Option<&Path>, config: &Config) -> anyhow::Result<PathBuf> {
    source
        .map(Path::to_path_buf)
        .or_else(|| config.text_rsc_dump.clone())
        .ok_or_else(|| {
            let config_path = Config::config_path()
                .map_or_else(|| "the config file".to_string(), |p| p.display().to_string());
            anyhow::anyhow!(
                "No token dump given. Pass --source or set \"text_rsc_dump\" in {config_path}"
            )
        })
}

/// Import a dump into a fresh database, showing a progress bar unless quiet
fn load_database(source: &Path, quiet: bool) -> anyhow::Result<(TextDatabase, ImportReport)> {
    let pb = record_bar(quiet);
    let mut db = TextDatabase::new();

    let report = import_text_rsc_file(source, &mut db, &|progress| {
        match progress.phase {
            ImportPhase::Converting => {
                pb.set_length(progress.total as u64);
                pb.set_position(progress.current as u64);
                if let Some(key) = &progress.current_key {
                    pb.set_message(key.clone());
                }
            }
            ImportPhase::Inserting => pb.set_message("inserting"),
            ImportPhase::Complete => pb.finish_and_clear(),
        }
    })?;

    Ok((db, report))
}

/// Import a dump and print the summary
pub fn import(source: &Path, quiet: bool) -> anyhow::Result<()> {
    let start = Instant::now();
    if !quiet {
        print_step(1, 1, &GEAR, &format!("Importing {}...", source.display()));
    }

    let (db, report) = load_database(source, quiet)?;

    println!(
        "Added {} {} entries to database with {} overwrites ({} unique keys)",
        report.records,
        report.source,
        report.overwrites,
        db.len()
    );
    if !quiet {
        print_done(start.elapsed());
    }

    Ok(())
}

/// Search record text
pub fn search(
    source: &Path,
    query: Option<&str>,
    limit: usize,
    preview_width: usize,
    json: bool,
    quiet: bool,
) -> anyhow::Result<()> {
    let (db, _) = load_database(source, quiet || json)?;
    let matches: Vec<_> = db.search_opt(query).into_iter().take(limit).collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&matches)?);
        return Ok(());
    }

    let query = query.unwrap_or_default();
    if matches.is_empty() {
        if !quiet {
            println!("No entries found containing '{query}'");
        }
        return Ok(());
    }

    if !quiet {
        print_step(
            1,
            1,
            &LOOKING_GLASS,
            &format!("Found {} entries containing '{query}':", matches.len()),
        );
        println!();
    }
    for group in &matches {
        println!("{}", group.primary_key);
        if !quiet {
            for element in group.elements() {
                println!("  {}", truncate_text(&element.text, preview_width));
            }
        }
    }

    Ok(())
}

/// Show a single record
pub fn get(source: &Path, key: &str, show_tokens: bool) -> anyhow::Result<()> {
    let (db, _) = load_database(source, true)?;

    let Some(group) = db.get(key) else {
        anyhow::bail!("Entry not found: {}", key);
    };

    println!("Key: {}", group.primary_key);
    println!("Source: {}", group.legacy_source);
    for (index, element) in group.elements().iter().enumerate() {
        println!("Element {index}:");
        println!("{}", element.text);
    }

    if show_tokens {
        println!("Tokens:");
        for token in group.to_tokens()? {
            println!("  {token:?}");
        }
    }

    Ok(())
}

/// Decode one markup string
pub fn decode(text: &str, json: bool) -> anyhow::Result<()> {
    let tokens = markup::decode_str(text)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&tokens)?);
    } else {
        for token in &tokens {
            println!("{token:?}");
        }
    }

    Ok(())
}

/// Decode and re-encode every record, reporting any that change
pub fn check(source: &Path, quiet: bool) -> anyhow::Result<()> {
    let start = Instant::now();
    if !quiet {
        print_step(1, 2, &GEAR, &format!("Importing {}...", source.display()));
    }
    let (db, report) = load_database(source, quiet)?;

    if !quiet {
        print_step(2, 2, &LINK, &format!("Checking {} records...", db.len()));
    }

    let mut failures = Vec::new();
    for group in db.iter() {
        match group.to_tokens() {
            Ok(tokens) => {
                if markup::encode(&tokens) != group.elements() {
                    failures.push(format!("{}: markup changed after round trip", group.primary_key));
                }
            }
            Err(e) => failures.push(e.to_string()),
        }
    }

    if !failures.is_empty() {
        for failure in &failures {
            eprintln!("  {failure}");
        }
        anyhow::bail!(
            "{} of {} records failed the round trip",
            failures.len(),
            db.len()
        );
    }

    println!("{}", check_summary(db.len(), report.overwrites));
    if !quiet {
        print_done(start.elapsed());
    }

    Ok(())
}

fn check_summary(records: usize, overwrites: usize) -> String {
    format!(
        "All {records} records round-trip cleanly as markup v{} ({overwrites} overwrites during import)",
        markup::MARKUP_VERSION
    )
}

/// Truncate text for display
fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        let kept: String = text.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{kept}...")
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("abcdefghij", 8), "abcde...");
        assert_eq!(truncate_text("ääääää", 5), "ää...");
    }

    #[test]
    fn test_check_summary_names_markup_version() {
        assert_eq!(
            check_summary(12, 2),
            "All 12 records round-trip cleanly as markup v1 (2 overwrites during import)"
        );
    }

    #[test]
    fn test_resolve_source() {
        let mut config = Config::default();
        assert!(resolve_source(None, &config).is_err());

        config.text_rsc_dump = Some(PathBuf::from("from_config.json"));
        assert_eq!(
            resolve_source(None, &config).unwrap(),
            PathBuf::from("from_config.json")
        );
        assert_eq!(
            resolve_source(Some(Path::new("cli.json")), &config).unwrap(),
            PathBuf::from("cli.json")
        );
    }
}
