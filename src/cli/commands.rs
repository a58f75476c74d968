//! Command implementations for the setsearch CLI.

use std::io::{self, BufRead, Write};

use log::{debug, info};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::SearchConfig;
use crate::engine::SearchEngine;
use crate::error::Result;

/// Execute a CLI command.
pub fn execute_command(args: SetSearchArgs) -> Result<()> {
    let config = resolve_config(&args)?;
    let options = OutputOptions {
        format: args.output_format,
        pretty: args.pretty,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &args.command {
        Command::Stats => show_stats(config, options, &mut out),
        Command::Query(query_args) => run_queries(query_args, config, options, &mut out),
        Command::Interactive(interactive_args) => {
            let mut config = config;
            if let Some(prompt) = &interactive_args.prompt {
                config.prompt = prompt.clone();
            }
            let stdin = io::stdin();
            let engine = open_engine(config, options, &mut out)?;
            run_interactive(&engine, options, stdin.lock(), &mut out).map(|_| ())
        }
    }
}

/// Merge the config file (if any) with command line overrides.
pub fn resolve_config(args: &SetSearchArgs) -> Result<SearchConfig> {
    let mut config = match &args.config {
        Some(path) => {
            debug!("Loading config from {}", path.display());
            SearchConfig::from_file(path)?
        }
        None => SearchConfig::default(),
    };

    if let Some(corpus) = &args.corpus {
        config.corpus_path = Some(corpus.clone());
    }
    if let Command::Query(query_args) = &args.command
        && query_args.unsorted
    {
        config.sort_results = false;
    }

    Ok(config)
}

/// Build the engine named by `config` and print the index summary.
///
/// An unreadable corpus is reported on stderr and yields an empty index.
fn open_engine<W: Write>(
    config: SearchConfig,
    options: OutputOptions,
    out: &mut W,
) -> Result<SearchEngine> {
    let corpus = config.require_corpus_path()?.display().to_string();

    if options.format == OutputFormat::Human {
        writeln!(out, "Stand by while building index...")?;
    }

    let (engine, report) = SearchEngine::open(config)?;
    if let Some(e) = &report.source_error {
        eprintln!("Cannot read corpus {corpus}: {e}");
    }

    write_summary(out, &IndexSummary::new(corpus, engine.stats()), options)?;
    Ok(engine)
}

/// Show statistics for the configured corpus.
fn show_stats<W: Write>(config: SearchConfig, options: OutputOptions, out: &mut W) -> Result<()> {
    open_engine(config, options, out)?;
    Ok(())
}

/// Evaluate each query in turn and print its results.
fn run_queries<W: Write>(
    args: &QueryArgs,
    config: SearchConfig,
    options: OutputOptions,
    out: &mut W,
) -> Result<()> {
    let engine = open_engine(config, options, out)?;

    for query in &args.queries {
        let results = engine.search(query)?;
        write_search_results(out, &results, options)?;
    }

    Ok(())
}

/// Read query lines from `input` until an empty line or end of input.
///
/// Returns the number of queries answered. Blank lines end the loop rather
/// than reaching the evaluator.
pub fn run_interactive<R: BufRead, W: Write>(
    engine: &SearchEngine,
    options: OutputOptions,
    mut input: R,
    out: &mut W,
) -> Result<usize> {
    let human = options.format == OutputFormat::Human;
    let mut answered = 0;
    let mut line = String::new();

    if human {
        writeln!(out)?;
    }

    loop {
        if human {
            write!(out, "{}", engine.config().prompt)?;
            out.flush()?;
        }

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        let query = line.trim_end_matches(['\n', '\r']);
        if query.trim().is_empty() {
            break;
        }

        let results = engine.search(query)?;
        write_search_results(out, &results, options)?;
        answered += 1;
    }

    if human {
        writeln!(out, "Thank you for searching!")?;
    }
    info!("Answered {answered} queries");

    Ok(answered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    use clap::Parser;

    use crate::corpus::Record;

    fn engine() -> SearchEngine {
        SearchEngine::from_records(vec![
            Record::new("www.rainbow.org", "red green blue"),
            Record::new("www.dr.seuss.net", "One Fish Two Fish Red fish Blue fish"),
        ])
    }

    fn interact(input: &str, options: OutputOptions) -> (usize, String) {
        let mut out = Vec::new();
        let input = Cursor::new(input.to_string());
        let answered = run_interactive(&engine(), options, input, &mut out).unwrap();
        (answered, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_interactive_session() {
        let (answered, text) = interact("red\nred -fish\n\nblue\n", OutputOptions::default());

        assert_eq!(answered, 2);
        let prompt = crate::config::DEFAULT_PROMPT;
        let expected = format!(
            "\n{prompt}Found 2 matching pages\nwww.dr.seuss.net\nwww.rainbow.org\n\
             {prompt}Found 1 matching pages\nwww.rainbow.org\n\
             {prompt}Thank you for searching!\n"
        );
        assert_eq!(text, expected);
    }

    #[test]
    fn test_interactive_stops_at_end_of_input() {
        let (answered, text) = interact("green", OutputOptions::default());
        assert_eq!(answered, 1);
        assert!(text.ends_with("Thank you for searching!\n"));
    }

    #[test]
    fn test_interactive_blank_line_ends_loop() {
        let (answered, _) = interact("   \nred\n", OutputOptions::default());
        assert_eq!(answered, 0);
    }

    #[test]
    fn test_interactive_json() {
        let options = OutputOptions {
            format: OutputFormat::Json,
            pretty: false,
        };
        let (answered, text) = interact("fish\r\nred +green\r\n", options);

        assert_eq!(answered, 2);
        let lines: Vec<serde_json::Value> = text
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["matches"][0], "www.dr.seuss.net");
        assert_eq!(lines[1]["query"], "red +green");
        assert_eq!(lines[1]["total"], 1);
    }

    #[test]
    fn test_resolve_config_overrides() {
        let args = SetSearchArgs::try_parse_from([
            "setsearch",
            "-c",
            "tiny.txt",
            "query",
            "--unsorted",
            "fish",
        ])
        .unwrap();

        let config = resolve_config(&args).unwrap();
        assert_eq!(config.corpus_path, Some(std::path::PathBuf::from("tiny.txt")));
        assert!(!config.sort_results);
    }

    #[test]
    fn test_open_engine_unreadable_corpus() {
        let config = SearchConfig::default().with_corpus_path("/no/such/corpus.txt");
        let mut out = Vec::new();

        let engine = open_engine(config, OutputOptions::default(), &mut out).unwrap();

        assert!(engine.index().is_empty());
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Indexed 0 pages containing 0 unique terms"));
    }
}
