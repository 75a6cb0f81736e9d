use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use anyhow::{Result, anyhow};
use clap::Parser;
use log::{info, warn};
use verbgravity::tracking::{FailureRecord, PARSE_ERROR};
use verbgravity::{
    load_config_from_yaml, AnalysisResult, Analyzer, AnalyzerConfig, FailureLog, LazyProvider,
    Mode, PreparsedProvider,
};

#[derive(Parser, Debug)]
#[command(name = "analyze_passage")]
#[command(about = "Compute root and subject answer keys for English passages")]
#[command(version)]
struct Args {
    /// Parse file (JSON, JSONL or gzipped JSON documents)
    #[arg(short = 'P', long)]
    parses: PathBuf,

    /// Analyzer configuration file (optional)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Analysis mode; defaults to the configured mode
    #[arg(short, long, value_enum)]
    mode: Option<Mode>,

    /// Passage to analyze
    #[arg(short, long, conflicts_with = "input")]
    passage: Option<String>,

    /// File with one passage per line, analyzed as a batch
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Failure log path, overriding the configured one
    #[arg(long)]
    failure_log: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

fn to_json(value: &impl serde::Serialize, pretty: bool) -> Result<String> {
    Ok(if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    })
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => load_config_from_yaml(path)?,
        None => AnalyzerConfig::default(),
    };
    let mode = args.mode.unwrap_or(config.default_mode);

    let parses = args.parses.clone();
    let model = config.model_name.clone();
    let provider = LazyProvider::new(config.model_name.clone(), move || {
        PreparsedProvider::from_file(&parses, model.clone())
    });

    let mut analyzer = Analyzer::from_config(Arc::new(provider), &config)?;
    let failure_log = match args.failure_log.as_ref().or(config.failure_log.as_ref()) {
        Some(path) => {
            let log = Arc::new(FailureLog::new(path)?);
            analyzer = analyzer.with_observer(log.clone());
            Some(log)
        }
        None => None,
    };
    let record_parse_error = |passage: &str, message: &str| {
        if let Some(log) = &failure_log {
            log.record(&FailureRecord::new(passage, PARSE_ERROR).with_detail("message", message));
        }
    };

    let passages: Vec<String> = match (&args.passage, &args.input) {
        (Some(passage), _) => vec![passage.clone()],
        (None, Some(path)) => fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read {}: {}", path.display(), e))?
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(str::to_string)
            .collect(),
        (None, None) => return Err(anyhow!("Either --passage or --input is required")),
    };

    for passage in &passages {
        config.check_passage(passage)?;
    }
    info!("Analyzing {} passage(s) in {} mode", passages.len(), mode);

    if args.passage.is_some() {
        let result = analyzer.analyze(&passages[0], mode).map_err(|e| {
            record_parse_error(&passages[0], &e.to_string());
            e
        })?;
        println!("{}", to_json(&result, args.pretty)?);
        return Ok(());
    }

    let mut results: Vec<Option<AnalysisResult>> = Vec::with_capacity(passages.len());
    let mut failed = 0;
    for (passage, result) in passages.iter().zip(analyzer.analyze_batch(&passages, mode)) {
        match result {
            Ok(result) => results.push(Some(result)),
            Err(e) => {
                warn!("{}", e);
                record_parse_error(passage, &e.to_string());
                failed += 1;
                results.push(None);
            }
        }
    }
    println!("{}", to_json(&results, args.pretty)?);
    info!("Done: {} analyzed, {} failed", passages.len() - failed, failed);
    Ok(())
}
