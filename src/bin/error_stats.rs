use std::path::PathBuf;
use anyhow::Result;
use clap::Parser;
use verbgravity::FailureLog;

#[derive(Parser, Debug)]
#[command(name = "error_stats")]
#[command(about = "Summarize the analyzer failure log by error type")]
#[command(version)]
struct Args {
    /// Failure log (JSON lines)
    #[arg(default_value = "data/nlp_errors.log")]
    log: PathBuf,

    /// Print the counts as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let stats = FailureLog::stats(&args.log)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("Failure log: {}", args.log.display());
    if stats.is_empty() {
        println!("No failures recorded");
        return Ok(());
    }
    let total: usize = stats.values().sum();
    for (error_type, count) in &stats {
        println!("{:<28} {:>6}", error_type, count);
    }
    println!("{:<28} {:>6}", "total", total);
    Ok(())
}
