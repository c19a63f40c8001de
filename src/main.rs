use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use vidscribe::agent::StylePreferences;
use vidscribe::config::TranscriptSourceConfig;
use vidscribe::logging::init_logging;
use vidscribe::memory::{SessionMemory, STYLE_PREFERENCES};
use vidscribe::output::{save_session, ArticleWriter};
use vidscribe::{Orchestrator, OrchestratorResult, PipelineConfig};

const RULE: &str = "============================================================";

/// Turn YouTube video transcripts into blog articles
#[derive(Debug, Parser)]
#[command(name = "vidscribe", version, about)]
struct Cli {
    /// Video URLs or ids (prompted for when omitted)
    inputs: Vec<String>,

    /// Directory holding config.json
    #[arg(long)]
    config_dir: Option<PathBuf>,

    /// Read transcripts from this directory instead of the demo source
    #[arg(long)]
    transcripts_dir: Option<PathBuf>,

    /// Render a timestamped transcript instead of section summaries
    #[arg(long)]
    timestamps: bool,

    /// Article tone
    #[arg(long)]
    tone: Option<String>,

    /// Article length
    #[arg(long)]
    length: Option<String>,

    /// Footer appended to every article
    #[arg(long)]
    attribution: Option<String>,

    /// Save each article to a timestamped file
    #[arg(long)]
    save: bool,

    /// Where saved articles go
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Write the session memory of the last successful run as JSON
    #[arg(long)]
    dump_session: Option<PathBuf>,

    /// Log level (RUST_LOG takes precedence)
    #[arg(long)]
    log_level: Option<String>,
}

/// Output of one input
struct RunOutcome {
    result: OrchestratorResult,
    session: SessionMemory,
}

/// Load config and apply command line overrides
fn load_config(cli: &Cli) -> Result<PipelineConfig> {
    let config_dir = cli.config_dir.clone().or_else(PipelineConfig::default_dir);
    let mut config = match config_dir {
        Some(dir) => PipelineConfig::load(&dir)
            .with_context(|| format!("Failed to load config from {}", dir.display()))?,
        None => PipelineConfig::default(),
    };

    if let Some(dir) = &cli.transcripts_dir {
        config.transcript_source = TranscriptSourceConfig::Local { dir: dir.clone() };
    }
    if cli.timestamps {
        config.timestamps = true;
    }
    if let Some(text) = &cli.attribution {
        config.attribution = Some(text.clone());
    }
    if let Some(level) = &cli.log_level {
        config.log_level = level.clone();
    }
    Ok(config)
}

/// Memory every run starts from
fn seed_memory(cli: &Cli, config: &PipelineConfig) -> SessionMemory {
    let mut memory = SessionMemory::new();
    if cli.tone.is_some() || cli.length.is_some() {
        let defaults = &config.default_style;
        let style = StylePreferences {
            tone: cli.tone.clone().unwrap_or_else(|| defaults.tone.clone()),
            length: cli.length.clone().unwrap_or_else(|| defaults.length.clone()),
        };
        memory.set(STYLE_PREFERENCES, &style);
    }
    memory
}

/// Ask for a single URL on stdin
fn prompt_input() -> Result<String> {
    println!("{}", RULE);
    println!("YouTube → Blog Article Converter");
    println!("{}", RULE);
    print!("\nEnter YouTube URL: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read input")?;
    let input = line.trim().to_string();
    if input.is_empty() {
        bail!("No URL provided");
    }
    println!("\nProcessing your video...\n");
    Ok(input)
}

/// Run every input on its own blocking task, each with a private orchestrator.
///
/// Results come back in input order.
async fn process_all(
    inputs: Vec<String>,
    config: PipelineConfig,
    seed: SessionMemory,
) -> Vec<(String, Result<RunOutcome>)> {
    let handles: Vec<_> = inputs
        .into_iter()
        .map(|input| {
            let config = config.clone();
            let seed = seed.clone();
            let task_input = input.clone();
            let handle = tokio::task::spawn_blocking(move || {
                let mut orchestrator = Orchestrator::new(&config).with_memory(seed);
                let result = orchestrator.run(&task_input)?;
                let session = orchestrator.last_session().cloned().unwrap_or_default();
                Ok::<_, vidscribe::PipelineError>(RunOutcome { result, session })
            });
            (input, handle)
        })
        .collect();

    let mut outcomes = Vec::with_capacity(handles.len());
    for (input, handle) in handles {
        let outcome = match handle.await {
            Ok(Ok(outcome)) => Ok(outcome),
            Ok(Err(e)) => Err(anyhow::Error::new(e).context(format!("Failed to process {}", input))),
            Err(e) => Err(anyhow::Error::new(e).context(format!("Worker task for {} panicked", input))),
        };
        outcomes.push((input, outcome));
    }
    outcomes
}

/// Print each article and save it when `writer` is given.
///
/// A failed run or a failed save counts as one failure and the rest of the
/// batch still goes out. Returns the failure count and the session of the
/// last article that made it through.
fn emit_outcomes(
    outcomes: Vec<(String, Result<RunOutcome>)>,
    writer: Option<&ArticleWriter>,
    batch: bool,
) -> (usize, Option<SessionMemory>) {
    let mut last_session = None;
    let mut failures = 0;

    for (i, (input, outcome)) in outcomes.into_iter().enumerate() {
        let RunOutcome { result, session } = match outcome {
            Ok(outcome) => outcome,
            Err(e) => {
                failures += 1;
                eprintln!("\n✗ {:#}", e);
                continue;
            }
        };

        println!("\n{}", RULE);
        if batch {
            println!("GENERATED BLOG ARTICLE ({})", input);
        } else {
            println!("GENERATED BLOG ARTICLE");
        }
        println!("{}", RULE);
        println!("{}", result.response);

        if let Some(writer) = writer {
            let index = batch.then_some(i + 1);
            match writer
                .save(&result.response, index)
                .with_context(|| format!("Failed to save article for {}", input))
            {
                Ok(path) => println!("\n✓ Article saved to: {}", path.display()),
                Err(e) => {
                    failures += 1;
                    eprintln!("\n✗ {:#}", e);
                    continue;
                }
            }
        }
        last_session = Some(session);
    }

    (failures, last_session)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;
    init_logging(&config.log_level);

    let inputs = if cli.inputs.is_empty() {
        vec![prompt_input()?]
    } else {
        cli.inputs.clone()
    };
    let batch = inputs.len() > 1;
    let total = inputs.len();

    let seed = seed_memory(&cli, &config);
    let outcomes = process_all(inputs, config, seed).await;

    let writer = ArticleWriter::new(&cli.out_dir);
    let (failures, last_session) = emit_outcomes(outcomes, cli.save.then_some(&writer), batch);

    if let (Some(path), Some(session)) = (&cli.dump_session, &last_session) {
        save_session(path, session)
            .with_context(|| format!("Failed to write session to {}", path.display()))?;
    }

    if failures > 0 {
        bail!("{} of {} inputs failed", failures, total);
    }
    Ok(())
}
