use std::{
    fs::File,
    io::{BufReader, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "choreo", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate a site config.
    Check(CheckArgs),
    /// Replay a recorded event trace and print the resulting effects.
    Replay(ReplayArgs),
}

#[derive(Parser, Debug)]
struct CheckArgs {
    /// Site config JSON.
    #[arg(long)]
    config: PathBuf,
}

#[derive(Parser, Debug)]
struct ReplayArgs {
    /// Site config JSON (defaults are used when omitted).
    #[arg(long)]
    config: Option<PathBuf>,

    /// JSON array of page events.
    #[arg(long)]
    events: PathBuf,

    /// Pretty-print each output record.
    #[arg(long)]
    pretty: bool,
}

#[derive(serde::Serialize)]
struct Record<'a> {
    seq: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    event: Option<&'a choreo::PageEvent>,
    effects: &'a [choreo::Effect],
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("choreo=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Check(args) => cmd_check(args),
        Command::Replay(args) => cmd_replay(args),
    }
}

fn read_config(path: &Path) -> anyhow::Result<choreo::SiteConfig> {
    let s = std::fs::read_to_string(path)
        .with_context(|| format!("read config '{}'", path.display()))?;
    let cfg = choreo::SiteConfig::from_json_str(&s)
        .with_context(|| format!("load config '{}'", path.display()))?;
    Ok(cfg)
}

fn read_events(path: &Path) -> anyhow::Result<Vec<choreo::PageEvent>> {
    let f = File::open(path).with_context(|| format!("open events '{}'", path.display()))?;
    let events: Vec<choreo::PageEvent> = serde_json::from_reader(BufReader::new(f))
        .with_context(|| "parse events JSON")?;
    Ok(events)
}

fn cmd_check(args: CheckArgs) -> anyhow::Result<()> {
    let cfg = read_config(&args.config)?;
    eprintln!(
        "ok: {} media slots, {} tilt surfaces, {} reveals",
        cfg.media.slot_count,
        cfg.surfaces.len(),
        cfg.reveals.len()
    );
    Ok(())
}

fn cmd_replay(args: ReplayArgs) -> anyhow::Result<()> {
    let cfg = match &args.config {
        Some(path) => read_config(path)?,
        None => choreo::SiteConfig::default(),
    };
    let events = read_events(&args.events)?;
    let mut page = choreo::Page::new(cfg).context("build page")?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut write_record = |record: &Record<'_>| -> anyhow::Result<()> {
        if args.pretty {
            serde_json::to_writer_pretty(&mut out, record)?;
        } else {
            serde_json::to_writer(&mut out, record)?;
        }
        writeln!(out)?;
        Ok(())
    };

    let mount = page.mount();
    let mut total = mount.len();
    write_record(&Record {
        seq: 0,
        event: None,
        effects: &mount,
    })?;

    for (i, event) in events.iter().enumerate() {
        let effects = page.dispatch(event.clone());
        total += effects.len();
        write_record(&Record {
            seq: i + 1,
            event: Some(event),
            effects: &effects,
        })?;
    }

    tracing::info!(events = events.len(), effects = total, "replay finished");
    Ok(())
}
