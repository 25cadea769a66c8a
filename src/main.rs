use std::fs::File;
use std::io::{self, BufRead, BufReader, IsTerminal, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{sync_channel, Receiver, RecvTimeoutError, SyncSender};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use signal_hook::consts::signal::SIGINT;

use anymore::config::Config;
use anymore::page::Output;
use anymore::terminal::{FixedSizeScreen, TerminalInput};
use anymore::{MorePageBuilder, Outcome, PageBuilder, Paginator};

/// How often a silent source yields to the SIGINT check.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Lines read ahead of the pager.
const FEED_CHANNEL_SIZE: usize = 64;

/// Page through text one screenful at a time.
#[derive(Parser, Debug)]
#[command(name = "anymore", version, about)]
struct Args {
    /// Files to show. Reads stdin when none are given or for `-`.
    files: Vec<PathBuf>,

    /// Lines per page (default: terminal height minus the prompt line)
    #[arg(short = 'n', long, value_name = "N")]
    lines: Option<usize>,

    /// Prompt shown between pages
    #[arg(long, value_name = "TEXT")]
    prompt: Option<String>,

    /// Leave out a default plugin (repeatable)
    #[arg(long = "disable", value_name = "PLUGIN")]
    disabled: Vec<String>,

    /// Ignore the config file
    #[arg(long)]
    no_config: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    match anymore::logging::init_tracing() {
        Ok(Some(path)) => tracing::info!(
            version = env!("CARGO_PKG_VERSION"),
            path = %path.display(),
            "Logging started"
        ),
        Ok(None) => {}
        Err(err) => eprintln!("Warning: Failed to create log file: {err}"),
    }

    match run(args) {
        Ok(outcome) => {
            tracing::debug!(?outcome, "Done");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(1)
        }
    }
}

fn run(args: Args) -> Result<Outcome> {
    let config = load_config(&args)?;

    let interrupted = Arc::new(AtomicBool::new(false));
    signal_hook::flag::register(SIGINT, Arc::clone(&interrupted))
        .context("Failed to install SIGINT handler")?;

    let builder = build_pager(&config)?;
    let mut paginator = Paginator::new(builder)?;

    let sources = if args.files.is_empty() {
        vec![PathBuf::from("-")]
    } else {
        args.files
    };

    let feed = spawn_reader(sources)?;
    let mut outcome = pump(&mut paginator, &feed, &interrupted)?;
    if outcome == Outcome::Completed {
        outcome = paginator.flush_incomplete_line()?;
    }

    paginator
        .builder()
        .output()
        .flush()
        .context("Failed to flush stdout")?;
    Ok(outcome)
}

/// Config file (unless `--no-config`) with the command line on top.
fn load_config(args: &Args) -> Result<Config> {
    let mut config = if args.no_config {
        Config::default()
    } else {
        Config::load().context("Failed to load config")?
    };

    if let Some(lines) = args.lines {
        config.pager.page_height = Some(lines);
    }
    if let Some(prompt) = &args.prompt {
        config.pager.prompt = prompt.clone();
    }
    config.plugins.disabled.extend(args.disabled.iter().cloned());

    config.validate()?;
    Ok(config)
}

/// When stdout is not a terminal every page is unbounded, so the text
/// passes straight through.
fn build_pager(config: &Config) -> Result<MorePageBuilder> {
    let registry = config.registry();
    tracing::debug!(plugins = ?registry.names(), "Building pager");

    let builder = if !io::stdout().is_terminal() {
        MorePageBuilder::from_registry(
            &registry,
            TerminalInput::new(),
            Output::stdout(),
            FixedSizeScreen::default(),
        )?
    } else if let Some(height) = config.pager.page_height {
        MorePageBuilder::from_registry(
            &registry,
            TerminalInput::new(),
            Output::stdout(),
            FixedSizeScreen::with_height(height.saturating_add(1)),
        )?
    } else {
        MorePageBuilder::for_terminal(&registry)?
    };

    Ok(builder.with_prompt(config.pager.prompt.clone()))
}

/// Text read from the sources, one line (or final fragment) at a time.
enum Feed {
    Text(String),
    Failed(anyhow::Error),
}

/// Reads every source in order on a background thread.
///
/// Blocking reads live off the main thread so that Ctrl-C is seen even
/// while a source is silent. The channel closes once every source is done.
fn spawn_reader(sources: Vec<PathBuf>) -> Result<Receiver<Feed>> {
    let (sender, receiver) = sync_channel(FEED_CHANNEL_SIZE);
    thread::Builder::new()
        .name("reader".to_string())
        .spawn(move || {
            for source in &sources {
                if let Err(err) = read_source(source, &sender) {
                    let _ = sender.send(Feed::Failed(err));
                    return;
                }
            }
        })
        .context("Failed to start reader thread")?;
    Ok(receiver)
}

/// Sends one file (or stdin for `-`) a line at a time so that slow
/// producers are shown as their output arrives.
fn read_source(source: &Path, sender: &SyncSender<Feed>) -> Result<()> {
    let reader: Box<dyn Read + Send> = if source == Path::new("-") {
        Box::new(io::stdin())
    } else {
        let file = File::open(source)
            .with_context(|| format!("Failed to open '{}'", source.display()))?;
        Box::new(file)
    };
    let mut reader = BufReader::new(reader);

    let mut buf = Vec::new();
    loop {
        buf.clear();
        let read = match reader.read_until(b'\n', &mut buf) {
            Ok(read) => read,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => {
                return Err(err).with_context(|| format!("Failed to read '{}'", source.display()))
            }
        };
        if read == 0 {
            return Ok(());
        }

        let text = String::from_utf8_lossy(&buf).into_owned();
        if sender.send(Feed::Text(text)).is_err() {
            // Pager is gone.
            return Ok(());
        }
    }
}

/// Hands fed text to the paginator until the feed closes or output stops.
///
/// The SIGINT flag is checked at least every `POLL_INTERVAL`.
fn pump<B: PageBuilder>(
    paginator: &mut Paginator<B>,
    feed: &Receiver<Feed>,
    interrupted: &AtomicBool,
) -> Result<Outcome> {
    loop {
        if interrupted.load(Ordering::Relaxed) {
            tracing::info!("Interrupted");
            return Ok(Outcome::Stopped);
        }

        match feed.recv_timeout(POLL_INTERVAL) {
            Ok(Feed::Text(text)) => {
                if paginator.add_text(&text)? == Outcome::Stopped {
                    return Ok(Outcome::Stopped);
                }
            }
            Ok(Feed::Failed(err)) => return Err(err),
            Err(RecvTimeoutError::Timeout) => continue,
            Err(RecvTimeoutError::Disconnected) => return Ok(Outcome::Completed),
        }
    }
}
