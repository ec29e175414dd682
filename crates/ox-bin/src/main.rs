//! oxbox entrypoint: renders nested containers once, or drives them
//! interactively in the alternate screen.
mod app;
mod echo;
mod keys;

use anyhow::{Context, Result};
use app::{App, LoopControl};
use clap::Parser;
use core_terminal::{CrosstermBackend, TerminalBackend};
use crossterm::event::{self, Event as CEvent};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Once};
use tracing::{info, trace};
use tracing_appender::non_blocking::WorkerGuard;

const DEFAULT_TEXT: &str = "oxbox\nTab toggles focus, q quits.";
const FALLBACK_SIZE: (u16, u16) = (80, 12);
const LOG_FILE: &str = "oxbox.log";

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "oxbox", version, about = "Nested terminal containers")]
struct Args {
    /// Text shown inside the innermost box.
    pub text: Option<String>,
    /// Optional configuration file path (overrides discovery of `oxbox.toml`).
    #[arg(long = "config")]
    pub config: Option<PathBuf>,
    /// Theme name, overriding `[theme] name` from the config file.
    #[arg(long = "theme")]
    pub theme: Option<String>,
    #[arg(long = "width")]
    pub width: Option<u16>,
    #[arg(long = "height")]
    pub height: Option<u16>,
    /// Run in the alternate screen and react to keys and resizes.
    #[arg(long = "interactive", short = 'i')]
    pub interactive: bool,
}

fn configure_logging() -> Option<WorkerGuard> {
    let log_dir = Path::new(".");
    let log_path = log_dir.join(LOG_FILE);
    if log_path.exists() {
        let _ = std::fs::remove_file(&log_path);
    }

    let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE);
    let (nb_writer, guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_ansi(false)
        .with_writer(nb_writer)
        .try_init()
        .ok()
        .map(|_| guard)
}

fn install_panic_hook() {
    static HOOK: Once = Once::new();
    HOOK.call_once(|| {
        let default_panic = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            tracing::error!(target: "runtime.panic", ?info, "panic");
            default_panic(info);
        }));
    });
}

fn build_app(args: &Args) -> Result<App> {
    let mut config = core_config::load_from(args.config.clone())
        .with_context(|| "loading configuration")?;
    if let Some(name) = &args.theme {
        config.file.theme.name = Some(name.clone());
    }
    let palette = config.palette();
    info!(
        target: "runtime.startup",
        config = ?config.path,
        theme = palette.name.as_str(),
        max_width = config.file.container.max_width,
        "config_resolved"
    );
    core_theme::set_current(Arc::new(palette));
    let text = args.text.as_deref().unwrap_or(DEFAULT_TEXT);
    Ok(App::new(text, config.container_options()))
}

fn requested_size(args: &Args, backend: &CrosstermBackend) -> (u16, u16) {
    let (tw, th) = backend.size().unwrap_or(FALLBACK_SIZE);
    (args.width.unwrap_or(tw), args.height.unwrap_or(th))
}

fn print_once(app: &mut App, size: (u16, u16)) {
    app.resize(size.0, size.1);
    app.init();
    println!("{}", app.frame());
}

fn run_interactive(app: &mut App, backend: &mut CrosstermBackend) -> Result<()> {
    backend.set_title("oxbox")?;
    let mut guard = backend.enter_guard()?;
    let (width, height) = guard.backend().size()?;
    app.resize(width, height);
    if app.init() == LoopControl::Quit {
        return Ok(());
    }
    guard.backend().draw(&app.frame())?;

    loop {
        let control = match event::read()? {
            CEvent::Key(key) => match keys::map_key_event(&key) {
                Some(key) => app.handle_key(key),
                None => continue,
            },
            CEvent::Resize(w, h) => app.resize(w, h),
            other => {
                trace!(target: "runtime", ?other, "event_ignored");
                continue;
            }
        };
        if control == LoopControl::Quit {
            info!(target: "runtime", "shutdown");
            break;
        }
        guard.backend().draw(&app.frame())?;
    }
    Ok(())
}

fn main() -> Result<()> {
    let _log_guard = configure_logging();
    install_panic_hook();
    info!(target: "runtime", "startup");

    let args = Args::parse();
    let mut app = build_app(&args)?;
    let mut backend = CrosstermBackend::new();

    if args.interactive {
        run_interactive(&mut app, &mut backend)
    } else {
        let size = requested_size(&args, &backend);
        print_once(&mut app, size);
        Ok(())
    }
}
