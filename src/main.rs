mod app;
mod config;
mod filter;
mod models;
mod source;
mod ui;

use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use crossterm::{
    ExecutableCommand,
    event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyEventKind},
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures_util::StreamExt;
use ratatui::prelude::*;
use tokio::time::{Duration, interval};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use app::{App, Location, handle_action, handle_mouse, handle_report_event, trigger_action};
use config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing()?;

    // Setup terminal
    terminal::enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    io::stdout().execute(EnableMouseCapture)?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal).await;

    // Teardown terminal
    terminal::disable_raw_mode()?;
    io::stdout().execute(DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;

    result
}

async fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = Config::load(&cwd);

    // lens-report [REPORT] [FILTER | #?q=FILTER]
    let mut args = std::env::args().skip(1);
    let report_path = args.next().map(PathBuf::from).unwrap_or(config.report.path);
    let initial_filter = match args.next() {
        Some(arg) if arg.starts_with('#') => Location::parse(&arg).query,
        Some(arg) => arg,
        None => config.filter.default,
    };

    let source = source::detect(&cwd.join(report_path));
    tracing::info!(source = source.name(), filter = %initial_filter, "starting");

    let (mut app, mut event_rx) = App::new(source.name().to_string(), initial_filter);
    source::spawn_load(Arc::clone(&source), app.event_tx.clone());

    let mut tick = interval(Duration::from_millis(100));
    let mut event_stream = EventStream::new();

    loop {
        terminal.draw(|frame| ui::draw(frame, &mut app))?;

        tokio::select! {
            maybe_event = event_stream.next() => {
                match maybe_event {
                None => break,
                Some(Err(e)) => return Err(e.into()),
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                    if let Some(action) = trigger_action(key, app.filter_active) {
                        handle_action(&mut app, action);
                    }
                }
                Some(Ok(Event::Mouse(mouse))) => handle_mouse(&mut app, mouse),
                Some(Ok(_)) => {}
                }
            }

            Some(report_event) = event_rx.recv() => {
                handle_report_event(&mut app, report_event);
            }

            _ = tick.tick() => {
                if app.loading {
                    app.spinner_tick = app.spinner_tick.wrapping_add(1);
                }
                app.notifier.prune_expired();
            }
        }

        if app.reload_requested {
            app.reload_requested = false;
            tracing::info!(source = source.name(), "reloading report");
            source::spawn_load(Arc::clone(&source), app.event_tx.clone());
        }

        if app.should_quit {
            tracing::info!("quit requested");
            break;
        }
    }

    Ok(())
}

/// Log to the file named by `LENS_REPORT_LOG`; the terminal belongs to the UI.
/// Level comes from `RUST_LOG`, defaulting to `info`.
fn init_tracing() -> Result<()> {
    let Ok(path) = std::env::var("LENS_REPORT_LOG") else {
        return Ok(());
    };
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open log file {}", path))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(false),
        )
        .with(filter)
        .init();
    Ok(())
}
