use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{io, time::Duration};
use tokio::sync::mpsc;

use token_about::about::AboutPanel;
use token_about::app::cli::Args;
use token_about::app::config::AppConfig;
use token_about::app::events::AppEvent;
use token_about::app::input_handler::{self, SystemBrowser};
use token_about::app::App;
use token_about::chain::BuiltinChains;
use token_about::{logging, ui};

type Tui = Terminal<CrosstermBackend<io::Stdout>>;

#[tokio::main]
async fn main() -> Result<()> {
    human_panic::setup_panic!();
    install_terminal_restore_hook();

    let args = Args::parse();

    if args.generate_config {
        println!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let config = match &args.config {
        Some(path) => AppConfig::load_from(path),
        None => AppConfig::load(),
    }
    .context("Failed to load config")?;

    let _log_guard = logging::init(&AppConfig::get_log_dir(), &config.log_level);

    let tokens = args.tokens().context("Failed to read token input")?;
    tracing::info!(count = tokens.len(), print = args.print, "starting");

    if args.print {
        let pages: Vec<String> = tokens
            .into_iter()
            .map(|token| {
                let mut panel = AboutPanel::new(token, config.truncate_limit, &BuiltinChains);
                if args.expanded && panel.should_truncate() {
                    panel.toggle();
                }
                ui::print::render_plain(&panel)
            })
            .collect();
        print!("{}", pages.join("\n"));
        return Ok(());
    }

    let theme = ui::theme::load_current_theme();
    let mut app = App::new(tokens, config, theme)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        tracing::error!(error = %e, "event loop failed");
    }
    tracing::info!("exiting");
    result
}

async fn run(terminal: &mut Tui, app: &mut App) -> Result<()> {
    let (tx, mut rx) = mpsc::channel(100);

    // 1. Input Event Task
    let tx_input = tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        while let Some(Ok(event)) = reader.next().await {
            if tx_input.send(AppEvent::Input(event)).await.is_err() {
                break;
            }
        }
    });

    // 2. Tick Task (toast expiry)
    let tx_tick = tx.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_millis(100));
        loop {
            interval.tick().await;
            if tx_tick.send(AppEvent::Tick).await.is_err() {
                break;
            }
        }
    });

    let opener = SystemBrowser;

    loop {
        terminal.draw(|f| ui::ui(f, app))?;

        match rx.recv().await {
            Some(AppEvent::Input(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                input_handler::handle_key(key, app, &opener);
            }
            Some(AppEvent::Input(_)) => {} // Resize etc. just redraw
            Some(AppEvent::Tick) => app.on_tick(),
            None => break,
        }

        if !app.is_running {
            break;
        }
    }

    Ok(())
}

/// Leave raw mode before the panic report is printed, otherwise it lands
/// on the alternate screen and vanishes.
fn install_terminal_restore_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        previous(info);
    }));
}
