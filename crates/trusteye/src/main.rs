mod cli;
mod config;
mod headless;
mod layers;
mod logging;

use crate::cli::Args;
use crate::config::{Config, Settings};
use crate::headless::run_headless;
use crate::layers::service::{AnalysisClient, Dispatcher, HttpAnalysisClient, UiEvent};
use crate::layers::ui::{draw_ui, handle_key_event, restore_terminal, setup_terminal, AppState};
use crate::logging::init_tracing;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let _file_guard = init_tracing(&args.log_dir, args.log_to_stderr)?;

    let config = Config::load_for(&args)?;
    let settings = Settings::resolve(&config, &args)?;
    let http = HttpAnalysisClient::new(&settings.api_base, settings.connect_timeout)?;
    tracing::info!(
        event = "client_started",
        api_base = %http.base_url(),
        headless = args.command.is_some(),
    );
    let client: Arc<dyn AnalysisClient> = Arc::new(http);

    if let Some(command) = &args.command {
        let output = run_headless(command, client.as_ref()).await?;
        println!("{output}");
        return Ok(());
    }

    let (ui_tx, mut ui_rx) = mpsc::channel::<UiEvent>(128);
    let dispatcher = Dispatcher::new(Arc::clone(&client), ui_tx);
    dispatcher.probe_health();

    let mut terminal = setup_terminal()?;
    let mut app = AppState::new(&settings);

    let tick_rate = Duration::from_millis(100);
    let result: anyhow::Result<()> = loop {
        while let Ok(event) = ui_rx.try_recv() {
            app.handle_event(event, Instant::now());
        }
        app.tick(Instant::now());

        if let Err(err) = terminal.draw(|frame| draw_ui(frame, &app)) {
            break Err(err.into());
        }

        match event::poll(tick_rate) {
            Ok(true) => match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    if handle_key_event(key, &mut app, &dispatcher) {
                        break Ok(());
                    }
                }
                Ok(_) => {}
                Err(err) => break Err(err.into()),
            },
            Ok(false) => {}
            Err(err) => break Err(err.into()),
        }
    };

    restore_terminal(&mut terminal)?;
    tracing::info!(event = "client_stopped");
    result
}
