use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crossterm::event::Event as CEvent;
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::{select, sync::mpsc};

use crate::config::Settings;
use crate::sources::MealDbClient;
use crate::state::{AppState, QueryInput, RecipeDetail, SearchEvent};
use crate::ui::ui;

use super::terminal::{restore_terminal, setup_terminal};
use super::workers::{SearchTuning, spawn_details_worker, spawn_search_worker};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Channels between the event loop and its workers.
struct Channels {
    /// Terminal events from the reader thread.
    event_tx: mpsc::UnboundedSender<CEvent>,
    /// Receiving side of terminal events.
    event_rx: mpsc::UnboundedReceiver<CEvent>,
    /// Set on exit so the reader thread stops.
    event_thread_cancelled: Arc<AtomicBool>,
    /// Queries to the search worker.
    query_tx: mpsc::UnboundedSender<QueryInput>,
    /// Progress and outcomes from the search worker.
    search_rx: mpsc::UnboundedReceiver<SearchEvent>,
    /// Meal ids to the details worker.
    details_req_tx: mpsc::UnboundedSender<String>,
    /// Loaded details.
    details_res_rx: mpsc::UnboundedReceiver<(String, Option<RecipeDetail>)>,
}

impl Channels {
    /// What: Create the channels and spawn both workers against `client`.
    fn new(client: MealDbClient, app: &AppState, settings: &Settings) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let (query_tx, query_rx) = mpsc::unbounded_channel();
        let (search_tx, search_rx) = mpsc::unbounded_channel();
        let (details_req_tx, details_req_rx) = mpsc::unbounded_channel();
        let (details_res_tx, details_res_rx) = mpsc::unbounded_channel();

        let source = Arc::new(client);
        spawn_search_worker(
            Arc::clone(&source),
            Arc::clone(&app.catalog),
            SearchTuning::from(settings),
            query_rx,
            search_tx,
        );
        spawn_details_worker(source, details_req_rx, details_res_tx);

        Self {
            event_tx,
            event_rx,
            event_thread_cancelled: Arc::new(AtomicBool::new(false)),
            query_tx,
            search_rx,
            details_req_tx,
            details_res_rx,
        }
    }
}

/// What: Read terminal events on a dedicated thread and forward them.
///
/// Details:
/// - Polls with a short timeout so the cancel flag is seen promptly.
/// - Exits when the flag is set or the receiver is gone.
fn spawn_event_thread(event_tx: mpsc::UnboundedSender<CEvent>, cancelled: Arc<AtomicBool>) {
    std::thread::spawn(move || {
        while !cancelled.load(Ordering::Relaxed) {
            match crossterm::event::poll(Duration::from_millis(50)) {
                Ok(true) => match crossterm::event::read() {
                    Ok(ev) => {
                        if cancelled.load(Ordering::Relaxed) || event_tx.send(ev).is_err() {
                            break;
                        }
                    }
                    // transient read errors
                    Err(_) => {}
                },
                Ok(false) => {}
                Err(_) => std::thread::sleep(Duration::from_millis(50)),
            }
        }
    });
}

/// What: Run the interactive recipe finder until the user quits.
///
/// Inputs:
/// - `settings`: Loaded settings (API base, timeouts, moods, synonyms).
///
/// Output:
/// - `Ok(())` on a clean exit; `Err` when the terminal or HTTP client cannot be set up.
///
/// Details:
/// - Rendering happens after every handled message.
/// - The terminal is restored even when drawing fails.
pub async fn run(settings: Settings) -> Result<()> {
    let client = MealDbClient::new(&settings)?;
    tracing::info!(
        base = client.base_url(),
        suggest = settings.suggest_mode.as_config_key(),
        "starting recipe finder"
    );
    let mut app = AppState::new(
        Arc::new(settings.catalog()),
        settings.suggest_mode,
        settings.default_mood.as_deref(),
    );
    let mut channels = Channels::new(client, &app, &settings);

    setup_terminal()?;
    let outcome = drive(&mut app, &mut channels).await;
    channels
        .event_thread_cancelled
        .store(true, Ordering::Relaxed);
    if let Err(e) = restore_terminal() {
        tracing::warn!(error = %e, "failed to restore terminal");
    }
    tracing::info!("recipe finder exited");
    outcome
}

/// Main loop: draw, then wait for the next message.
async fn drive(app: &mut AppState, channels: &mut Channels) -> Result<()> {
    let mut terminal = Terminal::new(CrosstermBackend::new(std::io::stdout()))?;
    spawn_event_thread(
        channels.event_tx.clone(),
        Arc::clone(&channels.event_thread_cancelled),
    );
    loop {
        terminal.draw(|f| ui(f, app))?;
        select! {
            Some(ev) = channels.event_rx.recv() => {
                if crate::events::handle_event(
                    ev,
                    app,
                    &channels.query_tx,
                    &channels.details_req_tx,
                ) {
                    break;
                }
            }
            Some(event) = channels.search_rx.recv() => {
                app.apply_search_event(event);
            }
            Some((id, detail)) = channels.details_res_rx.recv() => {
                app.apply_detail(&id, detail);
            }
            else => break,
        }
    }
    Ok(())
}
