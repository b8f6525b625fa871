//! Background workers: ingredient search (with fallback) and recipe detail lookups.

use std::sync::Arc;
use std::time::Duration;

use tokio::{select, sync::mpsc, task::JoinHandle};
use tracing::{debug, info, warn};

use crate::app::session::SearchSession;
use crate::config::Settings;
use crate::logic::{Catalog, QueryPlan, SearchStatus, plan_after_empty, plan_query};
use crate::sources::{self, RecipeSource, SearchBatch};
use crate::state::{QueryInput, RecipeDetail, SearchEvent};

/// Knobs the search worker reads from settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchTuning {
    /// Wait before the fallback retry.
    pub fallback_delay: Duration,
    /// Parallel lookups per search.
    pub lookup_concurrency: usize,
}

impl From<&Settings> for SearchTuning {
    fn from(s: &Settings) -> Self {
        Self {
            fallback_delay: s.fallback_delay(),
            lookup_concurrency: s.lookup_concurrency,
        }
    }
}

/// One fetch to run: the original term or its fallback.
#[derive(Clone, Debug)]
struct FetchJob {
    /// Query id the fetch belongs to.
    id: u64,
    /// Term sent to the API.
    term: String,
    /// Mood captured when the query was submitted.
    mood: Option<String>,
    /// Whether this is already the fallback hop.
    fallback: bool,
}

/// A finished fetch reported back to the worker loop.
struct Completion {
    /// The job that ran.
    job: FetchJob,
    /// Its result.
    result: sources::Result<SearchBatch>,
}

/// Shared handles every fetch needs.
struct FetchContext<S> {
    /// Recipe source.
    source: Arc<S>,
    /// Planner tables.
    catalog: Arc<Catalog>,
    /// Settings knobs.
    tuning: SearchTuning,
    /// Events for the UI.
    event_tx: mpsc::UnboundedSender<SearchEvent>,
    /// Completions back into the worker loop.
    done_tx: mpsc::UnboundedSender<Completion>,
}

impl<S> Clone for FetchContext<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            catalog: Arc::clone(&self.catalog),
            tuning: self.tuning,
            event_tx: self.event_tx.clone(),
            done_tx: self.done_tx.clone(),
        }
    }
}

/// What: Run one fetch and report it to the worker loop.
///
/// Details:
/// - Callers announce `Started`: the worker loop before spawning, the fallback timer when it fires.
async fn run_fetch<S: RecipeSource>(ctx: FetchContext<S>, job: FetchJob) {
    let result = sources::run_search(
        ctx.source.as_ref(),
        &job.term,
        job.mood.as_deref(),
        &ctx.catalog.moods,
        ctx.tuning.lookup_concurrency,
    )
    .await;
    let _ = ctx.done_tx.send(Completion { job, result });
}

/// What: Turn a finished fetch into UI events, scheduling the fallback when planned.
///
/// Inputs:
/// - `ctx`: Shared fetch handles.
/// - `session`: The worker's search session.
/// - `done`: The completion to handle.
fn handle_completion<S: RecipeSource>(
    ctx: &FetchContext<S>,
    session: &mut SearchSession,
    done: Completion,
) {
    let Completion { job, result } = done;
    let event = match result {
        Err(e) => {
            warn!(term = %job.term, error = %e, "recipe search failed");
            SearchEvent::Finished {
                id: job.id,
                recipes: Vec::new(),
                status: SearchStatus::Failed,
            }
        }
        Ok(SearchBatch::Found {
            recipes,
            used_fallback_all,
        }) => {
            info!(
                term = %job.term,
                count = recipes.len(),
                fallback = job.fallback,
                "recipes found"
            );
            SearchEvent::Finished {
                id: job.id,
                recipes,
                status: SearchStatus::found(&job.term, job.mood.as_deref(), used_fallback_all),
            }
        }
        Ok(SearchBatch::Empty) => {
            match plan_after_empty(
                &job.term,
                job.fallback,
                &ctx.catalog,
                ctx.tuning.fallback_delay,
            ) {
                QueryPlan::RetryAfterDelay { delay, term } => {
                    if !session.is_current(job.id) {
                        debug!(
                            id = job.id,
                            term = %job.term,
                            "dropping empty result of a superseded query"
                        );
                        return;
                    }
                    info!(from = %job.term, to = %term, "no recipes, scheduling fallback");
                    let notice = SearchEvent::Notice {
                        id: job.id,
                        status: SearchStatus::TryingFallback {
                            query: job.term.clone(),
                            next: term.clone(),
                        },
                    };
                    let retry = FetchJob {
                        id: job.id,
                        term,
                        mood: job.mood,
                        fallback: true,
                    };
                    let _ = ctx.event_tx.send(notice);
                    let fetch_ctx = ctx.clone();
                    session.schedule_fallback(job.id, delay, async move {
                        let _ = fetch_ctx.event_tx.send(SearchEvent::Started { id: retry.id });
                        run_fetch(fetch_ctx, retry).await;
                    });
                    return;
                }
                _ => {
                    info!(term = %job.term, fallback = job.fallback, "no recipes found");
                    SearchEvent::Finished {
                        id: job.id,
                        recipes: Vec::new(),
                        status: SearchStatus::NoResults { query: job.term },
                    }
                }
            }
        }
    };
    let _ = ctx.event_tx.send(event);
}

/// What: Spawn the background worker that owns the search session.
///
/// Inputs:
/// - `source`: Recipe source shared with other workers.
/// - `catalog`: Planner tables.
/// - `tuning`: Fallback delay and lookup concurrency.
/// - `query_rx`: Queries submitted by the UI.
/// - `event_tx`: Progress and outcomes for the UI.
///
/// Output:
/// - Handle of the worker task; it ends when `query_rx` closes.
///
/// Details:
/// - Each query starts a new session, which aborts any pending fallback retry.
/// - Fetches run concurrently; whichever finishes last is what the UI shows.
/// - Only the active query may schedule a fallback, and a fallback never schedules another.
pub fn spawn_search_worker<S: RecipeSource>(
    source: Arc<S>,
    catalog: Arc<Catalog>,
    tuning: SearchTuning,
    mut query_rx: mpsc::UnboundedReceiver<QueryInput>,
    event_tx: mpsc::UnboundedSender<SearchEvent>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let (done_tx, mut done_rx) = mpsc::unbounded_channel::<Completion>();
        let ctx = FetchContext {
            source,
            catalog,
            tuning,
            event_tx,
            done_tx,
        };
        let mut session = SearchSession::new();
        loop {
            select! {
                maybe = query_rx.recv() => {
                    let Some(input) = maybe else { break; };
                    session.begin(input.id);
                    match plan_query(&input.text, false) {
                        QueryPlan::Fetch { term, fallback } => {
                            debug!(
                                id = input.id,
                                term = %term,
                                mood = ?input.mood,
                                "search requested"
                            );
                            let job = FetchJob { id: input.id, term, mood: input.mood, fallback };
                            let _ = ctx.event_tx.send(SearchEvent::Started { id: job.id });
                            tokio::spawn(run_fetch(ctx.clone(), job));
                        }
                        _ => {
                            let _ = ctx.event_tx.send(SearchEvent::Cleared { id: input.id });
                        }
                    }
                }
                Some(done) = done_rx.recv() => {
                    handle_completion(&ctx, &mut session, done);
                }
            }
        }
        debug!("search worker stopped");
    })
}

/// What: Spawn the worker serving the detail view.
///
/// Inputs:
/// - `source`: Recipe source.
/// - `req_rx`: Meal ids to load.
/// - `res_tx`: `(id, detail)` results; `None` when missing or on error.
///
/// Output:
/// - Handle of the worker task; it ends when `req_rx` closes.
pub fn spawn_details_worker<S: RecipeSource>(
    source: Arc<S>,
    mut req_rx: mpsc::UnboundedReceiver<String>,
    res_tx: mpsc::UnboundedSender<(String, Option<RecipeDetail>)>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(id) = req_rx.recv().await {
            let detail = match source.lookup(&id).await {
                Ok(d) => d,
                Err(e) => {
                    warn!(id = %id, error = %e, "recipe lookup failed");
                    None
                }
            };
            if res_tx.send((id, detail)).is_err() {
                break;
            }
        }
    })
}
