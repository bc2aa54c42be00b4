use crate::state::store::StateStore;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::Instrument;
use trello_core::config::MIN_REFRESH_INTERVAL;
use trello_core::TrelloError;
use trello_domain::BoardFetcher;

/// Periodically re-fetches the board and drives the lifecycle transitions.
///
/// Only one fetch is ever in flight: the next one is scheduled
/// `refresh_interval` after the previous one completed, so a slow service
/// backs the poller off instead of piling up requests.
pub struct Poller {
    fetcher: Arc<dyn BoardFetcher>,
    store: Arc<StateStore>,
    board_name: String,
    refresh_interval: Duration,
    fetch_timeout: Duration,
    span: tracing::Span,
}

/// Handle to a spawned poller task.
pub struct PollerHandle {
    shutdown_tx: mpsc::UnboundedSender<()>,
    task: JoinHandle<()>,
}

impl PollerHandle {
    /// Ask the poller to stop. An in-flight fetch is abandoned without writing.
    pub fn stop(&self) {
        let _ = self.shutdown_tx.send(());
    }

    pub async fn join(self) {
        if let Err(e) = self.task.await {
            tracing::error!("Poller task failed: {}", e);
        }
    }
}

impl Poller {
    pub fn new(
        fetcher: Arc<dyn BoardFetcher>,
        store: Arc<StateStore>,
        board_name: impl Into<String>,
        refresh_interval: Duration,
        fetch_timeout: Duration,
    ) -> Self {
        let board_name = board_name.into();
        let span = tracing::info_span!("poller", board = %board_name);
        if refresh_interval < MIN_REFRESH_INTERVAL {
            tracing::warn!(
                "Refresh interval {:?} is below the minimum, using {:?}",
                refresh_interval,
                MIN_REFRESH_INTERVAL
            );
        }
        Self {
            fetcher,
            store,
            board_name,
            refresh_interval: refresh_interval.max(MIN_REFRESH_INTERVAL),
            fetch_timeout,
            span,
        }
    }

    pub fn with_span(mut self, span: tracing::Span) -> Self {
        self.span = span;
        self
    }

    pub fn refresh_interval(&self) -> Duration {
        self.refresh_interval
    }

    pub fn spawn(self) -> PollerHandle {
        let (shutdown_tx, shutdown_rx) = mpsc::unbounded_channel();
        let span = self.span.clone();
        let task = tokio::spawn(self.run(shutdown_rx).instrument(span));
        PollerHandle { shutdown_tx, task }
    }

    /// Poll until a shutdown message arrives or every sender is dropped.
    pub async fn run(self, mut shutdown_rx: mpsc::UnboundedReceiver<()>) {
        tracing::debug!("Refresh loop started");
        loop {
            let outcome = tokio::select! {
                biased;
                _ = shutdown_rx.recv() => break,
                outcome = tokio::time::timeout(
                    self.fetch_timeout,
                    self.fetcher.fetch(&self.board_name),
                ) => outcome,
            };

            match outcome.unwrap_or(Err(TrelloError::Timeout(self.fetch_timeout))) {
                Ok(board) => {
                    tracing::debug!("Fetched board with {} lists", board.lists_len());
                    self.store.update(|state| state.online(board));
                }
                Err(e) => {
                    tracing::warn!("Could not refresh board: {}", e);
                    self.store.update(|state| state.offline(&e));
                }
            }

            tokio::select! {
                biased;
                _ = shutdown_rx.recv() => break,
                _ = tokio::time::sleep(self.refresh_interval) => {}
            }
        }
        tracing::debug!("Refresh loop stopped");
    }
}
