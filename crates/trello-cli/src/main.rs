mod cli;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use std::sync::Arc;
use trello_client::TrelloClient;
use trello_core::{logging, AppConfig};
use trello_domain::{BoardSnapshot, BoardState};
use trello_persistence::{JsonSnapshotStore, SnapshotStore};
use trello_tui::events::EventHandler;
use trello_tui::{App, Poller, StateStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Some(Commands::Completions { shell }) = &cli.command {
        clap_complete::generate(*shell, &mut Cli::command(), "trello-tui", &mut std::io::stdout());
        return Ok(());
    }

    logging::init_tracing(cli.log_file.as_deref(), cli.verbose)?;

    let settings = AppConfig::load().merge(cli.config_overrides()).validate()?;
    tracing::info!(
        "Showing board {:?}, refreshing every {:?}",
        settings.board,
        settings.refresh_interval
    );

    let snapshot_store = settings.snapshot_path.as_ref().map(JsonSnapshotStore::new);
    let seed = match &snapshot_store {
        Some(store) => restore(store).await,
        None => None,
    };

    let events = EventHandler::new();
    let store = Arc::new(
        StateStore::new(BoardState::seeded(settings.board.clone(), seed))
            .with_on_change(events.redraw_notifier())
            .with_span(tracing::info_span!("state-store", board = %settings.board)),
    );

    let client = TrelloClient::new(settings.credentials.clone(), settings.fetch_timeout)?
        .with_span(tracing::info_span!("trello-client", board = %settings.board));
    let poller = Poller::new(
        Arc::new(client),
        Arc::clone(&store),
        settings.board.clone(),
        settings.refresh_interval,
        settings.fetch_timeout,
    )
    .with_span(tracing::info_span!("poller", board = %settings.board))
    .spawn();

    let mut app = App::new(Arc::clone(&store));
    let result = app.run(events).await;

    poller.stop();
    poller.join().await;

    if let Some(snapshot_store) = &snapshot_store {
        if let Some(snapshot) = store.read().snapshot() {
            save(snapshot_store, &snapshot).await;
        }
    }

    result
}

async fn restore(store: &JsonSnapshotStore) -> Option<BoardSnapshot> {
    match store.load().await {
        Ok(snapshot) => snapshot,
        Err(e) => {
            tracing::warn!("Ignoring snapshot {}: {}", store.path().display(), e);
            None
        }
    }
}

async fn save(store: &JsonSnapshotStore, snapshot: &BoardSnapshot) {
    match store.save(snapshot).await {
        Ok(()) => tracing::info!("Saved board snapshot to {}", store.path().display()),
        Err(e) => {
            tracing::error!("Failed to save snapshot to {}: {}", store.path().display(), e);
            eprintln!("Warning: could not save the board snapshot: {e}");
        }
    }
}
