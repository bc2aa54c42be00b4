use parking_lot::RwLock;
use std::sync::Arc;
use trello_domain::BoardState;

type ChangeCallback = Box<dyn Fn() + Send + Sync>;

struct Published {
    state: Arc<BoardState>,
    version: u64,
}

/// Single-slot holder of the current [`BoardState`].
///
/// Writers replace the whole state under an exclusive lock; readers get an
/// `Arc` to an immutable snapshot and never observe a half-applied
/// transition. The change callback runs after the lock is released, once per
/// committed write.
pub struct StateStore {
    slot: RwLock<Published>,
    on_change: ChangeCallback,
    span: tracing::Span,
}

impl StateStore {
    pub fn new(initial: BoardState) -> Self {
        let span = tracing::info_span!("state-store", board = %initial.board_name());
        Self {
            slot: RwLock::new(Published {
                state: Arc::new(initial),
                version: 0,
            }),
            on_change: Box::new(|| {}),
            span,
        }
    }

    pub fn with_on_change(mut self, on_change: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_change = Box::new(on_change);
        self
    }

    pub fn with_span(mut self, span: tracing::Span) -> Self {
        self.span = span;
        self
    }

    /// Current snapshot.
    pub fn read(&self) -> Arc<BoardState> {
        Arc::clone(&self.slot.read().state)
    }

    /// Number of committed writes so far.
    pub fn version(&self) -> u64 {
        self.slot.read().version
    }

    /// Replace the state wholesale.
    pub fn write(&self, state: BoardState) {
        self.commit(|_| Some(state));
    }

    /// Apply a transition to the current state atomically.
    pub fn update(&self, transition: impl FnOnce(&BoardState) -> BoardState) {
        self.commit(|current| Some(transition(current)));
    }

    /// Like [`StateStore::update`], but nothing is written (and nobody is
    /// notified) when the transition returns `None`.
    pub fn try_update(&self, transition: impl FnOnce(&BoardState) -> Option<BoardState>) -> bool {
        self.commit(transition)
    }

    fn commit(&self, transition: impl FnOnce(&BoardState) -> Option<BoardState>) -> bool {
        {
            let mut slot = self.slot.write();
            let Some(next) = transition(&slot.state) else {
                return false;
            };
            if slot.state.kind() != next.kind() {
                let _enter = self.span.enter();
                tracing::info!("Board state {} -> {}", slot.state.kind(), next.kind());
            }
            slot.state = Arc::new(next);
            slot.version += 1;
        }
        (self.on_change)();
        true
    }
}
