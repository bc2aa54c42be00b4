use crate::events::{self, Event, EventHandler};
use crate::keybindings::{action_for, KeybindingAction};
use crate::state::StateStore;
use crate::ui::{self, Viewport};
use crossterm::{
    event::KeyEvent,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;
use std::sync::Arc;
use trello_domain::BoardState;

pub struct App {
    store: Arc<StateStore>,
    should_quit: bool,
    viewport: Viewport,
}

impl App {
    pub fn new(store: Arc<StateStore>) -> Self {
        Self {
            store,
            should_quit: false,
            viewport: Viewport::default(),
        }
    }

    pub fn store(&self) -> &Arc<StateStore> {
        &self.store
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if events::should_quit(&key) {
            self.quit();
            return;
        }
        // the popup check happens under the store's lock so a concurrent
        // refresh cannot slip in between
        self.store.try_update(|state| {
            action_for(&key, state.is_card_popup_open()).map(|action| apply(state, action))
        });
    }

    /// Draw the current state, then commit the scroll windows that were drawn.
    pub fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        let state = self.store.read();
        let mut viewport = self.viewport;
        terminal.draw(|frame| viewport = ui::render(&state, frame))?;
        self.viewport = viewport;

        self.store.try_update(|state| {
            state.settle_windows(viewport.lists_per_page, viewport.cards_per_page)
        });
        Ok(())
    }

    pub async fn run(&mut self, mut events: EventHandler) -> anyhow::Result<()> {
        let mut terminal = setup_terminal()?;
        let result = self.event_loop(&mut terminal, &mut events).await;
        events.stop();
        restore_terminal(&mut terminal)?;
        result
    }

    async fn event_loop<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        events: &mut EventHandler,
    ) -> anyhow::Result<()> {
        self.draw(terminal)?;

        while !self.should_quit {
            let Some(event) = events.next().await else {
                break;
            };
            match event {
                Event::Key(key) => {
                    self.handle_key(key);
                    if !self.should_quit {
                        self.draw(terminal)?;
                    }
                }
                Event::Redraw | Event::Resize => self.draw(terminal)?,
                Event::Tick => {}
            }
        }
        Ok(())
    }
}

fn apply(state: &BoardState, action: KeybindingAction) -> BoardState {
    match action {
        KeybindingAction::NavigateLeft => state.move_left(),
        KeybindingAction::NavigateRight => state.move_right(),
        KeybindingAction::NavigateUp => state.move_up(),
        KeybindingAction::NavigateDown => state.move_down(),
        KeybindingAction::OpenCard => state.open_card_popup(),
        KeybindingAction::CloseCard => state.close_card_popup(),
    }
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, io::Error> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn restore_terminal(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<(), io::Error> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
