use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;

use crate::catalog::{CatalogClient, CatalogError, Creature};
use crate::clipboard::ClipboardHandler;
use crate::config::Config;
use crate::ui::debounce::Debouncer;
use crate::ui::events::AppEvent;
use crate::ui::mvi::Reducer;
use crate::ui::search::{SearchIntent, SearchReducer, SearchViewState};

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// The search controller: owns the input buffer, the debounce timer, the
/// view state and the lookup generation counter. Only the UI thread calls
/// into it; spawned lookups report back through the event channel.
pub struct App {
    should_quit: bool,
    /// Current contents of the search box.
    search_term: String,
    /// Search panel state (MVI pattern).
    search_view: SearchViewState,
    debouncer: Debouncer,
    /// Bumped on every issued lookup and on clear. Completions carrying
    /// any other value are dropped, so only the most recently issued
    /// request can update the view.
    lookup_generation: u64,
    client: Arc<CatalogClient>,
    runtime: Handle,
    events_tx: Sender<AppEvent>,
    /// Status line feedback, e.g. after a clipboard copy.
    notice: Option<String>,
}

impl App {
    pub fn new(
        config: &Config,
        client: Arc<CatalogClient>,
        runtime: Handle,
        events_tx: Sender<AppEvent>,
    ) -> Self {
        let debouncer = Debouncer::new(
            Duration::from_millis(config.lookup.debounce_ms),
            runtime.clone(),
            events_tx.clone(),
        );
        Self {
            should_quit: false,
            search_term: String::new(),
            search_view: SearchViewState::default(),
            debouncer,
            lookup_generation: 0,
            client,
            runtime,
            events_tx,
            notice: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn search_view(&self) -> &SearchViewState {
        &self.search_view
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn on_tick(&mut self) {}

    pub fn push_char(&mut self, ch: char) {
        self.search_term.push(ch);
        self.on_term_changed();
    }

    pub fn pop_char(&mut self) {
        self.search_term.pop();
        self.on_term_changed();
    }

    pub fn clear_term(&mut self) {
        self.search_term.clear();
        self.on_term_changed();
    }

    fn on_term_changed(&mut self) {
        self.notice = None;
        if self.search_term.trim().is_empty() {
            // Empty input never hits the network. The generation bump
            // orphans any lookup still in flight.
            self.debouncer.cancel();
            self.lookup_generation += 1;
            dispatch_mvi!(self, search_view, SearchReducer, SearchIntent::Cleared);
        } else {
            self.debouncer.arm(self.search_term.clone());
        }
    }

    /// The quiet interval elapsed for `term`.
    ///
    /// The expiry event may have been queued just before another keystroke
    /// was processed; if the input has moved on since, the expiry is stale
    /// and no lookup is issued.
    pub fn on_search_ready(&mut self, term: String) {
        if term != self.search_term {
            return;
        }

        self.lookup_generation += 1;
        let generation = self.lookup_generation;
        dispatch_mvi!(
            self,
            search_view,
            SearchReducer,
            SearchIntent::LookupStarted { term: term.clone() }
        );

        let client = Arc::clone(&self.client);
        let tx = self.events_tx.clone();
        self.runtime.spawn(async move {
            let result = client.lookup(&term).await;
            let _ = tx.send(AppEvent::LookupDone { generation, result });
        });
    }

    pub fn on_lookup_done(&mut self, generation: u64, result: Result<Creature, CatalogError>) {
        if generation != self.lookup_generation {
            tracing::debug!(
                generation,
                current = self.lookup_generation,
                "dropping stale lookup completion"
            );
            return;
        }

        match result {
            Ok(creature) => {
                dispatch_mvi!(
                    self,
                    search_view,
                    SearchReducer,
                    SearchIntent::LookupSucceeded { creature }
                );
            }
            Err(err) => {
                tracing::warn!(error = %err, "lookup failed");
                dispatch_mvi!(
                    self,
                    search_view,
                    SearchReducer,
                    SearchIntent::LookupFailed {
                        message: err.user_message()
                    }
                );
            }
        }
    }

    /// Copy the current result's sprite URL to the system clipboard.
    pub fn copy_image_url(&mut self) {
        let SearchViewState::Result { creature } = &self.search_view else {
            return;
        };
        if creature.image_url.is_empty() {
            self.notice = Some("No sprite URL to copy".to_string());
            return;
        }

        self.notice = Some(match copy_to_clipboard(&creature.image_url) {
            Ok(()) => "Sprite URL copied".to_string(),
            Err(err) => format!("Clipboard error: {}", err),
        });
    }
}

fn copy_to_clipboard(text: &str) -> Result<(), String> {
    let mut clipboard = ClipboardHandler::new().map_err(|e| e.to_string())?;
    clipboard.set_text(text)
}
