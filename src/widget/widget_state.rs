//! Autocomplete widget: input, focus and selection coordination
//!
//! All state lives here and is only mutated on the widget's own event queue.
//! Timers and fetches run as tokio tasks that post [`WidgetEvent`]s back;
//! the owner applies them with [`Autocomplete::pump`] or
//! [`Autocomplete::process_next`]. Once unmounted the queue is closed, so
//! anything still in flight settles into nothing.

use std::sync::Arc;
use std::time::Duration;

use ratatui::text::Line;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::config::AutocompleteConfig;
use crate::debouncer::{Debouncer, Ticket};
use crate::query::{FetchResult, QueryState, RequestId, Settlement, SuggestionSource};
use crate::suggestions::{Entry, ListState, Suggestion, SuggestionSet};

/// How long the list stays open after the input loses focus, so a pointer
/// selection on the list can still land
pub const BLUR_GRACE: Duration = Duration::from_millis(150);

/// Messages posted to the widget's event queue
pub(super) enum WidgetEvent<V> {
    DebounceFired { ticket: Ticket, query: String },
    BlurElapsed { ticket: Ticket },
    FetchSettled { request_id: RequestId, result: FetchResult<V> },
}

/// Reported to the selection callback
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectEvent<V = ()> {
    /// A suggestion was picked
    Selected(Suggestion<V>),
    /// The input was cleared; reported as a selection of ""
    Cleared,
}

impl<V> SelectEvent<V> {
    /// Selected label, or "" for a clear
    pub fn text(&self) -> &str {
        match self {
            SelectEvent::Selected(suggestion) => &suggestion.label,
            SelectEvent::Cleared => "",
        }
    }

    pub fn value(&self) -> Option<&V> {
        match self {
            SelectEvent::Selected(suggestion) => suggestion.value.as_ref(),
            SelectEvent::Cleared => None,
        }
    }
}

pub(super) type SelectCallback<V> = Box<dyn FnMut(&SelectEvent<V>)>;
pub(super) type RenderSuggestion<V> = Box<dyn Fn(&Suggestion<V>) -> Line<'static>>;

pub struct Autocomplete<S: SuggestionSource> {
    pub(super) config: AutocompleteConfig,
    pub(super) source: Arc<S>,
    pub(super) query: QueryState,
    pub(super) list: ListState<S::Value>,
    pub(super) focused: bool,
    debouncer: Debouncer<WidgetEvent<S::Value>>,
    blur_timer: Debouncer<WidgetEvent<S::Value>>,
    tx: UnboundedSender<WidgetEvent<S::Value>>,
    rx: UnboundedReceiver<WidgetEvent<S::Value>>,
    on_select: Option<SelectCallback<S::Value>>,
    pub(super) render_suggestion: Option<RenderSuggestion<S::Value>>,
    mounted: bool,
}

impl<S: SuggestionSource> Autocomplete<S> {
    pub fn new(source: S, config: AutocompleteConfig) -> Self {
        Self::with_shared_source(Arc::new(source), config)
    }

    /// Build a widget over a source that other widgets may also use
    pub fn with_shared_source(source: Arc<S>, config: AutocompleteConfig) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            query: QueryState::new(config.default_value.clone(), config.min_query_length),
            list: ListState::new(),
            focused: false,
            debouncer: Debouncer::new(config.debounce_delay(), tx.clone()),
            blur_timer: Debouncer::new(BLUR_GRACE, tx.clone()),
            tx,
            rx,
            on_select: None,
            render_suggestion: None,
            mounted: true,
            config,
            source,
        }
    }

    /// Callback invoked synchronously on selection and clear
    pub fn on_select(mut self, callback: impl FnMut(&SelectEvent<S::Value>) + 'static) -> Self {
        self.on_select = Some(Box::new(callback));
        self
    }

    /// Replace the default highlighted rendering of suggestion rows
    pub fn render_suggestion(
        mut self,
        render: impl Fn(&Suggestion<S::Value>) -> Line<'static> + 'static,
    ) -> Self {
        self.render_suggestion = Some(Box::new(render));
        self
    }

    /// Arm the initial lookup for a non-empty `default_value`
    ///
    /// Must be called from within a tokio runtime.
    pub fn mount(&mut self) {
        if !self.mounted || self.query.text().is_empty() {
            return;
        }
        if self.query.qualifies(self.query.text()) {
            self.schedule_lookup();
        }
    }

    /// Tear down: cancel both timers and close the event queue
    ///
    /// Fetches already running are not aborted, but their results are
    /// discarded. Called automatically on drop.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        self.debouncer.cancel();
        self.blur_timer.cancel();
        self.rx.close();
        log::debug!("Autocomplete unmounted");
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn config(&self) -> &AutocompleteConfig {
        &self.config
    }

    pub fn source(&self) -> &Arc<S> {
        &self.source
    }

    pub fn query(&self) -> &str {
        self.query.text()
    }

    pub fn suggestions(&self) -> &SuggestionSet<S::Value> {
        self.list.suggestions()
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.list.highlighted()
    }

    pub fn is_open(&self) -> bool {
        self.list.is_open()
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn is_loading(&self) -> bool {
        self.query.is_loading()
    }

    /// A debounced lookup is waiting for its quiet period
    pub fn is_lookup_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// A blur-triggered close is waiting for its grace period
    pub fn is_close_pending(&self) -> bool {
        self.blur_timer.is_pending()
    }

    /// User edit of the input text
    pub fn set_query(&mut self, text: impl Into<String>) {
        if !self.mounted {
            return;
        }
        let text = text.into();
        self.list.reset_highlight();
        if text == self.query.text() {
            return;
        }
        if self.query.on_query_change(text) {
            self.schedule_lookup();
        }
    }

    /// Input gained focus: show the list without fetching
    pub fn focus(&mut self) {
        if !self.mounted {
            return;
        }
        self.focused = true;
        self.blur_timer.cancel();
        self.list.open();
    }

    /// Input lost focus: close the list once the grace period passes
    pub fn blur(&mut self) {
        if !self.mounted {
            return;
        }
        self.focused = false;
        if self.list.is_open() {
            self.blur_timer.schedule(|ticket| WidgetEvent::BlurElapsed { ticket });
        }
    }

    /// Commit the row at `row` of the open list, as a pointer press would
    ///
    /// Takes precedence over a pending blur close. Picking the "no results"
    /// row empties the input without reporting a selection. Returns false if
    /// the list is closed or `row` is out of range.
    pub fn commit_selection(&mut self, row: usize) -> bool {
        if !self.mounted || !self.list.is_open() {
            return false;
        }

        let picked = match self.list.suggestions().entry(row) {
            Some(Entry::Item(suggestion)) => Some(suggestion.clone()),
            Some(Entry::NoResults) => None,
            None => return false,
        };

        match picked {
            Some(suggestion) => self.select(suggestion),
            None => {
                log::debug!("Ignoring selection of the no-results row");
                self.reset_to_empty();
            }
        }
        true
    }

    /// Empty the input and report it as a selection of ""
    ///
    /// Performs no fetch.
    pub fn clear(&mut self) {
        if !self.mounted {
            return;
        }
        self.reset_to_empty();
        self.emit(SelectEvent::Cleared);
    }

    /// Apply every event that is already queued, without waiting
    ///
    /// Returns the number of events applied.
    pub fn pump(&mut self) -> usize {
        let mut applied = 0;
        while self.mounted {
            match self.rx.try_recv() {
                Ok(event) => {
                    self.handle_event(event);
                    applied += 1;
                }
                Err(_) => break,
            }
        }
        applied
    }

    /// Wait for the next event and apply it
    ///
    /// Returns false once the widget is unmounted.
    pub async fn process_next(&mut self) -> bool {
        if !self.mounted {
            return false;
        }
        match self.rx.recv().await {
            Some(event) if self.mounted => {
                self.handle_event(event);
                true
            }
            _ => false,
        }
    }

    pub(super) fn select(&mut self, suggestion: Suggestion<S::Value>) {
        self.debouncer.cancel();
        self.blur_timer.cancel();

        let text = if self.config.clear_on_select {
            String::new()
        } else {
            suggestion.label.clone()
        };
        self.query.set_text(text);
        self.list.close();
        self.list.reset_highlight();

        self.emit(SelectEvent::Selected(suggestion));
    }

    fn reset_to_empty(&mut self) {
        self.debouncer.cancel();
        self.blur_timer.cancel();
        self.query.set_text("");
        self.query.reset();
        self.list.clear();
    }

    fn emit(&mut self, event: SelectEvent<S::Value>) {
        if let Some(callback) = self.on_select.as_mut() {
            callback(&event);
        }
    }

    fn schedule_lookup(&mut self) {
        let query = self.query.text().to_string();
        self.debouncer
            .schedule(move |ticket| WidgetEvent::DebounceFired { ticket, query });
    }

    fn handle_event(&mut self, event: WidgetEvent<S::Value>) {
        match event {
            WidgetEvent::DebounceFired { ticket, query } => {
                if !self.debouncer.accept(ticket) {
                    log::debug!("Dropping superseded debounce for {:?}", query);
                    return;
                }
                if let Some(request_id) = self.query.begin_fetch(&query) {
                    self.dispatch(request_id, &query);
                }
            }
            WidgetEvent::BlurElapsed { ticket } => {
                if self.blur_timer.accept(ticket) {
                    self.list.close();
                }
            }
            WidgetEvent::FetchSettled { request_id, result } => {
                if let Settlement::Resolved(items) = self.query.settle(request_id, result) {
                    self.list.replace(SuggestionSet::from_results(items));
                    if self.list.suggestions().is_no_results() {
                        log::debug!("No suggestions for {:?}", self.query.last_accepted());
                    }
                }
            }
        }
    }

    fn dispatch(&self, request_id: RequestId, query: &str) {
        let lookup = self.source.fetch(query);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = lookup.await;
            // Queue closed after unmount: the result is dropped
            let _ = tx.send(WidgetEvent::FetchSettled { request_id, result });
        });
    }
}

impl<S: SuggestionSource> Drop for Autocomplete<S> {
    fn drop(&mut self) {
        self.unmount();
    }
}

#[cfg(test)]
#[path = "widget_state_tests.rs"]
mod widget_state_tests;
