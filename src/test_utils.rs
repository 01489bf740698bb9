#[cfg(test)]
pub mod test_helpers {
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use futures::future::BoxFuture;

    use crate::config::AutocompleteConfig;
    use crate::query::{FetchError, FetchResult, SuggestionSource};
    use crate::suggestions::Suggestion;
    use crate::widget::{Autocomplete, SelectEvent};

    pub const FRUITS: &[&str] = &["Apple", "Banana", "Cherry"];

    #[derive(Clone)]
    struct Scripted {
        result: Result<Vec<String>, FetchError>,
        delay: Duration,
    }

    /// Scripted source that records every lookup it receives
    ///
    /// Clones share the call log, so a test keeps one clone and hands the
    /// other to the widget.
    #[derive(Clone)]
    pub struct StubSource {
        calls: Arc<Mutex<Vec<String>>>,
        fallback: Scripted,
        scripted: Arc<Mutex<HashMap<String, Scripted>>>,
    }

    impl StubSource {
        /// Answer every query with `labels`, immediately
        pub fn returning(labels: &[&str]) -> Self {
            Self {
                calls: Arc::new(Mutex::new(Vec::new())),
                fallback: Scripted {
                    result: Ok(labels.iter().map(|l| l.to_string()).collect()),
                    delay: Duration::ZERO,
                },
                scripted: Arc::new(Mutex::new(HashMap::new())),
            }
        }

        /// Answer `query` with `labels` after `delay_ms`
        pub fn with_answer(self, query: &str, labels: &[&str], delay_ms: u64) -> Self {
            self.script(
                query,
                Ok(labels.iter().map(|l| l.to_string()).collect()),
                delay_ms,
            )
        }

        /// Fail lookups of `query` with `error`
        pub fn with_failure(self, query: &str, error: FetchError) -> Self {
            self.script(query, Err(error), 0)
        }

        fn script(self, query: &str, result: Result<Vec<String>, FetchError>, delay_ms: u64) -> Self {
            self.scripted.lock().unwrap().insert(
                query.to_string(),
                Scripted {
                    result,
                    delay: Duration::from_millis(delay_ms),
                },
            );
            self
        }

        pub fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }

        pub fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    impl SuggestionSource for StubSource {
        type Value = ();

        fn fetch(&self, query: &str) -> BoxFuture<'static, FetchResult<()>> {
            self.calls.lock().unwrap().push(query.to_string());
            let answer = self
                .scripted
                .lock()
                .unwrap()
                .get(query)
                .cloned()
                .unwrap_or_else(|| self.fallback.clone());

            Box::pin(async move {
                if !answer.delay.is_zero() {
                    tokio::time::sleep(answer.delay).await;
                }
                answer
                    .result
                    .map(|labels| labels.into_iter().map(Suggestion::new).collect())
            })
        }
    }

    pub type Selections = Rc<RefCell<Vec<String>>>;

    /// Widget over `source` whose selections are collected into the returned log
    pub fn widget_with_log(
        source: StubSource,
        config: AutocompleteConfig,
    ) -> (Autocomplete<StubSource>, Selections) {
        let selections: Selections = Rc::new(RefCell::new(Vec::new()));
        let log = Rc::clone(&selections);
        let widget = Autocomplete::new(source, config)
            .on_select(move |event: &SelectEvent| log.borrow_mut().push(event.text().to_string()));
        (widget, selections)
    }

    /// Zero-delay config, matching how interaction tests drive the widget
    pub fn instant_config() -> AutocompleteConfig {
        AutocompleteConfig::default().with_debounce_delay_ms(0)
    }

    /// Drive the widget until no lookup is pending or in flight
    pub async fn settle<S: SuggestionSource>(widget: &mut Autocomplete<S>) {
        while widget.is_lookup_pending() || widget.is_loading() {
            let applied = tokio::time::timeout(Duration::from_secs(60), widget.process_next())
                .await
                .expect("widget event did not arrive");
            if !applied {
                break;
            }
        }
    }

    /// True if no event arrives within `ms`
    pub async fn stays_quiet<S: SuggestionSource>(widget: &mut Autocomplete<S>, ms: u64) -> bool {
        tokio::time::timeout(Duration::from_millis(ms), widget.process_next())
            .await
            .is_err()
    }

    /// Focused widget showing `labels` for the query "a"
    pub async fn open_with(labels: &[&str]) -> (Autocomplete<StubSource>, Selections, StubSource) {
        let source = StubSource::returning(labels);
        let (mut widget, selections) = widget_with_log(source.clone(), instant_config());
        widget.set_query("a");
        widget.focus();
        settle(&mut widget).await;
        (widget, selections, source)
    }

    pub fn labels<S: SuggestionSource>(widget: &Autocomplete<S>) -> Vec<String> {
        widget
            .suggestions()
            .labels()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }
}
