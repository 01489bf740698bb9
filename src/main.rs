use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use color_eyre::Result;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture, EventStream};
use crossterm::execute;
use futures::StreamExt;
use ratatui::DefaultTerminal;
use typeahead::config::{self, Config, SourceKind};
use typeahead::sources::{MockSource, ScryfallSource};
use typeahead::{Autocomplete, SuggestionSource, TypeaheadError};

mod app;

use app::App;

/// Upper bound for a headless lookup to settle
const ONCE_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Parser, Debug)]
#[command(
    name = "typeahead",
    about = "Debounced autocomplete search in the terminal",
    version
)]
struct Cli {
    /// Data source to search
    #[arg(long, value_enum)]
    source: Option<SourceKind>,

    /// Quiet period before a lookup is sent
    #[arg(long, value_name = "MS")]
    debounce: Option<u64>,

    /// Shortest non-empty query that triggers a lookup
    #[arg(long, value_name = "CHARS")]
    min_length: Option<usize>,

    /// Simulated latency of the mock source
    #[arg(long, value_name = "MS")]
    mock_delay: Option<u64>,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print the suggestions for QUERY and exit (no TUI)
    #[arg(long, value_name = "QUERY")]
    once: Option<String>,
}

impl Cli {
    fn load_config(&self) -> Result<Config, TypeaheadError> {
        let mut config = match &self.config {
            Some(path) => config::load_config_from(path)?,
            None => config::load_config()?,
        };

        if let Some(kind) = self.source {
            config.source.kind = kind;
        }
        if let Some(delay) = self.debounce {
            config.autocomplete.debounce_delay_ms = delay;
        }
        if let Some(min) = self.min_length {
            config.autocomplete.min_query_length = min;
        }
        if let Some(delay) = self.mock_delay {
            config.source.mock_delay_ms = delay;
        }
        Ok(config)
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;
    env_logger::init();

    let cli = Cli::parse();
    let config = cli.load_config()?;
    log::debug!("Using {:?} source", config.source.kind);

    match config.source.kind {
        SourceKind::Mock => {
            let source = Arc::new(MockSource::new(Duration::from_millis(
                config.source.mock_delay_ms,
            )));
            let result = launch(Arc::clone(&source), &config, "Mock Data", cli.once).await;
            source.shutdown();
            result
        }
        SourceKind::Scryfall => {
            let source = Arc::new(ScryfallSource::from_config(&config.source)?);
            log::debug!("Searching cards at {}", source.endpoint());
            let result = launch(Arc::clone(&source), &config, "Scryfall", cli.once).await;
            source.shutdown();
            result
        }
    }
}

async fn launch<S: SuggestionSource>(
    source: Arc<S>,
    config: &Config,
    title: &'static str,
    once: Option<String>,
) -> Result<()> {
    let widget = Autocomplete::with_shared_source(source, config.autocomplete.clone());

    if let Some(query) = once {
        return Ok(run_once(widget, &query).await?);
    }

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let mut terminal = ratatui::init();
    execute!(std::io::stdout(), EnableMouseCapture)?;

    let mut app = App::new(widget, title);
    let result = run(&mut terminal, &mut app).await;

    // Restore terminal
    execute!(std::io::stdout(), DisableMouseCapture)?;
    ratatui::restore();

    result
}

async fn run<S: SuggestionSource>(terminal: &mut DefaultTerminal, app: &mut App<S>) -> Result<()> {
    let mut events = EventStream::new();

    while !app.should_quit() {
        terminal.draw(|frame| app.render(frame))?;

        tokio::select! {
            event = events.next() => match event {
                Some(Ok(event)) => app.handle_event(event),
                Some(Err(e)) => return Err(e.into()),
                None => break,
            },
            applied = app.widget_mut().process_next() => {
                if !applied {
                    break;
                }
            }
        }
    }

    Ok(())
}

/// Look up `query` once and print the resulting options, one per line
async fn run_once<S: SuggestionSource>(
    mut widget: Autocomplete<S>,
    query: &str,
) -> Result<(), TypeaheadError> {
    widget.mount();
    widget.set_query(query);
    widget.focus();

    let settled = tokio::time::timeout(ONCE_TIMEOUT, async {
        while widget.is_lookup_pending() || widget.is_loading() {
            if !widget.process_next().await {
                break;
            }
        }
    })
    .await;

    if settled.is_err() {
        return Err(TypeaheadError::LookupTimeout {
            query: query.to_string(),
            timeout_ms: ONCE_TIMEOUT.as_millis() as u64,
        });
    }

    let mut stdout = std::io::stdout().lock();
    if let Some(listbox) = widget.view().listbox {
        for option in listbox.options {
            writeln!(stdout, "{}", option.label)?;
        }
    }
    Ok(())
}
