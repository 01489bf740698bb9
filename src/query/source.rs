//! Fetch contract between the widget and its data source

use std::future::Future;

use futures::FutureExt;
use futures::future::BoxFuture;
use thiserror::Error;

use crate::suggestions::Suggestion;

/// Errors a data source may report for one lookup
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Request could not be sent or the connection failed
    #[error("Network error: {0}")]
    Network(String),

    /// Source answered with an unexpected status
    #[error("Unexpected status {0}")]
    Status(u16),

    /// Response body could not be understood
    #[error("Parse error: {0}")]
    Parse(String),

    /// Source shut down while the lookup was running
    #[error("Lookup cancelled")]
    Cancelled,

    #[error("{0}")]
    Other(String),
}

pub type FetchResult<V> = Result<Vec<Suggestion<V>>, FetchError>;

/// Asynchronous provider of suggestions for a query
///
/// Implementations are shared by reference and may be asked for several
/// lookups at once; they must tolerate the empty query. The returned future
/// owns everything it needs so it can run after the widget has moved on.
pub trait SuggestionSource: Send + Sync + 'static {
    /// Payload handed back with a selected suggestion
    type Value: Clone + Send + 'static;

    fn fetch(&self, query: &str) -> BoxFuture<'static, FetchResult<Self::Value>>;
}

/// Source backed by an async closure returning plain labels
pub struct FnSource<F> {
    fetch: F,
}

/// Wrap `Fn(String) -> impl Future<Output = Result<Vec<String>, FetchError>>`
/// as a [`SuggestionSource`]
pub fn source_fn<F, Fut>(fetch: F) -> FnSource<F>
where
    F: Fn(String) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Vec<String>, FetchError>> + Send + 'static,
{
    FnSource { fetch }
}

impl<F, Fut> SuggestionSource for FnSource<F>
where
    F: Fn(String) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Vec<String>, FetchError>> + Send + 'static,
{
    type Value = ();

    fn fetch(&self, query: &str) -> BoxFuture<'static, FetchResult<()>> {
        (self.fetch)(query.to_string())
            .map(|result| result.map(|labels| labels.into_iter().map(Suggestion::new).collect()))
            .boxed()
    }
}
