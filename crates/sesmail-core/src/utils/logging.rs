/// Logging context threaded through every stage of a run
///
/// Instead of installing a process-wide subscriber, the entry point builds a
/// [`LogContext`] once and hands it to each component. Work executed through
/// [`LogContext::scope`] or [`LogContext::in_scope`] reports to the context's
/// own dispatcher, so tests can capture output without touching global state.
use crate::constants::{LOG_CRATES, ROOT_SPAN_NAME};
use std::future::Future;
use std::io::IsTerminal;
use tracing::instrument::{WithDispatch, WithSubscriber};
use tracing::{Dispatch, Level, Span};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;

#[derive(Debug, Clone)]
pub struct LogContext {
    verbose: bool,
    dispatch: Dispatch,
    root: Span,
}

impl LogContext {
    /// Human-readable logs on stderr; `RUST_LOG` overrides the default filter
    ///
    /// Colors are only used when stderr is a terminal.
    pub fn stderr(verbose: bool) -> Self {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(verbose));
        let ansi = std::io::stderr().is_terminal();
        Self::build(verbose, std::io::stderr, filter, ansi)
    }

    /// Same layout as [`LogContext::stderr`] but written to `writer`, without colors
    pub fn with_writer<W>(verbose: bool, writer: W) -> Self
    where
        W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    {
        Self::build(verbose, writer, default_filter(verbose), false)
    }

    /// Context that discards every event
    pub fn disabled() -> Self {
        let dispatch = Dispatch::none();
        let root = tracing::dispatcher::with_default(&dispatch, Span::none);
        Self {
            verbose: false,
            dispatch,
            root,
        }
    }

    fn build<W>(verbose: bool, writer: W, filter: EnvFilter, ansi: bool) -> Self
    where
        W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    {
        let subscriber = tracing_subscriber::fmt()
            .with_writer(writer)
            .with_env_filter(filter)
            .with_target(false)
            .with_ansi(ansi)
            .finish();
        let dispatch = Dispatch::new(subscriber);
        let root = tracing::dispatcher::with_default(&dispatch, || {
            tracing::info_span!(ROOT_SPAN_NAME)
        });

        Self {
            verbose,
            dispatch,
            root,
        }
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Span for one pipeline stage (`read`, `resolve`, `send`, ...)
    pub fn stage(&self, name: &'static str) -> Span {
        self.in_scope(|| tracing::info_span!(parent: &self.root, "stage", name))
    }

    /// Runs `f` with this context's dispatcher as the default
    pub fn in_scope<T>(&self, f: impl FnOnce() -> T) -> T {
        tracing::dispatcher::with_default(&self.dispatch, f)
    }

    /// Makes every poll of `future` report to this context's dispatcher
    pub fn scope<F: Future>(&self, future: F) -> WithDispatch<F> {
        future.with_subscriber(self.dispatch.clone())
    }
}

fn level_for(verbose: bool) -> Level {
    if verbose { Level::DEBUG } else { Level::INFO }
}

/// Our crates follow the verbosity flag, dependencies stay at warn
fn default_filter(verbose: bool) -> EnvFilter {
    let level = level_for(verbose).as_str().to_ascii_lowercase();
    let directives = std::iter::once("warn".to_string())
        .chain(LOG_CRATES.iter().map(|krate| format!("{}={}", krate, level)))
        .collect::<Vec<_>>()
        .join(",");

    EnvFilter::new(directives)
}
