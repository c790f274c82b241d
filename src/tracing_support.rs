//! Tracing support.
//!
//! When the `tracing` feature is enabled, graph operations open spans
//! (`dfs`, `bfs`, `dijkstra`, ...) and mutations emit `debug` events through
//! the `tracing` crate.  This module also provides subscriber setup: a
//! formatted logger for applications, and a span-timing layer used by tests.
//! When the feature is disabled, everything here is a no-op.

#[cfg(feature = "tracing")]
mod enabled {
    use std::{
        cell::RefCell,
        collections::BTreeMap,
        sync::Once,
        time::{Duration, Instant},
    };

    use tracing::Level;
    use tracing_subscriber::{
        Layer, Registry, layer::Context, layer::SubscriberExt, registry::LookupSpan,
        util::SubscriberInitExt,
    };

    thread_local! {
        static SPAN_TIMINGS: RefCell<BTreeMap<&'static str, (Duration, usize)>> =
            const { RefCell::new(BTreeMap::new()) };
    }

    /// Records how long each span was open, keyed by span name.
    struct TimingLayer;

    impl<S> Layer<S> for TimingLayer
    where
        S: tracing::Subscriber + for<'a> LookupSpan<'a>,
    {
        fn on_new_span(
            &self,
            _attrs: &tracing::span::Attributes<'_>,
            id: &tracing::Id,
            ctx: Context<'_, S>,
        ) {
            if let Some(span) = ctx.span(id) {
                span.extensions_mut().insert(Instant::now());
            }
        }

        fn on_close(&self, id: tracing::Id, ctx: Context<'_, S>) {
            if let Some(span) = ctx.span(&id) {
                let name = span.metadata().name();
                if let Some(start) = span.extensions().get::<Instant>() {
                    let elapsed = start.elapsed();
                    SPAN_TIMINGS.with(|totals| {
                        let mut totals = totals.borrow_mut();
                        let entry = totals.entry(name).or_insert((Duration::ZERO, 0));
                        entry.0 += elapsed;
                        entry.1 += 1;
                    });
                }
            }
        }
    }

    /// Installs a global subscriber that records span timings.  Does nothing
    /// if a global subscriber is already installed.
    pub fn init_tracing() {
        static INIT: Once = Once::new();
        INIT.call_once(|| {
            let _ = Registry::default().with(TimingLayer).try_init();
        });
    }

    /// Installs a global subscriber that writes events to stderr, at `DEBUG`
    /// level if `verbose` and `INFO` otherwise.
    pub fn init_logging(verbose: bool) {
        let level = if verbose { Level::DEBUG } else { Level::INFO };
        let _ = tracing_subscriber::fmt()
            .with_max_level(level)
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init();
    }

    /// Returns `(span name, total time, count)` for every span closed on the
    /// current thread since the last reset, in name order.
    pub fn span_timings() -> Vec<(&'static str, Duration, usize)> {
        SPAN_TIMINGS.with(|totals| {
            totals
                .borrow()
                .iter()
                .map(|(name, (duration, count))| (*name, *duration, *count))
                .collect()
        })
    }

    #[doc(hidden)]
    pub fn dump_method_timings() {
        let mut entries = span_timings();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        eprintln!("Span timings (desc):");
        for (name, duration, count) in entries {
            eprintln!("  {name}: {duration:?} ({count}x)");
        }
    }

    #[doc(hidden)]
    pub fn reset_method_timings() {
        init_tracing();
        SPAN_TIMINGS.with(|totals| totals.borrow_mut().clear());
    }
}

#[cfg(not(feature = "tracing"))]
mod disabled {
    use std::time::Duration;

    pub fn init_tracing() {
        // No-op when tracing is disabled
    }

    pub fn init_logging(_verbose: bool) {
        // No-op when tracing is disabled
    }

    pub fn span_timings() -> Vec<(&'static str, Duration, usize)> {
        Vec::new()
    }

    #[doc(hidden)]
    pub fn dump_method_timings() {
        // No-op when tracing is disabled
    }

    #[doc(hidden)]
    pub fn reset_method_timings() {
        // No-op when tracing is disabled
    }

    macro_rules! info_span {
        ($($args:tt)*) => {
            $crate::tracing_support::NoOpSpan
        };
    }

    macro_rules! debug {
        ($($args:tt)*) => {{}};
    }

    pub(crate) use {debug, info_span};

    pub struct NoOpSpan;

    impl NoOpSpan {
        pub fn entered(self) -> NoOpSpanGuard {
            NoOpSpanGuard
        }
    }

    pub struct NoOpSpanGuard;
}

#[cfg(feature = "tracing")]
pub use enabled::{
    dump_method_timings, init_logging, init_tracing, reset_method_timings, span_timings,
};
#[cfg(feature = "tracing")]
pub(crate) use tracing::{debug, info_span};

#[cfg(not(feature = "tracing"))]
#[doc(hidden)]
pub use disabled::{NoOpSpan, NoOpSpanGuard};
#[cfg(not(feature = "tracing"))]
pub use disabled::{
    dump_method_timings, init_logging, init_tracing, reset_method_timings, span_timings,
};
#[cfg(not(feature = "tracing"))]
pub(crate) use disabled::{debug, info_span};
