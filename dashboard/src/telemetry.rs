use sentry::integrations::tracing::{EventFilter, SentryLayer};
use tracing::{Level, Metadata};
use tracing_subscriber::registry::LookupSpan;

fn sentry_event_filter(metadata: &Metadata<'_>) -> EventFilter {
    match *metadata.level() {
        Level::ERROR | Level::WARN => EventFilter::Event,
        Level::INFO => EventFilter::Breadcrumb,
        Level::DEBUG | Level::TRACE => EventFilter::Ignore,
    }
}

/// Tracing layer that reports warnings and errors to sentry as events and
/// keeps info records as breadcrumbs.
pub fn sentry_layer<S>() -> SentryLayer<S>
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    sentry::integrations::tracing::layer().event_filter(sentry_event_filter)
}
