use chrono::{DateTime, Utc};

/// Something an assembly run reports on its side channel.
///
/// Envelopes read the type name and timestamp from the payload, so every
/// payload published on a bus has to describe itself.
pub trait Event: Clone + core::fmt::Debug + Send + Sync + 'static {
    /// Dotted name such as `assembly.run.started`.
    fn event_type(&self) -> &'static str;

    fn occurred_at(&self) -> DateTime<Utc>;
}
