pub mod common;
pub mod exchange;

pub use common::ProvidePropertiesDataEvent;
pub use exchange::BeforeMessagePublished;

/// Value object broadcast through the [`EventDispatcher`](crate::bus::EventDispatcher).
pub trait Event: Send + Sync + 'static {
    /// Stable topic name used to route the event.
    const NAME: &'static str;
}
