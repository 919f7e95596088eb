pub mod async_publisher;
pub mod bus;
pub mod consumer;
pub mod container;
pub mod events;
pub mod publisher;

pub use async_publisher::{AsyncPublisher, AsyncPublisherContainer};
pub use bus::{BusEvent, EventDispatcher};
pub use consumer::Consumer;
pub use container::{ConsumerId, Container};
pub use events::{BeforeMessagePublished, Event, ProvidePropertiesDataEvent};
pub use publisher::{Publisher, PublisherContainer};
