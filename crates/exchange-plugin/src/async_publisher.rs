use crate::bus::EventDispatcher;
use crate::publisher::{announce, FirstFailure};
use async_trait::async_trait;
use exchange_core::{ExchangeError, ExchangeResult, ModuleOrigin, Payload, RoutingKey};
use std::sync::Arc;
use std::time::Duration;

/// Sends messages to the exchange bus without blocking the caller's thread.
#[async_trait]
pub trait AsyncPublisher: Send + Sync {
    async fn publish(
        &self,
        origin: ModuleOrigin,
        routing_key: RoutingKey,
        data: Option<&Payload>,
    ) -> ExchangeResult<()>;
}

/// Async counterpart of [`PublisherContainer`](crate::PublisherContainer).
///
/// Publishers are awaited one after another in registration order. With a
/// timeout set, a publisher that does not finish in time counts as failed.
#[derive(Default)]
pub struct AsyncPublisherContainer {
    publishers: Vec<Arc<dyn AsyncPublisher>>,
    dispatcher: Option<Arc<EventDispatcher>>,
    timeout: Option<Duration>,
}

impl AsyncPublisherContainer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dispatcher(mut self, dispatcher: Arc<EventDispatcher>) -> Self {
        self.dispatcher = Some(dispatcher);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn register(&mut self, publisher: Arc<dyn AsyncPublisher>) {
        self.publishers.push(publisher);
        tracing::debug!(publishers = self.publishers.len(), "async publisher registered");
    }

    pub fn len(&self) -> usize {
        self.publishers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.publishers.is_empty()
    }

    async fn publish_one(
        &self,
        publisher: &dyn AsyncPublisher,
        origin: ModuleOrigin,
        routing_key: RoutingKey,
        data: Option<&Payload>,
    ) -> ExchangeResult<()> {
        let sending = publisher.publish(origin, routing_key, data);
        match self.timeout {
            Some(limit) => tokio::time::timeout(limit, sending).await.map_err(|_| {
                ExchangeError::Publish(format!("timed out after {}ms", limit.as_millis()))
            })?,
            None => sending.await,
        }
    }
}

#[async_trait]
impl AsyncPublisher for AsyncPublisherContainer {
    async fn publish(
        &self,
        origin: ModuleOrigin,
        routing_key: RoutingKey,
        data: Option<&Payload>,
    ) -> ExchangeResult<()> {
        announce(self.dispatcher.as_deref(), origin, routing_key, data);

        let mut failures = FirstFailure::default();
        for (index, publisher) in self.publishers.iter().enumerate() {
            let result = self
                .publish_one(publisher.as_ref(), origin, routing_key, data)
                .await;
            if let Err(err) = result {
                failures.record(index, routing_key, err);
            }
        }
        failures.into_result()
    }
}
