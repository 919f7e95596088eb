use crate::bus::EventDispatcher;
use crate::events::BeforeMessagePublished;
use exchange_core::{ExchangeError, ExchangeResult, ModuleOrigin, Payload, RoutingKey};
use std::sync::Arc;

/// Sends messages to the exchange bus.
pub trait Publisher: Send + Sync {
    fn publish(
        &self,
        origin: ModuleOrigin,
        routing_key: RoutingKey,
        data: Option<&Payload>,
    ) -> ExchangeResult<()>;
}

/// Forwards every message to all registered publishers, announcing it
/// through [`BeforeMessagePublished`] first.
#[derive(Default)]
pub struct PublisherContainer {
    publishers: Vec<Arc<dyn Publisher>>,
    dispatcher: Option<Arc<EventDispatcher>>,
}

impl PublisherContainer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dispatcher(mut self, dispatcher: Arc<EventDispatcher>) -> Self {
        self.dispatcher = Some(dispatcher);
        self
    }

    pub fn register(&mut self, publisher: Arc<dyn Publisher>) {
        self.publishers.push(publisher);
        tracing::debug!(publishers = self.publishers.len(), "publisher registered");
    }

    pub fn len(&self) -> usize {
        self.publishers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.publishers.is_empty()
    }
}

impl Publisher for PublisherContainer {
    /// Every publisher runs even when an earlier one fails; the first
    /// failure is returned.
    fn publish(
        &self,
        origin: ModuleOrigin,
        routing_key: RoutingKey,
        data: Option<&Payload>,
    ) -> ExchangeResult<()> {
        announce(self.dispatcher.as_deref(), origin, routing_key, data);

        let mut failures = FirstFailure::default();
        for (index, publisher) in self.publishers.iter().enumerate() {
            if let Err(err) = publisher.publish(origin, routing_key, data) {
                failures.record(index, routing_key, err);
            }
        }
        failures.into_result()
    }
}

pub(crate) fn announce(
    dispatcher: Option<&EventDispatcher>,
    origin: ModuleOrigin,
    routing_key: RoutingKey,
    data: Option<&Payload>,
) {
    if let Some(dispatcher) = dispatcher {
        dispatcher.dispatch(&BeforeMessagePublished::new(origin, routing_key, data.cloned()));
    }
}

/// Logs every publisher failure and keeps the first one.
#[derive(Default)]
pub(crate) struct FirstFailure(Option<ExchangeError>);

impl FirstFailure {
    pub(crate) fn record(&mut self, index: usize, routing_key: RoutingKey, err: ExchangeError) {
        tracing::error!(
            publisher = index,
            routing_key = routing_key.as_str(),
            error = %err,
            "publisher failed"
        );
        if self.0.is_none() {
            self.0 = Some(err);
        }
    }

    pub(crate) fn into_result(self) -> ExchangeResult<()> {
        match self.0 {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
