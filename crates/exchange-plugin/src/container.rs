use crate::consumer::Consumer;
use exchange_core::{
    ExchangeConfig, ExchangeError, ExchangeResult, ModuleOrigin, Payload, RoutingKey,
};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConsumerId(u64);

impl ConsumerId {
    pub fn get(&self) -> u64 {
        self.0
    }
}

struct Registration {
    id: ConsumerId,
    consumer: Arc<dyn Consumer>,
    routing_key: Option<RoutingKey>,
    enabled: AtomicBool,
}

impl Registration {
    fn accepts(&self, routing_key: RoutingKey) -> bool {
        self.enabled.load(Ordering::Acquire)
            && self.routing_key.map_or(true, |bound| bound == routing_key)
    }
}

/// Fans bus messages out to registered consumers.
///
/// The container is itself a [`Consumer`], so the transport only ever talks
/// to one consumer.
#[derive(Default)]
pub struct Container {
    consumers: Vec<Registration>,
    next_id: u64,
}

impl Container {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `consumer` for `routing_key`, or for every key when `None`.
    pub fn register(
        &mut self,
        consumer: Arc<dyn Consumer>,
        routing_key: Option<RoutingKey>,
        enabled: bool,
    ) -> ConsumerId {
        let id = ConsumerId(self.next_id);
        self.next_id += 1;
        tracing::debug!(
            consumer = id.0,
            routing_key = routing_key.map(|key| key.as_str()),
            enabled,
            "consumer registered"
        );
        self.consumers.push(Registration {
            id,
            consumer,
            routing_key,
            enabled: AtomicBool::new(enabled),
        });
        id
    }

    /// Registers `consumer` using the binding named `name` in `cfg`.
    /// Without a binding the consumer receives every key and starts enabled.
    pub fn register_with_config(
        &mut self,
        name: &str,
        consumer: Arc<dyn Consumer>,
        cfg: &ExchangeConfig,
    ) -> ConsumerId {
        match cfg.binding(name) {
            Some(binding) => self.register(consumer, binding.routing_key, binding.enabled),
            None => {
                tracing::debug!(consumer = name, "no binding configured");
                self.register(consumer, None, true)
            }
        }
    }

    pub fn enable(&self, id: ConsumerId) -> ExchangeResult<()> {
        self.set_enabled(id, true)
    }

    pub fn disable(&self, id: ConsumerId) -> ExchangeResult<()> {
        self.set_enabled(id, false)
    }

    pub fn is_enabled(&self, id: ConsumerId) -> ExchangeResult<bool> {
        Ok(self.find(id)?.enabled.load(Ordering::Acquire))
    }

    pub fn len(&self) -> usize {
        self.consumers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.consumers.is_empty()
    }

    fn set_enabled(&self, id: ConsumerId, enabled: bool) -> ExchangeResult<()> {
        self.find(id)?.enabled.store(enabled, Ordering::Release);
        tracing::debug!(consumer = id.0, enabled, "consumer state changed");
        Ok(())
    }

    fn find(&self, id: ConsumerId) -> ExchangeResult<&Registration> {
        self.consumers
            .iter()
            .find(|registration| registration.id == id)
            .ok_or(ExchangeError::ConsumerNotFound(id.0))
    }
}

impl Consumer for Container {
    fn consume(&self, origin: ModuleOrigin, routing_key: RoutingKey, data: Option<&Payload>) {
        for registration in self.consumers.iter().filter(|r| r.accepts(routing_key)) {
            tracing::trace!(
                consumer = registration.id.0,
                origin = origin.as_str(),
                routing_key = routing_key.as_str(),
                "delivering message"
            );
            registration.consumer.consume(origin, routing_key, data);
        }
    }
}
