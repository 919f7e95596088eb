use super::Event;
use exchange_core::{ModuleOrigin, Payload, RoutingKey};
use serde::{Deserialize, Serialize};

/// Fired by the publisher container right before a message leaves for the bus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeforeMessagePublished {
    origin: ModuleOrigin,
    routing_key: RoutingKey,
    data: Option<Payload>,
}

impl Event for BeforeMessagePublished {
    const NAME: &'static str = "exchange.beforeMessagePublished";
}

impl BeforeMessagePublished {
    pub fn new(origin: ModuleOrigin, routing_key: RoutingKey, data: Option<Payload>) -> Self {
        Self {
            origin,
            routing_key,
            data,
        }
    }

    pub fn origin(&self) -> ModuleOrigin {
        self.origin
    }

    pub fn routing_key(&self) -> RoutingKey {
        self.routing_key
    }

    pub fn data(&self) -> Option<&Payload> {
        self.data.as_ref()
    }
}
