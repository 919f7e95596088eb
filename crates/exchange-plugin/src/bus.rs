use crate::events::Event;
use exchange_core::{ExchangeError, ExchangeResult};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Wire envelope for an [`Event`]: its name plus the JSON body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusEvent {
    pub topic: String,
    pub payload: serde_json::Value,
}

impl BusEvent {
    pub fn encode<E: Event + Serialize>(event: &E) -> ExchangeResult<Self> {
        Ok(Self {
            topic: E::NAME.to_string(),
            payload: serde_json::to_value(event)?,
        })
    }

    pub fn decode<E: Event + DeserializeOwned>(self) -> ExchangeResult<E> {
        if self.topic != E::NAME {
            return Err(ExchangeError::TopicMismatch {
                expected: E::NAME,
                actual: self.topic,
            });
        }
        Ok(serde_json::from_value(self.payload)?)
    }
}

type Listener = Arc<dyn Fn(&dyn Any) + Send + Sync>;

/// In-process listener registry keyed by event name.
#[derive(Default)]
pub struct EventDispatcher {
    listeners: RwLock<HashMap<&'static str, Vec<Listener>>>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<E, F>(&self, listener: F)
    where
        E: Event,
        F: Fn(&E) + Send + Sync + 'static,
    {
        let erased: Listener = Arc::new(move |event: &dyn Any| {
            if let Some(event) = event.downcast_ref::<E>() {
                listener(event);
            }
        });
        let mut listeners = self.listeners.write().unwrap_or_else(|e| e.into_inner());
        listeners.entry(E::NAME).or_default().push(erased);
        tracing::debug!(event = E::NAME, "listener subscribed");
    }

    /// Runs every listener of `E` in subscription order. The registry is not
    /// locked while listeners run, so they may subscribe or dispatch.
    pub fn dispatch<E: Event>(&self, event: &E) {
        let listeners = {
            let registry = self.listeners.read().unwrap_or_else(|e| e.into_inner());
            match registry.get(E::NAME) {
                Some(listeners) => listeners.clone(),
                None => {
                    tracing::trace!(event = E::NAME, "no listeners");
                    return;
                }
            }
        };
        tracing::trace!(event = E::NAME, listeners = listeners.len(), "dispatching");
        for listener in listeners {
            listener(event as &dyn Any);
        }
    }

    pub fn listener_count(&self, name: &str) -> usize {
        let listeners = self.listeners.read().unwrap_or_else(|e| e.into_inner());
        listeners.get(name).map_or(0, Vec::len)
    }
}
