use exchange_core::{ModuleOrigin, Payload, RoutingKey};

/// Receives messages delivered from the exchange bus.
///
/// The shape of `data` is determined by `routing_key`. Failures while
/// handling a message are the implementer's concern.
pub trait Consumer: Send + Sync {
    fn consume(&self, origin: ModuleOrigin, routing_key: RoutingKey, data: Option<&Payload>);
}

impl<C: Consumer + ?Sized> Consumer for std::sync::Arc<C> {
    fn consume(&self, origin: ModuleOrigin, routing_key: RoutingKey, data: Option<&Payload>) {
        (**self).consume(origin, routing_key, data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use exchange_core::DataValue;
    use std::sync::Mutex;

    #[derive(Default)]
    struct LastSeen {
        seen: Mutex<Option<(ModuleOrigin, RoutingKey, Option<Payload>)>>,
    }

    impl Consumer for LastSeen {
        fn consume(&self, origin: ModuleOrigin, routing_key: RoutingKey, data: Option<&Payload>) {
            *self.seen.lock().unwrap() = Some((origin, routing_key, data.cloned()));
        }
    }

    #[test]
    fn consumer_observes_arguments_unmodified() {
        let consumer = LastSeen::default();
        let mut data = Payload::new();
        data.insert("a".to_string(), DataValue::Integer(1));

        consumer.consume(ModuleOrigin::DevicesModule, RoutingKey::DeviceEntityUpdated, Some(&data));

        let seen = consumer.seen.lock().unwrap().clone();
        assert_eq!(
            seen,
            Some((ModuleOrigin::DevicesModule, RoutingKey::DeviceEntityUpdated, Some(data)))
        );
    }

    #[test]
    fn shared_consumer_delegates() {
        let consumer = std::sync::Arc::new(LastSeen::default());
        let erased: Box<dyn Consumer> = Box::new(consumer.clone());

        erased.consume(ModuleOrigin::UiModule, RoutingKey::TriggerAction, None);

        let seen = consumer.seen.lock().unwrap().clone();
        assert_eq!(seen, Some((ModuleOrigin::UiModule, RoutingKey::TriggerAction, None)));
    }
}
