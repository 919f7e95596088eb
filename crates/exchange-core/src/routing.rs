use crate::string_enum::string_enum;

string_enum! {
    /// Topic of a bus message. The payload shape is determined by the key.
    pub enum RoutingKey / UnknownRoutingKey {
        DeviceEntityReported => "fb.bus.entity.reported.device",
        DeviceEntityCreated => "fb.bus.entity.created.device",
        DeviceEntityUpdated => "fb.bus.entity.updated.device",
        DeviceEntityDeleted => "fb.bus.entity.deleted.device",

        DevicePropertyEntityReported => "fb.bus.entity.reported.device.property",
        DevicePropertyEntityCreated => "fb.bus.entity.created.device.property",
        DevicePropertyEntityUpdated => "fb.bus.entity.updated.device.property",
        DevicePropertyEntityDeleted => "fb.bus.entity.deleted.device.property",

        ChannelEntityReported => "fb.bus.entity.reported.channel",
        ChannelEntityCreated => "fb.bus.entity.created.channel",
        ChannelEntityUpdated => "fb.bus.entity.updated.channel",
        ChannelEntityDeleted => "fb.bus.entity.deleted.channel",

        ChannelPropertyEntityReported => "fb.bus.entity.reported.channel.property",
        ChannelPropertyEntityCreated => "fb.bus.entity.created.channel.property",
        ChannelPropertyEntityUpdated => "fb.bus.entity.updated.channel.property",
        ChannelPropertyEntityDeleted => "fb.bus.entity.deleted.channel.property",

        ConnectorEntityReported => "fb.bus.entity.reported.connector",
        ConnectorEntityCreated => "fb.bus.entity.created.connector",
        ConnectorEntityUpdated => "fb.bus.entity.updated.connector",
        ConnectorEntityDeleted => "fb.bus.entity.deleted.connector",

        TriggerEntityCreated => "fb.bus.entity.created.trigger",
        TriggerEntityUpdated => "fb.bus.entity.updated.trigger",
        TriggerEntityDeleted => "fb.bus.entity.deleted.trigger",

        DevicePropertyData => "fb.bus.data.device.property",
        ChannelPropertyData => "fb.bus.data.channel.property",

        DeviceAction => "fb.bus.action.device",
        ConnectorAction => "fb.bus.action.connector",
        TriggerAction => "fb.bus.action.trigger",
    }
}

impl RoutingKey {
    /// Entity lifecycle messages (reported, created, updated, deleted).
    pub fn is_entity(&self) -> bool {
        self.as_str().starts_with("fb.bus.entity.")
    }
}
