use crate::string_enum::string_enum;

string_enum! {
    /// Logical module a bus message was emitted by.
    pub enum ModuleOrigin / UnknownOrigin {
        DevicesModule => "com.fastybird.devices-module",
        TriggersModule => "com.fastybird.triggers-module",
        AccountsModule => "com.fastybird.accounts-module",
        AuthModule => "com.fastybird.auth-module",
        UiModule => "com.fastybird.ui-module",
        WebUiModule => "com.fastybird.web-ui-module",
        WsServerPlugin => "com.fastybird.ws-server-plugin",
        FbBusConnector => "com.fastybird.fb-bus-connector",
        FbMqttConnector => "com.fastybird.fb-mqtt-connector",
        ShellyConnector => "com.fastybird.shelly-connector",
        NotSpecified => "com.fastybird.not-specified",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExchangeError;

    #[test]
    fn every_origin_parses_back_from_its_wire_form() {
        for origin in ModuleOrigin::ALL {
            assert_eq!(origin.as_str().parse::<ModuleOrigin>().unwrap(), *origin);
        }
    }

    #[test]
    fn unknown_origin_is_rejected() {
        let err = "com.example.nope".parse::<ModuleOrigin>().unwrap_err();
        assert!(matches!(err, ExchangeError::UnknownOrigin(ref s) if s == "com.example.nope"));
    }

    #[test]
    fn serializes_as_plain_string() {
        let json = serde_json::to_string(&ModuleOrigin::DevicesModule).unwrap();
        assert_eq!(json, "\"com.fastybird.devices-module\"");
        let back: ModuleOrigin = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ModuleOrigin::DevicesModule);
    }
}
