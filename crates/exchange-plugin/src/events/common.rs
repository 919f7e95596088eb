use super::Event;
use exchange_core::{ExchangeError, ExchangeResult};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::{Builder, Uuid, Variant, Version};

/// Fired by any module requesting properties data.
///
/// Identifiers are kept in their canonical string form, which is also the
/// form the bus carries, and parsed again on every read. An empty request
/// is stored as absent, meaning "all properties".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProvidePropertiesDataEvent {
    #[serde(default, deserialize_with = "empty_as_absent")]
    property_ids: Option<Vec<String>>,
}

impl Event for ProvidePropertiesDataEvent {
    const NAME: &'static str = "common.providePropertiesData";
}

impl ProvidePropertiesDataEvent {
    pub fn new<I>(property_ids: I) -> Self
    where
        I: IntoIterator<Item = Uuid>,
    {
        let ids: Vec<String> = property_ids
            .into_iter()
            .map(|id| id.hyphenated().to_string())
            .collect();
        Self {
            property_ids: (!ids.is_empty()).then_some(ids),
        }
    }

    /// Request for every property.
    pub fn all() -> Self {
        Self { property_ids: None }
    }

    /// Requested property identifiers, or `None` when all properties are requested.
    pub fn property_ids(&self) -> ExchangeResult<Option<Vec<Uuid>>> {
        self.property_ids
            .as_ref()
            .map(|ids| ids.iter().map(|id| parse_v4(id)).collect::<ExchangeResult<Vec<_>>>())
            .transpose()
    }
}

/// Parses an identifier and stamps it as a random (v4, RFC 4122) UUID.
fn parse_v4(raw: &str) -> ExchangeResult<Uuid> {
    let parsed = Uuid::parse_str(raw).map_err(|source| ExchangeError::MalformedIdentifier {
        value: raw.to_string(),
        source,
    })?;
    Ok(Builder::from_bytes(parsed.into_bytes())
        .with_variant(Variant::RFC4122)
        .with_version(Version::Random)
        .into_uuid())
}

fn empty_as_absent<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let ids = Option::<Vec<String>>::deserialize(deserializer)?;
    Ok(ids.filter(|ids| !ids.is_empty()))
}
