use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Body of `GET /v1/apps/{app}/services/{service}/revisions/_latest`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevisionEnvelope {
    pub revision: Revision,
}

/// A snapshot of a service's deployable configuration.
///
/// Only `definition` is ever sent back to the platform. The metadata is kept
/// loosely typed since it is only logged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Revision {
    pub definition: ServiceDefinition,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Value>,

    #[serde(flatten)]
    pub metadata: Map<String, Value>,
}

impl Revision {
    /// `created_at` when it is an RFC 3339 timestamp.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
            .as_ref()
            .and_then(Value::as_str)
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .map(|t| t.with_timezone(&Utc))
    }
}

/// The redeployable configuration of a service, as accepted by
/// `PUT /v1/apps/{app}/services/{name}`.
///
/// An explicit `null` in a list or string field decodes as empty. `scaling`
/// and `docker` keep the distinction between absent, `null` and a map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceDefinition {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub routes: Vec<Route>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ports: Vec<PortMapping>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub env: Vec<EnvVar>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub regions: Vec<String>,
    #[serde(
        default,
        deserialize_with = "present_or_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub scaling: Option<Option<Map<String, Value>>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub instance_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub deployment_group: String,
    #[serde(
        default,
        deserialize_with = "present_or_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub docker: Option<Option<Map<String, Value>>>,

    /// Fields this client does not model, re-emitted as received.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ServiceDefinition {
    pub fn scaling(&self) -> Option<&Map<String, Value>> {
        self.scaling.as_ref().and_then(Option::as_ref)
    }

    pub fn docker(&self) -> Option<&Map<String, Value>> {
        self.docker.as_ref().and_then(Option::as_ref)
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Only called when the field is present, so `null` becomes `Some(None)`.
fn present_or_null<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub port: u16,
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortMapping {
    pub port: u16,
    pub protocol: String,
}

/// Either `"KEY=value"` or a structured object such as
/// `{"key": "KEY", "value": "value"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EnvVar {
    Plain(String),
    Structured(Map<String, Value>),
}
