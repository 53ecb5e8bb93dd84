//! Audience targeting for notices.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

use vilarica_core::{AppError, AppResult};

/// The targeting rule attached to a notice.
///
/// A closed sum type replacing the client's free-form `{type, value}`
/// pair. The wire representation stays `{"type": ..., "value": ...}` for
/// compatibility with the mobile client; `Todos` carries the literal
/// value `"Todos"` as the legacy client sends it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Audience {
    /// Every resident of the condominium.
    Todos,
    /// One block.
    Bloco(u32),
    /// One apartment/unit.
    Apartamento(u32),
    /// One named resident.
    Morador(Uuid),
}

impl Audience {
    /// Validate an audience-reference list for notice creation.
    ///
    /// The list must be non-empty, and `Todos` is mutually exclusive with
    /// any targeted reference.
    pub fn validate_set(audiences: &[Audience]) -> AppResult<()> {
        if audiences.is_empty() {
            return Err(AppError::invalid_reference_set(
                "At least one audience reference is required",
            ));
        }
        let has_todos = audiences.iter().any(|a| matches!(a, Audience::Todos));
        if has_todos && audiences.len() > 1 {
            return Err(AppError::invalid_reference_set(
                "'Todos' cannot be combined with targeted references",
            ));
        }
        Ok(())
    }
}

/// Wire shape shared by the mobile client and the stored JSONB column.
///
/// `value` stays a raw JSON value because the client sends block and
/// apartment numbers either as numbers or as strings.
#[derive(Serialize, Deserialize)]
struct WireAudience {
    #[serde(rename = "type")]
    kind: String,
    value: serde_json::Value,
}

fn numeric_value(value: &serde_json::Value) -> Option<u32> {
    match value {
        serde_json::Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        serde_json::Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

impl Serialize for Audience {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let wire = match self {
            Audience::Todos => WireAudience {
                kind: "Todos".to_string(),
                value: serde_json::Value::String("Todos".to_string()),
            },
            Audience::Bloco(n) => WireAudience {
                kind: "Bloco".to_string(),
                value: serde_json::Value::from(*n),
            },
            Audience::Apartamento(n) => WireAudience {
                kind: "Apartamento".to_string(),
                value: serde_json::Value::from(*n),
            },
            Audience::Morador(id) => WireAudience {
                kind: "Morador".to_string(),
                value: serde_json::Value::String(id.to_string()),
            },
        };
        wire.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Audience {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let wire = WireAudience::deserialize(deserializer)?;
        match wire.kind.as_str() {
            "Todos" => Ok(Audience::Todos),
            "Bloco" => numeric_value(&wire.value)
                .map(Audience::Bloco)
                .ok_or_else(|| D::Error::custom(format!("invalid block number: {}", wire.value))),
            "Apartamento" => numeric_value(&wire.value)
                .map(Audience::Apartamento)
                .ok_or_else(|| {
                    D::Error::custom(format!("invalid apartment number: {}", wire.value))
                }),
            "Morador" => wire
                .value
                .as_str()
                .and_then(|s| s.parse::<Uuid>().ok())
                .map(Audience::Morador)
                .ok_or_else(|| D::Error::custom(format!("invalid resident id: {}", wire.value))),
            other => Err(D::Error::custom(format!(
                "unknown audience type: '{other}'"
            ))),
        }
    }
}
