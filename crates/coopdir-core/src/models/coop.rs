//! Cooperative record model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a directory record.
///
/// The backend may send ids as JSON numbers or strings; both are kept in
/// their textual form since the id is only ever echoed back into paths.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawCoopId", into = "String")]
pub struct CoopId(String);

impl CoopId {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CoopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<CoopId> for String {
    fn from(id: CoopId) -> Self {
        id.0
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawCoopId {
    Number(serde_json::Number),
    Text(String),
}

impl From<RawCoopId> for CoopId {
    fn from(raw: RawCoopId) -> Self {
        match raw {
            RawCoopId::Number(value) => Self(value.to_string()),
            RawCoopId::Text(value) => Self(value),
        }
    }
}

/// A directory entry returned by the `/coops/` endpoint.
///
/// Only `id` and `name` are consumed; any other fields are ignored. Both
/// are required, so a record missing either fails the whole response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoopRecord {
    pub id: CoopId,
    pub name: String,
}

impl CoopRecord {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: CoopId::new(id),
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn deserializes_numeric_and_string_ids() {
        let records: Vec<CoopRecord> = serde_json::from_str(
            r#"[{"id": 42, "name": "Main St Credit Union"}, {"id": "a7", "name": "Bakery Co-op"}]"#,
        )
        .unwrap();

        assert_eq!(
            records,
            vec![
                CoopRecord::new("42", "Main St Credit Union"),
                CoopRecord::new("a7", "Bakery Co-op"),
            ]
        );
    }

    #[test]
    fn ignores_unknown_fields() {
        let record: CoopRecord = serde_json::from_str(
            r#"{"id": 3, "name": "Farm Co-op", "type": "credit union", "addresses": []}"#,
        )
        .unwrap();
        assert_eq!(record, CoopRecord::new("3", "Farm Co-op"));
    }

    #[test]
    fn keeps_ids_beyond_i64_range() {
        let records: Vec<CoopRecord> =
            serde_json::from_str(r#"[{"id": 18446744073709551615, "name": "big"}]"#).unwrap();
        assert_eq!(records, vec![CoopRecord::new("18446744073709551615", "big")]);
    }

    #[test]
    fn keeps_fractional_ids_as_text() {
        let record: CoopRecord = serde_json::from_str(r#"{"id": 2.5, "name": "half"}"#).unwrap();
        assert_eq!(record.id.as_str(), "2.5");
    }

    #[test]
    fn record_without_name_is_rejected() {
        let error = serde_json::from_str::<Vec<CoopRecord>>(r#"[{"id": 3}]"#).unwrap_err();
        assert!(error.to_string().contains("missing field `name`"));
    }

    #[test]
    fn id_serializes_as_string() {
        let json = serde_json::to_string(&CoopRecord::new("9", "X")).unwrap();
        assert_eq!(json, r#"{"id":"9","name":"X"}"#);
    }
}
