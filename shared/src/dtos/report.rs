use serde::{de::DeserializeOwned, Serialize};

/// A value exchanged as JSON, wrapped under its type name:
/// `{ "Evaluation": { ... } }`.
pub trait Report: Serialize + DeserializeOwned {
    const NAME: &'static str;

    fn to_json(&self) -> Result<serde_json::Value, serde_json::Error> {
        let mut wrapped = serde_json::Map::new();
        wrapped.insert(Self::NAME.to_string(), serde_json::to_value(self)?);
        Ok(serde_json::Value::Object(wrapped))
    }

    fn from_json(report: &str) -> Result<Self, serde_json::Error> {
        let v: serde_json::Value = serde_json::from_str(report)?;
        serde_json::from_value(v[Self::NAME].clone())
    }
}
