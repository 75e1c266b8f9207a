// ABOUTME: Lenient serde helpers for hand-written YAML
// ABOUTME: Accept numbers for text fields and treat null as an empty value

use serde::de::{Deserializer, Error};
use serde::Deserialize;
use serde_yaml::Value;

/// Read a scalar (string, number, bool or null) as text
pub fn deserialize_scalar<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    scalar_to_string(value).map_err(D::Error::custom)
}

/// Read a sequence of scalars, with null meaning empty
pub fn deserialize_scalar_list<'de, D>(
    deserializer: D,
) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();
    items
        .into_iter()
        .map(|v| scalar_to_string(v).map_err(D::Error::custom))
        .collect()
}

/// Read any defaultable value, with null meaning the default
pub fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn scalar_to_string(value: Value) -> std::result::Result<String, String> {
    match value {
        Value::Null => Ok(String::new()),
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Tagged(tagged) => scalar_to_string(tagged.value),
        Value::Sequence(_) | Value::Mapping(_) => {
            Err("expected a text value, found a list or mapping".to_string())
        }
    }
}
