//! Response mapping: flatten upstream JSON objects into string-keyed maps.
//!
//! Only the envelopes are typed (see the wire structs next to each endpoint);
//! the records themselves are passed through without a schema.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::core::YfError;

/// One upstream JSON object with every value rendered as a string.
pub type SecurityRecord = HashMap<String, String>;

/// One spark object with values kept as they came over the wire.
pub type SparkRecord = Map<String, Value>;

pub(crate) fn parse_body<T: DeserializeOwned>(body: &str, what: &str) -> Result<T, YfError> {
    serde_json::from_str(body).map_err(|e| YfError::Data(format!("{what} json parse: {e}")))
}

/// Render a JSON value the way callers expect to read it back: strings without
/// quotes, `null` as the empty string, everything else as compact JSON.
pub(crate) fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

pub(crate) fn flatten(record: &Map<String, Value>) -> SecurityRecord {
    record
        .iter()
        .map(|(k, v)| (k.clone(), stringify(v)))
        .collect()
}

/// Index each flattened record by its `key_field`. Later records win on duplicate keys.
///
/// `what` names the array in error messages, e.g. `quoteResponse.result`.
pub(crate) fn keyed_records(
    nodes: &[Map<String, Value>],
    key_field: &str,
    what: &str,
) -> Result<HashMap<String, SecurityRecord>, YfError> {
    if nodes.is_empty() {
        return Err(YfError::Data(format!("`{what}` is empty")));
    }

    let mut out = HashMap::with_capacity(nodes.len());
    for (i, obj) in nodes.iter().enumerate() {
        let key = obj
            .get(key_field)
            .and_then(Value::as_str)
            .filter(|k| !k.is_empty())
            .ok_or_else(|| YfError::Data(format!("`{what}[{i}]` has no `{key_field}`")))?
            .to_string();
        out.insert(key, flatten(obj));
    }
    Ok(out)
}

/// Pick every requested symbol out of a spark body, keyed by the uppercased symbol.
///
/// All-or-nothing: a single absent symbol fails the whole call.
pub(crate) fn spark_records(
    body: &str,
    symbols: &[String],
) -> Result<HashMap<String, SparkRecord>, YfError> {
    let top = parse_body::<Option<Map<String, Value>>>(body, "spark")?
        .filter(|m| !m.is_empty())
        .ok_or_else(|| YfError::Data("spark response is empty".into()))?;

    let mut out = HashMap::with_capacity(symbols.len());
    for symbol in symbols.iter().map(|s| s.trim()) {
        let upper = symbol.to_uppercase();
        let node = top
            .get(symbol)
            .or_else(|| top.get(&upper))
            .filter(|v| !v.is_null())
            .ok_or_else(|| YfError::MissingSymbol(symbol.to_string()))?;
        let obj = node
            .as_object()
            .ok_or_else(|| YfError::Data(format!("spark entry for {symbol} is not an object")))?;
        out.insert(upper, obj.clone());
    }
    Ok(out)
}
