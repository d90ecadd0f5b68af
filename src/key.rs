use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::freq::FrequencyTable;

/// Field holding the character→count object inside the key envelope. Hosts
/// must persist the envelope byte-for-byte: entry order feeds the tree
/// builder's tie-break, so reordering changes the rebuilt tree.
pub const ENVELOPE_FIELD: &str = "frequencyMap";

/// Serializes a frequency table into its JSON envelope,
/// `{"frequencyMap":{"a":5,...}}`, keeping the table's entry order.
pub fn serialize(table: &FrequencyTable) -> String {
    let mut counts = Map::new();
    for (ch, freq) in table.iter() {
        counts.insert(ch.to_string(), Value::from(freq));
    }
    let mut envelope = Map::new();
    envelope.insert(ENVELOPE_FIELD.to_string(), Value::Object(counts));
    Value::Object(envelope).to_string()
}

/// Parses a key back into a frequency table, preserving entry order.
pub fn deserialize(key: &str) -> Result<FrequencyTable> {
    let value: Value =
        serde_json::from_str(key).map_err(|e| Error::MalformedKey(e.to_string()))?;
    let counts = value
        .get(ENVELOPE_FIELD)
        .and_then(Value::as_object)
        .ok_or_else(|| Error::MalformedKey(format!("missing {ENVELOPE_FIELD:?} object")))?;

    let mut table = FrequencyTable::new();
    for (symbol, count) in counts {
        let mut chars = symbol.chars();
        let ch = match (chars.next(), chars.next()) {
            (Some(ch), None) => ch,
            _ => {
                return Err(Error::MalformedKey(format!(
                    "entry {symbol:?} is not a single character"
                )));
            }
        };
        let count = count
            .as_u64()
            .filter(|&n| n > 0)
            .ok_or_else(|| {
                Error::MalformedKey(format!("count for {ch:?} is not a positive integer"))
            })?;
        table.insert(ch, count);
    }
    Ok(table)
}
