//! Record Mapping
//!
//! Translates between the endpoint's JSON records and [`Item`]. Each
//! schema version is a separate wire struct so the domain type never
//! carries transport field names.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{Item, ItemId};
use super::error::{GatewayError, GatewayResult};

/// Wire format version of the remote records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordSchema {
    /// `{ id, "Termék", "Mennyiség", "Mennyiségi egység" }`, no purchased flag
    #[default]
    LocalizedV1,
    /// `{ id, name, quantity, unit, purchased }`
    GenericV2,
}

/// V1 record as stored by the Hungarian-labelled endpoint
#[derive(Debug, Serialize, Deserialize)]
struct LocalizedRecordV1 {
    id: ItemId,
    #[serde(rename = "Termék")]
    name: String,
    #[serde(rename = "Mennyiség")]
    quantity: Quantity,
    #[serde(rename = "Mennyiségi egység")]
    unit: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct GenericRecordV2 {
    id: ItemId,
    name: String,
    quantity: f64,
    unit: String,
    #[serde(default)]
    purchased: bool,
}

/// Quantity as sent by form-backed endpoints: a number or numeric text
#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum Quantity {
    Number(f64),
    Text(String),
}

impl Quantity {
    fn to_f64(&self) -> Option<f64> {
        match self {
            Quantity::Number(n) => Some(*n),
            Quantity::Text(s) => s.trim().parse().ok(),
        }
    }
}

impl RecordSchema {
    pub fn version(&self) -> u32 {
        match self {
            RecordSchema::LocalizedV1 => 1,
            RecordSchema::GenericV2 => 2,
        }
    }

    /// Decode one record
    pub fn decode(&self, value: Value) -> GatewayResult<Item> {
        match self {
            RecordSchema::LocalizedV1 => {
                let record: LocalizedRecordV1 = serde_json::from_value(value)?;
                let quantity = record.quantity.to_f64().ok_or_else(|| {
                    GatewayError::Decode(format!("record #{} has a non-numeric quantity", record.id))
                })?;
                Ok(Item::new(record.id, record.name, quantity, record.unit))
            }
            RecordSchema::GenericV2 => {
                let record: GenericRecordV2 = serde_json::from_value(value)?;
                Ok(Item {
                    id: record.id,
                    name: record.name,
                    quantity: record.quantity,
                    unit: record.unit,
                    purchased: record.purchased,
                })
            }
        }
    }

    /// Decode a JSON array, skipping records that do not match the schema
    pub fn decode_list(&self, value: Value) -> GatewayResult<Vec<Item>> {
        let Value::Array(records) = value else {
            return Err(GatewayError::Decode("expected a JSON array of records".to_string()));
        };

        let mut items = Vec::with_capacity(records.len());
        for record in records {
            match self.decode(record) {
                Ok(item) => items.push(item),
                Err(e) => log::warn!("[GATEWAY] Skipping undecodable v{} record: {}", self.version(), e),
            }
        }
        Ok(items)
    }

    /// Encode an item for a create request
    pub fn encode(&self, item: &Item) -> GatewayResult<Value> {
        let encoded = match self {
            RecordSchema::LocalizedV1 => serde_json::to_value(LocalizedRecordV1 {
                id: item.id,
                name: item.name.clone(),
                quantity: Quantity::Number(item.quantity),
                unit: item.unit.clone(),
            }),
            RecordSchema::GenericV2 => serde_json::to_value(GenericRecordV2 {
                id: item.id,
                name: item.name.clone(),
                quantity: item.quantity,
                unit: item.unit.clone(),
                purchased: item.purchased,
            }),
        };
        encoded.map_err(GatewayError::from)
    }
}

impl fmt::Display for RecordSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordSchema::LocalizedV1 => write!(f, "localized_v1"),
            RecordSchema::GenericV2 => write!(f, "generic_v2"),
        }
    }
}

impl FromStr for RecordSchema {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "v1" | "localized" | "localized_v1" => Ok(RecordSchema::LocalizedV1),
            "v2" | "generic" | "generic_v2" => Ok(RecordSchema::GenericV2),
            other => Err(format!("unknown record schema: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_localized_number_and_text_quantity() {
        let schema = RecordSchema::LocalizedV1;
        let a = schema.decode(json!({"id": 1, "Termék": "Tej", "Mennyiség": 2, "Mennyiségi egység": "l"})).unwrap();
        let b = schema.decode(json!({"id": 2, "Termék": "Liszt", "Mennyiség": "1.5", "Mennyiségi egység": "kg"})).unwrap();

        assert_eq!(a, Item::new(1, "Tej".to_string(), 2.0, "l".to_string()));
        assert_eq!(b.quantity, 1.5);
        assert!(!b.purchased);
    }

    #[test]
    fn test_decode_localized_rejects_text_quantity() {
        let err = RecordSchema::LocalizedV1
            .decode(json!({"id": 3, "Termék": "Só", "Mennyiség": "sok", "Mennyiségi egység": "db"}))
            .unwrap_err();
        assert!(matches!(err, GatewayError::Decode(_)));
    }

    #[test]
    fn test_encode_localized_omits_purchased() {
        let mut item = Item::new(5, "Kenyér".to_string(), 1.0, "db".to_string());
        item.purchased = true;
        let encoded = RecordSchema::LocalizedV1.encode(&item).unwrap();

        assert_eq!(encoded, json!({"id": 5, "Termék": "Kenyér", "Mennyiség": 1.0, "Mennyiségi egység": "db"}));
    }

    #[test]
    fn test_generic_schema_keeps_purchased() {
        let schema = RecordSchema::GenericV2;
        let item = schema.decode(json!({"id": 9, "name": "Milk", "quantity": 2.0, "unit": "L", "purchased": true})).unwrap();
        assert!(item.purchased);

        let defaulted = schema.decode(json!({"id": 10, "name": "Eggs", "quantity": 6, "unit": "pcs"})).unwrap();
        assert!(!defaulted.purchased);
    }

    #[test]
    fn test_decode_list_skips_bad_records() {
        let items = RecordSchema::LocalizedV1
            .decode_list(json!([
                {"id": 1, "Termék": "Tej", "Mennyiség": 2, "Mennyiségi egység": "l"},
                {"id": 2, "Termék": null},
                {"id": 3, "Termék": "Vaj", "Mennyiség": 1, "Mennyiségi egység": "db"}
            ]))
            .unwrap();
        assert_eq!(items.iter().map(|i| i.id).collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    fn test_decode_list_requires_array() {
        assert!(RecordSchema::GenericV2.decode_list(json!({"items": []})).is_err());
    }

    #[test]
    fn test_schema_from_str() {
        assert_eq!("v2".parse::<RecordSchema>(), Ok(RecordSchema::GenericV2));
        assert_eq!("Localized_V1".parse::<RecordSchema>(), Ok(RecordSchema::LocalizedV1));
        assert!("v3".parse::<RecordSchema>().is_err());
    }
}
