use mongodb::bson::{Bson, Document};
use serde::Serialize;
use serde_json::{Map, Value};
use service_core::error::AppError;

/// Field the store attaches to every inserted document; never shown to clients.
pub const STORE_ID_FIELD: &str = "_id";

pub const NO_JSON_MESSAGE: &str = "No JSON data provided";
pub const NOT_AN_OBJECT_MESSAGE: &str = "JSON data must be an object";

/// A schemaless JSON object as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    /// Parses a request body. Empty, unparseable and falsy bodies (`null`,
    /// `{}`, `[]`, `0`, `false`, `""`) count as "no data"; other non-object
    /// JSON is rejected separately.
    pub fn from_json_body(body: &[u8]) -> Result<Self, AppError> {
        let value: Value = serde_json::from_slice(body)
            .map_err(|_| AppError::BadRequest(NO_JSON_MESSAGE.to_string()))?;

        if is_falsy(&value) {
            return Err(AppError::BadRequest(NO_JSON_MESSAGE.to_string()));
        }

        match value {
            Value::Object(map) => Ok(Self(map)),
            _ => Err(AppError::BadRequest(NOT_AN_OBJECT_MESSAGE.to_string())),
        }
    }

    /// Builds a record from a stored document, dropping the store's `_id`.
    pub fn from_document(mut doc: Document) -> Self {
        doc.remove(STORE_ID_FIELD);
        match Bson::Document(doc).into_relaxed_extjson() {
            Value::Object(map) => Self(map),
            _ => Self(Map::new()),
        }
    }

    /// Converts field by field. Extended-JSON wrappers such as `$numberLong`
    /// or `$oid` stay plain sub-documents.
    pub fn to_document(&self) -> Result<Document, AppError> {
        object_to_document(&self.0)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64().map_or(false, |f| f == 0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

fn object_to_document(map: &Map<String, Value>) -> Result<Document, AppError> {
    let mut doc = Document::new();
    for (key, value) in map {
        doc.insert(key.clone(), value_to_bson(value)?);
    }
    Ok(doc)
}

fn value_to_bson(value: &Value) -> Result<Bson, AppError> {
    Ok(match value {
        Value::Null => Bson::Null,
        Value::Bool(b) => Bson::Boolean(*b),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Bson::Int64(i)
            } else if n.is_u64() {
                return Err(AppError::DatabaseError(anyhow::anyhow!(
                    "integer {} exceeds the 64-bit signed range",
                    n
                )));
            } else {
                Bson::Double(n.as_f64().unwrap_or(f64::NAN))
            }
        }
        Value::String(s) => Bson::String(s.clone()),
        Value::Array(items) => Bson::Array(
            items
                .iter()
                .map(value_to_bson)
                .collect::<Result<Vec<_>, _>>()?,
        ),
        Value::Object(map) => Bson::Document(object_to_document(map)?),
    })
}
