use crate::core::TravelRecord;
use crate::utils::error::{FootprintError, Result};
use serde_yaml::Value;
use std::io::ErrorKind;
use std::path::Path;

/// Reads the YAML travel record at `path`.
pub fn load_travel_record<P: AsRef<Path>>(path: P) -> Result<TravelRecord> {
    let path = path.as_ref();
    let source = path.display().to_string();

    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => FootprintError::ConfigNotFound {
            path: source.clone(),
        },
        ErrorKind::InvalidData => FootprintError::ConfigParse {
            path: source.clone(),
            message: "file is not valid UTF-8".to_string(),
        },
        _ => FootprintError::IoError(e),
    })?;

    tracing::debug!("Read {} bytes from {}", content.len(), source);
    parse_travel_record(&content, &source)
}

/// Parses a travel record document. `source` only labels errors.
pub fn parse_travel_record(content: &str, source: &str) -> Result<TravelRecord> {
    let parse_error = |message: String| FootprintError::ConfigParse {
        path: source.to_string(),
        message,
    };

    if content.trim().is_empty() {
        return Ok(TravelRecord::new());
    }

    let document: Value = serde_yaml::from_str(content).map_err(|e| parse_error(e.to_string()))?;

    let mapping = match document {
        Value::Null => return Ok(TravelRecord::new()),
        Value::Mapping(mapping) => mapping,
        other => {
            return Err(parse_error(format!(
                "top level must be a mapping, found {}",
                kind_of(&other)
            )))
        }
    };

    let mut record = TravelRecord::new();
    for (key, value) in mapping {
        let province = match key {
            Value::String(name) => name,
            other => {
                return Err(parse_error(format!(
                    "province names must be strings, found {}",
                    kind_of(&other)
                )))
            }
        };

        let cities = match value {
            // `西藏:` with nothing after it
            Value::Null => Vec::new(),
            Value::Sequence(items) => items
                .into_iter()
                .map(|item| match item {
                    Value::String(city) => Ok(city),
                    other => Err(parse_error(format!(
                        "cities of '{}' must be strings, found {}",
                        province,
                        kind_of(&other)
                    ))),
                })
                .collect::<Result<Vec<_>>>()?,
            other => {
                return Err(parse_error(format!(
                    "'{}' must map to a list of cities, found {}",
                    province,
                    kind_of(&other)
                )))
            }
        };

        // serde_yaml already rejects duplicate keys
        record.insert(province, cities);
    }

    Ok(record)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a list",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
