// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Row-oriented view of bridge listings.
//!
//! Collections come back from the bridge as an object keyed by id
//! (`{"1": {...}, "2": {...}}`) or, for action results, as a list of
//! objects. [`Table`] flattens either shape into rows with one column per
//! leaf attribute; nested objects become dotted column names such as
//! `state.on`. Columns appear in first-seen order, with a promoted `id`
//! column always first.

use serde_json::{Map, Value};

use crate::error::ParseError;

/// Whether the keys of a keyed collection become a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdColumn {
    /// Add the key as a leading `id` column.
    #[default]
    Promote,
    /// Drop the keys.
    Omit,
}

/// A flattened listing.
///
/// # Examples
///
/// ```
/// use hue_sdk::table::{IdColumn, Table};
/// use serde_json::json;
///
/// let lights = json!({
///     "1": {"name": "Hall", "state": {"on": true, "bri": 254}},
///     "2": {"name": "Desk", "state": {"on": false}},
/// });
///
/// let table = Table::from_response(&lights, IdColumn::Promote).unwrap();
/// assert_eq!(table.columns(), ["id", "name", "state.bri", "state.on"]);
/// assert_eq!(table.len(), 2);
/// assert_eq!(table.cell(1, "state.bri"), Some(&json!(null)));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl Table {
    /// Name of the promoted key column.
    pub const ID_COLUMN: &'static str = "id";

    /// Flattens a keyed object or a list of objects.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::UnexpectedFormat` if `response` is neither, or
    /// if an entry is not an object.
    pub fn from_response(response: &Value, id: IdColumn) -> Result<Self, ParseError> {
        let records: Vec<Record> = match response {
            Value::Object(map) => map
                .iter()
                .map(|(key, entry)| {
                    let mut record = Record::new();
                    if id == IdColumn::Promote {
                        record.push((Self::ID_COLUMN.to_string(), Value::String(key.clone())));
                    }
                    flatten_into(&mut record, "", as_object(entry)?);
                    Ok(record)
                })
                .collect::<Result<_, ParseError>>()?,
            Value::Array(items) => items
                .iter()
                .map(|entry| {
                    let mut record = Record::new();
                    flatten_into(&mut record, "", as_object(entry)?);
                    Ok(record)
                })
                .collect::<Result<_, ParseError>>()?,
            other => {
                return Err(ParseError::UnexpectedFormat(format!(
                    "expected an object or a list, got {other}"
                )));
            }
        };

        let mut columns: Vec<String> = Vec::new();
        for (key, _) in records.iter().flatten() {
            if !columns.contains(key) {
                columns.push(key.clone());
            }
        }

        let rows = records
            .iter()
            .map(|record| {
                columns
                    .iter()
                    .map(|column| {
                        record
                            .iter()
                            .find(|(key, _)| key == column)
                            .map_or(Value::Null, |(_, value)| value.clone())
                    })
                    .collect()
            })
            .collect();

        Ok(Self { columns, rows })
    }

    /// Returns the column names, in first-seen order.
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Returns the rows; each has one cell per column.
    #[must_use]
    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if there are no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the cell at `row` in `column`.
    #[must_use]
    pub fn cell(&self, row: usize, column: &str) -> Option<&Value> {
        let index = self.columns.iter().position(|c| c == column)?;
        self.rows.get(row)?.get(index)
    }
}

// Flattened cells of one entry, in column order.
type Record = Vec<(String, Value)>;

fn as_object(entry: &Value) -> Result<&Map<String, Value>, ParseError> {
    entry
        .as_object()
        .ok_or_else(|| ParseError::UnexpectedFormat(format!("expected an object, got {entry}")))
}

fn flatten_into(record: &mut Record, prefix: &str, object: &Map<String, Value>) {
    for (key, value) in object {
        let name = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        match value {
            Value::Object(nested) if !nested.is_empty() => flatten_into(record, &name, nested),
            other => record.push((name, other.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn keyed_collection_without_ids() {
        let response = json!({"1": {"name": "Hall"}, "2": {"name": "Desk"}});
        let table = Table::from_response(&response, IdColumn::Omit).unwrap();
        assert_eq!(table.columns(), ["name"]);
        assert_eq!(table.rows(), [vec![json!("Hall")], vec![json!("Desk")]]);
    }

    #[test]
    fn list_of_results() {
        let response = json!([
            {"success": {"/lights/1/state/on": true}},
            {"success": {"/lights/1/state/bri": 100}}
        ]);
        let table = Table::from_response(&response, IdColumn::Promote).unwrap();
        assert_eq!(
            table.columns(),
            ["success./lights/1/state/on", "success./lights/1/state/bri"]
        );
        assert_eq!(table.cell(0, "success./lights/1/state/on"), Some(&json!(true)));
        assert_eq!(table.cell(0, "success./lights/1/state/bri"), Some(&Value::Null));
    }

    #[test]
    fn arrays_and_empty_objects_stay_whole() {
        let response = json!({"1": {"xy": [0.3, 0.3], "config": {}}});
        let table = Table::from_response(&response, IdColumn::Promote).unwrap();
        assert_eq!(table.cell(0, "xy"), Some(&json!([0.3, 0.3])));
        assert_eq!(table.cell(0, "config"), Some(&json!({})));
        assert_eq!(table.cell(0, "id"), Some(&json!("1")));
    }

    #[test]
    fn empty_collection() {
        let table = Table::from_response(&json!({}), IdColumn::Promote).unwrap();
        assert!(table.is_empty());
        assert!(table.columns().is_empty());
    }

    #[test]
    fn rejects_scalars() {
        assert!(Table::from_response(&json!(3), IdColumn::Promote).is_err());
        assert!(Table::from_response(&json!([1, 2]), IdColumn::Promote).is_err());
        assert!(Table::from_response(&json!({"1": "x"}), IdColumn::Omit).is_err());
    }
}
