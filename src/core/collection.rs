//! Typed collections held by the [`Store`](crate::core::Store)

use crate::core::error::ApiError;
use crate::core::model::{Customer, Order, Record};
use serde::Serialize;
use serde_json::Value;

/// One named group of same-typed records
///
/// Only two kinds of collection exist, so this is a closed sum type rather
/// than an open map of JSON arrays. The host works on records as JSON
/// values; conversion to and from the typed records happens here.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Collection {
    Customers(Vec<Customer>),
    Orders(Vec<Order>),
}

/// Run `$body` with `$records` bound to the typed vector of the collection
macro_rules! with_records {
    ($collection:expr, $records:ident => $body:expr) => {
        match $collection {
            Collection::Customers($records) => $body,
            Collection::Orders($records) => $body,
        }
    };
}

impl Collection {
    /// Number of records in the collection
    pub fn len(&self) -> usize {
        with_records!(self, records => records.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Empty the collection in place
    pub fn clear(&mut self) {
        with_records!(self, records => records.clear())
    }

    /// Ids of every record, in order
    pub fn ids(&self) -> Vec<i64> {
        with_records!(self, records => records.iter().map(Record::id).collect())
    }

    /// Highest id in the collection, 0 when empty
    pub fn max_id(&self) -> i64 {
        self.ids().into_iter().fold(0, i64::max)
    }

    /// Index of the record with `id`
    pub fn position(&self, id: i64) -> Option<usize> {
        with_records!(self, records => records.iter().position(|r| r.id() == id))
    }

    /// Every record as JSON, in order
    pub fn to_values(&self) -> Result<Vec<Value>, ApiError> {
        with_records!(self, records => records.iter().map(to_value).collect())
    }

    /// The record with `id` as JSON
    pub fn find(&self, id: i64) -> Result<Option<Value>, ApiError> {
        with_records!(self, records => records
            .iter()
            .find(|r| r.id() == id)
            .map(to_value)
            .transpose())
    }

    /// Append a record given as JSON
    ///
    /// Returns the record as stored, so defaulted fields are filled in.
    pub fn push(&mut self, item: Value) -> Result<Value, ApiError> {
        with_records!(self, records => push_record(records, item))
    }

    /// Replace the record at `index` with one given as JSON
    pub fn replace(&mut self, index: usize, item: Value) -> Result<Value, ApiError> {
        with_records!(self, records => replace_record(records, index, item))
    }

    /// Remove the record with `id`; returns whether one was removed
    pub fn remove(&mut self, id: i64) -> bool {
        with_records!(self, records => {
            let before = records.len();
            records.retain(|r| r.id() != id);
            records.len() != before
        })
    }
}

fn push_record<R: Record>(records: &mut Vec<R>, item: Value) -> Result<Value, ApiError> {
    let record: R = serde_json::from_value(item)?;
    let stored = to_value(&record)?;
    records.push(record);
    Ok(stored)
}

fn replace_record<R: Record>(
    records: &mut [R],
    index: usize,
    item: Value,
) -> Result<Value, ApiError> {
    let record: R = serde_json::from_value(item)?;
    let stored = to_value(&record)?;
    let slot = records
        .get_mut(index)
        .ok_or_else(|| ApiError::Internal(format!("no record at index {index}")))?;
    *slot = record;
    Ok(stored)
}

fn to_value<R: Record>(record: &R) -> Result<Value, ApiError> {
    serde_json::to_value(record).map_err(|e| ApiError::Internal(e.to_string()))
}
