//! Ingestion boundary for the inventory feed.
//!
//! Raw feed entries are loosely shaped JSON. This module checks their
//! *structure* once, on entry, and produces strictly typed
//! [`LocationRecord`]s. Field *values* are left alone for the validator:
//! a latitude of `"invalid"` or a stock of `-5` ingests fine, a stock of
//! `"lots"` does not.

use serde_json::{Map, Value};
use tracing::warn;

use crate::errors::{ChainwatchResult, IngestError};
use crate::models::{Coordinate, LocationRecord, RecordBatch, Site, SiteKind};

/// Ingest the two feed lists the state container keeps.
///
/// Entries in `stores` are stores and entries in `distribution_centers` are
/// distribution centers regardless of which count field they carry.
pub fn ingest_feed(
    stores: &[Value],
    distribution_centers: &[Value],
) -> Result<RecordBatch, IngestError> {
    let stores = stores
        .iter()
        .enumerate()
        .map(|(i, v)| record_from_value(i, v, Some(SiteKind::Store)))
        .collect::<Result<Vec<_>, _>>()?;
    let offset = stores.len();
    let distribution_centers = distribution_centers
        .iter()
        .enumerate()
        .map(|(i, v)| record_from_value(offset + i, v, Some(SiteKind::DistributionCenter)))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(RecordBatch {
        stores,
        distribution_centers,
    })
}

/// Parse a JSON array of records whose kind is given by a `kind` field or,
/// failing that, by which count field (`stock` or `capacity`) is present.
pub fn parse_records(json: &str) -> ChainwatchResult<Vec<LocationRecord>> {
    let values: Vec<Value> = serde_json::from_str(json)?;
    let records = values
        .iter()
        .enumerate()
        .map(|(i, v)| record_from_value(i, v, None))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(records)
}

/// Convert one raw feed entry. `index` is the entry's position, used in errors.
pub fn record_from_value(
    index: usize,
    value: &Value,
    kind_hint: Option<SiteKind>,
) -> Result<LocationRecord, IngestError> {
    let obj = value
        .as_object()
        .ok_or(IngestError::NotAnObject { index })?;

    let id = match obj.get("id") {
        Some(Value::String(s)) if !s.trim().is_empty() => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => {
            warn!(index, "rejecting feed entry without an id");
            return Err(IngestError::MissingId { index });
        }
    };

    let name = match obj.get("name") {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => return Err(wrong_type(&id, "name", "a string")),
    };

    let latitude = coordinate_field(obj, &id, "latitude")?;
    let longitude = coordinate_field(obj, &id, "longitude")?;
    let stock = integer_field(obj, &id, "stock")?;
    let capacity = integer_field(obj, &id, "capacity")?;

    let kind = resolve_kind(obj, &id, kind_hint, stock.is_some(), capacity.is_some())?;
    let site = match kind {
        SiteKind::Store => Site::Store { stock },
        SiteKind::DistributionCenter => Site::DistributionCenter { capacity },
    };

    Ok(LocationRecord {
        id,
        name,
        latitude,
        longitude,
        site,
    })
}

fn resolve_kind(
    obj: &Map<String, Value>,
    id: &str,
    hint: Option<SiteKind>,
    has_stock: bool,
    has_capacity: bool,
) -> Result<SiteKind, IngestError> {
    match obj.get("kind") {
        Some(Value::String(k)) => match k.as_str() {
            "store" => return Ok(SiteKind::Store),
            "distribution_center" => return Ok(SiteKind::DistributionCenter),
            other => {
                return Err(IngestError::AmbiguousKind {
                    record_id: id.to_string(),
                    reason: format!("unknown kind \"{other}\""),
                })
            }
        },
        Some(Value::Null) | None => {}
        Some(_) => return Err(wrong_type(id, "kind", "a string")),
    }

    if let Some(kind) = hint {
        return Ok(kind);
    }

    match (has_stock, has_capacity) {
        (true, false) => Ok(SiteKind::Store),
        (false, true) => Ok(SiteKind::DistributionCenter),
        (true, true) => Err(IngestError::AmbiguousKind {
            record_id: id.to_string(),
            reason: "both stock and capacity present".into(),
        }),
        (false, false) => Err(IngestError::AmbiguousKind {
            record_id: id.to_string(),
            reason: "neither kind, stock, nor capacity present".into(),
        }),
    }
}

fn coordinate_field(
    obj: &Map<String, Value>,
    id: &str,
    field: &str,
) -> Result<Coordinate, IngestError> {
    match obj.get(field) {
        None | Some(Value::Null) => Ok(Coordinate::Missing),
        Some(Value::String(s)) => Ok(Coordinate::Text(s.clone())),
        Some(Value::Number(n)) => n
            .as_f64()
            .map(Coordinate::Number)
            .ok_or_else(|| wrong_type(id, field, "a number or numeric string")),
        Some(_) => Err(wrong_type(id, field, "a number or numeric string")),
    }
}

fn integer_field(
    obj: &Map<String, Value>,
    id: &str,
    field: &str,
) -> Result<Option<i64>, IngestError> {
    match obj.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n
            .as_i64()
            .map(Some)
            .ok_or_else(|| wrong_type(id, field, "an integer")),
        Some(_) => Err(wrong_type(id, field, "an integer")),
    }
}

fn wrong_type(id: &str, field: &str, expected: &str) -> IngestError {
    IngestError::WrongType {
        record_id: id.to_string(),
        field: field.to_string(),
        expected: expected.to_string(),
    }
}
