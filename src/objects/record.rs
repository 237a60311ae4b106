//! Flattening of search hits into saved object records

use super::{ObjectKind, lookup};
use crate::{Error, Result};
use serde::Deserialize;
use serde_json::Value;

/// What a saved object points at.
///
/// These are informational: nothing checks that the referenced objects exist.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum References {
    Search,
    /// Visualization ids, in panel order
    Dashboard { visualizations: Vec<String> },
    /// The saved search a visualization is built on
    Visualization { search: String },
}

/// One saved object as read from the cluster
#[derive(Clone, Debug, PartialEq)]
pub struct SavedObject {
    pub kind: ObjectKind,
    /// Document id, also the file stem on disk
    pub name: String,
    /// The document's `_source`, kept as-is
    pub source: Value,
    pub references: References,
}

#[derive(Deserialize)]
struct Panel {
    id: String,
}

impl SavedObject {
    /// Flatten a raw search hit (`{"_id", "_source", "_type"}`).
    ///
    /// # Errors
    /// - the hit has no `_id` or `_source`
    /// - a dashboard's `panelsJSON` is missing, not JSON, or has panels without an `id`
    /// - a visualization has no `savedSearchId`
    pub fn from_hit(kind: ObjectKind, mut hit: Value) -> Result<Self> {
        let name = lookup(&hit, &["_id"])
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| Error::missing_field(format!("{} hit", kind), "_id"))?;

        let source = match hit.get_mut("_source").map(Value::take) {
            Some(source) if !source.is_null() => source,
            _ => return Err(Error::missing_field(format!("{} '{}'", kind, name), "_source")),
        };

        let references = match kind {
            ObjectKind::Search => References::Search,
            ObjectKind::Dashboard => References::Dashboard {
                visualizations: parse_visualizations(&source)
                    .map_err(|e| with_subject(e, kind, &name))?,
            },
            ObjectKind::Visualization => References::Visualization {
                search: lookup(&source, &["savedSearchId"])
                    .and_then(Value::as_str)
                    .map(str::to_string)
                    .ok_or_else(|| {
                        Error::missing_field(format!("{} '{}'", kind, name), "savedSearchId")
                    })?,
            },
        };

        Ok(Self {
            kind,
            name,
            source,
            references,
        })
    }

    /// Flatten every hit, stopping at the first one that fails
    pub fn from_hits(kind: ObjectKind, hits: Vec<Value>) -> Result<Vec<Self>> {
        hits.into_iter()
            .map(|hit| Self::from_hit(kind, hit))
            .collect()
    }

    /// Visualization ids referenced by a dashboard, empty for other kinds
    pub fn visualizations(&self) -> &[String] {
        match &self.references {
            References::Dashboard { visualizations } => visualizations.as_slice(),
            _ => &[],
        }
    }

    /// Saved search id a visualization is built on
    pub fn search(&self) -> Option<&str> {
        match &self.references {
            References::Visualization { search } => Some(search.as_str()),
            _ => None,
        }
    }
}

/// Parse a dashboard source's `panelsJSON` string and return each panel's `id`.
///
/// # Errors
/// Fails if `panelsJSON` is absent or not a string, is not valid JSON, or
/// describes a panel without a string `id`.
pub fn parse_visualizations(source: &Value) -> Result<Vec<String>> {
    let panels_json = lookup(source, &["panelsJSON"])
        .and_then(Value::as_str)
        .ok_or_else(|| Error::missing_field("dashboard source", "panelsJSON"))?;

    let panels: Vec<Panel> =
        serde_json::from_str(panels_json).map_err(|e| Error::parse("panelsJSON", e))?;

    Ok(panels.into_iter().map(|panel| panel.id).collect())
}

// Name the dashboard in errors raised while reading its panels
fn with_subject(err: Error, kind: ObjectKind, name: &str) -> Error {
    match err {
        Error::Parse { what, source } => Error::Parse {
            what: format!("{} of {} '{}'", what, kind, name),
            source,
        },
        Error::MissingField { field, .. } => Error::MissingField {
            what: format!("{} '{}'", kind, name),
            field,
        },
        other => other,
    }
}
