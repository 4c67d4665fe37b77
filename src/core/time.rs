//! Shared clock and envelope helpers.
//!
//! The drafting engine never reads the wall clock on its own. Anything that
//! needs "today" takes a [`Clock`] so tests and reproducible runs can pin it.

use chrono::NaiveDate;
use serde_json::{Map, Value as JsonValue};
use ulid::Ulid;

pub const ENVELOPE_VERSION: &str = "1.1.0";
const TOOL_NAME: &str = "vacatur";

/// Source of the current calendar date.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Reads the local wall-clock date.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

/// Always answers with the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Returns unix-epoch seconds with `Z` suffix (e.g. `1771220592Z`).
pub fn now_epoch_z() -> String {
    format!("{}Z", chrono::Utc::now().timestamp())
}

pub fn new_event_id() -> String {
    Ulid::new().to_string()
}

/// JSON response envelope for a CLI command.
///
/// Names the producing tool and version. Keys of an `extra` object are merged
/// at the top level; any other `extra` value is dropped.
pub fn command_envelope(cmd: &str, status: &str, extra: JsonValue) -> JsonValue {
    let mut envelope = Map::new();
    envelope.insert("envelope_version".into(), ENVELOPE_VERSION.into());
    envelope.insert(
        "tool".into(),
        serde_json::json!({ "name": TOOL_NAME, "version": env!("CARGO_PKG_VERSION") }),
    );
    envelope.insert("ts".into(), now_epoch_z().into());
    envelope.insert("event_id".into(), new_event_id().into());
    envelope.insert("cmd".into(), cmd.into());
    envelope.insert("status".into(), status.into());
    if let JsonValue::Object(fields) = extra {
        envelope.extend(fields);
    }
    JsonValue::Object(envelope)
}
