use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::{ManualEntries, Selection};

/// Metadata about an event as found in the head of an event sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDetails {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub date: Option<String>,

    #[serde(default)]
    pub location: Option<String>,

    #[serde(default)]
    pub guests: Option<u32>,

    /// Any other key/value rows, kept verbatim.
    #[serde(default)]
    pub extra: BTreeMap<String, String>,
}

impl EventDetails {
    /// Store a detail row. Known German and English keys map onto fields.
    pub fn set(&mut self, key: &str, value: &str) {
        let value = value.trim();
        if value.is_empty() {
            return;
        }
        match key.trim().to_lowercase().as_str() {
            "veranstaltung" | "event" | "name" => self.name = Some(value.to_string()),
            "datum" | "date" => self.date = Some(value.to_string()),
            "ort" | "location" => self.location = Some(value.to_string()),
            "personen" | "gäste" | "guests" => match value.parse() {
                Ok(guests) => self.guests = Some(guests),
                Err(_) => {
                    self.extra.insert(key.trim().to_string(), value.to_string());
                }
            },
            _ => {
                self.extra.insert(key.trim().to_string(), value.to_string());
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.date.is_none()
            && self.location.is_none()
            && self.guests.is_none()
            && self.extra.is_empty()
    }
}

/// Everything persisted for one event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventState {
    #[serde(default)]
    pub details: EventDetails,

    #[serde(default)]
    pub products: Selection,

    /// Manually entered ingredient writes, applied on top of recipe totals.
    #[serde(default)]
    pub manual: ManualEntries,
}
