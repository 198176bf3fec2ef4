//! Modelo de Shift
//!
//! Turno de trabajo con hora de inicio y fin en formato `HH:MM`.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use super::Record;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shift {
    pub id: i64,
    pub date: String,
    pub start: String,
    pub end: String,
}

impl Shift {
    /// Horas trabajadas; un fin anterior al inicio cruza la medianoche.
    /// `None` si alguna de las horas no se puede interpretar.
    pub fn hours(&self) -> Option<f64> {
        let start = parse_clock(&self.start)?;
        let end = parse_clock(&self.end)?;

        let mut minutes = (end - start).num_minutes();
        if minutes < 0 {
            minutes += 24 * 60;
        }
        Some(minutes as f64 / 60.0)
    }
}

/// Interpretar `HH:MM` (o `HH:MM:SS`)
pub fn parse_clock(value: &str) -> Option<NaiveTime> {
    let value = value.trim();
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .ok()
}

impl Record for Shift {
    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
}
