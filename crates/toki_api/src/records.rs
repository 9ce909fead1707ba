//! The stable JSON record shapes.
//!
//! Field declaration order is the wire order; renames here are breaking
//! changes to the public contract.

use serde::Serialize;

/// Record metadata, identical for every record of one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Meta {
    pub tz: String,
    pub day_basis: String,
    pub ephemeris: String,
}

/// One solar-term event with its JST attribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SekkiEvent {
    pub name: String,
    pub degree: u16,
    pub at_jst: String,
    pub date_jst: String,
}

/// Solar terms attributed to a single day; `events` is usually one entry
/// but the contract keeps it a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SekkiBlock {
    pub primary: SekkiEvent,
    pub events: Vec<SekkiEvent>,
}

/// The lunisolar block of a day record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LunisolarBlock {
    pub year: i32,
    pub month: u8,
    pub day: u8,
    pub leap: bool,
    pub month_label: String,
    pub label: String,
    pub month_name: String,
}

/// A lunar phase event. Only `new_moon` is emitted; the type field leaves
/// room for other phases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhaseEvent {
    #[serde(rename = "type")]
    pub kind: String,
    pub at_jst: String,
    pub date_jst: String,
}

/// The astronomy block of a day record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AstronomyBlock {
    pub moon_age: f64,
    pub phase_event: Option<PhaseEvent>,
    pub sunrise: Option<String>,
    pub sunset: Option<String>,
}

/// The public record for a single JST civil date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayRecord {
    pub meta: Meta,
    pub date: String,
    pub lunisolar: LunisolarBlock,
    pub rokuyo: String,
    pub sekki: Option<SekkiBlock>,
    pub astronomy: AstronomyBlock,
}

/// Requested range bounds, inclusive on both ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RangeInfo {
    pub start: String,
    pub end: String,
}

/// Flat event lists for a range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventsBlock {
    pub sekki: Vec<SekkiEvent>,
    pub moon_phases: Vec<PhaseEvent>,
}

/// The public record for a date range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RangeRecord {
    pub meta: Meta,
    pub range: RangeInfo,
    pub days: Vec<DayRecord>,
    pub events: EventsBlock,
}
