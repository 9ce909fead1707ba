//! Public record assembly.
//!
//! For a civil date or date range this crate composes the stable
//! JSON-shaped record: lunisolar date, rokuyō, solar-term events,
//! moon age, new-moon events, and sunrise/sunset — everything attributed
//! to JST civil dates.

pub mod assemble;
pub mod config;
pub mod error;
pub mod records;

pub use assemble::{calendar_day, calendar_day_with_cancel, calendar_range, calendar_range_with_cancel};
pub use config::{
    CalendarRequest, DEFAULT_LATITUDE, DEFAULT_LIMIT_DAYS, DEFAULT_LONGITUDE, MAX_LIMIT_DAYS,
    parse_iso_date,
};
pub use error::ApiError;
pub use records::{
    AstronomyBlock, DayRecord, EventsBlock, LunisolarBlock, Meta, PhaseEvent, RangeInfo,
    RangeRecord, SekkiBlock, SekkiEvent,
};
