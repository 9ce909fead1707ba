//! Lunisolar calendar assembly.
//!
//! This crate turns the new-moon series and the major solar terms into
//! resolved lunisolar months: winter-solstice anchoring, leap-month
//! placement, sequential month numbering, year labels, and per-date
//! lookup. It also carries the rokuyō assigner and the kanji month names.

pub mod builder;
pub mod error;
pub mod names;
pub mod rokuyo;
pub mod types;

pub use builder::{BuilderConfig, MonthCache, resolve_months};
pub use error::CalendarError;
pub use names::{day_label, kanji_month_name, month_label};
pub use rokuyo::{ROKUYO_LABELS, Rokuyo};
pub use types::{LunisolarDate, ResolvedMonth};
