//! Rokuyō (六曜) assignment.
//!
//! A pure function of the lunisolar month and day: `(month + day) mod 6`.
//! The leap flag does not participate — a leap month keeps its base month
//! number, so 閏五月 cycles exactly like 五月.

/// The six labels in residue order: index `(month + day) % 6`.
pub const ROKUYO_LABELS: [&str; 6] = ["大安", "赤口", "先勝", "友引", "先負", "仏滅"];

/// The six-day cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rokuyo {
    Taian,
    Shakko,
    Sensho,
    Tomobiki,
    Senbu,
    Butsumetsu,
}

impl Rokuyo {
    /// Assign from a lunisolar (month, day). Purely periodic with period 6
    /// along a month.
    pub fn from_month_day(month: u8, day: u8) -> Self {
        match (u32::from(month) + u32::from(day)) % 6 {
            0 => Self::Taian,
            1 => Self::Shakko,
            2 => Self::Sensho,
            3 => Self::Tomobiki,
            4 => Self::Senbu,
            _ => Self::Butsumetsu,
        }
    }

    /// Japanese label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Taian => "大安",
            Self::Shakko => "赤口",
            Self::Sensho => "先勝",
            Self::Tomobiki => "友引",
            Self::Senbu => "先負",
            Self::Butsumetsu => "仏滅",
        }
    }
}
