//! Kanji month names and label encoding.

/// Kanji numerals for the twelve months.
const KANJI_MONTHS: [&str; 12] = [
    "一月", "二月", "三月", "四月", "五月", "六月", "七月", "八月", "九月", "十月", "十一月",
    "十二月",
];

/// Kanji month name, e.g. `五月` or `閏五月`.
///
/// `month` must be 1..=12; anything else is a caller bug upstream of the
/// resolved month list.
pub fn kanji_month_name(month: u8, leap: bool) -> String {
    let base = KANJI_MONTHS[usize::from(month - 1)];
    if leap {
        format!("閏{base}")
    } else {
        base.to_string()
    }
}

/// Two-digit month label with the leap prefix, e.g. `05` or `閏05`.
pub fn month_label(month: u8, leap: bool) -> String {
    if leap {
        format!("閏{month:02}")
    } else {
        format!("{month:02}")
    }
}

/// Full day label, e.g. `閏05/01`.
pub fn day_label(month: u8, day: u8, leap: bool) -> String {
    format!("{}/{day:02}", month_label(month, leap))
}
