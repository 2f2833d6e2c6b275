use super::ReportError;
use chrono::NaiveDateTime;
use std::borrow::Cow;

/// Month abbreviations indexed by `expiry_month - 1`
pub const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Fev", "Mar", "Abr", "Mai", "Jun", "Jul", "Ago", "Set", "Out", "Nov", "Dez",
];

pub fn month_abbreviation(month: i32) -> Result<&'static str, ReportError> {
    usize::try_from(month)
        .ok()
        .and_then(|m| m.checked_sub(1))
        .and_then(|index| MONTH_ABBREVIATIONS.get(index))
        .copied()
        .ok_or(ReportError::InvalidExpiryMonth(month))
}

/// Renders an expiry as `Mon/Year`, e.g. `Jan/2024`
pub fn format_expiry(month: i32, year: i32) -> Result<String, ReportError> {
    Ok(format!("{}/{}", month_abbreviation(month)?, year))
}

/// Cuts `name` to `max_chars` characters followed by `ellipsis` when it is longer
pub fn truncate_name<'a>(name: &'a str, max_chars: usize, ellipsis: &str) -> Cow<'a, str> {
    match name.char_indices().nth(max_chars) {
        Some((byte_index, _)) => Cow::Owned(format!("{}{}", &name[..byte_index], ellipsis)),
        None => Cow::Borrowed(name),
    }
}

pub fn generated_at_line(prefix: &str, at: &NaiveDateTime) -> String {
    format!("{} {}", prefix, at.format("%d/%m/%Y às %H:%M"))
}

pub fn report_filename(prefix: &str, at: &NaiveDateTime, extension: &str) -> String {
    format!("{}_{}.{}", prefix, at.format("%Y%m%d_%H%M%S"), extension)
}
