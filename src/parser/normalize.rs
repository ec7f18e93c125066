use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use thiserror::Error;

static NON_NUMERIC_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^0-9.]").unwrap());
static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{2})/(\d{2})/(\d{4})$").unwrap());

#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid date {0:?}, expected DD/MM/YYYY")]
pub struct DateError(pub String);

/// Best-effort number from a table cell: "$1,234.56" -> 1234.56, "12.5%" -> 12.5.
/// Anything left unparseable after stripping is 0.
pub fn parse_number(text: &str) -> f64 {
    let clean = NON_NUMERIC_RE.replace_all(text, "");
    clean.parse::<f64>().unwrap_or(0.0)
}

/// Strict `DD/MM/YYYY`.
pub fn parse_date(text: &str) -> Result<NaiveDate, DateError> {
    let text = text.trim();
    let err = || DateError(text.to_string());
    let caps = DATE_RE.captures(text).ok_or_else(err)?;

    let day: u32 = caps[1].parse().map_err(|_| err())?;
    let month: u32 = caps[2].parse().map_err(|_| err())?;
    let year: i32 = caps[3].parse().map_err(|_| err())?;
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(err)
}

/// Lower-cases everything, then capitalizes each letter that starts the
/// string or follows a word separator.
///
/// Mixed-case surnames like "McDonald" come out as "Mcdonald" and will not
/// match the directory.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if at_word_start {
            out.extend(c.to_uppercase());
        } else {
            out.extend(c.to_lowercase());
        }
        at_word_start = is_word_separator(c);
    }
    out
}

/// ASCII punctuation and any whitespace separate words. Other non-ASCII
/// characters (e.g. the typographic apostrophe U+2019) stay inside the word.
fn is_word_separator(c: char) -> bool {
    if c.is_ascii() {
        !(c.is_ascii_alphanumeric() || c == '_')
    } else {
        c.is_whitespace()
    }
}
