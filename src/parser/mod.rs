pub mod directory;
pub mod normalize;
pub mod portfolio;

use std::fmt;

use serde::Serialize;

use normalize::DateError;

/// Records that made it through plus the items that were dropped on the way.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Parsed<T> {
    pub records: Vec<T>,
    pub skipped: Vec<Skipped>,
}

impl<T> Parsed<T> {
    /// Splits per-item outcomes into kept records and skip diagnostics.
    /// `index` is the item's position among the selected elements.
    pub fn collect<I>(outcomes: I) -> Self
    where
        I: IntoIterator<Item = (usize, Result<T, SkipReason>)>,
    {
        let mut records = Vec::new();
        let mut skipped = Vec::new();
        for (index, outcome) in outcomes {
            match outcome {
                Ok(record) => records.push(record),
                Err(reason) => skipped.push(Skipped { index, reason }),
            }
        }
        Parsed { records, skipped }
    }

    pub fn into_records(self) -> Vec<T> {
        self.records
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Skipped {
    pub index: usize,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SkipReason {
    /// Splitting the listing text on "Updated" gave this many segments instead of 2.
    UpdatedLabel { segments: usize },
    BadDate { text: String },
    MissingLink,
    TooFewCells { found: usize },
    SymbolSplit { text: String },
}

impl From<DateError> for SkipReason {
    fn from(e: DateError) -> Self {
        SkipReason::BadDate { text: e.0 }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::UpdatedLabel { segments } => {
                write!(f, "expected name and date around \"Updated\", got {} segment(s)", segments)
            }
            SkipReason::BadDate { text } => write!(f, "unparseable date {:?}", text),
            SkipReason::MissingLink => write!(f, "no profile link"),
            SkipReason::TooFewCells { found } => write!(f, "only {} cell(s)", found),
            SkipReason::SymbolSplit { text } => write!(f, "cannot split {:?} into symbol and name", text),
        }
    }
}

impl fmt::Display for Skipped {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}: {}", self.index, self.reason)
    }
}

/// Visible text of an element, trimmed.
pub(crate) fn element_text(el: &scraper::ElementRef) -> String {
    el.text().collect::<String>().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collect_splits_outcomes() {
        let parsed = Parsed::collect(vec![
            (0, Ok("a")),
            (1, Err(SkipReason::MissingLink)),
            (2, Ok("b")),
        ]);
        assert_eq!(parsed.records, vec!["a", "b"]);
        assert_eq!(parsed.skipped, vec![Skipped { index: 1, reason: SkipReason::MissingLink }]);
    }

    #[test]
    fn skip_display() {
        let s = Skipped { index: 3, reason: SkipReason::TooFewCells { found: 4 } };
        assert_eq!(s.to_string(), "#3: only 4 cell(s)");
    }
}
