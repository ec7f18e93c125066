use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};

use super::normalize::parse_date;
use super::{element_text, Parsed, SkipReason};
use crate::error::{Error, Result};
use crate::models::Investor;
use crate::settings::{DIRECTORY_CONTAINER, DIRECTORY_SELECTOR, UPDATED_LABEL};

static CONTAINER: LazyLock<Selector> = LazyLock::new(|| Selector::parse(DIRECTORY_CONTAINER).unwrap());
static ITEM: LazyLock<Selector> = LazyLock::new(|| Selector::parse(DIRECTORY_SELECTOR).unwrap());
static LINK: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a").unwrap());

/// Parse the homepage directory into investors, in document order.
///
/// Each `<li>` reads as "<name> Updated <DD/MM/YYYY>" and links to the
/// investor's holdings page relative to `origin`.
pub fn parse_investors(html: &str, origin: &str) -> Result<Parsed<Investor>> {
    let document = Html::parse_document(html);
    if document.select(&CONTAINER).next().is_none() {
        return Err(Error::MissingElement(DIRECTORY_CONTAINER));
    }

    let parsed = Parsed::collect(
        document
            .select(&ITEM)
            .enumerate()
            .map(|(i, item)| (i, parse_item(&item, origin))),
    );

    for skip in &parsed.skipped {
        match &skip.reason {
            SkipReason::BadDate { text } => warn!("Failed to parse date {:?} (item #{})", text, skip.index),
            reason => debug!("Skipping directory item #{}: {}", skip.index, reason),
        }
    }
    Ok(parsed)
}

fn parse_item(item: &ElementRef, origin: &str) -> std::result::Result<Investor, SkipReason> {
    let text = element_text(item);
    let parts: Vec<&str> = text.split(UPDATED_LABEL).collect();
    let [name, date] = parts[..] else {
        return Err(SkipReason::UpdatedLabel { segments: parts.len() });
    };

    let update_date = parse_date(date)?;

    let href = item
        .select(&LINK)
        .next()
        .and_then(|a| a.value().attr("href"))
        .ok_or(SkipReason::MissingLink)?;

    Ok(Investor {
        name: name.trim().to_string(),
        update_date,
        profile_url: format!("{}{}", origin, href),
    })
}
