use crate::error::{Error, Result};
use crate::models::Investor;
use crate::parser::normalize::title_case;

/// First investor, in directory order, whose name contains the title-cased
/// fragment. No ranking: "Buffett" matches whichever Buffett is listed first,
/// and an empty fragment matches the first investor.
pub fn resolve<'a>(fragment: &str, investors: &'a [Investor]) -> Result<&'a Investor> {
    let needle = title_case(fragment);
    investors
        .iter()
        .find(|inv| inv.name.contains(&needle))
        .ok_or_else(|| Error::NotFound(fragment.to_string()))
}
