use chrono::NaiveDate;
use serde::Serialize;

/// One entry of the homepage directory.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Investor {
    pub name: String,
    pub update_date: NaiveDate,
    pub profile_url: String,
}

/// One line of an investor's holdings table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Holding {
    pub symbol: String,
    pub name: String,
    /// Fraction of the portfolio, `0.1234` for "12.34%".
    pub portfolio_weight: f64,
    pub shares: f64,
    pub cost_price: f64,
    pub value: f64,
}
