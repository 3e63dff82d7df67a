//! Reference tables for PiXELL River mortgages.
//!
//! Rates and payment frequencies are closed enums so every `match` over them is
//! exhaustive. Name lookups are case-insensitive and return `None` for unknown
//! names; the caller decides which error that becomes.

use serde::{Deserialize, Serialize};

/// Amortization periods (years) a mortgage may be written for.
pub const VALID_AMORTIZATION: [u32; 6] = [5, 10, 15, 20, 25, 30];

/// Return `years` if it is an offered amortization period.
///
/// Takes the raw signed input so negative values are just "not offered".
pub fn lookup_amortization(years: i64) -> Option<u32> {
    u32::try_from(years)
        .ok()
        .filter(|y| VALID_AMORTIZATION.contains(y))
}

/// Offered mortgage rates (fixed and variable terms).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MortgageRate {
    #[serde(rename = "FIXED_5")]
    Fixed5,
    #[serde(rename = "FIXED_3")]
    Fixed3,
    #[serde(rename = "FIXED_1")]
    Fixed1,
    #[serde(rename = "VARIABLE_5")]
    Variable5,
    #[serde(rename = "VARIABLE_3")]
    Variable3,
    #[serde(rename = "VARIABLE_1")]
    Variable1,
}

impl MortgageRate {
    pub const ALL: [MortgageRate; 6] = [
        MortgageRate::Fixed5,
        MortgageRate::Fixed3,
        MortgageRate::Fixed1,
        MortgageRate::Variable5,
        MortgageRate::Variable3,
        MortgageRate::Variable1,
    ];

    /// Table key, e.g. `FIXED_5`.
    pub fn name(self) -> &'static str {
        match self {
            MortgageRate::Fixed5 => "FIXED_5",
            MortgageRate::Fixed3 => "FIXED_3",
            MortgageRate::Fixed1 => "FIXED_1",
            MortgageRate::Variable5 => "VARIABLE_5",
            MortgageRate::Variable3 => "VARIABLE_3",
            MortgageRate::Variable1 => "VARIABLE_1",
        }
    }

    /// Annual interest rate as a fraction (`0.0519` = 5.19%).
    ///
    /// Every entry is strictly positive; the payment formula relies on this.
    pub fn annual_rate(self) -> f64 {
        match self {
            MortgageRate::Fixed5 => 0.0519,
            MortgageRate::Fixed3 => 0.0589,
            MortgageRate::Fixed1 => 0.0599,
            MortgageRate::Variable5 => 0.0649,
            MortgageRate::Variable3 => 0.0669,
            MortgageRate::Variable1 => 0.0679,
        }
    }

    /// Resolve a rate by name, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        let upper = name.to_uppercase();
        Self::ALL.into_iter().find(|rate| rate.name() == upper)
    }
}

/// How often payments are made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentFrequency {
    Monthly,
    BiWeekly,
    Weekly,
}

impl PaymentFrequency {
    pub const ALL: [PaymentFrequency; 3] = [
        PaymentFrequency::Monthly,
        PaymentFrequency::BiWeekly,
        PaymentFrequency::Weekly,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PaymentFrequency::Monthly => "MONTHLY",
            PaymentFrequency::BiWeekly => "BI_WEEKLY",
            PaymentFrequency::Weekly => "WEEKLY",
        }
    }

    pub fn payments_per_year(self) -> u32 {
        match self {
            PaymentFrequency::Monthly => 12,
            PaymentFrequency::BiWeekly => 26,
            PaymentFrequency::Weekly => 52,
        }
    }

    /// Resolve a frequency by name, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        let upper = name.to_uppercase();
        Self::ALL.into_iter().find(|freq| freq.name() == upper)
    }
}
