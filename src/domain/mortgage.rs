//! The mortgage entity: validated loan terms plus the payment calculation.
//!
//! A `Mortgage` only exists in a valid state. Construction checks the fields
//! in a fixed order (amount, rate, frequency, amortization) and reports the
//! first failure. Each setter re-runs the same rule for its own field and
//! leaves the old value in place when the new one is rejected.

use std::fmt;

use crate::domain::lookup::{MortgageRate, PaymentFrequency, lookup_amortization};
use crate::error::MortgageError;
use crate::report::money::{format_currency, format_percent};

/// A validated mortgage: principal, rate, payment frequency, and amortization.
#[derive(Clone, PartialEq)]
pub struct Mortgage {
    loan_amount: f64,
    rate: MortgageRate,
    frequency: PaymentFrequency,
    amortization: u32,
}

impl Mortgage {
    /// Build a mortgage from raw field values.
    ///
    /// `rate` and `frequency` are table names and are matched case-insensitively.
    /// `amortization` is signed so out-of-range input still goes through the
    /// checks in order.
    pub fn new(
        loan_amount: f64,
        rate: &str,
        frequency: &str,
        amortization: i64,
    ) -> Result<Self, MortgageError> {
        let loan_amount = validate_loan_amount(loan_amount)?;
        let rate = resolve_rate(rate)?;
        let frequency = resolve_frequency(frequency)?;
        let amortization = validate_amortization(amortization)?;

        Ok(Self {
            loan_amount,
            rate,
            frequency,
            amortization,
        })
    }

    /// Principal.
    pub fn loan_amount(&self) -> f64 {
        self.loan_amount
    }

    /// Replace the principal; must be positive.
    pub fn set_loan_amount(&mut self, loan_amount: f64) -> Result<(), MortgageError> {
        self.loan_amount = validate_loan_amount(loan_amount)?;
        Ok(())
    }

    /// Resolved rate table entry.
    pub fn rate(&self) -> MortgageRate {
        self.rate
    }

    /// Replace the rate by table name.
    pub fn set_rate(&mut self, rate: &str) -> Result<(), MortgageError> {
        self.rate = resolve_rate(rate)?;
        Ok(())
    }

    /// Resolved payment frequency.
    pub fn frequency(&self) -> PaymentFrequency {
        self.frequency
    }

    /// Replace the payment frequency by table name.
    pub fn set_frequency(&mut self, frequency: &str) -> Result<(), MortgageError> {
        self.frequency = resolve_frequency(frequency)?;
        Ok(())
    }

    /// Amortization period in years.
    pub fn amortization(&self) -> u32 {
        self.amortization
    }

    /// Replace the amortization period; must be an offered period.
    pub fn set_amortization(&mut self, amortization: i64) -> Result<(), MortgageError> {
        self.amortization = validate_amortization(amortization)?;
        Ok(())
    }

    /// Periodic payment from the fixed-payment annuity formula:
    ///
    /// `P * i(1+i)^n / ((1+i)^n - 1)` with `i = rate / payments_per_year` and
    /// `n = amortization * payments_per_year`.
    ///
    /// Always derived from the current fields. `i` is never zero because every
    /// rate in the table is positive.
    pub fn calculate_payment(&self) -> f64 {
        let payments_per_year = self.frequency.payments_per_year();
        let periodic_rate = self.rate.annual_rate() / f64::from(payments_per_year);
        let payment_count = f64::from(self.amortization * payments_per_year);

        let growth = (1.0 + periodic_rate).powf(payment_count);
        self.loan_amount * (periodic_rate * growth) / (growth - 1.0)
    }
}

fn validate_loan_amount(loan_amount: f64) -> Result<f64, MortgageError> {
    // Written so NaN fails too.
    if loan_amount.is_finite() && loan_amount > 0.0 {
        Ok(loan_amount)
    } else {
        Err(MortgageError::InvalidLoanAmount)
    }
}

fn resolve_rate(rate: &str) -> Result<MortgageRate, MortgageError> {
    MortgageRate::from_name(rate).ok_or(MortgageError::InvalidRate)
}

fn resolve_frequency(frequency: &str) -> Result<PaymentFrequency, MortgageError> {
    PaymentFrequency::from_name(frequency).ok_or(MortgageError::InvalidFrequency)
}

fn validate_amortization(amortization: i64) -> Result<u32, MortgageError> {
    lookup_amortization(amortization).ok_or(MortgageError::InvalidAmortization)
}

/// Multi-line summary for people.
impl fmt::Display for Mortgage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Mortgage Amount: {}", format_currency(self.loan_amount))?;
        writeln!(f, "Rate: {}", format_percent(self.rate.annual_rate()))?;
        writeln!(f, "Amortization: {}", self.amortization)?;
        write!(
            f,
            "Frequency: {} -- Calculated Payment: {}",
            self.frequency.name(),
            format_currency(self.calculate_payment())
        )
    }
}

/// Single-line form holding the constructor-shaped values:
/// `Mortgage(<amount>, <rate value>, <payments per year>, <amortization>)`.
impl fmt::Debug for Mortgage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Mortgage({}, {}, {}, {})",
            self.loan_amount,
            self.rate.annual_rate(),
            self.frequency.payments_per_year(),
            self.amortization
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::lookup::VALID_AMORTIZATION;

    fn sample() -> Mortgage {
        Mortgage::new(682912.43, "FIXED_1", "MONTHLY", 30).unwrap()
    }

    #[test]
    fn new_stores_resolved_values() {
        let m = Mortgage::new(250000.0, "variable_5", "bi_weekly", 25).unwrap();
        assert_eq!(m.loan_amount(), 250000.0);
        assert_eq!(m.rate(), MortgageRate::Variable5);
        assert_eq!(m.frequency(), PaymentFrequency::BiWeekly);
        assert_eq!(m.frequency().payments_per_year(), 26);
        assert_eq!(m.amortization(), 25);
    }

    #[test]
    fn new_rejects_non_positive_amounts() {
        for amount in [0.0, -0.0, -1.0, -682912.43, f64::NAN, f64::INFINITY] {
            let err = Mortgage::new(amount, "FIXED_5", "MONTHLY", 5).unwrap_err();
            assert_eq!(err, MortgageError::InvalidLoanAmount, "amount={amount}");
        }
        let err = Mortgage::new(-0.0, "FIXED_5", "MONTHLY", 5).unwrap_err();
        assert_eq!(err.to_string(), "Loan Amount must be positive.");
    }

    #[test]
    fn new_rejects_unknown_rate() {
        let err = Mortgage::new(100.0, "FIXED_0", "MONTHLY", 5).unwrap_err();
        assert_eq!(err, MortgageError::InvalidRate);
        assert_eq!(err.to_string(), "Rate provided is invalid.");
    }

    #[test]
    fn new_rejects_unknown_frequency() {
        let err = Mortgage::new(100.0, "FIXED_5", "YEARLY", 5).unwrap_err();
        assert_eq!(err, MortgageError::InvalidFrequency);
        assert_eq!(err.to_string(), "Frequency provided is invalid.");
    }

    #[test]
    fn new_rejects_unknown_amortization() {
        for years in [-30, -5, 0, 3, 7, 31, 40] {
            let err = Mortgage::new(100.0, "FIXED_5", "MONTHLY", years).unwrap_err();
            assert_eq!(err, MortgageError::InvalidAmortization);
        }
        let err = Mortgage::new(100.0, "FIXED_5", "MONTHLY", 7).unwrap_err();
        assert_eq!(err.to_string(), "Amortization provided is invalid.");
    }

    #[test]
    fn first_failing_field_wins() {
        let err = Mortgage::new(0.0, "NOPE", "NOPE", 1).unwrap_err();
        assert_eq!(err, MortgageError::InvalidLoanAmount);
        let err = Mortgage::new(1.0, "NOPE", "NOPE", 1).unwrap_err();
        assert_eq!(err, MortgageError::InvalidRate);
        let err = Mortgage::new(1.0, "FIXED_3", "NOPE", 1).unwrap_err();
        assert_eq!(err, MortgageError::InvalidFrequency);
        let err = Mortgage::new(1.0, "FIXED_0", "MONTHLY", -5).unwrap_err();
        assert_eq!(err, MortgageError::InvalidRate);
        let err = Mortgage::new(-5.0, "FIXED_5", "MONTHLY", -5).unwrap_err();
        assert_eq!(err, MortgageError::InvalidLoanAmount);
    }

    #[test]
    fn setters_validate_and_keep_old_value_on_failure() {
        let mut m = sample();

        assert_eq!(m.set_loan_amount(0.0), Err(MortgageError::InvalidLoanAmount));
        assert_eq!(m.set_loan_amount(-5.0), Err(MortgageError::InvalidLoanAmount));
        assert_eq!(m.loan_amount(), 682912.43);

        assert_eq!(m.set_rate("FIXED_0"), Err(MortgageError::InvalidRate));
        assert_eq!(m.rate(), MortgageRate::Fixed1);

        assert_eq!(m.set_frequency("YEARLY"), Err(MortgageError::InvalidFrequency));
        assert_eq!(m.frequency(), PaymentFrequency::Monthly);

        assert_eq!(m.set_amortization(12), Err(MortgageError::InvalidAmortization));
        assert_eq!(m.set_amortization(-5), Err(MortgageError::InvalidAmortization));
        assert_eq!(m.amortization(), 30);
    }

    #[test]
    fn frequency_setter_resolves_frequency_names() {
        let mut m = sample();
        m.set_frequency("weekly").unwrap();
        assert_eq!(m.frequency(), PaymentFrequency::Weekly);
        // Rate names are not frequencies.
        assert_eq!(m.set_frequency("FIXED_5"), Err(MortgageError::InvalidFrequency));
        assert_eq!(m.frequency(), PaymentFrequency::Weekly);
    }

    #[test]
    fn amortization_setter_round_trips_through_getter() {
        let mut m = sample();
        for years in VALID_AMORTIZATION {
            m.set_amortization(i64::from(years)).unwrap();
            assert_eq!(m.amortization(), years);
        }
    }

    #[test]
    fn rate_setter_ignores_case() {
        let mut m = sample();
        m.set_rate("variable_1").unwrap();
        assert_eq!(m.rate(), MortgageRate::Variable1);
        assert!((m.rate().annual_rate() - 0.0679).abs() < 1e-12);
    }

    #[test]
    fn payment_matches_known_scenario() {
        let m = Mortgage::new(682912.43, "FIXED_1", "MONTHLY", 10).unwrap();
        let payment = m.calculate_payment();
        assert!((payment - 7578.30).abs() < 0.005, "payment={payment}");
    }

    #[test]
    fn payment_other_frequencies() {
        let bi_weekly = Mortgage::new(100000.0, "FIXED_5", "BI_WEEKLY", 25).unwrap();
        assert!((bi_weekly.calculate_payment() - 274.79).abs() < 0.005);

        let weekly = Mortgage::new(250000.0, "VARIABLE_1", "WEEKLY", 5).unwrap();
        assert!((weekly.calculate_payment() - 1134.60).abs() < 0.005);
    }

    #[test]
    fn payment_is_deterministic_and_tracks_mutation() {
        let mut m = Mortgage::new(682912.43, "FIXED_1", "MONTHLY", 10).unwrap();
        let first = m.calculate_payment();
        assert_eq!(first, m.calculate_payment());

        m.set_amortization(30).unwrap();
        let longer = m.calculate_payment();
        assert!((longer - 4090.02).abs() < 0.01, "payment={longer}");

        m.set_rate("FIXED_3").unwrap();
        assert!((m.calculate_payment() - 4046.23).abs() < 0.005);

        m.set_loan_amount(100000.0).unwrap();
        m.set_rate("VARIABLE_5").unwrap();
        m.set_amortization(20).unwrap();
        assert!((m.calculate_payment() - 744.98).abs() < 0.01);
    }

    #[test]
    fn display_renders_summary() {
        let m = Mortgage::new(682912.43, "FIXED_3", "monthly", 30).unwrap();
        assert_eq!(
            m.to_string(),
            "Mortgage Amount: $682,912.43\n\
             Rate: 5.89%\n\
             Amortization: 30\n\
             Frequency: MONTHLY -- Calculated Payment: $4,046.23"
        );
    }

    #[test]
    fn debug_renders_reconstruction_form() {
        assert_eq!(format!("{:?}", sample()), "Mortgage(682912.43, 0.0599, 12, 30)");

        let m = Mortgage::new(100.0, "variable_3", "weekly", 5).unwrap();
        assert_eq!(format!("{m:?}"), "Mortgage(100, 0.0669, 52, 5)");
    }
}
