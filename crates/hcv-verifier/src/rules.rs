//! # Statement Rules
//!
//! Business rules for the single statement of an international certificate.
//! Each check is a pure function of the statement, the configured
//! [`EuropeanVerificationRules`] and the verification time, so the outcome
//! is reproducible for any given `now`.
//!
//! ## Time Semantics
//!
//! - Vaccination: effective from `dateOfVaccination + delay` days, compared
//!   against the start of the current UTC day.
//! - Test: valid from collection until `collection + hours`, inclusive at
//!   both ends.
//! - Recovery: valid from `firstPositive + fromDays` until
//!   `firstPositive + untilDays`, narrowed (never widened) by the
//!   certificate's own `validFrom` / `validUntil` when those parse.

use hcv_core::{Timestamp, ValidationError};
use hcv_vc::{
    DccRecovery, DccTest, DccVaccination, Statement, DISEASE_TARGETED_COVID_19,
    TEST_RESULT_NOT_DETECTED,
};
use thiserror::Error;

use crate::config::EuropeanVerificationRules;

/// A statement that does not satisfy the business rules.
///
/// Messages never echo personal data. Date parse failures name the field
/// only; the rejected value stays in the error source.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatementError {
    #[error("disease targeted should be COVID-19")]
    DiseaseNotCovid,

    #[error("medicinal product is not accepted")]
    ProductNotAccepted,

    #[error("dose {dose} of {total} does not complete the series")]
    IncompleteSeries { dose: u32, total: u32 },

    #[error("{field} could not be parsed")]
    UnparseableDate {
        field: &'static str,
        #[source]
        source: ValidationError,
    },

    #[error("vaccination is not effective until {effective}")]
    NotYetEffective { effective: String },

    #[error("type of test is not accepted")]
    TestTypeNotAllowed,

    #[error("test result is not negative")]
    PositiveResult,

    #[error("sample was collected more than {hours} hours ago")]
    CollectionTooOld { hours: i64 },

    #[error("sample collection time is in the future")]
    CollectionInFuture,

    #[error("recovery validity window is empty")]
    RecoveryWindowInverted,

    #[error("recovery is not valid until {valid_from}")]
    RecoveryNotYetValid { valid_from: String },

    #[error("recovery stopped being valid at {valid_until}")]
    RecoveryExpired { valid_until: String },

    #[error("date arithmetic out of range")]
    TimeOverflow(#[source] ValidationError),
}

fn check_disease(disease_targeted: &str) -> Result<(), StatementError> {
    if disease_targeted == DISEASE_TARGETED_COVID_19 {
        Ok(())
    } else {
        Err(StatementError::DiseaseNotCovid)
    }
}

fn parse_date(field: &'static str, value: &str) -> Result<Timestamp, StatementError> {
    Timestamp::parse_date(value).map_err(|source| StatementError::UnparseableDate { field, source })
}

/// Validate a vaccination statement.
pub fn validate_vaccination(
    v: &DccVaccination,
    rules: &EuropeanVerificationRules,
    now: Timestamp,
) -> Result<(), StatementError> {
    check_disease(&v.disease_targeted)?;

    if !rules.vaccine_allowed_products.contains(&v.medicinal_product) {
        return Err(StatementError::ProductNotAccepted);
    }

    // Booster doses beyond the series total are accepted.
    if v.dose_number < v.total_series_of_doses {
        return Err(StatementError::IncompleteSeries {
            dose: v.dose_number,
            total: v.total_series_of_doses,
        });
    }

    let vaccinated = parse_date("dateOfVaccination", &v.date_of_vaccination)?;
    let effective = vaccinated
        .plus_days(rules.vaccination_validity_delay_days)
        .map_err(StatementError::TimeOverflow)?;
    if now.start_of_day() < effective {
        return Err(StatementError::NotYetEffective {
            effective: effective.to_date_string(),
        });
    }

    Ok(())
}

/// Validate a test statement.
pub fn validate_test(
    t: &DccTest,
    rules: &EuropeanVerificationRules,
    now: Timestamp,
) -> Result<(), StatementError> {
    check_disease(&t.disease_targeted)?;

    if !rules.test_allowed_types.contains(&t.type_of_test) {
        return Err(StatementError::TestTypeNotAllowed);
    }
    if t.test_result != TEST_RESULT_NOT_DETECTED {
        return Err(StatementError::PositiveResult);
    }

    let collected = Timestamp::parse_lenient(&t.date_time_of_collection).map_err(|source| {
        StatementError::UnparseableDate {
            field: "dateTimeOfCollection",
            source,
        }
    })?;
    let valid_until = collected
        .plus_hours(rules.test_validity_hours)
        .map_err(StatementError::TimeOverflow)?;

    if valid_until < now {
        return Err(StatementError::CollectionTooOld {
            hours: rules.test_validity_hours,
        });
    }
    if now < collected {
        return Err(StatementError::CollectionInFuture);
    }

    Ok(())
}

/// Validate a recovery statement.
pub fn validate_recovery(
    r: &DccRecovery,
    rules: &EuropeanVerificationRules,
    now: Timestamp,
) -> Result<(), StatementError> {
    check_disease(&r.disease_targeted)?;

    let first_positive = parse_date("dateOfFirstPositiveTest", &r.date_of_first_positive_test)?;
    let mut valid_from = first_positive
        .plus_days(rules.recovery_valid_from_days)
        .map_err(StatementError::TimeOverflow)?;
    let mut valid_until = first_positive
        .plus_days(rules.recovery_valid_until_days)
        .map_err(StatementError::TimeOverflow)?;

    // Certificate bounds may only narrow the policy window.
    if let Ok(df) = Timestamp::parse_date(&r.certificate_valid_from) {
        valid_from = valid_from.max(df);
    }
    if let Ok(du) = Timestamp::parse_date(&r.certificate_valid_until) {
        valid_until = valid_until.min(du);
    }

    if valid_until < valid_from {
        return Err(StatementError::RecoveryWindowInverted);
    }
    if now < valid_from {
        return Err(StatementError::RecoveryNotYetValid {
            valid_from: valid_from.to_date_string(),
        });
    }
    if valid_until < now {
        return Err(StatementError::RecoveryExpired {
            valid_until: valid_until.to_date_string(),
        });
    }

    Ok(())
}

/// Validate whichever statement the certificate carries.
pub fn validate_statement(
    statement: Statement<'_>,
    rules: &EuropeanVerificationRules,
    now: Timestamp,
) -> Result<(), StatementError> {
    match statement {
        Statement::Vaccination(v) => validate_vaccination(v, rules, now),
        Statement::Test(t) => validate_test(t, rules, now),
        Statement::Recovery(r) => validate_recovery(r, rules, now),
    }
}
