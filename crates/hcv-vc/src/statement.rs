//! # Statements
//!
//! A valid certificate attests to exactly one health event. On the wire the
//! DCC carries three independent lists; [`Dcc::statement()`] collapses them
//! into the single [`Statement`] variant the rule engine validates, and
//! reports the actual counts when the shape is wrong.

use thiserror::Error;

use crate::hcert::{Dcc, DccRecovery, DccTest, DccVaccination};

/// The one statement carried by a well-formed certificate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Statement<'a> {
    Vaccination(&'a DccVaccination),
    Test(&'a DccTest),
    Recovery(&'a DccRecovery),
}

impl Statement<'_> {
    /// The `diseaseTargeted` code shared by all statement kinds.
    pub fn disease_targeted(&self) -> &str {
        match self {
            Statement::Vaccination(v) => &v.disease_targeted,
            Statement::Test(t) => &t.disease_targeted,
            Statement::Recovery(r) => &r.disease_targeted,
        }
    }

    /// Short lowercase name for diagnostics and log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            Statement::Vaccination(_) => "vaccination",
            Statement::Test(_) => "test",
            Statement::Recovery(_) => "recovery",
        }
    }
}

/// The certificate does not carry exactly one statement.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatementCountError {
    #[error("contains no vaccination, test or recovery statements")]
    None,

    #[error(
        "contains too many statements ({vaccinations} vaccinations, {tests} tests and {recoveries} recoveries)"
    )]
    TooMany {
        vaccinations: usize,
        tests: usize,
        recoveries: usize,
    },
}

impl Dcc {
    /// The single statement of this certificate.
    ///
    /// # Errors
    ///
    /// [`StatementCountError::None`] when all groups are empty,
    /// [`StatementCountError::TooMany`] when more than one entry exists
    /// across all groups.
    pub fn statement(&self) -> Result<Statement<'_>, StatementCountError> {
        match (
            self.vaccinations.as_slice(),
            self.tests.as_slice(),
            self.recoveries.as_slice(),
        ) {
            ([v], [], []) => Ok(Statement::Vaccination(v)),
            ([], [t], []) => Ok(Statement::Test(t)),
            ([], [], [r]) => Ok(Statement::Recovery(r)),
            ([], [], []) => Err(StatementCountError::None),
            (v, t, r) => Err(StatementCountError::TooMany {
                vaccinations: v.len(),
                tests: t.len(),
                recoveries: r.len(),
            }),
        }
    }
}
