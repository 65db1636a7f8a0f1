//! Declarative configuration field schema
//!
//! Providers declare which account keys they need and what a valid value
//! looks like. Enforcement happens in [`FieldValidator`], outside the
//! provider itself.

use regex::Regex;
use serde::Serialize;

use super::account::Account;
use crate::shared::error::AppError;

/// Static declaration of one account configuration key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    pub name: &'static str,
    pub title: &'static str,
    pub pattern: &'static str,
}

impl FieldSpec {
    pub const fn new(name: &'static str, title: &'static str, pattern: &'static str) -> Self {
        Self { name, title, pattern }
    }
}

/// One field that failed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub name: &'static str,
    pub title: &'static str,
    pub reason: String,
}

/// Evaluates a field schema against account records
pub struct FieldValidator {
    rules: Vec<(FieldSpec, Regex)>,
}

impl FieldValidator {
    /// Compile the patterns of `specs`
    pub fn new(specs: &[FieldSpec]) -> crate::Result<Self> {
        let rules = specs
            .iter()
            .map(|spec| {
                Regex::new(spec.pattern)
                    .map(|re| (*spec, re))
                    .map_err(|e| {
                        AppError::Internal(format!("Invalid pattern for field {}: {}", spec.name, e))
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { rules })
    }

    /// Every violation in declaration order; empty means the account is valid
    pub fn violations(&self, account: &Account) -> Vec<FieldViolation> {
        self.rules
            .iter()
            .filter_map(|(spec, re)| {
                let reason = match account.get(spec.name) {
                    None => "is required".to_string(),
                    Some(value) if !re.is_match(value) => {
                        format!("does not match {}", spec.pattern)
                    }
                    Some(_) => return None,
                };
                Some(FieldViolation {
                    name: spec.name,
                    title: spec.title,
                    reason,
                })
            })
            .collect()
    }

    pub fn validate(&self, account: &Account) -> crate::Result<()> {
        let violations = self.violations(account);
        if violations.is_empty() {
            return Ok(());
        }

        let details = violations
            .iter()
            .map(|v| format!("{} ({}) {}", v.title, v.name, v.reason))
            .collect::<Vec<_>>()
            .join("; ");
        Err(AppError::Validation(details))
    }
}
