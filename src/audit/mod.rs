//! Requirement audit and next-course suggestions.
//!
//! Both operations are pure functions of the catalog, the configured
//! requirement buckets and the student's completed codes.

pub mod suggestion;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::config::{CreditThresholds, ProgramConfig};

pub use suggestion::{normalize_interests, Priority, Suggestion, SuggestionRanker};

/// Credits still needed toward each target. Never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Needs {
    pub required_remaining_cr: u32,
    pub electives_remaining_cr: u32,
    pub program_remaining_cr: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditResult {
    pub required_done: Vec<String>,
    pub required_missing: Vec<String>,
    /// At most one code: the plus option counted toward the requirement.
    pub plus_done: Vec<String>,
    pub plus_missing: Vec<String>,
    pub electives_taken: Vec<String>,
    pub required_credits: u32,
    pub elective_credits: u32,
    pub total_credits: u32,
    pub needs: Needs,
}

pub struct RequirementAuditor<'a> {
    catalog: &'a Catalog,
    required: &'a BTreeSet<String>,
    plus_options: &'a BTreeSet<String>,
    thresholds: CreditThresholds,
}

impl<'a> RequirementAuditor<'a> {
    pub fn new(
        catalog: &'a Catalog,
        required: &'a BTreeSet<String>,
        plus_options: &'a BTreeSet<String>,
        thresholds: CreditThresholds,
    ) -> Self {
        Self {
            catalog,
            required,
            plus_options,
            thresholds,
        }
    }

    pub fn from_config(catalog: &'a Catalog, config: &'a ProgramConfig) -> Self {
        Self::new(
            catalog,
            &config.required,
            &config.plus_options,
            config.thresholds,
        )
    }

    pub fn audit<S: AsRef<str>>(&self, completed: &[S]) -> AuditResult {
        let completed: BTreeSet<&str> = completed.iter().map(AsRef::as_ref).collect();

        // 1. Required bucket. BTreeSet iteration keeps both lists sorted.
        let (required_done, required_missing): (Vec<String>, Vec<String>) = self
            .required
            .iter()
            .cloned()
            .partition(|code| completed.contains(code.as_str()));

        // 2. Plus bucket: only the smallest completed option is consumed
        let used_for_plus = self
            .plus_options
            .iter()
            .find(|code| completed.contains(code.as_str()));

        let plus_done: Vec<String> = used_for_plus.into_iter().cloned().collect();
        let plus_missing: Vec<String> = if used_for_plus.is_some() {
            Vec::new()
        } else {
            self.plus_options.iter().cloned().collect()
        };

        // 3. Electives: any other catalog-known completion
        let electives_taken: Vec<String> = completed
            .iter()
            .filter(|code| self.catalog.contains(code))
            .filter(|code| !self.required.contains(**code))
            .filter(|code| used_for_plus.map_or(true, |used| used != **code))
            .map(|code| code.to_string())
            .collect();

        // 4. Credits (saturating)
        let required_credits = self
            .catalog
            .total_credits(required_done.iter().map(String::as_str))
            .saturating_add(used_for_plus.map_or(0, |code| self.catalog.credits_of(code)));
        let elective_credits = self
            .catalog
            .total_credits(electives_taken.iter().map(String::as_str));
        let total_credits = required_credits.saturating_add(elective_credits);

        let needs = Needs {
            required_remaining_cr: self.thresholds.required_cr.saturating_sub(required_credits),
            electives_remaining_cr: self.thresholds.elective_cr.saturating_sub(elective_credits),
            program_remaining_cr: self.thresholds.program_cr.saturating_sub(total_credits),
        };

        AuditResult {
            required_done,
            required_missing,
            plus_done,
            plus_missing,
            electives_taken,
            required_credits,
            elective_credits,
            total_credits,
            needs,
        }
    }
}
