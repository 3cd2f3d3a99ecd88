use std::cmp::Reverse;
use std::collections::BTreeSet;

use serde::Serialize;

use crate::catalog::{Catalog, Course};
use crate::config::ProgramConfig;

/// Suggestion rank bucket. Serialized as its number (1, 2 or 3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "u8")]
pub enum Priority {
    /// Unmet required or plus requirement.
    Requirement = 1,
    /// Elective sharing at least one tag with the student's interests.
    InterestMatch = 2,
    /// Any other elective.
    Elective = 3,
}

impl From<Priority> for u8 {
    fn from(priority: Priority) -> Self {
        priority as u8
    }
}

/// A catalog course proposed as a next step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub priority: Priority,
    /// Interest-tag overlap. Absent for requirement suggestions.
    #[serde(rename = "match", skip_serializing_if = "Option::is_none")]
    pub match_count: Option<usize>,
    #[serde(flatten)]
    pub course: Course,
}

impl Suggestion {
    pub fn code(&self) -> &str {
        &self.course.code
    }

    fn rank_key(&self) -> (Priority, Reverse<usize>, &str) {
        (
            self.priority,
            Reverse(self.match_count.unwrap_or(0)),
            self.course.title.as_str(),
        )
    }
}

pub struct SuggestionRanker<'a> {
    catalog: &'a Catalog,
    required: &'a BTreeSet<String>,
    plus_options: &'a BTreeSet<String>,
}

impl<'a> SuggestionRanker<'a> {
    pub fn new(
        catalog: &'a Catalog,
        required: &'a BTreeSet<String>,
        plus_options: &'a BTreeSet<String>,
    ) -> Self {
        Self {
            catalog,
            required,
            plus_options,
        }
    }

    pub fn from_config(catalog: &'a Catalog, config: &'a ProgramConfig) -> Self {
        Self::new(catalog, &config.required, &config.plus_options)
    }

    pub fn suggest_next<S, T>(&self, completed: &[S], interest_tags: &[T], top_k: usize) -> Vec<Suggestion>
    where
        S: AsRef<str>,
        T: AsRef<str>,
    {
        let completed: BTreeSet<&str> = completed.iter().map(AsRef::as_ref).collect();
        let mut candidates = Vec::new();

        // 1. Missing required courses
        for code in self.required.iter().filter(|c| !completed.contains(c.as_str())) {
            if let Some(course) = self.catalog.get(code) {
                candidates.push(requirement(course));
            }
        }

        // 2. Every plus option while the plus requirement is open
        let plus_satisfied = self
            .plus_options
            .iter()
            .any(|code| completed.contains(code.as_str()));
        if !plus_satisfied {
            for code in self.plus_options {
                if let Some(course) = self.catalog.get(code) {
                    candidates.push(requirement(course));
                }
            }
        }

        // 3. Electives ranked by interest overlap
        let interests = normalize_interests(interest_tags);
        for course in self.catalog.iter() {
            let code = course.code.as_str();
            if completed.contains(code)
                || self.required.contains(code)
                || self.plus_options.contains(code)
            {
                continue;
            }
            let overlap = course.interest_overlap(&interests);
            let priority = if overlap > 0 {
                Priority::InterestMatch
            } else {
                Priority::Elective
            };
            candidates.push(Suggestion {
                priority,
                match_count: Some(overlap),
                course: course.clone(),
            });
        }

        // 4. Rank (priority asc, match desc, title asc), dedupe, trim
        candidates.sort_by(|a, b| a.rank_key().cmp(&b.rank_key()));

        let mut seen = BTreeSet::new();
        candidates
            .into_iter()
            .filter(|s| seen.insert(s.course.code.clone()))
            .take(top_k)
            .collect()
    }
}

fn requirement(course: &Course) -> Suggestion {
    Suggestion {
        priority: Priority::Requirement,
        match_count: None,
        course: course.clone(),
    }
}

/// Lower-case, trim, drop empties, dedupe.
pub fn normalize_interests<T: AsRef<str>>(interest_tags: &[T]) -> BTreeSet<String> {
    interest_tags
        .iter()
        .map(|t| t.as_ref().trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect()
}
