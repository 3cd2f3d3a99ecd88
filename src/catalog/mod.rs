//! Read-only course catalog and program-rules text.
//!
//! Loading is the only fallible step; once a [`Catalog`] exists every
//! lookup is infallible and unknown codes simply resolve to nothing.

pub mod course;

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub use course::Course;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Duplicate course code: {0}")]
    DuplicateCode(String),
    #[error("Course catalog is empty")]
    Empty,
    #[error("Program rules text is empty")]
    EmptyRules,
}

/// Course lookup by code, preserving the load order of the source list.
#[derive(Debug, Clone)]
pub struct Catalog {
    courses: Vec<Course>,
    by_code: BTreeMap<String, usize>,
}

impl Catalog {
    pub fn from_courses(courses: Vec<Course>) -> Result<Self, CatalogError> {
        if courses.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut by_code = BTreeMap::new();
        for (position, course) in courses.iter().enumerate() {
            if by_code.insert(course.code.clone(), position).is_some() {
                return Err(CatalogError::DuplicateCode(course.code.clone()));
            }
        }

        Ok(Self { courses, by_code })
    }

    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let courses: Vec<Course> = serde_json::from_str(json)?;
        Self::from_courses(courses)
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let raw = read_to_string(path)?;
        let catalog = Self::from_json_str(&raw)?;
        tracing::info!(path = %path.display(), courses = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    pub fn get(&self, code: &str) -> Option<&Course> {
        self.by_code.get(code).map(|&i| &self.courses[i])
    }

    pub fn contains(&self, code: &str) -> bool {
        self.by_code.contains_key(code)
    }

    /// Credit value of a code, zero when the code is not in the catalog.
    pub fn credits_of(&self, code: &str) -> u32 {
        self.get(code).map_or(0, |c| c.credits)
    }

    /// Sum of credits over `codes`, saturating at `u32::MAX`; unknown codes
    /// contribute nothing.
    pub fn total_credits<'a>(&self, codes: impl IntoIterator<Item = &'a str>) -> u32 {
        codes
            .into_iter()
            .map(|code| self.credits_of(code))
            .fold(0, u32::saturating_add)
    }

    /// Courses in load order.
    pub fn iter(&self) -> impl Iterator<Item = &Course> {
        self.courses.iter()
    }

    /// Course codes in load order.
    pub fn codes(&self) -> Vec<&str> {
        self.courses.iter().map(|c| c.code.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

/// Read the program-rules document.
pub fn load_rules(path: &Path) -> Result<String, CatalogError> {
    let text = read_to_string(path)?;
    if text.trim().is_empty() {
        return Err(CatalogError::EmptyRules);
    }
    Ok(text)
}

fn read_to_string(path: &Path) -> Result<String, CatalogError> {
    fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })
}
