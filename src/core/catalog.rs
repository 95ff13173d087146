//! Course catalog
//!
//! The catalog is loaded once at startup and never mutated afterwards. Every
//! lookup is tolerant: an unknown id yields `None`, zero credits or `false`
//! flags instead of an error.

use crate::core::error::{PlannerError, Result};
use crate::core::models::Course;
use logger::{debug, warn};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Catalog compiled into the binary
const DEFAULT_CATALOG: &str = include_str!("../../assets/catalog.toml");

/// On-disk catalog layout
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    name: String,
    #[serde(default)]
    courses: Vec<Course>,
}

/// Immutable, id-indexed set of courses
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Catalog name (e.g., "IITM BS Diploma Level")
    pub name: String,

    /// Courses in file order
    courses: Vec<Course>,

    /// Course id -> index into `courses`
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog from courses; the first course wins on duplicate ids
    ///
    /// # Arguments
    /// * `name` - Catalog name
    /// * `courses` - Courses in display order
    #[must_use]
    pub fn new(name: String, courses: Vec<Course>) -> Self {
        let mut kept = Vec::with_capacity(courses.len());
        let mut index = HashMap::with_capacity(courses.len());

        for course in courses {
            if index.contains_key(&course.id) {
                warn!("Duplicate course id '{}' in catalog; keeping the first", course.id);
                continue;
            }
            index.insert(course.id.clone(), kept.len());
            kept.push(course);
        }

        Self {
            name,
            courses: kept,
            index,
        }
    }

    /// Parse a catalog from a TOML string
    ///
    /// # Errors
    /// Returns an error if the TOML cannot be parsed or a course is missing a
    /// required field
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(toml_str)?;
        Ok(Self::new(file.name, file.courses))
    }

    /// Load a catalog file from disk
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| PlannerError::io(path, e))?;
        let catalog = Self::from_toml(&content)?;
        debug!(
            "Loaded {} courses from catalog {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// The catalog bundled with the binary
    ///
    /// # Panics
    /// Panics if the embedded catalog is invalid TOML. This should never
    /// happen in practice since it is compiled into the binary and covered by
    /// tests.
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_toml(DEFAULT_CATALOG).expect("Failed to parse compiled-in course catalog")
    }

    /// Get a course by id
    #[must_use]
    pub fn get(&self, course_id: &str) -> Option<&Course> {
        self.index.get(course_id).map(|&i| &self.courses[i])
    }

    /// Check if a course exists in the catalog
    #[must_use]
    pub fn contains(&self, course_id: &str) -> bool {
        self.index.contains_key(course_id)
    }

    /// All courses in catalog order
    #[must_use]
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Number of courses
    #[must_use]
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Whether the catalog has no courses
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Display code for an id, falling back to the raw id
    #[must_use]
    pub fn code_for<'a>(&'a self, course_id: &'a str) -> &'a str {
        self.get(course_id).map_or(course_id, |c| c.code.as_str())
    }

    /// Credits for an id; unknown ids count zero
    #[must_use]
    pub fn credits_of(&self, course_id: &str) -> u32 {
        self.get(course_id).map_or(0, |c| c.credits)
    }

    /// Whether an id is a project; unknown ids are not
    #[must_use]
    pub fn is_project(&self, course_id: &str) -> bool {
        self.get(course_id).is_some_and(|c| c.is_project)
    }

    /// Whether an id is a theory course; unknown ids are not
    #[must_use]
    pub fn is_theory(&self, course_id: &str) -> bool {
        self.get(course_id).is_some_and(Course::is_theory)
    }

    /// Whether an id has an OPPE; unknown ids do not
    #[must_use]
    pub fn has_oppe(&self, course_id: &str) -> bool {
        self.get(course_id).is_some_and(|c| c.has_oppe)
    }

    /// Find a course by code (first match)
    #[must_use]
    pub fn find_by_code(&self, code: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.code.eq_ignore_ascii_case(code))
    }

    /// Resolve a user-supplied reference: an id first, then a code
    #[must_use]
    pub fn resolve(&self, reference: &str) -> Option<&Course> {
        self.get(reference).or_else(|| self.find_by_code(reference))
    }

    /// Requisite ids that do not exist in the catalog
    ///
    /// # Returns
    /// One message per dangling reference, in catalog order
    #[must_use]
    pub fn dangling_references(&self) -> Vec<String> {
        let mut missing = Vec::new();
        for course in &self.courses {
            for prereq in &course.prerequisites {
                if !self.contains(prereq) {
                    missing.push(format!(
                        "Course '{}': prerequisite '{prereq}' not found",
                        course.id
                    ));
                }
            }
            for coreq in &course.corequisites {
                if !self.contains(coreq) {
                    missing.push(format!(
                        "Course '{}': corequisite '{coreq}' not found",
                        course.id
                    ));
                }
            }
        }
        missing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::CourseType;

    fn course(id: &str, code: &str, credits: u32) -> Course {
        Course::new(
            id.to_string(),
            format!("Course {id}"),
            code.to_string(),
            credits,
            CourseType::Programming,
        )
    }

    #[test]
    fn test_embedded_catalog_parses() {
        let catalog = Catalog::embedded();

        assert_eq!(catalog.name, "IITM BS Diploma Level");
        assert_eq!(catalog.len(), 18);
        assert!(catalog.dangling_references().is_empty());

        let mlp = catalog.get("mlp").expect("mlp exists");
        assert_eq!(mlp.code, "BSCS2008");
        assert!(mlp.has_oppe);
        assert_eq!(mlp.prerequisites, vec!["mlf"]);
        assert_eq!(mlp.corequisites, vec!["mlt"]);
    }

    #[test]
    fn test_embedded_catalog_track_credits() {
        let catalog = Catalog::embedded();

        let programming: u32 = catalog
            .courses()
            .iter()
            .filter(|c| c.course_type == CourseType::Programming)
            .map(|c| c.credits)
            .sum();
        assert_eq!(programming, 27);
    }

    #[test]
    fn test_duplicate_ids_keep_first() {
        let catalog = Catalog::new(
            "dupes".to_string(),
            vec![course("a", "A1", 4), course("a", "A2", 2), course("b", "B1", 3)],
        );

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.code_for("a"), "A1");
    }

    #[test]
    fn test_unknown_ids_degrade() {
        let catalog = Catalog::new("one".to_string(), vec![course("a", "A1", 4)]);

        assert_eq!(catalog.code_for("ghost"), "ghost");
        assert_eq!(catalog.credits_of("ghost"), 0);
        assert!(!catalog.is_project("ghost"));
        assert!(!catalog.is_theory("ghost"));
        assert!(!catalog.has_oppe("ghost"));
        assert_eq!(catalog.credits_of("a"), 4);
    }

    #[test]
    fn test_resolve_by_id_or_code() {
        let catalog = Catalog::embedded();

        assert_eq!(catalog.resolve("mad2").map(|c| c.code.as_str()), Some("BSCS2006"));
        assert_eq!(catalog.resolve("bscs2006").map(|c| c.id.as_str()), Some("mad2"));
        assert!(catalog.resolve("BSXX0000").is_none());
    }

    #[test]
    fn test_dangling_references_reported() {
        let mut broken = course("b", "B1", 4);
        broken.add_prerequisite("missing");
        let catalog = Catalog::new("broken".to_string(), vec![broken]);

        let missing = catalog.dangling_references();
        assert_eq!(missing.len(), 1);
        assert!(missing[0].contains("'missing'"));
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let result = Catalog::from_toml("[[courses]]\nid = \"x\"\n");
        assert!(matches!(result, Err(PlannerError::CatalogParse { .. })));
    }
}
