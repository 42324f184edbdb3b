//! Lookups the graph builder consumes, and an in-memory catalog backing them.

use std::collections::{HashMap, HashSet};

use log::info;
use serde::de::DeserializeOwned;

use super::error::CatalogError;
use super::types::{CourseMetadata, EnrollmentRecord, TrackDefinition};

const BUNDLED_TRACKS: &str = include_str!("../../fixtures/tracks.json");
const BUNDLED_COURSES: &str = include_str!("../../fixtures/courses.json");
const BUNDLED_ENROLLMENTS: &str = include_str!("../../fixtures/enrollments.json");

/// Resolves a track identifier to its definition.
pub trait TrackLookup {
	/// Returns `None` when the track does not exist.
	fn track(&self, track_id: &str) -> Option<&TrackDefinition>;
}

/// Resolves a course identifier to its catalog record.
pub trait CourseLookup {
	/// Returns `None` when the course does not exist.
	fn course(&self, course_id: &str) -> Option<&CourseMetadata>;
}

/// Per-user enrollment records.
pub trait EnrollmentResolver {
	/// Returns `None` when the user is not enrolled in the course.
	fn enrollment(&self, user_id: &str, course_id: &str) -> Option<&EnrollmentRecord>;
}

impl CourseLookup for [CourseMetadata] {
	fn course(&self, course_id: &str) -> Option<&CourseMetadata> {
		self.iter().find(|c| c.id == course_id)
	}
}

impl CourseLookup for HashMap<String, CourseMetadata> {
	fn course(&self, course_id: &str) -> Option<&CourseMetadata> {
		self.get(course_id)
	}
}

impl EnrollmentResolver for HashMap<String, Vec<EnrollmentRecord>> {
	fn enrollment(&self, user_id: &str, course_id: &str) -> Option<&EnrollmentRecord> {
		self.get(user_id)?.iter().find(|e| e.course_id == course_id)
	}
}

/// Enrollment of an optional user. Without a user nothing is enrolled.
pub fn resolve_enrollment<'a, E>(
	enrollments: &'a E,
	user_id: Option<&str>,
	course_id: &str,
) -> Option<&'a EnrollmentRecord>
where
	E: EnrollmentResolver + ?Sized,
{
	enrollments.enrollment(user_id?, course_id)
}

/// Tracks, courses and enrollments held in memory.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
	tracks: Vec<TrackDefinition>,
	courses: HashMap<String, CourseMetadata>,
	enrollments: HashMap<String, Vec<EnrollmentRecord>>,
}

impl Catalog {
	/// Builds a catalog from already parsed records.
	pub fn new(
		tracks: Vec<TrackDefinition>,
		courses: Vec<CourseMetadata>,
		enrollments: HashMap<String, Vec<EnrollmentRecord>>,
	) -> Result<Self, CatalogError> {
		let mut track_ids = HashSet::new();
		for track in &tracks {
			if !track_ids.insert(track.id.as_str()) {
				return Err(CatalogError::DuplicateTrack(track.id.clone()));
			}
		}

		let mut by_id = HashMap::with_capacity(courses.len());
		for course in courses {
			if by_id.contains_key(&course.id) {
				return Err(CatalogError::DuplicateCourse(course.id));
			}
			by_id.insert(course.id.clone(), course);
		}

		for (user_id, records) in &enrollments {
			if let Some(bad) = records.iter().find(|r| r.progress > 100) {
				return Err(CatalogError::ProgressOutOfRange {
					user_id: user_id.clone(),
					course_id: bad.course_id.clone(),
					progress: bad.progress,
				});
			}
		}

		Ok(Self {
			tracks,
			courses: by_id,
			enrollments,
		})
	}

	/// Parses the three JSON fixtures and validates them.
	///
	/// `enrollments` is an object keyed by user id, each value a list of
	/// enrollment records.
	pub fn from_json(tracks: &str, courses: &str, enrollments: &str) -> Result<Self, CatalogError> {
		let catalog = Self::new(
			parse("tracks", tracks)?,
			parse("courses", courses)?,
			parse("enrollments", enrollments)?,
		)?;
		info!(
			"Catalog loaded: {} tracks, {} courses, {} users",
			catalog.tracks.len(),
			catalog.courses.len(),
			catalog.enrollments.len()
		);
		Ok(catalog)
	}

	/// The fixture set compiled into the binary.
	pub fn bundled() -> Result<Self, CatalogError> {
		Self::from_json(BUNDLED_TRACKS, BUNDLED_COURSES, BUNDLED_ENROLLMENTS)
	}

	/// Tracks in catalog order.
	pub fn tracks(&self) -> &[TrackDefinition] {
		&self.tracks
	}
}

fn parse<T: DeserializeOwned>(source_name: &'static str, json: &str) -> Result<T, CatalogError> {
	serde_json::from_str(json).map_err(|error| CatalogError::Parse { source_name, error })
}

impl TrackLookup for Catalog {
	fn track(&self, track_id: &str) -> Option<&TrackDefinition> {
		self.tracks.iter().find(|t| t.id == track_id)
	}
}

impl CourseLookup for Catalog {
	fn course(&self, course_id: &str) -> Option<&CourseMetadata> {
		self.courses.course(course_id)
	}
}

impl EnrollmentResolver for Catalog {
	fn enrollment(&self, user_id: &str, course_id: &str) -> Option<&EnrollmentRecord> {
		self.enrollments.enrollment(user_id, course_id)
	}
}
