use thiserror::Error;

/// Failure while loading catalog fixtures.
#[derive(Debug, Error)]
pub enum CatalogError {
	/// A fixture is not valid JSON for its record type.
	#[error("failed to parse {source_name}: {error}")]
	Parse {
		/// Which fixture failed.
		source_name: &'static str,
		/// Underlying parser error.
		#[source]
		error: serde_json::Error,
	},

	/// An enrollment record outside `0..=100`.
	#[error("progress {progress} for user {user_id} on course {course_id} is out of range")]
	ProgressOutOfRange {
		/// Owner of the record.
		user_id: String,
		/// Course of the record.
		course_id: String,
		/// Offending value.
		progress: u8,
	},

	/// Two courses share an identifier.
	#[error("duplicate course id: {0}")]
	DuplicateCourse(String),

	/// Two tracks share an identifier.
	#[error("duplicate track id: {0}")]
	DuplicateTrack(String),
}
