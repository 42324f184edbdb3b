//! Merges course metadata with enrollments into per-course state.

use log::warn;

use super::catalog::{CourseLookup, EnrollmentResolver, resolve_enrollment};
use super::types::{ResolvedCourseState, TrackCourseRef, TrackDefinition};

/// Resolves one track slot. `None` when the course is missing from the catalog.
pub fn derive_course_state<C, E>(
	course_ref: &TrackCourseRef,
	courses: &C,
	enrollments: &E,
	user_id: Option<&str>,
) -> Option<ResolvedCourseState>
where
	C: CourseLookup + ?Sized,
	E: EnrollmentResolver + ?Sized,
{
	let metadata = courses.course(&course_ref.course_id)?;
	let enrollment = resolve_enrollment(enrollments, user_id, &course_ref.course_id);

	let enrolled = enrollment.is_some();
	let progress = enrollment.map_or(0, |e| e.progress);

	Some(ResolvedCourseState {
		course_id: course_ref.course_id.clone(),
		metadata: metadata.clone(),
		position: course_ref.position,
		required: course_ref.required,
		enrolled,
		progress,
		completed: progress == 100,
		in_progress: enrolled && progress > 0 && progress < 100,
	})
}

/// Resolves every slot of `track` and returns them in display order.
///
/// Slots whose course is unknown are dropped. Ordering is a stable sort on
/// `position`, so ties keep their input order.
pub fn resolve_track<C, E>(
	track: &TrackDefinition,
	courses: &C,
	enrollments: &E,
	user_id: Option<&str>,
) -> Vec<ResolvedCourseState>
where
	C: CourseLookup + ?Sized,
	E: EnrollmentResolver + ?Sized,
{
	let mut resolved: Vec<ResolvedCourseState> = track
		.courses
		.iter()
		.filter_map(|course_ref| {
			let state = derive_course_state(course_ref, courses, enrollments, user_id);
			if state.is_none() {
				warn!(
					"Track {}: course {} not found in catalog, skipping",
					track.id, course_ref.course_id
				);
			}
			state
		})
		.collect();

	resolved.sort_by_key(|s| s.position);
	resolved
}

#[cfg(test)]
pub(crate) mod tests {
	use std::collections::HashMap;

	use super::*;
	use crate::track::types::{CourseMetadata, EnrollmentRecord};

	pub(crate) fn course(id: &str, instructor: &str) -> CourseMetadata {
		CourseMetadata {
			id: id.to_string(),
			title: format!("Course {}", id),
			description: String::new(),
			duration_hours: 10,
			skills: vec![format!("skill-{}", id)],
			instructor: instructor.to_string(),
			instructor_avatar: format!("/avatars/{}-{}.png", instructor, id),
			instructor_role: format!("{} role", id),
		}
	}

	pub(crate) fn slot(course_id: &str, position: u32) -> TrackCourseRef {
		TrackCourseRef {
			course_id: course_id.to_string(),
			position,
			required: true,
		}
	}

	pub(crate) fn track(slots: Vec<TrackCourseRef>) -> TrackDefinition {
		TrackDefinition {
			id: "track".to_string(),
			title: "Track".to_string(),
			description: String::new(),
			level: "Beginner".to_string(),
			rating: 4.0,
			reviews: 0,
			courses: slots,
		}
	}

	pub(crate) fn enrolled(user: &str, records: &[(&str, u8)]) -> HashMap<String, Vec<EnrollmentRecord>> {
		let records = records
			.iter()
			.map(|&(course_id, progress)| EnrollmentRecord {
				course_id: course_id.to_string(),
				progress,
			})
			.collect();
		HashMap::from([(user.to_string(), records)])
	}

	pub(crate) fn nobody() -> HashMap<String, Vec<EnrollmentRecord>> {
		HashMap::new()
	}

	#[test]
	fn derives_completion_flags() {
		let courses = vec![course("a", "x"), course("b", "x"), course("c", "x"), course("d", "x")];
		let store = enrolled("u", &[("a", 100), ("b", 40), ("c", 0)]);

		let state = |id: &str| derive_course_state(&slot(id, 1), &courses[..], &store, Some("u")).unwrap();

		let a = state("a");
		assert!(a.enrolled && a.completed && !a.in_progress);

		let b = state("b");
		assert!(b.enrolled && !b.completed && b.in_progress);
		assert_eq!(b.progress, 40);

		let c = state("c");
		assert!(c.enrolled && !c.completed && !c.in_progress);

		let d = state("d");
		assert!(!d.enrolled && !d.completed && !d.in_progress);
		assert_eq!(d.progress, 0);
	}

	#[test]
	fn anonymous_user_is_never_enrolled() {
		let courses = vec![course("a", "x")];
		let store = enrolled("u", &[("a", 100)]);

		let a = derive_course_state(&slot("a", 1), &courses[..], &store, None).unwrap();
		assert!(!a.enrolled);
		assert!(!a.completed);
		assert_eq!(a.progress, 0);
	}

	#[test]
	fn missing_course_yields_nothing() {
		let courses = vec![course("a", "x")];
		assert!(derive_course_state(&slot("zz", 1), &courses[..], &nobody(), None).is_none());
	}

	#[test]
	fn sorts_by_position_and_drops_unknown() {
		let courses = vec![course("a", "x"), course("b", "x"), course("c", "x")];
		let t = track(vec![slot("c", 3), slot("gone", 0), slot("a", 1), slot("b", 2)]);

		let resolved = resolve_track(&t, &courses[..], &nobody(), None);
		let ids: Vec<_> = resolved.iter().map(|s| s.course_id.as_str()).collect();
		assert_eq!(ids, ["a", "b", "c"]);
	}

	#[test]
	fn position_ties_keep_input_order() {
		let courses = vec![course("a", "x"), course("b", "x"), course("c", "x")];
		let t = track(vec![slot("b", 5), slot("c", 1), slot("a", 5)]);

		let resolved = resolve_track(&t, &courses[..], &nobody(), None);
		let ids: Vec<_> = resolved.iter().map(|s| s.course_id.as_str()).collect();
		assert_eq!(ids, ["c", "b", "a"]);
	}
}
