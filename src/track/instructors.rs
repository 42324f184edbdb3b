use std::collections::HashSet;

use super::types::{InstructorSummary, ResolvedCourseState};

/// Distinct instructors of `courses`, in first-seen order.
///
/// Avatar and role come from the first course taught by each instructor.
pub fn aggregate_instructors(courses: &[ResolvedCourseState]) -> Vec<InstructorSummary> {
	let mut seen = HashSet::new();
	courses
		.iter()
		.filter(|c| seen.insert(c.metadata.instructor.as_str()))
		.map(|c| InstructorSummary {
			name: c.metadata.instructor.clone(),
			avatar: c.metadata.instructor_avatar.clone(),
			role: c.metadata.instructor_role.clone(),
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::track::state::resolve_track;
	use crate::track::state::tests::{course, nobody, slot, track};

	#[test]
	fn first_course_wins_per_instructor() {
		let courses = vec![course("a", "ada"), course("b", "grace"), course("c", "ada")];
		let t = track(vec![slot("c", 3), slot("a", 1), slot("b", 2)]);
		let resolved = resolve_track(&t, &courses[..], &nobody(), None);

		let instructors = aggregate_instructors(&resolved);
		assert_eq!(instructors.len(), 2);
		assert_eq!(instructors[0].name, "ada");
		assert_eq!(instructors[0].avatar, "/avatars/ada-a.png");
		assert_eq!(instructors[0].role, "a role");
		assert_eq!(instructors[1].name, "grace");
	}

	#[test]
	fn empty_track_has_no_instructors() {
		assert!(aggregate_instructors(&[]).is_empty());
	}
}
