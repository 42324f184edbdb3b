//! Track-level reductions over the resolved course list.

use std::collections::HashSet;

use super::types::{ResolvedCourseState, TrackSummary};

/// Mean progress of enrolled courses, rounded half up. 0 when nothing is enrolled.
///
/// Every enrolled course weighs the same regardless of its duration.
pub fn track_progress(courses: &[ResolvedCourseState]) -> u8 {
	let (sum, count) = courses
		.iter()
		.filter(|c| c.enrolled)
		.fold((0u32, 0u32), |(sum, count), c| (sum + u32::from(c.progress), count + 1));

	if count == 0 {
		return 0;
	}
	// round(sum / count) with halves going up, in integers
	((2 * sum + count) / (2 * count)) as u8
}

/// Counts, hours and skills for the summary panel.
pub fn summarize(courses: &[ResolvedCourseState]) -> TrackSummary {
	let mut seen = HashSet::new();
	let skills = courses
		.iter()
		.flat_map(|c| c.metadata.skills.iter())
		.filter(|s| seen.insert(s.as_str()))
		.cloned()
		.collect();

	let total_hours = courses.iter().map(|c| c.metadata.duration_hours).sum();
	let remaining_centi_hours: u32 = courses
		.iter()
		.map(|c| c.metadata.duration_hours * u32::from(100u8.saturating_sub(c.progress)))
		.sum();

	TrackSummary {
		total_courses: courses.len(),
		completed_courses: courses.iter().filter(|c| c.completed).count(),
		in_progress_courses: courses.iter().filter(|c| c.in_progress).count(),
		required_courses: courses.iter().filter(|c| c.required).count(),
		total_hours,
		remaining_hours: (remaining_centi_hours + 50) / 100,
		skills,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::track::state::resolve_track;
	use crate::track::state::tests::{course, enrolled, nobody, slot, track};

	fn resolve(progress: &[(&str, u8)]) -> Vec<ResolvedCourseState> {
		let courses = vec![course("a", "x"), course("b", "x"), course("c", "x")];
		let t = track(vec![slot("a", 1), slot("b", 2), slot("c", 3)]);
		resolve_track(&t, &courses[..], &enrolled("u", progress), Some("u"))
	}

	#[test]
	fn averages_enrolled_courses_only() {
		assert_eq!(track_progress(&resolve(&[("a", 100), ("b", 40)])), 70);
	}

	#[test]
	fn zero_without_enrollments() {
		assert_eq!(track_progress(&resolve(&[])), 0);
		assert_eq!(track_progress(&[]), 0);
	}

	#[test]
	fn rounds_half_up() {
		// 25 + 50 = 75 / 2 = 37.5
		assert_eq!(track_progress(&resolve(&[("a", 25), ("b", 50)])), 38);
		// 10 + 10 + 11 = 31 / 3 = 10.33
		assert_eq!(track_progress(&resolve(&[("a", 10), ("b", 10), ("c", 11)])), 10);
	}

	#[test]
	fn enrolled_at_zero_counts() {
		assert_eq!(track_progress(&resolve(&[("a", 100), ("b", 0)])), 50);
	}

	#[test]
	fn summary_counts_and_hours() {
		let summary = summarize(&resolve(&[("a", 100), ("b", 50)]));
		assert_eq!(summary.total_courses, 3);
		assert_eq!(summary.completed_courses, 1);
		assert_eq!(summary.in_progress_courses, 1);
		assert_eq!(summary.required_courses, 3);
		assert_eq!(summary.total_hours, 30);
		// a done, b half done, c untouched
		assert_eq!(summary.remaining_hours, 15);
		assert_eq!(summary.skills, ["skill-a", "skill-b", "skill-c"]);
	}

	#[test]
	fn summary_of_empty_track() {
		let courses = vec![course("a", "x")];
		let t = track(vec![slot("missing", 1)]);
		let summary = summarize(&resolve_track(&t, &courses[..], &nobody(), None));
		assert_eq!(summary, TrackSummary::default());
	}
}
