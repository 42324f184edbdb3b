//! Learning track progression graph.
//!
//! A build takes a track definition, a course catalog, an enrollment store and
//! an optional user, and produces a fresh [`GraphModel`]. Nothing is cached
//! between builds.

mod catalog;
mod error;
mod instructors;
mod layout;
mod progress;
mod state;
mod types;

use log::debug;

pub use catalog::{Catalog, CourseLookup, EnrollmentResolver, TrackLookup, resolve_enrollment};
pub use error::CatalogError;
pub use instructors::aggregate_instructors;
pub use layout::{COMPLETED_STROKE, LayoutParams, PENDING_STROKE, build_edges, build_nodes};
pub use progress::{summarize, track_progress};
pub use state::{derive_course_state, resolve_track};
pub use types::{
	CourseMetadata, CourseStatus, EdgeTone, EnrollmentRecord, GraphEdge, GraphModel, GraphNode,
	InstructorSummary, NodeData, Position, ResolvedCourseState, Side, TrackCourseRef,
	TrackDefinition, TrackSummary,
};

/// Builds the graph model of `track` for `user_id` with the default layout.
pub fn build_track_graph<C, E>(
	track: &TrackDefinition,
	courses: &C,
	enrollments: &E,
	user_id: Option<&str>,
) -> GraphModel
where
	C: CourseLookup + ?Sized,
	E: EnrollmentResolver + ?Sized,
{
	build_track_graph_with(track, courses, enrollments, user_id, &LayoutParams::default())
}

/// Builds the graph model of `track` for `user_id` with custom layout constants.
pub fn build_track_graph_with<C, E>(
	track: &TrackDefinition,
	courses: &C,
	enrollments: &E,
	user_id: Option<&str>,
	params: &LayoutParams,
) -> GraphModel
where
	C: CourseLookup + ?Sized,
	E: EnrollmentResolver + ?Sized,
{
	let resolved = resolve_track(track, courses, enrollments, user_id);

	let model = GraphModel {
		nodes: build_nodes(&resolved, params),
		edges: build_edges(&resolved),
		instructors: aggregate_instructors(&resolved),
		track_progress: track_progress(&resolved),
		summary: summarize(&resolved),
	};

	debug!(
		"Built graph for track {}: {} nodes, {} edges, {}% complete",
		track.id,
		model.nodes.len(),
		model.edges.len(),
		model.track_progress
	);
	model
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::track::state::tests::{course, enrolled, nobody, slot, track};

	#[test]
	fn empty_track_builds_empty_model() {
		let courses: Vec<CourseMetadata> = Vec::new();
		let model = build_track_graph(&track(vec![]), &courses[..], &nobody(), Some("u"));
		assert!(model.is_empty());
		assert!(model.edges.is_empty());
		assert!(model.instructors.is_empty());
		assert_eq!(model.track_progress, 0);
	}

	#[test]
	fn all_courses_missing_builds_empty_model() {
		let courses = vec![course("a", "x")];
		let t = track(vec![slot("p", 1), slot("q", 2)]);
		let model = build_track_graph(&t, &courses[..], &nobody(), None);
		assert!(model.is_empty());
		assert!(model.edges.is_empty());
	}

	#[test]
	fn counts_follow_nodes() {
		let courses = vec![course("a", "x"), course("b", "y"), course("c", "x")];
		let t = track(vec![slot("a", 1), slot("b", 2), slot("c", 3)]);
		let store = enrolled("u", &[("a", 100), ("b", 40)]);

		let model = build_track_graph(&t, &courses[..], &store, Some("u"));
		assert_eq!(model.completed_count(), 1);
		assert_eq!(model.in_progress_count(), 1);
		assert_eq!(model.summary.completed_courses, 1);
		assert_eq!(model.track_progress, 70);
		assert_eq!(model.instructors.len(), 2);
	}

	#[test]
	fn custom_layout_params_apply() {
		let courses = vec![course("a", "x"), course("b", "x")];
		let t = track(vec![slot("a", 1), slot("b", 2)]);
		let params = LayoutParams {
			left_x: 0.0,
			right_x: 50.0,
			row_spacing: 10.0,
		};

		let model = build_track_graph_with(&t, &courses[..], &nobody(), None, &params);
		assert_eq!(model.nodes[1].position, Position { x: 50.0, y: 10.0 });
	}
}
