//! Zigzag placement of resolved courses and the sequential edges between them.

use super::types::{EdgeTone, GraphEdge, GraphNode, NodeData, Position, ResolvedCourseState, Side};

/// Stroke weight of an edge leaving a completed course.
pub const COMPLETED_STROKE: u32 = 3;
/// Stroke weight of every other edge.
pub const PENDING_STROKE: u32 = 2;

/// Layout constants for the two-column sequence.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutParams {
	/// x of nodes at even indices.
	pub left_x: f64,
	/// x of nodes at odd indices.
	pub right_x: f64,
	/// Vertical distance between consecutive nodes.
	pub row_spacing: f64,
}

impl Default for LayoutParams {
	fn default() -> Self {
		Self {
			left_x: 100.0,
			right_x: 400.0,
			row_spacing: 250.0,
		}
	}
}

/// Places `courses` top to bottom, alternating columns.
///
/// Even indices sit in the left column and hand off to the right; odd indices
/// sit in the right column and hand off to the left, giving an S-curve.
pub fn build_nodes(courses: &[ResolvedCourseState], params: &LayoutParams) -> Vec<GraphNode> {
	courses
		.iter()
		.enumerate()
		.map(|(i, state)| {
			let even = i % 2 == 0;
			let (source_side, target_side) = if even {
				(Side::Right, Side::Left)
			} else {
				(Side::Left, Side::Right)
			};

			GraphNode {
				id: state.course_id.clone(),
				position: Position {
					x: if even { params.left_x } else { params.right_x },
					y: i as f64 * params.row_spacing,
				},
				source_side,
				target_side,
				data: NodeData {
					state: state.clone(),
					label: state.metadata.title.clone(),
				},
			}
		})
		.collect()
}

/// One edge per consecutive pair, styled by whether the predecessor is completed.
///
/// Edge ids lead with the pair index, so hyphenated course ids cannot collide.
pub fn build_edges(courses: &[ResolvedCourseState]) -> Vec<GraphEdge> {
	courses
		.windows(2)
		.enumerate()
		.map(|(i, pair)| {
			let (from, to) = (&pair[0], &pair[1]);
			let (stroke_weight, color_token) = if from.completed {
				(COMPLETED_STROKE, EdgeTone::Completed)
			} else {
				(PENDING_STROKE, EdgeTone::Pending)
			};

			GraphEdge {
				id: format!("e{}-{}-{}", i, from.course_id, to.course_id),
				source: from.course_id.clone(),
				target: to.course_id.clone(),
				animated: from.completed,
				stroke_weight,
				color_token,
			}
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::track::state::resolve_track;
	use crate::track::state::tests::{course, enrolled, slot, track};

	fn resolve(n: usize, progress: &[(&str, u8)]) -> Vec<ResolvedCourseState> {
		let ids = ["a", "b", "c", "d", "e"];
		let courses: Vec<_> = ids.iter().map(|id| course(id, "x")).collect();
		let slots = ids[..n]
			.iter()
			.enumerate()
			.map(|(i, id)| slot(id, i as u32 * 10))
			.collect();
		resolve_track(&track(slots), &courses[..], &enrolled("u", progress), Some("u"))
	}

	#[test]
	fn zigzag_positions_and_sides() {
		let nodes = build_nodes(&resolve(4, &[]), &LayoutParams::default());
		let coords: Vec<_> = nodes.iter().map(|n| (n.position.x, n.position.y)).collect();
		assert_eq!(coords, [(100.0, 0.0), (400.0, 250.0), (100.0, 500.0), (400.0, 750.0)]);

		assert_eq!((nodes[0].source_side, nodes[0].target_side), (Side::Right, Side::Left));
		assert_eq!((nodes[1].source_side, nodes[1].target_side), (Side::Left, Side::Right));
		assert_eq!((nodes[2].source_side, nodes[2].target_side), (Side::Right, Side::Left));
	}

	#[test]
	fn node_label_is_course_title() {
		let nodes = build_nodes(&resolve(1, &[]), &LayoutParams::default());
		assert_eq!(nodes[0].id, "a");
		assert_eq!(nodes[0].data.label, "Course a");
		assert_eq!(nodes[0].data.state.course_id, "a");
	}

	#[test]
	fn edges_chain_consecutive_courses() {
		let edges = build_edges(&resolve(4, &[]));
		assert_eq!(edges.len(), 3);
		for (edge, (s, t)) in edges.iter().zip([("a", "b"), ("b", "c"), ("c", "d")]) {
			assert_eq!(edge.source, s);
			assert_eq!(edge.target, t);
		}
		assert_eq!(edges[0].id, "e0-a-b");
	}

	#[test]
	fn predecessor_completion_drives_edge_style() {
		let edges = build_edges(&resolve(3, &[("a", 100), ("b", 40), ("c", 100)]));

		assert!(edges[0].animated);
		assert_eq!(edges[0].color_token, EdgeTone::Completed);
		assert_eq!(edges[0].stroke_weight, COMPLETED_STROKE);

		// b is incomplete even though c is done
		assert!(!edges[1].animated);
		assert_eq!(edges[1].color_token, EdgeTone::Pending);
		assert_eq!(edges[1].stroke_weight, PENDING_STROKE);
	}

	#[test]
	fn hyphenated_course_ids_get_distinct_edge_ids() {
		let courses: Vec<_> = ["a", "b-c", "a-b", "c"].iter().map(|id| course(id, "x")).collect();
		let t = track(vec![slot("a", 1), slot("b-c", 2), slot("a-b", 3), slot("c", 4)]);
		let edges = build_edges(&resolve_track(&t, &courses[..], &enrolled("u", &[]), None));

		let ids: Vec<_> = edges.iter().map(|e| e.id.as_str()).collect();
		assert_eq!(ids, ["e0-a-b-c", "e1-b-c-a-b", "e2-a-b-c"]);
		let unique: std::collections::HashSet<_> = ids.iter().collect();
		assert_eq!(unique.len(), edges.len());
	}

	#[test]
	fn short_sequences_have_no_edges() {
		assert!(build_edges(&[]).is_empty());
		assert!(build_edges(&resolve(1, &[])).is_empty());
		assert!(build_nodes(&[], &LayoutParams::default()).is_empty());
	}
}
