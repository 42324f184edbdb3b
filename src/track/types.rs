//! Track, course and enrollment records, and the graph model built from them.

use serde::{Deserialize, Serialize};

/// A course slot inside a track. `position` decides display order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackCourseRef {
	/// Course catalog identifier.
	pub course_id: String,
	/// Sort key within the track. Not necessarily contiguous.
	pub position: u32,
	/// Whether the course is mandatory for finishing the track.
	pub required: bool,
}

/// A curated learning path.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackDefinition {
	/// Unique identifier, used in the `/tracks/:id` route.
	pub id: String,
	/// Display title.
	pub title: String,
	/// Short description shown in the track list.
	pub description: String,
	/// Difficulty label, e.g. "Beginner".
	pub level: String,
	/// Average rating out of 5.
	pub rating: f32,
	/// Number of ratings behind `rating`.
	pub reviews: u32,
	/// Course slots. Array order is not trusted, see `position`.
	pub courses: Vec<TrackCourseRef>,
}

/// Course record owned by the course catalog.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseMetadata {
	/// Unique identifier.
	pub id: String,
	/// Display title, also used as the node label.
	pub title: String,
	/// Long form description.
	pub description: String,
	/// Stated length of the course in hours.
	pub duration_hours: u32,
	/// Skills taught, in catalog order.
	pub skills: Vec<String>,
	/// Instructor display name. Instructors are identified by name.
	pub instructor: String,
	/// Instructor avatar URL.
	pub instructor_avatar: String,
	/// Instructor role or title.
	pub instructor_role: String,
}

/// A user's progress against one course. Presence means enrolled.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentRecord {
	/// Course the record belongs to.
	pub course_id: String,
	/// Percentage complete, `0..=100`.
	pub progress: u8,
}

/// Coarse completion status of a resolved course.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CourseStatus {
	/// Progress reached 100.
	Completed,
	/// Enrolled with progress strictly between 0 and 100.
	InProgress,
	/// Not enrolled, or enrolled without progress.
	NotStarted,
}

/// Course metadata merged with the current user's enrollment.
///
/// Rebuilt from scratch on every build and never stored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedCourseState {
	/// Course identifier, also the node id.
	pub course_id: String,
	/// Catalog record for the course.
	pub metadata: CourseMetadata,
	/// Position copied from the track slot.
	pub position: u32,
	/// Required flag copied from the track slot.
	pub required: bool,
	/// Whether the user has an enrollment record for the course.
	pub enrolled: bool,
	/// Enrollment progress, 0 when not enrolled.
	pub progress: u8,
	/// `progress == 100`.
	pub completed: bool,
	/// `enrolled && 0 < progress < 100`.
	pub in_progress: bool,
}

impl ResolvedCourseState {
	/// Status used by renderers to pick node colors.
	pub fn status(&self) -> CourseStatus {
		if self.completed {
			CourseStatus::Completed
		} else if self.in_progress {
			CourseStatus::InProgress
		} else {
			CourseStatus::NotStarted
		}
	}
}

/// One distinct instructor appearing in a track.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstructorSummary {
	/// Instructor name.
	pub name: String,
	/// Avatar URL taken from the first course taught by this instructor.
	pub avatar: String,
	/// Role taken from the first course taught by this instructor.
	pub role: String,
}

/// Graph-space coordinates of a node's top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
	/// Horizontal offset, grows to the right.
	pub x: f64,
	/// Vertical offset, grows downward.
	pub y: f64,
}

/// Side of a node where an edge attaches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
	/// Left edge of the card.
	Left,
	/// Right edge of the card.
	Right,
}

/// Renderer payload of a node: the resolved state plus a label.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NodeData {
	/// Merged course state, flattened into the payload.
	#[serde(flatten)]
	pub state: ResolvedCourseState,
	/// Copy of the course title.
	pub label: String,
}

/// A course placed in the sequence graph.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphNode {
	/// Course identifier.
	pub id: String,
	/// Top-left corner in graph space.
	pub position: Position,
	/// Side outgoing edges leave from.
	pub source_side: Side,
	/// Side incoming edges arrive at.
	pub target_side: Side,
	/// Renderer payload.
	pub data: NodeData,
}

/// Color token of an edge, mapped to a concrete color by the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EdgeTone {
	/// The predecessor course is completed.
	Completed,
	/// The predecessor course is not completed yet.
	Pending,
}

/// Directed link between two consecutive courses.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphEdge {
	/// Pair index plus endpoints, unique within one graph.
	pub id: String,
	/// Source node id.
	pub source: String,
	/// Target node id.
	pub target: String,
	/// Whether the renderer should animate the edge.
	pub animated: bool,
	/// Stroke width in graph units.
	pub stroke_weight: u32,
	/// Color the renderer strokes the edge with.
	pub color_token: EdgeTone,
}

/// Counts and totals derived from the resolved course list.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackSummary {
	/// Courses that resolved against the catalog.
	pub total_courses: usize,
	/// Courses at 100%.
	pub completed_courses: usize,
	/// Enrolled courses strictly between 0% and 100%.
	pub in_progress_courses: usize,
	/// Courses the track marks as required.
	pub required_courses: usize,
	/// Sum of stated course durations.
	pub total_hours: u32,
	/// Stated hours scaled by each course's unfinished share.
	pub remaining_hours: u32,
	/// Distinct skills across the track in display order.
	pub skills: Vec<String>,
}

/// Everything a diagram renderer and the summary UI need for one track.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphModel {
	/// Courses in display order.
	pub nodes: Vec<GraphNode>,
	/// Links between consecutive courses.
	pub edges: Vec<GraphEdge>,
	/// Distinct instructors in first-seen order.
	pub instructors: Vec<InstructorSummary>,
	/// Mean progress over enrolled courses, `0..=100`.
	pub track_progress: u8,
	/// Counts, hours and skills for the summary panel.
	pub summary: TrackSummary,
}

impl GraphModel {
	/// Number of completed courses in the graph.
	pub fn completed_count(&self) -> usize {
		self.nodes.iter().filter(|n| n.data.state.completed).count()
	}

	/// Number of in-progress courses in the graph.
	pub fn in_progress_count(&self) -> usize {
		self.nodes.iter().filter(|n| n.data.state.in_progress).count()
	}

	/// True when no course resolved.
	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}
}
