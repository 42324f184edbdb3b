use std::collections::{HashMap, HashSet};

use crate::track::{GraphModel, GraphNode, Side};

/// Card size in graph units.
pub const NODE_WIDTH: f64 = 220.0;
pub const NODE_HEIGHT: f64 = 96.0;
/// Horizontal reach of edge curves out of a node side.
pub const EDGE_REACH: f64 = 80.0;

const TOP_PADDING: f64 = 48.0;

#[derive(Clone, Debug, Default)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

#[derive(Clone, Debug, Default)]
pub struct HoverState {
	pub node: Option<usize>,
	pub neighbors: HashSet<usize>,
	pub highlight_t: f64,
	pub prev_node: Option<usize>,
	pub prev_neighbors: HashSet<usize>,
	delay_t: f64,
}

/// Canvas-side view of one graph model.
pub struct TrackGraphState {
	pub model: GraphModel,
	pub transform: ViewTransform,
	pub pan: PanState,
	pub hover: HoverState,
	pub width: f64,
	pub height: f64,
	pub flow_time: f64,
	/// Edge endpoints as node indices, parallel to `model.edges`.
	links: Vec<Option<(usize, usize)>>,
}

impl TrackGraphState {
	pub fn new(model: &GraphModel, width: f64, height: f64) -> Self {
		let index: HashMap<&str, usize> = model
			.nodes
			.iter()
			.enumerate()
			.map(|(i, n)| (n.id.as_str(), i))
			.collect();
		let links = model
			.edges
			.iter()
			.map(|e| Some((*index.get(e.source.as_str())?, *index.get(e.target.as_str())?)))
			.collect();

		// center the two columns horizontally
		let (min_x, max_x) = model.nodes.iter().fold((f64::MAX, f64::MIN), |(lo, hi), n| {
			(lo.min(n.position.x), hi.max(n.position.x + NODE_WIDTH))
		});
		let graph_center = if model.nodes.is_empty() {
			0.0
		} else {
			(min_x + max_x) / 2.0
		};

		Self {
			model: model.clone(),
			links,
			transform: ViewTransform {
				x: width / 2.0 - graph_center,
				y: TOP_PADDING,
				k: 1.0,
			},
			pan: PanState::default(),
			hover: HoverState::default(),
			width,
			height,
			flow_time: 0.0,
		}
	}

	/// Node indices of each drawable edge, with its position in `model.edges`.
	pub fn links(&self) -> impl Iterator<Item = (usize, usize, usize)> + '_ {
		self.links
			.iter()
			.enumerate()
			.filter_map(|(i, link)| link.map(|(s, t)| (i, s, t)))
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<usize> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		self.model.nodes.iter().position(|n| {
			gx >= n.position.x
				&& gx <= n.position.x + NODE_WIDTH
				&& gy >= n.position.y
				&& gy <= n.position.y + NODE_HEIGHT
		})
	}

	pub fn set_hover(&mut self, node: Option<usize>) {
		if self.hover.node == node {
			return;
		}
		let was_hovering = self.hover.node.is_some();

		// keep the old highlight around while it fades out
		if was_hovering && node.is_none() {
			self.hover.prev_node = self.hover.node.take();
			self.hover.prev_neighbors = std::mem::take(&mut self.hover.neighbors);
		} else {
			self.hover.prev_node = None;
			self.hover.prev_neighbors.clear();
		}

		self.hover.node = node;
		self.hover.neighbors.clear();

		if let Some(idx) = node {
			if !was_hovering {
				self.hover.delay_t = 0.0;
			}
			let neighbors: Vec<usize> = self
				.links()
				.filter_map(|(_, src, tgt)| {
					if src == idx {
						Some(tgt)
					} else if tgt == idx {
						Some(src)
					} else {
						None
					}
				})
				.collect();
			self.hover.neighbors.extend(neighbors);
		}
	}

	pub fn is_highlighted(&self, idx: usize) -> bool {
		self.hover.node == Some(idx)
			|| self.hover.neighbors.contains(&idx)
			|| self.hover.prev_node == Some(idx)
			|| self.hover.prev_neighbors.contains(&idx)
	}

	pub fn is_hovered(&self, idx: usize) -> bool {
		self.hover.node == Some(idx) || self.hover.prev_node == Some(idx)
	}

	pub fn has_active_highlight(&self) -> bool {
		self.hover.node.is_some() || self.hover.prev_node.is_some()
	}

	pub fn tick(&mut self, dt: f64) {
		self.flow_time += dt;

		let (target, delay, speed) = if self.hover.node.is_some() {
			(1.0, 0.08, 1.8)
		} else {
			(0.0, 0.0, 1.26)
		};

		if self.hover.node.is_some() {
			self.hover.delay_t = (self.hover.delay_t + dt).min(delay);
			if self.hover.delay_t >= delay {
				self.hover.highlight_t += (target - self.hover.highlight_t) * speed * dt;
			}
		} else {
			self.hover.highlight_t += (target - self.hover.highlight_t) * speed * dt;
			if self.hover.highlight_t < 0.01 {
				self.hover.highlight_t = 0.0;
				self.hover.prev_node = None;
				self.hover.prev_neighbors.clear();
			}
		}
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}

/// Point where edges attach on `side` of `node`, in graph space.
pub fn anchor(node: &GraphNode, side: Side) -> (f64, f64) {
	let y = node.position.y + NODE_HEIGHT / 2.0;
	match side {
		Side::Left => (node.position.x, y),
		Side::Right => (node.position.x + NODE_WIDTH, y),
	}
}

/// Unit x direction pointing out of `side`.
pub fn outward(side: Side) -> f64 {
	match side {
		Side::Left => -1.0,
		Side::Right => 1.0,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::track::{Catalog, TrackLookup, build_track_graph};

	fn bundled_state() -> TrackGraphState {
		let catalog = Catalog::bundled().unwrap();
		let track = catalog.track("web-fullstack").unwrap();
		let model = build_track_graph(track, &catalog, &catalog, Some("demo-user"));
		TrackGraphState::new(&model, 800.0, 600.0)
	}

	#[test]
	fn hit_test_finds_node_cards() {
		let state = bundled_state();
		let first = &state.model.nodes[0];
		let (sx, sy) = (
			first.position.x + state.transform.x + 10.0,
			first.position.y + state.transform.y + 10.0,
		);
		assert_eq!(state.node_at_position(sx, sy), Some(0));
		assert_eq!(state.node_at_position(-1000.0, -1000.0), None);
	}

	#[test]
	fn hover_collects_sequence_neighbors() {
		let mut state = bundled_state();
		state.set_hover(Some(1));
		assert!(state.is_hovered(1));
		assert!(state.is_highlighted(0));
		assert!(state.is_highlighted(2));
		assert!(!state.is_highlighted(3));

		state.set_hover(None);
		assert!(state.has_active_highlight());
		assert_eq!(state.hover.prev_node, Some(1));
	}

	#[test]
	fn anchors_sit_on_card_edges() {
		let state = bundled_state();
		let node = &state.model.nodes[0];
		assert_eq!(anchor(node, Side::Right).0, node.position.x + NODE_WIDTH);
		assert_eq!(anchor(node, Side::Left).0, node.position.x);
		assert_eq!(outward(Side::Left), -1.0);
	}
}
