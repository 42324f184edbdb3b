use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::state::{EDGE_REACH, NODE_HEIGHT, NODE_WIDTH, TrackGraphState, anchor, outward};
use crate::track::{CourseStatus, EdgeTone, GraphNode};

const ARROW_SIZE: f64 = 10.0;
const CARD_PADDING: f64 = 14.0;

fn ease_out_cubic(t: f64) -> f64 {
	1.0 - (1.0 - t).powi(3)
}

/// RGB triple an edge color token maps to.
fn tone_rgb(tone: EdgeTone) -> &'static str {
	match tone {
		EdgeTone::Completed => "72, 199, 142",
		EdgeTone::Pending => "148, 163, 184",
	}
}

/// Card fill and accent colors per course status.
fn status_colors(status: CourseStatus) -> (&'static str, &'static str) {
	match status {
		CourseStatus::Completed => ("#1f4d3a", "#48c78e"),
		CourseStatus::InProgress => ("#4a3b12", "#f5b942"),
		CourseStatus::NotStarted => ("#23233a", "#64748b"),
	}
}

pub fn render(state: &TrackGraphState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str("#1a1a2e");
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);
	draw_edges(state, ctx);
	draw_nodes(state, ctx);
	ctx.restore();
}

fn draw_edges(state: &TrackGraphState, ctx: &CanvasRenderingContext2d) {
	let (dash, gap) = (10.0, 6.0);
	let dash_offset = -(state.flow_time * 30.0) % (dash + gap);
	let t = ease_out_cubic(state.hover.highlight_t);
	let has_highlight = state.has_active_highlight();

	for (edge_idx, src, tgt) in state.links() {
		let edge = &state.model.edges[edge_idx];
		let (from, to) = (&state.model.nodes[src], &state.model.nodes[tgt]);
		let (x1, y1) = anchor(from, from.source_side);
		let (x2, y2) = anchor(to, to.target_side);
		let (out1, out2) = (outward(from.source_side), outward(to.target_side));

		let is_highlighted = state.is_highlighted(src) && state.is_highlighted(tgt);
		let alpha = if !has_highlight {
			0.85
		} else if is_highlighted {
			0.85 + 0.15 * t
		} else {
			0.85 - 0.65 * t
		};
		let rgb = tone_rgb(edge.color_token);

		ctx.set_stroke_style_str(&format!("rgba({}, {})", rgb, alpha));
		ctx.set_line_width(edge.stroke_weight as f64);
		if edge.animated {
			let _ = ctx.set_line_dash(&js_sys::Array::of2(
				&JsValue::from_f64(dash),
				&JsValue::from_f64(gap),
			));
			ctx.set_line_dash_offset(dash_offset);
		}

		// stop the curve where the arrow head begins
		let end_x = x2 + out2 * ARROW_SIZE;
		ctx.begin_path();
		ctx.move_to(x1, y1);
		ctx.bezier_curve_to(
			x1 + out1 * EDGE_REACH,
			y1,
			end_x + out2 * EDGE_REACH,
			y2,
			end_x,
			y2,
		);
		ctx.stroke();
		let _ = ctx.set_line_dash(&js_sys::Array::new());

		ctx.set_fill_style_str(&format!("rgba({}, {})", rgb, alpha));
		let half = ARROW_SIZE * 0.5;
		ctx.begin_path();
		ctx.move_to(x2, y2);
		ctx.line_to(end_x, y2 - half);
		ctx.line_to(end_x, y2 + half);
		ctx.close_path();
		ctx.fill();
	}
}

fn draw_nodes(state: &TrackGraphState, ctx: &CanvasRenderingContext2d) {
	let (has_highlight, t) = (
		state.has_active_highlight(),
		ease_out_cubic(state.hover.highlight_t),
	);

	for (idx, node) in state.model.nodes.iter().enumerate() {
		let alpha = if has_highlight && !state.is_highlighted(idx) {
			1.0 - 0.6 * t
		} else {
			1.0
		};
		ctx.set_global_alpha(alpha);
		draw_card(node, state.is_hovered(idx) && t > 0.01, ctx);
		ctx.set_global_alpha(1.0);
	}
}

fn draw_card(node: &GraphNode, hovered: bool, ctx: &CanvasRenderingContext2d) {
	let (x, y) = (node.position.x, node.position.y);
	let course = &node.data.state;
	let (fill, accent) = status_colors(course.status());

	ctx.set_fill_style_str(fill);
	ctx.fill_rect(x, y, NODE_WIDTH, NODE_HEIGHT);
	ctx.set_stroke_style_str(if hovered { "white" } else { accent });
	ctx.set_line_width(if hovered { 2.5 } else { 1.5 });
	ctx.stroke_rect(x, y, NODE_WIDTH, NODE_HEIGHT);

	ctx.set_fill_style_str("white");
	ctx.set_font("bold 14px sans-serif");
	let _ = ctx.fill_text_with_max_width(
		&node.data.label,
		x + CARD_PADDING,
		y + CARD_PADDING + 12.0,
		NODE_WIDTH - 2.0 * CARD_PADDING,
	);

	ctx.set_fill_style_str("rgba(255, 255, 255, 0.7)");
	ctx.set_font("11px sans-serif");
	let kind = if course.required { "Required" } else { "Optional" };
	let meta = format!("{} · {}h · {}", kind, course.metadata.duration_hours, course.metadata.instructor);
	let _ = ctx.fill_text_with_max_width(
		&meta,
		x + CARD_PADDING,
		y + CARD_PADDING + 32.0,
		NODE_WIDTH - 2.0 * CARD_PADDING,
	);

	// progress bar
	let bar_width = NODE_WIDTH - 2.0 * CARD_PADDING - 40.0;
	let bar_y = y + NODE_HEIGHT - CARD_PADDING - 6.0;
	ctx.set_fill_style_str("rgba(255, 255, 255, 0.15)");
	ctx.fill_rect(x + CARD_PADDING, bar_y, bar_width, 6.0);
	ctx.set_fill_style_str(accent);
	ctx.fill_rect(
		x + CARD_PADDING,
		bar_y,
		bar_width * f64::from(course.progress) / 100.0,
		6.0,
	);
	ctx.set_fill_style_str("white");
	let _ = ctx.fill_text(
		&format!("{}%", course.progress),
		x + NODE_WIDTH - CARD_PADDING - 32.0,
		bar_y + 6.0,
	);
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn tones_and_statuses_map_to_distinct_colors() {
		assert_ne!(tone_rgb(EdgeTone::Completed), tone_rgb(EdgeTone::Pending));
		let accents = [
			status_colors(CourseStatus::Completed).1,
			status_colors(CourseStatus::InProgress).1,
			status_colors(CourseStatus::NotStarted).1,
		];
		assert_ne!(accents[0], accents[1]);
		assert_ne!(accents[1], accents[2]);
	}

	#[test]
	fn easing_is_bounded() {
		assert_eq!(ease_out_cubic(0.0), 0.0);
		assert_eq!(ease_out_cubic(1.0), 1.0);
	}
}
