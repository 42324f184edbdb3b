use leptos::prelude::*;
use leptos_router::components::{A, Redirect};
use leptos_router::hooks::use_params_map;
use log::warn;

use crate::components::track_graph::TrackGraphCanvas;
use crate::track::{GraphModel, InstructorSummary, TrackDefinition, TrackLookup, build_track_graph};
use crate::{CatalogHandle, Session};

fn instructor_item(instructor: &InstructorSummary) -> impl IntoView + use<> {
	view! {
		<li class="instructor">
			<img src=instructor.avatar.clone() alt=instructor.name.clone() width="32" height="32" />
			<span class="instructor-name">{instructor.name.clone()}</span>
			<span class="instructor-role">{instructor.role.clone()}</span>
		</li>
	}
}

#[component]
fn TrackOverview(track: TrackDefinition, model: GraphModel) -> impl IntoView {
	let summary = &model.summary;
	let counts = format!(
		"{} of {} completed · {} in progress · {} required",
		summary.completed_courses,
		summary.total_courses,
		summary.in_progress_courses,
		summary.required_courses
	);
	let hours = format!(
		"~{}h remaining of {}h",
		summary.remaining_hours, summary.total_hours
	);
	let skills = summary.skills.join(" · ");
	let progress = format!("{}%", model.track_progress);
	let instructors = model.instructors.iter().map(instructor_item).collect_view();

	view! {
		<div class="graph-overlay">
			<A href="/">"← All tracks"</A>
			<h1>{track.title}</h1>
			<p class="subtitle">{track.description}</p>
			<p class="track-progress">
				<progress max="100" value=model.track_progress.to_string()></progress>
				<span>{progress}</span>
			</p>
			<p class="track-counts">{counts}</p>
			<p class="track-hours">{hours}</p>
			<p class="track-skills">{skills}</p>
			<ul class="instructors">{instructors}</ul>
		</div>
	}
}

/// A single track: summary overlay on top of its course graph
#[component]
pub fn TrackPage() -> impl IntoView {
	let params = use_params_map();
	let catalog = expect_context::<CatalogHandle>();
	let session = expect_context::<Session>();

	let page = move || {
		catalog.clone().map(|catalog| {
			let track_id = params.read().get("id").unwrap_or_default();
			let Some(track) = catalog.track(&track_id).cloned() else {
				warn!("Unknown track {}, redirecting to track list", track_id);
				return view! { <Redirect path="/" /> }.into_any();
			};

			let model = build_track_graph(
				&track,
				&*catalog,
				&*catalog,
				session.user_id.as_deref(),
			);
			let graph = model.clone();

			view! {
				<div class="fullscreen-graph">
					<TrackGraphCanvas data=graph fullscreen=true />
					<TrackOverview track=track model=model />
				</div>
			}
			.into_any()
		})
	};

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>{page}</ErrorBoundary>
	}
}
