use leptos::prelude::*;
use leptos_router::components::A;

use crate::CatalogHandle;
use crate::track::TrackDefinition;

fn track_card(track: &TrackDefinition) -> impl IntoView + use<> {
	let href = format!("/tracks/{}", track.id);
	let title = track.title.clone();
	let stats = format!(
		"{} · {:.1}★ ({} reviews) · {} courses",
		track.level,
		track.rating,
		track.reviews,
		track.courses.len()
	);

	view! {
		<li class="track-card">
			<A href=href>
				<h2>{title}</h2>
			</A>
			<p>{track.description.clone()}</p>
			<p class="track-stats">{stats}</p>
		</li>
	}
}

/// Track list page
#[component]
pub fn Home() -> impl IntoView {
	let catalog = expect_context::<CatalogHandle>();

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
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
		}>
			<main class="track-list">
				<h1>"Learning Tracks"</h1>
				{move || {
					catalog
						.clone()
						.map(|catalog| {
							view! {
								<ul>{catalog.tracks().iter().map(track_card).collect_view()}</ul>
							}
						})
				}}
			</main>
		</ErrorBoundary>
	}
}
