//! Leptos client-side app wiring and routes, plus the learning track graph core.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::{Level, error, info};

// Modules
mod components;
mod pages;
pub mod track;

// Top-Level pages
use crate::pages::home::Home;
use crate::pages::not_found::NotFound;
use crate::pages::track::TrackPage;
use crate::track::{Catalog, CatalogError};

/// User the demo session is signed in as.
pub const DEMO_USER: &str = "demo-user";

/// The loaded catalog, or why it failed to load.
pub type CatalogHandle = Result<Arc<Catalog>, Arc<CatalogError>>;

/// Who is browsing. `None` is an anonymous visitor.
#[derive(Clone, Debug, Default)]
pub struct Session {
	/// Enrollment store key of the signed in user.
	pub user_id: Option<String>,
}

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("Logging initialized");
}

/// An app router which renders the track list, track pages and handles 404's
#[component]
pub fn App() -> impl IntoView {
	// Provides context that manages stylesheets, titles, meta tags, etc.
	provide_meta_context();

	let catalog: CatalogHandle = Catalog::bundled().map(Arc::new).map_err(|err| {
		error!("Failed to load catalog: {}", err);
		Arc::new(err)
	});
	provide_context(catalog);
	provide_context(Session {
		user_id: Some(DEMO_USER.to_string()),
	});

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />

		// sets the document title
		<Title text="Learning Tracks" />

		// injects metadata in the <head> of the page
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Router>
			<Routes fallback=|| view! { <NotFound /> }>
				<Route path=path!("/") view=Home />
				<Route path=path!("/tracks/:id") view=TrackPage />
			</Routes>
		</Router>
	}
}
