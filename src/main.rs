//! Browser entry point: sets up logging and mounts the app.

use track_graph_canvas::{App, init_logging};

fn main() {
	init_logging();
	leptos::mount::mount_to_body(App);
}
