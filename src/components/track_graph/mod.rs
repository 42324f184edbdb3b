mod component;
mod render;
mod state;

pub use component::TrackGraphCanvas;
