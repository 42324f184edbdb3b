pub mod track_graph;
