pub mod complex_plane_view;
