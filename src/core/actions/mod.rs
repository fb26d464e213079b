pub mod render_view;
