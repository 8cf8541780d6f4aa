pub mod app;
pub mod board;
pub mod controls_panel;
pub mod round_over_overlay;
pub mod score_board;
