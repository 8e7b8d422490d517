pub mod stacked_bar_layout;
