pub mod date_window;
