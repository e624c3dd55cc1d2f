pub mod dialog;
pub mod form;
pub mod keyboard_hint;
pub mod plot_view;
pub mod status;
