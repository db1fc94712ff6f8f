pub mod a11y_panel;
