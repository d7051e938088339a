pub mod comparison_slider;
pub mod header;
pub mod inquiry_form;
pub mod raw_html;
pub mod style_picker;
