pub mod api;
pub mod dom;
