//! Dialog overlays

pub mod alert;
pub mod help;
