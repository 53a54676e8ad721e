//! HTTP handler functions, one module per resource.

pub mod budget;
pub mod expense;
pub mod location;
pub mod project;
pub mod schedule;
pub mod script;
pub mod shot_list;
pub mod storyboard;
