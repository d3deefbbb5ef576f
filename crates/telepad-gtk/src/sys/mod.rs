pub mod actions;
pub mod runtime;
