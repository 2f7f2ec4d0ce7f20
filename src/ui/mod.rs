//! Terminal presentation: one row per notation, copy on Enter.

pub mod app;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod results;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;

pub use runtime::run;
