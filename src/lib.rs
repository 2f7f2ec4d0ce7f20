//! Watch the clipboard for vector/matrix literals and re-render them in
//! other notations.

pub mod buffer;
pub mod config;
pub mod headless;
pub mod logging;
pub mod notation;
pub mod present;
pub mod shutdown;
pub mod transform;
pub mod ui;
pub mod watch;
