//! Browser side of the motion core: window listeners, the process-wide
//! sources and the Yew hooks components use.

pub mod hooks;
pub mod listener;
pub mod sources;

pub use hooks::{use_in_view, use_mounted, use_pointer_position, use_scroll_progress, use_spring};
