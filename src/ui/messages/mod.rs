//! Message list rendering shared by every chat layout.

mod render;

pub use render::{render_message_list, Density, DensityMetrics};
