//! Static dashboard regions (header, navigation sidebar, main content).

pub mod content;
pub mod header;
pub mod sidebar;

pub use content::render_main_content;
pub use header::{render_header, HeaderAction};
pub use sidebar::{render_sidebar, NAV_ITEMS};
