//! Dashboard colour roles and styling utilities.

pub mod colors;
pub mod fonts;
pub mod widgets;

pub use colors::DashboardTheme;
pub use fonts::{apply_app_style, configure_text_styles, named_font, CARD_VALUE, SECTION_HEADER};
pub use widgets::{avatar_fill, render_avatar};
