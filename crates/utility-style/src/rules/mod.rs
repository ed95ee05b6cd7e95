//! Translation rules and the ordered rule table.

mod palette;
mod rule;
mod spacing;
mod table;

pub use palette::TERRACOTTA;
pub use rule::{Category, Effect, Rule};
pub use spacing::{MARGIN_HALF_PX, PADDING_HALF_PX, PX_PER_UNIT};
pub use table::{resolve_token, RULES};
