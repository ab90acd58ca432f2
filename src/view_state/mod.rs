//! Pure render-geometry state: strip layout, slide transition, and
//! overflow measurement. No terminal access here; the view layer feeds
//! in areas and reads back offsets and flags.

pub mod overflow;
pub mod slide;
pub mod strip;
pub mod types;

pub use overflow::{strip_overflows, Remeasure};
pub use slide::Slide;
pub use strip::StripLayout;
pub use types::{CardIndex, CellOffset};
