mod rect;

use std::collections::HashMap;

pub use rect::Rect;

/// Document-space rectangles keyed by element id.
///
/// The host page owns layout; elements without an entry are treated as not
/// rendered.
pub type LayoutResult = HashMap<String, Rect>;
