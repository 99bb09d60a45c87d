pub mod document;
pub mod element;
pub mod error;
pub mod event;
pub mod focus;
pub mod intersection;
pub mod layout;
pub mod scroll;
pub mod selector;
pub mod types;

pub use document::Document;
pub use element::{Content, Element};
pub use error::{DomError, EdgesParseError, SelectorError};
pub use event::{Event, EventKind};
pub use focus::FocusState;
pub use intersection::{IntersectionEntry, IntersectionObserver, IntersectionOptions};
pub use layout::{LayoutResult, Rect};
pub use scroll::{MAX_SCROLL_REQUESTS, ScrollAlign, ScrollBehavior, ScrollRequest, Viewport};
pub use selector::SelectorList;
pub use types::*;
