pub mod behavior;
pub mod behaviors;
pub mod clock;
pub mod config;
pub mod logging;
pub mod runtime;
pub mod timer;
pub mod timing;
pub mod validation;

pub use runtime::Page;

pub mod prelude {
    pub use crate::behavior::{Behavior, BehaviorId, ListenerId, ListenerTarget, PageContext};
    pub use crate::behaviors::{
        ButtonLoading, FadeIn, FormValidation, HeaderScroll, MobileMenu, ScrollToTop,
        SmoothScroll,
    };
    pub use crate::clock::{Clock, SystemClock, VirtualClock};
    pub use crate::config::{ConfigError, Locale, PageConfig};
    pub use crate::runtime::{DispatchOutcome, Page};
    pub use crate::timer::TimerId;
    pub use crate::timing::{Debounce, Throttle};
    pub use crate::validation::{
        FieldError, FieldKind, FieldStatus, FieldValidator, Messages, ValidationResult,
    };

    pub use webdom::{Document, Element, Event, EventKind, Rect};
}
