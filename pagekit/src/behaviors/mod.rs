//! The site's behaviors.
//!
//! Each behavior resolves its elements at attach time; elements added to
//! the page later are not picked up. A missing element makes the behavior
//! a no-op rather than an error.

mod button_loading;
mod fade_in;
mod form_validation;
mod header_scroll;
mod mobile_menu;
mod scroll_to_top;
mod smooth_scroll;

pub use button_loading::ButtonLoading;
pub use fade_in::FadeIn;
pub use form_validation::FormValidation;
pub use header_scroll::HeaderScroll;
pub use mobile_menu::MobileMenu;
pub use scroll_to_top::ScrollToTop;
pub use smooth_scroll::SmoothScroll;
