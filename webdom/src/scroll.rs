use crate::layout::Rect;

/// How a programmatic scroll should be animated by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollBehavior {
    #[default]
    Auto,
    Smooth,
}

/// Where an element should land when scrolled into view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollAlign {
    #[default]
    Start,
    Center,
    End,
}

/// A programmatic window scroll, recorded for the host to animate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollRequest {
    pub top: i32,
    pub behavior: ScrollBehavior,
}

/// How many programmatic scroll requests the viewport remembers.
pub const MAX_SCROLL_REQUESTS: usize = 64;

/// The window: its size, scroll position and pending scroll requests.
///
/// The scroll offset jumps straight to the requested position; animating the
/// transition is left to the host, which drains the requests with
/// `take_requests`. Only the most recent `MAX_SCROLL_REQUESTS` are kept.
#[derive(Debug, Clone, Default)]
pub struct Viewport {
    pub width: i32,
    pub height: i32,
    scroll_x: i32,
    scroll_y: i32,
    requests: Vec<ScrollRequest>,
}

impl Viewport {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    /// Vertical scroll offset (`window.pageYOffset`).
    pub fn scroll_y(&self) -> i32 {
        self.scroll_y
    }

    pub fn scroll_x(&self) -> i32 {
        self.scroll_x
    }

    /// Set the scroll offset directly, as user scrolling does.
    /// Returns true if the offset changed.
    pub fn set_scroll(&mut self, x: i32, y: i32) -> bool {
        if self.scroll_x == x && self.scroll_y == y {
            return false;
        }
        self.scroll_x = x;
        self.scroll_y = y;
        true
    }

    pub fn resize(&mut self, width: i32, height: i32) {
        self.width = width;
        self.height = height;
    }

    /// The visible region in document coordinates.
    pub fn visible_rect(&self) -> Rect {
        Rect::new(self.scroll_x, self.scroll_y, self.width, self.height)
    }

    pub(crate) fn record(&mut self, request: ScrollRequest) {
        if self.requests.len() == MAX_SCROLL_REQUESTS {
            self.requests.remove(0);
        }
        self.requests.push(request);
    }

    /// The most recent programmatic scroll.
    pub fn last_request(&self) -> Option<&ScrollRequest> {
        self.requests.last()
    }

    pub fn requests(&self) -> &[ScrollRequest] {
        &self.requests
    }

    /// Drain recorded requests.
    pub fn take_requests(&mut self) -> Vec<ScrollRequest> {
        std::mem::take(&mut self.requests)
    }
}
