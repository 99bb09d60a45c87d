use std::str::FromStr;

use crate::error::EdgesParseError;

/// Per-side offsets in pixels, CSS order (top, right, bottom, left).
///
/// Values may be negative, as in an intersection root margin of
/// `0px 0px -50px 0px`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Edges {
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub left: i32,
}

impl Edges {
    pub const fn new(top: i32, right: i32, bottom: i32, left: i32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub const fn all(value: i32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    pub const fn symmetric(vertical: i32, horizontal: i32) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    /// Only a bottom offset, as in `0px 0px -50px 0px`.
    pub const fn bottom(value: i32) -> Self {
        Self {
            top: 0,
            right: 0,
            bottom: value,
            left: 0,
        }
    }
}

impl FromStr for Edges {
    type Err = EdgesParseError;

    /// Parse CSS shorthand with one to four pixel values (`10px`,
    /// `0px 0px -50px 0px`, ...). A bare `0` is accepted without a unit.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s
            .split_whitespace()
            .map(parse_px)
            .collect::<Result<Vec<_>, _>>()?;

        match values.as_slice() {
            [all] => Ok(Edges::all(*all)),
            [vertical, horizontal] => Ok(Edges::symmetric(*vertical, *horizontal)),
            [top, horizontal, bottom] => Ok(Edges::new(*top, *horizontal, *bottom, *horizontal)),
            [top, right, bottom, left] => Ok(Edges::new(*top, *right, *bottom, *left)),
            _ => Err(EdgesParseError::Arity(values.len())),
        }
    }
}

fn parse_px(token: &str) -> Result<i32, EdgesParseError> {
    let number = match token.strip_suffix("px") {
        Some(number) => number,
        None if token == "0" => token,
        None => return Err(EdgesParseError::Unit(token.to_string())),
    };
    number
        .parse()
        .map_err(|_| EdgesParseError::Number(token.to_string()))
}
