//! Root margins.
//!
//! A root margin grows (or, when negative, shrinks) the area a target is
//! tested against. The text form follows the CSS `margin` shorthand:
//!
//! | Components | Meaning                       |
//! |------------|-------------------------------|
//! | 1          | all sides                     |
//! | 2          | top/bottom, left/right        |
//! | 3          | top, left/right, bottom       |
//! | 4          | top, right, bottom, left      |
//!
//! Each component is `Npx`, `N%` or a bare `0`. Percentages resolve against
//! the root's height for top/bottom and its width for left/right.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{UiError, UiResult};
use crate::layout::{Insets, Rect};

/// A single margin component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Length {
    /// Absolute pixels.
    Px(f32),
    /// Percentage of the root dimension on that axis.
    Percent(f32),
}

impl Length {
    /// Resolves against `basis` (the root width or height).
    #[must_use]
    pub fn resolve(self, basis: f32) -> f32 {
        match self {
            Self::Px(px) => px,
            Self::Percent(pct) => basis * pct / 100.0,
        }
    }

    fn parse(token: &str) -> Option<Self> {
        let number = |s: &str| s.parse::<f32>().ok().filter(|v| v.is_finite());
        if let Some(px) = token.strip_suffix("px") {
            number(px).map(Self::Px)
        } else if let Some(pct) = token.strip_suffix('%') {
            number(pct).map(Self::Percent)
        } else {
            // Unitless values other than zero are ambiguous.
            number(token).filter(|v| *v == 0.0).map(Self::Px)
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Px(px) => write!(f, "{px}px"),
            Self::Percent(pct) => write!(f, "{pct}%"),
        }
    }
}

/// Offsets applied to the root before intersection testing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RootMargin {
    /// Top side.
    pub top: Length,
    /// Right side.
    pub right: Length,
    /// Bottom side.
    pub bottom: Length,
    /// Left side.
    pub left: Length,
}

impl RootMargin {
    /// No offset on any side.
    pub const ZERO: Self = Self::uniform(Length::Px(0.0));

    /// The same offset on every side.
    #[must_use]
    pub const fn uniform(length: Length) -> Self {
        Self {
            top: length,
            right: length,
            bottom: length,
            left: length,
        }
    }

    /// Parses CSS shorthand such as `"0px 0px -100px 0px"`.
    ///
    /// # Errors
    ///
    /// Returns `UiError::InvalidRootMargin` for empty input, more than four
    /// components, or a component that is not `Npx`, `N%` or `0`.
    pub fn parse(input: &str) -> UiResult<Self> {
        let invalid = |reason: String| UiError::InvalidRootMargin {
            input: input.to_owned(),
            reason,
        };

        let mut lengths = Vec::with_capacity(4);
        for token in input.split_whitespace() {
            let length = Length::parse(token)
                .ok_or_else(|| invalid(format!("{token:?} is not a px or % length")))?;
            lengths.push(length);
        }

        match *lengths.as_slice() {
            [all] => Ok(Self::uniform(all)),
            [vertical, horizontal] => Ok(Self {
                top: vertical,
                right: horizontal,
                bottom: vertical,
                left: horizontal,
            }),
            [top, horizontal, bottom] => Ok(Self {
                top,
                right: horizontal,
                bottom,
                left: horizontal,
            }),
            [top, right, bottom, left] => Ok(Self {
                top,
                right,
                bottom,
                left,
            }),
            [] => Err(invalid("expected at least one length".to_owned())),
            _ => Err(invalid(format!("expected at most 4 lengths, got {}", lengths.len()))),
        }
    }

    /// Resolves percentages against `root`.
    #[must_use]
    pub fn resolve(&self, root: &Rect) -> Insets {
        Insets {
            top: self.top.resolve(root.height),
            right: self.right.resolve(root.width),
            bottom: self.bottom.resolve(root.height),
            left: self.left.resolve(root.width),
        }
    }

    /// Returns `root` grown by this margin.
    #[must_use]
    pub fn apply(&self, root: &Rect) -> Rect {
        root.grow(self.resolve(root))
    }
}

impl Default for RootMargin {
    fn default() -> Self {
        Self::ZERO
    }
}

impl FromStr for RootMargin {
    type Err = UiError;

    fn from_str(s: &str) -> UiResult<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for RootMargin {
    type Error = UiError;

    fn try_from(value: String) -> UiResult<Self> {
        Self::parse(&value)
    }
}

impl From<RootMargin> for String {
    fn from(margin: RootMargin) -> Self {
        margin.to_string()
    }
}

impl fmt::Display for RootMargin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.top, self.right, self.bottom, self.left)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shorthand_expansion() {
        let one: RootMargin = "10px".parse().unwrap();
        assert_eq!(one, RootMargin::uniform(Length::Px(10.0)));

        let two: RootMargin = "10px 5%".parse().unwrap();
        assert_eq!(two.top, Length::Px(10.0));
        assert_eq!(two.bottom, Length::Px(10.0));
        assert_eq!(two.left, Length::Percent(5.0));
        assert_eq!(two.right, Length::Percent(5.0));

        let three: RootMargin = "1px 2px 3px".parse().unwrap();
        assert_eq!(three.bottom, Length::Px(3.0));
        assert_eq!(three.left, Length::Px(2.0));

        let four: RootMargin = "0 0 -100px 0".parse().unwrap();
        assert_eq!(four.bottom, Length::Px(-100.0));
        assert_eq!(four.top, Length::Px(0.0));
    }

    #[test]
    fn test_rejects_garbage() {
        for bad in ["", "   ", "10", "10em", "1px 2px 3px 4px 5px", "px", "nan%"] {
            assert!(
                matches!(RootMargin::parse(bad), Err(UiError::InvalidRootMargin { .. })),
                "accepted {bad:?}"
            );
        }
    }

    #[test]
    fn test_percent_resolves_per_axis() {
        let margin = RootMargin::parse("10% 50%").unwrap();
        let insets = margin.resolve(&Rect::new(0.0, 0.0, 200.0, 100.0));
        assert_eq!(insets.top, 10.0);
        assert_eq!(insets.bottom, 10.0);
        assert_eq!(insets.left, 100.0);
        assert_eq!(insets.right, 100.0);
    }

    #[test]
    fn test_display_round_trips() {
        let margin = RootMargin::parse("1px 2% 3px 4%").unwrap();
        assert_eq!(margin.to_string(), "1px 2% 3px 4%");
        assert_eq!(RootMargin::parse(&margin.to_string()).unwrap(), margin);
    }
}
