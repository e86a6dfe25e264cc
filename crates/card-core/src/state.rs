//! Toggle state of the card.
//!
//! The card starts closed and every click on its plane flips it. There are no
//! guards or intermediate states; a flip during an in-flight animation simply
//! retargets the springs.

use std::fmt;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CardToggleState {
    #[default]
    Closed,
    Open,
}

impl CardToggleState {
    #[inline]
    pub fn toggled(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }

    /// Opacity the card text animates toward in this state.
    #[inline]
    pub fn text_opacity(self) -> f32 {
        match self {
            Self::Closed => 0.0,
            Self::Open => 1.0,
        }
    }
}

impl fmt::Display for CardToggleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Closed => f.write_str("closed"),
            Self::Open => f.write_str("open"),
        }
    }
}
