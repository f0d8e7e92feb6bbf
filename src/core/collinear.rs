//! # Collinearity
//!
//! How a point lines up with a center point along the grid axes.

use std::fmt;

use super::Point;

/// Axis relationship between a candidate and a center point
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Collinearity {
    /// Same location as the center
    Same,
    /// Shares the center's x-coordinate (vertical line)
    X,
    /// Shares the center's y-coordinate (horizontal line)
    Y,
}

impl Collinearity {
    /// Classify `candidate` against `center`.
    ///
    /// Equality is checked first: a coincident point also shares both axes
    /// but is always reported as `Same`.
    pub fn classify(center: &Point, candidate: &Point) -> Option<Self> {
        if candidate.equals(center) {
            Some(Collinearity::Same)
        } else if candidate.x() == center.x() {
            Some(Collinearity::X)
        } else if candidate.y() == center.y() {
            Some(Collinearity::Y)
        } else {
            None
        }
    }

    /// Tag used in the textual report
    pub fn tag(&self) -> &'static str {
        match self {
            Collinearity::Same => "SAME",
            Collinearity::X => "X",
            Collinearity::Y => "Y",
        }
    }
}

impl fmt::Display for Collinearity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
