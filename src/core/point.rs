//! # Point
//!
//! A location on the integer grid. The fundamental primitive.
//!
//! Coordinates are signed 64-bit and fixed at construction. Everything else
//! in the crate (proximity, indexes) is built on top of this value.

use std::any::Any;
use std::fmt::{self, Write};
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;

use super::collinear::Collinearity;
use super::error::{PointError, PointResult};
use super::proximity::{Chebyshev, Proximity};

/// Whole-string grammar for `<int>,<int>`, compiled once
static POINT_PATTERN: OnceLock<Regex> = OnceLock::new();

fn point_pattern() -> &'static Regex {
    POINT_PATTERN.get_or_init(|| {
        Regex::new(r"^\s*(-?[0-9]+)\s*,\s*(-?[0-9]+)\s*$").expect("point regex must compile")
    })
}

/// A point on the two-dimensional integer grid
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    x: i64,
    y: i64,
}

impl Point {
    /// Create a new point from two 64-bit coordinates
    ///
    /// # Example
    /// ```
    /// use gridpoint::Point;
    /// let p = Point::new(3, -4);
    /// assert_eq!(p.x(), 3);
    /// assert_eq!(p.y(), -4);
    /// ```
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Create a new point from two 32-bit coordinates, widened to 64 bits
    pub fn from_i32(x: i32, y: i32) -> Self {
        Self::new(i64::from(x), i64::from(y))
    }

    /// The x-coordinate
    pub fn x(&self) -> i64 {
        self.x
    }

    /// The y-coordinate
    pub fn y(&self) -> i64 {
        self.y
    }

    /// Coordinate equality
    pub fn equals(&self, other: &Point) -> bool {
        self.x == other.x && self.y == other.y
    }

    /// Equality against an arbitrary value
    ///
    /// `None` and values of any other type are never equal.
    ///
    /// # Example
    /// ```
    /// use gridpoint::Point;
    /// let p = Point::new(1, 2);
    /// assert!(p.equals_any(Some(&Point::new(1, 2))));
    /// assert!(!p.equals_any(Some(&"1,2")));
    /// assert!(!p.equals_any(None));
    /// ```
    pub fn equals_any(&self, other: Option<&dyn Any>) -> bool {
        other
            .and_then(|value| value.downcast_ref::<Point>())
            .is_some_and(|point| self.equals(point))
    }

    /// 32-bit hash code
    ///
    /// Each coordinate is folded by XOR-ing its high half into its low half,
    /// then the two folds are XOR-ed together.
    ///
    /// # Example
    /// ```
    /// use gridpoint::Point;
    /// let p = Point::new(0x0102030405060708, 0x1020304050607080);
    /// assert_eq!(p.hash_code(), 0x444444cc);
    /// ```
    pub fn hash_code(&self) -> i32 {
        fold(self.x) ^ fold(self.y)
    }

    /// Parse `"<int>,<int>"`, allowing whitespace around either number
    ///
    /// # Example
    /// ```
    /// use gridpoint::Point;
    /// let p = Point::parse(" 123 , -456 ").unwrap();
    /// assert_eq!(p, Point::new(123, -456));
    /// assert!(Point::parse("1,").is_err());
    /// ```
    pub fn parse(text: &str) -> PointResult<Self> {
        let invalid = || {
            tracing::debug!(input = text, "rejected point text");
            PointError::InvalidFormat {
                input: text.to_string(),
            }
        };

        let captures = point_pattern().captures(text).ok_or_else(invalid)?;
        let x = captures[1].parse::<i64>().map_err(|_| invalid())?;
        let y = captures[2].parse::<i64>().map_err(|_| invalid())?;

        Ok(Self::new(x, y))
    }

    /// Like [`Point::parse`], but returns `None` instead of an error
    pub fn try_parse(text: &str) -> Option<Self> {
        Self::parse(text).ok()
    }

    /// Count points at exactly this location, duplicates included
    pub fn count_points_in_exact_same_location(&self, points: &[Point]) -> usize {
        points.iter().filter(|point| self.equals(point)).count()
    }

    /// Describe the points that share an axis with this one
    ///
    /// Each match is written as `(x,y,"TAG")` in input order, separated by
    /// commas. Points on neither axis are left out.
    ///
    /// # Example
    /// ```
    /// use gridpoint::Point;
    /// let center = Point::new(0, 0);
    /// let others = [Point::new(0, 1), Point::new(2, 2), Point::new(0, 0)];
    /// assert_eq!(
    ///     center.get_collinear_point_coordinates(&others),
    ///     r#"(0,1,"X"),(0,0,"SAME")"#
    /// );
    /// ```
    pub fn get_collinear_point_coordinates(&self, points: &[Point]) -> String {
        let mut out = String::new();

        for point in points {
            let Some(kind) = Collinearity::classify(self, point) else {
                continue;
            };
            if !out.is_empty() {
                out.push(',');
            }
            // Writing into a String cannot fail
            let _ = write!(out, "({},{},\"{}\")", point.x, point.y, kind);
        }

        out
    }

    /// Points within `distance` on both axes, excluding this exact location
    ///
    /// Results keep input order.
    ///
    /// # Errors
    /// `InvalidArgument` when `distance <= 0`.
    pub fn get_neighbors(&self, distance: i64, points: &[Point]) -> PointResult<Vec<Point>> {
        if distance <= 0 {
            tracing::debug!(distance, "rejected neighbor distance");
            return Err(PointError::InvalidArgument {
                param: "distance",
                value: distance,
            });
        }

        Ok(points
            .iter()
            .filter(|point| self.is_neighbor(distance, point))
            .copied()
            .collect())
    }

    /// Chebyshev distance in `1..=distance`
    fn is_neighbor(&self, distance: i64, candidate: &Point) -> bool {
        let Ok(limit) = u128::try_from(distance) else {
            return false;
        };
        let d = Chebyshev.proximity(self, candidate);
        d > 0 && d <= limit
    }
}

/// XOR the high 32 bits of `v` into its low 32 bits
fn fold(v: i64) -> i32 {
    (v ^ (v >> 32)) as i32
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i32(self.hash_code());
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl FromStr for Point {
    type Err = PointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<(i64, i64)> for Point {
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(x, y)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::from_i32(x, y)
    }
}
