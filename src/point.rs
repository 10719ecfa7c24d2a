use std::fmt;

use serde::Serialize;

/// What a point on the graph was classified as.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PointKind {
    Plain,
    Minimum,
    Maximum,
    /// Concave down on the left, concave up on the right.
    InflectionDownToUp,
    /// Concave up on the left, concave down on the right.
    InflectionUpToDown,
}

/// A point `(x, value)` on the graph of a function, tagged with its kind.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Point {
    x: f64,
    value: f64,
    kind: PointKind,
}

impl Point {
    pub fn new(x: f64, value: f64) -> Point {
        Point {
            x,
            value,
            kind: PointKind::Plain,
        }
    }

    pub fn extremum(x: f64, value: f64, is_minimum: bool) -> Point {
        let kind = if is_minimum {
            PointKind::Minimum
        } else {
            PointKind::Maximum
        };
        Point { x, value, kind }
    }

    pub fn inflection(x: f64, value: f64, down_to_up: bool) -> Point {
        let kind = if down_to_up {
            PointKind::InflectionDownToUp
        } else {
            PointKind::InflectionUpToDown
        };
        Point { x, value, kind }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn kind(&self) -> PointKind {
        self.kind
    }

    pub fn is_minimum(&self) -> bool {
        self.kind == PointKind::Minimum
    }

    pub fn is_maximum(&self) -> bool {
        self.kind == PointKind::Maximum
    }

    pub fn is_extremum(&self) -> bool {
        self.is_minimum() || self.is_maximum()
    }

    pub fn is_inflection(&self) -> bool {
        matches!(
            self.kind,
            PointKind::InflectionDownToUp | PointKind::InflectionUpToDown
        )
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.value)?;
        match self.kind {
            PointKind::Plain => Ok(()),
            PointKind::Minimum => write!(f, " local minimum"),
            PointKind::Maximum => write!(f, " local maximum"),
            PointKind::InflectionDownToUp => {
                write!(f, " inflection, concavity changes from down to up")
            }
            PointKind::InflectionUpToDown => {
                write!(f, " inflection, concavity changes from up to down")
            }
        }
    }
}
