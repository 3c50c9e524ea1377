//! Local-frame shape descriptors and their placement.

use thiserror::Error;

use super::Pose;

/// The closed set of supported shapes, described in their own local frame.
///
/// A rectangle is axis-aligned in its local frame; it only becomes rotated
/// in the world through the pose it is placed with. Extending this set
/// requires touching every `match` over primitive pairs, so an unhandled
/// combination cannot compile.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub enum Primitive {
    Circle {
        radius: f64,
    },
    Rectangle {
        xmin: f64,
        ymin: f64,
        xmax: f64,
        ymax: f64,
    },
}

impl Primitive {
    pub fn validate(&self) -> Result<(), InvalidPrimitive> {
        match *self {
            Primitive::Circle { radius } => {
                if radius < 0.0 {
                    Err(InvalidPrimitive::NegativeRadius { radius })
                } else {
                    Ok(())
                }
            }
            Primitive::Rectangle {
                xmin,
                ymin,
                xmax,
                ymax,
            } => {
                if xmin >= xmax || ymin >= ymax {
                    Err(InvalidPrimitive::DegenerateRectangle {
                        xmin,
                        ymin,
                        xmax,
                        ymax,
                    })
                } else {
                    Ok(())
                }
            }
        }
    }

    /// Radius of the smallest circle around the local origin containing the
    /// primitive. Used as a conservative rejection bound in the narrow
    /// phase.
    pub fn bounding_radius(&self) -> f64 {
        match *self {
            Primitive::Circle { radius } => radius,
            Primitive::Rectangle {
                xmin,
                ymin,
                xmax,
                ymax,
            } => {
                let x = xmin.abs().max(xmax.abs());
                let y = ymin.abs().max(ymax.abs());
                (x.powi(2) + y.powi(2)).sqrt()
            }
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum InvalidPrimitive {
    #[error("circle radius {radius} is negative")]
    NegativeRadius { radius: f64 },
    #[error("rectangle extents [{xmin}, {xmax}] x [{ymin}, {ymax}] are degenerate")]
    DegenerateRectangle {
        xmin: f64,
        ymin: f64,
        xmax: f64,
        ymax: f64,
    },
}

/// A primitive instanced at a pose, either in the world frame or relative
/// to a parent frame awaiting composition.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct PlacedPrimitive {
    primitive: Primitive,
    pose: Pose,
}

impl PlacedPrimitive {
    pub const fn new(primitive: Primitive, pose: Pose) -> Self {
        Self { primitive, pose }
    }

    pub fn primitive(&self) -> Primitive {
        self.primitive
    }

    pub fn pose(&self) -> Pose {
        self.pose
    }

    /// Re-express this placement, currently relative to `parent`, in the
    /// parent's own frame. Returns a fresh value; `self` is untouched.
    pub fn posed_in(&self, parent: Pose) -> PlacedPrimitive {
        PlacedPrimitive::new(self.primitive, parent.compose(self.pose))
    }
}
