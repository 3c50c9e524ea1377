//! Basic building blocks.
//!
//! Angles are stored in radians throughout; external payloads carrying
//! degrees go through [`Angle::from_deg`] at the boundary so the kernel
//! never mixes units.

use std::{
    f64::consts::PI,
    ops::{Add, Neg, Sub},
};

use nalgebra::{Isometry2, Vector2};

#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Position {
    x: f64,
    y: f64,
}

impl Position {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn distance(&self, position: Self) -> f64 {
        ((self.x - position.x).powi(2) + (self.y - position.y).powi(2)).sqrt()
    }

    /// Rotate the vector from the origin to this position about the origin.
    pub fn rotate_vector(&self, angle: Angle) -> Position {
        Position::new(
            self.x * angle.0.cos() - self.y * angle.0.sin(),
            self.x * angle.0.sin() + self.y * angle.0.cos(),
        )
    }
}

impl Add for Position {
    type Output = Position;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl Sub for Position {
    type Output = Position;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Angle(f64);

impl Angle {
    pub const fn new(radians: f64) -> Self {
        Self(radians)
    }

    pub fn from_deg(degree: f64) -> Self {
        Self(degree * PI / 180.0)
    }

    pub fn to_deg(self) -> f64 {
        (self.0 * (180.0 / PI) + 360.0) % 360.0
    }
}

impl Neg for Angle {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Angle(-self.0)
    }
}

impl Add for Angle {
    type Output = Angle;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl From<Angle> for f64 {
    fn from(value: Angle) -> Self {
        value.0
    }
}

/// A 2D rigid transform: position plus right-hand orientation.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Pose {
    position: Position,
    orientation: Angle,
}

impl Pose {
    pub const fn new(position: Position, orientation: Angle) -> Self {
        Self {
            position,
            orientation,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn orientation(&self) -> Angle {
        self.orientation
    }

    /// Compose a pose given in this pose's frame into the parent frame.
    ///
    /// The child's offset is rotated about the parent origin by the parent
    /// orientation, then translated by the parent position; orientations
    /// add. A child offset from the origin therefore sweeps around the
    /// parent as the parent turns.
    pub fn compose(&self, child: Pose) -> Pose {
        let composed = self.isometry() * child.isometry();
        Pose::new(
            Position::new(composed.translation.vector.x, composed.translation.vector.y),
            self.orientation + child.orientation,
        )
    }

    fn isometry(&self) -> Isometry2<f64> {
        Isometry2::new(
            Vector2::new(self.position.x, self.position.y),
            self.orientation.into(),
        )
    }
}
