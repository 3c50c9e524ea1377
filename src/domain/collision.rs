//! Exact pairwise intersection tests for placed primitives.
//!
//! All tests share the same contact convention: touching counts as
//! zero-area overlap and is therefore not a collision. Every test is
//! symmetric in its two arguments.

use nalgebra::Vector2;

use super::{Angle, PlacedPrimitive, Pose, Position, Primitive};

impl PlacedPrimitive {
    /// Exact boolean intersection test against another placed primitive.
    ///
    /// Dispatches over the closed primitive pair; the `match` is exhaustive,
    /// so adding a primitive variant without a test here is a compile
    /// error.
    pub fn collides_with(&self, other: &PlacedPrimitive) -> bool {
        // Shapes whose bounding circles only touch cannot overlap with
        // positive area. This is also the seam for a future broad-phase
        // acceleration structure.
        let center_distance = self.pose().position().distance(other.pose().position());
        let bounding_radii = self.primitive().bounding_radius() + other.primitive().bounding_radius();
        if center_distance >= bounding_radii {
            return false;
        }

        match (self.primitive(), other.primitive()) {
            (Primitive::Circle { radius }, Primitive::Circle { radius: other_radius }) => {
                center_distance < radius + other_radius
            }
            (
                Primitive::Circle { radius },
                Primitive::Rectangle {
                    xmin,
                    ymin,
                    xmax,
                    ymax,
                },
            ) => rectangle_circle(other.pose(), (xmin, ymin, xmax, ymax), self.pose(), radius),
            (
                Primitive::Rectangle {
                    xmin,
                    ymin,
                    xmax,
                    ymax,
                },
                Primitive::Circle { radius },
            ) => rectangle_circle(self.pose(), (xmin, ymin, xmax, ymax), other.pose(), radius),
            (
                Primitive::Rectangle {
                    xmin,
                    ymin,
                    xmax,
                    ymax,
                },
                Primitive::Rectangle {
                    xmin: other_xmin,
                    ymin: other_ymin,
                    xmax: other_xmax,
                    ymax: other_ymax,
                },
            ) => rectangle_rectangle(
                self.pose(),
                (xmin, ymin, xmax, ymax),
                other.pose(),
                (other_xmin, other_ymin, other_xmax, other_ymax),
            ),
        }
    }
}

/// Collision iff the disk's intersection with the rotated rectangle has
/// positive area, tested via the closest point on the rectangle to the
/// circle center in the rectangle's local frame.
fn rectangle_circle(
    rect_pose: Pose,
    (xmin, ymin, xmax, ymax): (f64, f64, f64, f64),
    circle_pose: Pose,
    radius: f64,
) -> bool {
    let local_center =
        (circle_pose.position() - rect_pose.position()).rotate_vector(-rect_pose.orientation());
    let closest = Position::new(
        local_center.x().clamp(xmin, xmax),
        local_center.y().clamp(ymin, ymax),
    );
    closest.distance(local_center) < radius
}

/// Separating-axis test over both rectangles' edge normals. The rectangles
/// collide iff their projections overlap with positive length on all four
/// axes; a zero-length overlap is an edge or corner touch.
fn rectangle_rectangle(
    pose: Pose,
    extents: (f64, f64, f64, f64),
    other_pose: Pose,
    other_extents: (f64, f64, f64, f64),
) -> bool {
    let corners = rectangle_corners(pose, extents);
    let other_corners = rectangle_corners(other_pose, other_extents);

    edge_axes(pose.orientation())
        .into_iter()
        .chain(edge_axes(other_pose.orientation()))
        .all(|axis| {
            let (min, max) = projected_interval(&corners, axis);
            let (other_min, other_max) = projected_interval(&other_corners, axis);
            min.max(other_min) < max.min(other_max)
        })
}

/// World-space corners of a rectangle, counterclockwise from (xmin, ymin).
fn rectangle_corners(
    pose: Pose,
    (xmin, ymin, xmax, ymax): (f64, f64, f64, f64),
) -> [Position; 4] {
    [
        Position::new(xmin, ymin),
        Position::new(xmax, ymin),
        Position::new(xmax, ymax),
        Position::new(xmin, ymax),
    ]
    .map(|corner| pose.position() + corner.rotate_vector(pose.orientation()))
}

fn edge_axes(orientation: Angle) -> [Vector2<f64>; 2] {
    let theta: f64 = orientation.into();
    [
        Vector2::new(theta.cos(), theta.sin()),
        Vector2::new(-theta.sin(), theta.cos()),
    ]
}

fn projected_interval(corners: &[Position; 4], axis: Vector2<f64>) -> (f64, f64) {
    corners
        .iter()
        .map(|corner| Vector2::new(corner.x(), corner.y()).dot(&axis))
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), p| {
            (min.min(p), max.max(p))
        })
}
