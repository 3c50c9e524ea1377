//! Environment obstacles and the robot body.

use super::{PlacedPrimitive, Pose};

/// World-frame obstacles, fixed for the lifetime of a configuration.
///
/// Obstacles keep their insertion order; the scan below is deterministic
/// even though the boolean outcome does not depend on order.
#[derive(Clone, Debug, Default, PartialEq, PartialOrd)]
pub struct Environment {
    obstacles: Vec<PlacedPrimitive>,
}

impl Environment {
    pub fn new(obstacles: Vec<PlacedPrimitive>) -> Self {
        Self { obstacles }
    }

    pub fn obstacles(&self) -> &[PlacedPrimitive] {
        &self.obstacles
    }

    /// First-hit scan over the cross product of body and obstacle shapes.
    pub fn has_collision(&self, body: &[PlacedPrimitive]) -> bool {
        body.iter()
            .any(|shape| self.obstacles.iter().any(|o| shape.collides_with(o)))
    }
}

/// The robot's shapes in its own local frame, fixed at configuration time.
#[derive(Clone, Debug, Default, PartialEq, PartialOrd)]
pub struct RobotBody {
    shapes: Vec<PlacedPrimitive>,
}

impl RobotBody {
    pub fn new(shapes: Vec<PlacedPrimitive>) -> Self {
        Self { shapes }
    }

    pub fn shapes(&self) -> &[PlacedPrimitive] {
        &self.shapes
    }

    /// World-posed copy of the body with the robot origin at `pose`.
    ///
    /// The body itself is never re-posed in place, so concurrent queries
    /// each work on their own fresh copy.
    pub fn posed_at(&self, pose: Pose) -> Vec<PlacedPrimitive> {
        self.shapes.iter().map(|s| s.posed_in(pose)).collect()
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::super::{Angle, Position, Primitive};
    use super::*;

    fn unit_rectangle_environment() -> Environment {
        Environment::new(vec![PlacedPrimitive::new(
            Primitive::Rectangle {
                xmin: 0.0,
                ymin: 0.0,
                xmax: 1.0,
                ymax: 1.0,
            },
            Pose::default(),
        )])
    }

    fn circle_body(radius: f64) -> RobotBody {
        RobotBody::new(vec![PlacedPrimitive::new(
            Primitive::Circle { radius },
            Pose::default(),
        )])
    }

    #[rstest]
    #[case::disjoint(Position::new(5.0, 5.0), false)]
    #[case::center_inside(Position::new(0.5, 0.5), true)]
    fn test_environment_has_collision(#[case] position: Position, #[case] collided: bool) {
        let environment = unit_rectangle_environment();
        let body = circle_body(0.4);
        let posed = body.posed_at(Pose::new(position, Angle::new(0.0)));
        assert_eq!(environment.has_collision(&posed), collided);
    }

    #[test]
    fn test_environment_empty_never_collides() {
        let environment = Environment::new(vec![]);
        let posed = circle_body(10.0).posed_at(Pose::default());
        assert!(!environment.has_collision(&posed));
    }

    #[test]
    fn test_has_collision_any_body_shape_suffices() {
        let environment = unit_rectangle_environment();
        // Two shapes: one far off to the side, one over the obstacle.
        let body = RobotBody::new(vec![
            PlacedPrimitive::new(
                Primitive::Circle { radius: 0.1 },
                Pose::new(Position::new(10.0, 0.0), Angle::new(0.0)),
            ),
            PlacedPrimitive::new(
                Primitive::Circle { radius: 0.1 },
                Pose::new(Position::new(0.5, 0.5), Angle::new(0.0)),
            ),
        ]);
        let posed = body.posed_at(Pose::default());
        assert!(environment.has_collision(&posed));
    }

    #[rstest]
    #[case::no_offset(Position::new(0.0, 0.0))]
    #[case::shifted(Position::new(10.0, -5.0))]
    #[case::far_field(Position::new(-1000.0, 4000.0))]
    fn test_collision_is_translation_invariant(#[case] offset: Position) {
        let body = circle_body(0.4);
        for query in [
            Position::new(5.0, 5.0),
            Position::new(0.5, 0.5),
            Position::new(1.2, 0.5),
        ] {
            let environment = unit_rectangle_environment();
            let shifted_environment = Environment::new(
                environment
                    .obstacles()
                    .iter()
                    .map(|o| {
                        PlacedPrimitive::new(
                            o.primitive(),
                            Pose::new(o.pose().position() + offset, o.pose().orientation()),
                        )
                    })
                    .collect(),
            );

            let posed = body.posed_at(Pose::new(query, Angle::new(0.0)));
            let shifted_posed = body.posed_at(Pose::new(query + offset, Angle::new(0.0)));
            assert_eq!(
                environment.has_collision(&posed),
                shifted_environment.has_collision(&shifted_posed)
            );
        }
    }

    #[test]
    fn test_posed_at_leaves_the_body_untouched() {
        let body = RobotBody::new(vec![PlacedPrimitive::new(
            Primitive::Circle { radius: 0.2 },
            Pose::new(Position::new(1.0, 0.0), Angle::new(0.0)),
        )]);
        let before = body.clone();

        let posed = body.posed_at(Pose::new(Position::new(0.0, 0.0), Angle::new(0.5 * PI)));
        let reposed = body.posed_at(Pose::new(Position::new(0.0, 0.0), Angle::new(0.5 * PI)));

        assert_eq!(body, before);
        assert_eq!(posed, reposed);
    }

    #[test]
    fn test_posed_at_sweeps_offset_shapes() {
        let body = RobotBody::new(vec![PlacedPrimitive::new(
            Primitive::Circle { radius: 0.2 },
            Pose::new(Position::new(1.0, 0.0), Angle::new(0.0)),
        )]);
        let posed = body.posed_at(Pose::new(Position::new(0.0, 0.0), Angle::new(0.5 * PI)));

        approx::assert_abs_diff_eq!(
            posed[0].pose(),
            Pose::new(Position::new(0.0, 1.0), Angle::new(0.5 * PI)),
            epsilon = 2.0 * f64::EPSILON
        );
    }
}
