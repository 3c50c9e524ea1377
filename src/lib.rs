//! Static-scene collision oracle for a rigid multi-shape robot body.
//!
//! Given a fixed map of placed circles and rectangles and a robot body
//! described as shapes in its own local frame, the oracle answers whether
//! placing the body at a queried pose intersects any obstacle. Checks are
//! discrete pose snapshots; there is no swept collision, penetration depth
//! or contact information.
//!
//! ```
//! use collision_oracle::{
//!     Angle, CollisionService, Environment, MapDefinition, PlacedPrimitive, Pose, Position,
//!     Primitive, RobotBody,
//! };
//!
//! let service = CollisionService::new();
//! service.set_params(MapDefinition {
//!     environment: Environment::new(vec![PlacedPrimitive::new(
//!         Primitive::Rectangle { xmin: 0.0, ymin: 0.0, xmax: 1.0, ymax: 1.0 },
//!         Pose::default(),
//!     )]),
//!     body: RobotBody::new(vec![PlacedPrimitive::new(
//!         Primitive::Circle { radius: 0.4 },
//!         Pose::default(),
//!     )]),
//! })?;
//!
//! assert!(service.query(Pose::new(Position::new(0.5, 0.5), Angle::from_deg(0.0)))?);
//! assert!(!service.query(Pose::new(Position::new(5.0, 5.0), Angle::from_deg(0.0)))?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod domain;
mod service;

pub use domain::{
    Angle, Environment, InvalidPrimitive, PlacedPrimitive, Pose, Position, Primitive, RobotBody,
};
pub use service::{CollisionService, ConfigError, MapDefinition, QueryError};
