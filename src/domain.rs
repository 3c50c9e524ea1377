//! The domain module encapsulates the core business logic: poses and their
//! composition, the shape primitives, the pairwise intersection tests, and
//! the broad-phase scan over an environment.
//!
//! By minimizing hard dependencies, this module ensures the business logic
//! remains adaptable and independent of specific implementation details.

mod basis;
mod collision;
mod environment;
mod primitive;

pub use basis::{Angle, Pose, Position};
pub use environment::{Environment, RobotBody};
pub use primitive::{InvalidPrimitive, PlacedPrimitive, Primitive};
