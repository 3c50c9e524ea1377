//! Collision service holding the configured map and serving pose queries.
//!
//! The configuration is published as an immutable snapshot behind a
//! read-write lock: a query clones the current snapshot handle and
//! evaluates against it, so replacing the configuration never interleaves
//! with an in-flight evaluation and queries from multiple threads are
//! independent.

use std::sync::{Arc, PoisonError, RwLock};

use log::{info, trace};
use thiserror::Error;

use crate::domain::{Environment, InvalidPrimitive, Pose, RobotBody};

/// The `set_params` payload: world-frame obstacles plus the robot body in
/// its local frame.
#[derive(Clone, Debug, Default, PartialEq, PartialOrd)]
pub struct MapDefinition {
    pub environment: Environment,
    pub body: RobotBody,
}

/// Oracle answering whether the configured robot body collides with the
/// configured environment at a queried pose.
///
/// Starts unconfigured; [`CollisionService::set_params`] moves it to the
/// configured state and may be called again at any time, last write wins.
#[derive(Debug, Default)]
pub struct CollisionService {
    params: RwLock<Option<Arc<MapDefinition>>>,
}

impl CollisionService {
    pub fn new() -> Self {
        info!("init()");
        Self::default()
    }

    /// Validate and publish a configuration.
    ///
    /// On a validation failure nothing is published; a previously active
    /// configuration stays in force.
    pub fn set_params(&self, params: MapDefinition) -> Result<(), ConfigError> {
        for placed in params
            .environment
            .obstacles()
            .iter()
            .chain(params.body.shapes())
        {
            placed.primitive().validate()?;
        }

        info!(
            "configured: {} obstacles, {} body shapes",
            params.environment.obstacles().len(),
            params.body.shapes().len()
        );
        *self
            .params
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(Arc::new(params));
        Ok(())
    }

    /// Check the robot body, placed at `pose`, against the environment.
    ///
    /// The body is re-posed into a fresh world-frame copy for this query;
    /// the stored configuration is never mutated.
    pub fn query(&self, pose: Pose) -> Result<bool, QueryError> {
        let params = self
            .params
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
            .ok_or(QueryError::NotConfigured)?;

        let posed_body = params.body.posed_at(pose);
        let collided = params.environment.has_collision(&posed_body);
        trace!("query {pose:?} -> collided={collided}");
        Ok(collided)
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("invalid primitive: {0}")]
    InvalidPrimitive(#[from] InvalidPrimitive),
}

#[derive(Error, Debug, PartialEq)]
pub enum QueryError {
    #[error("query received before set_params")]
    NotConfigured,
}
