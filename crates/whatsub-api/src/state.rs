use sqlx::PgPool;

use crate::{ApiConfig, config::Environment};

/// Shared handler state. Cloning is cheap: the pool is reference counted.
#[derive(Clone, Debug)]
pub struct ApiState {
    pub pool: PgPool,
    pub environment: Environment,
}

impl ApiState {
    pub fn new(config: &ApiConfig, pool: PgPool) -> Self {
        Self {
            pool,
            environment: config.env.clone(),
        }
    }
}
