pub use std::sync::Arc;
pub use std::time::Instant;

pub use anyhow::{anyhow, ensure, Context};
pub use tracing::{error, info, instrument};

pub type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;
