use thiserror::Error;

mod design;
mod gravity;

pub use design::SunSyncDesign;
pub use gravity::GravityModel;

/// Configuration Error
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("unknown gravity model \"{0}\"")]
    UnknownGravityModel(String),
}
