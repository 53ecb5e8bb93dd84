//! Recovery code entity.

pub mod model;

pub use model::RecoveryCode;
