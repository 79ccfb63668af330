//! Request and response bodies of the two services.

mod user;
mod weight;

pub use user::{HealthStatus, LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};
pub use weight::{DeleteResponse, WeightInput, WeightUpdate};
