pub mod chart;
pub mod config;
pub mod flash;
pub mod models;
pub mod session;
pub mod tracker;
pub mod validation;

mod memory;
pub use memory::MemorySessionStore;

#[cfg(not(target_arch = "wasm32"))]
mod file_store;
#[cfg(not(target_arch = "wasm32"))]
pub use file_store::FileSessionStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local_storage::LocalStorageSessionStore;

pub use chart::{ChartGeometry, WeightSummary};
pub use config::ClientConfig;
pub use flash::{FlashState, Ticket};
pub use models::{UserSession, WeightRecord};
pub use session::SessionStore;
pub use tracker::{AddForm, EditDraft, TrackerState};
pub use validation::{RegistrationForm, ValidationError};
