mod modal_overlay;
pub use modal_overlay::{ConfirmDialog, ModalOverlay};

mod login;
pub use login::LoginView;

mod register;
pub use register::RegisterView;

mod tracker;
pub use tracker::TrackerView;
