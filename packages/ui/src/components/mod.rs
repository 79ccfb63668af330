//! Small form primitives shared by every view.

mod alert;
mod button;
mod input;

pub use alert::{Alert, AlertVariant};
pub use button::{Button, ButtonVariant};
pub use input::{Input, Label};
