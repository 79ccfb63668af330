//! Success and error banners.
//!
//! Each `show_*` hands back a [`Ticket`]. The view starts a timer with it and
//! calls the matching `expire_*` when the timer fires; the message is only
//! cleared if no newer message replaced it in the meantime.

/// Identifies one displayed message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FlashState {
    error: Option<String>,
    success: Option<String>,
    error_ticket: u64,
    success_ticket: u64,
}

impl FlashState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn success(&self) -> Option<&str> {
        self.success.as_deref()
    }

    /// Show a success message. A success also clears any error.
    pub fn show_success(&mut self, message: impl Into<String>) -> Ticket {
        self.clear_error();
        self.success_ticket += 1;
        self.success = Some(message.into());
        Ticket(self.success_ticket)
    }

    /// Show an error message.
    pub fn show_error(&mut self, message: impl Into<String>) -> Ticket {
        self.error_ticket += 1;
        self.error = Some(message.into());
        Ticket(self.error_ticket)
    }

    /// Clear the success message if `ticket` is still the current one.
    pub fn expire_success(&mut self, ticket: Ticket) -> bool {
        if ticket.0 == self.success_ticket && self.success.is_some() {
            self.success = None;
            return true;
        }
        false
    }

    /// Clear the error message if `ticket` is still the current one.
    pub fn expire_error(&mut self, ticket: Ticket) -> bool {
        if ticket.0 == self.error_ticket && self.error.is_some() {
            self.error = None;
            return true;
        }
        false
    }

    pub fn clear_error(&mut self) {
        if self.error.take().is_some() {
            self.error_ticket += 1;
        }
    }

    pub fn clear(&mut self) {
        self.clear_error();
        if self.success.take().is_some() {
            self.success_ticket += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_expires() {
        let mut flash = FlashState::new();
        let ticket = flash.show_success("Weight updated successfully!");
        assert_eq!(flash.success(), Some("Weight updated successfully!"));
        assert!(flash.expire_success(ticket));
        assert!(flash.success().is_none());
    }

    #[test]
    fn test_stale_timer_keeps_newer_message() {
        let mut flash = FlashState::new();
        let first = flash.show_success("Weight added successfully! Weight ID: 1");
        let second = flash.show_success("Weight deleted successfully!");

        assert!(!flash.expire_success(first));
        assert_eq!(flash.success(), Some("Weight deleted successfully!"));

        assert!(flash.expire_success(second));
        assert!(flash.success().is_none());
    }

    #[test]
    fn test_success_clears_error() {
        let mut flash = FlashState::new();
        let err = flash.show_error("Failed to add weight");
        flash.show_success("Weight added successfully! Weight ID: 4");
        assert!(flash.error().is_none());

        // The old error timer must not clear a later error.
        let newer = flash.show_error("Failed to delete weight");
        assert!(!flash.expire_error(err));
        assert_eq!(flash.error(), Some("Failed to delete weight"));
        assert!(flash.expire_error(newer));
    }

    #[test]
    fn test_error_and_success_coexist() {
        let mut flash = FlashState::new();
        flash.show_success("Weight updated successfully!");
        flash.show_error("Failed to fetch weights");
        assert!(flash.success().is_some());
        assert!(flash.error().is_some());

        flash.clear();
        assert!(flash.success().is_none());
        assert!(flash.error().is_none());
    }
}
