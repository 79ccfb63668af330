//! # Tracker view state
//!
//! [`TrackerState`] keeps the list of weight records shown by the tracker in
//! step with its inline editor. The view owns one instance inside a signal and
//! calls these transitions from its event handlers; the transitions themselves
//! never touch the network.
//!
//! Rules:
//! - at most one row is edited at a time, and while a row is being edited no
//!   row offers its Edit/Delete actions;
//! - a failed fetch empties the list so stale rows are never shown next to an
//!   error;
//! - replacing the list cancels an edit whose row disappeared;
//! - one request (add, save, delete or refresh) is in flight at a time, so a
//!   slow reload can never land on top of a newer list.

use crate::models::WeightRecord;
use crate::validation::{parse_weight, ValidationError};

/// The inline editor of one row.
#[derive(Clone, Debug, PartialEq)]
pub struct EditDraft {
    pub weight_id: i64,
    /// Raw text of the edit field.
    pub input: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TrackerState {
    records: Vec<WeightRecord>,
    editing: Option<EditDraft>,
    in_flight: bool,
}

impl TrackerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[WeightRecord] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn find(&self, weight_id: i64) -> Option<&WeightRecord> {
        self.records.iter().find(|r| r.weight_id == weight_id)
    }

    /// Install the result of a successful fetch.
    pub fn replace_records(&mut self, records: Vec<WeightRecord>) {
        self.records = records;
        if let Some(draft) = &self.editing {
            if self.find(draft.weight_id).is_none() {
                self.editing = None;
            }
        }
    }

    /// A fetch failed: show nothing rather than stale rows.
    pub fn fetch_failed(&mut self) {
        self.records.clear();
        self.editing = None;
    }

    /// Open the inline editor on `weight_id`, pre-filled with its weight.
    /// Returns `false` when another row is already being edited or the row
    /// is unknown.
    pub fn start_edit(&mut self, weight_id: i64) -> bool {
        if self.editing.is_some() {
            return false;
        }
        let Some(record) = self.find(weight_id) else {
            return false;
        };
        self.editing = Some(EditDraft {
            weight_id,
            input: record.weight.to_string(),
        });
        true
    }

    pub fn set_edit_input(&mut self, input: String) {
        if let Some(draft) = self.editing.as_mut() {
            draft.input = input;
        }
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    pub fn editing(&self) -> Option<&EditDraft> {
        self.editing.as_ref()
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn is_editing_row(&self, weight_id: i64) -> bool {
        self.editing
            .as_ref()
            .is_some_and(|draft| draft.weight_id == weight_id)
    }

    /// Row actions are offered only while nothing is being edited.
    pub fn row_actions_visible(&self) -> bool {
        !self.is_editing()
    }

    /// Claim the request slot. `false` while another request is pending.
    pub fn begin_request(&mut self) -> bool {
        if self.in_flight {
            return false;
        }
        self.in_flight = true;
        true
    }

    pub fn finish_request(&mut self) {
        self.in_flight = false;
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight
    }

    /// The `(weight_id, weight)` pair to submit for the open edit.
    /// `None` when nothing is being edited.
    pub fn edit_request(&self) -> Option<Result<(i64, f64), ValidationError>> {
        let draft = self.editing.as_ref()?;
        Some(parse_weight(&draft.input).map(|weight| (draft.weight_id, weight)))
    }
}

/// Text of the add-entry field. Cleared after a successful add, kept after a
/// failed one so the user can retry.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AddForm {
    pub input: String,
}

impl AddForm {
    pub fn request(&self) -> Result<f64, ValidationError> {
        parse_weight(&self.input)
    }

    pub fn submitted(&mut self) {
        self.input.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::parse_timestamp;

    fn record(weight_id: i64, weight: f64) -> WeightRecord {
        WeightRecord {
            weight_id,
            user_id: 1,
            weight,
            timestamp: parse_timestamp("2024-03-01T08:00:00").unwrap(),
        }
    }

    fn loaded() -> TrackerState {
        let mut state = TrackerState::new();
        state.replace_records(vec![record(1, 180.0), record(2, 179.5)]);
        state
    }

    #[test]
    fn test_fetch_failure_clears_records() {
        let mut state = loaded();
        assert_eq!(state.records().len(), 2);
        state.fetch_failed();
        assert!(state.is_empty());
        assert!(!state.is_editing());
    }

    #[test]
    fn test_start_edit_prefills_weight() {
        let mut state = loaded();
        assert!(state.start_edit(2));
        let draft = state.editing().unwrap();
        assert_eq!(draft.weight_id, 2);
        assert_eq!(draft.input, "179.5");
        assert!(state.is_editing_row(2));
        assert!(!state.is_editing_row(1));
        assert!(!state.row_actions_visible());
    }

    #[test]
    fn test_only_one_row_editable() {
        let mut state = loaded();
        assert!(state.start_edit(1));
        assert!(!state.start_edit(2));
        assert!(state.is_editing_row(1));

        state.cancel_edit();
        assert!(state.row_actions_visible());
        assert!(state.start_edit(2));
    }

    #[test]
    fn test_unknown_row_cannot_be_edited() {
        let mut state = loaded();
        assert!(!state.start_edit(99));
        assert!(!state.is_editing());
    }

    #[test]
    fn test_edit_request_validates_input() {
        let mut state = loaded();
        assert!(state.edit_request().is_none());

        state.start_edit(1);
        state.set_edit_input("abc".to_string());
        assert_eq!(state.edit_request(), Some(Err(ValidationError::InvalidWeight)));

        state.set_edit_input("177.2".to_string());
        assert_eq!(state.edit_request(), Some(Ok((1, 177.2))));
    }

    #[test]
    fn test_refetch_cancels_edit_of_deleted_row() {
        let mut state = loaded();
        state.start_edit(2);
        state.replace_records(vec![record(1, 180.0)]);
        assert!(!state.is_editing());

        state.start_edit(1);
        state.replace_records(vec![record(1, 181.0), record(3, 182.0)]);
        assert!(state.is_editing_row(1));
    }

    #[test]
    fn test_add_form_cleared_after_submit() {
        let mut form = AddForm {
            input: "182.4".to_string(),
        };
        assert_eq!(form.request(), Ok(182.4));
        form.submitted();
        assert!(form.input.is_empty());
        assert_eq!(form.request(), Err(ValidationError::InvalidWeight));
    }

    #[test]
    fn test_refresh_waits_for_pending_request() {
        let mut state = loaded();
        assert!(state.begin_request());
        assert!(state.is_busy());
        // A manual reload while a delete is pending is refused
        assert!(!state.begin_request());

        state.finish_request();
        assert!(!state.is_busy());
        assert!(state.begin_request());
    }

    #[test]
    fn test_fetch_failure_keeps_request_slot() {
        let mut state = loaded();
        assert!(state.begin_request());
        state.fetch_failed();
        assert!(state.is_busy());
    }
}
