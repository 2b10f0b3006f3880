//! The patient record: the orderable, keyable entity of the simulation.

use core::cmp::Ordering;
use core::fmt;

use thiserror::Error;
use triage_collections::LinkedStack;

/// Most urgent priority level.
pub const MIN_PRIORITY: u8 = 1;
/// Least urgent priority level.
pub const MAX_PRIORITY: u8 = 5;

/// Error returned when a priority falls outside `1..=5`.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("priority must be between 1 and 5, got {0}")]
pub struct InvalidPriority(pub u8);

/// A patient in the triage simulation.
///
/// Identity fields (NHS number, date of birth, names, blood type) are
/// fixed at construction; the priority is the one clinically mutable
/// field, and every change to it is recorded in the record's own LIFO
/// history log, so the most recent clinical event is always one peek away.
///
/// # Ordering
///
/// Records order by ascending priority (1 is most urgent), with ties
/// broken by the NHS number interpreted numerically in ascending order -
/// the factory issues sequential numeric identifiers, so the tie-break is
/// arrival order. `"10"` sorts after `"2"`, not before it. A record built
/// by hand with a non-numeric identifier sorts after all numeric ones.
///
/// Equality follows the same comparison key, keeping `Eq` consistent
/// with `Ord`.
#[derive(Debug, Clone)]
pub struct PatientRecord {
    nhs_number: String,
    dob: String,
    first_name: String,
    last_name: String,
    priority: u8,
    blood_type: String,
    history: LinkedStack<String>,
}

impl PatientRecord {
    /// Creates a record and seeds its history with a creation entry.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidPriority`] when `priority` is outside `1..=5`.
    pub fn new(
        nhs_number: impl Into<String>,
        dob: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        priority: u8,
        blood_type: impl Into<String>,
    ) -> Result<Self, InvalidPriority> {
        if !(MIN_PRIORITY..=MAX_PRIORITY).contains(&priority) {
            return Err(InvalidPriority(priority));
        }

        let mut history = LinkedStack::new();
        history.push(format!("Patient record created with priority {priority}."));

        Ok(Self {
            nhs_number: nhs_number.into(),
            dob: dob.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            priority,
            blood_type: blood_type.into(),
            history,
        })
    }

    /// The unique identifier, used as the registry hash key.
    #[must_use]
    pub fn nhs_number(&self) -> &str {
        &self.nhs_number
    }

    /// Date of birth.
    #[must_use]
    pub fn dob(&self) -> &str {
        &self.dob
    }

    /// Forename.
    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Surname.
    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Current medical urgency, 1 (most urgent) to 5.
    #[must_use]
    pub const fn priority(&self) -> u8 {
        self.priority
    }

    /// Blood group.
    #[must_use]
    pub fn blood_type(&self) -> &str {
        &self.blood_type
    }

    /// Updates the priority and records the change in the history log.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidPriority`] when `priority` is outside `1..=5`;
    /// the record is unchanged and nothing is logged.
    pub fn set_priority(&mut self, priority: u8) -> Result<(), InvalidPriority> {
        if !(MIN_PRIORITY..=MAX_PRIORITY).contains(&priority) {
            return Err(InvalidPriority(priority));
        }
        self.priority = priority;
        self.history.push(format!("Priority updated to {priority}."));
        Ok(())
    }

    /// Appends an event to the history log.
    pub fn update_status(&mut self, message: impl Into<String>) {
        self.history.push(message.into());
    }

    /// Returns the most recent history entry.
    #[must_use]
    pub fn current_status(&self) -> &str {
        self.history.peek().map_or("No status.", String::as_str)
    }

    /// The full LIFO history log, most recent entry first.
    #[must_use]
    pub const fn history(&self) -> &LinkedStack<String> {
        &self.history
    }

    /// NHS number as an arrival ordinal; non-numeric identifiers sort last.
    fn arrival_order(&self) -> u64 {
        self.nhs_number.parse().unwrap_or(u64::MAX)
    }
}

impl Ord for PatientRecord {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then_with(|| self.arrival_order().cmp(&other.arrival_order()))
    }
}

impl PartialOrd for PatientRecord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for PatientRecord {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for PatientRecord {}

impl fmt::Display for PatientRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[PatientRecord: {} | {}, {} | P:{} | BT:{}]",
            self.nhs_number, self.last_name, self.first_name, self.priority, self.blood_type
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(nhs_number: &str, priority: u8) -> PatientRecord {
        PatientRecord::new(nhs_number, "1970-10-11", "Ada", "Lovelace", priority, "O+").unwrap()
    }

    #[test]
    fn creation_seeds_the_history() {
        let record = record("1", 3);
        assert_eq!(
            record.current_status(),
            "Patient record created with priority 3."
        );
        assert_eq!(record.history().len(), 1);
    }

    #[test]
    fn out_of_range_priority_is_rejected_at_construction() {
        let result = PatientRecord::new("1", "1970-10-11", "Ada", "Lovelace", 0, "O+");
        assert_eq!(result.unwrap_err(), InvalidPriority(0));

        let result = PatientRecord::new("1", "1970-10-11", "Ada", "Lovelace", 6, "O+");
        assert_eq!(result.unwrap_err(), InvalidPriority(6));
    }

    #[test]
    fn set_priority_validates_and_logs() {
        let mut record = record("1", 3);

        assert_eq!(record.set_priority(9), Err(InvalidPriority(9)));
        assert_eq!(record.priority(), 3);
        assert_eq!(record.history().len(), 1);

        record.set_priority(1).unwrap();
        assert_eq!(record.priority(), 1);
        assert_eq!(record.current_status(), "Priority updated to 1.");
        assert_eq!(record.history().len(), 2);
    }

    #[test]
    fn update_status_stacks_newest_first() {
        let mut record = record("1", 2);
        record.update_status("Diagnosed with: Fever");
        record.update_status("Showing symptom: High Temperature");

        assert_eq!(record.current_status(), "Showing symptom: High Temperature");
        let entries: Vec<&String> = record.history().iter().collect();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0], "Showing symptom: High Temperature");
        assert_eq!(entries[2], "Patient record created with priority 2.");
    }

    #[test]
    fn lower_priority_value_is_more_urgent() {
        assert!(record("1", 1) < record("2", 5));
        assert!(record("2", 5) > record("1", 1));
    }

    #[test]
    fn ties_break_on_numeric_identifier_not_lexicographic() {
        // "10" must sort after "2" even though it is lexicographically first.
        assert!(record("2", 3) < record("10", 3));
    }

    #[test]
    fn equal_key_records_compare_equal() {
        assert_eq!(record("7", 2), record("7", 2));
    }

    #[test]
    fn display_renders_identity_and_priority() {
        let record = record("42", 2);
        assert_eq!(
            record.to_string(),
            "[PatientRecord: 42 | Lovelace, Ada | P:2 | BT:O+]"
        );
    }
}
