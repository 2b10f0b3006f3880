//! Centralized assembly of complete patient records.

use rand_core::RngCore;
use tracing::trace;

use crate::generator::{self, Demographics, Lcg};
use crate::record::PatientRecord;

/// Seed for the factory's own priority stream when none is given.
///
/// Kept separate from the demographic seed so priority randomness does
/// not perturb the sequence of names and dates.
pub const DEFAULT_PRIORITY_SEED: u64 = 42;

/// Builds fully initialized [`PatientRecord`]s.
///
/// Callers ask the factory for a record instead of assembling one
/// themselves: the factory allocates a unique sequential NHS number,
/// draws a priority from its own seeded stream, fills in demographics,
/// and seeds the record's history with an initial clinical assessment.
/// With fixed seeds the whole sequence of records is reproducible.
///
/// # Example
///
/// ```
/// use triage_model::RecordFactory;
///
/// let mut factory = RecordFactory::from_seed(12345);
/// let a = factory.create();
/// let b = factory.create();
///
/// assert_eq!(a.nhs_number(), "1");
/// assert_eq!(b.nhs_number(), "2");
/// ```
#[derive(Debug, Clone)]
pub struct RecordFactory<R = Lcg> {
    demographics: Demographics<R>,
    priority_rng: Lcg,
    next_id: u64,
}

impl RecordFactory<Lcg> {
    /// Creates a factory whose demographics are seeded with `seed` and
    /// whose priority stream uses [`DEFAULT_PRIORITY_SEED`].
    #[must_use]
    pub const fn from_seed(seed: u64) -> Self {
        Self::new(Demographics::from_seed(seed), DEFAULT_PRIORITY_SEED)
    }
}

impl<R: RngCore> RecordFactory<R> {
    /// Creates a factory from a demographic picker and a priority seed.
    #[must_use]
    pub const fn new(demographics: Demographics<R>, priority_seed: u64) -> Self {
        Self {
            demographics,
            priority_rng: Lcg::new(priority_seed),
            next_id: 0,
        }
    }

    /// Assembles the next patient record.
    ///
    /// The record arrives with a unique NHS number, a priority in `1..=5`,
    /// and a history holding the creation entry, two diagnosed ailments
    /// and one observed symptom.
    pub fn create(&mut self) -> PatientRecord {
        let nhs_number = self.next_nhs_number();
        let priority = self.next_priority();

        // The demographic datasets are non-empty consts, so picks never
        // come back empty.
        let first_name = self.pick(generator::FIRST_NAMES);
        let last_name = self.pick(generator::LAST_NAMES);
        let dob = self.pick(generator::DOBS);
        let blood_type = self.pick(generator::BLOOD_TYPES);

        let mut record =
            PatientRecord::new(nhs_number, dob, first_name, last_name, priority, blood_type)
                .expect("factory priorities are always in range");

        for ailment in self.demographics.pick_many(generator::AILMENTS, 2) {
            record.update_status(format!("Diagnosed with: {ailment}"));
        }
        for symptom in self.demographics.pick_many(generator::SYMPTOMS, 1) {
            record.update_status(format!("Showing symptom: {symptom}"));
        }

        trace!(
            nhs_number = record.nhs_number(),
            priority = record.priority(),
            "record created"
        );
        record
    }

    /// Sequential counter; uniqueness needs no external registry.
    fn next_nhs_number(&mut self) -> String {
        self.next_id += 1;
        self.next_id.to_string()
    }

    #[allow(clippy::cast_possible_truncation)]
    fn next_priority(&mut self) -> u8 {
        (self.priority_rng.next_u32() % 5) as u8 + 1
    }

    fn pick(&mut self, items: &'static [&'static str]) -> &'static str {
        self.demographics.pick(items).copied().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{MAX_PRIORITY, MIN_PRIORITY};

    #[test]
    fn nhs_numbers_are_sequential_and_unique() {
        let mut factory = RecordFactory::from_seed(12_345);
        let ids: Vec<String> = (0..5)
            .map(|_| factory.create().nhs_number().to_string())
            .collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn priorities_stay_in_range() {
        let mut factory = RecordFactory::from_seed(12_345);
        for _ in 0..100 {
            let record = factory.create();
            assert!((MIN_PRIORITY..=MAX_PRIORITY).contains(&record.priority()));
        }
    }

    #[test]
    fn same_seeds_reproduce_the_same_records() {
        let mut a = RecordFactory::from_seed(777);
        let mut b = RecordFactory::from_seed(777);

        for _ in 0..10 {
            let left = a.create();
            let right = b.create();
            assert_eq!(left.nhs_number(), right.nhs_number());
            assert_eq!(left.first_name(), right.first_name());
            assert_eq!(left.last_name(), right.last_name());
            assert_eq!(left.dob(), right.dob());
            assert_eq!(left.blood_type(), right.blood_type());
            assert_eq!(left.priority(), right.priority());
        }
    }

    #[test]
    fn history_holds_the_initial_assessment() {
        let mut factory = RecordFactory::from_seed(12_345);
        let record = factory.create();

        // Creation entry + two ailments + one symptom.
        assert_eq!(record.history().len(), 4);
        assert!(record.current_status().starts_with("Showing symptom: "));

        let entries: Vec<&String> = record.history().iter().collect();
        assert!(entries[1].starts_with("Diagnosed with: "));
        assert!(entries[2].starts_with("Diagnosed with: "));
        assert!(entries[3].starts_with("Patient record created"));
    }

    #[test]
    fn demographics_come_from_the_datasets() {
        let mut factory = RecordFactory::from_seed(12_345);
        let record = factory.create();

        assert!(generator::FIRST_NAMES.contains(&record.first_name()));
        assert!(generator::LAST_NAMES.contains(&record.last_name()));
        assert!(generator::DOBS.contains(&record.dob()));
        assert!(generator::BLOOD_TYPES.contains(&record.blood_type()));
    }
}
