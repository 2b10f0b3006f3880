//! Deterministic demographic generation from fixed datasets.
//!
//! The simulation never reaches for an ambient random source. Everything
//! stochastic flows through a generator value seeded at construction, so
//! two runs with the same seed pick the same names, dates of birth and
//! attributes in the same order. The generator itself is a linear
//! congruential generator: a single integer of state, trivially
//! predictable, which is exactly what repeatable tests want.

use rand_core::{RngCore, impls};

/// ANSI C `rand` multiplier.
const LCG_MULTIPLIER: u64 = 1_103_515_245;
/// ANSI C `rand` increment.
const LCG_INCREMENT: u64 = 12_345;
/// State is kept modulo 2^31.
const LCG_MODULUS: u64 = 1 << 31;

/// Seed used by [`Lcg::default`] and the convenience constructors.
pub const DEFAULT_SEED: u64 = 12_345;

/// A linear congruential generator with the historical ANSI C constants.
///
/// Steps `state = (state * 1103515245 + 12345) mod 2^31`. Implements
/// [`RngCore`] so anything generic over a random source accepts it, while
/// staying fully deterministic per seed.
#[derive(Debug, Clone)]
pub struct Lcg {
    state: u64,
}

impl Lcg {
    /// Creates a generator starting from `seed`.
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self {
            state: seed % LCG_MODULUS,
        }
    }
}

impl Default for Lcg {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl RngCore for Lcg {
    #[allow(clippy::cast_possible_truncation)]
    fn next_u32(&mut self) -> u32 {
        self.state = (self.state * LCG_MULTIPLIER + LCG_INCREMENT) % LCG_MODULUS;
        self.state as u32
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest);
    }
}

/// Picks patient attributes from the static datasets below.
///
/// The datasets are compiled in; there is no file I/O. Repeated picks walk
/// the generator's sequence, so the same seed yields the same attributes
/// in the same order. Lists are never modified and duplicate picks are
/// allowed.
#[derive(Debug, Clone)]
pub struct Demographics<R = Lcg> {
    rng: R,
}

impl Demographics<Lcg> {
    /// Creates a picker over an [`Lcg`] seeded with `seed`.
    #[must_use]
    pub const fn from_seed(seed: u64) -> Self {
        Self::new(Lcg::new(seed))
    }
}

impl<R: RngCore> Demographics<R> {
    /// Creates a picker driven by `rng`.
    #[must_use]
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Returns one pseudo-randomly chosen element, or `None` for an empty
    /// list.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let index = self.next_index(items.len());
        Some(&items[index])
    }

    /// Returns `count` pseudo-randomly chosen elements, possibly with
    /// repeats.
    ///
    /// Returns an empty vector when the list is empty or `count` exceeds
    /// its length.
    pub fn pick_many<'a, T>(&mut self, items: &'a [T], count: usize) -> Vec<&'a T> {
        if items.is_empty() || count > items.len() {
            return Vec::new();
        }
        (0..count).map(|_| &items[self.next_index(items.len())]).collect()
    }

    fn next_index(&mut self, len: usize) -> usize {
        self.rng.next_u32() as usize % len
    }
}

/// Pathologies and ailments.
pub const AILMENTS: &[&str] = &[
    "Fever", "Headache", "Cough", "Fatigue", "Nausea", "Vomiting", "Diarrhea",
    "Sore Throat", "Congestion", "Chills", "Dizziness", "Loss of Appetite",
    "Rash", "Muscle Pain", "Joint Pain", "Back Pain", "Stomach Pain",
];

/// Clinical symptoms.
pub const SYMPTOMS: &[&str] = &[
    "High Temperature", "Chronic Cough", "Persistent Nausea",
    "Persistent Vomiting", "Persistent Diarrhea", "Sputum Production",
    "Swollen Lymph Nodes", "Swollen Glands", "Swollen Skin",
    "Swollen Muscles", "Swollen Joints", "Swollen Back",
    "Swollen Stomach", "Swollen Lungs", "Swollen Kidneys",
];

/// Pharmacological treatments.
pub const MEDICATIONS: &[&str] = &[
    "Paracetamol", "Ibuprofen", "Acetaminophen", "Aspirin", "Antihistamines",
    "Antacids", "Antifungal Medication", "Antimalarial Medication",
    "Antiviral Medication", "Blood Pressure Medication",
    "Diabetes Medication", "High Cholesterol Medication",
    "High Blood Sugar Medication", "Lipid Lowering Medication",
    "Heart Disease Medication",
];

/// Forenames.
pub const FIRST_NAMES: &[&str] = &[
    "James", "Mary", "Robert", "Patricia", "John", "Jennifer", "Michael", "Linda",
    "David", "Elizabeth", "William", "Barbara", "Richard", "Susan", "Joseph", "Jessica",
    "Thomas", "Sarah", "Charles", "Karen", "Christopher", "Lisa", "Daniel", "Nancy",
    "Matthew", "Betty", "Anthony", "Margaret", "Mark", "Sandra", "Donald", "Ashley",
    "Steven", "Kimberly", "Paul", "Emily", "Andrew", "Donna", "Joshua", "Michelle",
    "Kenneth", "Carol", "Kevin", "Amanda", "Brian", "Dorothy", "George", "Melissa",
    "Timothy", "Deborah", "Ronald", "Stephanie", "Edward", "Rebecca", "Jason", "Sharon",
    "Jeffrey", "Laura", "Ryan", "Cynthia", "Jacob", "Kathleen", "Gary", "Amy",
    "Nicholas", "Angela", "Eric", "Shirley", "Jonathan", "Anna", "Stephen", "Brenda",
    "Larry", "Pamela", "Justin", "Emma", "Scott", "Nicole", "Brandon", "Helen",
    "Benjamin", "Samantha", "Samuel", "Katherine", "Gregory", "Christine", "Frank", "Debra",
    "Alexander", "Rachel", "Raymond", "Catherine", "Patrick", "Carolyn", "Jack", "Janet",
    "Dennis", "Ruth", "Jerry", "Maria", "Tyler", "Heather",
];

/// Surnames.
pub const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis",
    "Rodriguez", "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas",
    "Taylor", "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson", "White",
    "Harris", "Sanchez", "Clark", "Ramirez", "Lewis", "Robinson", "Walker", "Young",
    "Allen", "King", "Wright", "Scott", "Torres", "Nguyen", "Hill", "Flores",
    "Green", "Adams", "Nelson", "Baker", "Hall", "Rivera", "Campbell", "Mitchell",
    "Carter", "Roberts", "Gomez", "Phillips", "Evans", "Turner", "Diaz", "Parker",
    "Cruz", "Edwards", "Collins", "Reyes", "Stewart", "Morris", "Morales", "Murphy",
    "Cook", "Rogers", "Gutierrez", "Ortiz", "Morgan", "Cooper", "Peterson", "Bailey",
    "Reed", "Kelly", "Howard", "Ramos", "Kim", "Cox", "Ward", "Richardson",
    "Watson", "Brooks", "Chavez", "Wood", "James", "Bennett", "Gray", "Mendoza",
    "Ruiz", "Hughes", "Price", "Alvarez", "Castillo", "Sanders", "Patel", "Myers",
    "Long", "Ross", "Foster", "Jimenez",
];

/// Dates of birth.
pub const DOBS: &[&str] = &[
    "1950-01-15", "1951-03-22", "1952-07-04", "1953-11-30", "1954-05-12", "1955-09-19",
    "1956-02-28", "1957-06-14", "1958-10-05", "1959-12-25", "1960-04-01", "1961-08-18",
    "1962-01-10", "1963-03-15", "1964-07-22", "1965-11-08", "1966-05-30", "1967-09-03",
    "1968-02-14", "1969-06-29", "1970-10-11", "1971-12-01", "1972-04-17", "1973-08-25",
    "1974-01-05", "1975-05-20", "1976-09-12", "1977-11-23", "1978-03-08", "1979-07-19",
    "1980-12-05", "1981-02-22", "1982-06-10", "1983-10-31", "1984-01-15", "1985-04-01",
    "1986-08-14", "1987-11-27", "1988-03-20", "1989-07-04", "1990-09-15", "1991-12-25",
    "1992-05-08", "1993-10-12", "1994-02-28", "1995-06-18", "1996-11-03", "1997-01-22",
    "1998-04-15", "1999-08-30", "2000-12-10", "2001-03-05", "2002-07-25", "2003-09-14",
    "2004-11-01", "2005-02-19", "1952-08-12", "1955-04-23", "1958-12-09", "1961-06-15",
    "1964-10-28", "1967-03-02", "1970-09-21", "1973-01-30", "1976-05-14", "1979-11-05",
    "1982-02-11", "1985-07-29", "1988-12-18", "1991-04-05", "1994-08-22", "1997-01-09",
    "1999-06-25", "2002-10-15", "2005-03-30", "1953-09-07", "1956-01-19", "1959-05-26",
    "1962-11-14", "1965-02-04", "1968-07-12", "1971-12-28", "1974-04-10", "1977-09-01",
    "1980-01-25", "1983-06-07", "1986-10-20", "1989-03-14", "1992-08-05", "1995-11-29",
    "1998-02-16", "2001-07-08", "2004-12-02", "1951-05-31", "1954-10-17", "1957-03-09",
    "1960-08-26", "1963-01-04", "1966-06-22", "1969-04-20", "1972-09-16", "1975-02-02",
];

/// Blood groups.
pub const BLOOD_TYPES: &[&str] = &["A+", "A-", "B+", "B-", "AB+", "AB-", "O+", "O-"];

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn lcg_steps_the_ansi_sequence() {
        let mut lcg = Lcg::new(12_345);
        // First step: (12345 * 1103515245 + 12345) mod 2^31.
        let expected = (12_345u64 * 1_103_515_245 + 12_345) % (1 << 31);
        assert_eq!(u64::from(lcg.next_u32()), expected);
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = Demographics::from_seed(99);
        let mut b = Demographics::from_seed(99);

        for _ in 0..20 {
            assert_eq!(a.pick(FIRST_NAMES), b.pick(FIRST_NAMES));
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = Demographics::from_seed(1);
        let mut b = Demographics::from_seed(2);

        let picks_a: Vec<_> = (0..10).map(|_| a.pick(LAST_NAMES)).collect();
        let picks_b: Vec<_> = (0..10).map(|_| b.pick(LAST_NAMES)).collect();
        assert_ne!(picks_a, picks_b);
    }

    #[test]
    fn pick_returns_none_for_empty_list() {
        let mut demographics = Demographics::from_seed(7);
        let empty: &[&str] = &[];
        assert_eq!(demographics.pick(empty), None);
    }

    #[test]
    fn pick_many_respects_count() {
        let mut demographics = Demographics::from_seed(7);
        assert_eq!(demographics.pick_many(AILMENTS, 2).len(), 2);
        assert_eq!(demographics.pick_many(SYMPTOMS, 1).len(), 1);
    }

    #[test]
    fn pick_many_rejects_oversized_requests() {
        let mut demographics = Demographics::from_seed(7);
        assert!(demographics.pick_many(BLOOD_TYPES, 9).is_empty());

        let empty: &[&str] = &[];
        assert!(demographics.pick_many(empty, 1).is_empty());
    }

    #[test]
    fn accepts_any_rng_core_source() {
        let mut demographics = Demographics::new(SmallRng::seed_from_u64(12_345));
        assert!(demographics.pick(BLOOD_TYPES).is_some());
    }
}
