use chrono::{NaiveDate, Utc};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Seed installed when a batch asks for reproducible output.
pub const DEFAULT_SEED: u64 = 338;

/// "Today" for seeded batches, so date rules stay reproducible.
pub fn seeded_reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default()
}

/// Randomness for one generation batch.
///
/// Each batch owns its source; nothing is shared between batches, so
/// concurrent batches with different seeds do not interfere.
#[derive(Debug, Clone)]
pub struct RandomSource {
    rng: ChaCha8Rng,
    seed: Option<u64>,
    reference_date: NaiveDate,
}

impl RandomSource {
    /// Install `seed`, or fresh OS entropy when `None`.
    pub fn install(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self {
                rng: ChaCha8Rng::seed_from_u64(seed),
                seed: Some(seed),
                reference_date: seeded_reference_date(),
            },
            None => Self {
                rng: ChaCha8Rng::from_os_rng(),
                seed: None,
                reference_date: Utc::now().date_naive(),
            },
        }
    }

    /// [`DEFAULT_SEED`] when `seeded`, OS entropy otherwise.
    pub fn for_mode(seeded: bool) -> Self {
        Self::install(seeded.then_some(DEFAULT_SEED))
    }

    pub fn with_reference_date(mut self, reference_date: NaiveDate) -> Self {
        self.reference_date = reference_date;
        self
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn is_seeded(&self) -> bool {
        self.seed.is_some()
    }

    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }

    pub fn rng(&mut self) -> &mut ChaCha8Rng {
        &mut self.rng
    }
}
