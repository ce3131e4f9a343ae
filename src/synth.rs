// Seeded generator for synthetic matchup tables.
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::io::MatchupRecord;

/// Default seed for `generate`.
pub const DEFAULT_SEED: u64 = 42;

/// `rows` matchups with 1-based indices. The combatant with the larger
/// `hp + attack` wins; ties go to the first one.
pub fn generate_matchups(rows: usize, seed: u64) -> Vec<MatchupRecord> {
    let mut rng = StdRng::seed_from_u64(seed);
    (1..=rows)
        .map(|index| {
            let hp_1 = rng.random_range(20..=255) as f64;
            let attack_1 = rng.random_range(5..=190) as f64;
            let hp_2 = rng.random_range(20..=255) as f64;
            let attack_2 = rng.random_range(5..=190) as f64;
            let winner = if hp_2 + attack_2 > hp_1 + attack_1 { 1.0 } else { 0.0 };
            MatchupRecord { index, hp_1, attack_1, hp_2, attack_2, winner }
        })
        .collect()
}
