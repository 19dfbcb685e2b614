#![cfg(test)]

//! Property tests for round id selection (pure domain, no catalog).

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::domain::selection::draw_round_ids;
use crate::domain::test_prelude;
use crate::errors::GameError;

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Every draw yields exactly `count` distinct ids within `[min, max)`,
    /// with the correct id among them.
    #[test]
    fn prop_draw_is_distinct_and_in_range(
        seed in any::<u64>(),
        min in 1u32..1000,
        extra in 0u32..200,
        count in 2usize..8,
    ) {
        // Valid by construction: the range always holds at least `count` ids.
        let max = min + count as u32 + extra;

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let draw = draw_round_ids(&mut rng, min, max, count).expect("valid inputs");

        prop_assert_eq!(draw.all.len(), count);
        prop_assert!(draw.all.contains(&draw.correct));
        prop_assert_eq!(draw.all[0], draw.correct);
        for id in &draw.all {
            prop_assert!((min..max).contains(id), "id {} outside [{}, {})", id, min, max);
        }
        for (i, a) in draw.all.iter().enumerate() {
            prop_assert!(
                !draw.all[i + 1..].contains(a),
                "duplicate id {} in {:?}", a, draw.all
            );
        }
    }

    /// A range exactly as wide as the option count uses every id.
    #[test]
    fn prop_tight_range_uses_every_id(
        seed in any::<u64>(),
        min in 1u32..1000,
        count in 2usize..8,
    ) {
        let max = min + count as u32;
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let draw = draw_round_ids(&mut rng, min, max, count).expect("valid inputs");

        let mut sorted = draw.all.clone();
        sorted.sort_unstable();
        let expected: Vec<u32> = (min..max).collect();
        prop_assert_eq!(sorted, expected);
    }
}

#[test]
fn rejects_zero_based_range() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let result = draw_round_ids(&mut rng, 0, 10, 4);
    assert!(matches!(result, Err(GameError::Config(_))));
}

#[test]
fn rejects_single_option() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let result = draw_round_ids(&mut rng, 1, 10, 1);
    assert!(matches!(result, Err(GameError::Config(_))));
}

#[test]
fn rejects_range_narrower_than_count() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let result = draw_round_ids(&mut rng, 1, 4, 4);
    assert!(matches!(result, Err(GameError::Config(_))));
}

/// The correct id lands roughly uniformly across the range.
#[test]
fn correct_id_is_roughly_uniform() {
    let mut rng = ChaCha8Rng::seed_from_u64(0xC0FFEE);
    let mut counts = [0usize; 4];
    for _ in 0..4000 {
        let draw = draw_round_ids(&mut rng, 1, 5, 2).expect("valid inputs");
        counts[(draw.correct - 1) as usize] += 1;
    }
    for (id, count) in counts.iter().enumerate() {
        assert!(
            (800..=1200).contains(count),
            "id {} drawn {} times out of 4000",
            id + 1,
            count
        );
    }
}
