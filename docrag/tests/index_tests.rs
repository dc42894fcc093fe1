//! Property tests for flat index search ordering.

use docrag::FlatIndex;
use proptest::prelude::*;

const DIM: usize = 8;

fn arb_vector(dim: usize) -> impl Strategy<Value = Vec<f32>> {
    proptest::collection::vec(-10.0f32..10.0f32, dim)
}

/// **Property: search ordering**
/// *For any* set of stored vectors and any query, `search(q, k)` SHALL
/// return `min(k, len)` results ordered by non-decreasing squared
/// distance, with equal distances ordered by ascending slot.
mod prop_search_ordering {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn results_sorted_by_distance_then_slot(
            vectors in proptest::collection::vec(arb_vector(DIM), 1..30),
            query in arb_vector(DIM),
            k in 1usize..40,
        ) {
            let len = vectors.len();
            let index = FlatIndex::build(vectors).unwrap();
            let hits = index.search(&query, k).unwrap();

            prop_assert_eq!(hits.len(), k.min(len));
            for window in hits.windows(2) {
                let (slot_a, dist_a) = window[0];
                let (slot_b, dist_b) = window[1];
                prop_assert!(
                    dist_a < dist_b || (dist_a == dist_b && slot_a < slot_b),
                    "out of order: ({slot_a}, {dist_a}) before ({slot_b}, {dist_b})",
                );
            }
        }
    }
}

/// **Property: exhaustiveness**
/// *For any* set of stored vectors, `search(q, len)` SHALL return
/// every stored slot exactly once.
mod prop_search_exhaustive {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn full_search_visits_every_slot_once(
            vectors in proptest::collection::vec(arb_vector(DIM), 1..30),
            query in arb_vector(DIM),
        ) {
            let len = vectors.len();
            let index = FlatIndex::build(vectors).unwrap();
            let hits = index.search(&query, len).unwrap();

            let mut slots: Vec<usize> = hits.iter().map(|(slot, _)| *slot).collect();
            slots.sort_unstable();
            let expected: Vec<usize> = (0..len).collect();
            prop_assert_eq!(slots, expected);
        }
    }
}

#[test]
fn zero_distance_for_a_stored_vector() {
    let index = FlatIndex::build(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
    let hits = index.search(&[4.0, 5.0, 6.0], 1).unwrap();
    assert_eq!(hits, vec![(1, 0.0)]);
}
