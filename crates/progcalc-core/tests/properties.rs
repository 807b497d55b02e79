//! Property tests for masking, conversion and rotation at every word size.

use num_bigint::BigUint;
use proptest::prelude::*;

use progcalc_core::{from_text, mask, max_value, rotate_left, rotate_right, to_text};
use progcalc_model::{Base, WordSize};

fn magnitude() -> impl Strategy<Value = BigUint> {
    prop::collection::vec(any::<u8>(), 0..48).prop_map(|bytes| BigUint::from_bytes_le(&bytes))
}

fn word_size() -> impl Strategy<Value = WordSize> {
    prop::sample::select(WordSize::ALL.to_vec())
}

fn base() -> impl Strategy<Value = Base> {
    prop::sample::select(Base::ALL.to_vec())
}

proptest! {
    #[test]
    fn mask_stays_in_range(n in magnitude(), w in word_size()) {
        let masked = mask(&n, w);
        prop_assert!(masked <= max_value(w));
        prop_assert_eq!(mask(&masked, w), masked);
    }

    #[test]
    fn text_round_trips(n in magnitude(), w in word_size(), b in base()) {
        let n = mask(&n, w);
        let text = to_text(&n, b);
        prop_assert_eq!(from_text(&text, b).unwrap(), n);
    }

    #[test]
    fn rotation_inverts(n in magnitude(), w in word_size(), k in 0u32..600) {
        let rotated = rotate_left(&n, k, w);
        prop_assert!(rotated <= max_value(w));
        prop_assert_eq!(rotate_right(&rotated, k, w), mask(&n, w));
    }

    #[test]
    fn rotation_by_word_size_is_identity(n in magnitude(), w in word_size()) {
        prop_assert_eq!(rotate_left(&n, w.bits(), w), mask(&n, w));
        prop_assert_eq!(rotate_right(&n, w.bits(), w), mask(&n, w));
    }

    #[test]
    fn rotation_preserves_popcount(n in magnitude(), w in word_size(), k in 0u32..256) {
        let before = mask(&n, w).count_ones();
        prop_assert_eq!(rotate_left(&n, k, w).count_ones(), before);
    }
}
