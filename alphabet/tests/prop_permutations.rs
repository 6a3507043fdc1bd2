use alphabet::Alphabet;
use proptest::prelude::*;

const POOL: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

fn alphabet_strategy() -> impl Strategy<Value = String> {
    prop::sample::subsequence(POOL.chars().collect::<Vec<_>>(), 3..=62)
        .prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #[test]
    fn prop_construction_is_deterministic(raw in alphabet_strategy()) {
        let a = Alphabet::new(&raw).unwrap();
        let b = Alphabet::new(&raw).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_shuffle_is_a_size_preserving_permutation(raw in alphabet_strategy()) {
        let alphabet = Alphabet::new(&raw).unwrap();
        let shuffled = alphabet.shuffle();
        prop_assert_eq!(shuffled.len(), alphabet.len());

        let mut before = alphabet.symbols().to_vec();
        let mut after = shuffled.symbols().to_vec();
        before.sort_unstable();
        after.sort_unstable();
        prop_assert_eq!(before, after);
    }

    #[test]
    fn prop_rotate_round_trips(raw in alphabet_strategy(), offset in 0usize..62) {
        let alphabet = Alphabet::new(&raw).unwrap();
        let offset = offset % alphabet.len();
        let rotated = alphabet.rotate(offset);
        prop_assert_eq!(rotated.rotate(alphabet.len() - offset), alphabet);
    }

    #[test]
    fn prop_reverse_is_involutive(raw in alphabet_strategy()) {
        let alphabet = Alphabet::new(&raw).unwrap();
        prop_assert_eq!(alphabet.reverse().reverse(), alphabet);
    }

    #[test]
    fn prop_index_of_inverts_symbol_at(raw in alphabet_strategy()) {
        let alphabet = Alphabet::new(&raw).unwrap();
        for index in 0..alphabet.len() {
            prop_assert_eq!(alphabet.index_of(alphabet.symbol_at(index)), Some(index));
        }
    }
}
