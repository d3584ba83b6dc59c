use metaphone3::{encode, Config};
use proptest::prelude::*;

fn config() -> impl Strategy<Value = Config> {
    (any::<bool>(), any::<bool>(), 1i32..=32).prop_map(|(vowels, exact, len)| {
        let mut cfg = Config::new()
            .with_encode_vowels(vowels)
            .with_encode_exact(exact);
        cfg.set_key_length(len);
        cfg
    })
}

/// Mostly letters, with the accented ones the encoder knows about and a few
/// separators mixed in.
fn word() -> impl Strategy<Value = String> {
    "[A-Za-z \\-'ÀÉÖÜÇÑŸŒßÐÞŠŽ]{0,16}"
}

proptest! {
    #[test]
    fn keys_fit_the_length_limit(w in word(), cfg in config()) {
        let keys = encode(&w, &cfg);
        prop_assert!(keys.primary.chars().count() <= cfg.max_key_length);
        prop_assert!(keys.secondary.chars().count() <= cfg.max_key_length);
    }

    #[test]
    fn secondary_never_repeats_primary(w in word(), cfg in config()) {
        let keys = encode(&w, &cfg);
        prop_assert!(keys.secondary.is_empty() || keys.secondary != keys.primary);
    }

    #[test]
    fn encoding_is_deterministic(w in word(), cfg in config()) {
        prop_assert_eq!(encode(&w, &cfg), encode(&w, &cfg));
    }

    #[test]
    fn initial_vowel_encodes_as_a(
        first in "[AEIOUYaeiouyÀÉÖÜŸŒ]",
        rest in "[a-z]{0,10}",
        cfg in config(),
    ) {
        let keys = encode(&format!("{first}{rest}"), &cfg);
        prop_assert!(keys.primary.starts_with('A'), "{:?}", keys);
    }

    #[test]
    fn vowel_codes_never_repeat(w in word(), cfg in config()) {
        let keys = encode(&w, &cfg);
        prop_assert!(!keys.primary.contains("AA"), "{:?}", keys);
        prop_assert!(!keys.secondary.contains("AA"), "{:?}", keys);
    }

    #[test]
    fn any_unicode_is_accepted(w in any::<String>(), cfg in config()) {
        let keys = encode(&w, &cfg);
        prop_assert!(keys.primary.len() <= cfg.max_key_length);
    }

    #[test]
    fn case_does_not_matter(w in "[a-z]{1,12}", cfg in config()) {
        prop_assert_eq!(encode(&w, &cfg), encode(&w.to_uppercase(), &cfg));
    }
}
