use metaphone3::{encode, Config, Keys, Metaphone3};
use pretty_assertions::assert_eq;

fn keys(primary: &str, secondary: &str) -> Keys {
    Keys {
        primary: primary.to_string(),
        secondary: secondary.to_string(),
    }
}

fn exact_vowels() -> Metaphone3 {
    let mut m3 = Metaphone3::new();
    m3.set_encode_exact(true);
    m3.set_encode_vowels(true);
    m3
}

#[test]
fn test_empty_word() {
    assert_eq!(Metaphone3::new().encode(""), keys("", ""));
    assert_eq!(exact_vowels().encode(""), keys("", ""));
}

#[test]
fn test_iron() {
    // the silent 'O' goes, the initial vowel stays
    assert_eq!(Metaphone3::new().encode("iron"), keys("ARN", ""));
    assert_eq!(exact_vowels().encode("iron"), keys("ARN", ""));
}

#[test]
fn test_witz() {
    assert_eq!(Metaphone3::new().encode("witz"), keys("TS", "FX"));
}

#[test]
fn test_demo_words_exact_with_vowels() {
    let m3 = exact_vowels();
    for (word, primary, secondary) in [
        ("Guillermo", "GARMA", ""),
        ("VILLASENOR", "VALASANA", "VASANAR"),
        ("GUILLERMINA", "GARMANA", ""),
        ("PADILLA", "PADALA", "PADA"),
        ("BJORK", "BARK", ""),
        ("belle", "BAL", ""),
        ("ERICH", "ARAK", "ARAX"),
        ("GLOWACKI", "GLAKA", "GLAVASKA"),
        ("qing", "XANG", ""),
        ("tsing", "XANG", ""),
    ] {
        assert_eq!(m3.encode(word), keys(primary, secondary), "{word}");
    }
}

#[test]
fn test_initial_j_before_vowel() {
    let m3 = Metaphone3::new();
    assert_eq!(m3.encode("Jon"), keys("JN", "AN"));
    assert_eq!(m3.encode("John"), m3.encode("Jon"));
    assert_eq!(m3.encode("Jensen"), keys("JNSN", "ANSN"));
    assert_eq!(m3.encode("judgment"), keys("JJMNT", ""));
}

#[test]
fn test_spanish_double_l_is_not_a_literal_l() {
    assert_eq!(exact_vowels().encode("Guillermo").primary, "GARMA");
    assert_eq!(Metaphone3::new().encode("Guillermo").primary, "KRM");
}

#[test]
fn test_english_ch_after_vowel_pair() {
    let m3 = Metaphone3::new();
    for word in ["coach", "roach", "beach"] {
        assert!(m3.encode(word).primary.ends_with('X'), "{word}");
    }
    // Germanic reading first, English one as the alternate
    assert_eq!(m3.encode("Bach"), keys("PK", "PX"));
}

#[test]
fn test_spelling_variants_share_a_key() {
    let cfg = Config::default();
    for group in [
        &["Catherine", "Katherine", "Kathryn"][..],
        &["Stephen", "Steven"],
        &["Philip", "Filip"],
        &["Jon", "John"],
        &["Sean", "Shawn", "Shaun"],
    ] {
        let first = encode(group[0], &cfg);
        for word in &group[1..] {
            assert_eq!(encode(word, &cfg), first, "{word} vs {}", group[0]);
        }
    }
}

#[test]
fn test_alternate_pronunciations() {
    let cfg = Config::default();
    assert_eq!(encode("Smith", &cfg), keys("SM0", "XMT"));
    assert_eq!(encode("Smith", &cfg).alternate(), Some("XMT"));
    assert_eq!(encode("Schmidt", &cfg), keys("XMT", ""));
    assert_eq!(encode("Schmidt", &cfg).alternate(), None);
}

#[test]
fn test_exact_mode_separates_voiced_consonants() {
    let approx = Metaphone3::new();
    let exact = exact_vowels();
    assert_eq!(approx.encode("Steven").primary, approx.encode("Stephen").primary);
    assert_eq!(exact.encode("Steven").primary, "STAVAN");
    assert_eq!(exact.encode("Stephen").primary, "STAFAN");
}

#[test]
fn test_case_insensitive() {
    let m3 = Metaphone3::new();
    assert_eq!(m3.encode("mcdonald"), m3.encode("McDONALD"));
    assert_eq!(m3.encode("McDonald"), keys("MKTNLT", ""));
}
