use crate::config::{Config, MAX_KEY_LENGTH};
use crate::key::KeyBuffer;
use crate::word::{is_vowel, Word};

/// State for a single encode call. Built fresh from the input and a
/// configuration snapshot, consumed when the keys are produced.
pub(crate) struct Context {
    pub(crate) word: Word,
    /// Index of the character being encoded.
    pub(crate) current: isize,
    pub(crate) last: isize,
    pub(crate) length: isize,
    /// Set when an "-LE"/"-RE" transposition already emitted the vowel that
    /// the next vowel step would otherwise encode.
    pub(crate) al_inversion: bool,
    pub(crate) encode_vowels: bool,
    pub(crate) encode_exact: bool,
    pub(crate) max_key_length: usize,
    pub(crate) primary: KeyBuffer,
    pub(crate) secondary: KeyBuffer,
}

impl Context {
    pub(crate) fn new(input: &str, config: &Config) -> Self {
        let word = Word::new(input);
        let length = word.len();
        Self {
            word,
            current: 0,
            last: length - 1,
            length,
            al_inversion: false,
            encode_vowels: config.encode_vowels,
            encode_exact: config.encode_exact,
            max_key_length: config.max_key_length.clamp(1, MAX_KEY_LENGTH),
            primary: KeyBuffer::default(),
            secondary: KeyBuffer::default(),
        }
    }

    pub(crate) fn char_at(&self, at: isize) -> char {
        self.word.char_at(at)
    }

    pub(crate) fn string_at(&self, start: isize, len: isize, alternatives: &[&str]) -> bool {
        self.word.string_at(start, len, alternatives)
    }

    pub(crate) fn is_vowel_at(&self, at: isize) -> bool {
        is_vowel(self.char_at(at))
    }

    /// `E`, `I` or `Y` at `at`.
    pub(crate) fn front_vowel(&self, at: isize) -> bool {
        matches!(self.char_at(at), 'E' | 'I' | 'Y')
    }

    /// Word starts with a spelling typical of German or Slavic names.
    pub(crate) fn slavo_germanic(&self) -> bool {
        self.string_at(0, 3, &["SCH"])
            || self.string_at(0, 2, &["SW"])
            || self.char_at(0) == 'J'
            || self.char_at(0) == 'W'
    }

    pub(crate) fn add(&mut self, main: &str, alt: &str) {
        self.primary.push(main);
        self.secondary.push(alt);
    }

    /// Same code on both keys, picked by exact/approximate mode.
    pub(crate) fn add_exact_approx(&mut self, exact: &str, approx: &str) {
        if self.encode_exact {
            self.add(exact, exact);
        } else {
            self.add(approx, approx);
        }
    }

    pub(crate) fn add_exact_approx_pair(
        &mut self,
        exact_main: &str,
        exact_alt: &str,
        main: &str,
        alt: &str,
    ) {
        if self.encode_exact {
            self.add(exact_main, exact_alt);
        } else {
            self.add(main, alt);
        }
    }

    /// Moves the cursor by a different amount depending on whether
    /// internal vowels are being encoded.
    pub(crate) fn advance_counter(&mut self, if_not_encode_vowels: isize, if_encode_vowels: isize) {
        self.current += if self.encode_vowels {
            if_encode_vowels
        } else {
            if_not_encode_vowels
        };
    }

    /// Position of the next consonant at or after `at`. `W` counts as a
    /// vowel except in Slavic endings, and a `WH` that does not start a new
    /// syllable is skipped as well.
    pub(crate) fn skip_vowels(&self, mut at: isize) -> isize {
        if at < 0 {
            return 0;
        }
        if at >= self.length {
            return self.length;
        }

        let mut it = self.char_at(at);
        while is_vowel(it) || it == 'W' {
            if self.string_at(at, 4, &["WICZ", "WITZ", "WIAK"])
                || self.string_at(at - 1, 5, &["EWSKI", "EWSKY", "OWSKI", "OWSKY"])
                || (self.string_at(at, 5, &["WICKI", "WACKI"]) && at + 4 == self.last)
            {
                break;
            }

            at += 1;
            if self.char_at(at - 1) == 'W'
                && self.char_at(at) == 'H'
                && !(self.string_at(at, 3, &["HOP"])
                    || self.string_at(
                        at,
                        4,
                        &["HIDE", "HARD", "HEAD", "HAWK", "HERD", "HOOK", "HAND", "HOLE"],
                    )
                    || self.string_at(at, 5, &["HEART", "HOUSE", "HOUND"])
                    || self.string_at(at, 6, &["HAMMER"]))
            {
                at += 1;
            }

            if at > self.length - 1 {
                break;
            }
            it = self.char_at(at);
        }

        at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ctx(word: &str) -> Context {
        Context::new(word, &Config::default())
    }

    #[test]
    fn derived_lengths() {
        let c = ctx("Smith");
        assert_eq!(c.length, 5);
        assert_eq!(c.last, 4);
        assert_eq!(c.current, 0);
        assert!(!c.al_inversion);
    }

    #[test]
    fn key_length_is_clamped_even_when_config_was_built_by_hand() {
        let cfg = Config {
            max_key_length: 0,
            ..Config::default()
        };
        assert_eq!(Context::new("x", &cfg).max_key_length, 1);
        let cfg = Config {
            max_key_length: 500,
            ..Config::default()
        };
        assert_eq!(Context::new("x", &cfg).max_key_length, 32);
    }

    #[test]
    fn skip_vowels_runs_to_next_consonant() {
        let c = ctx("BEAUTY");
        assert_eq!(c.skip_vowels(1), 4);
        assert_eq!(c.skip_vowels(5), 6);
        assert_eq!(c.skip_vowels(-3), 0);
        assert_eq!(c.skip_vowels(9), 6);
    }

    #[test]
    fn skip_vowels_stops_before_slavic_w() {
        let c = ctx("MOSKOWITZ");
        assert_eq!(c.skip_vowels(4), 5);
        let c = ctx("ANDREWSKI");
        assert_eq!(c.skip_vowels(4), 5);
    }

    #[test]
    fn skip_vowels_crosses_wh() {
        assert_eq!(ctx("AWHILE").skip_vowels(0), 4);
        // "HOLE" starts a new syllable, so the H is kept
        assert_eq!(ctx("AWHOLE").skip_vowels(0), 2);
    }

    #[test]
    fn slavo_germanic_prefixes() {
        assert!(ctx("schmidt").slavo_germanic());
        assert!(ctx("swartz").slavo_germanic());
        assert!(ctx("jankowski").slavo_germanic());
        assert!(ctx("wagner").slavo_germanic());
        assert!(!ctx("smith").slavo_germanic());
    }

    #[test]
    fn exact_mode_picks_exact_codes() {
        let mut c = Context::new("x", &Config::default().with_encode_exact(true));
        c.add_exact_approx("B", "P");
        c.add_exact_approx_pair("D", "T", "T", "T");
        assert_eq!(c.primary.truncated(8), "BD");
        assert_eq!(c.secondary.truncated(8), "BT");
    }
}
