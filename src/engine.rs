use tracing::trace;

use crate::config::Config;
use crate::context::Context;
use crate::key::Keys;
use crate::word::is_vowel;

/// Metaphone 3 encoder.
///
/// Holds a [`Config`] and applies it to every word. Encoding borrows the
/// encoder immutably, so one instance can be shared between threads.
///
/// ```
/// use metaphone3::Metaphone3;
///
/// let mut m3 = Metaphone3::new();
/// let keys = m3.encode("Smith");
/// assert_eq!(keys.primary, "SM0");
/// assert_eq!(keys.secondary, "XMT");
///
/// m3.set_encode_vowels(true);
/// m3.set_encode_exact(true);
/// let keys = m3.encode("Erich");
/// assert_eq!(keys.primary, "ARAK");
/// assert_eq!(keys.secondary, "ARAX");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Metaphone3 {
    config: Config,
}

impl Metaphone3 {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// See [`Config::set_key_length`].
    pub fn set_key_length(&mut self, requested: i32) -> bool {
        self.config.set_key_length(requested)
    }

    pub fn key_length(&self) -> usize {
        self.config.max_key_length
    }

    pub fn set_encode_vowels(&mut self, on: bool) {
        self.config.encode_vowels = on;
    }

    pub fn encode_vowels(&self) -> bool {
        self.config.encode_vowels
    }

    pub fn set_encode_exact(&mut self, on: bool) {
        self.config.encode_exact = on;
    }

    pub fn encode_exact(&self) -> bool {
        self.config.encode_exact
    }

    pub fn encode(&self, word: &str) -> Keys {
        encode(word, &self.config)
    }
}

/// Encodes `word` with `config`. Never fails: characters with no rule are
/// skipped and the empty string yields two empty keys.
pub fn encode(word: &str, config: &Config) -> Keys {
    let keys = Context::new(word, config).run();
    trace!(
        word,
        primary = %keys.primary,
        secondary = %keys.secondary,
        vowels = config.encode_vowels,
        exact = config.encode_exact,
        "encoded"
    );
    keys
}

impl Context {
    /// Walks the word, handing each position to its letter handler until the
    /// word is exhausted or either key has grown past the length limit.
    pub(crate) fn run(mut self) -> Keys {
        while self.primary.len() <= self.max_key_length
            && self.secondary.len() <= self.max_key_length
            && self.current < self.length
        {
            let at = self.current;
            self.step();
            if self.current <= at {
                self.current = at + 1;
            }
        }
        Keys::finish(&self.primary, &self.secondary, self.max_key_length)
    }

    fn step(&mut self) {
        match self.char_at(self.current) {
            'B' => self.encode_b(),
            'C' => self.encode_c(),
            'D' => self.encode_d(),
            'F' => self.encode_f(),
            'G' => self.encode_g(),
            'H' => self.encode_h(),
            'J' => self.encode_j(),
            'K' => self.encode_k(),
            'L' => self.encode_l(),
            'M' => self.encode_m(),
            'N' => self.encode_n(),
            'P' => self.encode_p(),
            'Q' => self.encode_q(),
            'R' => self.encode_r(),
            'S' => self.encode_s(),
            'T' => self.encode_t(),
            'V' => self.encode_v(),
            'W' => self.encode_w(),
            'X' => self.encode_x(),
            'Z' => self.encode_z(),
            'Ç' | 'ß' | 'Ž' => self.single("S"),
            'Ñ' => self.single("N"),
            // eth, thorn
            'Ð' | 'Þ' => self.single("0"),
            'Š' => self.single("X"),
            c if is_vowel(c) => self.encode_vowels(),
            _ => self.current += 1,
        }
    }

    fn single(&mut self, code: &str) {
        self.add(code, code);
        self.current += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_word() {
        let keys = Metaphone3::new().encode("");
        assert!(keys.is_empty());
    }

    #[test]
    fn unknown_characters_are_skipped() {
        let m3 = Metaphone3::new();
        assert!(m3.encode("123-!?").is_empty());
        assert_eq!(m3.encode("s-m-i-t-h").primary, "SMT");
    }

    #[test]
    fn latin_extras() {
        let m3 = Metaphone3::new();
        assert_eq!(m3.encode("ÇA").primary, "S");
        assert_eq!(m3.encode("ÑA").primary, "N");
        assert_eq!(m3.encode("ÞA").primary, "0");
        assert_eq!(m3.encode("ÐA").primary, "0");
        assert_eq!(m3.encode("ŠA").primary, "X");
        assert_eq!(m3.encode("ŽA").primary, "S");
    }

    #[test]
    fn key_length_applies_to_both_keys() {
        let mut m3 = Metaphone3::new();
        m3.set_encode_vowels(true);
        m3.set_encode_exact(true);
        assert!(m3.set_key_length(4));
        assert_eq!(m3.encode("Villasenor").primary, "VALA");
        // the walk stops as soon as the secondary key overflows
        let keys = m3.encode("Glowacki");
        assert_eq!(keys.primary, "GLA");
        assert_eq!(keys.secondary, "GLAV");
    }

    #[test]
    fn encoder_accessors() {
        let mut m3 = Metaphone3::with_config(Config::new().with_encode_exact(true));
        assert!(m3.encode_exact());
        assert!(!m3.encode_vowels());
        assert!(!m3.set_key_length(40));
        assert_eq!(m3.key_length(), 32);
        assert_eq!(m3.config().max_key_length, 32);
    }
}
