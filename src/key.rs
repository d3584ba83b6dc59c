use serde::Serialize;

/// One growing phonetic key. Consecutive vowel codes collapse into a
/// single `A`.
#[derive(Debug, Clone, Default)]
pub(crate) struct KeyBuffer(String);

impl KeyBuffer {
    /// Appends `code`, dropping its leading `A` when the key already ends
    /// in one. Covers multi-letter codes such as "AL" as well as a lone "A".
    pub(crate) fn push(&mut self, code: &str) {
        let code = match code.strip_prefix('A') {
            Some(rest) if self.0.ends_with('A') => rest,
            _ => code,
        };
        self.0.push_str(code);
    }

    pub(crate) fn len(&self) -> usize {
        self.0.len()
    }

    pub(crate) fn ends_with(&self, code: char) -> bool {
        self.0.ends_with(code)
    }

    /// The key cut to at most `max` characters.
    pub(crate) fn truncated(&self, max: usize) -> String {
        self.0.chars().take(max).collect()
    }
}

/// Result of encoding one word.
///
/// `secondary` is empty when the word has no alternate pronunciation, or
/// when it would only repeat `primary`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Keys {
    pub primary: String,
    pub secondary: String,
}

impl Keys {
    /// Applies the final length cut, then drops a secondary key that is
    /// identical to the primary one.
    pub(crate) fn finish(primary: &KeyBuffer, secondary: &KeyBuffer, max: usize) -> Self {
        let primary = primary.truncated(max);
        let mut secondary = secondary.truncated(max);
        if primary == secondary {
            secondary.clear();
        }
        Self { primary, secondary }
    }

    pub fn is_empty(&self) -> bool {
        self.primary.is_empty() && self.secondary.is_empty()
    }

    /// The alternate key, if there is one.
    pub fn alternate(&self) -> Option<&str> {
        (!self.secondary.is_empty()).then_some(self.secondary.as_str())
    }
}

impl From<Keys> for (String, String) {
    fn from(keys: Keys) -> Self {
        (keys.primary, keys.secondary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn buffer(codes: &[&str]) -> KeyBuffer {
        let mut b = KeyBuffer::default();
        for c in codes {
            b.push(c);
        }
        b
    }

    #[test]
    fn collapses_repeated_vowel_code() {
        assert_eq!(buffer(&["A", "A", "N", "A", "A"]).truncated(32), "ANA");
    }

    #[test]
    fn leading_vowel_of_longer_code_collapses() {
        assert_eq!(buffer(&["F", "A", "AL", "A"]).truncated(32), "FALA");
        assert_eq!(buffer(&["T", "ATS"]).truncated(32), "TATS");
    }

    #[test]
    fn empty_code_is_noop() {
        assert_eq!(buffer(&["K", "", "S"]).truncated(32), "KS");
    }

    #[test]
    fn finish_dedups_after_truncation() {
        let keys = Keys::finish(&buffer(&["K", "R", "S", "T"]), &buffer(&["K", "R", "S", "X"]), 3);
        assert_eq!(keys.primary, "KRS");
        assert_eq!(keys.secondary, "");
        assert_eq!(keys.alternate(), None);
    }

    #[test]
    fn finish_keeps_distinct_secondary() {
        let keys = Keys::finish(&buffer(&["X", "MT"]), &buffer(&["S", "MT"]), 8);
        assert_eq!(keys.alternate(), Some("SMT"));
        let (p, s): (String, String) = keys.into();
        assert_eq!((p.as_str(), s.as_str()), ("XMT", "SMT"));
    }
}
