//! Bounds-safe view of the word being encoded.

/// Returned by [`Word::char_at`] for positions outside the word.
pub(crate) const NONE: char = '\0';

/// The uppercased input, indexed by code point.
#[derive(Debug, Clone)]
pub(crate) struct Word {
    chars: Vec<char>,
    text: String,
}

impl Word {
    /// Uppercases one code point at a time. Characters whose uppercase form
    /// is longer than one code point (`ß`) are kept unchanged so that every
    /// position in the word keeps referring to the same input character.
    pub(crate) fn new(input: &str) -> Self {
        let chars: Vec<char> = input.chars().map(upper).collect();
        let text = chars.iter().collect();
        Self { chars, text }
    }

    pub(crate) fn len(&self) -> isize {
        self.chars.len() as isize
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.text
    }

    /// Character at `at`, or [`NONE`] when `at` is outside the word.
    pub(crate) fn char_at(&self, at: isize) -> char {
        if at < 0 {
            return NONE;
        }
        self.chars.get(at as usize).copied().unwrap_or(NONE)
    }

    /// True when the `len` characters starting at `start` equal one of
    /// `alternatives`. Any window reaching outside the word is a miss.
    pub(crate) fn string_at(&self, start: isize, len: isize, alternatives: &[&str]) -> bool {
        if start < 0 || len < 1 || start + len > self.len() {
            return false;
        }
        let window = &self.chars[start as usize..(start + len) as usize];
        alternatives
            .iter()
            .any(|alt| alt.chars().eq(window.iter().copied()))
    }

    /// The word from `at` to the end, as an owned string.
    pub(crate) fn tail(&self, at: isize) -> String {
        let at = at.clamp(0, self.len()) as usize;
        self.chars[at..].iter().collect()
    }
}

fn upper(c: char) -> char {
    let mut it = c.to_uppercase();
    match (it.next(), it.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

/// Vowels, including the accented Latin vowels that show up in loanwords.
/// `W` is not a vowel here even though vowel skipping runs across it.
pub(crate) fn is_vowel(c: char) -> bool {
    matches!(
        c,
        'A' | 'E'
            | 'I'
            | 'O'
            | 'U'
            | 'Y'
            | 'À'
            | 'Á'
            | 'Â'
            | 'Ã'
            | 'Ä'
            | 'Å'
            | 'Æ'
            | 'È'
            | 'É'
            | 'Ê'
            | 'Ë'
            | 'Ì'
            | 'Í'
            | 'Î'
            | 'Ï'
            | 'Ò'
            | 'Ó'
            | 'Ô'
            | 'Õ'
            | 'Ö'
            | 'Œ'
            | 'Ø'
            | 'Ù'
            | 'Ú'
            | 'Û'
            | 'Ü'
            | 'Ý'
            | 'Ÿ'
    )
}

/// Whether `word` is `root` or one of its regular English inflections,
/// e.g. "ACHE", "ACHES", "ACHED", "ACHING", "ACHINGLY", "ACHY".
pub(crate) fn root_or_inflections(word: &str, root: &str) -> bool {
    if word == root || word == format!("{root}S") {
        return true;
    }

    let ends_in_e = root.ends_with('E');
    if !ends_in_e && word == format!("{root}ES") {
        return true;
    }

    let past = if ends_in_e {
        format!("{root}D")
    } else {
        format!("{root}ED")
    };
    if word == past {
        return true;
    }

    let stem = if ends_in_e {
        &root[..root.len() - 1]
    } else {
        root
    };
    ["ING", "INGLY", "Y"]
        .iter()
        .any(|suffix| word == format!("{stem}{suffix}"))
}
