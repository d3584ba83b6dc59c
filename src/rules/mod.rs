//! Letter handlers.
//!
//! Each letter has an ordered table of guard rules. A rule inspects the
//! context around the cursor and, when it applies, appends codes, moves the
//! cursor and returns `true`; the first rule that fires wins. More specific
//! spellings sit before the general ones they override, so the tables must
//! not be reordered.

use crate::context::Context;

mod b;
mod c;
mod d;
mod f;
mod g;
mod h;
mod j;
mod k;
mod l;
mod m;
mod n;
mod names;
mod p;
mod q;
mod r;
mod s;
mod t;
mod v;
mod vowels;
mod w;
mod x;
mod z;

/// A guard rule: applies its encoding and returns `true`, or leaves the
/// context untouched and returns `false`.
pub(crate) type Rule = fn(&mut Context) -> bool;

impl Context {
    /// Runs `rules` in order and stops at the first one that fires.
    pub(crate) fn first_match(&mut self, rules: &[Rule]) -> bool {
        for rule in rules {
            if rule(self) {
                return true;
            }
        }
        false
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use crate::config::Config;
    use crate::context::Context;
    use pretty_assertions::assert_eq;

    /// Encodes `word` with explicit flags and returns `(primary, secondary)`.
    pub(crate) fn keys(word: &str, vowels: bool, exact: bool) -> (String, String) {
        let cfg = Config::default()
            .with_encode_vowels(vowels)
            .with_encode_exact(exact);
        Context::new(word, &cfg).run().into()
    }

    /// Checks `(word, primary, secondary)` rows under one pair of flags.
    pub(crate) fn check(vowels: bool, exact: bool, cases: &[(&str, &str, &str)]) {
        for &(word, primary, secondary) in cases {
            let (p, s) = keys(word, vowels, exact);
            assert_eq!((p.as_str(), s.as_str()), (primary, secondary), "{word}");
        }
    }
}
