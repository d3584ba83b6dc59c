//! 'X': initial 'S', "KS" elsewhere, and the silent final 'X' of French.

use crate::context::Context;
use crate::rules::Rule;

const X_RULES: &[Rule] = &[
    Context::initial_x,
    Context::greek_x,
    Context::x_special_cases,
    Context::x_to_h,
    Context::x_vowel,
    Context::french_x_final,
];

impl Context {
    pub(crate) fn encode_x(&mut self) {
        if self.first_match(X_RULES) {
            return;
        }
        if self.string_at(self.current + 1, 1, &["X", "Z", "S"])
            || self.string_at(self.current + 1, 2, &["CI", "CE"])
        {
            self.current += 2;
        } else {
            self.current += 1;
        }
    }

    // initial 'X' is 'S'; Chinese 'XIA', 'XU' are 'X'
    fn initial_x(&mut self) -> bool {
        if self.string_at(0, 3, &["XIA", "XIO", "XIE"]) || self.string_at(0, 2, &["XU"]) {
            self.add("X", "X");
            self.current += 1;
            return true;
        }
        if self.current == 0 {
            self.add("S", "S");
            self.current += 1;
            return true;
        }
        false
    }

    // 'XENO', 'XYLO' as 'S'
    fn greek_x(&mut self) -> bool {
        if self.string_at(self.current + 1, 3, &["YLO", "YLE", "ENO"])
            || self.string_at(self.current + 1, 4, &["ANTH"])
        {
            self.add("S", "S");
            self.current += 1;
            return true;
        }
        false
    }

    fn x_special_cases(&mut self) -> bool {
        if self.string_at(self.current - 2, 5, &["LUXUR"]) {
            self.add_exact_approx("GJ", "KJ");
            self.current += 1;
            return true;
        }
        if self.string_at(0, 7, &["TEXEIRA"]) || self.string_at(0, 8, &["TEIXEIRA"]) {
            self.add("X", "X");
            self.current += 1;
            return true;
        }
        false
    }

    // 'OAXACA', 'QUIXOTE'
    fn x_to_h(&mut self) -> bool {
        if self.string_at(self.current - 2, 6, &["OAXACA"])
            || self.string_at(self.current - 3, 7, &["QUIXOTE"])
        {
            self.add("H", "H");
            self.current += 1;
            return true;
        }
        false
    }

    // 'SEXUAL', 'ANXIOUS', 'FLEXION'
    fn x_vowel(&mut self) -> bool {
        if self.string_at(self.current + 1, 3, &["UAL", "ION", "IOU"]) {
            self.add("KX", "KS");
            self.advance_counter(3, 1);
            return true;
        }
        false
    }

    /// Adds "KS" unless the 'X' ends a French word. Never claims the letter,
    /// so the default cursor step still runs.
    fn french_x_final(&mut self) -> bool {
        if !(self.current == self.last
            && (self.string_at(self.current - 3, 3, &["IAU", "EAU", "IEU"])
                || self.string_at(self.current - 2, 2, &["AI", "AU", "OU", "OI", "EU"])))
        {
            self.add("KS", "KS");
        }
        false
    }
}
