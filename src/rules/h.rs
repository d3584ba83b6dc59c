//! 'H': sounded only before a vowel, with a list of words whose initial
//! 'H' is silent and Chinese/Spanish spellings where it stands for a
//! vowel or 'J'.

use crate::context::Context;
use crate::rules::Rule;

const H_RULES: &[Rule] = &[
    Context::initial_silent_h,
    Context::initial_hs,
    Context::initial_hu_hw,
    Context::non_initial_silent_h,
];

impl Context {
    pub(crate) fn encode_h(&mut self) {
        if self.first_match(H_RULES) {
            return;
        }
        if !self.h_pronounced() {
            self.current += 1;
        }
    }

    // 'HONOR', 'HOUR', 'HEIR'
    fn initial_silent_h(&mut self) -> bool {
        if self.string_at(self.current + 1, 3, &["OUR", "ERB", "EIR"])
            || self.string_at(self.current + 1, 4, &["ONOR"])
            || self.string_at(self.current + 1, 5, &["ONOUR", "ONEST"])
        {
            if self.current == 0 && self.string_at(self.current, 4, &["HERB"]) {
                if self.encode_vowels {
                    self.add("HA", "A");
                } else {
                    self.add("H", "A");
                }
            } else if self.current == 0 || self.encode_vowels {
                self.add("A", "A");
            }
            self.current += 1;
            self.current = self.skip_vowels(self.current);
            return true;
        }
        false
    }

    // 'HSU' and other transliterations
    fn initial_hs(&mut self) -> bool {
        if self.current == 0 && self.string_at(0, 2, &["HS"]) {
            self.add("X", "X");
            self.current += 2;
            return true;
        }
        false
    }

    // initial 'HUA', 'HUE', 'HWA' read as a vowel
    fn initial_hu_hw(&mut self) -> bool {
        if self.string_at(0, 3, &["HUA", "HUE", "HWA"])
            && !self.string_at(self.current, 4, &["HUEY"])
        {
            self.add("A", "A");
            if !self.encode_vowels {
                self.current += 3;
            } else {
                self.current += 1;
                while self.is_vowel_at(self.current) || self.char_at(self.current) == 'W' {
                    self.current += 1;
                }
            }
            return true;
        }
        false
    }

    // 'COHEN', 'MAHON', 'NIHIL'
    fn non_initial_silent_h(&mut self) -> bool {
        if self.string_at(
            self.current - 2,
            5,
            &["NIHIL", "VEHEM", "LOHEN", "NEHEM", "MAHON", "MAHAN", "COHEN", "GAHAN"],
        )
            || self.string_at(
                self.current - 3,
                6,
                &["GRAHAM", "PROHIB", "FRAHER", "TOOHEY", "TOUHEY"],
            )
            || self.string_at(self.current - 3, 5, &["TOUHY"])
            || self.string_at(0, 9, &["CHIHUAHUA"])
        {
            if !self.encode_vowels {
                self.current += 2;
            } else {
                self.current += 1;
                self.current = self.skip_vowels(self.current);
            }
            return true;
        }
        false
    }

    // 'H' between or before vowels is sounded
    fn h_pronounced(&mut self) -> bool {
        if ((self.current == 0
            || self.is_vowel_at(self.current - 1)
            || (self.current > 0 && self.char_at(self.current - 1) == 'W'))
            && self.is_vowel_at(self.current + 1))
            || (self.char_at(self.current + 1) == 'H' && self.is_vowel_at(self.current + 2))
        {
            self.add("H", "H");
            self.advance_counter(2, 1);
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use crate::rules::testing::check;

    #[test]
    fn h_between_vowels() {
        check(
            false,
            false,
            &[
                ("ahead", "AHT", ""),
                ("Hugh", "H", ""),
                ("oh", "A", ""),
                ("Sarah", "SR", ""),
                ("Johnny", "JN", "AN"),
                ("Hume", "HM", ""),
                ("Elihu", "ALH", ""),
                ("Jehovah", "JHF", ""),
            ],
        );
    }

    #[test]
    fn silent_or_sounded_h() {
        check(
            false,
            false,
            &[
                ("hour", "AR", ""),
                ("honor", "ANR", ""),
                ("heir", "AR", ""),
                ("Honest", "ANST", ""),
                ("Rhonda", "RNT", ""),
                ("ohm", "AM", ""),
                ("Hermione", "HRMN", ""),
                ("Hardy", "HRT", ""),
                ("Hoa", "H", ""),
                ("Huang", "ANK", ""),
                ("Huey", "H", ""),
                ("Hwang", "ANK", ""),
                ("Jalisco", "HLSK", ""),
            ],
        );
    }

    #[test]
    fn h_with_vowels() {
        check(
            true,
            false,
            &[
                ("ahead", "AHAT", ""),
                ("Jehovah", "JAHAFA", ""),
                ("Sarah", "SARA", ""),
                ("hour", "AR", ""),
            ],
        );
    }
}
