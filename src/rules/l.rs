//! 'L': silent 'L' ("calm", "could"), Spanish "LL", and the "-LE"
//! endings that get their vowel placed before the 'L'.

use crate::context::Context;
use crate::rules::Rule;
use crate::word::root_or_inflections;

const L_RULES: &[Rule] = &[
    Context::lely_to_l,
    Context::colonel,
    Context::french_ault,
    Context::french_euil,
    Context::french_oulx,
    Context::silent_l_in_lm,
    Context::silent_l_in_lk_lv,
    Context::silent_l_in_ould,
];

impl Context {
    pub(crate) fn encode_l(&mut self) {
        let start = self.current;
        self.interpolate_vowel_when_cons_l_at_end();
        if self.first_match(L_RULES) {
            return;
        }
        if self.ll_as_vowel_cases() {
            return;
        }
        self.le_cases(start);
    }

    fn interpolate_vowel_when_cons_l_at_end(&mut self) {
        if self.encode_vowels
            && self.current == self.last
            && self.string_at(self.current - 1, 1, &["D", "G", "T"])
        {
            self.add("A", "A");
        }
    }

    // '-ILELY' as in 'AGILELY'
    fn lely_to_l(&mut self) -> bool {
        if self.string_at(self.current - 1, 5, &["ILELY"]) && self.current + 3 == self.last {
            self.add("L", "L");
            self.current += 3;
            return true;
        }
        false
    }

    // 'COLONEL' sounds like 'KERNEL'
    fn colonel(&mut self) -> bool {
        if self.string_at(self.current - 2, 7, &["COLONEL"]) {
            self.add("R", "R");
            self.current += 2;
            return true;
        }
        false
    }

    // 'RENAULT', 'THIBAULT'
    fn french_ault(&mut self) -> bool {
        if self.current > 3
            && (self.string_at(
                self.current - 3,
                5,
                &["RAULT", "NAULT", "BAULT", "SAULT", "GAULT", "CAULT"],
            )
                || self.string_at(self.current - 4, 6, &["REAULT", "RIAULT", "NEAULT", "BEAULT"]))
            && !(root_or_inflections(self.word.as_str(), "ASSAULT")
                || self.string_at(self.current - 8, 10, &["SOMERSAULT"])
                || self.string_at(self.current - 9, 11, &["SUMMERSAULT"]))
        {
            self.current += 2;
            return true;
        }
        false
    }

    // 'AUTEUIL'
    fn french_euil(&mut self) -> bool {
        if self.string_at(self.current - 3, 4, &["EUIL"]) && self.current == self.last {
            self.current += 1;
            return true;
        }
        false
    }

    // French '-OULX' endings
    fn french_oulx(&mut self) -> bool {
        if self.string_at(self.current - 2, 4, &["OULX"]) && self.current + 1 == self.last {
            self.current += 2;
            return true;
        }
        false
    }

    // 'CALM', 'PSALM'
    fn silent_l_in_lm(&mut self) -> bool {
        if self.string_at(self.current, 2, &["LM", "LN"]) {
            if (self.string_at(self.current - 2, 4, &["COLN", "CALM", "BALM", "MALM", "PALM"])
                || (self.string_at(self.current - 1, 3, &["OLM"]) && self.current + 1 == self.last)
                || self.string_at(self.current - 3, 5, &["PSALM", "QUALM"])
                || self.string_at(self.current - 2, 6, &["SALMON", "HOLMES"])
                || self.string_at(self.current - 1, 6, &["ALMOND"])
                || (self.current == 1 && self.string_at(self.current - 1, 4, &["ALMS"])))
                && !self.string_at(self.current + 2, 1, &["A"])
                && !self.string_at(self.current - 2, 5, &["BALMO"])
                && !self.string_at(self.current - 2, 6, &["PALMER", "PALMOR", "BALMER"])
                && !self.string_at(self.current - 3, 5, &["THALM"])
            {
                self.current += 1;
                return true;
            } else {
                self.add("L", "L");
                self.current += 1;
                return true;
            }
        }
        false
    }

    // 'WALK', 'HALVE'
    fn silent_l_in_lk_lv(&mut self) -> bool {
        if (self.string_at(
            self.current - 2,
            4,
            &["WALK", "YOLK", "FOLK", "HALF", "TALK", "CALF", "BALK", "CALK"],
        )
            || (self.string_at(self.current - 2, 4, &["POLK"])
                && !self.string_at(self.current - 2, 5, &["POLKA", "WALKO"]))
            || (self.string_at(self.current - 2, 4, &["HALV"])
                && !self.string_at(self.current - 2, 5, &["HALVA", "HALVO"]))
            || (self.string_at(self.current - 3, 5, &["CAULK", "CHALK", "BAULK", "FAULK"])
                && !self.string_at(self.current - 4, 6, &["SCHALK"]))
            || ((self.string_at(self.current - 2, 5, &["SALVE", "CALVE"])
                || self.string_at(self.current - 2, 6, &["SOLDER"]))
                && !self.string_at(self.current - 2, 6, &["SALVER", "CALVER"])))
            && !self.string_at(self.current - 5, 9, &["GONSALVES", "GONCALVES"])
            && !self.string_at(self.current - 2, 6, &["BALKAN", "TALKAL"])
            && !self.string_at(self.current - 3, 5, &["PAULK", "CHALF"])
        {
            self.current += 1;
            return true;
        }
        false
    }

    // 'WOULD', 'COULD', 'SHOULD'
    fn silent_l_in_ould(&mut self) -> bool {
        if self.string_at(self.current - 3, 5, &["WOULD", "COULD"])
            || (self.string_at(self.current - 4, 6, &["SHOULD"])
                && !self.string_at(self.current - 4, 8, &["SHOULDER"]))
        {
            self.add_exact_approx("D", "T");
            self.current += 2;
            return true;
        }
        false
    }

    fn ll_as_vowel_special_cases(&mut self) -> bool {
        if self.string_at(self.current - 5, 8, &["TORTILLA"])
            || self.string_at(self.current - 8, 11, &["RATATOUILLE"])
            || (self.string_at(0, 5, &["GUILL", "VEILL", "GAILL"])
                && !(self.string_at(self.current - 3, 7, &["GUILLOT", "GUILLOR", "GUILLEN"])
                    || (self.string_at(0, 5, &["GUILL"]) && self.length == 5)))
            || self.string_at(0, 7, &["BROUILL", "GREMILL", "ROBILL"])
            || (self.string_at(self.current - 2, 5, &["EILLE"])
                && self.current + 2 == self.last
                && !self.string_at(self.current - 5, 8, &["REVEILLE"]))
        {
            self.current += 2;
            return true;
        }
        false
    }

    // Spanish 'LL' as in 'CASTILLO', 'GUILLERMO'
    fn ll_as_vowel(&mut self) -> bool {
        if (self.current + 3 == self.length
            && self.string_at(self.current - 1, 4, &["ILLO", "ILLA", "ALLE"]))
            || ((self.string_at(self.last - 1, 2, &["AS", "OS"])
                || self.string_at(self.last, 2, &["AS", "OS"])
                || self.string_at(self.last, 1, &["A", "O"]))
                && self.string_at(self.current - 1, 2, &["AL", "IL"])
                && !self.string_at(self.current - 1, 4, &["ALLA"]))
            || self.string_at(0, 5, &["VILLE", "VILLA"])
            || self.string_at(0, 8, &["GALLARDO", "VALLADAR", "MAGALLAN", "CAVALLAR", "BALLASTE"])
            || self.string_at(0, 3, &["LLA"])
        {
            self.add("L", "");
            self.current += 2;
            return true;
        }
        false
    }

    /// Spanish "LL". Moves the cursor past the 'L's even when it declines,
    /// so the "-LE" checks that follow look back from the saved start.
    fn ll_as_vowel_cases(&mut self) -> bool {
        if self.char_at(self.current + 1) == 'L' {
            if self.ll_as_vowel_special_cases() || self.ll_as_vowel() {
                return true;
            }
            self.current += 2;
        } else {
            self.current += 1;
        }
        false
    }

    // '-LE' as in 'TABLE' sounds 'AL'
    fn vowel_le_transposition(&mut self, start: isize) -> bool {
        if self.encode_vowels
            && start > 1
            && !self.is_vowel_at(start - 1)
            && self.char_at(start + 1) == 'E'
            && self.char_at(start - 1) != 'L'
            && self.char_at(start - 1) != 'R'
            && !self.is_vowel_at(start + 2)
            && !self.string_at(0, 7, &["ECCLESI", "COMPLEC", "COMPLEJ", "ROBLEDO"])
            && !self.string_at(0, 5, &["MCCLE", "MCLEL"])
            && !self.string_at(0, 6, &["EMBLEM", "KADLEC"])
            && !(start + 2 == self.last && self.string_at(start, 3, &["LET"]))
            && !self.string_at(start, 7, &["LETTING"])
            && !self.string_at(
                start,
                6,
                &["LETELY", "LETTER", "LETION", "LETIAN", "LETING", "LETORY"],
            )
            && !self.string_at(start, 5, &["LETUS", "LETIV"])
            && !self.string_at(
                start,
                4,
                &["LESS", "LESQ", "LECT", "LEDG", "LETE", "LETH", "LETS", "LETT"],
            )
            && !self.string_at(start, 3, &["LEG", "LER", "LEX"])
            && !(self.string_at(start, 6, &["LEMENT"])
                && !(self.string_at(
                    self.current - 5,
                    6,
                    &["BATTLE", "TANGLE", "PUZZLE", "RABBLE", "BABBLE"],
                )
                    || self.string_at(self.current - 4, 5, &["TABLE"])))
            && !(start + 2 == self.last
                && self.string_at(start - 2, 5, &["OCLES", "ACLES", "AKLES"]))
            && !self.string_at(start - 3, 5, &["LISLE", "AISLE"])
            && !self.string_at(0, 4, &["ISLE"])
            && !self.string_at(0, 6, &["ROBLES"])
            && !self.string_at(start - 4, 7, &["PROBLEM", "RESPLEN"])
            && !self.string_at(start - 3, 6, &["REPLEN"])
            && !self.string_at(start - 2, 4, &["SPLE"])
            && self.char_at(start - 1) != 'H'
            && self.char_at(start - 1) != 'W'
        {
            self.add("AL", "AL");
            self.al_inversion = true;
            if self.char_at(start + 2) == 'L' {
                self.current = start + 3;
            }
            return true;
        }
        false
    }

    // consonant + 'LE' inside a word keeps 'LA'
    fn vowel_preserve_vowel_after_l(&mut self, start: isize) -> bool {
        if self.encode_vowels
            && !self.is_vowel_at(start - 1)
            && self.char_at(start + 1) == 'E'
            && start > 1
            && start + 1 != self.last
            && !(self.string_at(start + 1, 2, &["ES", "ED"]) && start + 2 == self.last)
            && !self.string_at(start - 1, 5, &["RLEST"])
        {
            self.add("LA", "LA");
            self.current = self.skip_vowels(self.current);
            return true;
        }
        false
    }

    fn le_cases(&mut self, start: isize) {
        if !self.vowel_le_transposition(start) && !self.vowel_preserve_vowel_after_l(start) {
            self.add("L", "L");
        }
    }
}
