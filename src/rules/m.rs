//! 'M': silent 'B' and 'N' after it, and the "MC" name prefix.

use crate::context::Context;
use crate::rules::Rule;

const M_RULES: &[Rule] = &[
    Context::silent_m_at_beginning,
    Context::mr_and_mrs,
    Context::mac,
    Context::mpt,
];

impl Context {
    pub(crate) fn encode_m(&mut self) {
        if self.first_match(M_RULES) {
            return;
        }
        self.mb();
        self.add("M", "M");
    }

    // 'MNEMONIC'
    fn silent_m_at_beginning(&mut self) -> bool {
        if self.current == 0 && self.string_at(self.current, 2, &["MN"]) {
            self.current += 1;
            return true;
        }
        false
    }

    // 'MR' and 'MRS' are read out
    fn mr_and_mrs(&mut self) -> bool {
        if self.current == 0 && self.string_at(self.current, 2, &["MR"]) {
            if self.length == 2 && self.string_at(self.current, 2, &["MR"]) {
                if self.encode_vowels {
                    self.add("MASTAR", "MASTAR");
                } else {
                    self.add("MSTR", "MSTR");
                }
                self.current += 2;
                return true;
            } else if self.length == 3 && self.string_at(self.current, 3, &["MRS"]) {
                if self.encode_vowels {
                    self.add("MASAS", "MASAS");
                } else {
                    self.add("MSS", "MSS");
                }
                self.current += 3;
                return true;
            }
        }
        false
    }

    // 'MC' and a few 'MAC' names followed by a vowel
    fn mac(&mut self) -> bool {
        if self.current == 0
            && (self.string_at(0, 7, &["MACIVER", "MACEWEN"])
                || self.string_at(0, 8, &["MACELROY", "MACILROY"])
                || self.string_at(0, 9, &["MACINTOSH"])
                || self.string_at(0, 2, &["MC"]))
        {
            if self.encode_vowels {
                self.add("MAK", "MAK");
            } else {
                self.add("MK", "MK");
            }
            if self.string_at(0, 2, &["MC"]) {
                if self.string_at(self.current + 2, 1, &["K", "G", "Q"])
                    && !self.string_at(self.current + 2, 4, &["GEOR"])
                {
                    self.current += 3;
                } else {
                    self.current += 2;
                }
            } else {
                self.current += 3;
            }
            return true;
        }
        false
    }

    // 'COMPTROLLER' reads 'MPT' as 'N'
    fn mpt(&mut self) -> bool {
        if self.string_at(self.current - 2, 8, &["COMPTROL"])
            || self.string_at(self.current - 4, 7, &["ACCOMPT"])
        {
            self.add("N", "N");
            self.current += 2;
            return true;
        }
        false
    }

    // 'THUMB', 'CLIMB'
    fn silent_mb_1(&self) -> bool {
        (self.current == 3 && self.string_at(self.current - 3, 5, &["THUMB"]))
            || (self.current == 2
                && self.string_at(
                    self.current - 2,
                    4,
                    &["DUMB", "BOMB", "DAMN", "LAMB", "NUMB", "TOMB"],
                ))
    }

    // 'MB' followed by a suffix that keeps the 'B': 'NUMBER'
    fn pronounced_mb(&self) -> bool {
        self.string_at(self.current - 2, 6, &["NUMBER"])
            || (self.string_at(self.current + 2, 1, &["A"])
                && !self.string_at(self.current - 2, 7, &["DUMBASS"]))
            || self.string_at(self.current + 2, 1, &["O"])
            || self.string_at(
                self.current - 2,
                6,
                &["LAMBEN", "LAMBER", "LAMBET", "TOMBIG", "LAMBRE"],
            )
    }

    fn silent_mb_2(&self) -> bool {
        self.char_at(self.current + 1) == 'B'
            && self.current > 1
            && (self.current + 1 == self.last
                || self.string_at(self.current + 2, 3, &["ING", "ABL"])
                || self.string_at(self.current + 2, 4, &["LIKE"])
                || (self.char_at(self.current + 2) == 'S' && self.current + 2 == self.last)
                || self.string_at(self.current - 5, 7, &["BUNCOMB"])
                || (self.string_at(self.current + 2, 2, &["ED", "ER"])
                    && self.current + 3 == self.last
                    && (self.string_at(0, 5, &["CLIMB", "PLUMB"])
                        || !self.string_at(
                            self.current - 1,
                            5,
                            &["IMBER", "AMBER", "EMBER", "UMBER"],
                        ))
                    && !self.string_at(self.current - 2, 6, &["CUMBER", "SOMBER"])))
    }

    fn pronounced_mb_2(&self) -> bool {
        self.string_at(self.current - 1, 5, &["OMBAS", "OMBAD", "UMBRA"])
            || self.string_at(self.current - 3, 4, &["FLAM"])
    }

    // 'AUTUMN', 'HYMN'
    fn mn(&self) -> bool {
        self.char_at(self.current + 1) == 'N'
            && (self.current + 1 == self.last
                || (self.string_at(self.current + 2, 3, &["ING", "EST"])
                    && self.current + 4 == self.last)
                || (self.char_at(self.current + 2) == 'S' && self.current + 2 == self.last)
                || (self.string_at(self.current + 2, 2, &["LY", "ER", "ED"])
                    && self.current + 3 == self.last)
                || self.string_at(self.current - 2, 9, &["DAMNEDEST"])
                || self.string_at(self.current - 5, 9, &["GODDAMNIT"]))
    }

    fn mb(&mut self) {
        if self.silent_mb_1() {
            if self.pronounced_mb() {
                self.current += 1;
            } else {
                self.current += 2;
            }
        } else if self.silent_mb_2() {
            if self.pronounced_mb_2() {
                self.current += 1;
            } else {
                self.current += 2;
            }
        } else if self.mn() {
            self.current += 2;
        } else if self.char_at(self.current + 1) == 'M' {
            self.current += 2;
        } else {
            self.current += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::rules::testing::check;

    #[test]
    fn m_defaults() {
        check(
            false,
            false,
            &[
                ("mom", "MM", ""),
                ("summer", "SMR", ""),
                ("hammer", "HMR", ""),
                ("Smith", "SM0", "XMT"),
                ("Mnemonic", "NMNK", ""),
                ("Mn", "N", ""),
            ],
        );
    }

    #[test]
    fn mb_and_mn() {
        check(
            false,
            false,
            &[
                ("lamb", "LM", ""),
                ("thumb", "0M", ""),
                ("climb", "KLM", ""),
                ("plumber", "PLMR", ""),
                ("number", "NMPR", ""),
                ("Thumbs", "0MS", ""),
                ("Dumbo", "TMP", ""),
                ("autumn", "ATM", ""),
                ("autumnal", "ATMNL", ""),
                ("solemn", "SLM", ""),
                ("damned", "TMT", ""),
                ("hymn", "HM", ""),
                ("tomb", "TM", ""),
            ],
        );
    }

    #[test]
    fn mc_prefix() {
        check(
            false,
            false,
            &[
                ("McDonald", "MKTNLT", ""),
                ("McCarthy", "MKR0", ""),
                ("Mcintosh", "MKNTX", ""),
                ("McKay", "MK", ""),
                ("Mchugh", "MK", ""),
                ("McGee", "MK", ""),
            ],
        );
    }

    #[test]
    fn m_exact_vowels() {
        check(
            true,
            true,
            &[
                ("lamb", "LAM", ""),
                ("number", "NAMBAR", ""),
                ("McDonald", "MAKDANAL", ""),
                ("autumn", "ATAM", ""),
            ],
        );
    }
}
