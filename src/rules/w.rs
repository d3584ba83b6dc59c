//! 'W': usually a vowel. Sounded as 'V'/'F' in Polish and German names,
//! which show up as the alternate key.

use crate::context::Context;
use crate::rules::Rule;

const W_RULES: &[Rule] = &[
    Context::silent_w_at_beginning,
    Context::witz_wicz,
    Context::wr,
    Context::initial_w_vowel,
    Context::wh,
    Context::eastern_european_w,
];

impl Context {
    pub(crate) fn encode_w(&mut self) {
        if self.first_match(W_RULES) {
            return;
        }
        if self.encode_vowels
            && self.string_at(self.current, 2, &["WE"])
            && self.current + 1 == self.last
        {
            self.add("A", "A");
        }
        self.current += 1;
    }

    // 'WRITE', 'WRONG'
    fn silent_w_at_beginning(&mut self) -> bool {
        if self.current == 0 && self.string_at(self.current, 2, &["WR"]) {
            self.current += 1;
            return true;
        }
        false
    }

    fn witz_wicz(&mut self) -> bool {
        if self.current + 3 == self.last && self.string_at(self.current, 4, &["WICZ", "WITZ"]) {
            if self.encode_vowels {
                if self.primary.ends_with('A') {
                    self.add("TS", "FAX");
                } else {
                    self.add("ATS", "FAX");
                }
            } else {
                self.add("TS", "FX");
            }
            self.current += 4;
            return true;
        }
        false
    }

    // 'WR' keeps only the 'R'
    fn wr(&mut self) -> bool {
        if self.string_at(self.current, 2, &["WR"]) {
            self.add("R", "R");
            self.current += 2;
            return true;
        }
        false
    }

    // initial 'W' before a vowel, with an 'F' alternate for Germanic names
    fn initial_w_vowel(&mut self) -> bool {
        if self.current == 0 && self.is_vowel_at(self.current + 1) {
            if self.germanic_or_slavic_name_beginning_with_w() {
                if self.encode_vowels {
                    self.add_exact_approx_pair("A", "VA", "A", "FA");
                } else {
                    self.add_exact_approx_pair("A", "V", "A", "F");
                }
            } else {
                self.add("A", "A");
            }
            self.current += 1;
            self.current = self.skip_vowels(self.current);
            return true;
        }
        false
    }

    // 'WHO', 'WHOLE' read as 'H'
    fn wh(&mut self) -> bool {
        if self.string_at(self.current, 2, &["WH"]) {
            if self.char_at(self.current + 2) == 'O'
                && !(self.string_at(self.current + 2, 4, &["OOSH"])
                    || self.string_at(self.current + 2, 3, &["OOP", "OMP", "ORL", "ORT"])
                    || self.string_at(self.current + 2, 2, &["OA", "OP"]))
            {
                self.add("H", "H");
                self.advance_counter(3, 2);
                return true;
            } else if self.string_at(
                self.current + 2,
                3,
                &["IDE", "ARD", "EAD", "AWK", "ERD", "OOK", "AND", "OLE", "OOD"],
            )
                || self.string_at(self.current + 2, 4, &["EART", "OUSE", "OUND"])
                || self.string_at(self.current + 2, 5, &["AMMER"])
            {
                self.add("H", "H");
                self.current += 2;
                return true;
            } else if self.current == 0 {
                self.add("A", "A");
                self.current += 2;
                self.current = self.skip_vowels(self.current);
                return true;
            }
            self.current += 2;
            return true;
        }
        false
    }

    // '-OWSKI', '-EWICZ' read the 'W' as 'F' in the alternate
    fn eastern_european_w(&mut self) -> bool {
        if (self.current == self.last && self.is_vowel_at(self.current - 1))
            || self.string_at(self.current - 1, 5, &["EWSKI", "EWSKY", "OWSKI", "OWSKY"])
            || (self.string_at(self.current, 5, &["WICKI", "WACKI"])
                && self.current + 4 == self.last)
            || (self.string_at(self.current, 4, &["WIAK"]) && self.current + 3 == self.last)
            || self.string_at(0, 3, &["SCH"])
        {
            self.add_exact_approx_pair("", "V", "", "F");
            self.current += 1;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use crate::rules::testing::check;

    #[test]
    fn w_defaults() {
        check(
            false,
            false,
            &[
                ("wow", "A", ""),
                ("Wagner", "AKNR", "FKNR"),
                ("Wright", "RT", ""),
                ("who", "H", ""),
                ("whole", "HL", ""),
                ("when", "AN", ""),
                ("awhile", "AL", ""),
                ("Wolfe", "ALF", "FLF"),
                ("Warren", "ARN", ""),
                ("Walter", "ALTR", "FLTR"),
                ("Swenson", "SNSN", "SVNSN"),
            ],
        );
    }

    #[test]
    fn polish_w() {
        check(
            false,
            false,
            &[
                ("witz", "TS", "FX"),
                ("Filipowicz", "FLPTS", "FLPFX"),
                ("Moskowitz", "MSKTS", "MSKFX"),
                ("Jankowski", "JNKSK", "ANKFSK"),
                ("Andrewski", "ANTRSK", "ANTRFSK"),
                ("Glowacki", "KLK", "KLFSK"),
                ("Wisniewski", "ASNSK", "FSNFSK"),
                ("Pietrowiak", "PTRK", "PTRFK"),
                ("Kowalski", "KLSK", ""),
                ("Krakow", "KRK", ""),
                ("Lewicki", "LK", "LFSK"),
            ],
        );
    }

    #[test]
    fn w_with_vowels() {
        check(
            true,
            false,
            &[
                ("witz", "ATS", "FAX"),
                ("Filipowicz", "FALAPATS", "FALAPAFA"),
                ("awhile", "AL", ""),
                ("Wagner", "AKNAR", "FAKNAR"),
                ("Wanda", "ANTA", "FANTA"),
                ("Wiesel", "ASAL", "FASAL"),
                ("Wolfe", "ALF", "FALF"),
                ("twee", "TA", ""),
            ],
        );
    }

    #[test]
    fn w_exact_vowels() {
        check(
            true,
            true,
            &[
                ("Wagner", "AGNAR", "VAGNAR"),
                ("Wolfe", "ALF", "VALF"),
                ("Glowacki", "GLAKA", "GLAVASKA"),
                ("Moskowitz", "MASKATS", "MASKAFAX"),
            ],
        );
    }
}
