//! 'Z': "ZZ", "ZH", Italian "ZZ"/"ZI" read as "TS", and Slavic "RZ".

use crate::context::Context;
use crate::rules::Rule;

const Z_RULES: &[Rule] = &[
    Context::zz,
    Context::zu_zier_zs,
    Context::french_ez,
    Context::german_z,
];

impl Context {
    pub(crate) fn encode_z(&mut self) {
        if self.first_match(Z_RULES) {
            return;
        }
        if self.zh() {
            return;
        } else {
            self.add("S", "S");
        }
        if self.char_at(self.current + 1) == 'Z' {
            self.current += 2;
        } else {
            self.current += 1;
        }
    }

    // Italian 'PIZZA' as 'TS'
    fn zz(&mut self) -> bool {
        if self.char_at(self.current + 1) == 'Z'
            && ((self.string_at(self.current + 2, 1, &["I", "O", "A"])
                && self.current + 2 == self.last)
                || self.string_at(self.current - 2, 9, &["MOZZARELL", "PIZZICATO", "PUZZONLAN"]))
        {
            self.add("TS", "S");
            self.current += 2;
            return true;
        }
        false
    }

    // 'AZURE', 'GLAZIER', Hungarian 'ZSA'
    fn zu_zier_zs(&mut self) -> bool {
        if (self.current == 1 && self.string_at(self.current - 1, 4, &["AZUR"]))
            || (self.string_at(self.current, 4, &["ZIER"])
                && !self.string_at(self.current - 2, 6, &["VIZIER"]))
            || self.string_at(self.current, 3, &["ZSA"])
        {
            self.add("J", "S");
            if self.string_at(self.current, 3, &["ZSA"]) {
                self.current += 2;
            } else {
                self.current += 1;
            }
            return true;
        }
        false
    }

    // 'CHEZ', 'RENDEZVOUS'
    fn french_ez(&mut self) -> bool {
        if (self.current == 3 && self.string_at(self.current - 3, 4, &["CHEZ"]))
            || self.string_at(self.current - 5, 6, &["RENDEZ"])
        {
            self.current += 1;
            return true;
        }
        false
    }

    // 'NAZI', 'MOZART', 'HERZ' read 'TS'
    fn german_z(&mut self) -> bool {
        if (self.current == 2
            && self.current + 1 == self.last
            && self.string_at(self.current - 2, 4, &["NAZI"]))
            || self.string_at(self.current - 2, 6, &["NAZIFY", "MOZART"])
            || self.string_at(self.current - 3, 4, &["HOLZ", "HERZ", "MERZ", "FITZ"])
            || (self.string_at(self.current - 3, 4, &["GANZ"])
                && !self.is_vowel_at(self.current + 1))
            || self.string_at(self.current - 4, 5, &["STOLZ", "PRINZ"])
            || self.string_at(self.current - 4, 7, &["VENEZIA"])
            || self.string_at(self.current - 3, 6, &["HERZOG"])
            || (self.word.as_str().contains("SCH")
                && !self.string_at(self.last - 2, 3, &["IZE", "OZE", "ZEL"]))
            || (self.current > 0 && self.string_at(self.current, 4, &["ZEIT"]))
            || self.string_at(self.current - 3, 4, &["WEIZ"])
        {
            if self.current > 0 && self.char_at(self.current - 1) == 'T' {
                self.add("S", "S");
            } else {
                self.add("TS", "TS");
            }
            self.current += 1;
            return true;
        }
        false
    }

    // 'ZHIVAGO', 'ZHANG'
    fn zh(&mut self) -> bool {
        if self.char_at(self.current + 1) == 'H' {
            self.add("J", "J");
            self.current += 2;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use crate::rules::testing::check;

    #[test]
    fn z_defaults() {
        check(
            false,
            false,
            &[
                ("zoo", "S", ""),
                ("buzz", "PS", ""),
                ("pizza", "PTS", "PS"),
                ("Mozart", "MTSRT", ""),
                ("Zhang", "JNK", ""),
                ("zz", "S", ""),
                ("Zsa Zsa", "JJ", "SS"),
                ("Mazza", "MTS", "MS"),
                ("Zuccarelli", "SKRL", ""),
                ("Nazi", "NTS", ""),
                ("Lazar", "LSR", ""),
                ("Zhivago", "JFK", ""),
                ("Brzezinski", "PRSNSK", "PRJNSK"),
                ("Schulz", "XLTS", ""),
                ("Ritz", "RTS", ""),
            ],
        );
    }

    #[test]
    fn z_exact() {
        check(
            true,
            true,
            &[
                ("zoo", "SA", ""),
                ("pizza", "PATSA", "PASA"),
                ("Zhang", "JANG", ""),
                ("Brzezinski", "BRSANSKA", "BRJANSKA"),
                ("Mozart", "MATSART", ""),
            ],
        );
    }
}
