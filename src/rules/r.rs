//! 'R': silent final 'R' of French names and the "-RE" ending read as "-ER".

use crate::context::Context;

impl Context {
    pub(crate) fn encode_r(&mut self) {
        if self.rz() {
            return;
        }
        if !self.silent_r() && !self.vowel_re_transposition() {
            self.add("R", "R");
        }
        if self.char_at(self.current + 1) == 'R'
            || self.string_at(self.current - 6, 8, &["POITIERS"])
        {
            self.current += 2;
        } else {
            self.current += 1;
        }
    }

    // 'RZ' in names like 'HERZ' and 'KURZ'
    fn rz(&mut self) -> bool {
        if self.string_at(
            self.current - 2,
            4,
            &["GARZ", "KURZ", "MARZ", "MERZ", "HERZ", "PERZ", "WARZ"],
        )
            || self.string_at(self.current, 5, &["RZANO", "RZOLA"])
            || self.string_at(self.current - 1, 4, &["ARZA", "ARZN"])
        {
            return false;
        }
        if self.string_at(self.current - 4, 11, &["YASTRZEMSKI"]) {
            self.add("R", "X");
            self.current += 2;
            return true;
        }
        if self.string_at(self.current - 1, 10, &["BRZEZINSKI"]) {
            self.add("RS", "RJ");
            self.current += 4;
            return true;
        } else if self.string_at(self.current - 1, 3, &["TRZ", "PRZ", "KRZ"])
            || (self.string_at(self.current, 2, &["RZ"])
                && (self.is_vowel_at(self.current - 1) || self.current == 0))
        {
            self.add("RS", "X");
            self.current += 2;
            return true;
        } else if self.string_at(self.current - 1, 3, &["BRZ", "DRZ", "GRZ"]) {
            self.add("RS", "J");
            self.current += 2;
            return true;
        }
        false
    }

    // French '-IER' names: 'MERCIER', 'OLIVIER'
    fn silent_r(&self) -> bool {
        (self.current == self.last
            && self.string_at(self.current - 2, 3, &["IER"])
            && (self.string_at(self.current - 5, 3, &["MET", "VIV", "LUC"])
                || self.string_at(
                    self.current - 6,
                    4,
                    &[
                        "CART", "DOSS", "FOUR", "OLIV", "BUST", "DAUM", "ATEL", "SONN", "CORM",
                        "MERC", "PELT", "POIR", "BERN", "FORT", "GREN", "SAUC", "GAGN", "GAUT",
                        "GRAN", "FORC", "MESS", "LUSS", "MEUN", "POTH", "HOLL", "CHEN",
                    ],
                )
                || self.string_at(
                    self.current - 7,
                    5,
                    &["CROUP", "TORCH", "CLOUT", "FOURN", "GAUTH", "TROTT", "DEROS", "CHART"],
                )
                || self.string_at(
                    self.current - 8,
                    6,
                    &["CHEVAL", "LAVOIS", "PELLET", "SOMMEL", "TREPAN", "LETELL", "COLOMB"],
                )
                || self.string_at(self.current - 9, 7, &["CHARCUT"])
                || self.string_at(self.current - 10, 8, &["CHARPENT"])))
            || self.string_at(self.current - 2, 7, &["SURBURB", "WORSTED"])
            || self.string_at(self.current - 2, 9, &["WORCESTER"])
            || self.string_at(self.current - 7, 8, &["MONSIEUR"])
            || self.string_at(self.current - 6, 8, &["POITIERS"])
    }

    // '-RE' as in 'ACRE' sounds 'AR'
    fn vowel_re_transposition(&mut self) -> bool {
        if self.encode_vowels
            && self.char_at(self.current + 1) == 'E'
            && self.length > 3
            && !self.string_at(0, 5, &["OUTRE", "LIBRE", "ANDRE"])
            && !(self.string_at(0, 4, &["FRED", "TRES"]) && self.length == 4)
            && !self.string_at(
                self.current - 2,
                5,
                &["LDRED", "LFRED", "NDRED", "NFRED", "NDRES", "TRES", "IFRED"],
            )
            && !self.is_vowel_at(self.current - 1)
            && (self.current + 1 == self.last
                || (self.current + 2 == self.last
                    && self.string_at(self.current + 2, 1, &["D", "S"])))
        {
            self.add("AR", "AR");
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use crate::rules::testing::check;

    #[test]
    fn r_defaults() {
        check(
            false,
            false,
            &[
                ("Rory", "RR", ""),
                ("Harry", "HR", ""),
                ("error", "ARR", ""),
                ("fire", "FR", ""),
                ("Lauren", "LRN", ""),
            ],
        );
    }

    #[test]
    fn silent_final_r() {
        check(
            false,
            false,
            &[
                ("Renoir", "RNR", ""),
                ("Rogier", "RJR", "RKR"),
                ("Ferrer", "FRR", ""),
                ("Garnier", "KRNR", ""),
                ("Pierre", "PR", ""),
                ("Olivier", "ALF", ""),
                ("Mercier", "MRS", ""),
                ("Saunier", "SNR", ""),
                ("ferrier", "FRR", ""),
            ],
        );
    }

    #[test]
    fn re_transposition() {
        check(
            true,
            false,
            &[
                ("acre", "AKAR", ""),
                ("fibre", "FAPAR", ""),
                ("theatre", "0ATAR", ""),
                ("massacre", "MASAKAR", ""),
                ("lucre", "LAKAR", ""),
                ("mediocre", "MATAKAR", ""),
                ("Andre", "ANTRA", ""),
                ("metre", "MATAR", ""),
                ("ochre", "AKAR", ""),
                ("Pierre", "PAR", ""),
            ],
        );
    }

    #[test]
    fn r_exact() {
        check(
            true,
            true,
            &[
                ("Rory", "RARA", ""),
                ("acre", "AKAR", ""),
                ("Renoir", "RANAR", ""),
            ],
        );
    }
}
