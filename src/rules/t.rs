//! 'T': "TH", "-TION"/"-TURE", "TS"/"TZ", and silent 'T'.

use crate::context::Context;
use crate::rules::Rule;

const T_RULES: &[Rule] = &[
    Context::t_initial,
    Context::tch,
    Context::silent_french_t,
    Context::tun_tul_tua_tuo,
    Context::tue_teu_teou_tul_tie,
    Context::tur_tiu_suffixes,
    Context::ti,
    Context::tient,
    Context::tsch,
    Context::tzsch,
    Context::th_pronounced_separately,
    Context::tth,
    Context::th,
];

impl Context {
    pub(crate) fn encode_t(&mut self) {
        if self.first_match(T_RULES) {
            return;
        }
        if self.string_at(self.current + 1, 1, &["T", "D"]) {
            self.current += 2;
        } else {
            self.current += 1;
        }
        self.add("T", "T");
    }

    // initial 'TSAR' drops the 'T'; 'TSO', 'TSING' read 'X'
    fn t_initial(&mut self) -> bool {
        if self.current == 0 {
            if self.string_at(self.current + 1, 3, &["SAR", "ZAR"]) {
                self.current += 1;
                return true;
            }
            if (self.length == 3 && self.string_at(self.current + 1, 2, &["SO", "SA", "SU"]))
                || (self.length == 4 && self.string_at(self.current + 1, 3, &["SAO", "SAI"]))
                || (self.length == 5 && self.string_at(self.current + 1, 4, &["SING", "SANG"]))
            {
                self.add("X", "X");
                self.advance_counter(3, 2);
                return true;
            }
            if self.string_at(self.current + 1, 1, &["S"]) && self.is_vowel_at(self.current + 2) {
                self.add("TS", "S");
                self.advance_counter(3, 2);
                return true;
            }
            if self.string_at(self.current + 1, 1, &["J"]) {
                self.add("X", "X");
                self.advance_counter(3, 2);
                return true;
            }
            if (self.string_at(self.current + 1, 2, &["HU"]) && self.length == 3)
                || self.string_at(self.current + 1, 3, &["HAI", "HUY", "HAO"])
                || self.string_at(self.current + 1, 4, &["HYME", "HYMY", "HANH"])
                || self.string_at(self.current + 1, 5, &["HERES"])
            {
                self.add("T", "T");
                self.advance_counter(3, 2);
                return true;
            }
        }
        false
    }

    // 'TCH' as in 'MATCH'
    fn tch(&mut self) -> bool {
        if self.string_at(self.current + 1, 2, &["CH"]) {
            self.add("X", "X");
            self.current += 3;
            return true;
        }
        false
    }

    // 'MONET', 'POTPOURRI', 'MORTGAGE'
    fn silent_french_t(&mut self) -> bool {
        if (self.current == self.last
            && self.string_at(self.current - 4, 5, &["MONET", "GENET", "CHAUT"]))
            || self.string_at(self.current - 2, 9, &["POTPOURRI"])
            || self.string_at(self.current - 3, 9, &["BOATSWAIN"])
            || self.string_at(self.current - 3, 8, &["MORTGAGE"])
            || ((self.string_at(
                self.current - 4,
                5,
                &["BERET", "BIDET", "FILET", "DEBUT", "DEPOT", "PINOT", "TAROT"],
            )
                || self.string_at(
                    self.current - 5,
                    6,
                    &[
                        "BALLET", "BUFFET", "CACHET", "CHALET", "ESPRIT", "RAGOUT", "GOULET",
                        "CHABOT", "BENOIT",
                    ],
                )
                || self.string_at(
                    self.current - 6,
                    7,
                    &[
                        "GOURMET", "BOUQUET", "CROCHET", "CROQUET", "PARFAIT", "PINCHOT", "CABARET",
                        "PARQUET", "RAPPORT", "TOUCHET", "COURBET", "DIDEROT",
                    ],
                )
                || self.string_at(
                    self.current - 7,
                    8,
                    &[
                        "ENTREPOT", "CABERNET", "DUBONNET", "MASSENET", "MUSCADET", "RICOCHET",
                        "ESCARGOT",
                    ],
                )
                || self.string_at(
                    self.current - 8,
                    9,
                    &["SOBRIQUET", "CABRIOLET", "CASSOULET", "OUBRIQUET", "CAMEMBERT"],
                ))
                && !self.string_at(self.current + 1, 2, &["AN", "RY", "IC", "OM", "IN"]))
        {
            self.current += 1;
            return true;
        }
        false
    }

    // 'FORTUNE', 'ACTUAL'
    fn tun_tul_tua_tuo(&mut self) -> bool {
        if self.string_at(self.current - 3, 6, &["FORTUN"])
            || (self.string_at(self.current, 3, &["TUL"])
                && self.is_vowel_at(self.current - 1)
                && self.is_vowel_at(self.current + 3))
            || self.string_at(self.current - 2, 5, &["BITUA", "BITUE"])
            || (self.current > 1 && self.string_at(self.current, 3, &["TUA", "TUO"]))
        {
            self.add("X", "T");
            self.current += 1;
            return true;
        }
        false
    }

    // 'STATUTE', 'AMATEUR', 'RIGHTEOUS'
    fn tue_teu_teou_tul_tie(&mut self) -> bool {
        if self.string_at(self.current + 1, 4, &["UENT"])
            || self.string_at(self.current - 4, 9, &["RIGHTEOUS"])
            || self.string_at(self.current - 3, 7, &["STATUTE"])
            || self.string_at(self.current - 3, 7, &["AMATEUR"])
            || self.string_at(self.current - 1, 5, &["NTULE", "NTULA", "STULE", "STULA", "STEUR"])
            || (self.current + 2 == self.last && self.string_at(self.current, 3, &["TUE"]))
            || self.string_at(self.current, 5, &["TUENC"])
            || self.string_at(self.current - 3, 8, &["STATUTOR"])
            || (self.current + 5 == self.last && self.string_at(self.current, 6, &["TIENCE"]))
        {
            self.add("X", "T");
            self.advance_counter(2, 1);
            return true;
        }
        false
    }

    // 'NATURE', 'PICTURE'
    fn tur_tiu_suffixes(&mut self) -> bool {
        if self.current > 0
            && self.string_at(self.current + 1, 3, &["URE", "URA", "URI", "URY", "URO", "IUS"])
        {
            if (self.string_at(self.current + 1, 3, &["URA", "URO"])
                && !self.string_at(self.current + 1, 4, &["URIA"])
                && self.current + 3 == self.last
                && !self.string_at(self.current - 3, 7, &["VENTURA"]))
                || self.string_at(self.current + 1, 4, &["URIA"])
            {
                self.add("T", "T");
            } else {
                self.add("X", "T");
            }
            self.advance_counter(2, 1);
            return true;
        }
        false
    }

    // '-TION', '-TIAL', '-TIOUS' read 'X'
    fn ti(&mut self) -> bool {
        if (self.string_at(self.current + 1, 2, &["IO"])
            && !self.string_at(self.current - 1, 5, &["ETIOL"]))
            || self.string_at(self.current + 1, 3, &["IAL"])
            || self.string_at(self.current - 1, 5, &["RTIUM", "ATIUM"])
            || (self.string_at(self.current + 1, 3, &["IAN"])
                && self.current > 0
                && !(self.string_at(self.current - 4, 8, &["FAUSTIAN"])
                    || self.string_at(self.current - 5, 9, &["PROUSTIAN"])
                    || self.string_at(self.current - 2, 7, &["TATIANA"])
                    || self.string_at(self.current - 3, 7, &["KANTIAN", "GENTIAN"])
                    || self.string_at(self.current - 8, 12, &["ROOSEVELTIAN"])))
            || (self.current + 2 == self.last
                && self.string_at(self.current, 3, &["TIA"])
                && !(self.string_at(self.current - 3, 6, &["HESTIA", "MASTIA"])
                    || self.string_at(self.current - 2, 5, &["OSTIA"])
                    || self.string_at(0, 3, &["TIA"])
                    || self.string_at(self.current - 5, 8, &["IZVESTIA"])))
            || self.string_at(self.current + 1, 4, &["IATE", "IATI", "IABL", "IATO", "IARY"])
            || self.string_at(self.current - 5, 9, &["CHRISTIAN"])
        {
            if (self.current == 2 && self.string_at(0, 4, &["ANTI"]))
                || self.string_at(0, 5, &["PATIO", "PITIA", "DUTIA"])
            {
                self.add("T", "T");
            } else if self.string_at(self.current - 4, 8, &["EQUATION"]) {
                self.add("J", "J");
            } else if self.string_at(self.current, 4, &["TION"]) {
                self.add("X", "X");
            } else if self.string_at(0, 5, &["KATIA", "LATIA"]) {
                self.add("T", "X");
            } else {
                self.add("X", "T");
            }
            self.advance_counter(3, 1);
            return true;
        }
        false
    }

    // 'PATIENT', 'QUOTIENT'
    fn tient(&mut self) -> bool {
        if self.string_at(self.current + 1, 4, &["IENT"]) {
            self.add("X", "T");
            self.advance_counter(3, 1);
            return true;
        }
        false
    }

    // German 'TSCH'
    fn tsch(&mut self) -> bool {
        if self.string_at(self.current, 4, &["TSCH"])
            && !self.string_at(self.current - 3, 4, &["WELT", "KLAT", "FEST"])
        {
            self.add("X", "X");
            self.current += 4;
            return true;
        }
        false
    }

    // 'NIETZSCHE'
    fn tzsch(&mut self) -> bool {
        if self.string_at(self.current, 5, &["TZSCH"]) {
            self.add("X", "X");
            self.current += 5;
            return true;
        }
        false
    }

    // 'PORTHOLE', 'HOTHOUSE', 'ANTHILL'
    fn th_pronounced_separately(&mut self) -> bool {
        if (self.current > 0
            && self.string_at(
                self.current + 1,
                4,
                &[
                    "HOOD", "HEAD", "HEID", "HAND", "HILL", "HOLD", "HAWK", "HEAP", "HERD", "HOLE",
                    "HOOK", "HUNT", "HUMO", "HAUS", "HOFF", "HARD",
                ],
            )
            && !self.string_at(self.current - 3, 5, &["SOUTH", "NORTH"]))
            || self.string_at(self.current + 1, 5, &["HOUSE", "HEART", "HASTE", "HYPNO", "HEQUE"])
            || (self.string_at(self.current + 1, 4, &["HALL"])
                && self.current + 4 == self.last
                && !self.string_at(self.current - 3, 5, &["SOUTH", "NORTH"]))
            || (self.string_at(self.current + 1, 3, &["HAM"])
                && self.current + 3 == self.last
                && !(self.string_at(0, 6, &["GOTHAM", "WITHAM", "LATHAM"])
                    || self.string_at(0, 7, &["BENTHAM", "WALTHAM", "WORTHAM"])
                    || self.string_at(0, 8, &["GRANTHAM"])))
            || (self.string_at(self.current + 1, 5, &["HATCH"])
                && !(self.current == 0 || self.string_at(self.current - 2, 8, &["UNTHATCH"])))
            || self.string_at(self.current - 3, 7, &["WARTHOG"])
            || self.string_at(self.current - 2, 6, &["ESTHER"])
            || self.string_at(self.current - 3, 6, &["GOETHE"])
            || self.string_at(self.current - 2, 8, &["NATHALIE"])
        {
            if self.string_at(self.current - 3, 7, &["POSTHUM"]) {
                self.add("X", "X");
            } else {
                self.add("T", "T");
            }
            self.current += 2;
            return true;
        }
        false
    }

    // 'MATTHEW'
    fn tth(&mut self) -> bool {
        if self.string_at(self.current, 3, &["TTH"]) {
            if self.string_at(self.current - 2, 5, &["MATTH"]) {
                self.add("0", "0");
            } else {
                self.add("T0", "T0");
            }
            self.current += 3;
            return true;
        }
        false
    }

    fn th(&mut self) -> bool {
        if self.string_at(self.current, 2, &["TH"]) {
            if self.string_at(self.current - 3, 7, &["CLOTHES"]) {
                self.current += 3;
                return true;
            }
            if self.string_at(
                self.current + 2,
                4,
                &["OMAS", "OMPS", "OMPK", "OMSO", "OMSE", "AMES", "OVEN", "OFEN", "ILDA", "ILDE"],
            )
                || (self.string_at(0, 4, &["THOM"]) && self.length == 4)
                || (self.string_at(0, 5, &["THOMS"]) && self.length == 5)
                || self.string_at(0, 4, &["VAN ", "VON "])
                || self.string_at(0, 3, &["SCH"])
            {
                self.add("T", "T");
            } else if self.string_at(0, 2, &["SM"]) {
                self.add("0", "T");
            } else {
                self.add("0", "0");
            }
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
    fn t_defaults() {
        check(
            false,
            false,
            &[
                ("tot", "TT", ""),
                ("butter", "PTR", ""),
                ("Matt", "MT", ""),
                ("Thomas", "TMS", ""),
                ("tuttle", "TTL", ""),
                ("Pitt", "PT", ""),
            ],
        );
    }

    #[test]
    fn th_spellings() {
        check(
            false,
            false,
            &[
                ("think", "0NK", ""),
                ("this", "0S", ""),
                ("Thomas", "TMS", ""),
                ("Thames", "TMS", ""),
                ("Thyme", "TM", ""),
                ("Goethe", "KT", ""),
                ("Elizabeth", "ALSP0", ""),
                ("eighth", "A0", ""),
                ("Esther", "ASTR", ""),
                ("Matthew", "M0", ""),
                ("Thompson", "TMPSN", ""),
                ("Anthony", "AN0N", ""),
                ("Lothar", "L0R", ""),
                ("Theresa", "TRS", ""),
                ("Thailand", "TLNT", ""),
                ("Pothead", "PTT", ""),
            ],
        );
    }

    #[test]
    fn t_read_as_x_or_s() {
        check(
            false,
            false,
            &[
                ("nation", "NXN", ""),
                ("patient", "PXNT", "PTNT"),
                ("question", "KSXN", ""),
                ("tsar", "SR", ""),
                ("Tsing", "XNK", ""),
                ("Tchaikovsky", "XKFSK", ""),
                ("Ritz", "RTS", ""),
                ("Mitzi", "MTS", ""),
                ("Tzipora", "TSPR", ""),
                ("Bastion", "PSXN", ""),
                ("Pettigrew", "PTKR", ""),
                ("Mitchell", "MXL", ""),
                ("watch", "AX", ""),
                ("nature", "NXR", "NTR"),
                ("posture", "PSXR", "PSTR"),
                ("Bouquet", "PK", ""),
                ("Ballet", "PL", ""),
                ("Croquet", "KRK", ""),
                ("Tjaden", "XTN", ""),
            ],
        );
    }

    #[test]
    fn silent_t() {
        check(
            false,
            false,
            &[
                ("Bouquet", "PK", ""),
                ("Rapport", "RPR", ""),
                ("Christmas", "KRSMS", ""),
                ("castle", "KSL", ""),
                ("listen", "LSN", ""),
                ("often", "AFN", "AFTN"),
                ("mortgage", "MRKJ", ""),
                ("Depot", "TP", ""),
                ("Tchotchke", "XXK", ""),
                ("Pinot", "PN", ""),
                ("Merlot", "MRLT", ""),
                ("Bizet", "PST", ""),
                ("Huet", "AT", ""),
            ],
        );
    }

    #[test]
    fn t_exact_vowels() {
        check(
            true,
            true,
            &[
                ("tot", "TAT", ""),
                ("this", "0AS", ""),
                ("nation", "NAXAN", ""),
                ("Tsing", "XANG", ""),
                ("Matthew", "MA0A", ""),
            ],
        );
    }
}
