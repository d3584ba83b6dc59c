//! 'G' is the most irregular letter. Handles "GH", silent and sounded
//! "GN", Italian "GLI", Spanish "GU", and the hard or soft 'G' before a
//! front vowel, which depends heavily on the word's origin.

use crate::context::Context;
use crate::rules::Rule;
use crate::word::root_or_inflections;

const G_RULES: &[Rule] = &[
    Context::silent_g_at_beginning,
    Context::gg,
    Context::gk,
    Context::gh,
    Context::silent_g,
    Context::gn,
    Context::gl,
    Context::initial_g_front_vowel,
    Context::nger,
    Context::ger,
    Context::gel,
    Context::non_initial_g_front_vowel,
    Context::ga_to_j,
];

const GH_RULES: &[Rule] = &[
    Context::gh_after_consonant,
    Context::initial_gh,
    Context::gh_to_j,
    Context::gh_to_h,
    Context::ught,
    Context::gh_h_part_of_other_word,
    Context::silent_gh,
    Context::gh_to_f,
];

impl Context {
    pub(crate) fn encode_g(&mut self) {
        if self.first_match(G_RULES) {
            return;
        }
        if !self.string_at(self.current - 1, 1, &["C", "K", "G", "Q"]) {
            self.add_exact_approx("G", "K");
        }
        self.current += 1;
    }

    // 'GNOME', 'GNU'
    fn silent_g_at_beginning(&mut self) -> bool {
        if self.current == 0 && self.string_at(self.current, 2, &["GN"]) {
            self.current += 1;
            return true;
        }
        false
    }

    // 'SUGGEST' as 'KJ', 'LOGGIA' as 'J'
    fn gg(&mut self) -> bool {
        if self.char_at(self.current + 1) == 'G' {
            if self.string_at(
                self.current - 1,
                5,
                &["AGGIA", "OGGIA", "AGGIO", "EGGIO", "EGGIA", "IGGIO"],
            )
                || (self.string_at(self.current - 1, 5, &["UGGIE"])
                    && !(self.current + 3 == self.last || self.current + 4 == self.last))
                || (self.current + 2 == self.last
                    && self.string_at(self.current - 1, 4, &["AGGI", "OGGI"]))
                || self.string_at(self.current - 2, 6, &["SUGGES", "XAGGER", "REGGIE"])
            {
                if self.string_at(self.current - 2, 7, &["SUGGEST"]) {
                    self.add_exact_approx("G", "K");
                }
                self.add("J", "J");
                self.advance_counter(3, 2);
            } else {
                self.add_exact_approx("G", "K");
                self.current += 2;
            }
            return true;
        }
        false
    }

    fn gk(&mut self) -> bool {
        if self.char_at(self.current + 1) == 'K' {
            self.add("K", "K");
            self.current += 2;
            return true;
        }
        false
    }

    fn gh(&mut self) -> bool {
        if self.char_at(self.current + 1) == 'H' {
            if self.first_match(GH_RULES) {
                return true;
            }
            self.add_exact_approx("G", "K");
            self.current += 2;
            return true;
        }
        false
    }

    // 'GH' after a consonant is a hard 'K'
    fn gh_after_consonant(&mut self) -> bool {
        if self.current > 0
            && !self.is_vowel_at(self.current - 1)
            && !(self.string_at(self.current - 3, 5, &["HALGH"]) && self.current + 1 == self.last)
        {
            self.add_exact_approx("G", "K");
            self.current += 2;
            return true;
        }
        false
    }

    // 'GHOST'; 'GHI-' reads 'J'
    fn initial_gh(&mut self) -> bool {
        if self.current == 0 {
            if self.char_at(self.current + 2) == 'I' {
                self.add("J", "J");
            } else {
                self.add_exact_approx("G", "K");
            }
            self.current += 2;
            return true;
        }
        false
    }

    // final '-ALGH' reads 'J'
    fn gh_to_j(&mut self) -> bool {
        if self.string_at(self.current - 2, 4, &["ALGH"]) && self.current + 1 == self.last {
            self.add("J", "");
            self.current += 2;
            return true;
        }
        false
    }

    // 'DONOGHUE', 'CALLAGHAN'
    fn gh_to_h(&mut self) -> bool {
        if (self.string_at(self.current - 4, 4, &["DONO", "DONA"])
            && self.is_vowel_at(self.current + 2))
            || self.string_at(self.current - 5, 9, &["CALLAGHAN"])
        {
            self.add("H", "H");
            self.current += 2;
            return true;
        }
        false
    }

    // 'DRAUGHT', 'LAUGHTER' read 'F'
    fn ught(&mut self) -> bool {
        if self.string_at(self.current - 1, 4, &["UGHT"]) {
            if (self.string_at(self.current - 3, 5, &["LAUGH"])
                && !(self.string_at(self.current - 4, 7, &["SLAUGHT"])
                    || self.string_at(self.current - 3, 7, &["LAUGHTO"])))
                || self.string_at(self.current - 4, 6, &["DRAUGH"])
            {
                self.add("FT", "FT");
            } else {
                self.add("T", "T");
            }
            self.current += 3;
            return true;
        }
        false
    }

    // 'BIGHORN', 'HOGHEAD'
    fn gh_h_part_of_other_word(&mut self) -> bool {
        if self.string_at(self.current + 1, 4, &["HOUS", "HEAD", "HOLE", "HORN", "HARN"]) {
            self.add_exact_approx("G", "K");
            self.current += 2;
            return true;
        }
        false
    }

    // 'NIGHT', 'DAUGHTER'; 'ROUGH' and 'COUGH' fall through to 'F'
    fn silent_gh(&mut self) -> bool {
        if ((self.current > 1 && self.string_at(self.current - 2, 1, &["B", "H", "D", "G", "L"]))
            || (self.current > 2
                && self.string_at(self.current - 3, 1, &["B", "H", "D", "K", "W", "N", "P", "V"])
                && !self.string_at(0, 6, &["ENOUGH"]))
            || (self.current > 3 && self.string_at(self.current - 4, 1, &["B", "H"]))
            || (self.current > 3 && self.string_at(self.current - 4, 2, &["PL", "SL"]))
            || (self.current > 0
                && (self.char_at(self.current - 1) == 'I'
                    || self.string_at(0, 4, &["PUGH"])
                    || (self.string_at(self.current - 1, 3, &["AGH"])
                        && self.current + 1 == self.last)
                    || self.string_at(self.current - 4, 6, &["GERAGH", "DRAUGH"])
                    || (self.string_at(self.current - 3, 5, &["GAUGH", "GEOGH", "MAUGH"])
                        && !self.string_at(0, 9, &["MCGAUGHEY"]))
                    || (self.string_at(self.current - 2, 4, &["OUGH"])
                        && self.current > 3
                        && !self.string_at(
                            self.current - 4,
                            6,
                            &["CCOUGH", "ENOUGH", "TROUGH", "CLOUGH"],
                        )))))
            && (self.string_at(self.current - 3, 5, &["VAUGH", "FEIGH", "LEIGH"])
                || self.string_at(self.current - 2, 4, &["HIGH", "TIGH"])
                || self.current + 1 == self.last
                || (self.string_at(self.current + 2, 2, &["IE", "EY", "ES", "ER", "ED", "TY"])
                    && self.current + 3 == self.last
                    && !self.string_at(self.current - 5, 9, &["GALLAGHER"]))
                || (self.string_at(self.current + 2, 1, &["Y"]) && self.current + 2 == self.last)
                || (self.string_at(self.current + 2, 3, &["ING", "OUT"])
                    && self.current + 4 == self.last)
                || (self.string_at(self.current + 2, 4, &["ERTY"]) && self.current + 5 == self.last)
                || !self.is_vowel_at(self.current + 2)
                || self.string_at(self.current - 3, 5, &["GAUGH", "GEOGH", "MAUGH"])
                || self.string_at(self.current - 4, 8, &["BROUGHAM"]))
            && !(self.string_at(0, 6, &["BALOGH", "SABAGH"])
                || self.string_at(self.current - 2, 7, &["BAGHDAD"])
                || self.string_at(self.current - 3, 5, &["WHIGH"])
                || self.string_at(self.current - 5, 7, &["SABBAGH", "AKHLAGH"]))
        {
            self.current += 2;
            return true;
        }
        false
    }

    fn gh_special_cases(&mut self) -> bool {
        let mut handled = false;
        if self.string_at(self.current - 6, 8, &["HICCOUGH"]) {
            self.add("P", "P");
            handled = true;
        } else if self.string_at(0, 5, &["LOUGH"]) {
            self.add("K", "K");
            handled = true;
        } else if self.string_at(0, 6, &["BALOGH"]) {
            self.add_exact_approx_pair("G", "", "K", "");
            handled = true;
        } else if self.string_at(self.current - 3, 8, &["LAUGHLIN", "COUGHLAN", "LOUGHLIN"]) {
            self.add("K", "F");
            handled = true;
        } else if self.string_at(self.current - 3, 5, &["GOUGH"])
            || self.string_at(self.current - 7, 9, &["COLCLOUGH"])
        {
            self.add("", "F");
            handled = true;
        }
        if handled {
            self.current += 2;
            return true;
        }
        false
    }

    // 'LAUGH', 'TOUGH'
    fn gh_to_f(&mut self) -> bool {
        if self.gh_special_cases() {
            return true;
        } else if self.current > 2
            && self.char_at(self.current - 1) == 'U'
            && self.is_vowel_at(self.current - 2)
            && self.string_at(self.current - 3, 1, &["C", "G", "L", "R", "T", "N", "S"])
            && !self.string_at(self.current - 4, 8, &["BREUGHEL", "FLAUGHER"])
        {
            self.add("F", "F");
            self.current += 2;
            return true;
        }
        false
    }

    // 'PHLEGM', 'PARADIGM' and final 'GT'
    fn silent_g(&mut self) -> bool {
        if (self.current + 1 == self.last
            && (self.string_at(self.current - 1, 3, &["EGM", "IGM", "AGM"])
                || self.string_at(self.current, 2, &["GT"])))
            || (self.string_at(0, 5, &["HUGES"]) && self.length == 5)
        {
            self.current += 1;
            return true;
        }
        if self.string_at(0, 2, &["NG"]) && self.current != self.last {
            self.current += 1;
            return true;
        }
        false
    }

    // 'GN' read as 'N': 'SIGN', 'COGNAC', 'LORGNETTE'
    fn gn(&mut self) -> bool {
        if self.char_at(self.current + 1) == 'N' {
            if (self.current > 1
                && (self.string_at(self.current - 1, 1, &["I", "U", "E"])
                    || self.string_at(self.current - 3, 9, &["LORGNETTE"])
                    || self.string_at(self.current - 2, 9, &["LAGNIAPPE"])
                    || self.string_at(self.current - 2, 6, &["COGNAC"])
                    || self.string_at(self.current - 3, 7, &["CHAGNON"])
                    || self.string_at(self.current - 5, 9, &["COMPAGNIE"])
                    || self.string_at(self.current - 4, 6, &["BOLOGN"]))
                && !(self.string_at(self.current + 2, 5, &["ATION"])
                    || self.string_at(self.current + 2, 4, &["ATOR"])
                    || self.string_at(self.current + 2, 3, &["ATE", "ITY"])
                    || (self.string_at(self.current + 2, 2, &["AN", "AC", "IA", "UM"])
                        && !(self.string_at(self.current - 3, 8, &["POIGNANT"])
                            || self.string_at(self.current - 2, 6, &["COGNAC"])))
                    || self.string_at(0, 7, &["SPIGNER", "STEGNER"])
                    || (self.string_at(0, 5, &["SIGNE"]) && self.length == 5)
                    || self.string_at(
                        self.current - 2,
                        5,
                        &[
                            "LIGNI", "LIGNO", "REGNA", "DIGNI", "WEGNE", "TIGNE", "RIGNE", "REGNE",
                            "TIGNO",
                        ],
                    )
                    || self.string_at(self.current - 2, 6, &["SIGNAL", "SIGNIF", "SIGNAT"])
                    || self.string_at(self.current - 1, 5, &["IGNIT"]))
                && !self.string_at(self.current - 2, 6, &["SIGNET", "LIGNEO"]))
                || (self.current + 2 == self.last
                    && self.string_at(self.current, 3, &["GNE", "GNA"])
                    && !self.string_at(self.current - 2, 5, &["SIGNA", "MAGNA", "SIGNE"]))
            {
                self.add_exact_approx_pair("N", "GN", "N", "KN");
            } else {
                self.add_exact_approx("GN", "KN");
            }
            self.current += 2;
            return true;
        }
        false
    }

    // Italian 'GLI' as in 'TAGLIATELLE'
    fn gl(&mut self) -> bool {
        if self.string_at(self.current + 1, 3, &["LIA", "LIO", "LIE"])
            && self.is_vowel_at(self.current - 1)
        {
            self.add_exact_approx_pair("L", "GL", "L", "KL");
            self.current += 2;
            return true;
        }
        false
    }

    // soft initial 'G' in 'GENTLE', 'GYM'
    fn initial_g_soft(&self) -> bool {
        ((self.string_at(
            self.current + 1,
            2,
            &[
                "EL", "EM", "EN", "EO", "ER", "ES", "IA", "IN", "IO", "IP", "IU", "YM", "YN", "YP",
                "YR", "EE",
            ],
        )
            || self.string_at(self.current + 1, 3, &["IRA", "IRO"]))
            && !(self.string_at(
                self.current + 1,
                3,
                &[
                    "ELD", "ELT", "ERT", "INZ", "ERH", "ITE", "ERD", "ERL", "ERN", "INT", "EES",
                    "EEK", "ELB", "EER",
                ],
            )
                || self.string_at(
                    self.current + 1,
                    4,
                    &["ERSH", "ERST", "INSB", "INGR", "EROW", "ERKE", "EREN"],
                )
                || self.string_at(
                    self.current + 1,
                    5,
                    &[
                        "ELLER", "ERDIE", "ERBER", "ESUND", "ESNER", "INGKO", "INKGO", "IPPER",
                        "ESELL", "IPSON", "EEZER", "ERSON", "ELMAN",
                    ],
                )
                || self.string_at(
                    self.current + 1,
                    6,
                    &["ESTALT", "ESTAPO", "INGHAM", "ERRITY", "ERRISH", "ESSNER", "ENGLER"],
                )
                || self.string_at(
                    self.current + 1,
                    7,
                    &["YNAECOL", "YNECOLO", "ENTHNER", "ERAGHTY"],
                )
                || self.string_at(self.current + 1, 8, &["INGERICH", "EOGHEGAN"])))
            || (self.is_vowel_at(self.current + 1)
                && (self.string_at(self.current + 1, 3, &["EE ", "EEW"])
                    || (self.string_at(
                        self.current + 1,
                        3,
                        &["IGI", "IRA", "IBE", "AOL", "IDE", "IGL"],
                    )
                        && !self.string_at(self.current + 1, 5, &["IDEON"]))
                    || self.string_at(self.current + 1, 4, &["ILES", "INGI", "ISEL"])
                    || (self.string_at(self.current + 1, 5, &["INGER"])
                        && !self.string_at(self.current + 1, 8, &["INGERICH"]))
                    || self.string_at(
                        self.current + 1,
                        5,
                        &["IBBER", "IBBET", "IBLET", "IBRAN", "IGOLO", "IRARD", "IGANT"],
                    )
                    || self.string_at(self.current + 1, 6, &["IRAFFE", "EEWHIZ"])
                    || self.string_at(self.current + 1, 7, &["ILLETTE", "IBRALTA"])))
    }

    // initial 'G' before 'E', 'I' or 'Y'
    fn initial_g_front_vowel(&mut self) -> bool {
        if self.current == 0 && self.front_vowel(self.current + 1) {
            if self.string_at(self.current + 1, 3, &["ILA"]) && self.length == 4 {
                self.add("H", "H");
            } else if self.initial_g_soft() {
                self.add_exact_approx_pair("J", "G", "J", "K");
            } else if self.char_at(self.current + 1) == 'E' || self.char_at(self.current + 1) == 'I' {
                self.add_exact_approx_pair("G", "J", "K", "J");
            } else {
                self.add_exact_approx("G", "K");
            }
            self.advance_counter(2, 1);
            return true;
        }
        false
    }

    // 'DANGER' soft, 'FINGER' hard
    fn nger(&mut self) -> bool {
        if self.current > 1 && self.string_at(self.current - 1, 4, &["NGER"]) {
            if !(root_or_inflections(self.word.as_str(), "ANGER")
                || root_or_inflections(self.word.as_str(), "LINGER")
                || root_or_inflections(self.word.as_str(), "MALINGER")
                || root_or_inflections(self.word.as_str(), "FINGER")
                || (self.string_at(
                    self.current - 3,
                    4,
                    &[
                        "HUNG", "FING", "BUNG", "WING", "RING", "DING", "ZENG", "ZING", "JUNG",
                        "LONG", "PING", "CONG", "MONG", "BANG", "GANG", "HANG", "LANG", "SANG",
                        "SING", "WANG", "ZANG",
                    ],
                )
                    && !(self.string_at(
                        self.current - 6,
                        7,
                        &["BOULANG", "SLESING", "KISSING", "DERRING"],
                    )
                        || self.string_at(self.current - 8, 9, &["SCHLESING"])
                        || self.string_at(self.current - 5, 6, &["SALING", "BELANG"])
                        || self.string_at(self.current - 6, 7, &["BARRING"])
                        || self.string_at(self.current - 6, 9, &["PHALANGER"])
                        || self.string_at(self.current - 4, 5, &["CHANG"])))
                || self.string_at(self.current - 4, 5, &["STING", "YOUNG"])
                || self.string_at(self.current - 5, 6, &["STRONG"])
                || self.string_at(0, 3, &["UNG", "ENG", "ING"])
                || self.string_at(self.current, 6, &["GERICH"])
                || self.string_at(0, 6, &["SENGER"])
                || self.string_at(self.current - 3, 6, &["WENGER", "MUNGER", "SONGER", "KINGER"])
                || self.string_at(
                    self.current - 4,
                    7,
                    &["FLINGER", "SLINGER", "STANGER", "STENGER", "KLINGER", "CLINGER"],
                )
                || self.string_at(self.current - 5, 8, &["SPRINGER", "SPRENGER"])
                || self.string_at(self.current - 3, 7, &["LINGERF"])
                || self.string_at(self.current - 2, 7, &["ANGERLY", "ANGERBO", "INGERSO"]))
            {
                self.add_exact_approx_pair("J", "G", "J", "K");
            } else {
                self.add_exact_approx_pair("G", "J", "K", "J");
            }
            self.advance_counter(2, 1);
            return true;
        }
        false
    }

    // '-GER' endings, soft or hard by name
    fn ger(&mut self) -> bool {
        if self.current > 0 && self.string_at(self.current + 1, 2, &["ER"]) {
            if ((self.current == 2
                && self.is_vowel_at(self.current - 1)
                && !self.is_vowel_at(self.current - 2)
                && !self.string_at(
                    self.current - 2,
                    5,
                    &["PAGER", "WAGER", "NIGER", "ROGER", "LEGER", "CAGER"],
                ))
                || self.string_at(self.current - 2, 5, &["AUGER", "EAGER", "INGER", "YAGER"])
                || self.string_at(
                    self.current - 3,
                    6,
                    &[
                        "SEEGER", "JAEGER", "GEIGER", "KRUGER", "SAUGER", "BURGER", "MEAGER",
                        "MARGER", "RIEGER", "YAEGER", "STEGER", "PRAGER", "SWIGER", "YERGER",
                        "TORGER", "FERGER", "HILGER", "ZEIGER", "YARGER", "COWGER", "CREGER",
                        "KROGER", "KREGER", "GRAGER", "STIGER", "BERGER",
                    ],
                )
                || (self.string_at(self.current - 3, 6, &["BERGER"])
                    && self.current + 2 == self.last)
                || self.string_at(
                    self.current - 4,
                    7,
                    &[
                        "KREIGER", "KRUEGER", "METZGER", "KRIEGER", "KROEGER", "STEIGER", "DRAEGER",
                        "BUERGER", "BOERGER", "FIBIGER",
                    ],
                )
                || (self.string_at(self.current - 3, 6, &["BARGER"]) && self.current > 4)
                || (self.string_at(self.current, 6, &["GERBER"]) && self.current > 0)
                || self.string_at(
                    self.current - 5,
                    8,
                    &["SCHWAGER", "LYBARGER", "SPRENGER", "GALLAGER", "WILLIGER"],
                )
                || self.string_at(0, 4, &["HARGER"])
                || (self.string_at(0, 4, &["AGER", "EGER"]) && self.length == 4)
                || self.string_at(self.current - 1, 6, &["YGERNE"])
                || self.string_at(self.current - 6, 9, &["SCHWEIGER"]))
                && !(self.string_at(self.current - 5, 10, &["BELLIGEREN"])
                    || self.string_at(0, 7, &["MARGERY"])
                    || self.string_at(self.current - 3, 8, &["BERGERAC"]))
            {
                if self.slavo_germanic() {
                    self.add_exact_approx("G", "K");
                } else {
                    self.add_exact_approx_pair("G", "J", "K", "J");
                }
            } else {
                self.add_exact_approx_pair("J", "G", "J", "K");
            }
            self.advance_counter(2, 1);
            return true;
        }
        false
    }

    // '-GEL': 'HEGEL', 'VOGEL' stay hard
    fn gel(&mut self) -> bool {
        if self.string_at(self.current + 1, 2, &["EL"]) && self.current > 0 {
            if (self.length == 5
                && self.is_vowel_at(self.current - 1)
                && !self.is_vowel_at(self.current - 2)
                && !self.string_at(self.current - 2, 5, &["NIGEL", "RIGEL"]))
                || self.string_at(self.current - 2, 5, &["ENGEL", "HEGEL", "NAGEL", "VOGEL"])
                || self.string_at(
                    self.current - 3,
                    6,
                    &["MANGEL", "WEIGEL", "FLUGEL", "RANGEL", "HAUGEN", "RIEGEL", "VOEGEL"],
                )
                || self.string_at(
                    self.current - 4,
                    7,
                    &["SPEIGEL", "STEIGEL", "WRANGEL", "SPIEGEL"],
                )
                || self.string_at(self.current - 4, 8, &["DANEGELD"])
            {
                if self.slavo_germanic() {
                    self.add_exact_approx("G", "K");
                } else {
                    self.add_exact_approx_pair("G", "J", "K", "J");
                }
            } else {
                self.add_exact_approx_pair("J", "G", "J", "K");
            }
            self.advance_counter(2, 1);
            return true;
        }
        false
    }

    // default soft 'G' before 'E', 'I', 'Y' inside a word
    fn non_initial_g_front_vowel(&mut self) -> bool {
        if self.string_at(self.current + 1, 1, &["E", "I", "Y"]) {
            if self.string_at(self.current, 2, &["GE"]) && self.current == self.last - 1 {
                if self.hard_ge_at_end() {
                    if self.slavo_germanic() {
                        self.add_exact_approx("G", "K");
                    } else {
                        self.add_exact_approx_pair("G", "J", "K", "J");
                    }
                } else {
                    self.add("J", "J");
                }
            } else if self.internal_hard_g() {
                if !(self.current == 2 && self.string_at(0, 2, &["MC"]))
                    || (self.current == 3 && self.string_at(0, 3, &["MAC"]))
                {
                    if self.slavo_germanic() {
                        self.add_exact_approx("G", "K");
                    } else {
                        self.add_exact_approx_pair("G", "J", "K", "J");
                    }
                }
            } else {
                self.add_exact_approx_pair("J", "G", "J", "K");
            }
            self.advance_counter(2, 1);
            return true;
        }
        false
    }

    // names ending in a hard '-GE': 'LANGE', 'HAUGE'
    fn hard_ge_at_end(&self) -> bool {
        self.string_at(0, 6, &["RENEGE", "STONGE", "STANGE", "PRANGE", "KRESGE"])
            || self.string_at(0, 5, &["BYRGE", "BIRGE", "BERGE", "HAUGE"])
            || self.string_at(0, 4, &["HAGE"])
            || self.string_at(0, 5, &["LANGE", "SYNGE", "BENGE", "RUNGE", "HELGE"])
            || self.string_at(0, 4, &["INGE", "LAGE"])
    }

    // hard 'G' before a front vowel inside a word
    fn internal_hard_g(&self) -> bool {
        !(self.current + 1 == self.last && self.char_at(self.current + 1) == 'E')
            && (self.internal_hard_ng()
                || self.internal_hard_gen_gin_get_git()
                || self.internal_hard_g_open_syllable()
                || self.internal_hard_g_other())
    }

    fn internal_hard_g_other(&self) -> bool {
        (self.string_at(
            self.current,
            4,
            &[
                "GETH", "GEAR", "GEIS", "GIRL", "GIVI", "GIVE", "GIFT", "GIRD", "GIRT", "GILV",
                "GILD", "GELD",
            ],
        )
            && !self.string_at(self.current - 3, 6, &["GINGIV"]))
            || (self.string_at(self.current + 1, 3, &["ISH"])
                && self.current > 0
                && !self.string_at(0, 4, &["LARG"]))
            || (self.string_at(self.current - 2, 5, &["MAGED", "MEGID"])
                && !(self.current + 2 == self.last))
            || self.string_at(self.current, 3, &["GEZ"])
            || self.string_at(0, 4, &["WEGE", "HAGE"])
            || (self.string_at(self.current - 2, 6, &["ONGEST", "UNGEST"])
                && self.current + 3 == self.last
                && !self.string_at(self.current - 3, 7, &["CONGEST"]))
            || self.string_at(0, 5, &["VOEGE", "BERGE", "HELGE"])
            || (self.string_at(0, 4, &["ENGE", "BOGY"]) && self.length == 4)
            || self.string_at(self.current, 6, &["GIBBON"])
            || self.string_at(0, 10, &["CORREGIDOR"])
            || self.string_at(0, 8, &["INGEBORG"])
            || (self.string_at(self.current, 4, &["GILL"])
                && (self.current + 3 == self.last || self.current + 4 == self.last)
                && !self.string_at(0, 8, &["STURGILL"]))
    }

    fn internal_hard_g_open_syllable(&self) -> bool {
        self.string_at(self.current + 1, 3, &["EYE"])
            || self.string_at(self.current - 2, 4, &["FOGY", "POGY", "YOGI"])
            || self.string_at(self.current - 2, 5, &["MAGEE", "MCGEE", "HAGIO"])
            || self.string_at(self.current - 1, 4, &["RGEY", "OGEY"])
            || self.string_at(self.current - 3, 5, &["HOAGY", "STOGY", "PORGY"])
            || self.string_at(self.current - 5, 8, &["CARNEGIE"])
            || (self.string_at(self.current - 1, 4, &["OGEY", "OGIE"])
                && self.current + 2 == self.last)
    }

    // 'FORGET', 'BEGIN', 'HAGEN'
    fn internal_hard_gen_gin_get_git(&self) -> bool {
        (self.string_at(
            self.current - 3,
            6,
            &[
                "FORGET", "TARGET", "MARGIT", "MARGET", "TURGEN", "BERGEN", "MORGEN", "JORGEN",
                "HAUGEN", "JERGEN", "JURGEN", "LINGEN", "BORGEN", "LANGEN", "KLAGEN", "STIGER",
                "BERGER",
            ],
        )
            && !self.string_at(self.current, 7, &["GENETIC", "GENESIS"])
            && !self.string_at(self.current - 4, 8, &["PLANGENT"]))
            || (self.string_at(self.current - 3, 6, &["BERGIN", "FEAGIN", "DURGIN"])
                && self.current + 2 == self.last)
            || (self.string_at(self.current - 2, 5, &["ENGEN"])
                && !self.string_at(self.current + 3, 3, &["DER", "ETI", "ESI"]))
            || self.string_at(self.current - 4, 7, &["JUERGEN"])
            || self.string_at(0, 5, &["NAGIN", "MAGIN", "HAGIN"])
            || (self.string_at(0, 5, &["ENGIN", "DEGEN", "LAGEN", "MAGEN", "NAGIN"])
                && self.length == 5)
            || (self.string_at(
                self.current - 2,
                5,
                &[
                    "BEGET", "BEGIN", "HAGEN", "FAGIN", "BOGEN", "WIGIN", "NTGEN", "EIGEN", "WEGEN",
                    "WAGEN",
                ],
            )
                && !self.string_at(self.current - 5, 8, &["OSPHAGEN"]))
    }

    // 'LONGING', 'SINGEN'
    fn internal_hard_ng(&self) -> bool {
        (self.string_at(self.current - 3, 4, &["DANG", "FANG", "SING"])
            && !self.string_at(self.current - 5, 8, &["DISINGEN"]))
            || self.string_at(0, 5, &["INGEB", "ENGEB"])
            || (self.string_at(self.current - 3, 4, &["RING", "WING", "HANG", "LONG"])
                && !(self.string_at(
                    self.current - 4,
                    5,
                    &["CRING", "FRING", "ORANG", "TWING", "CHANG", "PHANG"],
                )
                    || self.string_at(self.current - 5, 6, &["SYRING"])
                    || self.string_at(
                        self.current - 3,
                        7,
                        &["RINGENC", "RINGENT", "LONGITU", "LONGEVI"],
                    )
                    || (self.string_at(self.current, 4, &["GELO", "GINO"])
                        && self.current + 3 == self.last)))
            || (self.string_at(self.current - 1, 3, &["NGY"])
                && !(self.string_at(self.current - 3, 5, &["RANGY", "MANGY", "MINGY"])
                    || self.string_at(self.current - 4, 6, &["SPONGY", "STINGY"])))
    }

    // 'MARGARINE', 'GAOL', 'ALGAE' take a soft 'G'
    fn ga_to_j(&mut self) -> bool {
        if (self.string_at(self.current - 3, 7, &["MARGARY", "MARGARI"])
            && !self.string_at(self.current - 3, 8, &["MARGARIT"]))
            || self.string_at(0, 4, &["GAOL"])
            || self.string_at(self.current - 2, 5, &["ALGAE"])
        {
            self.add_exact_approx_pair("J", "G", "J", "K");
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
    fn g_defaults() {
        check(
            false,
            false,
            &[
                ("gag", "KK", ""),
                ("egg", "AK", ""),
                ("bigger", "PKR", ""),
                ("Gary", "KR", ""),
                ("Gwen", "KN", ""),
                ("giggle", "KKL", "JKL"),
                ("Gogg", "KK", ""),
            ],
        );
    }

    #[test]
    fn gh_spellings() {
        check(
            false,
            false,
            &[
                ("ghost", "KST", ""),
                ("Ghislaine", "JSLN", ""),
                ("laugh", "LF", ""),
                ("tough", "TF", ""),
                ("night", "NT", ""),
                ("though", "0", ""),
                ("through", "0R", ""),
                ("Hugh", "H", ""),
                ("Yoghurt", "AKRT", ""),
                ("McLaughlin", "MKLKLN", "MKLFLN"),
                ("Gallagher", "KLKR", ""),
                ("Vaughn", "FN", ""),
                ("Gough", "K", "KF"),
                ("Brougham", "PRM", ""),
                ("spaghetti", "SPKT", ""),
                ("bought", "PT", ""),
                ("Hughes", "HS", ""),
                ("Fuchigami", "FXKM", "FKKM"),
                ("Dougherty", "TRT", ""),
            ],
        );
    }

    #[test]
    fn silent_g_and_gn() {
        check(
            false,
            false,
            &[
                ("gnome", "NM", ""),
                ("sign", "SN", "SKN"),
                ("signal", "SKNL", ""),
                ("resign", "RSN", "RSKN"),
                ("Cologne", "KLN", "KLKN"),
                ("Champagne", "XMPN", "XMPKN"),
                ("Lasagna", "LSN", "LSKN"),
                ("Agnew", "AKN", ""),
                ("Bologna", "PLN", "PLKN"),
                ("poignant", "PNNT", "PKNNT"),
                ("reign", "RN", "RKN"),
                ("Agnes", "AKNS", ""),
                ("signify", "SKNF", ""),
            ],
        );
    }

    #[test]
    fn gl_and_gu() {
        check(
            false,
            false,
            &[
                ("Tagliabue", "TLP", "TKLP"),
                ("imbroglio", "AMPRL", "AMPRKL"),
                ("Guillermo", "KRM", ""),
                ("Guerrero", "KRR", ""),
                ("guard", "KRT", ""),
                ("Guaraldi", "KRLT", ""),
                ("Guernsey", "KRNS", ""),
                ("guess", "KS", ""),
                ("guitar", "KTR", ""),
                ("Nguyen", "NN", ""),
            ],
        );
    }

    #[test]
    fn g_before_front_vowel() {
        check(
            false,
            false,
            &[
                ("George", "JRJ", "KRJ"),
                ("giant", "JNT", "KNT"),
                ("gym", "JM", "KM"),
                ("get", "KT", "JT"),
                ("girl", "KRL", "JRL"),
                ("Gerald", "JRLT", "KRLT"),
                ("Giovanni", "JFN", "KFN"),
                ("ginger", "JNJR", "KNKR"),
                ("gift", "KFT", "JFT"),
                ("Geiger", "KKR", "JJR"),
                ("margarine", "MRJRN", "MRKRN"),
                ("Gibbs", "KPS", "JPS"),
                ("Gaelic", "KLK", ""),
                ("tiger", "TKR", "TJR"),
                ("Angier", "ANJR", "ANKR"),
                ("Hegel", "HKL", "HJL"),
                ("Giuseppe", "JSP", "KSP"),
                ("Gisela", "JSL", "KSL"),
                ("hugging", "HKNK", ""),
            ],
        );
    }

    #[test]
    fn g_read_as_j() {
        check(
            false,
            false,
            &[
                ("Gaol", "JL", "KL"),
                ("Margarine", "MRJRN", "MRKRN"),
                ("Regina", "RJN", "RKN"),
                ("Ruggiero", "RJR", ""),
                ("Geoffrey", "JFR", "KFR"),
                ("Jorge", "JRJ", "HRH"),
                ("Algae", "ALJ", "ALK"),
                ("Gigolo", "JKL", "KKL"),
                ("Ginsberg", "KNSPRK", "JNSPRK"),
                ("Galliard", "KLRT", ""),
                ("logy", "LJ", "LK"),
                ("lodge", "LJ", ""),
                ("Heimgear", "HMKR", "HMJR"),
            ],
        );
    }

    #[test]
    fn g_exact() {
        check(
            true,
            true,
            &[
                ("gag", "GAG", ""),
                ("George", "JARJ", "GARJ"),
                ("ghost", "GAST", ""),
                ("Gnome", "NAM", ""),
                ("Guillermo", "GARMA", ""),
            ],
        );
    }
}
