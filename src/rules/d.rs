//! 'D': "DG"/"DJ", the 'J' sound of "-DUAL"/"-DULE", and the silent 'D'.

use crate::context::Context;
use crate::rules::Rule;

const D_RULES: &[Rule] = &[
    Context::dg,
    Context::dj,
    Context::dt_dd,
    Context::d_to_j,
    Context::dous,
    Context::silent_d,
];

impl Context {
    pub(crate) fn encode_d(&mut self) {
        if self.first_match(D_RULES) {
            return;
        }
        if self.encode_exact {
            if self.current == self.last && self.string_at(self.current - 3, 4, &["SSED"]) {
                self.add("T", "T");
            } else {
                self.add("D", "D");
            }
        } else {
            self.add("T", "T");
        }
        self.current += 1;
    }

    // 'EDGE' and 'JUDGMENT' read as 'J'; 'DGA', 'DGO' stay hard
    fn dg(&mut self) -> bool {
        if self.string_at(self.current, 2, &["DG"]) {
            if self.string_at(self.current + 2, 1, &["A", "O"])
                || self.string_at(self.current + 1, 3, &["GUN", "GUT"])
                || self.string_at(
                    self.current + 1,
                    4,
                    &["GEAR", "GLAS", "GRIP", "GREN", "GILL", "GRAF"],
                )
                || self.string_at(self.current + 1, 5, &["GUARD", "GUILT", "GRAVE", "GRASS"])
                || self.string_at(self.current + 1, 6, &["GROUSE"])
            {
                self.add_exact_approx("DG", "TK");
            } else {
                self.add("J", "J");
            }
            self.current += 2;
            return true;
        }
        false
    }

    // 'ADJECTIVE', 'DJINN'
    fn dj(&mut self) -> bool {
        if self.string_at(self.current, 2, &["DJ"]) {
            self.add("J", "J");
            self.current += 2;
            return true;
        }
        false
    }

    // 'DT' and 'DD' share one 'T'
    fn dt_dd(&mut self) -> bool {
        if self.string_at(self.current, 2, &["DT", "DD"]) {
            if self.string_at(self.current, 3, &["DTH"]) {
                self.add_exact_approx("D0", "T0");
                self.current += 3;
            } else {
                if self.encode_exact {
                    if self.string_at(self.current, 2, &["DT"]) {
                        self.add("T", "T");
                    } else {
                        self.add("D", "D");
                    }
                } else {
                    self.add("T", "T");
                }
                self.current += 2;
            }
            return true;
        }
        false
    }

    // 'MODULE', 'SOLDIER', 'CORDIAL' take 'J'
    fn d_to_j(&mut self) -> bool {
        if (self.string_at(self.current, 3, &["DUL"])
            && self.is_vowel_at(self.current - 1)
            && self.is_vowel_at(self.current + 3))
            || (self.current + 3 == self.last
                && self.string_at(self.current - 1, 5, &["LDIER", "NDEUR", "EDURE", "RDURE"]))
            || self.string_at(self.current - 3, 7, &["CORDIAL"])
            || self.string_at(self.current - 1, 5, &["NDULA", "NDULU", "EDUCA"])
            || self.string_at(self.current - 1, 4, &["ADUA", "IDUA", "IDUU"])
        {
            self.add_exact_approx_pair("J", "D", "J", "T");
            self.advance_counter(2, 1);
            return true;
        }
        false
    }

    // 'ASSIDUOUS', 'ARDUOUS'
    fn dous(&mut self) -> bool {
        if self.string_at(self.current + 1, 4, &["UOUS"]) {
            self.add_exact_approx_pair("J", "D", "J", "T");
            self.advance_counter(4, 1);
            return true;
        }
        false
    }

    // 'HANDKERCHIEF', 'GRANDSON', 'WEDNESDAY'
    fn silent_d(&mut self) -> bool {
        if self.string_at(self.current - 2, 9, &["WEDNESDAY"])
            || self.string_at(self.current - 3, 7, &["HANDKER", "HANDSOM", "WINDSOR"])
            || self.string_at(self.current - 5, 6, &["PERNOD", "ARTAUD", "RENAUD"])
            || self.string_at(self.current - 6, 7, &["RIMBAUD", "MICHAUD", "BICHAUD"])
        {
            self.current += 1;
            return true;
        }
        false
    }
}
