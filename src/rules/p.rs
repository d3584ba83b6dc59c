//! 'P': "PH", silent initial 'P', and the 'P' dropped in "-MPS-"
//! and "-PB-".

use crate::context::Context;
use crate::rules::Rule;

const P_RULES: &[Rule] = &[
    Context::silent_p_at_beginning,
    Context::pt,
    Context::ph,
    Context::pph,
    Context::rps,
    Context::coup,
    Context::pneum,
    Context::psych,
    Context::psalm,
];

impl Context {
    pub(crate) fn encode_p(&mut self) {
        if self.first_match(P_RULES) {
            return;
        }
        self.pb();
        self.add("P", "P");
    }

    // 'PNEUMONIA', 'PSYCHO', 'PTOLEMY'
    fn silent_p_at_beginning(&mut self) -> bool {
        if self.current == 0 && self.string_at(self.current, 2, &["PN", "PF", "PS", "PT"]) {
            self.current += 1;
            return true;
        }
        false
    }

    // 'PTERO-', 'RECEIPT', 'ASYMPTOTE'
    fn pt(&mut self) -> bool {
        if self.char_at(self.current + 1) == 'T'
            && ((self.current == 0 && self.string_at(self.current, 5, &["PTERO"]))
                || self.string_at(self.current - 5, 7, &["RECEIPT"])
                || self.string_at(self.current - 4, 8, &["ASYMPTOT"]))
        {
            self.add("T", "T");
            self.current += 2;
            return true;
        }
        false
    }

    // 'PH' as 'F', with 'PHTH' handled apart
    fn ph(&mut self) -> bool {
        if self.char_at(self.current + 1) == 'H' {
            if self.string_at(self.current, 9, &["PHTHALEIN"])
                || (self.current == 0 && self.string_at(self.current, 4, &["PHTH"]))
                || self.string_at(self.current - 3, 10, &["APOPHTHEGM"])
            {
                self.add("0", "0");
                self.current += 4;
            } else if self.current > 0
                && (self.string_at(
                    self.current + 2,
                    3,
                    &[
                        "EAD", "OLE", "ELD", "ILL", "OLD", "EAP", "ERD", "ARD", "ANG", "ORN", "EAV",
                        "ART",
                    ],
                )
                    || self.string_at(self.current + 2, 4, &["OUSE"])
                    || (self.string_at(self.current + 2, 2, &["AM"])
                        && !self.string_at(self.current - 1, 5, &["LPHAM"]))
                    || self.string_at(self.current + 2, 5, &["AMMER", "AZARD", "UGGER"])
                    || self.string_at(self.current + 2, 6, &["OLSTER"]))
                && !self.string_at(self.current - 3, 5, &["LYMPH", "NYMPH"])
            {
                self.add("P", "P");
                self.advance_counter(3, 2);
            } else {
                self.add("F", "F");
                self.current += 2;
            }
            return true;
        }
        false
    }

    // 'SAPPHIRE'
    fn pph(&mut self) -> bool {
        if self.char_at(self.current + 1) == 'P'
            && self.current + 2 < self.length
            && self.char_at(self.current + 2) == 'H'
        {
            self.add("F", "F");
            self.current += 3;
            return true;
        }
        false
    }

    // 'CORPS'
    fn rps(&mut self) -> bool {
        if self.string_at(self.current - 3, 5, &["CORPS"])
            && !self.string_at(self.current - 3, 6, &["CORPSE"])
        {
            self.current += 2;
            return true;
        }
        false
    }

    // 'COUP', 'COUPE'
    fn coup(&mut self) -> bool {
        if self.current == self.last
            && self.string_at(self.current - 3, 4, &["COUP"])
            && !self.string_at(self.current - 5, 6, &["RECOUP"])
        {
            self.current += 1;
            return true;
        }
        false
    }

    // 'PNEUMATIC'
    fn pneum(&mut self) -> bool {
        if self.string_at(self.current + 1, 4, &["NEUM"]) {
            self.add("N", "N");
            self.current += 2;
            return true;
        }
        false
    }

    // 'PSYCH-' drops the 'P'
    fn psych(&mut self) -> bool {
        if self.string_at(self.current + 1, 4, &["SYCH"]) {
            if self.encode_vowels {
                self.add("SAK", "SAK");
            } else {
                self.add("SK", "SK");
            }
            self.current += 5;
            return true;
        }
        false
    }

    // 'PSALM'
    fn psalm(&mut self) -> bool {
        if self.string_at(self.current + 1, 4, &["SALM"]) {
            if self.encode_vowels {
                self.add("SAM", "SAM");
            } else {
                self.add("SM", "SM");
            }
            self.current += 5;
            return true;
        }
        false
    }

    // 'CUPBOARD', 'RASPBERRY'
    fn pb(&mut self) {
        if self.string_at(self.current + 1, 1, &["P", "B"]) {
            self.current += 2;
        } else {
            self.current += 1;
        }
    }
}
