use crate::context::Context;

impl Context {
    pub(crate) fn encode_n(&mut self) {
        if self.nce() {
            return;
        }
        if self.char_at(self.current + 1) == 'N' {
            self.current += 2;
        } else {
            self.current += 1;
        }
        if !self.string_at(self.current - 3, 8, &["MONSIEUR"])
            && !self.string_at(self.current - 3, 6, &["NENESS"])
        {
            self.add("N", "N");
        }
    }

    // final 'NCE', 'NSE' as 'NTS': 'DANCE', 'SENSE'
    fn nce(&mut self) -> bool {
        if self.string_at(self.current + 1, 1, &["C", "S"])
            && self.string_at(self.current + 2, 1, &["E", "Y", "I"])
            && (self.current + 2 == self.last
                || (self.current + 3 == self.last && self.char_at(self.current + 3) == 'S'))
        {
            self.add("NTS", "NTS");
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
    fn n_and_nce() {
        check(
            false,
            false,
            &[
                ("nun", "NN", ""),
                ("Ann", "AN", ""),
                ("dance", "TNTS", ""),
                ("Nance", "NNTS", ""),
                ("Penny", "PN", ""),
                ("inn", "AN", ""),
                ("sconce", "SKNTS", ""),
                ("Ñandu", "NNT", ""),
            ],
        );
    }
}
