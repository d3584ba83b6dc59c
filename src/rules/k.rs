use crate::context::Context;

impl Context {
    pub(crate) fn encode_k(&mut self) {
        if !self.silent_k() {
            self.add("K", "K");
            if self.char_at(self.current + 1) == 'K' || self.char_at(self.current + 1) == 'Q' {
                self.current += 2;
            } else {
                self.current += 1;
            }
        }
    }

    fn silent_k(&mut self) -> bool {
        if self.current == 0
            && self.string_at(self.current, 2, &["KN"])
            && !(self.string_at(self.current + 2, 5, &["ESSET", "IEVEL"])
                || self.string_at(self.current + 2, 3, &["ISH"]))
        {
            self.current += 1;
            return true;
        }
        if (self.string_at(self.current + 1, 3, &["NOW", "NIT", "NOT", "NOB"])
            && !self.string_at(0, 8, &["BANKNOTE"]))
            || self.string_at(self.current + 1, 4, &["NOCK", "NUCK", "NIFE", "NACK"])
            || self.string_at(self.current + 1, 5, &["NIGHT"])
        {
            if self.current > 0 && self.char_at(self.current - 1) == 'N' {
                self.current += 2;
            } else {
                self.current += 1;
            }
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use crate::rules::testing::check;

    #[test]
    fn k_and_silent_initial_k() {
        check(
            false,
            false,
            &[
                ("kick", "KK", ""),
                ("knight", "NT", ""),
                ("knife", "NF", ""),
                ("Knesset", "KNST", ""),
                ("Knievel", "KNFL", ""),
                ("Kkvetch", "KFX", ""),
                ("backpack", "PKPK", ""),
            ],
        );
    }
}
