use crate::context::Context;

impl Context {
    pub(crate) fn encode_f(&mut self) {
        if self.string_at(self.current - 1, 5, &["OFTEN"]) {
            self.add("F", "FT");
            self.current += 2;
            return;
        }
        if self.char_at(self.current + 1) == 'F' {
            self.current += 2;
        } else {
            self.current += 1;
        }
        self.add("F", "F");
    }
}

#[cfg(test)]
mod tests {
    use crate::rules::testing::check;

    #[test]
    fn f_and_doubled_f() {
        check(
            false,
            false,
            &[
                ("fife", "FF", ""),
                ("off", "AF", ""),
                ("stuffy", "STF", ""),
                ("Buffalo", "PFL", ""),
                ("Fvie", "FF", ""),
            ],
        );
    }
}
