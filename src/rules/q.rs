use crate::context::Context;

impl Context {
    pub(crate) fn encode_q(&mut self) {
        if self.string_at(self.current, 3, &["QIN"]) {
            self.add("X", "X");
            self.current += 1;
            return;
        }
        if self.char_at(self.current + 1) == 'Q' {
            self.current += 2;
        } else {
            self.current += 1;
        }
        self.add("K", "K");
    }
}

#[cfg(test)]
mod tests {
    use crate::rules::testing::check;

    #[test]
    fn q_and_doubled_q() {
        check(
            false,
            false,
            &[
                ("queen", "KN", ""),
                ("Qatar", "KTR", ""),
                ("Iraqi", "ARK", ""),
                ("qing", "XNK", ""),
                ("Aqqa", "AK", ""),
                ("Quiche", "KX", "KK"),
            ],
        );
    }
}
