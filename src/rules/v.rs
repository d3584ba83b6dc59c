use crate::context::Context;

impl Context {
    pub(crate) fn encode_v(&mut self) {
        if self.char_at(self.current + 1) == 'V' {
            self.current += 2;
        } else {
            self.current += 1;
        }
        self.add_exact_approx("V", "F");
    }
}

#[cfg(test)]
mod tests {
    use crate::rules::testing::check;

    #[test]
    fn v_and_doubled_v() {
        check(
            false,
            false,
            &[
                ("viva", "FF", ""),
                ("savvy", "SF", ""),
                ("vivid", "FFT", ""),
                ("Volvo", "FLF", ""),
            ],
        );
    }

    #[test]
    fn v_exact() {
        check(
            true,
            true,
            &[
                ("viva", "VAVA", ""),
                ("savvy", "SAVA", ""),
            ],
        );
    }
}
