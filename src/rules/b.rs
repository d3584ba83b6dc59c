//! 'B', including the silent 'B' of "debt" and "doubt".

use crate::context::Context;

impl Context {
    pub(crate) fn encode_b(&mut self) {
        if self.silent_b() {
            return;
        }
        self.add_exact_approx("B", "P");
        if self.char_at(self.current + 1) == 'B'
            || (self.char_at(self.current + 1) == 'P'
                && self.current + 1 < self.last
                && self.char_at(self.current + 2) != 'H')
        {
            self.current += 2;
        } else {
            self.current += 1;
        }
    }

    // 'DEBT', 'SUBTLE', 'DOUBT' keep only the 'T'
    fn silent_b(&mut self) -> bool {
        if self.string_at(self.current - 2, 4, &["DEBT"])
            || self.string_at(self.current - 2, 5, &["SUBTL"])
            || self.string_at(self.current - 2, 6, &["SUBTIL"])
            || self.string_at(self.current - 3, 5, &["DOUBT"])
        {
            self.add("T", "T");
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
    fn b_and_doubled_b() {
        check(
            false,
            false,
            &[
                ("Bob", "PP", ""),
                ("hobby", "HP", ""),
                ("cupboard", "KPRT", ""),
                ("Abbey", "AP", ""),
                ("Lamb", "LM", ""),
            ],
        );
    }

    #[test]
    fn b_in_exact_mode() {
        check(
            true,
            true,
            &[
                ("Bob", "BAB", ""),
                ("cupboard", "KAPARD", ""),
                ("robber", "RABAR", ""),
            ],
        );
    }

    #[test]
    fn silent_b_before_t() {
        check(
            false,
            false,
            &[
                ("debt", "TT", ""),
                ("doubt", "TT", ""),
                ("subtle", "STL", ""),
                ("subtile", "STL", ""),
                ("indebted", "ANTTT", ""),
            ],
        );
    }
}
