//! SWC scanner — a byte cursor with the field acceptors used by the parser.
//!
//! Every `accept_*` method either consumes a complete token and returns it,
//! or leaves the cursor untouched. Whether a literal is a whole field is the
//! caller's call, via [`Scanner::at_field_end`].

use std::str::FromStr;

/// Cursor over an in-memory SWC buffer.
pub(crate) struct Scanner<'a> {
    input: &'a [u8],
    pos: usize,
    line: usize,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(input: &'a [u8]) -> Self {
        Self { input, pos: 0, line: 1 }
    }

    /// 1-based number of the line the cursor is on.
    pub(crate) fn line(&self) -> usize {
        self.line
    }

    pub(crate) fn at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    fn rest(&self) -> &'a [u8] {
        &self.input[self.pos.min(self.input.len())..]
    }

    /// The character under the cursor, decoded as UTF-8 where possible.
    pub(crate) fn current_char(&self) -> Option<char> {
        let rest = self.rest();
        let window = &rest[..rest.len().min(4)];
        String::from_utf8_lossy(window).chars().next()
    }

    pub(crate) fn accept(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn accept_blank(&mut self) -> bool {
        self.accept(b' ') || self.accept(b'\t')
    }

    pub(crate) fn skip_blanks(&mut self) {
        while self.accept_blank() {}
    }

    /// A field ends at a blank, a line terminator or the end of input.
    pub(crate) fn at_field_end(&self) -> bool {
        matches!(self.peek(), None | Some(b' ' | b'\t' | b'\n' | b'\r'))
    }

    /// `\n`, `\r` or `\r\n`. Advances the line counter.
    pub(crate) fn accept_end_of_line(&mut self) -> bool {
        if self.accept(b'\n') {
            self.line += 1;
            true
        } else if self.accept(b'\r') {
            self.accept(b'\n');
            self.line += 1;
            true
        } else {
            false
        }
    }

    /// Consume the remainder of the current line and its terminator (if any).
    /// Returns the line content without the terminator.
    pub(crate) fn take_line(&mut self) -> &'a [u8] {
        let rest = self.rest();
        let len = rest
            .iter()
            .position(|&b| b == b'\n' || b == b'\r')
            .unwrap_or(rest.len());
        self.pos += len;
        self.accept_end_of_line();
        &rest[..len]
    }

    /// Signed integer: decimal digits, or `0x`/`0X` followed by hex digits.
    pub(crate) fn accept_integer(&mut self) -> Option<i64> {
        let rest = self.rest();
        let sign_len = usize::from(matches!(rest.first(), Some(b'+' | b'-')));
        let body = &rest[sign_len..];

        let (radix, prefix_len) = match body {
            [b'0', b'x' | b'X', d, ..] if d.is_ascii_hexdigit() => (16, 2),
            _ => (10, 0),
        };
        let digits = &body[prefix_len..];
        let digit_count = digits
            .iter()
            .take_while(|b| char::from(**b).is_digit(radix))
            .count();
        if digit_count == 0 {
            return None;
        }

        let mut literal = String::with_capacity(sign_len + digit_count);
        if sign_len == 1 {
            literal.push(char::from(rest[0]));
        }
        literal.extend(digits[..digit_count].iter().map(|&b| char::from(b)));
        let value = i64::from_str_radix(&literal, radix).ok()?;

        self.pos += sign_len + prefix_len + digit_count;
        Some(value)
    }

    /// Floating point literal: `[+-]digits[.digits][(e|E)[+-]digits]`, with
    /// either side of the dot allowed to be empty (not both), or one of
    /// `inf`, `infinity`, `nan` in any case.
    ///
    /// The literal is converted straight to `T`, so an `f32` field is
    /// rounded once from the decimal text.
    pub(crate) fn accept_real<T: FromStr>(&mut self) -> Option<T> {
        let rest = self.rest();
        let mut len = usize::from(matches!(rest.first(), Some(b'+' | b'-')));

        if let Some(special) = special_real_len(&rest[len..]) {
            len += special;
        } else {
            let int_digits = count_digits(&rest[len..]);
            len += int_digits;

            let mut frac_digits = 0;
            if rest.get(len) == Some(&b'.') {
                frac_digits = count_digits(&rest[len + 1..]);
                if int_digits > 0 || frac_digits > 0 {
                    len += 1 + frac_digits;
                }
            }
            if int_digits + frac_digits == 0 {
                return None;
            }

            if matches!(rest.get(len), Some(b'e' | b'E')) {
                let mut exp_len = 1;
                if matches!(rest.get(len + 1), Some(b'+' | b'-')) {
                    exp_len += 1;
                }
                let exp_digits = count_digits(&rest[(len + exp_len).min(rest.len())..]);
                if exp_digits > 0 {
                    len += exp_len + exp_digits;
                }
            }
        }

        let literal = std::str::from_utf8(&rest[..len]).ok()?;
        let value = literal.parse::<T>().ok()?;

        self.pos += len;
        Some(value)
    }
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

fn special_real_len(bytes: &[u8]) -> Option<usize> {
    ["infinity", "inf", "nan"]
        .iter()
        .find(|word| {
            bytes.len() >= word.len() && bytes[..word.len()].eq_ignore_ascii_case(word.as_bytes())
        })
        .map(|word| word.len())
}
