//! Fixed greeting written one character at a time.

use alloc::string::String;
use core::convert::Infallible;

pub const GREETING: &str = "Hello World!!";

/// Minimal character output primitive.
pub trait CharSink {
    type Error;

    fn put_char(&mut self, c: char) -> Result<(), Self::Error>;
}

impl CharSink for String {
    type Error = Infallible;

    fn put_char(&mut self, c: char) -> Result<(), Self::Error> {
        self.push(c);
        Ok(())
    }
}

/// Writes `s` through `sink` in order, stopping at the first failed character.
pub fn print_str<S: CharSink + ?Sized>(sink: &mut S, s: &str) -> Result<(), S::Error> {
    s.chars().try_for_each(|c| sink.put_char(c))
}

pub fn greet<S: CharSink + ?Sized>(sink: &mut S) -> Result<(), S::Error> {
    print_str(sink, GREETING)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Accepts `limit` characters, then refuses.
    struct Budget {
        taken: String,
        limit: usize,
    }

    impl CharSink for Budget {
        type Error = char;

        fn put_char(&mut self, c: char) -> Result<(), Self::Error> {
            if self.taken.chars().count() == self.limit {
                return Err(c);
            }
            self.taken.push(c);
            Ok(())
        }
    }

    #[test]
    fn greet_writes_literal_without_newline() {
        let mut out = String::new();
        greet(&mut out).unwrap();
        assert_eq!(out, "Hello World!!");
    }

    #[test]
    fn empty_string_writes_nothing() {
        let mut out = String::new();
        print_str(&mut out, "").unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn stops_at_first_failure() {
        let mut sink = Budget { taken: String::new(), limit: 5 };
        assert_eq!(greet(&mut sink), Err(' '));
        assert_eq!(sink.taken, "Hello");
    }
}
