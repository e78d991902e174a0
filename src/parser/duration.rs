//! Natural-language duration parser
//!
//! Input is normalized (trimmed, lower-cased), then two independent
//! accumulators run over it: a fixed set of idioms matched as substrings,
//! and a left-to-right scan for `<number> <unit>` pairs. Their sum is the
//! duration. A bare run of digits with no unit counts as minutes.

use tracing::debug;

use super::ParseError;

/// A countdown length in whole seconds
pub type Seconds = u64;

/// Phrases recognized anywhere in the text; each entry contributes at most once
const IDIOMS: &[(&[&str], f64)] = &[
    (&["half an hour", "half hour"], 1800.0),
    (&["quarter of an hour", "quarter hour"], 900.0),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Unit {
    Hours,
    Minutes,
    Seconds,
}

impl Unit {
    fn from_word(word: &str) -> Option<Self> {
        match word {
            "h" | "hr" | "hrs" | "hour" | "hours" => Some(Unit::Hours),
            "m" | "min" | "mins" | "minute" | "minutes" => Some(Unit::Minutes),
            "s" | "sec" | "secs" | "second" | "seconds" => Some(Unit::Seconds),
            _ => None,
        }
    }

    fn seconds_per_unit(self) -> f64 {
        match self {
            Unit::Hours => 3600.0,
            Unit::Minutes => 60.0,
            Unit::Seconds => 1.0,
        }
    }
}

/// A single `<number> <unit>` occurrence
#[derive(Debug, Clone, Copy, PartialEq)]
struct Quantity {
    value: f64,
    unit: Unit,
}

impl Quantity {
    fn seconds(&self) -> f64 {
        self.value * self.unit.seconds_per_unit()
    }
}

/// Yields every `<number> <unit>` pair in the text, scanning left to right.
///
/// A number is a run of ASCII digits with an optional fractional part. It may
/// be followed by whitespace and then a unit word (a run of ASCII letters).
/// Numbers directly preceded by `-` are skipped, as are numbers whose word is
/// not a known unit.
struct QuantityScanner<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> QuantityScanner<'a> {
    fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }
}

impl Iterator for QuantityScanner<'_> {
    type Item = Quantity;

    fn next(&mut self) -> Option<Quantity> {
        let bytes = self.text.as_bytes();
        let len = bytes.len();

        while self.pos < len {
            if !bytes[self.pos].is_ascii_digit() {
                self.pos += 1;
                continue;
            }

            let start = self.pos;
            let negative = start > 0 && bytes[start - 1] == b'-';

            let mut end = start;
            while end < len && bytes[end].is_ascii_digit() {
                end += 1;
            }
            if end + 1 < len && bytes[end] == b'.' && bytes[end + 1].is_ascii_digit() {
                end += 1;
                while end < len && bytes[end].is_ascii_digit() {
                    end += 1;
                }
            }

            let mut cursor = end;
            while cursor < len && bytes[cursor].is_ascii_whitespace() {
                cursor += 1;
            }
            let word_start = cursor;
            while cursor < len && bytes[cursor].is_ascii_alphabetic() {
                cursor += 1;
            }
            self.pos = cursor;

            if negative {
                continue;
            }
            let Some(unit) = Unit::from_word(&self.text[word_start..cursor]) else {
                continue;
            };
            if let Ok(value) = self.text[start..end].parse::<f64>() {
                return Some(Quantity { value, unit });
            }
        }

        None
    }
}

fn idiom_seconds(text: &str) -> f64 {
    IDIOMS
        .iter()
        .filter(|(phrases, _)| phrases.iter().any(|phrase| text.contains(phrase)))
        .map(|(_, seconds)| seconds)
        .sum()
}

fn is_bare_number(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

/// Parse a free-text duration into whole seconds.
///
/// Fractional totals are floored. Fails when nothing recognizable adds up to
/// at least one second, which includes explicit zeroes like `"0 minutes"`.
pub fn parse_duration(input: &str) -> Result<Seconds, ParseError> {
    let text = input.trim().to_lowercase();

    let mut total = idiom_seconds(&text);
    total += QuantityScanner::new(&text).map(|q| q.seconds()).sum::<f64>();

    if total == 0.0 && is_bare_number(&text) {
        // A plain number is read as minutes
        total = text.parse::<f64>().unwrap_or(0.0) * 60.0;
    }

    if !total.is_finite() || total.floor() < 1.0 {
        debug!("Rejected duration input {:?} (total={})", input, total);
        return Err(ParseError::unrecognized(input));
    }

    let seconds = total.floor() as Seconds;
    debug!("Parsed {:?} as {} seconds", input, seconds);
    Ok(seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_units() {
        assert_eq!(parse_duration("5 minutes"), Ok(300));
        assert_eq!(parse_duration("2 hours"), Ok(7200));
        assert_eq!(parse_duration("90 seconds"), Ok(90));
        assert_eq!(parse_duration("45 sec"), Ok(45));
        assert_eq!(parse_duration("10min"), Ok(600));
        assert_eq!(parse_duration("1 hr"), Ok(3600));
    }

    #[test]
    fn test_parse_combined_units() {
        assert_eq!(parse_duration("1h 30m"), Ok(5400));
        assert_eq!(parse_duration("1h30m15s"), Ok(5415));
        assert_eq!(parse_duration("2 hours 2 hours"), Ok(14400));
        assert_eq!(parse_duration("1 minute and 30 seconds"), Ok(90));
    }

    #[test]
    fn test_parse_idioms() {
        assert_eq!(parse_duration("half an hour"), Ok(1800));
        assert_eq!(parse_duration("half hour"), Ok(1800));
        assert_eq!(parse_duration("quarter hour"), Ok(900));
        assert_eq!(parse_duration("a quarter of an hour"), Ok(900));
    }

    #[test]
    fn test_idioms_add_to_units() {
        assert_eq!(parse_duration("1 hour and a half hour"), Ok(5400));
        assert_eq!(parse_duration("half an hour plus 5 minutes"), Ok(2100));
    }

    #[test]
    fn test_bare_digits_are_minutes() {
        assert_eq!(parse_duration("5"), Ok(300));
        assert_eq!(parse_duration("  25  "), Ok(1500));
    }

    #[test]
    fn test_normalizes_case_and_whitespace() {
        assert_eq!(parse_duration("  5 MINUTES "), Ok(300));
        assert_eq!(parse_duration("Half An Hour"), Ok(1800));
    }

    #[test]
    fn test_fractional_values_are_floored() {
        assert_eq!(parse_duration("1.5 hours"), Ok(5400));
        assert_eq!(parse_duration("0.5 minutes"), Ok(30));
        assert_eq!(parse_duration("2.75 s"), Ok(2));
    }

    #[test]
    fn test_parse_failures() {
        assert!(parse_duration("0 minutes").is_err());
        assert!(parse_duration("banana").is_err());
        assert!(parse_duration("").is_err());
        assert!(parse_duration("   ").is_err());
        assert!(parse_duration("0").is_err());
        assert!(parse_duration("0.5 s").is_err());
        assert!(parse_duration("5 parsecs").is_err());
        assert!(parse_duration("5.5").is_err());
    }

    #[test]
    fn test_negative_numbers_contribute_nothing() {
        assert!(parse_duration("-5 minutes").is_err());
        assert_eq!(parse_duration("10 minutes -5 minutes"), Ok(600));
    }

    #[test]
    fn test_error_message_and_input() {
        let err = parse_duration("banana").unwrap_err();
        assert_eq!(err.to_string(), "could not understand the time");
        assert_eq!(err.input(), "banana");
    }

    #[test]
    fn test_scanner_skips_unknown_words() {
        let found: Vec<Quantity> = QuantityScanner::new("3 apples 4 m").collect();
        assert_eq!(
            found,
            vec![Quantity {
                value: 4.0,
                unit: Unit::Minutes
            }]
        );
    }
}
