//! Small helpers shared by the modules.

use std::{fmt::Display, str::FromStr};

use hashbrown::HashMap;

/// Parse a command line value, falling back to a default if it doesn't
/// parse. The fallback is reported on the console but is not an error, the
/// program just keeps going with the documented default.
pub fn parse_or<T: FromStr + Display + Copy>(value: Option<&String>, name: &str, default: T) -> T {
    let Some(value) = value else { return default };

    match value.parse() {
        Ok(x) => x,
        Err(_) => {
            println!("[-] Invalid value for {name}, using default ({default})");
            default
        }
    }
}

pub trait Similarity {
    fn similarity(&self, other: &Self) -> f64;
}

impl<T: AsRef<str>> Similarity for T {
    fn similarity(&self, other: &Self) -> f64 {
        similarity(self.as_ref(), other.as_ref())
    }
}

/// String similarity as a dice coefficient over character bigrams.
/// Used to match a requested device name against the real device names.
pub fn similarity(str1: &str, str2: &str) -> f64 {
    let a = str1.replace(' ', "");
    let b = str2.replace(' ', "");

    // Check some simple cases
    if a == b {
        return 1.0;
    }

    if a.len() < 2 || b.len() < 2 {
        return 0.0;
    }

    let mut first_bigrams = HashMap::<&str, i32>::new();
    for i in 0..a.len() - 1 {
        let bigram = &a[i..i + 2];
        let count = first_bigrams.get(bigram).unwrap_or(&0) + 1;
        first_bigrams.insert(bigram, count);
    }

    let mut intersection_size = 0;
    for i in 0..b.len() - 1 {
        let bigram = &b[i..i + 2];
        let count = *first_bigrams.get(bigram).unwrap_or(&0);

        if count > 0 {
            first_bigrams.insert(bigram, count - 1);
            intersection_size += 1;
        }
    }

    (2.0 * intersection_size as f64) / (str1.len() + str2.len() - 2) as f64
}

#[cfg(test)]
mod test {
    use super::{parse_or, similarity};

    #[test]
    fn test_parse_or() {
        assert_eq!(parse_or(Some(&"1.5".to_string()), "duration", 300.0), 1.5);
        assert_eq!(parse_or(Some(&"uhh".to_string()), "duration", 300.0), 300.0);
        assert_eq!(parse_or::<f32>(None, "duration", 300.0), 300.0);
    }

    #[test]
    fn test_similarity() {
        assert_eq!(similarity("speakers", "speakers"), 1.0);
        assert_eq!(similarity("a", "headphones"), 0.0);
        assert!(similarity("speakers (usb)", "speakers") > similarity("headphones", "speakers"));
    }
}
