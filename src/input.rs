// vim: set ai et ts=4 sts=4 sw=4:
use std::fmt;
use once_cell::sync::Lazy;
use regex::Regex;
use super::rect::Rect;

// wire format: one or more brace-delimited sets, each quoted group inside a
// set being one rectangle as four whitespace-separated integers, e.g.
//   {"0 292 399 307"}
//   {"48 192 351 207", "48 392 351 407"}
// quotes and commas are incidental; newlines are insignificant. {} is a
// valid empty set.
static SET_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{.*?\}").expect("set pattern is valid")
});
static RECT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\d+\s+\d+\s+\d+\s+\d+").expect("rectangle pattern is valid")
});

#[derive(PartialEq, Debug)]
pub enum Error {
    BadInteger(String),
}
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::BadInteger(tok) =>
                write!(f, "rectangle coordinate '{}' is not a representable integer", tok),
        }
    }
}

// extracts all rectangle sets from the raw input text, one set per test case.
// finding zero sets is not an error; it simply means zero test cases.
pub fn parse_cases(raw: &str) -> Result<Vec<Vec<Rect>>, Error> {
    let flat = raw.replace('\n', "");
    SET_RE.find_iter(&flat)
          .map(|set| parse_set(set.as_str()))
          .collect()
}

fn parse_set(set: &str) -> Result<Vec<Rect>, Error> {
    RECT_RE.find_iter(set)
           .map(|tuple| parse_rect(tuple.as_str()))
           .collect()
}

fn parse_rect(tuple: &str) -> Result<Rect, Error> {
    // the pattern guarantees exactly four integer tokens
    let mut coords = [0usize; 4];
    for (i, tok) in tuple.split_whitespace().enumerate() {
        coords[i] = tok.parse()
                       .map_err(|_| Error::BadInteger(tok.to_string()))?;
    }
    Ok(Rect::new(coords[0], coords[1], coords[2], coords[3]))
}

// ------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_single_rectangle_set() {
        let cases = parse_cases("{\"0 292 399 307\"}").unwrap();
        assert_eq!(cases, vec![vec![Rect::new(0, 292, 399, 307)]]);
    }

    #[test]
    fn parses_multiple_rectangles_in_one_set() {
        let raw = "{\"48 192 351 207\", \"48 392 351 407\", \"120 52 135 547\", \"260 52 275 547\"}";
        let cases = parse_cases(raw).unwrap();
        assert_eq!(cases, vec![vec![
            Rect::new(48, 192, 351, 207),
            Rect::new(48, 392, 351, 407),
            Rect::new(120, 52, 135, 547),
            Rect::new(260, 52, 275, 547),
        ]]);
    }

    #[test]
    fn parses_multiple_sets_as_independent_cases() {
        let raw = "{\"0 292 399 307\"}\n{\"48 192 351 207\", \"48 392 351 407\"}";
        let cases = parse_cases(raw).unwrap();
        assert_eq!(cases.len(), 2);
        assert_eq!(cases[0], vec![Rect::new(0, 292, 399, 307)]);
        assert_eq!(cases[1], vec![Rect::new(48, 192, 351, 207),
                                  Rect::new(48, 392, 351, 407)]);
    }

    #[test]
    fn newlines_inside_a_set_are_insignificant() {
        let raw = "{\"0 292 399 307\",\n \"48 192 351 207\"}";
        let cases = parse_cases(raw).unwrap();
        assert_eq!(cases, vec![vec![Rect::new(0, 292, 399, 307),
                                    Rect::new(48, 192, 351, 207)]]);
    }

    #[test]
    fn empty_set_is_a_case_with_no_rectangles() {
        let cases = parse_cases("{}").unwrap();
        assert_eq!(cases, vec![Vec::<Rect>::new()]);
    }

    #[test]
    fn no_sets_means_no_cases() {
        assert_eq!(parse_cases("").unwrap(), Vec::<Vec<Rect>>::new());
        assert_eq!(parse_cases("no braces here").unwrap(), Vec::<Vec<Rect>>::new());
    }

    #[test]
    fn overflowing_integer_is_rejected() {
        let raw = "{\"0 0 99999999999999999999999 5\"}";
        assert_eq!(parse_cases(raw).unwrap_err(),
                   Error::BadInteger("99999999999999999999999".to_string()));
    }
}
