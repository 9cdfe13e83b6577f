//! Fixed substitution tables for the three pattern dialect translations.
//!
//! Entries are keyed by token family (the repeated letter) and tabulated run
//! length. A run length with no entry falls back to the nearest tabulated one
//! for its family; a family with no entries at all drops the run. An empty
//! replacement means the target dialect has no equivalent for the token, and
//! the conversion is deliberately lossy there.

/// (token letter, [(run length, replacement)])
pub(crate) type RunTable = &'static [(char, &'static [(usize, &'static str)])];

/// ICU/CLDR pattern tokens to moment.js tokens.
pub(crate) static ICU_TO_MOMENT: RunTable = &[
    ('G', &[(1, "")]), // era designator, no moment equivalent
    ('Y', &[(1, "GGGG")]), // week-of-year year
    ('y', &[(1, "YYYY"), (2, "YY"), (4, "YYYY")]),
    ('u', &[(1, "")]), // extended year
    ('U', &[(1, "")]), // cyclic year name
    ('r', &[(1, "")]), // related Gregorian year
    ('Q', &[(1, "Q"), (2, ""), (3, ""), (4, ""), (5, "")]),
    ('q', &[(1, "Q"), (2, ""), (3, ""), (4, ""), (5, "")]), // stand-alone quarter
    ('M', &[(1, "M"), (2, "MM"), (3, "MMM"), (4, "MMMM"), (5, "")]),
    ('L', &[(1, "M"), (2, "MM"), (3, "MMM"), (4, "MMMM"), (5, "")]), // stand-alone month
    ('w', &[(1, "W"), (2, "WW")]), // ISO week of year
    ('W', &[(1, "")]),             // week of month
    ('d', &[(1, "D"), (2, "DD")]),
    ('D', &[(1, "DDD")]), // day of year
    ('F', &[(1, "")]),    // day-of-week occurrence in month
    ('g', &[(1, "")]),    // modified Julian day
    ('E', &[(1, "ddd"), (2, "ddd"), (3, "ddd"), (4, "dddd"), (5, ""), (6, "dd")]),
    ('e', &[(1, "E"), (2, "E"), (3, "ddd"), (4, "dddd"), (5, ""), (6, "dd")]),
    ('c', &[(1, "E"), (2, "E"), (3, "ddd"), (4, "dddd"), (5, ""), (6, "dd")]), // stand-alone weekday
    ('a', &[(1, "A")]),
    ('h', &[(1, "h"), (2, "hh")]),
    ('H', &[(1, "H"), (2, "HH")]),
    ('k', &[(1, ""), (2, "")]), // hour in day 1-24
    ('K', &[(1, ""), (2, "")]), // hour in am/pm 0-11
    ('m', &[(1, "m"), (2, "mm")]),
    ('s', &[(1, "s"), (2, "ss")]),
    ('S', &[(1, "S"), (2, "SS"), (3, "SSS"), (4, "SSSS")]),
    ('A', &[(1, "")]), // milliseconds in day
    ('z', &[(1, "[GMT]Z"), (2, "[GMT]Z"), (3, "[GMT]Z"), (4, "")]), // zone name
    ('Z', &[(1, "ZZ"), (2, "ZZ"), (3, "ZZ"), (4, "[GMT]Z"), (5, "[GMT]Z")]),
    ('O', &[(1, ""), (4, "[GMT]Z")]), // localized GMT
    ('v', &[(1, ""), (4, "")]),       // generic non-location zone
    ('V', &[(1, ""), (2, ""), (3, ""), (4, "")]), // zone id / exemplar city
    ('X', &[(1, ""), (2, ""), (3, ""), (4, ""), (5, "")]), // ISO offset with Z
    ('x', &[(1, ""), (2, ""), (3, ""), (4, ""), (5, "")]), // ISO offset without Z
];

/// ICU/CLDR pattern tokens to chrono strftime specifiers, for strict parsing.
///
/// Zone names, eras and quarters are not parseable by chrono and drop, same
/// lossy semantics as the moment table.
pub(crate) static ICU_TO_CHRONO: RunTable = &[
    ('y', &[(1, "%Y"), (2, "%y"), (4, "%Y")]),
    ('M', &[(1, "%-m"), (2, "%m"), (3, "%b"), (4, "%B")]),
    ('L', &[(1, "%-m"), (2, "%m"), (3, "%b"), (4, "%B")]),
    ('w', &[(1, "%W"), (2, "%W")]),
    ('d', &[(1, "%-d"), (2, "%d")]),
    ('D', &[(1, "%j")]),
    ('E', &[(1, "%a"), (4, "%A")]),
    ('e', &[(1, "%u"), (3, "%a"), (4, "%A")]),
    ('c', &[(1, "%u"), (3, "%a"), (4, "%A")]),
    ('a', &[(1, "%p")]),
    ('h', &[(1, "%-I"), (2, "%I")]),
    ('H', &[(1, "%-H"), (2, "%H")]),
    ('m', &[(1, "%-M"), (2, "%M")]),
    ('s', &[(1, "%-S"), (2, "%S")]),
    ('S', &[(3, "%3f")]),
    ('Z', &[(1, "%z"), (2, "%z"), (3, "%z"), (5, "%:z")]),
    ('x', &[(1, "%z"), (3, "%:z")]),
];

/// PHP `date()` tokens to moment.js tokens. Single characters, no run-length
/// semantics; characters without an entry pass through as-is.
pub(crate) static PHP_TO_MOMENT: &[(char, &'static str)] = &[
    // day
    ('d', "DD"),
    ('D', "ddd"),
    ('j', "D"),
    ('l', "dddd"),
    ('N', "E"),
    ('S', "Do"),
    ('w', "e"),
    ('z', ""), // day of year, zero-based in php
    // week
    ('W', "WW"),
    // month
    ('F', "MMMM"),
    ('m', "MM"),
    ('M', "MMM"),
    ('n', "M"),
    ('t', ""), // days in month
    // year
    ('L', ""), // leap year flag
    ('o', "GGGG"),
    ('Y', "YYYY"),
    ('y', "YY"),
    // time
    ('a', "a"),
    ('A', "A"),
    ('B', ""), // Swatch internet time
    ('g', "h"),
    ('G', "H"),
    ('h', "hh"),
    ('H', "HH"),
    ('i', "mm"),
    ('s', "ss"),
    ('u', ""), // microseconds
    // timezone
    ('e', ""), // zone identifier
    ('I', ""), // DST flag
    ('O', "ZZ"),
    ('P', "Z"),
    ('T', ""), // zone abbreviation
    ('Z', ""), // zone offset in seconds
    // full date/time
    ('c', "YYYY-MM-DD[T]HH:mm:ssZ"),
    ('r', "ddd, DD MMM YYYY HH:mm:ss ZZ"),
    ('U', "X"),
];

/// Replacement for a token run, with nearest-length fallback within the
/// family: the largest tabulated length not exceeding the run, else the
/// smallest tabulated length. `None` means the family is untabulated and the
/// whole run drops.
pub(crate) fn run_replacement(table: RunTable, token: char, length: usize) -> Option<&'static str> {
    let (_, lengths) = table.iter().find(|(c, _)| *c == token)?;
    if let Some((_, replacement)) = lengths.iter().find(|(l, _)| *l == length) {
        return Some(replacement);
    }
    let below = lengths
        .iter()
        .filter(|(l, _)| *l < length)
        .max_by_key(|(l, _)| *l);
    let nearest = below.or_else(|| lengths.iter().min_by_key(|(l, _)| *l));
    nearest.map(|(_, replacement)| *replacement)
}

pub(crate) fn php_replacement(token: char) -> Option<&'static str> {
    PHP_TO_MOMENT
        .iter()
        .find(|(c, _)| *c == token)
        .map(|(_, replacement)| *replacement)
}
