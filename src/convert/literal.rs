/// One piece of a scanned ICU pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Segment {
    /// Quoted literal text, already unescaped (`'o''clock'` scans to `o'clock`).
    Literal(String),
    /// A maximal run of one ASCII-letter token: character and repeat count.
    Run(char, usize),
    /// Unquoted separator text (`-`, `:`, spaces, ...), passed through verbatim.
    Raw(String),
}

/// Splits an ICU pattern into literal, token-run and separator segments.
///
/// Explicit two-state scan (outside-literal / inside-literal):
/// - an unescaped quote opens a literal run, which ends at the next quote not
///   immediately followed by another quote;
/// - a doubled quote, inside or outside a run, is one literal quote character;
/// - an unterminated run extends to the end of the string. That is defined
///   behavior, not an error.
pub(crate) fn scan(pattern: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut raw = String::new();
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\'' {
            if chars.peek() == Some(&'\'') {
                chars.next();
                raw.push('\'');
                continue;
            }
            if !raw.is_empty() {
                segments.push(Segment::Raw(std::mem::take(&mut raw)));
            }
            let mut literal = String::new();
            loop {
                match chars.next() {
                    None => break,
                    Some('\'') => {
                        if chars.peek() == Some(&'\'') {
                            chars.next();
                            literal.push('\'');
                        } else {
                            break;
                        }
                    }
                    Some(other) => literal.push(other),
                }
            }
            segments.push(Segment::Literal(literal));
        } else if c.is_ascii_alphabetic() {
            if !raw.is_empty() {
                segments.push(Segment::Raw(std::mem::take(&mut raw)));
            }
            let mut count = 1;
            while chars.peek() == Some(&c) {
                chars.next();
                count += 1;
            }
            segments.push(Segment::Run(c, count));
        } else {
            raw.push(c);
        }
    }
    if !raw.is_empty() {
        segments.push(Segment::Raw(raw));
    }
    segments
}
