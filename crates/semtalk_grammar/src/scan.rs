//! Surface-syntax scanning helpers.
//!
//! Grammar rules recognise their surface shape with these functions instead
//! of regular expressions. Everything works on `&str` slices of the input and
//! is aware of brackets `() [] {}` and of single- and double-quoted strings,
//! so a sub-expression's own delimiters own its internal commas.

use semtalk_model::Polarity;

/// Tracks bracket depth and quoting while walking a string.
#[derive(Default)]
struct Nesting {
    depth: usize,
    quote: Option<char>,
    unbalanced: bool,
    previous: Option<char>,
}

impl Nesting {
    /// Feeds one character. Returns true if the character sits at top level
    /// (outside every bracket and quote) before it is consumed.
    fn feed(&mut self, c: char) -> bool {
        let token_start = self
            .previous
            .is_none_or(|p| p.is_whitespace() || matches!(p, '(' | '[' | '{' | ',' | '='));
        self.previous = Some(c);
        if let Some(q) = self.quote {
            if c == q {
                self.quote = None;
            }
            return false;
        }
        let top = self.depth == 0;
        match c {
            '"' => self.quote = Some(c),
            // An apostrophe inside a bare word does not open a quote.
            '\'' if token_start => self.quote = Some(c),
            '(' | '[' | '{' => self.depth += 1,
            ')' | ']' | '}' => {
                if self.depth == 0 {
                    self.unbalanced = true;
                } else {
                    self.depth -= 1;
                }
            }
            _ => {}
        }
        top
    }

    fn is_closed(&self) -> bool {
        !self.unbalanced && self.depth == 0 && self.quote.is_none()
    }
}

/// Returns true if every bracket in `s` is closed and every quote ends.
#[must_use]
pub fn is_balanced(s: &str) -> bool {
    let mut nesting = Nesting::default();
    for c in s.chars() {
        nesting.feed(c);
    }
    nesting.is_closed()
}

/// Returns the argument text of `keyword(...)`, or `None` if `input` is not
/// exactly that shape with balanced arguments.
#[must_use]
pub fn call<'a>(input: &'a str, keyword: &str) -> Option<&'a str> {
    let inner = input
        .strip_prefix(keyword)?
        .strip_prefix('(')?
        .strip_suffix(')')?;
    is_balanced(inner).then_some(inner)
}

/// Splits a leading `~` off `input`.
#[must_use]
pub fn polarity(input: &str) -> (Polarity, &str) {
    match input.strip_prefix('~') {
        Some(rest) => (Polarity::Neg, rest),
        None => (Polarity::Pos, input),
    }
}

/// Returns true for a non-empty run of alphanumerics and underscores.
#[must_use]
pub fn is_word(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_alphanumeric() || c == '_')
}

/// Returns true for a non-empty run of ASCII digits.
#[must_use]
pub fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Returns true for `[0-9]*\.[0-9]+`.
#[must_use]
pub fn is_decimal(s: &str) -> bool {
    match s.split_once('.') {
        Some((whole, frac)) => {
            whole.bytes().all(|b| b.is_ascii_digit()) && is_digits(frac)
        }
        None => false,
    }
}

/// Splits `s` at every top-level `sep`, trimming each piece.
///
/// An empty (or all-whitespace) input yields no pieces.
#[must_use]
pub fn split_top_level(s: &str, sep: char) -> Vec<&str> {
    if s.trim().is_empty() {
        return Vec::new();
    }
    let mut pieces = Vec::new();
    let mut nesting = Nesting::default();
    let mut start = 0;
    for (i, c) in s.char_indices() {
        if nesting.feed(c) && c == sep {
            pieces.push(s[start..i].trim());
            start = i + c.len_utf8();
        }
    }
    pieces.push(s[start..].trim());
    pieces
}

/// Splits `s` at its first top-level `sep`. Both halves are trimmed.
#[must_use]
pub fn split_first_top_level(s: &str, sep: char) -> Option<(&str, &str)> {
    let mut nesting = Nesting::default();
    for (i, c) in s.char_indices() {
        if nesting.feed(c) && c == sep {
            return Some((s[..i].trim(), s[i + c.len_utf8()..].trim()));
        }
    }
    None
}

/// Splits `s` at its last top-level `sep`. Both halves are trimmed.
#[must_use]
pub fn split_last_top_level(s: &str, sep: char) -> Option<(&str, &str)> {
    let mut nesting = Nesting::default();
    let mut last = None;
    for (i, c) in s.char_indices() {
        if nesting.feed(c) && c == sep {
            last = Some(i);
        }
    }
    last.map(|i| (s[..i].trim(), s[i + sep.len_utf8()..].trim()))
}

/// Splits `key=value` at the first `=`, trimming both halves.
#[must_use]
pub fn split_pair(s: &str) -> Option<(&str, &str)> {
    let (key, value) = s.split_once('=')?;
    let key = key.trim();
    (!key.is_empty()).then_some((key, value.trim()))
}

/// Strips a surrounding `[` `]` pair.
#[must_use]
pub fn bracketed(s: &str) -> Option<&str> {
    s.strip_prefix('[')?.strip_suffix(']')
}

/// Strips a surrounding `{` `}` pair.
#[must_use]
pub fn braced(s: &str) -> Option<&str> {
    s.strip_prefix('{')?.strip_suffix('}')
}

/// Strips matching surrounding single or double quotes.
#[must_use]
pub fn unquote(s: &str) -> Option<&str> {
    let quote = s.chars().next().filter(|c| matches!(c, '"' | '\''))?;
    let inner = s[1..].strip_suffix(quote)?;
    (!inner.contains(quote)).then_some(inner)
}

/// Strips surrounding double quotes only.
#[must_use]
pub fn double_quoted(s: &str) -> Option<&str> {
    unquote(s).filter(|_| s.starts_with('"'))
}

// ============================================================================
// Named shapes
// ============================================================================

/// The pieces of `icm:<type>[*<polarity>][:<content>]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IcmShape<'a> {
    /// The ICM type token, e.g. `per`.
    pub kind: &'a str,
    /// The polarity token after `*`, e.g. `pos`.
    pub polarity: Option<&'a str>,
    /// Everything after the first `:` following the type.
    pub content: Option<&'a str>,
}

impl<'a> IcmShape<'a> {
    /// Recognises the ICM shape, or returns `None`.
    #[must_use]
    pub fn scan(input: &'a str) -> Option<Self> {
        let rest = input.strip_prefix("icm:")?;
        let (head, content) = match rest.split_once(':') {
            Some((head, content)) => (head, Some(content)),
            None => (rest, None),
        };
        let (kind, polarity) = match head.split_once('*') {
            Some((kind, polarity)) => (kind, Some(polarity)),
            None => (head, None),
        };
        if !is_word(kind) || polarity.is_some_and(|p| !is_word(p)) {
            return None;
        }
        Some(Self {
            kind,
            polarity,
            content,
        })
    }
}

/// The pieces of `if <condition> then <consequent> else <alternative>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IfThenElseShape<'a> {
    /// The condition text.
    pub condition: &'a str,
    /// The consequent text; may be empty.
    pub consequent: &'a str,
    /// The alternative text; may be empty.
    pub alternative: &'a str,
}

impl<'a> IfThenElseShape<'a> {
    /// Recognises the if-then-else shape, or returns `None`.
    ///
    /// The split happens at the last ` else ` and the last ` then ` before
    /// it, so a trailing `else ` with nothing after it still matches.
    #[must_use]
    pub fn scan(input: &'a str) -> Option<Self> {
        let body = input.strip_prefix("if ")?;
        // Pad so an empty alternative still leaves " else " to find.
        let else_at = format!("{body} ").rfind(" else ")?;
        let alternative = body.get(else_at + " else ".len()..).unwrap_or("");
        let head = &body[..else_at];
        let then_at = format!("{head} ").rfind(" then ")?;
        let condition = &head[..then_at];
        let consequent = head.get(then_at + " then ".len()..).unwrap_or("");
        if condition.is_empty() {
            return None;
        }
        Some(Self {
            condition,
            consequent,
            alternative,
        })
    }
}
