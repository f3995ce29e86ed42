use regex::Regex;

/// Bracket pairs removed from a signature, outermost kind last.
const BRACKET_PAIRS: [(char, char); 3] = [('<', '>'), ('[', ']'), ('(', ')')];

/// Reconstructs parameter names from a (possibly multi-line) signature.
pub struct ParamParser {
    default_mid: Regex,
    default_tail: Regex,
}

impl Default for ParamParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ParamParser {
    #[must_use]
    pub fn new() -> Self {
        Self {
            default_mid: Regex::new(r" = [^,]+,").expect("Invalid regex"),
            default_tail: Regex::new(r" = .+$").expect("Invalid regex"),
        }
    }

    /// Parameters of the function declared at `start` (0-indexed into `lines`).
    ///
    /// Malformed signatures yield an empty list.
    #[must_use]
    pub fn parse_at(&self, lines: &[&str], start: usize) -> Vec<String> {
        let signature = collect_signature(lines, start);
        self.parse_signature(&signature)
    }

    /// Parameters of an already joined signature such as `void f(int a, int b)`.
    #[must_use]
    pub fn parse_signature(&self, signature: &str) -> Vec<String> {
        let Some(inner) = parenthesized(signature) else {
            return Vec::new();
        };

        let mut stripped = inner.trim().to_string();
        for (open, close) in BRACKET_PAIRS {
            stripped = strip_enclosed(&stripped, open, close);
        }

        let stripped = self.default_mid.replace_all(&stripped, ",");
        let stripped = self.default_tail.replace(&stripped, "");

        stripped.split(',').filter_map(parameter_name).collect()
    }
}

/// Joins lines from `start` until the body opens (`{` outside the parameter
/// list), an initializer list starts (line ending in `:`), or the file ends.
fn collect_signature(lines: &[&str], start: usize) -> String {
    let mut signature = String::new();
    let mut depth = 0usize;

    for line in lines.iter().skip(start) {
        let line = line.trim_end_matches('\r');
        let (part, done) = match body_brace(line, &mut depth) {
            Some(pos) => (&line[..pos], true),
            None if depth == 0 => line
                .strip_suffix(':')
                .map_or((line, false), |head| (head, true)),
            None => (line, false),
        };

        signature.push(' ');
        signature.push_str(part);

        if done {
            break;
        }
    }

    signature.trim().to_string()
}

/// Byte offset of the first `{` outside parentheses, tracking depth across lines.
fn body_brace(line: &str, depth: &mut usize) -> Option<usize> {
    for (i, ch) in line.char_indices() {
        match ch {
            '(' => *depth += 1,
            ')' => *depth = depth.saturating_sub(1),
            '{' if *depth == 0 => return Some(i),
            _ => {}
        }
    }
    None
}

/// Text between the first `(` and the `)` that closes it.
fn parenthesized(signature: &str) -> Option<&str> {
    let open = signature.find('(')?;
    let rest = &signature[open + 1..];
    let mut depth = 1usize;
    for (i, ch) in rest.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&rest[..i]);
                }
            }
            _ => {}
        }
    }
    None
}

/// Removes every `open ... close` span, nested spans included.
///
/// A closer with no opener is kept as-is; an opener that never closes keeps
/// the rest of the text.
#[must_use]
pub fn strip_enclosed(text: &str, open: char, close: char) -> String {
    let mut out = String::with_capacity(text.len());
    let mut depth = 0usize;
    let mut span_start = 0usize;

    for (i, ch) in text.char_indices() {
        if ch == open {
            if depth == 0 {
                span_start = i;
            }
            depth += 1;
        } else if ch == close && depth > 0 {
            depth -= 1;
        } else if depth == 0 {
            out.push(ch);
        }
    }

    if depth > 0 {
        out.push_str(&text[span_start..]);
    }
    out
}

/// Last whitespace token of a `type name` segment, minus `&`/`*` sigils.
fn parameter_name(segment: &str) -> Option<String> {
    let mut tokens = segment.split_whitespace();
    tokens.next()?;
    let last = tokens.last()?;

    let name = last.trim_start_matches(['&', '*']);
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

#[cfg(test)]
#[path = "params_tests.rs"]
mod tests;
