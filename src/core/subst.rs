//! Variable substitution for build-environment templates.
//!
//! Templates reference variables as `$NAME` or `${NAME}`; `$$` renders a
//! literal dollar sign. Expansion is recursive: a variable's rendered
//! value is itself scanned for references, up to a fixed depth. Unknown
//! variables render as empty strings, matching the host build system's
//! behavior, and the final result has surrounding whitespace trimmed and
//! interior runs collapsed so that empty expansions do not leave gaps in
//! flag strings.

/// Recursion limit for nested variable references.
///
/// Cyclic definitions (`A = $B`, `B = $A`) stop expanding here instead
/// of erroring; whatever references remain are emitted verbatim.
const MAX_DEPTH: usize = 16;

/// Expand all variable references in `template` using `lookup`.
pub fn substitute<F>(template: &str, lookup: &F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    collapse_whitespace(&expand(template, lookup, 0))
}

fn expand<F>(input: &str, lookup: &F, depth: usize) -> String
where
    F: Fn(&str) -> Option<String>,
{
    if depth >= MAX_DEPTH {
        return input.to_string();
    }

    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '$' {
            out.push(c);
            continue;
        }

        match chars.peek() {
            Some('$') => {
                chars.next();
                out.push('$');
            }
            Some('{') => {
                chars.next();
                let mut name = String::new();
                let mut closed = false;
                for ch in chars.by_ref() {
                    if ch == '}' {
                        closed = true;
                        break;
                    }
                    name.push(ch);
                }
                if closed {
                    if let Some(value) = lookup(&name) {
                        out.push_str(&expand(&value, lookup, depth + 1));
                    }
                } else {
                    // Unterminated reference: emit what was consumed.
                    out.push('$');
                    out.push('{');
                    out.push_str(&name);
                }
            }
            Some(ch) if ch.is_ascii_alphabetic() || *ch == '_' => {
                let mut name = String::new();
                while let Some(ch) = chars.peek() {
                    if ch.is_ascii_alphanumeric() || *ch == '_' {
                        name.push(*ch);
                        chars.next();
                    } else {
                        break;
                    }
                }
                if let Some(value) = lookup(&name) {
                    out.push_str(&expand(&value, lookup, depth + 1));
                }
            }
            _ => out.push('$'),
        }
    }

    out
}

/// Trim and collapse runs of whitespace to single spaces.
fn collapse_whitespace(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}
