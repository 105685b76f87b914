// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Word boundary injection and ASCII class rewriting.
//!
//! Every top-level alternative of a term pattern gets `\b` on both sides.
//! Only `|` at paren depth zero counts as top-level: separators inside
//! groups, inside character classes, or escaped are copied unchanged.

const BOUNDARY: &str = r"\b";
const ASCII_BOUNDARY: &str = r"(?-u:\b)";

/// Add word boundaries around every top-level alternative of `pattern`.
///
/// With `verbose` set, `#` comments are skipped and the closing anchor goes
/// on its own line so a trailing comment cannot swallow it.
pub fn inject_word_boundaries(pattern: &str, verbose: bool) -> String {
    inject(pattern, verbose, BOUNDARY)
}

/// Like [`inject_word_boundaries`], with anchors that only treat ASCII
/// letters, digits and `_` as word characters.
pub fn inject_ascii_word_boundaries(pattern: &str, verbose: bool) -> String {
    inject(pattern, verbose, ASCII_BOUNDARY)
}

fn inject(pattern: &str, verbose: bool, anchor: &str) -> String {
    let mut out = String::with_capacity(pattern.len() + 4 * anchor.len());
    out.push_str(anchor);

    for (ch, depth) in Scanner::new(pattern, verbose) {
        if ch == '|' && depth == Some(0) {
            out.push_str(anchor);
            out.push('|');
            out.push_str(anchor);
        } else {
            out.push(ch);
        }
    }

    if verbose {
        out.push('\n');
    }
    out.push_str(anchor);
    out
}

/// ASCII replacement for a Perl class escape, outside and inside `[...]`.
fn ascii_class(escape: char) -> Option<(&'static str, &'static str)> {
    let replacement = match escape {
        'w' => ("[0-9A-Za-z_]", "0-9A-Za-z_"),
        'W' => ("[^0-9A-Za-z_]", "[^0-9A-Za-z_]"),
        'd' => ("[0-9]", "0-9"),
        'D' => ("[^0-9]", "[^0-9]"),
        's' => (r"[\t\n\x0B\x0C\r\x20]", r"\t\n\x0B\x0C\r\x20"),
        'S' => (r"[^\t\n\x0B\x0C\r\x20]", r"[^\t\n\x0B\x0C\r\x20]"),
        'b' => (ASCII_BOUNDARY, r"\b"),
        _ => return None,
    };
    Some(replacement)
}

/// Narrow `\w \W \d \D \s \S \b` in `pattern` to ASCII.
///
/// `\B` keeps its Unicode meaning: `&str` regexes reject `(?-u:\B)`.
pub fn ascii_perl_classes(pattern: &str, verbose: bool) -> String {
    let mut out = String::with_capacity(pattern.len() + 16);
    let mut scanner = Scanner::new(pattern, verbose);

    loop {
        let starts_escape = !scanner.escaped && !scanner.in_comment;
        let in_class = scanner.class_depth > 0;
        let Some((ch, _)) = scanner.next() else {
            break;
        };
        if ch != '\\' || !starts_escape {
            out.push(ch);
            continue;
        }
        out.push(ch);
        let Some((escaped, _)) = scanner.next() else {
            break;
        };
        match ascii_class(escaped) {
            Some((bare, member)) => {
                out.pop();
                out.push_str(if in_class { member } else { bare });
            }
            None => out.push(escaped),
        }
    }
    out
}

/// Count the top-level alternatives of `pattern`.
pub fn top_level_alternatives(pattern: &str, verbose: bool) -> usize {
    1 + Scanner::new(pattern, verbose)
        .filter(|&(ch, depth)| ch == '|' && depth == Some(0))
        .count()
}

/// Walks a pattern yielding each char with the paren depth it sits at.
///
/// The depth is `None` for chars that are syntactically inert: escaped
/// chars, class members, and verbose-mode comments.
struct Scanner<'a> {
    chars: std::str::Chars<'a>,
    verbose: bool,
    depth: usize,
    class_depth: usize,
    class_start: bool,
    escaped: bool,
    in_comment: bool,
}

impl<'a> Scanner<'a> {
    fn new(pattern: &'a str, verbose: bool) -> Self {
        Self {
            chars: pattern.chars(),
            verbose,
            depth: 0,
            class_depth: 0,
            class_start: false,
            escaped: false,
            in_comment: false,
        }
    }
}

impl Iterator for Scanner<'_> {
    type Item = (char, Option<usize>);

    fn next(&mut self) -> Option<Self::Item> {
        let ch = self.chars.next()?;

        if self.escaped {
            self.escaped = false;
            self.class_start = false;
            return Some((ch, None));
        }
        if self.in_comment {
            if ch == '\n' {
                self.in_comment = false;
            }
            return Some((ch, None));
        }
        if ch == '\\' {
            self.escaped = true;
            return Some((ch, None));
        }

        if self.class_depth > 0 {
            let at_start = self.class_start;
            self.class_start = false;
            match ch {
                // `]` right after `[` or `[^` is a literal member
                ']' if at_start => {}
                '^' if at_start => self.class_start = true,
                ']' => self.class_depth -= 1,
                '[' => {
                    self.class_depth += 1;
                    self.class_start = true;
                }
                _ => {}
            }
            return Some((ch, None));
        }

        let depth = self.depth;
        match ch {
            '[' => {
                self.class_depth = 1;
                self.class_start = true;
            }
            '(' => self.depth += 1,
            ')' => {
                self.depth = self.depth.saturating_sub(1);
                return Some((ch, Some(self.depth)));
            }
            '#' if self.verbose => {
                self.in_comment = true;
                return Some((ch, None));
            }
            _ => {}
        }
        Some((ch, Some(depth)))
    }
}

#[cfg(test)]
#[path = "boundary_tests.rs"]
mod tests;
