//! Line-level text helpers shared by the checks.

/// Split file content into lines the way the checks see them.
///
/// Splits on `\n` only, so a trailing newline yields a final empty line, and
/// strips one trailing `\r` from each line.
#[must_use]
pub fn split_lines(content: &str) -> Vec<&str> {
    content
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}

/// The run of spaces and tabs at the start of `line`.
#[must_use]
pub fn leading_whitespace(line: &str) -> &str {
    let end = line
        .find(|c: char| c != ' ' && c != '\t')
        .unwrap_or(line.len());
    &line[..end]
}

/// Number of space characters before anything else on the line.
#[must_use]
pub fn leading_spaces(line: &str) -> usize {
    line.len() - line.trim_start_matches(' ').len()
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Code,
    Str,
    Char,
    BlockComment,
}

/// Byte offset of a `//` line comment, ignoring `//` inside string or char
/// literals and `/* ... */` comments on the same line.
#[must_use]
pub fn line_comment_start(line: &str) -> Option<usize> {
    let bytes = line.as_bytes();
    let mut state = ScanState::Code;
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        let next = bytes.get(i + 1).copied();
        match state {
            ScanState::Code => match (b, next) {
                (b'/', Some(b'/')) => return Some(i),
                (b'/', Some(b'*')) => {
                    state = ScanState::BlockComment;
                    i += 1;
                }
                (b'"', _) => state = ScanState::Str,
                (b'\'', _) => state = ScanState::Char,
                _ => {}
            },
            ScanState::Str | ScanState::Char => {
                let quote = if state == ScanState::Str { b'"' } else { b'\'' };
                if b == b'\\' {
                    i += 1;
                } else if b == quote {
                    state = ScanState::Code;
                }
            }
            ScanState::BlockComment => {
                if b == b'*' && next == Some(b'/') {
                    state = ScanState::Code;
                    i += 1;
                }
            }
        }
        i += 1;
    }

    None
}

/// The part of `line` before any line comment.
#[must_use]
pub fn code_part(line: &str) -> &str {
    line_comment_start(line).map_or(line, |idx| &line[..idx])
}

/// Whether a trimmed line starts a comment.
#[must_use]
pub fn is_comment(trimmed: &str) -> bool {
    trimmed.starts_with("//") || trimmed.starts_with("/*") || trimmed.starts_with('*')
}

#[cfg(test)]
#[path = "source_tests.rs"]
mod tests;
