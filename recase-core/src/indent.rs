//! Indentation normalization

/// Remove the common leading indentation from every line.
///
/// Fully-blank leading and trailing lines are dropped first. The common
/// indent is the minimum leading-whitespace length over the non-blank lines
/// that have any; that many whitespace characters are then stripped from
/// each non-blank line that carries them, while lines with a shorter indent
/// are left unchanged. Blank interior lines collapse to empty lines.
///
/// # Example
/// ```
/// use recase_core::indent::trim_indent;
///
/// assert_eq!(trim_indent("   hello\n   world\n"), "hello\nworld");
/// ```
pub fn trim_indent(text: &str) -> String {
    let lines: Vec<&str> = text.split('\n').collect();

    let Some(first) = lines.iter().position(|line| !line.trim().is_empty()) else {
        return String::new();
    };
    let last = lines
        .iter()
        .rposition(|line| !line.trim().is_empty())
        .unwrap_or(first);
    let lines = &lines[first..=last];

    let min_indent = lines
        .iter()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.chars().take_while(|c| c.is_whitespace()).count())
        .filter(|&indent| indent > 0)
        .min()
        .unwrap_or(0);

    lines
        .iter()
        .map(|line| {
            if line.trim().is_empty() {
                ""
            } else {
                strip_indent(line, min_indent)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Strip exactly `indent` leading whitespace characters, or return the line
/// unchanged when it has fewer.
fn strip_indent(line: &str, indent: usize) -> &str {
    let mut remaining = indent;
    let mut offset = 0;
    for c in line.chars() {
        if remaining == 0 {
            break;
        }
        if !c.is_whitespace() {
            return line;
        }
        remaining -= 1;
        offset += c.len_utf8();
    }
    if remaining == 0 {
        &line[offset..]
    } else {
        line
    }
}
