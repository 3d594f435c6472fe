//! Brace expansion.
//!
//! Expands `{a,b}` alternation groups and `{x..y[..step]}` sequences the way a
//! POSIX shell does, left to right and depth first. Backslash escapes are kept
//! in the output so that later tokenization still sees them.

/// Sequences longer than this stay literal instead of being materialized.
const MAX_SEQUENCE_LEN: u64 = 100_000;

/// Expand every brace group in `pattern`.
///
/// Always returns at least one element. A pattern without an expandable group
/// comes back unchanged.
///
/// # Examples
///
/// ```
/// use glob_extra::pattern::brace::expand_braces;
///
/// assert_eq!(expand_braces("src/*.{js,ts}"), vec!["src/*.js", "src/*.ts"]);
/// assert_eq!(expand_braces("v{1..3}"), vec!["v1", "v2", "v3"]);
/// assert_eq!(expand_braces("{a}"), vec!["{a}"]);
/// ```
#[must_use]
pub fn expand_braces(pattern: &str) -> Vec<String> {
    let mut search_from = 0;

    loop {
        let Some(open) = find_unescaped(pattern, b'{', search_from) else {
            return vec![pattern.to_string()];
        };
        let Some(close) = find_matching_close(pattern, open) else {
            search_from = open + 1;
            continue;
        };

        let body = &pattern[open + 1..close];
        let parts = split_top_level(body);
        let alternatives: Vec<String> = if parts.len() > 1 {
            parts.into_iter().flat_map(expand_braces).collect()
        } else if let Some(sequence) = expand_sequence(body) {
            sequence
        } else {
            // `{a}` and `{}` are literal, but groups nested inside still expand.
            search_from = open + 1;
            continue;
        };

        let prefix = &pattern[..open];
        let suffixes = expand_braces(&pattern[close + 1..]);
        let mut expanded = Vec::with_capacity(alternatives.len() * suffixes.len());
        for alternative in &alternatives {
            for suffix in &suffixes {
                expanded.push(format!("{prefix}{alternative}{suffix}"));
            }
        }
        return expanded;
    }
}

/// Byte offset of the first unescaped `needle` at or after `from`.
fn find_unescaped(s: &str, needle: u8, from: usize) -> Option<usize> {
    let bytes = s.as_bytes();
    let mut i = from;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b if b == needle => return Some(i),
            _ => i += 1,
        }
    }
    None
}

/// Byte offset of the `}` closing the group opened at `open`.
fn find_matching_close(s: &str, open: usize) -> Option<usize> {
    let bytes = s.as_bytes();
    let mut depth = 0usize;
    let mut i = open;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => {
                i += 2;
                continue;
            }
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
        i += 1;
    }
    None
}

/// Split a group body on commas that are neither escaped nor nested.
fn split_top_level(body: &str) -> Vec<&str> {
    let bytes = body.as_bytes();
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => {
                i += 2;
                continue;
            }
            b'{' => depth += 1,
            b'}' => depth = depth.saturating_sub(1),
            b',' if depth == 0 => {
                parts.push(&body[start..i]);
                start = i + 1;
            }
            _ => {}
        }
        i += 1;
    }
    parts.push(&body[start..]);
    parts
}

/// Expand `x..y` or `x..y..step`, numeric or single-character.
fn expand_sequence(body: &str) -> Option<Vec<String>> {
    let parts: Vec<&str> = body.split("..").collect();
    if !(2..=3).contains(&parts.len()) {
        return None;
    }

    let step = match parts.get(2) {
        Some(raw) => raw.parse::<i64>().ok()?.unsigned_abs().max(1),
        None => 1,
    };

    if let (Ok(start), Ok(end)) = (parts[0].parse::<i64>(), parts[1].parse::<i64>()) {
        let width = if is_zero_padded(parts[0]) || is_zero_padded(parts[1]) {
            parts[0].len().max(parts[1].len())
        } else {
            0
        };
        let values = stepped_range(start, end, step)?;
        return Some(
            values
                .into_iter()
                .map(|n| format!("{n:0width$}"))
                .collect(),
        );
    }

    let start = single_char(parts[0])?;
    let end = single_char(parts[1])?;
    let values = stepped_range(i64::from(u32::from(start)), i64::from(u32::from(end)), step)?;
    Some(
        values
            .into_iter()
            .filter_map(|code| u32::try_from(code).ok().and_then(char::from_u32))
            .map(String::from)
            .collect(),
    )
}

fn stepped_range(start: i64, end: i64, step: u64) -> Option<Vec<i64>> {
    let span = start.abs_diff(end);
    if span / step >= MAX_SEQUENCE_LEN {
        return None;
    }

    let step = i64::try_from(step).ok()?;
    let ascending = start <= end;
    let mut values = Vec::new();
    let mut current = start;
    while (ascending && current <= end) || (!ascending && current >= end) {
        values.push(current);
        let next = if ascending {
            current.checked_add(step)
        } else {
            current.checked_sub(step)
        };
        match next {
            Some(next) => current = next,
            None => break,
        }
    }
    Some(values)
}

fn is_zero_padded(raw: &str) -> bool {
    let digits = raw.strip_prefix('-').unwrap_or(raw);
    digits.len() > 1 && digits.starts_with('0')
}

fn single_char(raw: &str) -> Option<char> {
    let mut chars = raw.chars();
    let c = chars.next()?;
    chars.next().is_none().then_some(c)
}
