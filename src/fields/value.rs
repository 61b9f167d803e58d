//! Permissive value parsing for entity fields
//!
//! Numbers follow C library conventions: leading whitespace is skipped, the
//! longest numeric prefix is used, trailing junk is ignored, and a value with
//! no numeric prefix reads as zero.

use crate::entity::Vec3;

/// Parse a base-10 integer prefix like `strtol`.
///
/// Out-of-range values saturate to the `i32` bounds.
pub fn parse_int(s: &str) -> i32 {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut i = 0;
    let mut negative = false;

    if let Some(&sign) = bytes.first() {
        if sign == b'-' || sign == b'+' {
            negative = sign == b'-';
            i = 1;
        }
    }

    let mut value: i64 = 0;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        value = (value * 10 + (bytes[i] - b'0') as i64).min(i64::from(i32::MAX) + 1);
        i += 1;
    }

    if negative {
        value = -value;
    }
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Parse a floating-point prefix like `strtod`
pub fn parse_float(s: &str) -> f32 {
    float_prefix(s).map(|(v, _)| v).unwrap_or(0.0)
}

/// Parse up to three whitespace-separated floats.
///
/// Parsing stops at the first component that is not a number; components
/// that were not read are zero.
pub fn parse_vector(s: &str) -> Vec3 {
    let mut out = [0.0; 3];
    let mut rest = s;

    for component in out.iter_mut() {
        match float_prefix(rest) {
            Some((v, used)) => {
                *component = v;
                rest = &rest[used..];
            }
            None => break,
        }
    }

    out
}

/// Find the longest float prefix of `s`.
///
/// Returns the value and the number of bytes consumed, including leading
/// whitespace, or `None` if `s` does not start with a number.
fn float_prefix(s: &str) -> Option<(f32, usize)> {
    let bytes = s.as_bytes();
    let mut i = 0;

    while i < bytes.len() && bytes[i].is_ascii_whitespace() {
        i += 1;
    }
    let start = i;

    if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
        i += 1;
    }

    // inf / infinity / nan
    let word = &s[i..];
    for special in ["infinity", "inf", "nan"] {
        if word
            .get(..special.len())
            .is_some_and(|w| w.eq_ignore_ascii_case(special))
        {
            let end = i + special.len();
            return s[start..end].parse::<f32>().ok().map(|v| (v, end));
        }
    }

    let mut digits = 0;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
        digits += 1;
    }
    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
            digits += 1;
        }
    }
    if digits == 0 {
        return None;
    }

    // Exponent only counts if at least one digit follows it
    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }

    s[start..i].parse::<f32>().ok().map(|v| (v, i))
}

/// Resolve escapes in a string value.
///
/// `\n` becomes a newline; a backslash followed by any other character is
/// kept as-is together with that character.
pub fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }

    out
}

/// Inverse of [`unescape`] for strings that can be written back.
///
/// Newlines become `\n`. A literal backslash followed by `n` has no escaped
/// form and will read back as a newline.
pub fn escape(s: &str) -> String {
    s.replace('\n', "\\n")
}
