//! Lenient numeric parsing for BDF field values.
//!
//! These follow `scanf` conventions: leading whitespace is skipped, a number ends at the first
//! character that can't continue it, and anything after that is ignored.

/// Parses a leading decimal integer, returning it with the unparsed remainder.
pub fn scan_int(s: &str) -> Option<(i64, &str)> {
    let s = s.trim_start();
    let sign_len = if s.starts_with(['+', '-']) { 1 } else { 0 };
    let digits = s[sign_len..].bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let end = sign_len + digits;
    let value = s[..end].parse().ok()?;
    Some((value, &s[end..]))
}

/// Parses up to `N` whitespace-separated leading integers.
///
/// Parsing stops at the first field that isn't a number. Fields that weren't parsed are left at
/// zero, and the number of parsed fields is returned alongside.
pub fn scan_ints<const N: usize>(mut s: &str) -> ([i64; N], usize) {
    let mut values = [0; N];
    for (i, slot) in values.iter_mut().enumerate() {
        match scan_int(s) {
            Some((value, rest)) => {
                *slot = value;
                s = rest;
            }
            None => return (values, i),
        }
    }
    (values, N)
}

/// Parses a leading hexadecimal integer, with an optional `0x` prefix.
///
/// Values wider than 64 bits keep their low 64 bits.
pub fn scan_hex(s: &str) -> Option<u64> {
    let s = s.trim_start();
    let s = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(rest) if rest.starts_with(|c: char| c.is_ascii_hexdigit()) => rest,
        _ => s,
    };

    let mut value = 0u64;
    let mut digits = 0;
    for ch in s.chars() {
        match ch.to_digit(16) {
            Some(digit) => {
                value = (value << 4) | digit as u64;
                digits += 1;
            }
            None => break,
        }
    }
    if digits == 0 {
        None
    } else {
        Some(value)
    }
}
