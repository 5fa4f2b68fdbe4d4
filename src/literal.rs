/// Parses a C integer literal such as `0x7fffffffL`, `32767` or `-128`.
///
/// Unsigned and long suffixes are accepted and ignored; the value is
/// returned as written. Returns `None` for anything that is not a valid
/// literal or does not fit into `i128`.
pub fn parse_int_literal(s: &str) -> Option<i128> {
    let s = s.trim();
    let (negative, body) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };

    let digits_end = body
        .char_indices()
        .rev()
        .take_while(|(_, c)| matches!(c, 'u' | 'U' | 'l' | 'L'))
        .last()
        .map(|(i, _)| i)
        .unwrap_or(body.len());
    let (body, suffix) = body.split_at(digits_end);
    if !is_valid_suffix(suffix) {
        return None;
    }

    let (radix, digits) = if let Some(d) = body
        .strip_prefix("0x")
        .or_else(|| body.strip_prefix("0X"))
    {
        (16, d)
    } else if let Some(d) = body
        .strip_prefix("0b")
        .or_else(|| body.strip_prefix("0B"))
    {
        (2, d)
    } else if body.len() > 1 && body.starts_with('0') {
        (8, &body[1..])
    } else {
        (10, body)
    };

    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }
    let magnitude = u128::from_str_radix(digits, radix).ok()?;

    if negative {
        if magnitude == 1u128 << 127 {
            Some(i128::MIN)
        } else {
            i128::try_from(magnitude).ok().map(|v| -v)
        }
    } else {
        i128::try_from(magnitude).ok()
    }
}

fn is_valid_suffix(suffix: &str) -> bool {
    let long_part: String = suffix.chars().filter(|c| !matches!(c, 'u' | 'U')).collect();
    let unsigned_count = suffix.len() - long_part.len();
    if unsigned_count > 1 {
        return false;
    }
    if !matches!(long_part.as_str(), "" | "l" | "L" | "ll" | "LL") {
        return false;
    }
    // `u` goes before or after the whole `ll`, never in the middle
    !(suffix.len() == 3 && unsigned_count == 1 && suffix.chars().nth(1).map_or(false, |c| c == 'u' || c == 'U'))
}
