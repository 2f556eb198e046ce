// src/core/sanitize.rs

/// Decode the handful of entities receipt exports actually emit.
/// `&nbsp;` becomes U+00A0 so a later `trim()` drops it the same way it drops spaces.
/// Unknown entities are left as written.
pub fn decode_entities(s: &str) -> String {
    if !s.contains('&') {
        return s!(s);
    }
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp..];
        match tail.find(';').filter(|&semi| semi <= 10) {
            Some(semi) => {
                match decode_one(&tail[1..semi]) {
                    Some(ch) => out.push(ch),
                    None => out.push_str(&tail[..=semi]),
                }
                rest = &tail[semi + 1..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn decode_one(name: &str) -> Option<char> {
    match name {
        "nbsp" => Some('\u{a0}'),
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        _ => {
            let num = name.strip_prefix('#')?;
            let code = match num.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => num.parse::<u32>().ok()?,
            };
            char::from_u32(code)
        }
    }
}

/// "12,500" → "12500". Only commas; other separators are left for the caller to reject.
pub fn strip_thousands(s: &str) -> String {
    s.trim().replace(',', "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_named_and_numeric_entities() {
        assert_eq!(decode_entities("A&amp;B"), "A&B");
        assert_eq!(decode_entities("&lt;b&gt;"), "<b>");
        assert_eq!(decode_entities("&#8358;500"), "₦500");
        assert_eq!(decode_entities("&#x41;"), "A");
        assert_eq!(decode_entities("x&nbsp;"), "x\u{a0}");
    }

    #[test]
    fn leaves_unknown_and_bare_ampersands() {
        assert_eq!(decode_entities("Salt & Pepper"), "Salt & Pepper");
        assert_eq!(decode_entities("&bogus;"), "&bogus;");
    }

    #[test]
    fn strip_thousands_drops_commas() {
        assert_eq!(strip_thousands(" 1,234,567 "), "1234567");
    }
}
