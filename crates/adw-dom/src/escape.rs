// File: src/escape.rs
// Purpose: Entity decoding and escaping for text and attribute values

use once_cell::sync::Lazy;
use regex::Regex;

/// Named entities the parser decodes. Any other named entity is kept verbatim.
const KNOWN_ENTITIES: &[(&str, char)] = &[
    ("amp", '&'),
    ("lt", '<'),
    ("gt", '>'),
    ("quot", '"'),
    ("apos", '\''),
    ("nbsp", '\u{a0}'),
    ("copy", '\u{a9}'),
    ("reg", '\u{ae}'),
    ("hellip", '\u{2026}'),
    ("mdash", '\u{2014}'),
    ("ndash", '\u{2013}'),
    ("laquo", '\u{ab}'),
    ("raquo", '\u{bb}'),
];

static ENTITY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"&(#[0-9]{1,7}|#[xX][0-9a-fA-F]{1,6}|[A-Za-z][A-Za-z0-9]{1,31});").unwrap()
});

static UNKNOWN_NAMED_AT_START: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^&([A-Za-z][A-Za-z0-9]{1,31});").unwrap());

fn known(name: &str) -> Option<char> {
    KNOWN_ENTITIES
        .iter()
        .find(|(entity, _)| *entity == name)
        .map(|(_, ch)| *ch)
}

/// Decodes numeric and well-known named entities
///
/// Unknown named entities stay as written so they survive re-serialization.
pub fn decode_entities(value: &str) -> String {
    if !value.contains('&') {
        return value.to_string();
    }

    ENTITY
        .replace_all(value, |caps: &regex::Captures| {
            let body = &caps[1];
            let decoded = if let Some(hex) = body
                .strip_prefix("#x")
                .or_else(|| body.strip_prefix("#X"))
            {
                u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
            } else if let Some(dec) = body.strip_prefix('#') {
                dec.parse::<u32>().ok().and_then(char::from_u32)
            } else {
                known(body)
            };

            decoded
                .map(String::from)
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

/// Escapes text content
pub fn escape_text(value: &str, out: &mut String) {
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
}

/// Escapes a double-quoted attribute value
///
/// An `&` that starts an unknown named entity is left alone, mirroring
/// [`decode_entities`].
pub fn escape_attr(value: &str, out: &mut String) {
    for (index, ch) in value.char_indices() {
        match ch {
            '&' => {
                let keep = UNKNOWN_NAMED_AT_START
                    .captures(&value[index..])
                    .map(|caps| known(&caps[1]).is_none())
                    .unwrap_or(false);
                out.push_str(if keep { "&" } else { "&amp;" });
            }
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
}
