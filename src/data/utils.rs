/// Decode the HTML entities a backend leaves in rendered titles.
///
/// Handles the named entities that show up in practice plus decimal and hex
/// numeric references. Unknown or malformed entities pass through verbatim.
pub fn decode_entities(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(start) = rest.find('&') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        match tail.find(';') {
            Some(end) => {
                let entity = &tail[1..end];
                match decode_entity(entity) {
                    Some(decoded) => out.push_str(&decoded),
                    None => out.push_str(&tail[..=end]),
                }
                rest = &tail[end + 1..];
            }
            None => {
                out.push_str(tail);
                return out;
            }
        }
    }

    out.push_str(rest);
    out
}

fn decode_entity(entity: &str) -> Option<String> {
    let named = match entity {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some('\u{a0}'),
        _ => None,
    };
    if let Some(c) = named {
        return Some(c.to_string());
    }

    let code = entity.strip_prefix('#')?;
    let value = if let Some(hex) = code.strip_prefix('x').or_else(|| code.strip_prefix('X')) {
        u32::from_str_radix(hex, 16).ok()?
    } else {
        code.parse::<u32>().ok()?
    };
    char::from_u32(value).map(|c| c.to_string())
}
