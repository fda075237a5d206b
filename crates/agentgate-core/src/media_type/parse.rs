//! Media type grammar (RFC 7231 section 3.1.1.1, minus quoted-pair escapes).

use super::{MediaType, WILDCARD};
use crate::error::MediaTypeError;

fn is_tchar(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(
            c,
            '!' | '#' | '$' | '%' | '&' | '\'' | '*' | '+' | '-' | '.' | '^' | '_' | '`' | '|' | '~'
        )
}

fn is_token(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_tchar)
}

pub(super) fn parse_media_type(input: &str) -> Result<MediaType, MediaTypeError> {
    let mut parts = input.split(';');
    let essence = parts.next().unwrap_or("").trim();
    if essence.is_empty() {
        return Err(MediaTypeError::Empty);
    }

    let (main_type, subtype) = if essence == WILDCARD {
        (WILDCARD, WILDCARD)
    } else {
        essence
            .split_once('/')
            .ok_or_else(|| MediaTypeError::MissingSlash(essence.to_string()))?
    };
    let main_type = main_type.trim();
    let subtype = subtype.trim();
    if !is_token(main_type) || !is_token(subtype) {
        return Err(MediaTypeError::InvalidToken(essence.to_string()));
    }

    let mut params = Vec::new();
    for raw in parts {
        let raw = raw.trim();
        if raw.is_empty() {
            continue;
        }
        let (name, value) = raw
            .split_once('=')
            .ok_or_else(|| MediaTypeError::InvalidParameter(raw.to_string()))?;
        let name = name.trim();
        if !is_token(name) {
            return Err(MediaTypeError::InvalidParameter(raw.to_string()));
        }
        let value = value.trim();
        let value = value
            .strip_prefix('"')
            .and_then(|v| v.strip_suffix('"'))
            .unwrap_or(value);
        params.push((name.to_ascii_lowercase(), value.to_string()));
    }

    Ok(MediaType::from_parts(
        main_type.to_ascii_lowercase(),
        subtype.to_ascii_lowercase(),
        params,
    ))
}
