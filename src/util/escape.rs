use std::{iter::Peekable, str::Chars};

/// Reasons a string literal body can fail to decode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EscapeError {
    /// The escape sequence is malformed, e.g. `\x4` or `\u{110000}`.
    Invalid(String),
    /// `\1`–`\9`, or `\0` followed by a digit.
    LegacyOctal,
    /// The sequence is valid relaxed syntax but not valid JSON.
    NotAllowedInJson(&'static str),
}

/// Decodes the body of a string literal (the text between the quotes).
///
/// Escapes follow strict mode string literal rules: simple escapes, `\xHH`,
/// `\uHHHH`, `\u{H...}`, line continuations and identity escapes. Legacy
/// octal escapes are rejected. With `json` set, only the escapes allowed by
/// JSON are accepted and raw control characters are rejected.
///
/// A `\uHHHH` high surrogate immediately followed by a `\uHHHH` low surrogate
/// decodes to one code point. Any unpaired surrogate decodes to U+FFFD.
///
/// # Errors
/// Returns an [`EscapeError`] describing the first invalid sequence.
///
/// # Example
/// ```
/// use isolit::util::escape::{EscapeError, unescape};
///
/// assert_eq!(unescape(r"a\tbA\x42", false).unwrap(), "a\tbAB");
/// assert_eq!(unescape(r"\uD83D\uDE00", true).unwrap(), "\u{1F600}");
/// assert_eq!(unescape(r"\1", false), Err(EscapeError::LegacyOctal));
/// assert!(unescape(r"\x41", true).is_err());
/// ```
pub fn unescape(body: &str, json: bool) -> Result<String, EscapeError> {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            if json && u32::from(c) < 0x20 {
                return Err(EscapeError::NotAllowedInJson("A control character in a string"));
            }
            out.push(c);
            continue;
        }

        let Some(escaped) = chars.next() else {
            return Err(EscapeError::Invalid("\\".to_string()));
        };

        match escaped {
            '"' | '\\' | '/' => out.push(escaped),
            'b' => out.push('\u{8}'),
            'f' => out.push('\u{c}'),
            'n' => out.push('\n'),
            'r' => out.push('\r'),
            't' => out.push('\t'),
            'u' => out.push(unescape_unicode(&mut chars, json)?),
            '0' if chars.peek().is_some_and(char::is_ascii_digit) => {
                return Err(EscapeError::LegacyOctal);
            },
            '1'..='9' => return Err(EscapeError::LegacyOctal),
            _ if json => return Err(EscapeError::NotAllowedInJson("This escape sequence")),
            '\'' => out.push('\''),
            'v' => out.push('\u{b}'),
            '0' => out.push('\0'),
            'x' => {
                let code = read_hex(&mut chars, 2).ok_or_else(|| {
                                                       EscapeError::Invalid("\\x".to_string())
                                                   })?;
                out.push(char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER));
            },
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
            },
            '\n' | '\u{2028}' | '\u{2029}' => {},
            other => out.push(other),
        }
    }

    Ok(out)
}

/// Decodes what follows `\u`: either `{H...}` or exactly four hex digits,
/// pairing surrogates when a second `\uHHHH` follows a high surrogate.
fn unescape_unicode(chars: &mut Peekable<Chars<'_>>, json: bool) -> Result<char, EscapeError> {
    if chars.peek() == Some(&'{') {
        if json {
            return Err(EscapeError::NotAllowedInJson("A \\u{...} escape"));
        }
        chars.next();
        let mut code: u32 = 0;
        let mut digits = 0;
        loop {
            match chars.next() {
                Some('}') if digits > 0 => break,
                Some(c) if c.is_ascii_hexdigit() => {
                    code = code.saturating_mul(16)
                               .saturating_add(c.to_digit(16).unwrap_or(0));
                    digits += 1;
                },
                _ => return Err(EscapeError::Invalid("\\u{".to_string())),
            }
        }
        if code > 0x10_FFFF {
            return Err(EscapeError::Invalid(format!("\\u{{{code:X}}}")));
        }
        return Ok(char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER));
    }

    let unit = read_hex(chars, 4).ok_or_else(|| EscapeError::Invalid("\\u".to_string()))?;

    if (0xD800..0xDC00).contains(&unit) {
        let mut lookahead = chars.clone();
        if lookahead.next() == Some('\\')
           && lookahead.next() == Some('u')
           && let Some(low) = read_hex(&mut lookahead, 4)
           && (0xDC00..0xE000).contains(&low)
        {
            *chars = lookahead;
            let code = 0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00);
            return Ok(char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER));
        }
    }

    Ok(char::from_u32(unit).unwrap_or(char::REPLACEMENT_CHARACTER))
}

/// Reads exactly `count` hexadecimal digits.
fn read_hex(chars: &mut Peekable<Chars<'_>>, count: usize) -> Option<u32> {
    let mut code = 0;
    for _ in 0..count {
        let digit = chars.next()?.to_digit(16)?;
        code = code * 16 + digit;
    }
    Some(code)
}
