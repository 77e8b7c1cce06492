//! Go string literal codec.
//!
//! `decode_string_literal` follows the escape rules of Go's `strconv.Unquote`
//! for interpreted (`"..."`) and raw (`` `...` ``) literals. `quote` produces the
//! Go-style quoted form written to annotated catalogs.

use std::fmt::Write as _;

use unicode_general_category::{GeneralCategory, get_general_category};

use crate::core::errors::{EngineError, EngineResult};

/// Decode the source text of a Go string literal into its value.
///
/// Escapes that produce bytes which are not valid UTF-8 (e.g. `"\xff"`) are
/// reported as decode errors, since catalogs are text.
///
/// # Examples
///
/// ```
/// use i18nize::core::parsers::literal::decode_string_literal;
///
/// assert_eq!(decode_string_literal(r#""a\tb""#).unwrap(), "a\tb");
/// assert_eq!(decode_string_literal("`raw\\n`").unwrap(), "raw\\n");
/// assert!(decode_string_literal(r#""\q""#).is_err());
/// ```
pub fn decode_string_literal(raw: &str) -> EngineResult<String> {
    if let Some(inner) = strip_delimiters(raw, '`') {
        if inner.contains('`') {
            return Err(decode_error(raw, "backquote inside raw string"));
        }
        // Carriage returns are discarded from raw string values.
        return Ok(inner.replace('\r', ""));
    }

    let inner = strip_delimiters(raw, '"')
        .ok_or_else(|| decode_error(raw, "not a quoted string literal"))?;

    let mut bytes: Vec<u8> = Vec::with_capacity(inner.len());
    let mut chars = inner.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                let escape = chars
                    .next()
                    .ok_or_else(|| decode_error(raw, "trailing backslash"))?;
                match escape {
                    'a' => bytes.push(0x07),
                    'b' => bytes.push(0x08),
                    'f' => bytes.push(0x0c),
                    'n' => bytes.push(b'\n'),
                    'r' => bytes.push(b'\r'),
                    't' => bytes.push(b'\t'),
                    'v' => bytes.push(0x0b),
                    '\\' => bytes.push(b'\\'),
                    '"' => bytes.push(b'"'),
                    '0'..='7' => {
                        let mut value = escape.to_digit(8).unwrap_or(0);
                        for _ in 0..2 {
                            let digit = chars
                                .next()
                                .and_then(|d| d.to_digit(8))
                                .ok_or_else(|| decode_error(raw, "invalid octal escape"))?;
                            value = value * 8 + digit;
                        }
                        let byte = u8::try_from(value)
                            .map_err(|_| decode_error(raw, "octal escape value > 255"))?;
                        bytes.push(byte);
                    }
                    'x' => {
                        let value = read_hex(&mut chars, 2)
                            .ok_or_else(|| decode_error(raw, "invalid \\x escape"))?;
                        bytes.push(value as u8);
                    }
                    'u' | 'U' => {
                        let width = if escape == 'u' { 4 } else { 8 };
                        let value = read_hex(&mut chars, width)
                            .ok_or_else(|| decode_error(raw, "invalid unicode escape"))?;
                        let ch = char::from_u32(value)
                            .ok_or_else(|| decode_error(raw, "escape is not a valid code point"))?;
                        let mut buf = [0u8; 4];
                        bytes.extend_from_slice(ch.encode_utf8(&mut buf).as_bytes());
                    }
                    other => {
                        return Err(decode_error(raw, &format!("unknown escape \\{}", other)));
                    }
                }
            }
            '"' | '\n' => {
                return Err(decode_error(raw, "unescaped quote or newline"));
            }
            _ => {
                let mut buf = [0u8; 4];
                bytes.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
            }
        }
    }

    String::from_utf8(bytes).map_err(|_| decode_error(raw, "value is not valid UTF-8"))
}

/// Quote a value the way Go's `strconv.Quote` does.
///
/// # Examples
///
/// ```
/// use i18nize::core::parsers::literal::quote;
///
/// assert_eq!(quote("say \"hi\"\n"), r#""say \"hi\"\n""#);
/// assert_eq!(quote("héllo"), "\"héllo\"");
/// ```
pub fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{07}' => out.push_str("\\a"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0c}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{0b}' => out.push_str("\\v"),
            c if is_printable(c) => out.push(c),
            c if (c as u32) < 0x80 => {
                let _ = write!(out, "\\x{:02x}", c as u32);
            }
            c if (c as u32) <= 0xffff => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => {
                let _ = write!(out, "\\U{:08x}", c as u32);
            }
        }
    }
    out.push('"');
    out
}

/// Letters, marks, numbers, punctuation, symbols and the ASCII space, as in
/// Go's `strconv.IsPrint`. Format characters and unassigned code points are escaped.
fn is_printable(c: char) -> bool {
    use GeneralCategory::*;

    c == ' '
        || matches!(
            get_general_category(c),
            UppercaseLetter
                | LowercaseLetter
                | TitlecaseLetter
                | ModifierLetter
                | OtherLetter
                | NonspacingMark
                | SpacingMark
                | EnclosingMark
                | DecimalNumber
                | LetterNumber
                | OtherNumber
                | ConnectorPunctuation
                | DashPunctuation
                | OpenPunctuation
                | ClosePunctuation
                | InitialPunctuation
                | FinalPunctuation
                | OtherPunctuation
                | MathSymbol
                | CurrencySymbol
                | ModifierSymbol
                | OtherSymbol
        )
}

fn strip_delimiters(raw: &str, delimiter: char) -> Option<&str> {
    if raw.len() >= 2 && raw.starts_with(delimiter) && raw.ends_with(delimiter) {
        Some(&raw[1..raw.len() - 1])
    } else {
        None
    }
}

fn read_hex(chars: &mut std::iter::Peekable<std::str::Chars<'_>>, width: usize) -> Option<u32> {
    let mut value: u32 = 0;
    for _ in 0..width {
        let digit = chars.next()?.to_digit(16)?;
        value = value * 16 + digit;
    }
    Some(value)
}

fn decode_error(raw: &str, reason: &str) -> EngineError {
    EngineError::Decode {
        literal: raw.to_string(),
        reason: reason.to_string(),
    }
}
