use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Delimiter cannot be empty.")]
    EmptyDelimiter,

    #[error(
        "Invalid delimiter '{0}'. Expected a single ASCII punctuation or whitespace character, or 'tab'."
    )]
    InvalidDelimiter(String),

    #[error("Invalid --set format: '{0}'. Expected KEY=VALUE.")]
    InvalidKeyValue(String),

    #[error("Component '{component}' cannot be empty in '{input}'.")]
    EmptyComponent {
        component: &'static str,
        input: String,
    },
}

/// Parses a table delimiter. Accepts a single ASCII character other than letters, digits,
/// quotes and line breaks, plus `tab` and the escaped form `\t`.
pub fn parse_delimiter(raw: &str) -> Result<u8, ParseError> {
    match raw {
        "" => Err(ParseError::EmptyDelimiter),
        "tab" | "\\t" | "\t" => Ok(b'\t'),
        _ => {
            let bytes = raw.as_bytes();
            match bytes {
                [b] if b.is_ascii()
                    && !b.is_ascii_alphanumeric()
                    && !matches!(*b, b'"' | b'\n' | b'\r') =>
                {
                    Ok(*b)
                }
                _ => Err(ParseError::InvalidDelimiter(raw.to_string())),
            }
        }
    }
}

/// Splits a `KEY=VALUE` override at the first `=`.
pub fn parse_key_value(raw: &str) -> Result<(&str, &str), ParseError> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| ParseError::InvalidKeyValue(raw.to_string()))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(ParseError::EmptyComponent {
            component: "key",
            input: raw.to_string(),
        });
    }
    Ok((key, value.trim()))
}
