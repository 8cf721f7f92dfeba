//! Line classifier for `.gradient` files.
//!
//! Every line of a `.gradient` file is one [`Token`]. The three stop-bearing
//! dialects never share a line shape, so classification needs no context:
//!
//! ```text
//! # pos=0.500000 color=#4ecdc4      -> Metadata      (editor header)
//!  index=255 color=5164484          -> TableEntry    (512-sample table)
//! 127 78 205 196                    -> Plain         (JWildfire)
//! anything else                     -> Other
//! ```
//!
//! A line with a stop shape whose values do not parse becomes
//! [`Token::Invalid`]. Whether that is an error depends on which dialect the
//! parser settles on, so lexing itself never fails.

use ramp_engine::paint::Color;

use crate::parser::Dialect;

// ── Token ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// `# pos=<f64> color=<#rrggbb>`
    Metadata { position: f64, color: Color },
    /// `index=<i> color=<packed>`
    TableEntry { index: u32, color: Color },
    /// `<pos> <r> <g> <b>` with `pos` in 0..=255
    Plain { position: u32, color: Color },
    /// Shaped like a `dialect` stop but unparseable.
    Invalid { dialect: Dialect, detail: String },
    /// Headers, comments, blank lines.
    Other,
}

impl Token {
    /// The dialect whose line shape this token has.
    pub fn dialect(&self) -> Option<Dialect> {
        match self {
            Token::Metadata { .. } => Some(Dialect::Metadata),
            Token::TableEntry { .. } => Some(Dialect::Table),
            Token::Plain { .. } => Some(Dialect::Plain),
            Token::Invalid { dialect, .. } => Some(*dialect),
            Token::Other => None,
        }
    }
}

/// A token with its 1-based line number.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenWithLine {
    pub token: Token,
    pub line: usize,
}

// ── Lexer ─────────────────────────────────────────────────────────────────

pub struct Lexer<'s> {
    src: &'s str,
}

impl<'s> Lexer<'s> {
    pub fn new(src: &'s str) -> Self {
        Self { src }
    }

    /// Classifies every line.
    pub fn tokenize(self) -> Vec<TokenWithLine> {
        self.src
            .lines()
            .enumerate()
            .map(|(i, text)| TokenWithLine { token: lex_line(text), line: i + 1 })
            .collect()
    }
}

fn lex_line(text: &str) -> Token {
    let trimmed = text.trim();

    if trimmed.starts_with("# pos=") {
        return lex_metadata(trimmed).unwrap_or_else(|detail| Token::Invalid {
            dialect: Dialect::Metadata,
            detail,
        });
    }
    if trimmed.starts_with("index=") && trimmed.contains("color=") {
        return lex_table_entry(trimmed).unwrap_or_else(|detail| Token::Invalid {
            dialect: Dialect::Table,
            detail,
        });
    }

    let parts: Vec<&str> = trimmed.split_whitespace().collect();
    if parts.len() == 4 && parts[0].bytes().all(|b| b.is_ascii_digit()) {
        return lex_plain(&parts).unwrap_or_else(|detail| Token::Invalid {
            dialect: Dialect::Plain,
            detail,
        });
    }

    Token::Other
}

fn lex_metadata(trimmed: &str) -> Result<Token, String> {
    let mut parts = trimmed.split_whitespace().skip(1);
    let pos = field(parts.next(), "pos")?;
    let color = field(parts.next(), "color")?;

    let position = pos
        .parse::<f64>()
        .ok()
        .filter(|p| p.is_finite())
        .ok_or_else(|| format!("invalid stop position {pos:?}"))?;
    let color = Color::from_hex(color).map_err(|e| e.to_string())?;

    Ok(Token::Metadata { position, color })
}

fn lex_table_entry(trimmed: &str) -> Result<Token, String> {
    let mut parts = trimmed.split_whitespace();
    let index = field(parts.next(), "index")?;
    let packed = field(parts.next(), "color")?;

    let index = index.parse::<u32>().map_err(|_| format!("invalid table index {index:?}"))?;
    let packed = packed.parse::<u32>().map_err(|_| format!("invalid packed color {packed:?}"))?;

    Ok(Token::TableEntry { index, color: Color::from_packed(packed) })
}

fn lex_plain(parts: &[&str]) -> Result<Token, String> {
    let position = parts[0]
        .parse::<u32>()
        .map_err(|_| format!("invalid position {:?}", parts[0]))?;

    let channel = |s: &str| s.parse::<u8>().map_err(|_| format!("invalid channel value {s:?}"));
    let color = Color::new(channel(parts[1])?, channel(parts[2])?, channel(parts[3])?);

    Ok(Token::Plain { position, color })
}

/// Extracts `<value>` from a `<key>=<value>` word.
fn field<'a>(part: Option<&'a str>, key: &str) -> Result<&'a str, String> {
    part.and_then(|p| p.split_once('='))
        .filter(|(k, _)| *k == key)
        .map(|(_, v)| v)
        .ok_or_else(|| format!("expected `{key}=<value>`"))
}
