use ramp_engine::paint::ColorStop;

use crate::error::CodecError;
use crate::lexer::{Lexer, Token, TokenWithLine};
use crate::TABLE_SIZE;

// ── Dialect ───────────────────────────────────────────────────────────────

/// Which representation a `.gradient` file was decoded from.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Dialect {
    /// `# pos=… color=…` editor header (lossless).
    Metadata,
    /// ` index=… color=…` sample table.
    Table,
    /// JWildfire `pos r g b` lines.
    Plain,
}

// ── Public parse entry point ──────────────────────────────────────────────

/// Decodes a `.gradient` file into a sorted stop list.
///
/// Precedence: editor metadata, then the indexed table, then the plain
/// four-number dialect. A dialect is chosen by the shape of its lines, and
/// only lines of the chosen dialect must parse; a stray unparseable line of
/// another dialect is ignored. When metadata lines exist the table is ignored
/// entirely. A file matching none of them is [`CodecError::NoStopsFound`].
pub fn parse_gradient(src: &str) -> Result<(Dialect, Vec<ColorStop>), CodecError> {
    let tokens = Lexer::new(src).tokenize();

    let dialect = [Dialect::Metadata, Dialect::Table, Dialect::Plain]
        .into_iter()
        .find(|d| tokens.iter().any(|t| t.token.dialect() == Some(*d)))
        .ok_or(CodecError::NoStopsFound)?;

    match dialect {
        Dialect::Metadata => {}
        Dialect::Table => {
            log::warn!("no editor metadata in .gradient file; rebuilding stops from the sample table")
        }
        Dialect::Plain => log::debug!("reading .gradient file as JWildfire plain format"),
    }

    let stops = collect(&tokens, dialect)?;
    if stops.len() < 2 {
        return Err(CodecError::malformed(format!(
            "a gradient needs at least 2 stops, found {}",
            stops.len()
        )));
    }

    Ok((dialect, sorted(stops)))
}

/// Stops of `dialect`, failing on the first of its lines that did not parse.
fn collect(tokens: &[TokenWithLine], dialect: Dialect) -> Result<Vec<ColorStop>, CodecError> {
    let mut stops = Vec::new();
    for t in tokens.iter().filter(|t| t.token.dialect() == Some(dialect)) {
        let stop = match t.token {
            Token::Metadata { position, color } => ColorStop::new(position, color),
            Token::TableEntry { index, color } => {
                ColorStop::new(index as f64 / (TABLE_SIZE - 1) as f64, color)
            }
            Token::Plain { position, color } => ColorStop::new(position as f64 / 255.0, color),
            Token::Invalid { ref detail, .. } => {
                return Err(CodecError::malformed_at(t.line, detail.clone()));
            }
            Token::Other => continue,
        };
        stops.push(stop);
    }
    Ok(stops)
}

/// Stable sort by position; file order breaks ties.
pub(crate) fn sorted(mut stops: Vec<ColorStop>) -> Vec<ColorStop> {
    stops.sort_by(|a, b| a.position.total_cmp(&b.position));
    stops
}
