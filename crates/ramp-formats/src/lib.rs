//! Codecs for ramp gradients.
//!
//! Depends on `ramp-engine` for the stop model and the sampler only, so the
//! command-line tools and the editor share one implementation of every file
//! format.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`json`] | `[{"position", "color"}]` stop lists |
//! | [`jwf`] | JWildfire plain export (`JWFGradient` + `pos r g b`) |
//! | [`full`] | Full `.gradient`: editor header + 512-sample table |
//! | [`lexer`] / [`parser`] | `.gradient` reader for all three dialects |
//! | [`css`] | `linear-gradient(90deg, …)` export |
//! | [`png`] | horizontal strip image export |
//! | [`error`] | `CodecError`, `ErrorKind` |
//!
//! # Quick start
//!
//! ```rust
//! use ramp_engine::paint::{Color, ColorStop, InterpolationMode};
//! use ramp_formats::{decode, encode, ExportOptions, Format};
//!
//! let stops = vec![
//!     ColorStop::new(0.0, Color::new(255, 0, 0)),
//!     ColorStop::new(1.0, Color::new(0, 0, 255)),
//! ];
//! let bytes = encode(Format::FullGradient, &stops, &ExportOptions::default()).unwrap();
//! let text = String::from_utf8(bytes).unwrap();
//! assert_eq!(decode(&text, Format::FullGradient).unwrap(), stops);
//! ```

pub mod css;
pub mod error;
pub mod full;
pub mod json;
pub mod jwf;
pub mod lexer;
pub mod parser;
pub mod png;

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use ramp_engine::paint::{ColorStop, InterpolationMode};

pub use error::{CodecError, ErrorKind};
pub use parser::{parse_gradient, Dialect};

/// Number of entries in the sample table of a Full `.gradient` file.
pub const TABLE_SIZE: usize = 512;

// ── Format ────────────────────────────────────────────────────────────────

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Format {
    Json,
    /// JWildfire plain `.gradient` (write-only).
    Jwf,
    /// Full `.gradient` with editor metadata and sample table.
    FullGradient,
    Css,
    Png,
}

impl Format {
    pub const ALL: [Format; 5] =
        [Format::Json, Format::Jwf, Format::FullGradient, Format::Css, Format::Png];

    pub fn extension(self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Jwf | Format::FullGradient => "gradient",
            Format::Css => "css",
            Format::Png => "png",
        }
    }

    /// Whether [`decode`] accepts this format.
    pub fn is_readable(self) -> bool {
        matches!(self, Format::Json | Format::Jwf | Format::FullGradient)
    }

    /// Guesses from the file extension. `.gradient` maps to
    /// [`Format::FullGradient`], whose reader also accepts the other dialects.
    pub fn from_path(path: &Path) -> Option<Format> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Format::Json),
            "gradient" => Some(Format::FullGradient),
            "css" => Some(Format::Css),
            "png" => Some(Format::Png),
            _ => None,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Jwf => "jwf",
            Format::FullGradient => "full",
            Format::Css => "css",
            Format::Png => "png",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        match lower.as_str() {
            "gradient" => Ok(Format::FullGradient),
            _ => Format::ALL
                .into_iter()
                .find(|f| f.name() == lower)
                .ok_or_else(|| format!("unknown format {s:?} (expected json, jwf, full, css or png)")),
        }
    }
}

// ── Export options ────────────────────────────────────────────────────────

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ExportOptions {
    /// Mode used to sample the `.gradient` table and PNG pixels.
    pub mode: InterpolationMode,
    pub png_size: (u32, u32),
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self { mode: InterpolationMode::Linear, png_size: (1200, 200) }
    }
}

impl ExportOptions {
    pub fn mode(mut self, mode: InterpolationMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn png_size(mut self, width: u32, height: u32) -> Self {
        self.png_size = (width, height);
        self
    }
}

// ── Encode / decode ───────────────────────────────────────────────────────

/// Encodes `stops` (sorted by position) in `format`.
pub fn encode(
    format: Format,
    stops: &[ColorStop],
    opts: &ExportOptions,
) -> Result<Vec<u8>, CodecError> {
    Ok(match format {
        Format::Json => json::encode_json(stops)?.into_bytes(),
        Format::Jwf => jwf::encode_jwf(stops).into_bytes(),
        Format::FullGradient => full::encode_full(stops, opts.mode).into_bytes(),
        Format::Css => css::encode_css(stops).into_bytes(),
        Format::Png => {
            let (w, h) = opts.png_size;
            png::encode_png(stops, opts.mode, w, h)?
        }
    })
}

/// Decodes a complete, sorted stop list. Both `.gradient` formats use the
/// same multi-dialect reader.
pub fn decode(src: &str, format: Format) -> Result<Vec<ColorStop>, CodecError> {
    match format {
        Format::Json => json::decode_json(src),
        Format::Jwf | Format::FullGradient => parse_gradient(src).map(|(_, stops)| stops),
        Format::Css | Format::Png => {
            Err(CodecError::malformed(format!("{format} is an export-only format")))
        }
    }
}

// ── Files ─────────────────────────────────────────────────────────────────

/// Reads and decodes a gradient file.
///
/// The format comes from the extension. Files with any other extension are
/// read as JSON when they start with `[`, otherwise as `.gradient`.
pub fn load_file(path: &Path) -> Result<Vec<ColorStop>, CodecError> {
    let bytes = fs::read(path).map_err(|e| CodecError::io(path, e))?;
    // Undecodable text is bad content, not a failed read.
    let src = String::from_utf8(bytes)
        .map_err(|e| CodecError::malformed(format!("{}: {e}", path.display())))?;

    let format = match Format::from_path(path) {
        Some(f) if f.is_readable() => f,
        Some(f) => {
            return Err(CodecError::malformed(format!(
                "{}: cannot load a {f} file",
                path.display()
            )));
        }
        None if src.trim_start().starts_with('[') => Format::Json,
        None => Format::FullGradient,
    };

    let stops = decode(&src, format)?;
    log::info!("loaded {} stops from {}", stops.len(), path.display());
    Ok(stops)
}

/// Encodes and writes a file. The data goes to a sibling temp file that is
/// renamed over `path`, so a failed save leaves any existing file intact.
pub fn save_file(
    path: &Path,
    format: Format,
    stops: &[ColorStop],
    opts: &ExportOptions,
) -> Result<(), CodecError> {
    let bytes = encode(format, stops, opts)?;
    write_atomic(path, &bytes)?;
    log::info!("saved {} stops to {} as {format}", stops.len(), path.display());
    Ok(())
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), CodecError> {
    let tmp = temp_sibling(path);
    fs::write(&tmp, bytes).map_err(|e| CodecError::io(&tmp, e))?;
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(CodecError::io(path, e));
    }
    Ok(())
}

fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod file_tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use ramp_engine::paint::Color;

    use super::*;

    fn stop(position: f64, hex: &str) -> ColorStop {
        ColorStop::new(position, Color::from_hex(hex).unwrap())
    }

    fn defaults() -> Vec<ColorStop> {
        vec![stop(0.0, "#ff6b6b"), stop(0.5, "#4ecdc4"), stop(1.0, "#45b7d1")]
    }

    /// Unique path under the temp dir; removed on drop.
    struct TempPath(PathBuf);

    impl TempPath {
        fn new(name: &str) -> Self {
            static N: AtomicUsize = AtomicUsize::new(0);
            let n = N.fetch_add(1, Ordering::Relaxed);
            let dir = std::env::temp_dir();
            Self(dir.join(format!("ramp-formats-{}-{n}-{name}", std::process::id())))
        }
    }

    impl Drop for TempPath {
        fn drop(&mut self) {
            let _ = fs::remove_file(&self.0);
        }
    }

    #[test]
    fn format_names() {
        for f in Format::ALL {
            assert_eq!(f.to_string().parse::<Format>(), Ok(f));
        }
        assert_eq!("Gradient".parse::<Format>(), Ok(Format::FullGradient));
        assert!("svg".parse::<Format>().is_err());
    }

    #[test]
    fn format_from_path() {
        assert_eq!(Format::from_path(Path::new("a/b.JSON")), Some(Format::Json));
        assert_eq!(Format::from_path(Path::new("x.gradient")), Some(Format::FullGradient));
        assert_eq!(Format::from_path(Path::new("x.png")), Some(Format::Png));
        assert_eq!(Format::from_path(Path::new("x")), None);
    }

    #[test]
    fn save_and_load_each_readable_format() {
        for format in [Format::Json, Format::FullGradient] {
            let tmp = TempPath::new(&format!("round.{}", format.extension()));
            save_file(&tmp.0, format, &defaults(), &ExportOptions::default()).unwrap();
            assert_eq!(load_file(&tmp.0).unwrap(), defaults(), "{format}");
            assert!(!temp_sibling(&tmp.0).exists());
        }
    }

    #[test]
    fn jwf_loads_through_gradient_reader() {
        let tmp = TempPath::new("plain.gradient");
        save_file(&tmp.0, Format::Jwf, &defaults(), &ExportOptions::default()).unwrap();
        let back = load_file(&tmp.0).unwrap();
        assert_eq!(back.len(), 3);
        assert_eq!(back[0], stop(0.0, "#ff6b6b"));
        assert_eq!(back[2], stop(1.0, "#45b7d1"));
    }

    #[test]
    fn unknown_extension_is_sniffed() {
        let tmp = TempPath::new("stops.txt");
        fs::write(&tmp.0, json::encode_json(&defaults()).unwrap()).unwrap();
        assert_eq!(load_file(&tmp.0).unwrap(), defaults());

        fs::write(&tmp.0, jwf::encode_jwf(&defaults())).unwrap();
        assert_eq!(load_file(&tmp.0).unwrap().len(), 3);
    }

    #[test]
    fn missing_file_is_io_failure() {
        let tmp = TempPath::new("missing.json");
        let e = load_file(&tmp.0).unwrap_err();
        assert_eq!(e.kind(), ErrorKind::IoFailure);
    }

    #[test]
    fn non_utf8_file_is_malformed() {
        let tmp = TempPath::new("latin1.json");
        fs::write(&tmp.0, b"[\xff\xfe]").unwrap();
        let e = load_file(&tmp.0).unwrap_err();
        assert_eq!(e.kind(), ErrorKind::MalformedInput);
        assert!(e.to_string().contains("utf-8"), "{e}");
    }

    #[test]
    fn unrecognized_gradient_file() {
        let tmp = TempPath::new("empty.gradient");
        fs::write(&tmp.0, "gradient:\n title=\"nothing\" smooth=no\n").unwrap();
        assert_eq!(load_file(&tmp.0).unwrap_err().kind(), ErrorKind::NoStopsFound);
    }

    #[test]
    fn export_only_formats_cannot_load() {
        let tmp = TempPath::new("strip.css");
        save_file(&tmp.0, Format::Css, &defaults(), &ExportOptions::default()).unwrap();
        assert_eq!(load_file(&tmp.0).unwrap_err().kind(), ErrorKind::MalformedInput);
    }

    #[test]
    fn failed_save_keeps_existing_file() {
        let tmp = TempPath::new("keep.png");
        fs::write(&tmp.0, b"old").unwrap();
        let opts = ExportOptions::default().png_size(0, 10);
        let e = save_file(&tmp.0, Format::Png, &defaults(), &opts).unwrap_err();
        assert!(matches!(e, CodecError::InvalidSize { .. }));
        assert_eq!(fs::read(&tmp.0).unwrap(), b"old");
    }

    #[test]
    fn png_uses_export_size() {
        let opts = ExportOptions::default().png_size(40, 3);
        let bytes = encode(Format::Png, &defaults(), &opts).unwrap();
        let img = image::load_from_memory(&bytes).unwrap();
        assert_eq!((img.width(), img.height()), (40, 3));
    }
}
