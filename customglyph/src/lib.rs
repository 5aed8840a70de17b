//! # Custom glyphs
//!
//! Box drawing, block elements, braille, powerline separators, git branch
//! symbols and the legacy computing mosaics all need to line up exactly
//! with the cell grid, so rather than trusting the font we draw them
//! ourselves from small vector descriptions.
//!
//! * [`table::lookup`] maps a character to a [`GlyphDefinition`], an
//!   ordered list of parts to paint.
//! * Path parts are written in a compact SVG-like text form which
//!   [`codec`] compiles to a byte program and [`transport`] wraps as
//!   base64 so that it can live in a string literal.
//! * [`interpret`] replays a byte program against any [`PathSink`],
//!   converting elliptical arcs along the way.
//! * [`render`] walks the parts of a definition and drives a
//!   [`GlyphCanvas`]; [`raster`] provides one backed by `tiny-skia`.
//!
//! The `customglyph-compile` tool rewrites the literal paths in the table
//! into their binary form ahead of time, using the same encoder.

pub mod arc;
pub mod codec;
pub mod config;
pub mod definition;
pub mod error;
pub mod generators;
pub mod interpret;
pub mod quantize;
pub mod raster;
pub mod recording;
pub mod render;
pub mod table;
pub mod transport;

pub type PointF = euclid::default::Point2D<f32>;
pub type SizeF = euclid::default::Size2D<f32>;
pub type RectF = euclid::default::Rect<f32>;

pub use codec::{encode_path, Instruction, Opcode};
pub use config::GlyphConfig;
pub use definition::{DefinitionPart, GlyphDefinition};
pub use error::{Error, Result};
pub use interpret::{execute, PathSink};
pub use render::{paint, paint_char, CellMetrics, GlyphCanvas, Ink};
pub use table::lookup;
pub use transport::{compile_path, from_text, to_text};
