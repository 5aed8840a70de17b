//! Error types.
use crate::codec::Opcode;
use thiserror::Error;

/// Convenient return type for functions.
pub type Result<T> = std::result::Result<T, Error>;

/// Failures while encoding, decoding or replaying a glyph path.
///
/// Every variant is local to a single glyph; a host that receives one
/// should drop whatever it drew for that character and fall back to the
/// font's own outline.
#[derive(Debug, Error)]
pub enum Error {
    /// The leading character of an instruction is not a known opcode.
    #[error("malformed instruction {instruction:?}")]
    MalformedInstruction { instruction: String },

    /// The instruction supplied the wrong number of arguments.
    #[error("{opcode} takes {expected} argument(s) but {got} were given in {instruction:?}")]
    ArityMismatch {
        instruction: String,
        opcode: Opcode,
        expected: usize,
        got: usize,
    },

    /// An argument could not be parsed as a decimal number.
    #[error("invalid argument {argument:?} in {instruction:?}")]
    InvalidArgument {
        instruction: String,
        argument: String,
    },

    /// The program ended partway through an instruction.
    #[error(
        "program truncated at byte {offset}: {opcode} needs {needed} coordinate \
         byte(s) but only {available} remain"
    )]
    Truncated {
        offset: usize,
        opcode: Opcode,
        needed: usize,
        available: usize,
    },

    /// A byte in opcode position does not name an opcode.
    #[error("unknown opcode {byte} at byte {offset}")]
    UnknownOpcode { offset: usize, byte: u8 },

    /// The opcode can only be produced programmatically and has no text form.
    #[error("{opcode} has no textual form")]
    Unprintable { opcode: Opcode },

    /// The base64 literal holding a program is corrupt.
    #[error("transport decode: {0}")]
    TransportDecode(#[from] base64::DecodeError),

    /// A scaled path template could not be expanded.
    #[error("bad path template {template:?}: {reason}")]
    BadTemplate {
        template: &'static str,
        reason: String,
    },
}
