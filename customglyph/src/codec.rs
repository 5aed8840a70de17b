//! The binary path format.
//!
//! A program is a flat byte sequence with no header: each instruction is a
//! single opcode byte followed by exactly [`Opcode::arity`] coordinate bytes,
//! each produced by [`crate::quantize::encode_byte`]. The end of the buffer
//! is the end of the program.
//!
//! The textual form accepted by [`encode_path`] is the compact notation
//! used throughout the glyph table:
//!
//! ```text
//! M0,.5 L1,.5 M.5,0 L.5,1
//! ```
//!
//! Instructions are separated by whitespace; the first character selects the
//! operation and any remaining characters are comma separated numbers.
use crate::error::{Error, Result};
use crate::quantize::{decode_byte, encode_byte};

/// The largest number of coordinate bytes any opcode carries (`A`).
pub const MAX_ARITY: usize = 7;

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[repr(u8)]
pub enum Opcode {
    /// `M x,y`
    MoveTo = 0,
    /// `L x,y`
    LineTo = 1,
    /// `H x`
    HorizontalTo = 2,
    /// `V y`
    VerticalTo = 3,
    /// `C x1,y1,x2,y2,x,y`
    CubicTo = 4,
    /// `Q x1,y1,x,y`
    QuadTo = 5,
    /// `T x,y`; the control point is reflected from the previous curve
    SmoothQuadTo = 6,
    /// `A rx,ry,rotation,large_arc,sweep,x,y`
    ArcTo = 7,
    /// `Z`
    Close = 8,
    SetFill = 9,
    SetStroke = 10,
}

impl Opcode {
    pub const fn arity(self) -> usize {
        match self {
            Self::MoveTo | Self::LineTo | Self::SmoothQuadTo => 2,
            Self::HorizontalTo | Self::VerticalTo => 1,
            Self::CubicTo => 6,
            Self::QuadTo => 4,
            Self::ArcTo => 7,
            Self::Close | Self::SetFill | Self::SetStroke => 0,
        }
    }

    /// The character that selects this opcode in path text.
    /// `SetFill` and `SetStroke` are only ever emitted programmatically.
    pub const fn mnemonic(self) -> Option<char> {
        Some(match self {
            Self::MoveTo => 'M',
            Self::LineTo => 'L',
            Self::HorizontalTo => 'H',
            Self::VerticalTo => 'V',
            Self::CubicTo => 'C',
            Self::QuadTo => 'Q',
            Self::SmoothQuadTo => 'T',
            Self::ArcTo => 'A',
            Self::Close => 'Z',
            Self::SetFill | Self::SetStroke => return None,
        })
    }

    pub fn from_mnemonic(c: char) -> Option<Self> {
        Some(match c {
            'M' => Self::MoveTo,
            'L' => Self::LineTo,
            'H' => Self::HorizontalTo,
            'V' => Self::VerticalTo,
            'C' => Self::CubicTo,
            'Q' => Self::QuadTo,
            'T' => Self::SmoothQuadTo,
            'A' => Self::ArcTo,
            'Z' => Self::Close,
            _ => return None,
        })
    }
}

impl TryFrom<u8> for Opcode {
    type Error = u8;

    fn try_from(byte: u8) -> std::result::Result<Self, u8> {
        Ok(match byte {
            0 => Self::MoveTo,
            1 => Self::LineTo,
            2 => Self::HorizontalTo,
            3 => Self::VerticalTo,
            4 => Self::CubicTo,
            5 => Self::QuadTo,
            6 => Self::SmoothQuadTo,
            7 => Self::ArcTo,
            8 => Self::Close,
            9 => Self::SetFill,
            10 => Self::SetStroke,
            _ => return Err(byte),
        })
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.mnemonic() {
            Some(c) => write!(fmt, "{c}"),
            None if *self == Self::SetFill => write!(fmt, "SET_FILL"),
            None => write!(fmt, "SET_STROKE"),
        }
    }
}

/// One decoded instruction: an opcode and its quantized coordinates.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Instruction {
    opcode: Opcode,
    args: [u8; MAX_ARITY],
}

impl Instruction {
    /// Build an instruction from already quantized coordinate bytes.
    pub fn new(opcode: Opcode, coords: &[u8]) -> Result<Self> {
        if coords.len() != opcode.arity() {
            return Err(Error::ArityMismatch {
                instruction: format!("{opcode}{coords:?}"),
                opcode,
                expected: opcode.arity(),
                got: coords.len(),
            });
        }
        let mut args = [0u8; MAX_ARITY];
        args[..coords.len()].copy_from_slice(coords);
        Ok(Self { opcode, args })
    }

    pub fn set_fill() -> Self {
        Self {
            opcode: Opcode::SetFill,
            args: [0; MAX_ARITY],
        }
    }

    pub fn set_stroke() -> Self {
        Self {
            opcode: Opcode::SetStroke,
            args: [0; MAX_ARITY],
        }
    }

    /// Parse a single textual instruction such as `C.5,0,1,.25,1,.5`.
    pub fn parse(text: &str) -> Result<Self> {
        let mut chars = text.chars();
        let opcode = chars
            .next()
            .and_then(Opcode::from_mnemonic)
            .ok_or_else(|| Error::MalformedInstruction {
                instruction: text.to_string(),
            })?;

        let rest = chars.as_str();
        let mut args = [0u8; MAX_ARITY];
        let mut got = 0;
        if !rest.is_empty() {
            for argument in rest.split(',') {
                let value: f32 =
                    argument
                        .trim()
                        .parse()
                        .map_err(|_| Error::InvalidArgument {
                            instruction: text.to_string(),
                            argument: argument.to_string(),
                        })?;
                if got < MAX_ARITY {
                    args[got] = encode_byte(value);
                }
                got += 1;
            }
        }

        if got != opcode.arity() {
            return Err(Error::ArityMismatch {
                instruction: text.to_string(),
                opcode,
                expected: opcode.arity(),
                got,
            });
        }

        Ok(Self { opcode, args })
    }

    pub fn opcode(&self) -> Opcode {
        self.opcode
    }

    /// The raw coordinate bytes
    pub fn coords(&self) -> &[u8] {
        &self.args[..self.opcode.arity()]
    }

    /// The coordinates decoded back into the `0.0..=1.0` range
    pub fn values(&self) -> impl Iterator<Item = f32> + '_ {
        self.coords().iter().copied().map(decode_byte)
    }

    pub fn write_to(&self, program: &mut Vec<u8>) {
        program.push(self.opcode as u8);
        program.extend_from_slice(self.coords());
    }
}

impl std::fmt::Display for Instruction {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(fmt, "{}", self.opcode)?;
        for (idx, value) in self.values().enumerate() {
            if idx > 0 {
                write!(fmt, ",")?;
            }
            write!(fmt, "{value}")?;
        }
        Ok(())
    }
}

/// Encode path text into a binary program.
///
/// Encoding stops at the first bad instruction; no partial program is
/// returned.
pub fn encode_path(text: &str) -> Result<Vec<u8>> {
    let mut program = vec![];
    for fragment in text.split_whitespace() {
        Instruction::parse(fragment)?.write_to(&mut program);
    }
    Ok(program)
}

/// Concatenate instructions into a program. This is the only way to produce
/// `SetFill` and `SetStroke`.
pub fn encode_program(instructions: &[Instruction]) -> Vec<u8> {
    let mut program = vec![];
    for instruction in instructions {
        instruction.write_to(&mut program);
    }
    program
}

/// Stream the instructions of a binary program.
pub fn instructions(program: &[u8]) -> Instructions<'_> {
    Instructions {
        program,
        offset: 0,
        failed: false,
    }
}

/// Iterator returned by [`instructions`].
///
/// After yielding an error the iterator is exhausted; it never reads past
/// the end of the program.
pub struct Instructions<'a> {
    program: &'a [u8],
    offset: usize,
    failed: bool,
}

impl<'a> Iterator for Instructions<'a> {
    type Item = Result<Instruction>;

    fn next(&mut self) -> Option<Result<Instruction>> {
        if self.failed {
            return None;
        }
        let offset = self.offset;
        let byte = *self.program.get(offset)?;

        let opcode = match Opcode::try_from(byte) {
            Ok(opcode) => opcode,
            Err(byte) => {
                self.failed = true;
                return Some(Err(Error::UnknownOpcode { offset, byte }));
            }
        };

        let start = offset + 1;
        let needed = opcode.arity();
        let available = self.program.len() - start;
        if available < needed {
            self.failed = true;
            return Some(Err(Error::Truncated {
                offset,
                opcode,
                needed,
                available,
            }));
        }

        let mut args = [0u8; MAX_ARITY];
        args[..needed].copy_from_slice(&self.program[start..start + needed]);
        self.offset = start + needed;
        Some(Ok(Instruction { opcode, args }))
    }
}

/// Render a binary program back into path text.
///
/// Feeding the result to [`encode_path`] reproduces the same bytes, since
/// every quantization level survives the trip through `f32`.
pub fn disassemble(program: &[u8]) -> Result<String> {
    let mut text = String::new();
    for instruction in instructions(program) {
        let instruction = instruction?;
        if instruction.opcode.mnemonic().is_none() {
            return Err(Error::Unprintable {
                opcode: instruction.opcode,
            });
        }
        if !text.is_empty() {
            text.push(' ');
        }
        text.push_str(&instruction.to_string());
    }
    Ok(text)
}

#[cfg(test)]
mod test {
    use super::*;
    use k9::assert_equal as assert_eq;

    #[test]
    fn single_instructions() {
        assert_eq!(encode_path("M0.5,0.5").unwrap(), vec![0, 128, 128]);
        assert_eq!(encode_path("L1,0").unwrap(), vec![1, 255, 0]);
        assert_eq!(encode_path("H0.25").unwrap(), vec![2, 64]);
        assert_eq!(encode_path("V0.75").unwrap(), vec![3, 191]);
        assert_eq!(encode_path("Z").unwrap(), vec![8]);
        assert_eq!(encode_path("Q0.5,0,1,0.5").unwrap(), vec![5, 128, 0, 255, 128]);
        assert_eq!(encode_path("T1,1").unwrap(), vec![6, 255, 255]);
        assert_eq!(encode_path("C0,0,.5,.5,1,1").unwrap().len(), 7);
        assert_eq!(encode_path("A.5,.5,0,0,1,1,1").unwrap().len(), 8);
    }

    #[test]
    fn sequence() {
        let program = encode_path("M0,0 L1,1 Z").unwrap();
        assert_eq!(program.len(), 7);
        assert_eq!(program[0], Opcode::MoveTo as u8);
        assert_eq!(program[3], Opcode::LineTo as u8);
        assert_eq!(program[6], Opcode::Close as u8);
    }

    #[test]
    fn whitespace() {
        assert_eq!(
            encode_path("  M.5,0\tL.5,1\n").unwrap(),
            encode_path("M.5,0 L.5,1").unwrap()
        );
        assert_eq!(encode_path("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn arity() {
        match encode_path("Q0.5,0") {
            Err(Error::ArityMismatch {
                opcode,
                expected,
                got,
                instruction,
            }) => {
                assert_eq!(opcode, Opcode::QuadTo);
                assert_eq!(expected, 4);
                assert_eq!(got, 2);
                assert_eq!(instruction, "Q0.5,0");
            }
            other => panic!("unexpected {other:?}"),
        }
        assert!(matches!(
            encode_path("M"),
            Err(Error::ArityMismatch { got: 0, .. })
        ));
        assert!(matches!(
            encode_path("Z1"),
            Err(Error::ArityMismatch { expected: 0, got: 1, .. })
        ));
        assert!(matches!(
            encode_path("A1,1,1,1,1,1,1,1"),
            Err(Error::ArityMismatch { expected: 7, got: 8, .. })
        ));
    }

    #[test]
    fn malformed() {
        match encode_path("M0,0 X1,1") {
            Err(Error::MalformedInstruction { instruction }) => {
                assert_eq!(instruction, "X1,1");
            }
            other => panic!("unexpected {other:?}"),
        }
        assert!(matches!(
            encode_path("m0,0"),
            Err(Error::MalformedInstruction { .. })
        ));
        assert!(matches!(
            encode_path("L0,zero"),
            Err(Error::InvalidArgument { .. })
        ));
        assert!(matches!(
            encode_path("L0,,1"),
            Err(Error::InvalidArgument { .. })
        ));
    }

    #[test]
    fn opcodes() {
        for byte in 0..=10u8 {
            let opcode = Opcode::try_from(byte).unwrap();
            assert_eq!(opcode as u8, byte);
            if let Some(c) = opcode.mnemonic() {
                assert_eq!(Opcode::from_mnemonic(c), Some(opcode));
            }
        }
        assert_eq!(Opcode::try_from(11), Err(11));
        assert_eq!(Opcode::SetFill.to_string(), "SET_FILL");
    }

    #[test]
    fn round_trip() {
        let text = "M.5,0 L.5,.5 C.5,.5,.5,.5,1,.5 Q0,0,1,1 T.25,.75 H.1 V.9 A.5,.5,0,1,0,1,1 Z";
        let program = encode_path(text).unwrap();
        let disassembled = disassemble(&program).unwrap();
        assert_eq!(encode_path(&disassembled).unwrap(), program);
    }

    #[test]
    fn streaming() {
        let program = encode_path("M0,0 L1,1 Z").unwrap();
        let opcodes: Vec<Opcode> = instructions(&program)
            .map(|i| i.unwrap().opcode())
            .collect();
        assert_eq!(opcodes, vec![Opcode::MoveTo, Opcode::LineTo, Opcode::Close]);
    }

    #[test]
    fn truncated() {
        let mut iter = instructions(&[0, 128, 128, 4, 1, 2]);
        assert!(iter.next().unwrap().is_ok());
        match iter.next() {
            Some(Err(Error::Truncated {
                offset,
                opcode,
                needed,
                available,
            })) => {
                assert_eq!(offset, 3);
                assert_eq!(opcode, Opcode::CubicTo);
                assert_eq!(needed, 6);
                assert_eq!(available, 2);
            }
            other => panic!("unexpected {other:?}"),
        }
        assert!(iter.next().is_none());
    }

    #[test]
    fn unknown_opcode() {
        let mut iter = instructions(&[8, 42, 0, 0]);
        assert!(iter.next().unwrap().is_ok());
        assert!(matches!(
            iter.next(),
            Some(Err(Error::UnknownOpcode { offset: 1, byte: 42 }))
        ));
        assert!(iter.next().is_none());
    }

    #[test]
    fn programmatic() {
        let program = encode_program(&[
            Instruction::set_stroke(),
            Instruction::new(Opcode::MoveTo, &[0, 255]).unwrap(),
            Instruction::set_fill(),
        ]);
        assert_eq!(program, vec![10, 0, 0, 255, 9]);
        assert!(matches!(
            disassemble(&program),
            Err(Error::Unprintable {
                opcode: Opcode::SetStroke
            })
        ));
        assert!(Instruction::new(Opcode::LineTo, &[1]).is_err());
    }
}
