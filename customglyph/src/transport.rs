//! Printable form of binary path programs, so that they can live in the
//! glyph table as ordinary string literals.
use crate::codec::encode_path;
use crate::error::Result;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

pub fn to_text(program: &[u8]) -> String {
    STANDARD.encode(program)
}

pub fn from_text(text: &str) -> Result<Vec<u8>> {
    Ok(STANDARD.decode(text)?)
}

/// Encode path text and return its printable form.
/// This is what the offline compiler writes into the glyph table.
pub fn compile_path(text: &str) -> Result<String> {
    Ok(to_text(&encode_path(text)?))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::Error;
    use k9::assert_equal as assert_eq;

    fn is_base64_alphabet(s: &str) -> bool {
        let body = s.trim_end_matches('=');
        s.len() - body.len() <= 2
            && body
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '+' || c == '/')
    }

    #[test]
    fn round_trip() {
        let empty: &[u8] = &[];
        assert_eq!(to_text(empty), "");
        assert_eq!(from_text("").unwrap(), Vec::<u8>::new());

        let all: Vec<u8> = (0..=255u8).collect();
        for len in 0..all.len() {
            let text = to_text(&all[..len]);
            assert!(is_base64_alphabet(&text), "{text}");
            assert_eq!(from_text(&text).unwrap(), all[..len].to_vec());
        }
    }

    #[test]
    fn compiled_programs() {
        let text = compile_path("M0,0 L1,1 Z").unwrap();
        assert!(is_base64_alphabet(&text));
        assert_eq!(from_text(&text).unwrap(), vec![0, 0, 0, 1, 255, 255, 8]);

        // right-pointing node connector from the git branch symbols
        assert_eq!(compile_path("M1,.5 L.85,.5").unwrap(), "AP+AAdmA");
    }

    #[test]
    fn corrupt() {
        assert!(matches!(from_text("A*=="), Err(Error::TransportDecode(_))));
        assert!(matches!(from_text("AAA"), Err(Error::TransportDecode(_))));
    }
}
