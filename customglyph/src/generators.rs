//! Path text for the large parametric glyph families.
use crate::definition::ScaleParams;
use crate::error::{Error, Result};

/// Top edge and height of the three sextant rows, in cell heights.
/// The middle row is a little shorter so that rows line up with the
/// eighths used by the block elements.
const SEXTANT_ROWS: [(f32, f32); 3] = [(0., 3. / 8.), (3. / 8., 2. / 8.), (5. / 8., 3. / 8.)];

/// Path for a 2x3 mosaic.
/// Bit `2 * row` paints the left half of a row and bit `2 * row + 1` the
/// right half; a row with both set becomes a single rectangle.
pub fn sextant(pattern: u8) -> String {
    let mut parts = vec![];
    for (row, (y, h)) in SEXTANT_ROWS.iter().enumerate() {
        let left = pattern & (1 << (row * 2)) != 0;
        let right = pattern & (1 << (row * 2 + 1)) != 0;
        let (x0, x1) = match (left, right) {
            (true, true) => (0., 1.),
            (true, false) => (0., 0.5),
            (false, true) => (0.5, 1.),
            (false, false) => continue,
        };
        let bottom = y + h;
        parts.push(format!(
            "M{x0},{y} L{x1},{y} L{x1},{bottom} L{x0},{bottom} Z"
        ));
    }
    parts.join(" ")
}

/// The mosaic pattern for U+1FB00..=U+1FB3B.
/// The block skips the two patterns that already exist as the left and
/// right half blocks (0b010101 and 0b101010), as well as empty and full.
pub fn sextant_pattern(c: char) -> Option<u8> {
    let index = (c as u32).checked_sub(0x1fb00)?;
    if index > 0x3b {
        return None;
    }
    let mut pattern = index as u8 + 1;
    if pattern >= 0b010101 {
        pattern += 1;
    }
    if pattern >= 0b101010 {
        pattern += 1;
    }
    Some(pattern)
}

bitflags::bitflags! {
    //   ╭─a─╮
    //   f   b
    //   ├─g─┤
    //   e   c
    //   ╰─d─╯
    pub struct Segments: u8 {
        const A = 1 << 6;
        const B = 1 << 5;
        const C = 1 << 4;
        const D = 1 << 3;
        const E = 1 << 2;
        const F = 1 << 1;
        const G = 1 << 0;
    }
}

const DIGITS: [u8; 10] = [
    0b1111110, 0b0110000, 0b1101101, 0b1111001, 0b0110011, 0b1011011, 0b1011111, 0b1110010,
    0b1111111, 0b1111011,
];

/// The segment pattern for the segmented digits U+1FBF0..=U+1FBF9.
pub fn segmented_digit_pattern(c: char) -> Option<u8> {
    let index = (c as u32).checked_sub(0x1fbf0)?;
    DIGITS.get(index as usize).copied()
}

/// Segment thickness across the cell width
const SEG_W: f32 = 0.15;
/// Segment thickness across the cell height; cells are roughly twice as
/// tall as they are wide so this is about half of `SEG_W`.
const SEG_H: f32 = 0.075;
const PAD_X: f32 = 0.05;
const PAD_Y: f32 = 0.175;
const GAP: f32 = 0.015;

/// Path for a seven segment digit. Each lit segment is a hexagon with
/// pointed ends, emitted in the order a, b, c, d, e, f, g.
pub fn segmented_digit(pattern: u8) -> String {
    let segments = Segments::from_bits_truncate(pattern);
    let left = PAD_X;
    let right = 1. - PAD_X;
    let top = PAD_Y;
    let bottom = 1. - PAD_Y;
    let mid = 0.5;

    let horizontal = |y1: f32, y2: f32, y3: f32| {
        let x1 = left + SEG_W + GAP;
        let x2 = right - SEG_W - GAP;
        let taper = SEG_W / 2.;
        format!(
            "M{x1},{y2} L{},{y1} L{},{y1} L{x2},{y2} L{},{y3} L{},{y3} Z",
            x1 + taper,
            x2 - taper,
            x2 - taper,
            x1 + taper,
        )
    };
    let vertical = |x1: f32, x2: f32, x3: f32, y1: f32, y2: f32| {
        let taper = SEG_H / 2.;
        format!(
            "M{x2},{y1} L{x3},{} L{x3},{} L{x2},{y2} L{x1},{} L{x1},{} Z",
            y1 + taper,
            y2 - taper,
            y2 - taper,
            y1 + taper,
        )
    };
    let upper = (top + SEG_H + GAP, mid - GAP);
    let lower = (mid + GAP, bottom - SEG_H - GAP);
    let right_column = (right - SEG_W, right - SEG_W / 2., right);
    let left_column = (left, left + SEG_W / 2., left + SEG_W);

    let mut parts = vec![];
    if segments.contains(Segments::A) {
        parts.push(horizontal(top, top + SEG_H / 2., top + SEG_H));
    }
    if segments.contains(Segments::B) {
        let (x1, x2, x3) = right_column;
        parts.push(vertical(x1, x2, x3, upper.0, upper.1));
    }
    if segments.contains(Segments::C) {
        let (x1, x2, x3) = right_column;
        parts.push(vertical(x1, x2, x3, lower.0, lower.1));
    }
    if segments.contains(Segments::D) {
        parts.push(horizontal(bottom - SEG_H, bottom - SEG_H / 2., bottom));
    }
    if segments.contains(Segments::E) {
        let (x1, x2, x3) = left_column;
        parts.push(vertical(x1, x2, x3, lower.0, lower.1));
    }
    if segments.contains(Segments::F) {
        let (x1, x2, x3) = left_column;
        parts.push(vertical(x1, x2, x3, upper.0, upper.1));
    }
    if segments.contains(Segments::G) {
        parts.push(horizontal(mid - SEG_H / 2., mid, mid + SEG_H / 2.));
    }
    parts.join(" ")
}

/// Substitute the scale placeholders in `template`:
///
/// * `{x-}` / `{x+}`: the two rails of a vertical double line
/// * `{y-}` / `{y+}`: the two rails of a horizontal double line
/// * `{r-}` / `{r+}`: where the straight part of a rounded corner ends
pub fn expand_template(template: &'static str, params: ScaleParams) -> Result<String> {
    let corner = params.yp / ScaleParams::DOUBLE_LINE_OFFSET * 0.5;
    let mut result = String::with_capacity(template.len() + 32);
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        result.push_str(&rest[..open]);
        let close = rest[open..].find('}').ok_or_else(|| Error::BadTemplate {
            template,
            reason: "unterminated placeholder".to_string(),
        })?;
        let key = &rest[open + 1..open + close];
        let value = match key {
            "x-" => 0.5 - params.xp,
            "x+" => 0.5 + params.xp,
            "y-" => 0.5 - params.yp,
            "y+" => 0.5 + params.yp,
            "r-" => 0.5 - corner,
            "r+" => 0.5 + corner,
            _ => {
                return Err(Error::BadTemplate {
                    template,
                    reason: format!("unknown placeholder {key:?}"),
                })
            }
        };
        result.push_str(&value.to_string());
        rest = &rest[open + close + 1..];
    }
    result.push_str(rest);
    Ok(result)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::codec::{encode_path, instructions, Opcode};
    use k9::assert_equal as assert_eq;

    #[test]
    fn sextant_rows() {
        assert_eq!(sextant(0), "");
        assert_eq!(sextant(0b000001), "M0,0 L0.5,0 L0.5,0.375 L0,0.375 Z");
        assert_eq!(sextant(0b000011), "M0,0 L1,0 L1,0.375 L0,0.375 Z");
        assert_eq!(sextant(0b001000), "M0.5,0.375 L1,0.375 L1,0.625 L0.5,0.625 Z");
        assert_eq!(sextant(0b110000), "M0,0.625 L1,0.625 L1,1 L0,1 Z");
        // one rectangle per lit row
        assert_eq!(sextant(0b111111).split('Z').filter(|s| !s.trim().is_empty()).count(), 3);
        assert_eq!(sextant(0b100100).split('Z').filter(|s| !s.trim().is_empty()).count(), 2);
    }

    #[test]
    fn sextant_code_points() {
        assert_eq!(sextant_pattern('\u{1fb00}'), Some(1));
        assert_eq!(sextant_pattern('\u{1fb13}'), Some(20));
        assert_eq!(sextant_pattern('\u{1fb14}'), Some(22));
        assert_eq!(sextant_pattern('\u{1fb27}'), Some(41));
        assert_eq!(sextant_pattern('\u{1fb28}'), Some(43));
        assert_eq!(sextant_pattern('\u{1fb3b}'), Some(62));
        assert_eq!(sextant_pattern('\u{1fb3c}'), None);
        assert_eq!(sextant_pattern('a'), None);

        let patterns: Vec<u8> = (0x1fb00..=0x1fb3b)
            .filter_map(char::from_u32)
            .filter_map(sextant_pattern)
            .collect();
        assert_eq!(patterns.len(), 60);
        assert!(!patterns.contains(&21));
        assert!(!patterns.contains(&42));
    }

    #[test]
    fn every_sextant_encodes() {
        for pattern in 1..63u8 {
            let program = encode_path(&sextant(pattern)).unwrap();
            let rows = instructions(&program)
                .filter(|i| i.as_ref().unwrap().opcode() == Opcode::Close)
                .count();
            assert!(rows >= 1 && rows <= 3);
        }
    }

    #[test]
    fn digits() {
        assert_eq!(segmented_digit(0), "");
        assert_eq!(segmented_digit_pattern('\u{1fbf0}'), Some(0b1111110));
        assert_eq!(segmented_digit_pattern('\u{1fbf8}'), Some(0b1111111));
        assert_eq!(segmented_digit_pattern('\u{1fbfa}'), None);

        // "8" lights every segment, "1" only b and c
        let eight = segmented_digit(0b1111111);
        assert_eq!(eight.matches('Z').count(), 7);
        let one = segmented_digit(0b0110000);
        assert_eq!(one.matches('Z').count(), 2);
        let program = encode_path(&one).unwrap();
        let first = instructions(&program).next().unwrap().unwrap();
        // the top of segment b, centered on the right column
        assert_eq!(first.coords(), &[223u8, 68][..]);

        for c in 0x1fbf0..=0x1fbf9 {
            let pattern = segmented_digit_pattern(char::from_u32(c).unwrap()).unwrap();
            let text = segmented_digit(pattern);
            assert_eq!(text.matches('Z').count(), pattern.count_ones() as usize);
            encode_path(&text).unwrap();
        }
    }

    #[test]
    fn segment_a_geometry() {
        let a = segmented_digit(Segments::A.bits());
        let program = encode_path(&a).unwrap();
        let first = instructions(&program).next().unwrap().unwrap();
        assert_eq!(first.opcode(), Opcode::MoveTo);
        // x1 = pad + segment width + gap, y2 = middle of the top segment
        assert_eq!(first.coords(), &[55u8, 54][..]);
    }

    #[test]
    fn templates() {
        let params = ScaleParams { xp: 0.25, yp: 0.125 };
        assert_eq!(
            expand_template("M0,{y-} L1,{y+}", params).unwrap(),
            "M0,0.375 L1,0.625"
        );
        assert_eq!(
            expand_template("M{x-},0 L{x+},1", params).unwrap(),
            "M0.25,0 L0.75,1"
        );
        let square = ScaleParams { xp: 0.15, yp: 0.15 };
        assert_eq!(
            expand_template("M.5,1 L.5,{r+} M.5,0 L.5,{r-}", square).unwrap(),
            "M.5,1 L.5,1 M.5,0 L.5,0"
        );
        assert_eq!(expand_template("Z", params).unwrap(), "Z");
        assert!(matches!(
            expand_template("M{q},0", params),
            Err(Error::BadTemplate { .. })
        ));
        assert!(matches!(
            expand_template("M{x-,0", params),
            Err(Error::BadTemplate { .. })
        ));
    }
}
