//! Maps normalized cell coordinates to a single byte and back.

/// Quantize `value` to one of 256 levels.
/// Values outside of `0.0..=1.0` are clamped rather than rejected.
pub fn encode_byte(value: f32) -> u8 {
    if value.is_nan() {
        return 0;
    }
    (value.clamp(0., 1.) * 255.).round() as u8
}

pub fn decode_byte(byte: u8) -> f32 {
    byte as f32 / 255.
}

#[cfg(test)]
mod test {
    use super::*;
    use k9::assert_equal as assert_eq;

    #[test]
    fn known_levels() {
        assert_eq!(encode_byte(0.), 0);
        assert_eq!(encode_byte(0.5), 128);
        assert_eq!(encode_byte(0.25), 64);
        assert_eq!(encode_byte(0.75), 191);
        assert_eq!(encode_byte(1.), 255);
    }

    #[test]
    fn clamps() {
        assert_eq!(encode_byte(-0.5), 0);
        assert_eq!(encode_byte(1.5), 255);
        assert_eq!(encode_byte(f32::NAN), 0);
        assert_eq!(encode_byte(f32::INFINITY), 255);
    }

    #[test]
    fn error_bound() {
        for step in 0..=10_000 {
            let v = step as f32 / 10_000.;
            let err = (decode_byte(encode_byte(v)) - v).abs();
            assert!(err <= 1. / 510. + f32::EPSILON, "{v} -> {err}");
        }
    }

    #[test]
    fn every_level_is_stable() {
        for b in 0..=255u8 {
            assert_eq!(encode_byte(decode_byte(b)), b);
        }
    }
}
