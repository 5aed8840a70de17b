use wezterm_dynamic::{FromDynamic, ToDynamic};

/// Controls how the custom glyphs are used and drawn.
#[derive(Debug, Clone, PartialEq, FromDynamic, ToDynamic)]
pub struct GlyphConfig {
    /// When false, every character is left to the font
    #[dynamic(default = "default_true")]
    pub custom_block_glyphs: bool,
    #[dynamic(default = "default_true")]
    pub anti_alias_custom_block_glyphs: bool,
    /// Multiplier applied to the width of every stroked line
    #[dynamic(default = "default_one_point_oh")]
    pub stroke_scale: f32,
}

impl Default for GlyphConfig {
    fn default() -> Self {
        Self {
            custom_block_glyphs: default_true(),
            anti_alias_custom_block_glyphs: default_true(),
            stroke_scale: default_one_point_oh(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_one_point_oh() -> f32 {
    1.0
}

#[cfg(test)]
mod test {
    use super::*;
    use k9::assert_equal as assert_eq;
    use wezterm_dynamic::{Object, Value};

    #[test]
    fn defaults() {
        let config =
            GlyphConfig::from_dynamic(&Value::Object(Object::default()), Default::default())
                .unwrap();
        assert_eq!(config, GlyphConfig::default());
        assert!(config.custom_block_glyphs);
        assert!(config.anti_alias_custom_block_glyphs);
        assert_eq!(config.stroke_scale, 1.0);
    }

    #[test]
    fn overrides() {
        let value = Value::Object(
            vec![
                ("anti_alias_custom_block_glyphs".to_dynamic(), false.to_dynamic()),
                ("stroke_scale".to_dynamic(), 2.0f64.to_dynamic()),
            ]
            .into_iter()
            .collect(),
        );
        let config = GlyphConfig::from_dynamic(&value, Default::default()).unwrap();
        assert!(config.custom_block_glyphs);
        assert!(!config.anti_alias_custom_block_glyphs);
        assert_eq!(config.stroke_scale, 2.0);

        let round_trip =
            GlyphConfig::from_dynamic(&config.to_dynamic(), Default::default()).unwrap();
        assert_eq!(round_trip, config);
    }
}
