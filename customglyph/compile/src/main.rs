//! Rewrites the literal `PathFunction` entries in the glyph table into
//! precompiled `PathBinary` entries, so that nothing needs to parse path
//! text at runtime.
use anyhow::Context;
use clap::Parser;
use regex::{Captures, Regex};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(about = "Compile custom glyph paths to base64 byte programs")]
struct Opt {
    /// The table source to rewrite
    #[arg(long, default_value = "customglyph/src/table.rs")]
    table: PathBuf,

    /// Where to write the result; defaults to rewriting the table in place
    #[arg(long)]
    output: Option<PathBuf>,

    /// Report what would change without writing anything
    #[arg(long)]
    dry_run: bool,

    /// Log each compiled path
    #[arg(long, short)]
    verbose: bool,
}

#[derive(Debug, Default, PartialEq)]
struct Stats {
    compiled: usize,
    failed: usize,
    text_bytes: usize,
    binary_bytes: usize,
}

impl Stats {
    fn saving(&self) -> f64 {
        if self.text_bytes == 0 {
            0.
        } else {
            100. * (1. - self.binary_bytes as f64 / self.text_bytes as f64)
        }
    }
}

const PATH_FUNCTION: &str = r#"DefinitionPart::PathFunction \{(\s*)path: PathSource::Literal\("([^"]*)"\),(\s*)stroke_width: (None|Some\([0-9.]+\)),(\s*)scale: (ScaleMode::\w+),(\s*)\}"#;

/// Rewrite every literal path function ahead of the test module.
/// Entries that fail to compile are logged and left alone.
fn compile_table(source: &str) -> anyhow::Result<(String, Stats)> {
    let re = Regex::new(PATH_FUNCTION)?;
    let split = source.find("#[cfg(test)]").unwrap_or(source.len());
    let (table, tests) = source.split_at(split);

    let mut stats = Stats::default();
    let compiled = re.replace_all(table, |caps: &Captures| {
        let path = &caps[2];
        match wezterm_customglyph::compile_path(path) {
            Ok(program) => {
                log::debug!("{path} -> {program}");
                stats.compiled += 1;
                stats.text_bytes += path.len();
                stats.binary_bytes += program.len();
                format!(
                    "DefinitionPart::PathBinary {{{}program: \"{}\",{}stroke_width: {},{}scale: {},{}}}",
                    &caps[1], program, &caps[3], &caps[4], &caps[5], &caps[6], &caps[7]
                )
            }
            Err(err) => {
                log::error!("leaving {path:?} as text: {err:#}");
                stats.failed += 1;
                caps[0].to_string()
            }
        }
    });

    Ok((format!("{compiled}{tests}"), stats))
}

fn main() -> anyhow::Result<()> {
    let opts = Opt::parse();

    let level = if opts.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let source = std::fs::read_to_string(&opts.table)
        .with_context(|| format!("reading {}", opts.table.display()))?;
    let (compiled, stats) = compile_table(&source)?;

    log::info!(
        "Compiled {} paths ({} failed): {} bytes of text became {} bytes of base64, {:.1}% smaller",
        stats.compiled,
        stats.failed,
        stats.text_bytes,
        stats.binary_bytes,
        stats.saving()
    );

    if opts.dry_run {
        return Ok(());
    }

    let output = opts.output.as_ref().unwrap_or(&opts.table);
    std::fs::write(output, compiled).with_context(|| format!("writing {}", output.display()))?;
    log::info!("wrote {}", output.display());
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use k9::assert_equal as assert_eq;

    #[test]
    fn rewrites_literal_paths() {
        let source = r#"
const NODE_LINE_RIGHT: DefinitionPart = DefinitionPart::PathFunction {
    path: PathSource::Literal("M1,.5 L.85,.5"),
    stroke_width: Some(1.0),
    scale: ScaleMode::Cell,
};
"#;
        let (compiled, stats) = compile_table(source).unwrap();
        assert_eq!(
            compiled,
            r#"
const NODE_LINE_RIGHT: DefinitionPart = DefinitionPart::PathBinary {
    program: "AP+AAdmA",
    stroke_width: Some(1.0),
    scale: ScaleMode::Cell,
};
"#
        );
        assert_eq!(stats.compiled, 1);
        assert_eq!(stats.failed, 0);
        assert_eq!(stats.text_bytes, 13);
        assert_eq!(stats.binary_bytes, 8);
    }

    #[test]
    fn leaves_other_parts_alone() {
        let source = r#"
            0x256d => GlyphDefinition::Single(DefinitionPart::PathFunction {
                path: PathSource::Scaled("M1,.5 C{x-},.5,.5,{y-},.5,1"),
                stroke_width: Some(1.0),
                scale: ScaleMode::Cell,
            }),
            0x1fb00..=0x1fb3b => GlyphDefinition::Single(DefinitionPart::PathFunction {
                path: PathSource::Generated(PathGenerator::Sextant(pattern)),
                stroke_width: None,
                scale: ScaleMode::Cell,
            }),
"#;
        let (compiled, stats) = compile_table(source).unwrap();
        assert_eq!(compiled, source);
        assert_eq!(stats, Stats::default());
    }

    #[test]
    fn bad_paths_stay_as_text() {
        let source = r#"DefinitionPart::PathFunction { path: PathSource::Literal("M1"), stroke_width: None, scale: ScaleMode::Cell, }"#;
        let (compiled, stats) = compile_table(source).unwrap();
        assert_eq!(compiled, source);
        assert_eq!(stats.failed, 1);
    }

    #[test]
    fn keeps_char_scale() {
        let source = r#"DefinitionPart::PathFunction {
    path: PathSource::Literal("M0,0 L1,1"),
    stroke_width: None,
    scale: ScaleMode::Char,
}"#;
        let (compiled, stats) = compile_table(source).unwrap();
        assert_eq!(
            compiled,
            r#"DefinitionPart::PathBinary {
    program: "AAAAAf//",
    stroke_width: None,
    scale: ScaleMode::Char,
}"#
        );
        assert_eq!(stats.compiled, 1);
    }

    #[test]
    fn test_module_is_untouched() {
        let source = r#"
#[cfg(test)]
const LINE: DefinitionPart = DefinitionPart::PathFunction {
    path: PathSource::Literal("M0,.5 L1,.5"),
    stroke_width: None,
    scale: ScaleMode::Cell,
};
"#;
        let (compiled, stats) = compile_table(source).unwrap();
        assert_eq!(compiled, source);
        assert_eq!(stats.compiled, 0);
    }
}
