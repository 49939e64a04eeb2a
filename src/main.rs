//! shapekernel CLI entrypoint.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use chrono::Local;
use clap::{Parser, Subcommand, ValueEnum};
use log::{error, info};

use shapekernel::{Shape, emit, prompt};

/// Emit a fixed cube or tetrahedron as Wavefront OBJ.
#[derive(Parser, Debug)]
#[command(name = "shapekernel", version, about = "Fixed-shape OBJ generator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
    /// Log verbosity level.
    #[arg(long, value_enum, global = true)]
    log_level: Option<LogLevel>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write one shape to an OBJ file.
    Emit {
        /// Shape id (1, 2) or name (cube, tetrahedron, sphere).
        #[arg(value_name = "SHAPE", allow_hyphen_values = true)]
        shape: String,
        /// Output file path; created or truncated.
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,
    },
    /// Pick a shape from a text prompt and write it to a timestamped file.
    Prompt {
        /// Free-form description, e.g. "a wooden box".
        #[arg(value_name = "TEXT")]
        text: String,
        /// Directory the model file is written to.
        #[arg(long, value_name = "DIR", default_value = ".")]
        out_dir: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    const fn as_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

fn resolve_log_level(cli: &Cli) -> String {
    if let Some(level) = cli.log_level {
        return level.as_str().to_string();
    }

    if let Ok(level) = std::env::var("RUST_LOG") {
        if !level.trim().is_empty() {
            return level;
        }
    }

    "info".to_string()
}

fn init_logger(level: &str) {
    let mut builder = env_logger::Builder::new();
    builder.target(env_logger::Target::Stderr);
    builder.filter_level(log::LevelFilter::Info);
    builder.parse_filters(level);

    if let Err(err) = builder.try_init() {
        eprintln!("Failed to initialize logger: {}", err);
    }
}

/// Numeric selectors go through untouched so unknown ids reach `emit`.
fn resolve_shape_id(shape: &str) -> Result<i32> {
    if let Ok(id) = shape.trim().parse::<i32>() {
        return Ok(id);
    }
    Ok(shape.parse::<Shape>()?.id())
}

fn run_emit(shape: &str, output: &Path) -> Result<()> {
    let shape_id = resolve_shape_id(shape)?;
    emit(shape_id, output)
        .with_context(|| format!("failed to generate {}", output.display()))?;
    println!("{}", output.display());
    Ok(())
}

fn run_prompt(text: &str, out_dir: &Path) -> Result<()> {
    let text = text.trim();
    if text.is_empty() {
        bail!("Please enter a text prompt.");
    }

    info!("Analyzing prompt: '{text}'...");
    let shape = prompt::classify_prompt(text)
        .context("Could not determine shape. Try 'cube' or 'sphere'.")?;

    let file_name = prompt::model_file_name(shape, Local::now().naive_local());
    let output = out_dir.join(&file_name);
    info!("Generating model... Target: {file_name}");

    emit(shape.id(), &output)
        .with_context(|| format!("failed to generate {}", output.display()))?;
    println!("File saved to: {}", output.display());
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(&resolve_log_level(&cli));

    let result = match &cli.command {
        Command::Emit { shape, output } => run_emit(shape, output),
        Command::Prompt { text, out_dir } => run_prompt(text, out_dir),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_selectors_pass_through_unchanged() {
        assert_eq!(resolve_shape_id("1").unwrap(), 1);
        assert_eq!(resolve_shape_id("-1").unwrap(), -1);
        assert_eq!(resolve_shape_id("42").unwrap(), 42);
    }

    #[test]
    fn named_selectors_resolve_to_ids() {
        assert_eq!(resolve_shape_id("cube").unwrap(), 1);
        assert_eq!(resolve_shape_id("Sphere").unwrap(), 2);
        assert!(resolve_shape_id("teapot").is_err());
    }

    #[test]
    fn cli_parses_emit_with_negative_id() {
        let cli = Cli::try_parse_from(["shapekernel", "emit", "-1", "out.obj"]).unwrap();
        match cli.command {
            Command::Emit { shape, output } => {
                assert_eq!(shape, "-1");
                assert_eq!(output, PathBuf::from("out.obj"));
            },
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn empty_prompt_is_refused() {
        assert!(run_prompt("   ", Path::new(".")).is_err());
    }

    #[test]
    fn emit_by_name_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("named.obj");

        run_emit("tetrahedron", &output).unwrap();

        assert_eq!(std::fs::read_to_string(&output).unwrap(), Shape::Tetrahedron.to_obj());
    }

    #[test]
    fn emit_unknown_id_fails_and_leaves_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("unknown.obj");

        assert!(run_emit("7", &output).is_err());

        assert!(output.exists());
        assert_eq!(std::fs::metadata(&output).unwrap().len(), 0);
    }

    #[test]
    fn emit_unknown_name_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("teapot.obj");

        assert!(run_emit("teapot", &output).is_err());
        assert!(!output.exists());
    }

    #[test]
    fn prompt_writes_timestamped_model_into_out_dir() {
        let dir = tempfile::tempdir().unwrap();

        run_prompt("  A wooden box  ", dir.path()).unwrap();

        let entries: Vec<PathBuf> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().path())
            .collect();
        assert_eq!(entries.len(), 1);

        let name = entries[0].file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("cube_model_"), "{name}");
        assert!(name.ends_with(".obj"), "{name}");
        // cube_model_ + YYYYmmdd_HHMMSS + .obj
        assert_eq!(name.len(), "cube_model_".len() + 15 + ".obj".len());
        assert_eq!(std::fs::read_to_string(&entries[0]).unwrap(), Shape::Cube.to_obj());
    }

    #[test]
    fn prompt_for_sphere_uses_sphere_sim_stem() {
        let dir = tempfile::tempdir().unwrap();

        run_prompt("a round ball", dir.path()).unwrap();

        let entry = std::fs::read_dir(dir.path()).unwrap().next().unwrap().unwrap();
        let name = entry.file_name().into_string().unwrap();
        assert!(name.starts_with("sphere_sim_model_"), "{name}");
        assert_eq!(std::fs::read_to_string(entry.path()).unwrap(), Shape::Tetrahedron.to_obj());
    }

    #[test]
    fn undetermined_prompt_is_refused_without_writing() {
        let dir = tempfile::tempdir().unwrap();

        assert!(run_prompt("a teapot", dir.path()).is_err());

        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
