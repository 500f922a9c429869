//! Subcommand handlers
//!
//! Each handler reads its inputs completely, builds the whole output in
//! memory, and only then writes it, so a failure never leaves a half-written
//! file behind.

use crate::config::FgenConfig;
use anyhow::Context;
use fgen_fortran::{generate_module, EmitOptions};
use fgen_header::parse_header_file;
use fgen_tools::{wrap_as_string_literal, ApiChecker, SchemaStrings, StringTableMode};
use std::fs;
use std::io::Write;
use std::path::Path;

pub struct GenerateArgs<'a> {
    pub header: &'a Path,
    pub output: Option<&'a Path>,
    pub module: Option<String>,
    pub line_budget: Option<usize>,
    pub stamp: bool,
}

pub fn generate(args: GenerateArgs<'_>, config: &FgenConfig) -> anyhow::Result<()> {
    let parsed = parse_header_file(args.header)?;

    let mut options = EmitOptions::for_header(args.header)
        .with_line_budget(args.line_budget.unwrap_or(config.generate.line_budget));
    if let Some(module) = args.module.or_else(|| config.generate.module.clone()) {
        options.module_name = module;
    }
    if args.stamp || config.generate.stamp {
        options = options.with_stamp(chrono::Local::now().format("%Y-%m-%d %H:%M").to_string());
    }

    let module = generate_module(&parsed, &options)
        .with_context(|| format!("cannot generate module for '{}'", args.header.display()))?;

    write_output(args.output, &module)
}

pub fn check_api(
    source: &Path,
    header: &Path,
    prefix: Option<String>,
    strict: bool,
    config: &FgenConfig,
) -> anyhow::Result<()> {
    let prefix = prefix.unwrap_or_else(|| config.check_api.prefix.clone());
    let checker = ApiChecker::new(&prefix)?;

    let source_text = read_input(source)?;
    let header_text = read_input(header)?;
    let report = checker.check(&source_text, &header_text);

    write_output(
        None,
        &report.render(&source.display().to_string(), &header.display().to_string()),
    )?;

    if strict && !report.is_clean() {
        anyhow::bail!(
            "{} mismatched, {} undeclared, {} undefined functions",
            report.mismatches.len(),
            report.undeclared.len(),
            report.undefined.len()
        );
    }
    Ok(())
}

pub fn extract_strings(schema: &Path, header_mode: bool, output: Option<&Path>) -> anyhow::Result<()> {
    let mode = if header_mode {
        StringTableMode::Header
    } else {
        StringTableMode::Source
    };
    let strings = SchemaStrings::collect(&read_input(schema)?);
    write_output(output, &strings.render(mode))
}

pub fn file_to_string(file: &Path, output: Option<&Path>) -> anyhow::Result<()> {
    write_output(output, &wrap_as_string_literal(&read_input(file)?))
}

fn read_input(path: &Path) -> anyhow::Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read '{}'", path.display()))
}

fn write_output(path: Option<&Path>, text: &str) -> anyhow::Result<()> {
    match path {
        Some(path) => {
            fs::write(path, text).with_context(|| format!("failed to write '{}'", path.display()))?;
            tracing::info!(path = %path.display(), bytes = text.len(), "wrote output");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(text.as_bytes()).context("failed to write to stdout")?;
            stdout.flush().context("failed to write to stdout")?;
        }
    }
    Ok(())
}
