use std::path::PathBuf;

use serde::Serialize;

use crate::compat::{ConcatCompatibility, check_concatenation};
use crate::layout::{LayoutError, compute_layout};
use crate::models::enums::TableKind;
use crate::models::structs::{LayoutInput, Table, TableLayout};

pub const USAGE: &str = "composer_layout <input.json> [--output <file>] [--compact]";

#[derive(Debug, Clone, PartialEq)]
pub struct CliArgs {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub compact: bool,
}

/// Parse arguments (program name already stripped).
pub fn parse_args<I>(args: I) -> Result<CliArgs, LayoutError>
where
    I: IntoIterator<Item = String>,
{
    let mut input = None;
    let mut output = None;
    let mut compact = false;
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--output" | "-o" => match args.next() {
                Some(path) => output = Some(PathBuf::from(path)),
                None => return Err(LayoutError::Usage(format!("--output needs a path\n{}", USAGE))),
            },
            "--compact" => compact = true,
            "--help" | "-h" => return Err(LayoutError::Usage(USAGE.to_string())),
            other if other.starts_with('-') => {
                return Err(LayoutError::Usage(format!("unknown flag {}\n{}", other, USAGE)));
            }
            other => {
                if input.is_some() {
                    return Err(LayoutError::Usage(format!("unexpected argument {}\n{}", other, USAGE)));
                }
                input = Some(PathBuf::from(other));
            }
        }
    }
    let input = input.ok_or_else(|| LayoutError::Usage(USAGE.to_string()))?;
    Ok(CliArgs { input, output, compact })
}

#[derive(Debug, Clone, Serialize)]
pub struct LayoutReport {
    pub layouts: Vec<TableLayout>,
    pub concatenation: Option<ConcatCompatibility>,
}

/// Layouts for every table plus merge-compatibility of the concatenated ones, if any.
pub fn build_report(input: &LayoutInput) -> LayoutReport {
    let layouts = compute_layout(&input.tables, &input.operator_groups);
    let concatenated: Vec<Table> = input
        .tables
        .iter()
        .filter(|t| t.kind == TableKind::Concatenation)
        .cloned()
        .collect();
    let concatenation = if concatenated.is_empty() {
        None
    } else {
        Some(check_concatenation(&concatenated))
    };
    LayoutReport {
        layouts,
        concatenation,
    }
}

pub fn render_report(report: &LayoutReport, pretty: bool) -> Result<String, LayoutError> {
    let json = if pretty {
        serde_json::to_string_pretty(report)?
    } else {
        serde_json::to_string(report)?
    };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_input_and_flags() {
        let parsed = parse_args(args(&["in.json", "--output", "out.json", "--compact"])).unwrap();
        assert_eq!(parsed.input, PathBuf::from("in.json"));
        assert_eq!(parsed.output, Some(PathBuf::from("out.json")));
        assert!(parsed.compact);
    }

    #[test]
    fn missing_input_is_usage_error() {
        assert!(matches!(parse_args(args(&[])), Err(LayoutError::Usage(_))));
        assert!(matches!(parse_args(args(&["a.json", "--output"])), Err(LayoutError::Usage(_))));
        assert!(matches!(parse_args(args(&["a.json", "--bogus"])), Err(LayoutError::Usage(_))));
    }
}
