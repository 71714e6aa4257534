use std::path::PathBuf;

use clap::Parser;

use crate::constants::DEFAULT_FRAMEWORK_DIR;

/// A single-entry override, given on the command line as `INDEX=PATH`.
#[derive(Debug, Clone)]
pub struct SetSpec {
    pub index: usize,
    pub path: String,
}

fn parse_set_spec(s: &str) -> Result<SetSpec, String> {
    let (index, path) = s
        .split_once('=')
        .ok_or_else(|| format!("expected INDEX=PATH, got `{s}`"))?;
    let index = index
        .trim()
        .parse::<usize>()
        .map_err(|e| format!("invalid index in `{s}`: {e}"))?;
    if path.is_empty() {
        return Err(format!("empty path in `{s}`"));
    }
    Ok(SetSpec {
        index,
        path: path.to_string(),
    })
}

#[derive(Parser, Debug)]
#[command(name = "fmw-select")]
#[command(
    about = "List the files of a framework directory, choose where each one should be \
             sourced from, and emit the resulting name/path plan."
)]
pub struct Cli {
    /// Directory whose files are listed.
    #[arg(default_value = DEFAULT_FRAMEWORK_DIR)]
    pub dir: String,

    /// If set, opens the TUI for interactive path selection.
    #[arg(short = 'i', long = "interactive")]
    pub interactive: bool,

    /// Override one entry as INDEX=PATH (repeatable, applied in order).
    #[arg(short = 's', long = "set", value_parser = parse_set_spec)]
    pub set: Vec<SetSpec>,

    /// Replace every path at once from a file with one path per line.
    #[arg(short = 'p', long = "paths-file")]
    pub paths_file: Option<PathBuf>,

    /// Fail on a wrong-length paths file instead of ignoring it.
    #[arg(long = "strict")]
    pub strict: bool,

    /// Glob patterns a file name must match to be listed (repeatable).
    #[arg(long = "only")]
    pub only: Vec<String>,

    /// Print the full plan to stdout.
    #[arg(short = 'o', long = "stdout")]
    pub stdout: bool,

    /// Write the full plan to a file.
    #[arg(short = 'w', long = "write")]
    pub write: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_spec_parses_index_and_path() {
        let spec = parse_set_spec("3=/sdcard/services.jar").unwrap();
        assert_eq!(spec.index, 3);
        assert_eq!(spec.path, "/sdcard/services.jar");
    }

    #[test]
    fn set_spec_rejects_bad_input() {
        assert!(parse_set_spec("no-equals").is_err());
        assert!(parse_set_spec("x=/sdcard/a.jar").is_err());
        assert!(parse_set_spec("1=").is_err());
    }
}
