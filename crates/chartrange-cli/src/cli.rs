//! CLI argument definitions for chartrange.

use std::path::PathBuf;

use chartrange_core::{Difficulty, DisplayMode, SortColumn};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "chartrange")]
#[command(about = "Chart score range table", version)]
pub struct Args {
    /// Path to config file
    #[arg(short, long, default_value = "chartrange.toml")]
    pub config: PathBuf,

    /// Song catalog (overrides the config file)
    #[arg(long, value_name = "FILE", env = "CHARTRANGE_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// File the filter controls are persisted to (overrides the config file)
    #[arg(long, value_name = "FILE", env = "CHARTRANGE_STATE")]
    pub state: Option<PathBuf>,

    /// Keep filter state in memory only
    #[arg(long)]
    pub no_persist: bool,

    /// Break point; scores are shown as absolute numbers when set
    #[arg(long)]
    pub bp: Option<f64>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the table once
    Show {
        /// Sort column (title, difficulty, level, min, avg, max or 0-5)
        #[arg(long, value_parser = parse_column)]
        sort: Option<SortColumn>,
        /// Sort ascending
        #[arg(long, conflicts_with = "desc")]
        asc: bool,
        /// Sort descending
        #[arg(long)]
        desc: bool,
        /// Title display mode (0 original, 1 english, 2 romanized)
        #[arg(long, value_parser = parse_display)]
        display: Option<DisplayMode>,
        /// Show only these difficulties (comma separated); saved like a checkbox change
        #[arg(long, value_delimiter = ',', value_parser = parse_difficulty)]
        only: Vec<Difficulty>,
    },
    /// Export the table
    Export {
        /// Output file path (stdout when omitted)
        #[arg(long, short)]
        output: Option<PathBuf>,
        /// Export format
        #[arg(long, short, value_enum, default_value = "tsv")]
        format: ExportFormat,
    },
    /// Drive the table with commands read from stdin (default)
    Interactive,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    Tsv,
    Json,
}

pub fn parse_column(value: &str) -> Result<SortColumn, String> {
    SortColumn::parse(value).map_err(|e| e.to_string())
}

pub fn parse_display(value: &str) -> Result<DisplayMode, String> {
    DisplayMode::parse(value).map_err(|e| e.to_string())
}

pub fn parse_difficulty(value: &str) -> Result<Difficulty, String> {
    value
        .trim()
        .to_lowercase()
        .parse()
        .map_err(|_| format!("Invalid difficulty: {}", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_no_args() {
        let args = Args::try_parse_from(["chartrange"]).unwrap();
        assert!(args.command.is_none());
        assert_eq!(args.config, PathBuf::from("chartrange.toml"));
        assert!(args.bp.is_none());
        assert!(!args.no_persist);
    }

    #[test]
    fn test_parse_global_options() {
        let args = Args::try_parse_from([
            "chartrange",
            "--catalog",
            "songs.json",
            "--bp",
            "50",
            "--no-persist",
            "interactive",
        ])
        .unwrap();
        assert_eq!(args.catalog, Some(PathBuf::from("songs.json")));
        assert_eq!(args.bp, Some(50.0));
        assert!(args.no_persist);
        assert!(matches!(args.command, Some(Command::Interactive)));
    }

    #[test]
    fn test_parse_show() {
        let args = Args::try_parse_from([
            "chartrange",
            "show",
            "--sort",
            "level",
            "--asc",
            "--display",
            "1",
            "--only",
            "hard,Expert",
        ])
        .unwrap();
        match args.command {
            Some(Command::Show {
                sort,
                asc,
                desc,
                display,
                only,
            }) => {
                assert_eq!(sort, Some(SortColumn::Level));
                assert!(asc);
                assert!(!desc);
                assert_eq!(display, Some(DisplayMode::English));
                assert_eq!(only, vec![Difficulty::Hard, Difficulty::Expert]);
            }
            _ => panic!("Expected Show command"),
        }
    }

    #[test]
    fn test_parse_show_rejects_bad_values() {
        assert!(Args::try_parse_from(["chartrange", "show", "--sort", "song_id"]).is_err());
        assert!(Args::try_parse_from(["chartrange", "show", "--display", "7"]).is_err());
        assert!(Args::try_parse_from(["chartrange", "show", "--only", "master"]).is_err());
        assert!(Args::try_parse_from(["chartrange", "show", "--asc", "--desc"]).is_err());
    }

    #[test]
    fn test_parse_export() {
        let args =
            Args::try_parse_from(["chartrange", "export", "-f", "json", "-o", "out.json"]).unwrap();
        match args.command {
            Some(Command::Export { output, format }) => {
                assert_eq!(output, Some(PathBuf::from("out.json")));
                assert_eq!(format, ExportFormat::Json);
            }
            _ => panic!("Expected Export command"),
        }
    }

    #[test]
    fn test_parse_export_default_format() {
        let args = Args::try_parse_from(["chartrange", "export"]).unwrap();
        match args.command {
            Some(Command::Export { output, format }) => {
                assert!(output.is_none());
                assert_eq!(format, ExportFormat::Tsv);
            }
            _ => panic!("Expected Export command"),
        }
    }
}
