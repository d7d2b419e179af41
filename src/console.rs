//! Handling the command line interface
//!
//! This module handles the command line parsing as well as basic information (e.g. help dialog, version information, etc.).
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Output format of the generated rays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, strum::Display)]
pub enum OutputFormat {
    /// one line per source with ray count, centroid and wavelength
    #[default]
    #[strum(serialize = "summary")]
    Summary,
    /// one CSV row per ray
    #[strum(serialize = "csv")]
    Csv,
}

/// Command line arguments for the ray source application.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// file path of the beam document (YAML) which should be read in
    #[arg(short, long)]
    pub file_path: PathBuf,

    /// output format of the generated rays
    #[arg(long, value_enum, default_value_t = OutputFormat::Summary)]
    pub format: OutputFormat,

    /// seed for all random sources. overrides the seeds given in the document
    #[arg(short, long)]
    pub seed: Option<u64>,
}

#[cfg(test)]
mod test {
    use super::*;
    #[test]
    fn parse_minimal() {
        let args = Args::try_parse_from(["raysource", "-f", "beams.yaml"]).unwrap();
        assert_eq!(args.file_path, PathBuf::from("beams.yaml"));
        assert_eq!(args.format, OutputFormat::Summary);
        assert_eq!(args.seed, None);
    }
    #[test]
    fn parse_all() {
        let args = Args::try_parse_from([
            "raysource",
            "--file-path",
            "beams.yaml",
            "--format",
            "csv",
            "--seed",
            "42",
        ])
        .unwrap();
        assert_eq!(args.format, OutputFormat::Csv);
        assert_eq!(args.seed, Some(42));
    }
    #[test]
    fn parse_wrong() {
        assert!(Args::try_parse_from(["raysource"]).is_err());
        assert!(Args::try_parse_from(["raysource", "-f", "a.yaml", "--format", "json"]).is_err());
        assert!(Args::try_parse_from(["raysource", "-f", "a.yaml", "-s", "-1"]).is_err());
    }
    #[test]
    fn format_display() {
        assert_eq!(OutputFormat::Summary.to_string(), "summary");
        assert_eq!(OutputFormat::Csv.to_string(), "csv");
    }
}
