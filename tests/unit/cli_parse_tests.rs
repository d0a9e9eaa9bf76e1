//! CLI argument parsing.

use clap::Parser;
use tg::cli::{Cli, Commands, OutputFormat};

#[test]
fn analyze_accepts_project_source() {
    let cli = Cli::parse_from(["tg", "analyze", "team.yaml", "--project", "Mobile App"]);
    match cli.command {
        Commands::Analyze(args) => {
            assert_eq!(args.team.as_deref(), Some(std::path::Path::new("team.yaml")));
            assert_eq!(args.project.as_deref(), Some("Mobile App"));
            assert!(args.requirements.is_none());
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn analyze_rejects_both_sources() {
    let result = Cli::try_parse_from([
        "tg",
        "analyze",
        "team.yaml",
        "--project",
        "Mobile App",
        "--requirements",
        "reqs.json",
    ]);
    assert!(result.is_err(), "--project and --requirements must conflict");
}

#[test]
fn global_flags_apply_after_subcommand() {
    let cli = Cli::parse_from(["tg", "analyze", "team.yaml", "-r", "reqs.json", "-O", "csv"]);
    assert_eq!(cli.output_format(), OutputFormat::Csv);
}

#[test]
fn verbosity_counts() {
    let cli = Cli::parse_from(["tg", "-vv", "skills", "team.yaml"]);
    assert_eq!(cli.verbose, 2);
}
