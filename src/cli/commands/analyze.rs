//! tg analyze - Run a gap analysis for a team
//!
//! Requirements come either from a requirements file or from a project
//! stored in the team snapshot; the report goes to stdout in the selected
//! output format, optionally also to a CSV file.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use colored::{ColoredString, Colorize};
use itertools::Itertools;

use crate::analysis::GapAnalyzer;
use crate::app::AppContext;
use crate::cli::OutputFormat;
use crate::error::{Result, TgError};
use crate::export;
use crate::model::{GapAnalysisResult, RiskLevel};
use crate::snapshot::TeamSnapshot;
use crate::validation;

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Team snapshot file (YAML or JSON); defaults to team.file from config
    pub team: Option<PathBuf>,

    /// Analyze the requirements of a project stored in the snapshot
    #[arg(long, short = 'p', conflicts_with = "requirements")]
    pub project: Option<String>,

    /// Requirements file (YAML or JSON)
    #[arg(long, short = 'r')]
    pub requirements: Option<PathBuf>,

    /// Also write the report as CSV to this path
    #[arg(long)]
    pub csv: Option<PathBuf>,
}

pub fn run(ctx: &AppContext, args: &AnalyzeArgs) -> Result<()> {
    let team_path = super::resolve_team_path(ctx, args.team.as_deref())?;
    let snapshot = TeamSnapshot::load(&team_path)?;

    let requirements = if let Some(project) = &args.project {
        snapshot.project(project)?.requirements.clone()
    } else if let Some(path) = &args.requirements {
        let raw = super::load_raw_requirements(path)?;
        validation::validate_requirements(&raw)?
    } else {
        return Err(TgError::MissingConfig(
            "requirement source (pass --project <NAME> or --requirements <FILE>)".to_string(),
        ));
    };

    let result = GapAnalyzer::new().analyze(&requirements, &snapshot.members, &snapshot)?;

    if let Some(path) = &args.csv {
        fs::write(path, export::to_csv(&result))?;
        tracing::info!(path = %path.display(), "wrote CSV report");
    }

    match ctx.output_format {
        OutputFormat::Json => println!("{}", export::to_json_pretty(&result)?),
        OutputFormat::Csv => print!("{}", export::to_csv(&result)),
        OutputFormat::Human | OutputFormat::Plain => {
            render_human(&snapshot.team.name, &result);
        }
    }

    Ok(())
}

fn render_human(team_name: &str, result: &GapAnalysisResult) {
    println!("{}", format!("Gap Analysis - {team_name}").bold());
    println!("{}", "─".repeat(78).dimmed());

    let overall = &result.overall_risk;
    let verdict = if overall.ready_to_start {
        "ready to start".green()
    } else {
        "not ready".red()
    };
    println!(
        "Overall risk: {} ({}) · {}",
        level_colored(overall.level, &format!("{:.1}", overall.score)),
        level_colored(overall.level, overall.level.as_str()),
        verdict
    );
    println!();

    println!(
        "{:24} {:>4} {:>5} {:>5} {:12} {:>8} {:>6} {:9} {}",
        "SKILL".bold(),
        "REQ".bold(),
        "AVG".bold(),
        "GAP".bold(),
        "IMPORTANCE".bold(),
        "COVERAGE".bold(),
        "RISK".bold(),
        "LEVEL".bold(),
        "BOTTLENECK".bold()
    );
    println!("{}", "─".repeat(92).dimmed());

    let by_risk = result
        .skills
        .iter()
        .sorted_by(|(name_a, a), (name_b, b)| {
            b.risk
                .score
                .partial_cmp(&a.risk.score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| name_a.cmp(name_b))
        });

    for (skill, analysis) in by_risk {
        let bottleneck = if analysis.risk.bottleneck {
            "yes".red().to_string()
        } else {
            "-".dimmed().to_string()
        };
        println!(
            "{:24} {:>4} {:>5.2} {:>5.2} {:12} {:>8} {:>6.1} {:9} {}",
            truncate(skill, 24),
            analysis.required,
            analysis.average,
            analysis.gap,
            analysis.importance.as_str(),
            analysis.coverage.count,
            analysis.risk.score,
            level_colored(analysis.risk.level, analysis.risk.level.as_str()),
            bottleneck
        );
    }

    let summary = &result.summary;
    println!();
    println!(
        "{} {} skills · {} ready · {} with gaps · {} missing · {} critical bottlenecks",
        "Summary:".dimmed(),
        summary.total_skills,
        summary.skills_ready,
        summary.skills_with_gaps,
        summary.skills_missing_completely,
        summary.critical_bottlenecks
    );
}

fn level_colored(level: RiskLevel, text: &str) -> ColoredString {
    match level {
        RiskLevel::Critical => text.red().bold(),
        RiskLevel::High => text.red(),
        RiskLevel::Medium => text.yellow(),
        RiskLevel::Low => text.green(),
    }
}

fn truncate(input: &str, max_len: usize) -> String {
    if input.chars().count() > max_len {
        let kept: String = input.chars().take(max_len.saturating_sub(1)).collect();
        format!("{kept}…")
    } else {
        input.to_string()
    }
}
