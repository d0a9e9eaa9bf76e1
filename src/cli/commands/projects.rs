//! tg projects - List a team's stored projects

use std::path::PathBuf;

use clap::Args;
use colored::Colorize;
use itertools::Itertools;

use crate::app::AppContext;
use crate::error::Result;
use crate::snapshot::TeamSnapshot;

#[derive(Args, Debug)]
pub struct ProjectsArgs {
    /// Team snapshot file (YAML or JSON); defaults to team.file from config
    pub team: Option<PathBuf>,
}

pub fn run(ctx: &AppContext, args: &ProjectsArgs) -> Result<()> {
    let team_path = super::resolve_team_path(ctx, args.team.as_deref())?;
    let snapshot = TeamSnapshot::load(&team_path)?;

    if ctx.robot_mode {
        let projects: Vec<serde_json::Value> = snapshot
            .projects
            .iter()
            .map(|p| {
                serde_json::json!({
                    "name": p.name,
                    "description": p.description,
                    "requirements": p.requirements,
                })
            })
            .collect();
        println!(
            "{}",
            serde_json::json!({
                "status": "ok",
                "team": snapshot.team.name,
                "count": projects.len(),
                "projects": projects,
            })
        );
        return Ok(());
    }

    if snapshot.projects.is_empty() {
        println!("{}", "No stored projects".dimmed());
        return Ok(());
    }

    println!(
        "{:30} {:>12} {}",
        "PROJECT".bold(),
        "REQUIREMENTS".bold(),
        "SKILLS".bold()
    );
    println!("{}", "─".repeat(78).dimmed());

    for project in &snapshot.projects {
        let skills = project
            .requirements
            .iter()
            .map(|r| r.skill.as_str())
            .join(", ");
        println!(
            "{:30} {:>12} {}",
            project.name,
            project.requirements.len(),
            skills
        );
    }

    println!();
    println!("{} {} projects", "Total:".dimmed(), snapshot.projects.len());

    Ok(())
}
