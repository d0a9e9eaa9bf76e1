//! tg skills - Show a team's aggregated skill inventory
//!
//! The roster-side view: every recorded skill with who covers it and the
//! team average, before any project requirements enter the picture.

use std::collections::BTreeMap;
use std::path::PathBuf;

use clap::Args;
use colored::Colorize;
use itertools::Itertools;

use crate::analysis::risk::mean_level;
use crate::app::AppContext;
use crate::error::Result;
use crate::model::normalize_skill;
use crate::snapshot::TeamSnapshot;

#[derive(Args, Debug)]
pub struct SkillsArgs {
    /// Team snapshot file (YAML or JSON); defaults to team.file from config
    pub team: Option<PathBuf>,
}

struct InventoryEntry {
    display_name: String,
    members: Vec<String>,
    levels: Vec<u8>,
}

pub fn run(ctx: &AppContext, args: &SkillsArgs) -> Result<()> {
    let team_path = super::resolve_team_path(ctx, args.team.as_deref())?;
    let snapshot = TeamSnapshot::load(&team_path)?;

    let mut inventory: BTreeMap<String, InventoryEntry> = BTreeMap::new();
    for member in &snapshot.members {
        for record in snapshot.member_skills(&member.user) {
            let entry = inventory
                .entry(normalize_skill(&record.name))
                .or_insert_with(|| InventoryEntry {
                    display_name: record.name.trim().to_string(),
                    members: Vec::new(),
                    levels: Vec::new(),
                });
            entry.members.push(member.user.clone());
            entry.levels.push(record.level);
        }
    }

    if ctx.robot_mode {
        let skills: Vec<serde_json::Value> = inventory
            .values()
            .map(|entry| {
                serde_json::json!({
                    "skill": entry.display_name,
                    "members": entry.members,
                    "levels": entry.levels,
                    "average": mean_level(&entry.levels),
                })
            })
            .collect();
        println!(
            "{}",
            serde_json::json!({
                "status": "ok",
                "team": snapshot.team.name,
                "count": skills.len(),
                "skills": skills,
            })
        );
        return Ok(());
    }

    if inventory.is_empty() {
        println!("{}", "No recorded skills".dimmed());
        return Ok(());
    }

    println!("{}", format!("Skill Inventory - {}", snapshot.team.name).bold());
    println!("{}", "─".repeat(78).dimmed());
    println!(
        "{:24} {:>8} {:>6} {}",
        "SKILL".bold(),
        "MEMBERS".bold(),
        "AVG".bold(),
        "LEVELS".bold()
    );

    for entry in inventory.values() {
        let levels = entry.levels.iter().map(u8::to_string).join(", ");
        println!(
            "{:24} {:>8} {:>6.2} {}",
            entry.display_name,
            entry.members.len(),
            mean_level(&entry.levels),
            levels
        );
    }

    println!();
    println!("{} {} distinct skills", "Total:".dimmed(), inventory.len());

    Ok(())
}
