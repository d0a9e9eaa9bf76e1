//! tg validate - Validate a requirements file
//!
//! Reports every problem by field path without running an analysis.

use std::path::PathBuf;

use clap::Args;
use colored::Colorize;

use crate::app::AppContext;
use crate::error::Result;
use crate::validation;

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Requirements file (YAML or JSON)
    pub file: PathBuf,
}

pub fn run(ctx: &AppContext, args: &ValidateArgs) -> Result<()> {
    let raw = super::load_raw_requirements(&args.file)?;

    match validation::validate_requirements(&raw) {
        Ok(requirements) => {
            if ctx.robot_mode {
                println!(
                    "{}",
                    serde_json::json!({
                        "status": "ok",
                        "requirements": requirements.len(),
                    })
                );
            } else {
                println!(
                    "{} {} requirements valid",
                    "✓".green(),
                    requirements.len()
                );
            }
            Ok(())
        }
        Err(errors) => {
            if !ctx.robot_mode {
                println!(
                    "{} {} validation {}:",
                    "✗".red(),
                    errors.len(),
                    if errors.len() == 1 { "error" } else { "errors" }
                );
                for (field, message) in errors.iter() {
                    println!("  {} {}", format!("{field}:").red(), message);
                }
            }
            Err(errors.into())
        }
    }
}
