// src/cli.rs

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::api::ApiClient;
use crate::config::AppConfig;
use crate::profile::ProfileController;
use crate::render;
use crate::search::SearchController;
use crate::session::BrowseSession;
use crate::Phase;

#[derive(Parser)]
#[command(name = "talentlens")]
#[command(about = "Search people, view profiles and skill analytics from the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Search people by name and print one page of results
    Search {
        query: String,
        /// Page of the fetched result set to print (1-based)
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    /// Print a person's full profile
    Profile {
        username: String,
        /// Show every skill instead of the ranked preview
        #[arg(long)]
        all_skills: bool,
    },
    /// Run compensation and distribution analytics for a skill
    Analyze {
        skill: String,
        /// Your own proficiency, passed through to the compensation call
        #[arg(long)]
        proficiency: Option<String>,
    },
    /// Interactive session: search, open profiles, analyze skills
    Browse,
}

pub async fn run(cli: Cli, config: AppConfig) -> Result<()> {
    let client = ApiClient::new(&config)?;

    match cli.command {
        Command::Search { query, page } => {
            let mut controller = SearchController::new(&config);
            controller.run_search(&client, &query).await?;
            if controller.phase() == Phase::Failed {
                anyhow::bail!(
                    "{}",
                    controller.error().unwrap_or("Search failed")
                );
            }
            controller.set_page(page);
            println!("{}", render::render_search_page(&controller));
        }

        Command::Profile {
            username,
            all_skills,
        } => {
            let mut controller = ProfileController::new();
            controller.run_load(&client, &username).await;
            if controller.phase() == Phase::Failed {
                anyhow::bail!(
                    "{}",
                    controller.error().unwrap_or("Failed to load profile")
                );
            }
            if all_skills {
                controller.toggle_show_all_skills();
            }
            println!("{}", render::render_profile_page(&controller));
        }

        Command::Analyze { skill, proficiency } => {
            let mut controller = crate::analysis::SkillAnalysisController::new();
            controller
                .load(&client, &skill, proficiency.as_deref())
                .await;
            println!(
                "{}",
                render::render_analysis_panel(&skill, proficiency.as_deref(), controller.insight())
            );
        }

        Command::Browse => {
            let mut session = BrowseSession::new(&config);
            session.run(&client).await?;
        }
    }

    Ok(())
}
