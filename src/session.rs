// src/session.rs
//! Interactive browse session: the navigation surface of the original UI
//! as a command loop. A view stack models search-to-profile navigation;
//! `back` pops it. Navigation keys on the username uniformly.

use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::info;

use crate::analysis::SkillAnalysisController;
use crate::api::ApiClient;
use crate::config::AppConfig;
use crate::profile::ProfileController;
use crate::render;
use crate::search::SearchController;
use crate::Phase;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search(String),
    Page(usize),
    Next,
    Prev,
    /// Open a profile by result index (1-based on the current page) or
    /// directly by username.
    Open(String),
    /// Toggle between the skill preview and the full list.
    Skills,
    /// Open the analysis panel for a named skill of the loaded profile.
    Skill(String),
    Close,
    Back,
    Help,
    Quit,
}

impl Command {
    /// Parse one input line; `None` for blank or unrecognized input.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        let (head, rest) = match line.split_once(char::is_whitespace) {
            Some((head, rest)) => (head, rest.trim()),
            None => (line, ""),
        };

        match head.to_lowercase().as_str() {
            "search" if !rest.is_empty() => Some(Self::Search(rest.to_string())),
            "page" => rest.parse().ok().map(Self::Page),
            "next" => Some(Self::Next),
            "prev" => Some(Self::Prev),
            "open" if !rest.is_empty() => Some(Self::Open(rest.to_string())),
            "skills" => Some(Self::Skills),
            "skill" if !rest.is_empty() => Some(Self::Skill(rest.to_string())),
            "close" => Some(Self::Close),
            "back" => Some(Self::Back),
            "help" => Some(Self::Help),
            "quit" | "exit" => Some(Self::Quit),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum View {
    Search,
    Profile,
}

pub struct BrowseSession {
    search: SearchController,
    profile: ProfileController,
    analysis: SkillAnalysisController,
    stack: Vec<View>,
}

const HELP_TEXT: &str = "\
Commands:
  search <query>        run a people search
  page <n> | next | prev  flip through the fetched results
  open <index|username> open a profile (pushes a history entry)
  skills                toggle showing all skills on the profile
  skill <name>          analyze one of the profile's skills
  close                 close the analysis panel
  back                  go back to the previous view
  help                  show this text
  quit                  leave";

impl BrowseSession {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            search: SearchController::new(config),
            profile: ProfileController::new(),
            analysis: SkillAnalysisController::new(),
            stack: vec![View::Search],
        }
    }

    /// Read commands from stdin until quit/EOF.
    pub async fn run(&mut self, client: &ApiClient) -> Result<()> {
        let stdin = std::io::stdin();
        let mut out = std::io::stdout();

        println!("talentlens browse - type `help` for commands.");
        loop {
            print!("> ");
            out.flush()?;

            let mut line = String::new();
            if stdin.lock().read_line(&mut line)? == 0 {
                break; // EOF
            }
            if line.trim().is_empty() {
                continue;
            }

            let Some(command) = Command::parse(&line) else {
                println!("Unrecognized command. Type `help` for the list.");
                continue;
            };
            if command == Command::Quit {
                break;
            }

            let output = self.execute(client, command).await;
            println!("{}", output);
        }

        info!("Browse session ended");
        Ok(())
    }

    /// Apply one command and return what to print.
    pub async fn execute(&mut self, client: &ApiClient, command: Command) -> String {
        match command {
            Command::Search(query) => {
                // A new search drops any profile context.
                self.stack.truncate(1);
                self.profile = ProfileController::new();
                self.analysis.close();
                match self.search.run_search(client, &query).await {
                    Ok(()) => render::render_search_page(&self.search),
                    Err(err) => err.to_string(),
                }
            }
            Command::Page(page) => self.flip_to(page),
            Command::Next => self.flip_to(self.search.current_page() + 1),
            Command::Prev => self.flip_to(self.search.current_page().saturating_sub(1)),
            Command::Open(target) => self.open_profile(client, &target).await,
            Command::Skills => {
                if self.profile.phase() != Phase::Loaded {
                    return "Open a profile first.".to_string();
                }
                self.profile.toggle_show_all_skills();
                render::render_profile_page(&self.profile)
            }
            Command::Skill(name) => self.open_analysis(client, &name).await,
            Command::Close => {
                self.analysis.close();
                self.profile.close_analysis();
                self.render_current()
            }
            Command::Back => self.go_back(),
            Command::Help => HELP_TEXT.to_string(),
            Command::Quit => String::new(),
        }
    }

    fn flip_to(&mut self, page: usize) -> String {
        if self.current_view() != View::Search {
            return "Page navigation only applies to search results; `back` first.".to_string();
        }
        // The scroll-to-top analog: reprint the page from the top either way.
        self.search.set_page(page);
        render::render_search_page(&self.search)
    }

    async fn open_profile(&mut self, client: &ApiClient, target: &str) -> String {
        let username = match target.parse::<usize>() {
            Ok(index) => {
                let visible = self.search.current_page_results();
                match index.checked_sub(1).and_then(|i| visible.get(i)) {
                    Some(person) => person.username.clone(),
                    None => {
                        return format!("No result #{} on this page.", target);
                    }
                }
            }
            Err(_) => target.to_string(),
        };

        self.profile.run_load(client, &username).await;
        if self.current_view() != View::Profile {
            self.stack.push(View::Profile);
        }
        render::render_profile_page(&self.profile)
    }

    async fn open_analysis(&mut self, client: &ApiClient, name: &str) -> String {
        if self.profile.phase() != Phase::Loaded {
            return "Open a profile first.".to_string();
        }

        self.profile.select_skill(name);
        let proficiency = self
            .profile
            .selected_skill_proficiency()
            .map(String::from);
        self.analysis
            .load(client, name, proficiency.as_deref())
            .await;

        render::render_analysis_panel(name, proficiency.as_deref(), self.analysis.insight())
    }

    fn go_back(&mut self) -> String {
        if self.profile.selected_skill().is_some() {
            self.analysis.close();
            self.profile.close_analysis();
            return self.render_current();
        }
        if self.stack.len() > 1 {
            self.stack.pop();
            return self.render_current();
        }
        "Nothing to go back to.".to_string()
    }

    fn current_view(&self) -> View {
        *self.stack.last().unwrap_or(&View::Search)
    }

    fn render_current(&self) -> String {
        match self.current_view() {
            View::Search => render::render_search_page(&self.search),
            View::Profile => render::render_profile_page(&self.profile),
        }
    }
}
