use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Deserialize;
use tracing::{info, warn};

use crate::client::ResumeApiClient;
use crate::config::Config;
use crate::model::{
    new_entry_id, split_description, split_technologies, AboutPatch, EducationEntry,
    ExperienceEntry, ProjectEntry,
};
use crate::snapshot::{self, FileSnapshotStore, SnapshotStore};
use crate::store::{Action, ResumeState};

#[derive(Parser)]
#[command(name = "resume")]
#[command(version)]
#[command(about = "Build a resume section by section", long_about = None)]
pub struct Cli {
    /// Snapshot file holding the resume being edited
    #[arg(long, global = true, value_name = "PATH")]
    pub state: Option<PathBuf>,

    /// Base URL of the resume API
    #[arg(long, global = true, value_name = "URL")]
    pub server: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the current resume as JSON
    Show,
    /// Update personal details; omitted fields are kept
    About(AboutArgs),
    /// Manage education entries
    Education {
        #[command(subcommand)]
        command: EducationCommand,
    },
    /// Manage work experience entries
    Experience {
        #[command(subcommand)]
        command: ExperienceCommand,
    },
    /// Manage project entries
    Project {
        #[command(subcommand)]
        command: ProjectCommand,
    },
    /// Manage the skill list
    Skill {
        #[command(subcommand)]
        command: SkillCommand,
    },
    /// Apply a raw JSON action, or an array of them, e.g.
    /// '{"type":"skills/addSkill","payload":"Rust"}'
    Dispatch { action: String },
    /// Discard the local resume
    Reset,
    /// Upload the resume to the API and print its id
    Push,
    /// Replace the local resume with one stored on the API
    Pull { id: String },
}

#[derive(Args, Debug, Default)]
pub struct AboutArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub address: Option<String>,
    #[arg(long)]
    pub summary: Option<String>,
}

impl From<AboutArgs> for AboutPatch {
    fn from(args: AboutArgs) -> Self {
        AboutPatch {
            name: args.name,
            email: args.email,
            phone: args.phone,
            address: args.address,
            summary: args.summary,
        }
    }
}

#[derive(Args, Debug, Default)]
pub struct EducationFields {
    #[arg(long)]
    pub institution: Option<String>,
    #[arg(long)]
    pub degree: Option<String>,
    #[arg(long)]
    pub field_of_study: Option<String>,
    #[arg(long)]
    pub start_date: Option<String>,
    #[arg(long)]
    pub end_date: Option<String>,
    #[arg(long)]
    pub location: Option<String>,
}

impl EducationFields {
    fn apply_to(self, mut entry: EducationEntry) -> EducationEntry {
        override_with(&mut entry.institution, self.institution);
        override_with(&mut entry.degree, self.degree);
        override_with(&mut entry.field_of_study, self.field_of_study);
        override_with(&mut entry.start_date, self.start_date);
        override_with(&mut entry.end_date, self.end_date);
        override_with(&mut entry.location, self.location);
        entry
    }
}

#[derive(Args, Debug, Default)]
pub struct ExperienceFields {
    #[arg(long)]
    pub company: Option<String>,
    #[arg(long)]
    pub position: Option<String>,
    #[arg(long)]
    pub start_date: Option<String>,
    #[arg(long)]
    pub end_date: Option<String>,
    #[arg(long)]
    pub location: Option<String>,
    /// Responsibilities and achievements, one per line
    #[arg(long)]
    pub description: Option<String>,
}

impl ExperienceFields {
    fn apply_to(self, mut entry: ExperienceEntry) -> ExperienceEntry {
        override_with(&mut entry.company, self.company);
        override_with(&mut entry.position, self.position);
        override_with(&mut entry.start_date, self.start_date);
        override_with(&mut entry.end_date, self.end_date);
        override_with(&mut entry.location, self.location);
        if let Some(text) = self.description {
            entry.description = split_description(&text);
        }
        entry
    }
}

#[derive(Args, Debug, Default)]
pub struct ProjectFields {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    /// Comma-separated, e.g. "Rust, Axum, PostgreSQL"
    #[arg(long)]
    pub technologies: Option<String>,
    #[arg(long)]
    pub link: Option<String>,
}

impl ProjectFields {
    fn apply_to(self, mut entry: ProjectEntry) -> ProjectEntry {
        override_with(&mut entry.name, self.name);
        override_with(&mut entry.description, self.description);
        override_with(&mut entry.link, self.link);
        if let Some(text) = self.technologies {
            entry.technologies = split_technologies(&text);
        }
        entry
    }
}

#[derive(Subcommand)]
pub enum EducationCommand {
    /// Add an entry and print its id
    Add(EducationFields),
    /// Change fields of an existing entry
    Update {
        id: String,
        #[command(flatten)]
        fields: EducationFields,
    },
    Remove { id: String },
}

#[derive(Subcommand)]
pub enum ExperienceCommand {
    /// Add an entry and print its id
    Add(ExperienceFields),
    /// Change fields of an existing entry
    Update {
        id: String,
        #[command(flatten)]
        fields: ExperienceFields,
    },
    Remove { id: String },
}

#[derive(Subcommand)]
pub enum ProjectCommand {
    /// Add an entry and print its id
    Add(ProjectFields),
    /// Change fields of an existing entry
    Update {
        id: String,
        #[command(flatten)]
        fields: ProjectFields,
    },
    Remove { id: String },
}

#[derive(Subcommand)]
pub enum SkillCommand {
    Add { skill: String },
    /// Remove every occurrence of a skill
    Remove { skill: String },
    /// Replace the whole list
    Set { skills: Vec<String> },
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ActionBatch {
    One(Action),
    Many(Vec<Action>),
}

impl ActionBatch {
    fn actions(&self) -> &[Action] {
        match self {
            ActionBatch::One(action) => std::slice::from_ref(action),
            ActionBatch::Many(actions) => actions,
        }
    }
}

fn override_with(field: &mut String, value: Option<String>) {
    if let Some(value) = value {
        *field = value;
    }
}

pub async fn run(cli: Cli, config: Config) -> Result<()> {
    let state_path = match cli.state {
        Some(path) => path,
        None => config.resolve_state_path()?,
    };
    let store = FileSnapshotStore::new(state_path);
    let api_url = cli.server.unwrap_or(config.api_url);

    match cli.command {
        Commands::Show => {
            let state = snapshot::load(&store);
            println!("{}", serde_json::to_string_pretty(&state)?);
        }
        Commands::About(args) => {
            let patch = AboutPatch::from(args);
            if patch.is_empty() {
                warn!("No About fields given; nothing to update");
                return Ok(());
            }
            commit(&store, Action::UpdateAbout(patch))?;
        }
        Commands::Education { command } => run_education(&store, command)?,
        Commands::Experience { command } => run_experience(&store, command)?,
        Commands::Project { command } => run_project(&store, command)?,
        Commands::Skill { command } => {
            let action = match command {
                SkillCommand::Add { skill } => Action::AddSkill(skill),
                SkillCommand::Remove { skill } => Action::RemoveSkill(skill),
                SkillCommand::Set { skills } => Action::UpdateSkills(skills),
            };
            commit(&store, action)?;
        }
        Commands::Dispatch { action } => {
            let batch: ActionBatch =
                serde_json::from_str(&action).context("Failed to parse action JSON")?;
            let next = snapshot::load(&store).apply_all(batch.actions());
            snapshot::save(&store, &next).context("Failed to save resume")?;
        }
        Commands::Reset => {
            snapshot::clear(&store)?;
            info!("Cleared snapshot {}", store.path().display());
        }
        Commands::Push => {
            let state = snapshot::load(&store);
            let id = ResumeApiClient::new(api_url).push(&state).await?;
            println!("{id}");
        }
        Commands::Pull { id } => {
            let state = ResumeApiClient::new(api_url).pull(&id).await?;
            snapshot::save(&store, &state)?;
            info!("Pulled resume {id} into {}", store.path().display());
        }
    }

    Ok(())
}

fn run_education(store: &dyn SnapshotStore, command: EducationCommand) -> Result<()> {
    match command {
        EducationCommand::Add(fields) => {
            let entry = fields.apply_to(EducationEntry {
                id: new_entry_id(),
                ..Default::default()
            });
            let id = entry.id.clone();
            commit(store, Action::AddEducation(entry))?;
            println!("{id}");
        }
        EducationCommand::Update { id, fields } => {
            let state = snapshot::load(store);
            let existing = state
                .education_entry(&id)
                .cloned()
                .with_context(|| format!("No education entry with id '{id}'"))?;
            save_applied(store, state, &Action::UpdateEducation(fields.apply_to(existing)))?;
        }
        EducationCommand::Remove { id } => {
            commit(store, Action::RemoveEducation(id))?;
        }
    }
    Ok(())
}

fn run_experience(store: &dyn SnapshotStore, command: ExperienceCommand) -> Result<()> {
    match command {
        ExperienceCommand::Add(fields) => {
            let entry = fields.apply_to(ExperienceEntry {
                id: new_entry_id(),
                ..Default::default()
            });
            let id = entry.id.clone();
            commit(store, Action::AddExperience(entry))?;
            println!("{id}");
        }
        ExperienceCommand::Update { id, fields } => {
            let state = snapshot::load(store);
            let existing = state
                .experience_entry(&id)
                .cloned()
                .with_context(|| format!("No experience entry with id '{id}'"))?;
            save_applied(store, state, &Action::UpdateExperience(fields.apply_to(existing)))?;
        }
        ExperienceCommand::Remove { id } => {
            commit(store, Action::RemoveExperience(id))?;
        }
    }
    Ok(())
}

fn run_project(store: &dyn SnapshotStore, command: ProjectCommand) -> Result<()> {
    match command {
        ProjectCommand::Add(fields) => {
            let entry = fields.apply_to(ProjectEntry {
                id: new_entry_id(),
                ..Default::default()
            });
            let id = entry.id.clone();
            commit(store, Action::AddProject(entry))?;
            println!("{id}");
        }
        ProjectCommand::Update { id, fields } => {
            let state = snapshot::load(store);
            let existing = state
                .project_entry(&id)
                .cloned()
                .with_context(|| format!("No project entry with id '{id}'"))?;
            save_applied(store, state, &Action::UpdateProject(fields.apply_to(existing)))?;
        }
        ProjectCommand::Remove { id } => {
            commit(store, Action::RemoveProject(id))?;
        }
    }
    Ok(())
}

/// Load, apply, save.
fn commit(store: &dyn SnapshotStore, action: Action) -> Result<ResumeState> {
    let state = snapshot::load(store);
    save_applied(store, state, &action)
}

fn save_applied(
    store: &dyn SnapshotStore,
    state: ResumeState,
    action: &Action,
) -> Result<ResumeState> {
    let next = state.apply(action);
    snapshot::save(store, &next).context("Failed to save resume")?;
    Ok(next)
}
