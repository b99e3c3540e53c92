//! Aggregate resume state and the actions that transition it.
//!
//! `ResumeState::apply` is pure. Persisting the result is a separate,
//! explicit step (see [`crate::snapshot`]).

use serde::{Deserialize, Serialize};

use crate::model::{AboutPatch, AboutRecord, EducationEntry, ExperienceEntry, ProjectEntry};
use crate::slices;

/// The whole resume document as held in memory and persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeState {
    pub about: AboutRecord,
    pub education: Vec<EducationEntry>,
    pub experience: Vec<ExperienceEntry>,
    pub projects: Vec<ProjectEntry>,
    pub skills: Vec<String>,
}

/// A state transition. Serialized as `{"type": "<section>/<action>", "payload": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum Action {
    #[serde(rename = "about/updateAbout")]
    UpdateAbout(AboutPatch),

    #[serde(rename = "education/addEducation")]
    AddEducation(EducationEntry),
    #[serde(rename = "education/updateEducation")]
    UpdateEducation(EducationEntry),
    #[serde(rename = "education/removeEducation")]
    RemoveEducation(String),

    #[serde(rename = "experience/addExperience")]
    AddExperience(ExperienceEntry),
    #[serde(rename = "experience/updateExperience")]
    UpdateExperience(ExperienceEntry),
    #[serde(rename = "experience/removeExperience")]
    RemoveExperience(String),

    #[serde(rename = "projects/addProject")]
    AddProject(ProjectEntry),
    #[serde(rename = "projects/updateProject")]
    UpdateProject(ProjectEntry),
    #[serde(rename = "projects/removeProject")]
    RemoveProject(String),

    #[serde(rename = "skills/addSkill")]
    AddSkill(String),
    #[serde(rename = "skills/removeSkill")]
    RemoveSkill(String),
    #[serde(rename = "skills/updateSkills")]
    UpdateSkills(Vec<String>),
}

impl ResumeState {
    /// Runs every section reducer over `action` and returns the next state.
    pub fn apply(self, action: &Action) -> ResumeState {
        let ResumeState {
            about,
            education,
            experience,
            projects,
            skills,
        } = self;

        ResumeState {
            about: slices::about::reduce(about, action),
            education: slices::education::reduce(education, action),
            experience: slices::experience::reduce(experience, action),
            projects: slices::projects::reduce(projects, action),
            skills: slices::skills::reduce(skills, action),
        }
    }

    /// Applies a sequence of actions in order.
    pub fn apply_all<'a>(self, actions: impl IntoIterator<Item = &'a Action>) -> ResumeState {
        actions.into_iter().fold(self, ResumeState::apply)
    }

    pub fn education_entry(&self, id: &str) -> Option<&EducationEntry> {
        self.education.iter().find(|e| e.id == id)
    }

    pub fn experience_entry(&self, id: &str) -> Option<&ExperienceEntry> {
        self.experience.iter().find(|e| e.id == id)
    }

    pub fn project_entry(&self, id: &str) -> Option<&ProjectEntry> {
        self.projects.iter().find(|e| e.id == id)
    }
}
