//! Local view state: active section, the two rendered lists and the forms.
//!
//! Everything here is synchronous and free of I/O; [`crate::app::Portfolio`]
//! calls into it once the API has acknowledged a change.

use std::fmt;
use std::str::FromStr;

use folio_core::models::contact::CreateContact;
use folio_core::models::project::{CreateProject, Project, UpdateProject};
use folio_core::models::skill::{CreateSkill, Skill};
use folio_core::tech::{join_tech, split_tech};

use crate::defaults::{default_projects, default_skills};
use crate::entry::{Entry, EntryKey, ProjectFields, SkillFields};
use crate::error::ClientError;

/// The four mutually exclusive sections of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Home,
    Projects,
    Skills,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Home,
        Section::Projects,
        Section::Skills,
        Section::Contact,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Projects => "projects",
            Section::Skills => "skills",
            Section::Contact => "contact",
        }
    }

    /// Capitalized label for navigation.
    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Projects => "Projects",
            Section::Skills => "Skills",
            Section::Contact => "Contact",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown section '{s}'"))
    }
}

// ---------------------------------------------------------------------------
// Forms
// ---------------------------------------------------------------------------

/// Report the names of empty required fields as a [`ClientError::Invalid`].
fn require(fields: &[(&'static str, &str)]) -> Result<(), ClientError> {
    let missing: Vec<&str> = fields
        .iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| *name)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ClientError::Invalid(format!(
            "Missing required fields: {}",
            missing.join(", ")
        )))
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// The add/edit project form. `tech` is free text, comma separated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectForm {
    pub title: String,
    pub description: String,
    pub tech: String,
    pub repo: String,
    pub demo: String,
}

impl ProjectForm {
    /// Populate the form from an existing record.
    pub fn from_fields(fields: &ProjectFields) -> Self {
        Self {
            title: fields.title.clone(),
            description: fields.description.clone(),
            tech: join_tech(&fields.tech),
            repo: fields.repo.clone().unwrap_or_default(),
            demo: fields.demo.clone().unwrap_or_default(),
        }
    }

    pub fn check(&self) -> Result<(), ClientError> {
        require(&[
            ("title", self.title.as_str()),
            ("description", self.description.as_str()),
        ])
    }

    pub fn to_fields(&self) -> Result<ProjectFields, ClientError> {
        self.check()?;
        Ok(ProjectFields {
            title: self.title.clone(),
            description: self.description.clone(),
            tech: split_tech(&self.tech),
            repo: non_empty(&self.repo),
            demo: non_empty(&self.demo),
        })
    }

    pub fn to_create(&self) -> Result<CreateProject, ClientError> {
        let fields = self.to_fields()?;
        Ok(CreateProject {
            title: Some(fields.title),
            description: Some(fields.description),
            tech: Some(fields.tech),
            repo: fields.repo,
            demo: fields.demo,
        })
    }

    /// Full-form update. Link fields are always sent; an emptied link is
    /// sent as `""`, which clears the stored value.
    pub fn to_update(&self) -> Result<UpdateProject, ClientError> {
        let fields = self.to_fields()?;
        Ok(UpdateProject {
            title: Some(fields.title),
            description: Some(fields.description),
            tech: Some(fields.tech),
            repo: Some(fields.repo.unwrap_or_default()),
            demo: Some(fields.demo.unwrap_or_default()),
        })
    }
}

/// The add-skill form. `level` is kept as typed and parsed on submit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SkillForm {
    pub name: String,
    pub level: String,
}

impl SkillForm {
    pub fn to_create(&self) -> Result<CreateSkill, ClientError> {
        require(&[("name", self.name.as_str()), ("level", self.level.as_str())])?;

        let level: f64 = self
            .level
            .trim()
            .parse()
            .ok()
            .filter(|level: &f64| level.is_finite())
            .ok_or_else(|| {
                ClientError::Invalid(format!("Skill level '{}' is not a number", self.level))
            })?;

        Ok(CreateSkill {
            name: Some(self.name.clone()),
            level: Some(level),
        })
    }
}

/// The contact form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn to_create(&self) -> Result<CreateContact, ClientError> {
        require(&[
            ("name", self.name.as_str()),
            ("email", self.email.as_str()),
            ("message", self.message.as_str()),
        ])?;

        Ok(CreateContact {
            name: Some(self.name.clone()),
            email: Some(self.email.clone()),
            message: Some(self.message.clone()),
        })
    }
}

// ---------------------------------------------------------------------------
// View state
// ---------------------------------------------------------------------------

fn position<T>(entries: &[Entry<T>], key: EntryKey) -> Option<usize> {
    entries.iter().position(|entry| entry.key() == key)
}

/// Everything the client renders.
///
/// Lists hold default entries first, then store-backed entries in the order
/// the API returned or created them. No deduplication is performed.
#[derive(Debug, Clone)]
pub struct PortfolioState {
    pub active: Section,
    pub projects: Vec<Entry<ProjectFields>>,
    pub skills: Vec<Entry<SkillFields>>,
    pub project_form: ProjectForm,
    /// Set while the project form edits an existing entry.
    pub editing: Option<EntryKey>,
    pub skill_form: SkillForm,
    pub contact_form: ContactForm,
    /// Set while a contact message is in flight; submit is disabled.
    pub sending: bool,
}

impl Default for PortfolioState {
    fn default() -> Self {
        Self::with_defaults(default_projects(), default_skills())
    }
}

impl PortfolioState {
    pub fn with_defaults(
        projects: Vec<Entry<ProjectFields>>,
        skills: Vec<Entry<SkillFields>>,
    ) -> Self {
        Self {
            active: Section::default(),
            projects,
            skills,
            project_form: ProjectForm::default(),
            editing: None,
            skill_form: SkillForm::default(),
            contact_form: ContactForm::default(),
            sending: false,
        }
    }

    pub fn set_section(&mut self, section: Section) {
        self.active = section;
    }

    /// Replace the store-backed projects with a fresh list, keeping defaults.
    pub fn load_projects(&mut self, projects: Vec<Project>) {
        self.projects.retain(|entry| !entry.is_persisted());
        self.projects.extend(projects.into_iter().map(Entry::from));
    }

    /// Replace the store-backed skills with a fresh list, keeping defaults.
    pub fn load_skills(&mut self, skills: Vec<Skill>) {
        self.skills.retain(|entry| !entry.is_persisted());
        self.skills.extend(skills.into_iter().map(Entry::from));
    }

    pub fn project(&self, key: EntryKey) -> Option<&Entry<ProjectFields>> {
        self.projects.iter().find(|entry| entry.key() == key)
    }

    /// Key of the project shown at a 1-based display position.
    pub fn project_key_at(&self, position: usize) -> Option<EntryKey> {
        position
            .checked_sub(1)
            .and_then(|idx| self.projects.get(idx))
            .map(Entry::key)
    }

    /// Key of the skill shown at a 1-based display position.
    pub fn skill_key_at(&self, position: usize) -> Option<EntryKey> {
        position
            .checked_sub(1)
            .and_then(|idx| self.skills.get(idx))
            .map(Entry::key)
    }

    /// Load an entry into the project form and remember which one it is.
    /// Returns `false` if no such entry exists.
    pub fn begin_edit(&mut self, key: EntryKey) -> bool {
        let Some(entry) = self.project(key) else {
            return false;
        };
        self.project_form = ProjectForm::from_fields(entry.data());
        self.editing = Some(key);
        true
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
        self.project_form = ProjectForm::default();
    }

    pub fn push_project(&mut self, project: Project) {
        self.projects.push(Entry::from(project));
    }

    /// Swap in the stored version of a project, matched by identifier.
    /// Returns `false` if the project is not in the list.
    pub fn replace_project(&mut self, project: Project) -> bool {
        let key = EntryKey::Persisted(project.id);
        match position(&self.projects, key) {
            Some(idx) => {
                self.projects[idx] = Entry::from(project);
                true
            }
            None => false,
        }
    }

    /// Overwrite a default project's fields. Returns `false` if it is gone.
    pub fn update_local_project(&mut self, local_id: u32, fields: ProjectFields) -> bool {
        match position(&self.projects, EntryKey::Local(local_id)) {
            Some(idx) => {
                *self.projects[idx].data_mut() = fields;
                true
            }
            None => false,
        }
    }

    /// Drop a project from view. Editing it is cancelled.
    pub fn remove_project(&mut self, key: EntryKey) -> bool {
        let Some(idx) = position(&self.projects, key) else {
            return false;
        };
        self.projects.remove(idx);
        if self.editing == Some(key) {
            self.cancel_edit();
        }
        true
    }

    pub fn push_skill(&mut self, skill: Skill) {
        self.skills.push(Entry::from(skill));
    }

    pub fn remove_skill(&mut self, key: EntryKey) -> bool {
        match position(&self.skills, key) {
            Some(idx) => {
                self.skills.remove(idx);
                true
            }
            None => false,
        }
    }
}
