//! The client controller: user actions in, API calls out, view state
//! updated from the responses.
//!
//! Persisted records are changed in the view only after the API has
//! acknowledged the call; a failed call leaves the view untouched. Default
//! records never reach the network.

use crate::api::PortfolioApi;
use crate::entry::EntryKey;
use crate::error::ClientError;
use crate::notify::Notifier;
use crate::state::{ContactForm, PortfolioState, ProjectForm, Section, SkillForm};

/// Shown when the contact form could not reach the API.
pub const CONTACT_FAILED: &str = "Failed to send. Please try again.";

/// Shown when the API acknowledged a contact message without text.
pub const CONTACT_SENT: &str = "Message sent.";

pub struct Portfolio<N> {
    api: PortfolioApi,
    state: PortfolioState,
    notifier: N,
}

impl<N: Notifier> Portfolio<N> {
    /// A client seeded with the built-in default records.
    pub fn new(api: PortfolioApi, notifier: N) -> Self {
        Self::with_state(api, PortfolioState::default(), notifier)
    }

    pub fn with_state(api: PortfolioApi, state: PortfolioState, notifier: N) -> Self {
        Self {
            api,
            state,
            notifier,
        }
    }

    pub fn state(&self) -> &PortfolioState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut PortfolioState {
        &mut self.state
    }

    pub fn show(&mut self, section: Section) {
        self.state.set_section(section);
    }

    /// Fetch projects and skills concurrently.
    ///
    /// A failed fetch is logged and leaves that list with only its defaults.
    pub async fn load(&mut self) {
        let (projects, skills) = tokio::join!(self.api.list_projects(), self.api.list_skills());

        match projects {
            Ok(projects) => {
                tracing::debug!(count = projects.len(), "Fetched projects");
                self.state.load_projects(projects);
            }
            Err(err) => tracing::error!(error = %err, "Fetch projects error"),
        }

        match skills {
            Ok(skills) => {
                tracing::debug!(count = skills.len(), "Fetched skills");
                self.state.load_skills(skills);
            }
            Err(err) => tracing::error!(error = %err, "Fetch skills error"),
        }
    }

    // ---- projects ----

    /// Start editing a project. Returns `false` if no such entry exists.
    pub fn edit_project(&mut self, key: EntryKey) -> bool {
        self.state.begin_edit(key)
    }

    pub fn cancel_edit(&mut self) {
        self.state.cancel_edit();
    }

    /// Submit the project form.
    ///
    /// - No entry being edited: create through the API and append the result.
    /// - Editing a stored project: update through the API and swap the
    ///   result in place.
    /// - Editing a default project: change it locally; nothing is sent.
    ///
    /// The form is cleared only when the submit went through.
    pub async fn submit_project(&mut self) -> Result<(), ClientError> {
        match self.state.editing {
            None => {
                let input = self.state.project_form.to_create()?;
                let project = self.api.create_project(&input).await?;
                tracing::info!(id = project.id, title = %project.title, "Project added");
                self.state.push_project(project);
            }
            Some(EntryKey::Persisted(id)) => {
                let input = self.state.project_form.to_update()?;
                let project = self.api.update_project(id, &input).await?;
                tracing::info!(id, title = %project.title, "Project updated");
                if !self.state.replace_project(project) {
                    tracing::warn!(id, "Updated project is no longer in view");
                }
            }
            Some(EntryKey::Local(local_id)) => {
                let fields = self.state.project_form.to_fields()?;
                if !self.state.update_local_project(local_id, fields) {
                    tracing::warn!(local_id, "Edited default project is no longer in view");
                }
            }
        }

        self.state.editing = None;
        self.state.project_form = ProjectForm::default();
        Ok(())
    }

    /// Delete a project. Stored projects leave the view once the API confirms.
    pub async fn delete_project(&mut self, key: EntryKey) -> Result<(), ClientError> {
        if let EntryKey::Persisted(id) = key {
            self.api.delete_project(id).await?;
            tracing::info!(id, "Project deleted");
        }
        self.state.remove_project(key);
        Ok(())
    }

    // ---- skills ----

    /// Submit the skill form: create through the API, append, clear the form.
    pub async fn submit_skill(&mut self) -> Result<(), ClientError> {
        let input = self.state.skill_form.to_create()?;
        let skill = self.api.create_skill(&input).await?;
        tracing::info!(id = skill.id, name = %skill.name, "Skill added");

        self.state.push_skill(skill);
        self.state.skill_form = SkillForm::default();
        Ok(())
    }

    /// Delete a skill. Stored skills leave the view once the API confirms.
    pub async fn delete_skill(&mut self, key: EntryKey) -> Result<(), ClientError> {
        if let EntryKey::Persisted(id) = key {
            self.api.delete_skill(id).await?;
            tracing::info!(id, "Skill deleted");
        }
        self.state.remove_skill(key);
        Ok(())
    }

    // ---- contact ----

    /// Send the contact form and tell the user how it went.
    ///
    /// The server's message is shown whether it accepted the message or
    /// rejected it; a call that never got an answer shows
    /// [`CONTACT_FAILED`]. Once a request was made the form is cleared
    /// regardless of the outcome. A form that fails its local checks is
    /// reported and kept, since nothing was sent. `sending` is set while the
    /// request is in flight.
    pub async fn submit_contact(&mut self) {
        let input = match self.state.contact_form.to_create() {
            Ok(input) => input,
            Err(err) => {
                self.notifier.alert(&err.to_string());
                return;
            }
        };

        self.state.sending = true;

        let notice = match self.api.send_contact(&input).await {
            Ok(msg) if msg.is_empty() => CONTACT_SENT.to_string(),
            Ok(msg) => msg,
            Err(err) => match err.server_message() {
                Some(msg) => msg.to_string(),
                None => {
                    tracing::error!(error = %err, "Contact submit failed");
                    CONTACT_FAILED.to_string()
                }
            },
        };
        self.notifier.alert(&notice);

        self.state.contact_form = ContactForm::default();
        self.state.sending = false;
    }
}
