//! REST client for the portfolio API.
//!
//! One method per endpoint, using [`reqwest`]. Write endpoints answer with a
//! `{ success, ... }` envelope; a `success: false` answer is surfaced as
//! [`ClientError::Rejected`] and a non-2xx answer as [`ClientError::Api`].

use folio_core::envelope::{MessageEnvelope, ProjectEnvelope, SkillEnvelope};
use folio_core::models::contact::CreateContact;
use folio_core::models::project::{CreateProject, Project, UpdateProject};
use folio_core::models::skill::{CreateSkill, Skill};
use folio_core::types::DbId;
use serde::de::DeserializeOwned;

use crate::error::ClientError;

/// HTTP client for a single portfolio API instance.
#[derive(Debug, Clone)]
pub struct PortfolioApi {
    client: reqwest::Client,
    api_url: String,
}

impl PortfolioApi {
    /// Create a new API client.
    ///
    /// * `api_url` - Base HTTP URL, e.g. `http://localhost:5000`.
    pub fn new(api_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), api_url)
    }

    /// Create an API client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, api_url: impl Into<String>) -> Self {
        Self {
            client,
            api_url: api_url.into(),
        }
    }

    // ---- projects ----

    /// `GET /api/projects`
    pub async fn list_projects(&self) -> Result<Vec<Project>, ClientError> {
        let response = self.client.get(self.url("/api/projects")).send().await?;
        Self::parse_response(response).await
    }

    /// `POST /api/projects`, returning the stored project.
    pub async fn create_project(&self, input: &CreateProject) -> Result<Project, ClientError> {
        let response = self
            .client
            .post(self.url("/api/projects"))
            .json(input)
            .send()
            .await?;

        let envelope: ProjectEnvelope = Self::parse_response(response).await?;
        Self::accept(envelope.success, || "project create".to_string())?;
        Ok(envelope.project)
    }

    /// `PUT /api/projects/{id}`, returning the updated project.
    pub async fn update_project(
        &self,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Project, ClientError> {
        let response = self
            .client
            .put(self.url(&format!("/api/projects/{id}")))
            .json(input)
            .send()
            .await?;

        let envelope: ProjectEnvelope = Self::parse_response(response).await?;
        Self::accept(envelope.success, || format!("project {id} update"))?;
        Ok(envelope.project)
    }

    /// `DELETE /api/projects/{id}`
    pub async fn delete_project(&self, id: DbId) -> Result<(), ClientError> {
        let response = self
            .client
            .delete(self.url(&format!("/api/projects/{id}")))
            .send()
            .await?;

        Self::acknowledged(response).await.map(|_| ())
    }

    // ---- skills ----

    /// `GET /api/skills`
    pub async fn list_skills(&self) -> Result<Vec<Skill>, ClientError> {
        let response = self.client.get(self.url("/api/skills")).send().await?;
        Self::parse_response(response).await
    }

    /// `POST /api/skills`, returning the stored skill.
    pub async fn create_skill(&self, input: &CreateSkill) -> Result<Skill, ClientError> {
        let response = self
            .client
            .post(self.url("/api/skills"))
            .json(input)
            .send()
            .await?;

        let envelope: SkillEnvelope = Self::parse_response(response).await?;
        Self::accept(envelope.success, || "skill create".to_string())?;
        Ok(envelope.skill)
    }

    /// `DELETE /api/skills/{id}`
    pub async fn delete_skill(&self, id: DbId) -> Result<(), ClientError> {
        let response = self
            .client
            .delete(self.url(&format!("/api/skills/{id}")))
            .send()
            .await?;

        Self::acknowledged(response).await.map(|_| ())
    }

    // ---- contact ----

    /// `POST /api/contact`, returning the server's acknowledgement text.
    pub async fn send_contact(&self, input: &CreateContact) -> Result<String, ClientError> {
        let response = self
            .client
            .post(self.url("/api/contact"))
            .json(input)
            .send()
            .await?;

        Self::acknowledged(response).await
    }

    // ---- private helpers ----

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path)
    }

    /// Ensure the response has a success status code. On failure the body is
    /// decoded as an error envelope for its `msg`, falling back to the raw
    /// text.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            let msg = serde_json::from_str::<MessageEnvelope>(&body)
                .map(|envelope| envelope.msg)
                .unwrap_or(body);
            return Err(ClientError::Api {
                status: status.as_u16(),
                msg,
            });
        }
        Ok(response)
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }

    /// Parse a `{ success, msg }` acknowledgement, returning `msg`.
    async fn acknowledged(response: reqwest::Response) -> Result<String, ClientError> {
        let envelope: MessageEnvelope = Self::parse_response(response).await?;
        if envelope.success {
            Ok(envelope.msg)
        } else {
            Err(ClientError::Rejected(envelope.msg))
        }
    }

    fn accept(success: bool, what: impl FnOnce() -> String) -> Result<(), ClientError> {
        if success {
            Ok(())
        } else {
            Err(ClientError::Rejected(format!("{} was not acknowledged", what())))
        }
    }
}
