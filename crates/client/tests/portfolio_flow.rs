mod common;

use assert_matches::assert_matches;
use sqlx::PgPool;

use common::{spawn_api, RecordingNotifier};
use folio_client::api::PortfolioApi;
use folio_client::app::Portfolio;
use folio_client::entry::EntryKey;
use folio_client::error::ClientError;
use folio_client::state::{ContactForm, ProjectForm, SkillForm};
use folio_core::models::contact::CreateContact;
use folio_core::models::project::CreateProject;

#[sqlx::test(migrations = "../db/migrations")]
async fn load_appends_stored_records_after_defaults(pool: PgPool) {
    let url = spawn_api(pool).await;
    let api = PortfolioApi::new(&url);
    let stored = api
        .create_project(&CreateProject {
            title: Some("Folio".into()),
            description: Some("Portfolio API".into()),
            tech: Some(vec!["Rust".into()]),
            ..Default::default()
        })
        .await
        .unwrap();

    let mut portfolio = Portfolio::new(api, RecordingNotifier::default());
    portfolio.load().await;

    let state = portfolio.state();
    assert_eq!(state.projects.len(), 3);
    assert_eq!(state.projects[0].data().title, "Template");
    assert_eq!(state.projects[2].key(), EntryKey::Persisted(stored.id));
    assert_eq!(state.projects[2].data().tech, vec!["Rust".to_string()]);
    assert_eq!(state.skills.len(), 6);

    // Reloading replaces stored entries instead of appending them again.
    portfolio.load().await;
    assert_eq!(portfolio.state().projects.len(), 3);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn project_add_edit_delete(pool: PgPool) {
    let url = spawn_api(pool).await;
    let api = PortfolioApi::new(&url);
    let mut portfolio = Portfolio::new(api.clone(), RecordingNotifier::default());
    portfolio.load().await;

    portfolio.state_mut().project_form = ProjectForm {
        title: "Weather".into(),
        description: "Forecast widget".into(),
        tech: "React, , CSS".into(),
        repo: "https://github.com/example/weather".into(),
        demo: String::new(),
    };
    portfolio.submit_project().await.unwrap();

    let state = portfolio.state();
    assert_eq!(state.projects.len(), 3);
    assert_eq!(state.project_form, ProjectForm::default());
    let key = state.project_key_at(3).unwrap();
    assert_matches!(key, EntryKey::Persisted(_));
    assert_eq!(
        state.projects[2].data().tech,
        vec!["React".to_string(), "CSS".to_string()]
    );

    assert!(portfolio.edit_project(key));
    assert_eq!(portfolio.state().project_form.title, "Weather");
    portfolio.state_mut().project_form.description = "Seven-day forecast".into();
    portfolio.submit_project().await.unwrap();

    assert_eq!(portfolio.state().editing, None);
    assert_eq!(portfolio.state().projects.len(), 3);
    assert_eq!(portfolio.state().projects[2].data().description, "Seven-day forecast");
    let stored = api.list_projects().await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].description, "Seven-day forecast");
    assert_eq!(stored[0].repo.as_deref(), Some("https://github.com/example/weather"));

    portfolio.delete_project(key).await.unwrap();
    assert_eq!(portfolio.state().projects.len(), 2);
    assert!(api.list_projects().await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn skill_add_and_delete(pool: PgPool) {
    let url = spawn_api(pool).await;
    let api = PortfolioApi::new(&url);
    let mut portfolio = Portfolio::new(api.clone(), RecordingNotifier::default());

    portfolio.state_mut().skill_form = SkillForm {
        name: "Go".into(),
        level: "85".into(),
    };
    portfolio.submit_skill().await.unwrap();

    let state = portfolio.state();
    assert_eq!(state.skills.len(), 7);
    assert_eq!(state.skills[6].data().name, "Go");
    assert_eq!(state.skills[6].data().level, 85.0);
    assert_eq!(state.skill_form, SkillForm::default());

    let key = state.skill_key_at(7).unwrap();
    portfolio.delete_skill(key).await.unwrap();
    assert_eq!(portfolio.state().skills.len(), 6);
    assert!(api.list_skills().await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn contact_shows_server_acknowledgement(pool: PgPool) {
    let url = spawn_api(pool).await;
    let notifier = RecordingNotifier::default();
    let mut portfolio = Portfolio::new(PortfolioApi::new(&url), notifier.clone());

    portfolio.state_mut().contact_form = ContactForm {
        name: "Ada".into(),
        email: "ada@example.com".into(),
        message: "Hello!".into(),
    };
    portfolio.submit_contact().await;

    assert_eq!(notifier.alerts(), vec!["Message saved successfully!".to_string()]);
    assert_eq!(portfolio.state().contact_form, ContactForm::default());
    assert!(!portfolio.state().sending);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn server_validation_message_is_surfaced(pool: PgPool) {
    let url = spawn_api(pool).await;
    let api = PortfolioApi::new(&url);

    let result = api
        .send_contact(&CreateContact {
            name: Some("Ada".into()),
            email: None,
            message: Some("Hello!".into()),
        })
        .await;

    assert_matches!(
        result,
        Err(ClientError::Api { status: 400, ref msg }) if msg == "Contact validation failed: email is required"
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn updating_a_vanished_project_keeps_the_form(pool: PgPool) {
    let url = spawn_api(pool).await;
    let api = PortfolioApi::new(&url);
    let stored = api
        .create_project(&CreateProject {
            title: Some("Gone".into()),
            description: Some("Soon deleted".into()),
            ..Default::default()
        })
        .await
        .unwrap();

    let mut portfolio = Portfolio::new(api.clone(), RecordingNotifier::default());
    portfolio.load().await;
    let key = EntryKey::Persisted(stored.id);
    assert!(portfolio.edit_project(key));

    api.delete_project(stored.id).await.unwrap();
    portfolio.state_mut().project_form.title = "Renamed".into();
    let result = portfolio.submit_project().await;

    assert_matches!(result, Err(ClientError::Api { status: 404, .. }));
    assert_eq!(portfolio.state().editing, Some(key));
    assert_eq!(portfolio.state().project_form.title, "Renamed");
    assert_eq!(portfolio.state().projects[2].data().title, "Gone");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn emptied_link_is_cleared_on_update(pool: PgPool) {
    let url = spawn_api(pool).await;
    let api = PortfolioApi::new(&url);
    let stored = api
        .create_project(&CreateProject {
            title: Some("Linked".into()),
            description: Some("Has a repo".into()),
            repo: Some("https://github.com/example/linked".into()),
            ..Default::default()
        })
        .await
        .unwrap();

    let mut portfolio = Portfolio::new(api.clone(), RecordingNotifier::default());
    portfolio.load().await;
    assert!(portfolio.edit_project(EntryKey::Persisted(stored.id)));
    portfolio.state_mut().project_form.repo.clear();
    portfolio.submit_project().await.unwrap();

    assert_eq!(portfolio.state().projects[2].data().repo, None);
    let refreshed = api.list_projects().await.unwrap();
    assert_eq!(refreshed[0].repo, None);
    assert_eq!(refreshed[0].title, "Linked");
}
