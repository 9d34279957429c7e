use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio_client::api::PortfolioApi;
use folio_client::app::Portfolio;
use folio_client::command::{self, Command, HELP};
use folio_client::config::ClientConfig;
use folio_client::entry::EntryKey;
use folio_client::error::ClientError;
use folio_client::notify::Notifier;
use folio_client::render::render;
use folio_client::state::Section;

/// Prints alerts inline, ahead of the next render.
struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn alert(&self, message: &str) {
        println!("[!] {message}");
    }
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // Logs go to stderr so they do not interleave with the rendered page.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "folio_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = ClientConfig::from_env();
    tracing::info!(api_url = %config.api_url, "Loaded client configuration");

    let mut portfolio = Portfolio::new(PortfolioApi::new(config.api_url), TerminalNotifier);
    portfolio.load().await;
    println!("{}", render(portfolio.state()));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(err) => {
                tracing::error!(error = %err, "Failed to read input");
                break;
            }
        };

        let command = match command::parse(&line) {
            Ok(command) => command,
            Err(msg) => {
                println!("{msg}");
                continue;
            }
        };

        if command == Command::Quit {
            break;
        }
        if command == Command::Help {
            println!("{HELP}");
            continue;
        }

        if let Err(err) = dispatch(&mut portfolio, command).await {
            match err.user_notice() {
                Some(notice) => println!("{notice}"),
                None => tracing::error!(error = %err, "Action failed"),
            }
        }
        println!("{}", render(portfolio.state()));
    }
}

async fn dispatch<N: Notifier>(
    portfolio: &mut Portfolio<N>,
    command: Command,
) -> Result<(), ClientError> {
    match command {
        Command::Show(section) => portfolio.show(section),
        Command::Project(draft) => {
            portfolio.show(Section::Projects);
            draft.apply_to(&mut portfolio.state_mut().project_form);
            portfolio.submit_project().await?;
        }
        Command::Edit(position) => {
            portfolio.show(Section::Projects);
            let key = project_at(portfolio, position)?;
            portfolio.edit_project(key);
        }
        Command::Cancel => portfolio.cancel_edit(),
        Command::Delete(position) => {
            portfolio.show(Section::Projects);
            let key = project_at(portfolio, position)?;
            portfolio.delete_project(key).await?;
        }
        Command::Skill(form) => {
            portfolio.show(Section::Skills);
            portfolio.state_mut().skill_form = form;
            portfolio.submit_skill().await?;
        }
        Command::Unskill(position) => {
            portfolio.show(Section::Skills);
            let key = portfolio
                .state()
                .skill_key_at(position)
                .ok_or_else(|| ClientError::Invalid(format!("No skill at position {position}")))?;
            portfolio.delete_skill(key).await?;
        }
        Command::Send(form) => {
            portfolio.show(Section::Contact);
            portfolio.state_mut().contact_form = form;
            portfolio.submit_contact().await;
        }
        Command::Reload => portfolio.load().await,
        Command::Help | Command::Quit => {}
    }
    Ok(())
}

fn project_at<N: Notifier>(
    portfolio: &Portfolio<N>,
    position: usize,
) -> Result<EntryKey, ClientError> {
    portfolio
        .state()
        .project_key_at(position)
        .ok_or_else(|| ClientError::Invalid(format!("No project at position {position}")))
}
