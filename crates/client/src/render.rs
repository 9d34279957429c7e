//! Plain-text rendering of the active section.

use std::fmt;

use crate::defaults::PROFILE;
use crate::entry::{Entry, EntryKey};
use crate::state::{PortfolioState, Section};

/// Width of a skill bar at 100%.
const BAR_WIDTH: usize = 20;

/// Render the navigation bar followed by the active section.
pub fn render(state: &PortfolioState) -> String {
    Page(state).to_string()
}

struct Page<'a>(&'a PortfolioState);

impl fmt::Display for Page<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.0;
        write_nav(f, state.active)?;
        writeln!(f)?;
        match state.active {
            Section::Home => write_home(f),
            Section::Projects => write_projects(f, state),
            Section::Skills => write_skills(f, state),
            Section::Contact => write_contact(f, state),
        }
    }
}

fn write_nav(f: &mut fmt::Formatter<'_>, active: Section) -> fmt::Result {
    let tabs: Vec<String> = Section::ALL
        .into_iter()
        .map(|section| {
            if section == active {
                format!("[{}]", section.label())
            } else {
                section.label().to_string()
            }
        })
        .collect();
    writeln!(f, "My Portfolio | {}", tabs.join("  "))
}

fn write_home(f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "Hi, I'm {}", PROFILE.name)?;
    writeln!(f, "A passionate {} {}", PROFILE.role, PROFILE.tagline)?;
    writeln!(f, "\nType `projects` to view projects or `contact` to get in touch.")
}

fn origin<T>(entry: &Entry<T>) -> &'static str {
    match entry.key() {
        EntryKey::Local(_) => "default",
        EntryKey::Persisted(_) => "saved",
    }
}

fn write_projects(f: &mut fmt::Formatter<'_>, state: &PortfolioState) -> fmt::Result {
    writeln!(f, "Projects")?;
    if state.projects.is_empty() {
        writeln!(f, "  (none)")?;
    }
    for (idx, entry) in state.projects.iter().enumerate() {
        let project = entry.data();
        writeln!(f, "{:>2}. {} ({})", idx + 1, project.title, origin(entry))?;
        writeln!(f, "    {}", project.description)?;
        if !project.tech.is_empty() {
            writeln!(f, "    tech: {}", project.tech.join(", "))?;
        }
        if let Some(repo) = &project.repo {
            writeln!(f, "    repo: {repo}")?;
        }
        if let Some(demo) = &project.demo {
            writeln!(f, "    demo: {demo}")?;
        }
    }

    let form = &state.project_form;
    let heading = match state.editing {
        Some(_) => "Update Project (`cancel` to stop editing)",
        None => "Add Project",
    };
    writeln!(f, "\n{heading}")?;
    writeln!(f, "  title: {}", form.title)?;
    writeln!(f, "  description: {}", form.description)?;
    writeln!(f, "  tech: {}", form.tech)?;
    writeln!(f, "  repo: {}", form.repo)?;
    writeln!(f, "  demo: {}", form.demo)
}

/// A bar proportional to `level`, clamped to 0..=100 for display.
pub fn skill_bar(level: f64) -> String {
    let filled = ((level.clamp(0.0, 100.0) / 100.0) * BAR_WIDTH as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

fn write_skills(f: &mut fmt::Formatter<'_>, state: &PortfolioState) -> fmt::Result {
    writeln!(f, "Skills")?;
    if state.skills.is_empty() {
        writeln!(f, "  (none)")?;
    }
    for (idx, entry) in state.skills.iter().enumerate() {
        let skill = entry.data();
        writeln!(
            f,
            "{:>2}. {:<18} {:>5}% {} ({})",
            idx + 1,
            skill.name,
            skill.level,
            skill_bar(skill.level),
            origin(entry)
        )?;
    }
    Ok(())
}

fn write_contact(f: &mut fmt::Formatter<'_>, state: &PortfolioState) -> fmt::Result {
    let form = &state.contact_form;
    writeln!(f, "Contact Me")?;
    writeln!(f, "  name: {}", form.name)?;
    writeln!(f, "  email: {}", form.email)?;
    writeln!(f, "  message: {}", form.message)?;
    writeln!(f, "  [{}]", if state.sending { "Sending..." } else { "Send" })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_marks_active_section() {
        let mut state = PortfolioState::default();
        state.set_section(Section::Skills);
        let text = render(&state);
        assert!(text.starts_with("My Portfolio | Home  Projects  [Skills]  Contact"));
    }

    #[test]
    fn home_introduces_the_owner() {
        let text = render(&PortfolioState::default());
        assert!(text.contains("Hi, I'm Dhanusri"));
        assert!(text.ends_with("get in touch.\n"));
    }

    #[test]
    fn projects_are_numbered_in_display_order() {
        let mut state = PortfolioState::default();
        state.set_section(Section::Projects);
        let text = render(&state);
        assert!(text.contains(" 1. Template (default)"));
        assert!(text.contains(" 2. Expense Tracker (default)"));
        assert!(text.contains("Add Project"));
    }

    #[test]
    fn editing_changes_form_heading() {
        let mut state = PortfolioState::default();
        state.set_section(Section::Projects);
        state.begin_edit(state.projects[0].key());
        assert!(render(&state).contains("Update Project"));
    }

    #[test]
    fn skill_bar_is_clamped_for_display() {
        assert_eq!(skill_bar(150.0), format!("[{}]", "#".repeat(BAR_WIDTH)));
        assert_eq!(skill_bar(-5.0), format!("[{}]", "-".repeat(BAR_WIDTH)));
        assert_eq!(skill_bar(50.0), format!("[{}{}]", "#".repeat(10), "-".repeat(10)));
    }

    #[test]
    fn contact_shows_sending_state() {
        let mut state = PortfolioState::default();
        state.set_section(Section::Contact);
        state.sending = true;
        assert!(render(&state).contains("[Sending...]"));
    }
}
