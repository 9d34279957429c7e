//! Line commands understood by the terminal front end.

use crate::state::{ContactForm, ProjectForm, Section, SkillForm};

/// Help text printed by `help`.
pub const HELP: &str = "\
Commands:
  home | projects | skills | contact       switch section
  project <title> | <description> | <tech, csv> | <repo> | <demo>
                                           add (or, while editing, update) a project;
                                           empty parts keep the form's value,
                                           `-` empties it (clears a stored link)
  edit <n>                                 edit project n
  cancel                                   stop editing
  delete <n>                               delete project n
  skill <name> <level>                     add a skill
  unskill <n>                              delete skill n
  send <name> | <email> | <message>        send a contact message
  reload                                   fetch projects and skills again
  help                                     show this text
  quit                                     exit";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Show(Section),
    Project(ProjectDraft),
    Edit(usize),
    Cancel,
    Delete(usize),
    Skill(SkillForm),
    Unskill(usize),
    Send(ContactForm),
    Reload,
    Help,
    Quit,
}

/// Written as a `project` part to empty that form field.
pub const CLEAR: &str = "-";

/// Project form input from one command line. Empty parts are `None`; a
/// [`CLEAR`] part is `Some("")`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectDraft {
    pub title: Option<String>,
    pub description: Option<String>,
    pub tech: Option<String>,
    pub repo: Option<String>,
    pub demo: Option<String>,
}

impl ProjectDraft {
    /// Overwrite the form fields this draft sets.
    pub fn apply_to(self, form: &mut ProjectForm) {
        let fields = [
            (self.title, &mut form.title),
            (self.description, &mut form.description),
            (self.tech, &mut form.tech),
            (self.repo, &mut form.repo),
            (self.demo, &mut form.demo),
        ];
        for (value, slot) in fields {
            if let Some(value) = value {
                *slot = value;
            }
        }
    }
}

fn pipe_parts(rest: &str) -> Vec<String> {
    rest.split('|').map(|part| part.trim().to_string()).collect()
}

fn part(parts: &[String], idx: usize) -> String {
    parts.get(idx).cloned().unwrap_or_default()
}

fn index(rest: &str) -> Result<usize, String> {
    rest.trim()
        .parse::<usize>()
        .ok()
        .filter(|n| *n > 0)
        .ok_or_else(|| format!("Expected a position (1, 2, ...), got '{}'", rest.trim()))
}

/// Parse one input line.
pub fn parse(line: &str) -> Result<Command, String> {
    let line = line.trim();
    let (word, rest) = line.split_once(' ').unwrap_or((line, ""));

    if let Ok(section) = word.parse::<Section>() {
        return Ok(Command::Show(section));
    }

    match word.to_ascii_lowercase().as_str() {
        "project" => {
            let parts = pipe_parts(rest);
            let optional = |idx: usize| match part(&parts, idx) {
                value if value.is_empty() => None,
                value if value == CLEAR => Some(String::new()),
                value => Some(value),
            };
            Ok(Command::Project(ProjectDraft {
                title: optional(0),
                description: optional(1),
                tech: optional(2),
                repo: optional(3),
                demo: optional(4),
            }))
        }
        "edit" => index(rest).map(Command::Edit),
        "cancel" => Ok(Command::Cancel),
        "delete" => index(rest).map(Command::Delete),
        "skill" => {
            let (name, level) = rest
                .trim()
                .rsplit_once(' ')
                .ok_or_else(|| "Usage: skill <name> <level>".to_string())?;
            Ok(Command::Skill(SkillForm {
                name: name.trim().to_string(),
                level: level.trim().to_string(),
            }))
        }
        "unskill" => index(rest).map(Command::Unskill),
        "send" => {
            let parts = pipe_parts(rest);
            Ok(Command::Send(ContactForm {
                name: part(&parts, 0),
                email: part(&parts, 1),
                message: part(&parts, 2),
            }))
        }
        "reload" => Ok(Command::Reload),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        "" => Err("Type `help` for commands".to_string()),
        other => Err(format!("Unknown command '{other}'. Type `help` for commands")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_names_switch_sections() {
        assert_eq!(parse("projects"), Ok(Command::Show(Section::Projects)));
        assert_eq!(parse("  Contact "), Ok(Command::Show(Section::Contact)));
    }

    #[test]
    fn project_parts_are_split_on_pipes() {
        let cmd = parse("project Folio | Portfolio site | Rust, axum | https://github.com/x/folio").unwrap();
        assert_eq!(
            cmd,
            Command::Project(ProjectDraft {
                title: Some("Folio".into()),
                description: Some("Portfolio site".into()),
                tech: Some("Rust, axum".into()),
                repo: Some("https://github.com/x/folio".into()),
                demo: None,
            })
        );
    }

    #[test]
    fn draft_keeps_form_values_for_empty_parts() {
        let mut form = ProjectForm {
            title: "Old".into(),
            description: "Kept".into(),
            ..Default::default()
        };
        let Ok(Command::Project(draft)) = parse("project New |  | Go") else {
            panic!("expected a project command");
        };
        draft.apply_to(&mut form);

        assert_eq!(form.title, "New");
        assert_eq!(form.description, "Kept");
        assert_eq!(form.tech, "Go");
    }

    #[test]
    fn dash_part_empties_the_field() {
        let mut form = ProjectForm {
            title: "Folio".into(),
            description: "Site".into(),
            repo: "https://github.com/x/folio".into(),
            demo: "https://folio.dev".into(),
            ..Default::default()
        };
        let Ok(Command::Project(draft)) = parse("project | | | - |") else {
            panic!("expected a project command");
        };
        draft.apply_to(&mut form);

        assert_eq!(form.title, "Folio");
        assert_eq!(form.repo, "");
        assert_eq!(form.demo, "https://folio.dev");
    }

    #[test]
    fn skill_name_may_contain_spaces() {
        assert_eq!(
            parse("skill CSS / Bootstrap 88"),
            Ok(Command::Skill(SkillForm {
                name: "CSS / Bootstrap".into(),
                level: "88".into(),
            }))
        );
    }

    #[test]
    fn positions_start_at_one() {
        assert_eq!(parse("delete 2"), Ok(Command::Delete(2)));
        assert!(parse("delete 0").is_err());
        assert!(parse("edit x").is_err());
    }

    #[test]
    fn send_fills_contact_form() {
        assert_eq!(
            parse("send Ada | ada@example.com | Hello there"),
            Ok(Command::Send(ContactForm {
                name: "Ada".into(),
                email: "ada@example.com".into(),
                message: "Hello there".into(),
            }))
        );
    }

    #[test]
    fn unknown_words_are_rejected() {
        assert!(parse("dance").is_err());
    }
}
