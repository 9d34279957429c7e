//! Built-in seed content shown before (and alongside) stored records.

use crate::entry::{Entry, ProjectFields, SkillFields};

/// Who the portfolio belongs to; rendered on the home section.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub name: &'static str,
    pub role: &'static str,
    pub tagline: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Dhanusri",
    role: "Frontend Engineer",
    tagline: "who loves building modern, responsive, and user-friendly web apps with React",
};

/// Default projects, numbered from 1 in display order.
pub fn default_projects() -> Vec<Entry<ProjectFields>> {
    vec![
        Entry::Local {
            local_id: 1,
            data: ProjectFields {
                title: "Template".into(),
                description: "Designed and developed 2-3 responsive website templates using HTML5 and CSS3.".into(),
                tech: vec!["HTML".into(), "CSS".into(), "Postgres".into()],
                repo: Some("https://github.com/DhanusriRajendrans/projects".into()),
                demo: Some("#".into()),
            },
        },
        Entry::Local {
            local_id: 2,
            data: ProjectFields {
                title: "Expense Tracker".into(),
                description: "Built a console-based expense management system with features like Add, Update, Delete, Monthly Summary, Budget Tracking, and Export to CSV".into(),
                tech: vec!["Java".into()],
                repo: Some("https://github.com/DhanusriRajendrans/expense_tracker".into()),
                demo: Some("#".into()),
            },
        },
    ]
}

/// Default skills, numbered from 1 in display order.
pub fn default_skills() -> Vec<Entry<SkillFields>> {
    [
        ("React", 90.0),
        ("JavaScript", 92.0),
        ("TypeScript", 78.0),
        ("Node.js", 80.0),
        ("CSS / Bootstrap", 88.0),
        ("Java", 70.0),
    ]
    .into_iter()
    .zip(1..)
    .map(|((name, level), local_id)| Entry::Local {
        local_id,
        data: SkillFields {
            name: name.to_string(),
            level,
        },
    })
    .collect()
}
