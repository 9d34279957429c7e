//! Tagged entries for records shown in the client.
//!
//! A rendered list mixes built-in default records, which exist only in the
//! client, with records the store assigned an identifier to. [`Entry`] keeps
//! both in one ordered list with a shared display shape.

use folio_core::models::project::Project;
use folio_core::models::skill::Skill;
use folio_core::types::DbId;

/// Address of an entry in a rendered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKey {
    /// A client-only default record.
    Local(u32),
    /// A store-backed record.
    Persisted(DbId),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Entry<T> {
    Local { local_id: u32, data: T },
    Persisted { id: DbId, data: T },
}

impl<T> Entry<T> {
    pub fn key(&self) -> EntryKey {
        match self {
            Entry::Local { local_id, .. } => EntryKey::Local(*local_id),
            Entry::Persisted { id, .. } => EntryKey::Persisted(*id),
        }
    }

    pub fn data(&self) -> &T {
        match self {
            Entry::Local { data, .. } | Entry::Persisted { data, .. } => data,
        }
    }

    pub fn data_mut(&mut self) -> &mut T {
        match self {
            Entry::Local { data, .. } | Entry::Persisted { data, .. } => data,
        }
    }

    pub fn is_persisted(&self) -> bool {
        matches!(self, Entry::Persisted { .. })
    }
}

/// Display shape shared by default and stored projects.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProjectFields {
    pub title: String,
    pub description: String,
    pub tech: Vec<String>,
    pub repo: Option<String>,
    pub demo: Option<String>,
}

/// Display shape shared by default and stored skills.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillFields {
    pub name: String,
    pub level: f64,
}

impl From<Project> for Entry<ProjectFields> {
    fn from(project: Project) -> Self {
        Entry::Persisted {
            id: project.id,
            data: ProjectFields {
                title: project.title,
                description: project.description,
                tech: project.tech,
                repo: project.repo,
                demo: project.demo,
            },
        }
    }
}

impl From<Skill> for Entry<SkillFields> {
    fn from(skill: Skill) -> Self {
        Entry::Persisted {
            id: skill.id,
            data: SkillFields {
                name: skill.name,
                level: skill.level,
            },
        }
    }
}
