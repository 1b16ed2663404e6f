use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Durée fixe d'un topic, en minutes (non modifiable).
pub const TOPIC_DURATION_MINUTES: u32 = 30;

/// Identifiant fort pour Subject
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubjectId(String);

impl SubjectId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Matière enseignée (référentiel tenu par un collaborateur externe).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub id: SubjectId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Subject {
    pub fn new<N: Into<String>>(name: N) -> Self {
        Self {
            id: SubjectId::random(),
            name: name.into(),
            code: None,
            description: None,
        }
    }
}

/// Identifiant fort pour Topic
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TopicId(String);

impl TopicId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Chapitre d'une matière. La durée est fixe (30 minutes) ; l'ordre de
/// passage est donné par `sequence`, départagé par l'ordre d'insertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub id: TopicId,
    pub name: String,
    #[serde(default = "default_sequence")]
    pub sequence: i32,
    pub subject_id: SubjectId,
}

fn default_sequence() -> i32 {
    1
}

impl Topic {
    pub fn new<N: Into<String>>(name: N, sequence: i32, subject_id: SubjectId) -> Self {
        Self {
            id: TopicId::random(),
            name: name.into(),
            sequence,
            subject_id,
        }
    }

    /// Durée en minutes (constante).
    pub fn duration_minutes(&self) -> u32 {
        TOPIC_DURATION_MINUTES
    }
}

/// Identifiant fort pour Holiday
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HolidayId(String);

impl HolidayId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Jour férié. Seuls les fériés `active` participent au calcul.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    pub id: HolidayId,
    pub name: String,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl Holiday {
    pub fn new<N: Into<String>>(name: N, date: NaiveDate) -> Self {
        Self {
            id: HolidayId::random(),
            name: name.into(),
            date,
            description: None,
            active: true,
        }
    }

    /// Férié sans nom fourni : nom par défaut dérivé de la date.
    pub fn unnamed(date: NaiveDate) -> Self {
        Self::new(format!("Holiday - {}", date.format("%B %d, %Y")), date)
    }

    /// Année dérivée de la date.
    pub fn year(&self) -> i32 {
        self.date.year()
    }
}

impl fmt::Display for Holiday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.date.format("%Y-%m-%d"))
    }
}

/// Catalogue complet (matières, topics, fériés)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Catalog {
    pub subjects: Vec<Subject>,
    pub topics: Vec<Topic>,
    pub holidays: Vec<Holiday>,
}

impl Catalog {
    pub fn find_subject_by_name<'a>(&'a self, name: &str) -> Option<&'a Subject> {
        self.subjects.iter().find(|s| s.name == name)
    }
    pub fn find_subject_by_id<'a>(&'a self, id: &SubjectId) -> Option<&'a Subject> {
        self.subjects.iter().find(|s| &s.id == id)
    }
    pub fn find_topic_by_id<'a>(&'a self, id: &TopicId) -> Option<&'a Topic> {
        self.topics.iter().find(|t| &t.id == id)
    }

    /// Topics d'une matière, triés par `sequence` ; le tri stable conserve
    /// l'ordre d'insertion à séquence égale.
    pub fn topics_for_subject(&self, id: &SubjectId) -> Vec<&Topic> {
        let mut out: Vec<&Topic> = self.topics.iter().filter(|t| &t.subject_id == id).collect();
        out.sort_by_key(|t| t.sequence);
        out
    }

    /// Fériés actifs dont la date tombe dans `[from, to]`, triés par date.
    pub fn active_holidays_in(&self, from: NaiveDate, to: NaiveDate) -> Vec<&Holiday> {
        let mut out: Vec<&Holiday> = self
            .holidays
            .iter()
            .filter(|h| h.active && h.date >= from && h.date <= to)
            .collect();
        out.sort_by_key(|h| h.date);
        out
    }

    /// Supprime une matière ; ses topics suivent (cascade).
    pub fn remove_subject(&mut self, id: &SubjectId) {
        self.subjects.retain(|s| &s.id != id);
        self.topics.retain(|t| &t.subject_id != id);
    }
}
