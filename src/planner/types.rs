use crate::calendar::TeachingDays;
use crate::model::{SubjectId, TopicId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Demande de planification : les cinq entrées du calcul.
#[derive(Debug, Clone)]
pub struct PlanRequest {
    pub subject: SubjectId,
    /// Sélection de topics ; `None` = tous les topics de la matière.
    pub topics: Option<Vec<TopicId>>,
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
    /// Heures de cours par jour, dans `(0, 12]`.
    pub hours_per_day: f64,
    pub teaching_days: TeachingDays,
}

impl PlanRequest {
    pub fn new(subject: SubjectId, from_date: NaiveDate, to_date: NaiveDate) -> Self {
        Self {
            subject,
            topics: None,
            from_date,
            to_date,
            hours_per_day: 2.0,
            teaching_days: TeachingDays::weekdays(),
        }
    }

    pub(crate) fn validate(&self) -> Result<(), PlanError> {
        if self.to_date < self.from_date {
            return Err(PlanError::InvalidDateRange {
                from: self.from_date,
                to: self.to_date,
            });
        }
        if self.hours_per_day <= 0.0 || self.hours_per_day > 12.0 {
            return Err(PlanError::HoursOutOfRange(self.hours_per_day));
        }
        Ok(())
    }
}

#[derive(Error, Debug)]
pub enum PlanError {
    #[error("invalid date range: end date {to} precedes start date {from}")]
    InvalidDateRange { from: NaiveDate, to: NaiveDate },
    #[error("hours per day out of range: {0} (expected 0 < hours <= 12)")]
    HoursOutOfRange(f64),
    #[error("unknown subject: {0}")]
    UnknownSubject(String),
    #[error("unknown topic: {0}")]
    UnknownTopic(String),
    #[error("topics outside subject {subject}: {topics}")]
    TopicSubjectMismatch { subject: String, topics: String },
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Férié écarté du planning (collision avec un jour de cours).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExcludedHoliday {
    pub date: NaiveDate,
    pub name: String,
}

/// Topics affectés à un jour de cours. `number` démarre à 1 et ne compte
/// que les jours effectivement affectés.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayAssignment {
    pub number: u32,
    pub date: NaiveDate,
    pub topics: Vec<String>,
}

/// Dépassement : la plage de dates est épuisée avant les topics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Overflow {
    /// Topics restés sans jour de cours.
    pub unassigned: usize,
    /// Dernière date examinée par le curseur (borne haute de la plage).
    pub last_date: NaiveDate,
}

/// Résultat complet d'une planification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Jours civils de la plage, bornes incluses.
    pub total_days: i64,
    /// Capacité d'un jour de cours (créneaux de 30 minutes).
    pub topics_per_day: usize,
    pub excluded_holidays: Vec<ExcludedHoliday>,
    pub days: Vec<DayAssignment>,
    pub overflow: Option<Overflow>,
}

impl Schedule {
    pub fn is_empty(&self) -> bool {
        self.days.is_empty() && self.excluded_holidays.is_empty()
    }

    /// Rendu texte (bloc des fériés exclus puis une ligne par jour).
    pub fn render(&self) -> String {
        super::render::render(self)
    }
}
