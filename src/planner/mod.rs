mod allocate;
mod render;
mod types;

pub use allocate::capacity_per_day;
pub use types::{
    DayAssignment, ExcludedHoliday, Overflow, PlanError, PlanRequest, Schedule,
};

use crate::calendar::{self, DayKind};
use crate::model::{Catalog, Holiday, Subject, SubjectId, Topic, TopicId};
use chrono::NaiveDate;
use std::collections::{BTreeSet, HashSet};

/// Planner : encapsule un Catalog et en dérive des plannings.
#[derive(Debug, Default)]
pub struct Planner {
    catalog: Catalog,
}

impl Planner {
    pub fn new() -> Self {
        Self {
            catalog: Catalog::default(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
    pub fn catalog_mut(&mut self) -> &mut Catalog {
        &mut self.catalog
    }

    pub fn add_subject(&mut self, subject: Subject) -> SubjectId {
        let id = subject.id.clone();
        self.catalog.subjects.push(subject);
        id
    }

    pub fn add_topics(&mut self, topics: Vec<Topic>) {
        self.catalog.topics.extend(topics);
    }

    pub fn add_holidays(&mut self, holidays: Vec<Holiday>) {
        self.catalog.holidays.extend(holidays);
    }

    /// Calcule le planning demandé. Fonction pure de la demande et de
    /// l'état du catalogue : mêmes entrées, même résultat.
    pub fn plan(&self, request: &PlanRequest) -> Result<Schedule, PlanError> {
        request.validate()?;

        let subject = self
            .catalog
            .find_subject_by_id(&request.subject)
            .ok_or_else(|| PlanError::UnknownSubject(request.subject.as_str().to_string()))?;
        let topics = self.resolve_topics(subject, request)?;

        let total_days = (request.to_date - request.from_date).num_days() + 1;
        let capacity = allocate::capacity_per_day(request.hours_per_day);

        // Sélection vide : rien à planifier, pas d'erreur.
        if topics.is_empty() {
            return Ok(Schedule {
                total_days,
                topics_per_day: capacity,
                excluded_holidays: Vec::new(),
                days: Vec::new(),
                overflow: None,
            });
        }

        let holidays = self
            .catalog
            .active_holidays_in(request.from_date, request.to_date);
        let holiday_dates: BTreeSet<NaiveDate> = holidays.iter().map(|h| h.date).collect();

        // Fériés en collision avec un jour de cours, en ordre de date.
        let excluded_holidays: Vec<ExcludedHoliday> = holidays
            .iter()
            .filter(|h| {
                calendar::classify_day(h.date, &request.teaching_days, &holiday_dates)
                    == DayKind::HolidayCollision
            })
            .map(|h| ExcludedHoliday {
                date: h.date,
                name: h.name.clone(),
            })
            .collect();

        let names: Vec<String> = topics.iter().map(|t| t.name.clone()).collect();
        let dates = calendar::teaching_dates(
            request.from_date,
            request.to_date,
            &request.teaching_days,
            &holiday_dates,
        );
        let (days, unassigned) = allocate::allocate(&names, capacity, dates);

        let overflow = (unassigned > 0).then_some(Overflow {
            unassigned,
            last_date: request.to_date,
        });

        Ok(Schedule {
            total_days,
            topics_per_day: capacity,
            excluded_holidays,
            days,
            overflow,
        })
    }

    /// Résout la sélection de topics : tous ceux de la matière par défaut,
    /// sinon la sélection explicite restreinte à l'ordre stable du
    /// catalogue. Les topics d'une autre matière sont rejetés nommément.
    fn resolve_topics<'a>(
        &'a self,
        subject: &Subject,
        request: &PlanRequest,
    ) -> Result<Vec<&'a Topic>, PlanError> {
        let ordered = self.catalog.topics_for_subject(&request.subject);
        let ids = match &request.topics {
            None => return Ok(ordered),
            Some(ids) => ids,
        };

        let mut mismatched = Vec::new();
        for id in ids {
            let topic = self
                .catalog
                .find_topic_by_id(id)
                .ok_or_else(|| PlanError::UnknownTopic(id.as_str().to_string()))?;
            if topic.subject_id != request.subject {
                mismatched.push(topic.name.clone());
            }
        }
        if !mismatched.is_empty() {
            return Err(PlanError::TopicSubjectMismatch {
                subject: subject.name.clone(),
                topics: mismatched.join(", "),
            });
        }

        let wanted: HashSet<&TopicId> = ids.iter().collect();
        Ok(ordered
            .into_iter()
            .filter(|t| wanted.contains(&t.id))
            .collect())
    }
}
