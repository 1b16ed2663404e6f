#![forbid(unsafe_code)]
//! Plancours — bibliothèque de planification de cours locale (sans BD).
//!
//! - Stockage fichiers (JSON/CSV).
//! - Classement des jours : cours, férié exclu, sans cours.
//! - Allocation des topics par blocs de 30 minutes, bornée par la plage.
//! - Dates civiles uniquement ; rendu texte prêt à imprimer.

pub mod calendar;
pub mod io;
pub mod model;
pub mod planner;
pub mod report;
pub mod storage;

pub use calendar::{classify_day, teaching_dates, DayKind, TeachingDays};
pub use model::{
    Catalog, Holiday, HolidayId, Subject, SubjectId, Topic, TopicId, TOPIC_DURATION_MINUTES,
};
pub use planner::{
    capacity_per_day, DayAssignment, ExcludedHoliday, Overflow, PlanError, PlanRequest, Planner,
    Schedule,
};
pub use report::{prepare_report, Report, ReportRenderer, TextReport};
pub use storage::{JsonStorage, Storage};
