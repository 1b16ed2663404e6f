use crate::model::{Catalog, Subject};
use crate::planner::Schedule;
use anyhow::{Context, Result};
use chrono::NaiveDate;

/// Document imprimable produit pour un planning.
#[derive(Debug, Clone)]
pub struct Report {
    pub subject_name: String,
    pub content: String,
}

/// Permet de customiser le rendu du document (texte, HTML, etc.).
pub trait ReportRenderer {
    fn render(
        &self,
        subject: &Subject,
        from: NaiveDate,
        to: NaiveDate,
        schedule: &Schedule,
    ) -> String;
}

/// Gabarit texte simple destiné à l'impression.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextReport;

impl ReportRenderer for TextReport {
    fn render(
        &self,
        subject: &Subject,
        from: NaiveDate,
        to: NaiveDate,
        schedule: &Schedule,
    ) -> String {
        let mut out = format!(
            "LECTURE PLAN - {name}\nPeriod: {from} to {to}\nTopics per day: {capacity}\n\n{body}\n",
            name = subject.name,
            from = from.format("%Y-%m-%d"),
            to = to.format("%Y-%m-%d"),
            capacity = schedule.topics_per_day,
            body = schedule.render(),
        );
        if let Some(overflow) = schedule.overflow {
            out.push_str(&format!(
                "\nWARNING: {count} topic(s) could not be scheduled before {last}.\n",
                count = overflow.unassigned,
                last = overflow.last_date.format("%Y-%m-%d"),
            ));
        }
        out
    }
}

/// Prépare le document imprimable d'un planning pour une matière.
pub fn prepare_report(
    catalog: &Catalog,
    subject_name: &str,
    from: NaiveDate,
    to: NaiveDate,
    schedule: &Schedule,
    renderer: &dyn ReportRenderer,
) -> Result<Report> {
    let subject = catalog
        .find_subject_by_name(subject_name)
        .with_context(|| format!("unknown subject: {subject_name}"))?;

    let content = renderer.render(subject, from, to, schedule);
    Ok(Report {
        subject_name: subject.name.clone(),
        content,
    })
}
