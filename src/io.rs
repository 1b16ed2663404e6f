use crate::model::{Catalog, Holiday, SubjectId, Topic};
use crate::planner::Schedule;
use anyhow::{bail, Context};
use chrono::NaiveDate;
use csv::{ReaderBuilder, WriterBuilder};
use std::fs;
use std::path::Path;

/// Import de topics depuis CSV : header `name[,sequence]`.
/// Sans séquence explicite, le numéro de ligne fait foi.
pub fn import_topics_csv<P: AsRef<Path>>(
    path: P,
    subject: &SubjectId,
) -> anyhow::Result<Vec<Topic>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let mut out = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let name = rec.get(0).context("missing name")?.trim();
        if name.is_empty() {
            bail!("invalid topic row (empty name)");
        }
        let sequence = match rec.get(1).map(str::trim) {
            Some(raw) if !raw.is_empty() => raw
                .parse::<i32>()
                .with_context(|| format!("invalid sequence for topic {name}"))?,
            _ => (row + 1) as i32,
        };
        out.push(Topic::new(name, sequence, subject.clone()));
    }
    Ok(out)
}

/// Import de fériés : header `name,date[,active]` — date au format AAAA-MM-JJ.
/// Un nom vide reçoit le nom par défaut dérivé de la date.
pub fn import_holidays_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<Holiday>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let name = rec.get(0).context("missing name")?.trim();
        let raw_date = rec.get(1).context("missing date")?.trim();
        let date = NaiveDate::parse_from_str(raw_date, "%Y-%m-%d")
            .with_context(|| format!("invalid date: {raw_date}"))?;
        let mut holiday = if name.is_empty() {
            Holiday::unnamed(date)
        } else {
            Holiday::new(name, date)
        };
        if let Some(flag) = rec.get(2) {
            let flag = flag.trim();
            if !flag.is_empty() {
                holiday.active = parse_bool(flag)
                    .with_context(|| format!("invalid active value for holiday {raw_date}"))?;
            }
        }
        out.push(holiday);
    }
    Ok(out)
}

fn parse_bool(s: &str) -> anyhow::Result<bool> {
    match s.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "y" | "oui" => Ok(true),
        "false" | "0" | "no" | "n" | "non" => Ok(false),
        _ => bail!("expected boolean"),
    }
}

/// Export JSON du catalogue (jolie mise en forme)
pub fn export_catalog_json<P: AsRef<Path>>(path: P, catalog: &Catalog) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(catalog)?;
    fs::write(path, s)?;
    Ok(())
}

/// Export CSV du planning : header `day,date,weekday,topics`
pub fn export_schedule_csv<P: AsRef<Path>>(path: P, schedule: &Schedule) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;
    w.write_record(["day", "date", "weekday", "topics"])?;
    for day in &schedule.days {
        let number = day.number.to_string();
        let date = day.date.format("%Y-%m-%d").to_string();
        let weekday = day.date.format("%A").to_string();
        let topics = day.topics.join(", ");
        w.write_record([number.as_str(), date.as_str(), weekday.as_str(), topics.as_str()])?;
    }
    w.flush()?;
    Ok(())
}
