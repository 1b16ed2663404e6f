#![forbid(unsafe_code)]
use anyhow::{bail, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use plancours::{
    io,
    model::{Subject, TopicId},
    planner::{PlanRequest, Planner},
    report::{prepare_report, TextReport},
    storage::{JsonStorage, Storage},
    TeachingDays,
};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI minimaliste de plan de cours (sans base de données)
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Fichier JSON de catalogue
    #[arg(long, global = true, default_value = "catalog.json")]
    catalog: String,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Créer une matière
    AddSubject {
        #[arg(long)]
        name: String,
        #[arg(long)]
        code: Option<String>,
    },

    /// Supprimer une matière (et ses topics, en cascade)
    RemoveSubject {
        #[arg(long)]
        name: String,
    },

    /// Importer les topics d'une matière depuis un CSV
    ImportTopics {
        /// Nom de la matière
        #[arg(long)]
        subject: String,
        #[arg(long)]
        csv: String,
    },

    /// Importer des fériés depuis un CSV
    ImportHolidays {
        #[arg(long)]
        csv: String,
    },

    /// Lister le catalogue et optionnellement l'exporter
    List {
        #[arg(long)]
        out_json: Option<String>,
    },

    /// Calculer le planning d'une matière sur une plage de dates
    Plan {
        /// Nom de la matière
        #[arg(long)]
        subject: String,
        /// AAAA-MM-JJ
        #[arg(long)]
        from: String,
        /// AAAA-MM-JJ
        #[arg(long)]
        to: String,
        #[arg(long, default_value_t = 2.0)]
        hours_per_day: f64,
        /// Liste libre "Monday,Tuesday,..." (défaut : lundi–vendredi)
        #[arg(long)]
        teaching_days: Option<String>,
        /// Sélection de topics par nom "t1,t2" (défaut : tous)
        #[arg(long)]
        topics: Option<String>,
        /// Export CSV du planning (optionnel)
        #[arg(long)]
        out_csv: Option<String>,
    },

    /// Générer le document imprimable d'un planning
    Print {
        #[arg(long)]
        subject: String,
        /// AAAA-MM-JJ
        #[arg(long)]
        from: String,
        /// AAAA-MM-JJ
        #[arg(long)]
        to: String,
        #[arg(long, default_value_t = 2.0)]
        hours_per_day: f64,
        #[arg(long)]
        teaching_days: Option<String>,
        /// Fichier de sortie (texte brut)
        #[arg(long)]
        out: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let storage = JsonStorage::open(&cli.catalog)?;
    let mut planner = match storage.load() {
        Ok(c) => {
            let mut p = Planner::new();
            *p.catalog_mut() = c;
            p
        }
        Err(_) => Planner::new(),
    };

    let code = match cli.cmd {
        Commands::AddSubject { name, code } => {
            let mut subject = Subject::new(name);
            subject.code = code;
            planner.add_subject(subject);
            storage.save(planner.catalog())?;
            0
        }
        Commands::RemoveSubject { name } => {
            let id = planner
                .catalog()
                .find_subject_by_name(&name)
                .map(|s| s.id.clone())
                .ok_or_else(|| anyhow::anyhow!("unknown subject: {}", name))?;
            planner.catalog_mut().remove_subject(&id);
            storage.save(planner.catalog())?;
            0
        }
        Commands::ImportTopics { subject, csv } => {
            let id = planner
                .catalog()
                .find_subject_by_name(&subject)
                .map(|s| s.id.clone())
                .ok_or_else(|| anyhow::anyhow!("unknown subject: {}", subject))?;
            let topics = io::import_topics_csv(csv, &id)?;
            planner.add_topics(topics);
            storage.save(planner.catalog())?;
            0
        }
        Commands::ImportHolidays { csv } => {
            let holidays = io::import_holidays_csv(csv)?;
            planner.add_holidays(holidays);
            storage.save(planner.catalog())?;
            0
        }
        Commands::List { out_json } => {
            if let Some(path) = out_json {
                io::export_catalog_json(path, planner.catalog())?;
            }
            // impression compacte
            for s in &planner.catalog().subjects {
                let count = planner.catalog().topics_for_subject(&s.id).len();
                println!("{} | {} | {} topic(s)", s.id.as_str(), s.name, count);
            }
            for h in &planner.catalog().holidays {
                let state = if h.active { "active" } else { "inactive" };
                println!("{} | {} | {}", h.id.as_str(), h, state);
            }
            0
        }
        Commands::Plan {
            subject,
            from,
            to,
            hours_per_day,
            teaching_days,
            topics,
            out_csv,
        } => {
            let request = build_request(
                &planner,
                &subject,
                &from,
                &to,
                hours_per_day,
                teaching_days.as_deref(),
                topics.as_deref(),
            )?;
            let schedule = planner.plan(&request)?;
            println!("{}", schedule.render());
            if let Some(path) = out_csv {
                io::export_schedule_csv(path, &schedule)?;
            }
            match schedule.overflow {
                Some(overflow) => {
                    eprintln!(
                        "WARNING: {} topic(s) unassigned, range ends {}",
                        overflow.unassigned, overflow.last_date
                    );
                    // Code 2 = WARNING/INCOMPLETE
                    2
                }
                None => 0,
            }
        }
        Commands::Print {
            subject,
            from,
            to,
            hours_per_day,
            teaching_days,
            out,
        } => {
            let request = build_request(
                &planner,
                &subject,
                &from,
                &to,
                hours_per_day,
                teaching_days.as_deref(),
                None,
            )?;
            let schedule = planner.plan(&request)?;
            let report = prepare_report(
                planner.catalog(),
                &subject,
                request.from_date,
                request.to_date,
                &schedule,
                &TextReport,
            )?;
            std::fs::write(&out, &report.content)?;
            println!("Report generated for {} in {}", report.subject_name, out);
            0
        }
    };

    std::process::exit(code);
}

fn build_request(
    planner: &Planner,
    subject: &str,
    from: &str,
    to: &str,
    hours_per_day: f64,
    teaching_days: Option<&str>,
    topics: Option<&str>,
) -> Result<PlanRequest> {
    let subject_id = planner
        .catalog()
        .find_subject_by_name(subject)
        .map(|s| s.id.clone())
        .ok_or_else(|| anyhow::anyhow!("unknown subject: {}", subject))?;

    let from: NaiveDate = from.parse()?;
    let to: NaiveDate = to.parse()?;

    let mut request = PlanRequest::new(subject_id.clone(), from, to);
    request.hours_per_day = hours_per_day;
    if let Some(spec) = teaching_days {
        request.teaching_days = TeachingDays::parse(spec);
    }
    if let Some(list) = topics {
        let mut selected: Vec<TopicId> = Vec::new();
        for name in list.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            let topic = planner
                .catalog()
                .topics_for_subject(&subject_id)
                .into_iter()
                .find(|t| t.name == name)
                .map(|t| t.id.clone());
            match topic {
                Some(id) => selected.push(id),
                None => bail!("unknown topic for subject {}: {}", subject, name),
            }
        }
        request.topics = Some(selected);
    }
    Ok(request)
}
