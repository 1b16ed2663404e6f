use super::types::Schedule;

/// Rend le planning en texte : bloc « EXCLUDED HOLIDAYS » si besoin, puis
/// une ligne par jour de cours, le tout joint par des sauts de ligne.
/// Chaîne vide quand il n'y a rien à rendre.
pub fn render(schedule: &Schedule) -> String {
    let mut lines: Vec<String> = Vec::new();

    if !schedule.excluded_holidays.is_empty() {
        lines.push("EXCLUDED HOLIDAYS:".to_string());
        for holiday in &schedule.excluded_holidays {
            lines.push(format!(
                "  - {} ({} - {})",
                holiday.name,
                holiday.date.format("%Y-%m-%d"),
                holiday.date.format("%A")
            ));
        }
        lines.push(String::new());
    }

    for day in &schedule.days {
        lines.push(format!(
            "Day {} ({} - {}): {}",
            day.number,
            day.date.format("%Y-%m-%d"),
            day.date.format("%A"),
            day.topics.join(", ")
        ));
    }

    lines.join("\n")
}
