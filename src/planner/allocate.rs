use super::types::DayAssignment;
use crate::model::TOPIC_DURATION_MINUTES;
use chrono::NaiveDate;

/// Capacité par défaut quand les heures ne sont pas renseignées (2 h).
const DEFAULT_CAPACITY: usize = 4;

/// Capacité d'un jour de cours : nombre de créneaux de 30 minutes qui
/// tiennent dans `hours_per_day`. Une valeur nulle ou négative retombe sur
/// la capacité par défaut ; le résultat est borné à 1 au minimum.
pub fn capacity_per_day(hours_per_day: f64) -> usize {
    if hours_per_day <= 0.0 {
        return DEFAULT_CAPACITY;
    }
    let slots = (hours_per_day * 60.0 / f64::from(TOPIC_DURATION_MINUTES)) as usize;
    slots.max(1)
}

/// Découpe `topics` en blocs consécutifs de `capacity` (le dernier bloc peut
/// être plus court) et affecte chaque bloc au prochain jour fourni par
/// `dates`. S'arrête dès que les topics sont épuisés, ou dès que `dates`
/// l'est : le second membre du tuple donne alors le nombre de topics restés
/// sans jour.
pub fn allocate<I>(topics: &[String], capacity: usize, dates: I) -> (Vec<DayAssignment>, usize)
where
    I: IntoIterator<Item = NaiveDate>,
{
    let mut days = Vec::new();
    let mut chunks = topics.chunks(capacity.max(1));
    let mut assigned = 0usize;
    let mut number = 0u32;

    for date in dates {
        let chunk = match chunks.next() {
            Some(c) => c,
            None => break,
        };
        number += 1;
        assigned += chunk.len();
        days.push(DayAssignment {
            number,
            date,
            topics: chunk.to_vec(),
        });
    }

    (days, topics.len() - assigned)
}
