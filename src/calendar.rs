use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Jours d'enseignement de la semaine, encodés Lundi=0 … Dimanche=6.
///
/// La forme libre « Monday,Tuesday,… » n'existe qu'en bordure (CLI, CSV) ;
/// le cœur du calcul ne manipule que cet ensemble validé.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeachingDays(BTreeSet<u8>);

impl TeachingDays {
    /// Lundi à vendredi.
    pub fn weekdays() -> Self {
        Self((0..5).collect())
    }

    /// Ensemble explicite ; vide retombe sur lundi–vendredi.
    pub fn from_days<I: IntoIterator<Item = Weekday>>(days: I) -> Self {
        let set: BTreeSet<u8> = days
            .into_iter()
            .map(|d| d.num_days_from_monday() as u8)
            .collect();
        if set.is_empty() {
            Self::weekdays()
        } else {
            Self(set)
        }
    }

    /// Décode la liste libre « Monday, tuesday, Fri » : insensible à la
    /// casse, espaces tolérés, noms inconnus ignorés en silence. Une liste
    /// vide ou entièrement inconnue retombe sur lundi–vendredi.
    pub fn parse(spec: &str) -> Self {
        let set: BTreeSet<u8> = spec
            .split(',')
            .filter_map(|token| token.trim().parse::<Weekday>().ok())
            .map(|d| d.num_days_from_monday() as u8)
            .collect();
        if set.is_empty() {
            Self::weekdays()
        } else {
            Self(set)
        }
    }

    pub fn contains(&self, day: Weekday) -> bool {
        self.0.contains(&(day.num_days_from_monday() as u8))
    }

    pub fn iter(&self) -> impl Iterator<Item = Weekday> + '_ {
        self.0.iter().map(|&i| weekday_from_index(i))
    }
}

impl Default for TeachingDays {
    fn default() -> Self {
        Self::weekdays()
    }
}

impl fmt::Display for TeachingDays {
    /// Ré-encode la forme libre, pour l'extérieur uniquement.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.iter().map(day_name).collect();
        write!(f, "{}", names.join(","))
    }
}

fn weekday_from_index(i: u8) -> Weekday {
    match i {
        0 => Weekday::Mon,
        1 => Weekday::Tue,
        2 => Weekday::Wed,
        3 => Weekday::Thu,
        4 => Weekday::Fri,
        5 => Weekday::Sat,
        _ => Weekday::Sun,
    }
}

fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Classement d'une date du calendrier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayKind {
    /// Jour de cours disponible pour l'allocation.
    Teaching,
    /// Férié actif tombant un jour de cours : exclu et signalé.
    HolidayCollision,
    /// Jour sans cours (jour non enseigné, ou férié hors jours de cours).
    Skip,
}

/// Classe `date` selon les jours d'enseignement et l'ensemble des fériés.
pub fn classify_day(
    date: NaiveDate,
    teaching: &TeachingDays,
    holiday_dates: &BTreeSet<NaiveDate>,
) -> DayKind {
    if !teaching.contains(date.weekday()) {
        return DayKind::Skip;
    }
    if holiday_dates.contains(&date) {
        DayKind::HolidayCollision
    } else {
        DayKind::Teaching
    }
}

/// Itère les jours de cours de `[from, to]`, bornes incluses.
/// Fini par construction : le curseur ne dépasse jamais `to`.
pub fn teaching_dates<'a>(
    from: NaiveDate,
    to: NaiveDate,
    teaching: &'a TeachingDays,
    holiday_dates: &'a BTreeSet<NaiveDate>,
) -> impl Iterator<Item = NaiveDate> + 'a {
    from.iter_days()
        .take_while(move |d| *d <= to)
        .filter(move |d| classify_day(*d, teaching, holiday_dates) == DayKind::Teaching)
}
