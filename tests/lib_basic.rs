#![forbid(unsafe_code)]
use chrono::NaiveDate;
use plancours::{
    Holiday, PlanError, PlanRequest, Planner, Subject, SubjectId, TeachingDays, Topic,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn planner_with_topics(count: usize) -> (Planner, SubjectId) {
    let mut p = Planner::new();
    let id = p.add_subject(Subject::new("Algebra"));
    let topics = (1..=count)
        .map(|i| Topic::new(format!("T{i}"), i as i32, id.clone()))
        .collect();
    p.add_topics(topics);
    (p, id)
}

#[test]
fn holiday_week_scenario() {
    // Semaine du 1er janvier 2024 (lundi), férié le mercredi 3.
    let (mut p, subject) = planner_with_topics(6);
    p.add_holidays(vec![Holiday::new("Pont", date(2024, 1, 3))]);

    let mut request = PlanRequest::new(subject, date(2024, 1, 1), date(2024, 1, 5));
    request.hours_per_day = 1.0; // capacité 2

    let schedule = p.plan(&request).unwrap();
    assert_eq!(schedule.total_days, 5);
    assert_eq!(schedule.topics_per_day, 2);

    assert_eq!(schedule.excluded_holidays.len(), 1);
    assert_eq!(schedule.excluded_holidays[0].date, date(2024, 1, 3));
    assert_eq!(schedule.excluded_holidays[0].name, "Pont");

    let days: Vec<(u32, NaiveDate, Vec<String>)> = schedule
        .days
        .iter()
        .map(|d| (d.number, d.date, d.topics.clone()))
        .collect();
    assert_eq!(
        days,
        vec![
            (1, date(2024, 1, 1), vec!["T1".into(), "T2".into()]),
            (2, date(2024, 1, 2), vec!["T3".into(), "T4".into()]),
            (3, date(2024, 1, 4), vec!["T5".into(), "T6".into()]),
        ]
    );
    assert!(schedule.overflow.is_none());
}

#[test]
fn last_day_takes_the_remainder() {
    let (p, subject) = planner_with_topics(3);
    let mut request = PlanRequest::new(subject, date(2024, 1, 1), date(2024, 1, 5));
    request.hours_per_day = 1.0;

    let schedule = p.plan(&request).unwrap();
    assert_eq!(schedule.days.len(), 2);
    assert_eq!(schedule.days[1].topics, vec!["T3".to_string()]);
    assert!(schedule.overflow.is_none());
}

#[test]
fn overflow_is_reported_not_looped() {
    // 10 topics, capacité 2, trois jours de cours seulement.
    let (p, subject) = planner_with_topics(10);
    let mut request = PlanRequest::new(subject, date(2024, 1, 1), date(2024, 1, 3));
    request.hours_per_day = 1.0;

    let schedule = p.plan(&request).unwrap();
    assert_eq!(schedule.days.len(), 3);
    let assigned: usize = schedule.days.iter().map(|d| d.topics.len()).sum();
    assert_eq!(assigned, 6);

    let overflow = schedule.overflow.expect("range too short, must overflow");
    assert_eq!(overflow.unassigned, 4);
    assert_eq!(overflow.last_date, date(2024, 1, 3));
}

#[test]
fn zero_teaching_days_terminates_with_overflow() {
    // Plage lundi–vendredi mais cours le dimanche : aucun jour ne qualifie.
    let (p, subject) = planner_with_topics(6);
    let mut request = PlanRequest::new(subject, date(2024, 1, 1), date(2024, 1, 5));
    request.teaching_days = TeachingDays::parse("Sunday");

    let schedule = p.plan(&request).unwrap();
    assert!(schedule.days.is_empty());
    assert_eq!(schedule.overflow.unwrap().unassigned, 6);
}

#[test]
fn completeness_preserves_order_without_gaps() {
    let (p, subject) = planner_with_topics(9);
    let mut request = PlanRequest::new(subject, date(2024, 1, 1), date(2024, 1, 31));
    request.hours_per_day = 1.0;

    let schedule = p.plan(&request).unwrap();
    let flat: Vec<String> = schedule
        .days
        .iter()
        .flat_map(|d| d.topics.iter().cloned())
        .collect();
    let expected: Vec<String> = (1..=9).map(|i| format!("T{i}")).collect();
    assert_eq!(flat, expected);
    assert!(schedule.overflow.is_none());
}

#[test]
fn inactive_and_off_day_holidays_are_ignored() {
    let (mut p, subject) = planner_with_topics(4);
    let mut inactive = Holiday::new("Inactif", date(2024, 1, 2));
    inactive.active = false;
    p.add_holidays(vec![
        inactive,
        // samedi : jamais en collision avec lundi–vendredi
        Holiday::new("Samedi", date(2024, 1, 6)),
        // hors plage
        Holiday::new("Hors plage", date(2024, 2, 1)),
    ]);

    let mut request = PlanRequest::new(subject, date(2024, 1, 1), date(2024, 1, 5));
    request.hours_per_day = 1.0;

    let schedule = p.plan(&request).unwrap();
    assert!(schedule.excluded_holidays.is_empty());
    assert_eq!(schedule.days[1].date, date(2024, 1, 2));
}

#[test]
fn rejects_out_of_range_hours() {
    let (p, subject) = planner_with_topics(2);
    let mut request = PlanRequest::new(subject.clone(), date(2024, 1, 1), date(2024, 1, 5));
    request.hours_per_day = 0.0;
    assert!(matches!(
        p.plan(&request),
        Err(PlanError::HoursOutOfRange(_))
    ));

    let mut request = PlanRequest::new(subject, date(2024, 1, 1), date(2024, 1, 5));
    request.hours_per_day = 12.5;
    assert!(matches!(
        p.plan(&request),
        Err(PlanError::HoursOutOfRange(_))
    ));
}

#[test]
fn rejects_inverted_range() {
    let (p, subject) = planner_with_topics(2);
    let request = PlanRequest::new(subject, date(2024, 1, 5), date(2024, 1, 1));
    assert!(matches!(
        p.plan(&request),
        Err(PlanError::InvalidDateRange { .. })
    ));
}

#[test]
fn rejects_topics_from_another_subject() {
    let (mut p, subject) = planner_with_topics(2);
    let other = p.add_subject(Subject::new("Chimie"));
    let stray = Topic::new("Atomes", 1, other);
    let stray_id = stray.id.clone();
    p.add_topics(vec![stray]);

    let mut request = PlanRequest::new(subject, date(2024, 1, 1), date(2024, 1, 5));
    request.topics = Some(vec![stray_id]);

    match p.plan(&request) {
        Err(PlanError::TopicSubjectMismatch { subject, topics }) => {
            assert_eq!(subject, "Algebra");
            assert!(topics.contains("Atomes"));
        }
        other => panic!("expected TopicSubjectMismatch, got {other:?}"),
    }
}

#[test]
fn empty_selection_schedules_nothing() {
    let (mut p, subject) = planner_with_topics(4);
    p.add_holidays(vec![Holiday::new("Pont", date(2024, 1, 3))]);

    let mut request = PlanRequest::new(subject, date(2024, 1, 1), date(2024, 1, 5));
    request.topics = Some(Vec::new());

    let schedule = p.plan(&request).unwrap();
    assert!(schedule.is_empty());
    assert!(schedule.overflow.is_none());
    assert_eq!(schedule.render(), "");
}

#[test]
fn identical_inputs_render_identically() {
    let (mut p, subject) = planner_with_topics(6);
    p.add_holidays(vec![Holiday::new("Pont", date(2024, 1, 3))]);
    let mut request = PlanRequest::new(subject, date(2024, 1, 1), date(2024, 1, 5));
    request.hours_per_day = 1.0;

    let first = p.plan(&request).unwrap();
    let second = p.plan(&request).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.render(), second.render());
}

#[test]
fn removing_a_subject_cascades_to_its_topics() {
    let (mut p, subject) = planner_with_topics(4);
    p.catalog_mut().remove_subject(&subject);
    assert!(p.catalog().subjects.is_empty());
    assert!(p.catalog().topics.is_empty());
}
