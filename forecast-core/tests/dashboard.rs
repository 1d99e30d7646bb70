use chrono::NaiveDate;
use forecast_core::{Dashboard, generator::seeded};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).expect("valid date")
}

#[test]
fn fresh_dashboard_selects_today() {
    let dashboard = Dashboard::new(seeded(1), today());
    let view = dashboard.view();

    assert_eq!(view.selected_index, 0);
    assert!(view.card.is_today);
    assert!(view.carousel.entries[0].selected);
}

#[test]
fn previous_three_times_then_next_once() {
    let mut dashboard = Dashboard::new(seeded(2), today());

    dashboard.select_previous();
    dashboard.select_previous();
    dashboard.select_previous();
    dashboard.select_next();

    assert_eq!(dashboard.selection().index(), 2);
    assert_eq!(dashboard.view().selected_index, 2);
}

#[test]
fn picking_a_carousel_entry_updates_the_card() {
    let mut dashboard = Dashboard::new(seeded(3), today());
    let target = dashboard.view().carousel.entries[4].index;

    assert!(dashboard.select_index(target));

    let view = dashboard.view();
    let day = &dashboard.forecast()[4];
    assert_eq!(view.selected_index, 4);
    assert_eq!(view.card.condition, day.condition.as_str());
    assert_eq!(view.card.icon, day.condition.icon());
    assert_eq!(view.card.temperature_c, day.temperature_c);
    assert_eq!(view.card.humidity_pct, day.humidity_pct);
}

#[test]
fn navigation_is_idempotent_at_both_edges() {
    let mut dashboard = Dashboard::new(seeded(4), today());

    assert!(!dashboard.select_next());
    for _ in 0..10 {
        dashboard.select_previous();
    }
    assert_eq!(dashboard.selection().index(), 6);
    assert!(dashboard.view().carousel.previous_disabled);

    assert!(!dashboard.select_index(9));
    assert_eq!(dashboard.selection().index(), 6);
}
