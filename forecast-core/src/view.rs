//! Projection of the forecast window and the selected day into view models.
//!
//! Nothing here holds state: the dashboard calls [`project`] again after every
//! change to the selection or the forecast.

use serde::Serialize;

use crate::{
    generator::ForecastWindow,
    model::{ConditionIcon, DailyForecast, HourlyForecast},
    selection::SelectionController,
};

const CARD_DATE_FORMAT: &str = "%A, %B %-d";
const CAROUSEL_DAY_FORMAT: &str = "%a";

/// Main card for the selected day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailCard {
    /// e.g. "Monday, October 19"
    pub formatted_date: String,
    pub is_today: bool,
    pub condition: String,
    pub icon: ConditionIcon,
    pub temperature_c: i32,
    pub feels_like_c: i32,
    pub humidity_pct: u8,
    pub wind_speed_kmh: u32,
    pub precipitation_pct: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CarouselEntry {
    pub index: usize,
    /// Short weekday, e.g. "Mon".
    pub weekday: String,
    pub icon: ConditionIcon,
    pub temperature_c: i32,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Carousel {
    pub entries: Vec<CarouselEntry>,
    pub previous_disabled: bool,
    pub next_disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HourlyEntry {
    pub time: String,
    pub icon: ConditionIcon,
    pub temperature_c: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardView {
    pub selected_index: usize,
    pub card: DetailCard,
    pub carousel: Carousel,
    pub hourly: Vec<HourlyEntry>,
}

/// Derive everything the dashboard shows from the forecast window and the
/// selection. The selection index is always in bounds for a full window.
pub fn project(forecast: &ForecastWindow, selection: &SelectionController) -> DashboardView {
    let index = selection.index();
    let selected = &forecast[index];

    DashboardView {
        selected_index: index,
        card: detail_card(selected),
        carousel: Carousel {
            entries: forecast
                .iter()
                .enumerate()
                .map(|(i, day)| carousel_entry(i, day, i == index))
                .collect(),
            previous_disabled: !selection.can_select_previous(),
            next_disabled: !selection.can_select_next(),
        },
        hourly: selected.hourly.iter().map(hourly_entry).collect(),
    }
}

fn detail_card(day: &DailyForecast) -> DetailCard {
    let condition = day.condition.to_string();

    DetailCard {
        formatted_date: day.date.format(CARD_DATE_FORMAT).to_string(),
        is_today: day.is_today,
        icon: ConditionIcon::for_label(&condition),
        condition,
        temperature_c: day.temperature_c,
        feels_like_c: day.feels_like_c,
        humidity_pct: day.humidity_pct,
        wind_speed_kmh: day.wind_speed_kmh,
        precipitation_pct: day.precipitation_pct,
    }
}

fn carousel_entry(index: usize, day: &DailyForecast, selected: bool) -> CarouselEntry {
    CarouselEntry {
        index,
        weekday: day.date.format(CAROUSEL_DAY_FORMAT).to_string(),
        icon: ConditionIcon::for_label(day.condition.as_str()),
        temperature_c: day.temperature_c,
        selected,
    }
}

fn hourly_entry(hour: &HourlyForecast) -> HourlyEntry {
    HourlyEntry {
        time: hour.time.clone(),
        icon: ConditionIcon::for_label(hour.condition.as_str()),
        temperature_c: hour.temperature_c,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{generate, seeded};
    use chrono::NaiveDate;

    fn forecast() -> ForecastWindow {
        // 2026-10-19 is a Monday
        let today = NaiveDate::from_ymd_opt(2026, 10, 19).expect("valid date");
        generate(today, &mut seeded(11))
    }

    #[test]
    fn card_for_today() {
        let forecast = forecast();
        let view = project(&forecast, &SelectionController::new());

        assert_eq!(view.selected_index, 0);
        assert_eq!(view.card.formatted_date, "Monday, October 19");
        assert!(view.card.is_today);
        assert_eq!(view.card.temperature_c, forecast[0].temperature_c);
        assert_eq!(view.card.condition, forecast[0].condition.as_str());
        assert_eq!(view.card.icon, forecast[0].condition.icon());
    }

    #[test]
    fn carousel_highlights_exactly_the_selection() {
        let forecast = forecast();
        let mut selection = SelectionController::new();
        selection.select_index(5);

        let view = project(&forecast, &selection);
        let selected: Vec<usize> = view
            .carousel
            .entries
            .iter()
            .filter(|e| e.selected)
            .map(|e| e.index)
            .collect();

        assert_eq!(view.carousel.entries.len(), 7);
        assert_eq!(selected, vec![5]);
        assert_eq!(view.carousel.entries[0].weekday, "Mon");
        assert_eq!(view.carousel.entries[1].weekday, "Sun");
        assert!(!view.card.is_today);
        assert_eq!(view.card.formatted_date, "Wednesday, October 14");
    }

    #[test]
    fn directional_controls_disable_at_edges() {
        let forecast = forecast();
        let mut selection = SelectionController::new();

        let view = project(&forecast, &selection);
        assert!(view.carousel.next_disabled);
        assert!(!view.carousel.previous_disabled);

        selection.select_index(6);
        let view = project(&forecast, &selection);
        assert!(!view.carousel.next_disabled);
        assert!(view.carousel.previous_disabled);
    }

    #[test]
    fn hourly_strip_follows_selected_day() {
        let forecast = forecast();
        let mut selection = SelectionController::new();
        selection.select_previous();

        let view = project(&forecast, &selection);
        let expected: Vec<i32> = forecast[1].hourly.iter().map(|h| h.temperature_c).collect();
        let actual: Vec<i32> = view.hourly.iter().map(|h| h.temperature_c).collect();

        assert_eq!(actual, expected);
        assert_eq!(view.hourly[0].time, "8:00");
    }

    #[test]
    fn view_serializes_icons_in_kebab_case() {
        let forecast = forecast();
        let view = project(&forecast, &SelectionController::new());
        let json = serde_json::to_value(&view).expect("view serializes");

        let icon = json["card"]["icon"].as_str().expect("icon is a string");
        assert!(["sun", "cloud", "cloud-rain", "cloud-gray"].contains(&icon));
    }

    #[test]
    fn every_selectable_day_projects() {
        let forecast = forecast();
        let mut selection = SelectionController::new();

        loop {
            let view = project(&forecast, &selection);
            let day = &forecast[selection.index()];
            assert_eq!(view.card.temperature_c, day.temperature_c);
            assert_eq!(view.hourly.len(), day.hourly.len());

            if !selection.select_previous() {
                break;
            }
        }
        assert_eq!(selection.index(), forecast.len() - 1);
    }
}
