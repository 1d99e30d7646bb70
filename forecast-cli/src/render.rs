//! Plain-text rendering of a [`DashboardView`].

use forecast_core::{
    ConditionIcon,
    view::{Carousel, DashboardView, DetailCard, HourlyEntry},
};

#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    /// ASCII icon names instead of glyphs.
    pub plain: bool,
    pub show_hourly: bool,
}

pub fn render(view: &DashboardView, opts: RenderOptions) -> String {
    let mut lines = vec!["Weather Forecast".to_string(), String::new()];

    lines.extend(card_lines(&view.card, opts));
    lines.push(String::new());
    lines.push(carousel_line(&view.carousel, opts));

    if opts.show_hourly {
        lines.push(String::new());
        lines.push("Hourly Forecast".to_string());
        lines.push(hourly_line(&view.hourly, opts));
    }

    lines.join("\n")
}

fn icon(icon: ConditionIcon, opts: RenderOptions) -> &'static str {
    if opts.plain { icon.name() } else { icon.glyph() }
}

fn card_lines(card: &DetailCard, opts: RenderOptions) -> Vec<String> {
    let title = if card.is_today {
        format!("{} (Today)", card.formatted_date)
    } else {
        card.formatted_date.clone()
    };

    vec![
        title,
        format!("{} {}°C  {}", icon(card.icon, opts), card.temperature_c, card.condition),
        format!("Feels like {}°C", card.feels_like_c),
        format!(
            "Humidity {}%   Wind Speed {} km/h   Precipitation {}%",
            card.humidity_pct, card.wind_speed_kmh, card.precipitation_pct
        ),
    ]
}

fn carousel_line(carousel: &Carousel, opts: RenderOptions) -> String {
    let previous = if carousel.previous_disabled { "·" } else { "<" };
    let next = if carousel.next_disabled { "·" } else { ">" };

    let cells: Vec<String> = carousel
        .entries
        .iter()
        .map(|entry| {
            let cell =
                format!("{} {} {}°", entry.weekday, icon(entry.icon, opts), entry.temperature_c);
            if entry.selected { format!("[{cell}]") } else { format!(" {cell} ") }
        })
        .collect();

    format!("{previous} {} {next}", cells.join(" "))
}

fn hourly_line(hourly: &[HourlyEntry], opts: RenderOptions) -> String {
    hourly
        .iter()
        .map(|hour| format!("{} {} {}°", hour.time, icon(hour.icon, opts), hour.temperature_c))
        .collect::<Vec<_>>()
        .join("  ")
}
