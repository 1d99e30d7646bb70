use chrono::NaiveDate;
use rand::Rng;
use tracing::debug;

use crate::{
    generator::{self, ForecastWindow},
    selection::SelectionController,
    view::{self, DashboardView},
};

/// Forecast window plus the selected day, re-projected on demand.
#[derive(Debug)]
pub struct Dashboard<R> {
    rng: R,
    forecast: ForecastWindow,
    selection: SelectionController,
}

impl<R: Rng> Dashboard<R> {
    pub fn new(mut rng: R, today: NaiveDate) -> Self {
        let forecast = generator::generate(today, &mut rng);
        Self {
            rng,
            forecast,
            selection: SelectionController::new(),
        }
    }

    pub fn forecast(&self) -> &ForecastWindow {
        &self.forecast
    }

    pub fn selection(&self) -> &SelectionController {
        &self.selection
    }

    pub fn select_previous(&mut self) -> bool {
        self.selection.select_previous()
    }

    pub fn select_next(&mut self) -> bool {
        self.selection.select_next()
    }

    pub fn select_index(&mut self, index: usize) -> bool {
        self.selection.select_index(index)
    }

    /// Draw a fresh window. The selection is kept; the window length never
    /// changes so it stays in bounds.
    pub fn regenerate(&mut self, today: NaiveDate) {
        self.forecast = generator::generate(today, &mut self.rng);
        debug!(selected = self.selection.index(), "forecast regenerated");
    }

    pub fn view(&self) -> DashboardView {
        view::project(&self.forecast, &self.selection)
    }
}
