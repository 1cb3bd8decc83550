//! The interactive board: active filter state plus the handlers the host
//! document calls on load, on search input and on filter button clicks.

use restriction_board_domain::{
    DomainError, NewRestrictionRecord, RecordFilter, RestrictionRecord, RestrictionStats,
    StatusFilter,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::ports::{Clock, RestrictionRepository, ViewSurface};
use crate::services::{render_list, update_stats_panel, CardRenderer};
use crate::use_cases::{
    AddRecordUseCase, FilterRecordsUseCase, GetRecordsUseCase, GetRestrictionStatsUseCase,
    RemoveRecordUseCase,
};

/// Use cases and renderer shared by every board built over one store.
#[derive(Clone)]
pub struct BoardContext {
    pub get_records: Arc<GetRecordsUseCase>,
    pub filter_records: Arc<FilterRecordsUseCase>,
    pub add_record: Arc<AddRecordUseCase>,
    pub remove_record: Arc<RemoveRecordUseCase>,
    pub get_stats: Arc<GetRestrictionStatsUseCase>,
    pub card_renderer: Arc<CardRenderer>,
}

impl BoardContext {
    pub fn new(
        repo: Arc<dyn RestrictionRepository>,
        clock: Arc<dyn Clock>,
        urgent_days: i64,
    ) -> Self {
        Self {
            get_records: Arc::new(GetRecordsUseCase::new(repo.clone())),
            filter_records: Arc::new(FilterRecordsUseCase::new(repo.clone())),
            add_record: Arc::new(AddRecordUseCase::new(repo.clone(), clock.clone())),
            remove_record: Arc::new(RemoveRecordUseCase::new(repo.clone())),
            get_stats: Arc::new(GetRestrictionStatsUseCase::new(repo)),
            card_renderer: Arc::new(CardRenderer::new(clock, urgent_days)),
        }
    }
}

pub struct RestrictionBoard<V: ViewSurface> {
    ctx: BoardContext,
    surface: V,
    active_filter: StatusFilter,
    filtered: Vec<RestrictionRecord>,
}

impl<V: ViewSurface> RestrictionBoard<V> {
    pub fn new(ctx: BoardContext, surface: V) -> Self {
        Self {
            ctx,
            surface,
            active_filter: StatusFilter::All,
            filtered: Vec::new(),
        }
    }

    /// Fills the stats panel and shows every record.
    pub fn init(&mut self) -> Result<(), DomainError> {
        let records = self.ctx.get_records.get_all()?;
        info!(records = records.len(), "Restriction board loaded");

        self.update_stats()?;
        render_list(&mut self.surface, &self.ctx.card_renderer, &records);
        self.filtered = records;

        debug!("Restriction board initialized");
        Ok(())
    }

    pub fn active_filter(&self) -> &StatusFilter {
        &self.active_filter
    }

    /// Records currently on display.
    pub fn filtered(&self) -> &[RestrictionRecord] {
        &self.filtered
    }

    pub fn surface(&self) -> &V {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut V {
        &mut self.surface
    }

    pub fn into_surface(self) -> V {
        self.surface
    }

    /// Marks exactly one filter button active and remembers the category.
    /// Does not re-render.
    pub fn set_active_filter(&mut self, filter: &str) {
        let buttons = self.surface.filter_buttons();
        for button in &buttons {
            self.surface.set_button_active(button, false);
        }
        if buttons.iter().any(|b| b == filter) {
            self.surface.set_button_active(filter, true);
        } else {
            warn!(filter, "No filter button for category");
        }

        self.active_filter = StatusFilter::parse(filter);
    }

    pub fn on_filter_clicked(&mut self, filter: &str) -> Result<&[RestrictionRecord], DomainError> {
        self.set_active_filter(filter);
        self.apply_filters()
    }

    pub fn on_search_input(&mut self) -> Result<&[RestrictionRecord], DomainError> {
        self.apply_filters()
    }

    pub fn on_search_submit(&mut self) -> Result<&[RestrictionRecord], DomainError> {
        self.apply_filters()
    }

    pub fn clear_search(&mut self) {
        self.surface.set_search_value("");
    }

    /// Re-runs the filter with the active category and the search box text.
    pub fn apply_filters(&mut self) -> Result<&[RestrictionRecord], DomainError> {
        let query = self.surface.search_value();
        let filter = RecordFilter::new(self.active_filter.clone(), &query);
        let records = self.ctx.filter_records.execute(&filter)?;

        render_list(&mut self.surface, &self.ctx.card_renderer, &records);
        self.filtered = records;
        Ok(&self.filtered)
    }

    pub fn update_stats(&mut self) -> Result<RestrictionStats, DomainError> {
        let stats = self.ctx.get_stats.execute()?;
        update_stats_panel(&mut self.surface, &stats);
        Ok(stats)
    }

    pub fn add_record(
        &mut self,
        input: NewRestrictionRecord,
    ) -> Result<RestrictionRecord, DomainError> {
        let record = self.ctx.add_record.execute(input)?;
        self.update_stats()?;
        self.apply_filters()?;
        Ok(record)
    }

    /// Returns `false` when no record has `id`.
    pub fn remove_record(&mut self, id: &str) -> Result<bool, DomainError> {
        match self.ctx.remove_record.execute(id) {
            Ok(_) => {
                self.update_stats()?;
                self.apply_filters()?;
                Ok(true)
            }
            Err(DomainError::RecordNotFound(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }
}
