use crate::color::MonthColorMap;
use crate::data::filter::{filter, FilterOutcome, FilterState};
use crate::data::model::Dataset;
use crate::data::selection::{reconcile, TableUpdate};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full dashboard state, independent of rendering.
///
/// Two slots drive everything downstream: `filters` (mutated only by the
/// filter-control handlers) and `plotted` (replaced only when the filter
/// engine reports a change). Selection events always resolve against
/// whatever `plotted` holds when they arrive. All handlers run on the
/// single UI thread, strictly sequentially.
pub struct AppState {
    /// Loaded dataset; immutable until the user opens another file.
    pub dataset: Dataset,

    /// Current filter-control values; starts at the no-op sentinel.
    pub filters: FilterState,

    /// Indices of dataset rows currently shown as scatter points.
    pub plotted: Vec<usize>,

    /// Tweet texts currently shown in the table.
    pub table_rows: Vec<String>,

    /// Zero-based table page (10 rows per page, renderer cosmetics).
    pub table_page: usize,

    /// Colour scatter points by month instead of the uniform grey.
    pub color_by_month: bool,

    /// Month → colour mapping for the colour-by-month mode.
    pub color_map: MonthColorMap,

    /// In-progress selection box: anchor corner in plot coordinates.
    pub selection_anchor: Option<[f64; 2]>,

    /// Non-fatal error / status message shown in the top bar.
    pub status_message: Option<String>,
}

impl AppState {
    /// Wrap a freshly loaded dataset. Filters start at the sentinel and the
    /// whole dataset is plotted, so the first frame needs no filter pass.
    pub fn new(dataset: Dataset) -> Self {
        let color_map = MonthColorMap::new(dataset.distinct_months());
        let plotted = (0..dataset.len()).collect();
        AppState {
            dataset,
            filters: FilterState::default_state(),
            plotted,
            table_rows: Vec::new(),
            table_page: 0,
            color_by_month: false,
            color_map,
            selection_anchor: None,
            status_message: None,
        }
    }

    /// Replace the dataset after a runtime `File → Open…`. Everything
    /// derived from the old dataset is reset.
    pub fn set_dataset(&mut self, dataset: Dataset) {
        *self = AppState::new(dataset);
    }

    // -- Filter-control handlers -------------------------------------------

    pub fn on_month_selected(&mut self, month: Option<String>) {
        self.filters.month = month;
        self.apply_filters();
    }

    pub fn on_sentiment_range_changed(&mut self, range: [f64; 2]) {
        self.filters.sentiment_range = range;
        self.apply_filters();
    }

    pub fn on_subjectivity_range_changed(&mut self, range: [f64; 2]) {
        self.filters.subjectivity_range = range;
        self.apply_filters();
    }

    /// Run the filter engine against the current controls and, on a real
    /// change, replace the plotted subset.
    ///
    /// Discard-on-change policy: when the plotted subset is replaced by a
    /// different one, the table contents are dropped with it, so a stale
    /// selection is never resolved against rows it was not made over.
    pub fn apply_filters(&mut self) {
        match filter(&self.dataset, &self.filters) {
            FilterOutcome::NoUpdate => {
                log::debug!("filter state at sentinel, skipping redraw");
            }
            FilterOutcome::Render(indices) => {
                if indices != self.plotted {
                    log::debug!(
                        "plotted subset changed: {} -> {} points",
                        self.plotted.len(),
                        indices.len()
                    );
                    self.table_rows.clear();
                    self.table_page = 0;
                    self.selection_anchor = None;
                }
                self.plotted = indices;
            }
        }
    }

    // -- Selection handler -------------------------------------------------

    /// Reconcile a graph selection event against the plotted subset.
    /// `None` means no selection (or selection cleared): the table keeps
    /// its current contents.
    pub fn on_graph_selection(&mut self, event: Option<Vec<usize>>) {
        match reconcile(&self.dataset, &self.plotted, event.as_deref()) {
            Ok(TableUpdate::NoUpdate) => {}
            Ok(TableUpdate::Rows(texts)) => {
                self.table_rows = texts;
                self.table_page = 0;
                self.status_message = None;
            }
            Err(e) => {
                // Selection raced a filter change; keep the table as-is.
                log::warn!("ignoring stale selection: {e}");
                self.status_message = Some(format!("Selection ignored: {e}"));
            }
        }
    }
}
