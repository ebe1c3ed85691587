use super::model::Dataset;

// ---------------------------------------------------------------------------
// FilterState – the three filter controls as one value
// ---------------------------------------------------------------------------

/// The currently active filter controls: month dropdown plus the two range
/// sliders. Rebuilt on every control change, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    /// `None` means "all months".
    pub month: Option<String>,
    /// Inclusive [lo, hi] sentiment bounds, lo <= hi.
    pub sentiment_range: [f64; 2],
    /// Inclusive [lo, hi] subjectivity bounds, lo <= hi.
    pub subjectivity_range: [f64; 2],
}

/// The slider edges the dashboard starts with. These are the inclusive
/// bounds of the source data's score columns, not per-dataset minima.
pub const SENTIMENT_FULL_RANGE: [f64; 2] = [-1.0, 1.0];
pub const SUBJECTIVITY_FULL_RANGE: [f64; 2] = [0.0, 1.0];

impl FilterState {
    /// The "no filtering applied" sentinel: no month, both sliders at their
    /// full-range edges. [`filter`] short-circuits on exactly this value.
    pub fn default_state() -> Self {
        FilterState {
            month: None,
            sentiment_range: SENTIMENT_FULL_RANGE,
            subjectivity_range: SUBJECTIVITY_FULL_RANGE,
        }
    }

    /// Whether this state equals the no-op sentinel. Compared on control
    /// values only; a non-sentinel state that happens to match every row
    /// still counts as filtering.
    pub fn is_default(&self) -> bool {
        *self == Self::default_state()
    }
}

impl Default for FilterState {
    fn default() -> Self {
        Self::default_state()
    }
}

// ---------------------------------------------------------------------------
// Filter engine
// ---------------------------------------------------------------------------

/// Outcome of a filter pass. The skip-the-redraw path is a first-class
/// variant rather than an exception-style control flow.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterOutcome {
    /// State equals the sentinel; the caller must leave the plotted subset
    /// untouched and emit no redraw.
    NoUpdate,
    /// Indices of dataset rows passing all filters, in dataset order. This
    /// ordering is what subsequent selection indices resolve against.
    Render(Vec<usize>),
}

/// Apply the three filter predicates conjunctively.
///
/// Each predicate only narrows the row sequence; the output preserves the
/// original dataset order. When `state` is exactly the default sentinel the
/// engine signals [`FilterOutcome::NoUpdate`] without touching the rows, so
/// initialisation and a simultaneous reset of all three controls cost no
/// redraw.
pub fn filter(dataset: &Dataset, state: &FilterState) -> FilterOutcome {
    if state.is_default() {
        return FilterOutcome::NoUpdate;
    }

    let [sent_lo, sent_hi] = state.sentiment_range;
    let [subj_lo, subj_hi] = state.subjectivity_range;

    let indices = dataset
        .rows
        .iter()
        .enumerate()
        .filter(|(_, row)| {
            if let Some(month) = &state.month {
                if row.month != *month {
                    return false;
                }
            }
            if row.sentiment < sent_lo || row.sentiment > sent_hi {
                return false;
            }
            if row.subjectivity < subj_lo || row.subjectivity > subj_hi {
                return false;
            }
            true
        })
        .map(|(i, _)| i)
        .collect();

    FilterOutcome::Render(indices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Row;

    fn row(month: &str, sentiment: f64, subjectivity: f64, text: &str) -> Row {
        Row {
            x: 0.0,
            y: 0.0,
            sentiment,
            subjectivity,
            month: month.to_string(),
            text: text.to_string(),
        }
    }

    fn dataset() -> Dataset {
        Dataset::from_rows(vec![
            row("Jan", -0.5, 0.1, "first"),
            row("Jan", 0.9, 0.6, "second"),
            row("Feb", 0.1, 0.9, "third"),
        ])
    }

    #[test]
    fn default_state_is_a_no_op() {
        let outcome = filter(&dataset(), &FilterState::default_state());
        assert_eq!(outcome, FilterOutcome::NoUpdate);
    }

    #[test]
    fn month_filter_preserves_dataset_order() {
        let state = FilterState {
            month: Some("Jan".to_string()),
            ..FilterState::default_state()
        };
        assert_eq!(filter(&dataset(), &state), FilterOutcome::Render(vec![0, 1]));
    }

    #[test]
    fn predicates_are_conjunctive() {
        let state = FilterState {
            month: Some("Jan".to_string()),
            sentiment_range: [0.0, 1.0],
            subjectivity_range: [0.0, 1.0],
        };
        // Row 0 fails the sentiment range, row 2 fails the month.
        assert_eq!(filter(&dataset(), &state), FilterOutcome::Render(vec![1]));
    }

    #[test]
    fn range_bounds_are_inclusive() {
        let state = FilterState {
            month: None,
            sentiment_range: [-0.5, 0.1],
            subjectivity_range: [0.1, 0.9],
        };
        assert_eq!(filter(&dataset(), &state), FilterOutcome::Render(vec![0, 2]));
    }

    #[test]
    fn equivalent_but_non_sentinel_state_still_recomputes() {
        // Yields the same rows as no filtering at all, but the slider value
        // differs from the sentinel, so the engine must recompute anyway.
        let ds = dataset();
        let state = FilterState {
            month: None,
            sentiment_range: [-1.0, 1.0],
            subjectivity_range: [0.0, 0.95],
        };
        match filter(&ds, &state) {
            FilterOutcome::Render(idx) => assert_eq!(idx, vec![0, 1, 2]),
            FilterOutcome::NoUpdate => panic!("non-sentinel state must recompute"),
        }
    }

    #[test]
    fn filtering_is_idempotent() {
        let ds = dataset();
        let state = FilterState {
            month: Some("Feb".to_string()),
            ..FilterState::default_state()
        };
        assert_eq!(filter(&ds, &state), filter(&ds, &state));
    }

    #[test]
    fn slider_ranges_keep_lo_below_hi() {
        let state = FilterState::default_state();
        assert!(state.sentiment_range[0] <= state.sentiment_range[1]);
        assert!(state.subjectivity_range[0] <= state.subjectivity_range[1]);
    }
}
