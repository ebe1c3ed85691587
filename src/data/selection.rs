use thiserror::Error;

use super::model::Dataset;

// ---------------------------------------------------------------------------
// Selection reconciliation: plot box-select indices → table rows
// ---------------------------------------------------------------------------

/// A selection event references an index outside the plotted subset. This
/// can legitimately happen when a selection races a filter change; callers
/// log it and keep the previous table contents.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("selection index {index} out of range for plotted subset of {plotted_len} points")]
pub struct SelectionIndexError {
    pub index: usize,
    pub plotted_len: usize,
}

/// Outcome of reconciling a selection event against the plotted subset.
#[derive(Debug, Clone, PartialEq)]
pub enum TableUpdate {
    /// No selection was made (or it was cleared); the table keeps whatever
    /// it currently shows. Deliberately not an empty row list.
    NoUpdate,
    /// Tweet texts to display, in selection-event order.
    Rows(Vec<String>),
}

/// Resolve a selection event's point indices to tweet texts.
///
/// Indices refer to positions within `plotted` — the subset that was on
/// screen when the selection was made — never to the full dataset. Event
/// order and duplicates are preserved. The reconciler holds no state
/// between invocations.
pub fn reconcile(
    dataset: &Dataset,
    plotted: &[usize],
    event: Option<&[usize]>,
) -> Result<TableUpdate, SelectionIndexError> {
    let Some(indices) = event else {
        return Ok(TableUpdate::NoUpdate);
    };

    let mut texts = Vec::with_capacity(indices.len());
    for &point in indices {
        let row_idx = *plotted.get(point).ok_or(SelectionIndexError {
            index: point,
            plotted_len: plotted.len(),
        })?;
        texts.push(dataset.rows[row_idx].text.clone());
    }
    Ok(TableUpdate::Rows(texts))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Row;

    fn row(month: &str, text: &str) -> Row {
        Row {
            x: 0.0,
            y: 0.0,
            sentiment: 0.0,
            subjectivity: 0.0,
            month: month.to_string(),
            text: text.to_string(),
        }
    }

    fn dataset() -> Dataset {
        Dataset::from_rows(vec![
            row("Jan", "alpha"),
            row("Jan", "bravo"),
            row("Feb", "charlie"),
        ])
    }

    #[test]
    fn no_event_means_no_table_update() {
        let ds = dataset();
        assert_eq!(reconcile(&ds, &[0, 1, 2], None), Ok(TableUpdate::NoUpdate));
    }

    #[test]
    fn output_follows_event_order_not_dataset_order() {
        let ds = dataset();
        let update = reconcile(&ds, &[0, 1, 2], Some(&[2, 0])).unwrap();
        assert_eq!(
            update,
            TableUpdate::Rows(vec!["charlie".to_string(), "alpha".to_string()])
        );
    }

    #[test]
    fn indices_resolve_against_the_plotted_subset() {
        let ds = dataset();
        // Only rows 1 and 2 are plotted; point 0 is dataset row 1.
        let update = reconcile(&ds, &[1, 2], Some(&[0])).unwrap();
        assert_eq!(update, TableUpdate::Rows(vec!["bravo".to_string()]));
    }

    #[test]
    fn duplicates_are_preserved() {
        let ds = dataset();
        let update = reconcile(&ds, &[0, 1], Some(&[1, 1])).unwrap();
        assert_eq!(
            update,
            TableUpdate::Rows(vec!["bravo".to_string(), "bravo".to_string()])
        );
    }

    #[test]
    fn out_of_range_index_is_an_error() {
        let ds = dataset();
        let err = reconcile(&ds, &[0, 1], Some(&[0, 5])).unwrap_err();
        assert_eq!(
            err,
            SelectionIndexError {
                index: 5,
                plotted_len: 2
            }
        );
    }

    #[test]
    fn empty_event_yields_an_empty_table() {
        // An explicit empty selection clears the table; distinct from None.
        let ds = dataset();
        assert_eq!(
            reconcile(&ds, &[0, 1], Some(&[])),
            Ok(TableUpdate::Rows(Vec::new()))
        );
    }
}
