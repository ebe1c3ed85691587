use std::collections::BTreeSet;

// ---------------------------------------------------------------------------
// Row – one tweet (one row of the source table)
// ---------------------------------------------------------------------------

/// A single processed tweet. Identity is the row's index in the [`Dataset`];
/// rows are never mutated or removed after load.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// Projected x coordinate ("Dimension 1").
    pub x: f64,
    /// Projected y coordinate ("Dimension 2").
    pub y: f64,
    /// Sentiment score, typically in [-1, 1].
    pub sentiment: f64,
    /// Subjectivity score, typically in [0, 1].
    pub subjectivity: f64,
    /// Month label, e.g. "April".
    pub month: String,
    /// Raw tweet text shown in the table.
    pub text: String,
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table with cached column statistics
// ---------------------------------------------------------------------------

/// The full parsed dataset. Column statistics are computed once at
/// construction and cached for the lifetime of the dataset.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// All rows, in source-file order.
    pub rows: Vec<Row>,
    distinct_months: Vec<String>,
    sentiment_bounds: [f64; 2],
    subjectivity_bounds: [f64; 2],
}

impl Dataset {
    /// Build the dataset and its column statistics from loaded rows.
    pub fn from_rows(rows: Vec<Row>) -> Self {
        let months: BTreeSet<String> = rows.iter().map(|r| r.month.clone()).collect();

        let sentiment_bounds = column_bounds(rows.iter().map(|r| r.sentiment));
        let subjectivity_bounds = column_bounds(rows.iter().map(|r| r.subjectivity));

        Dataset {
            rows,
            distinct_months: months.into_iter().collect(),
            sentiment_bounds,
            subjectivity_bounds,
        }
    }

    /// Distinct month labels (sorted; only used to populate the dropdown).
    pub fn distinct_months(&self) -> &[String] {
        &self.distinct_months
    }

    /// [min, max] of the sentiment column.
    pub fn sentiment_bounds(&self) -> [f64; 2] {
        self.sentiment_bounds
    }

    /// [min, max] of the subjectivity column.
    pub fn subjectivity_bounds(&self) -> [f64; 2] {
        self.subjectivity_bounds
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn column_bounds(values: impl Iterator<Item = f64>) -> [f64; 2] {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in values {
        min = min.min(v);
        max = max.max(v);
    }
    if min > max {
        // Empty column: degenerate range.
        [0.0, 0.0]
    } else {
        [min, max]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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

    #[test]
    fn bounds_and_months_are_cached_from_rows() {
        let ds = Dataset::from_rows(vec![
            row("Jan", -0.5, 0.2, "a"),
            row("Feb", 0.9, 0.8, "b"),
            row("Jan", 0.1, 0.5, "c"),
        ]);
        assert_eq!(ds.sentiment_bounds(), [-0.5, 0.9]);
        assert_eq!(ds.subjectivity_bounds(), [0.2, 0.8]);
        assert_eq!(ds.distinct_months(), ["Feb", "Jan"]);
        assert_eq!(ds.len(), 3);
    }

    #[test]
    fn empty_dataset_has_degenerate_bounds() {
        let ds = Dataset::from_rows(Vec::new());
        assert!(ds.is_empty());
        assert_eq!(ds.sentiment_bounds(), [0.0, 0.0]);
        assert!(ds.distinct_months().is_empty());
    }
}
