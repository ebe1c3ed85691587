use std::path::Path;

use anyhow::Context;
use serde_json::Value as JsonValue;
use thiserror::Error;

use super::model::{Dataset, Row};

/// Source-file column names, mapped onto [`Row`] fields in order:
/// x, y, sentiment, subjectivity, month, text.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    "Dimension 1",
    "Dimension 2",
    "Sentiment",
    "Subjectivity",
    "Month",
    "RawTweet",
];

/// Startup-fatal load failure: the process must not come up degraded.
#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),
    #[error("required column '{0}' is missing")]
    MissingColumn(&'static str),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the tweet dataset from a file. Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – header row with the six required columns (primary format)
/// * `.json` – records orientation: `[{ "Dimension 1": ..., ... }, ...]`
pub fn load_file(path: &Path) -> Result<Dataset, DataLoadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        other => Err(DataLoadError::UnsupportedExtension(other.to_string())),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path) -> Result<Dataset, DataLoadError> {
    let mut reader = csv::Reader::from_path(path).context("opening CSV")?;
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    // Resolve every required column up front so a malformed file fails
    // before any row is parsed.
    let mut col_idx = [0usize; 6];
    for (slot, name) in col_idx.iter_mut().zip(REQUIRED_COLUMNS) {
        *slot = headers
            .iter()
            .position(|h| h == name)
            .ok_or(DataLoadError::MissingColumn(name))?;
    }
    let [x_idx, y_idx, sent_idx, subj_idx, month_idx, text_idx] = col_idx;

    let mut rows = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;

        rows.push(Row {
            x: parse_float(record.get(x_idx), row_no, "Dimension 1")?,
            y: parse_float(record.get(y_idx), row_no, "Dimension 2")?,
            sentiment: parse_float(record.get(sent_idx), row_no, "Sentiment")?,
            subjectivity: parse_float(record.get(subj_idx), row_no, "Subjectivity")?,
            month: record.get(month_idx).unwrap_or("").to_string(),
            text: record.get(text_idx).unwrap_or("").to_string(),
        });
    }

    Ok(Dataset::from_rows(rows))
}

fn parse_float(field: Option<&str>, row: usize, col: &str) -> Result<f64, DataLoadError> {
    let s = field.unwrap_or("").trim();
    let v = s
        .parse::<f64>()
        .with_context(|| format!("Row {row}, column '{col}': '{s}' is not a number"))?;
    Ok(v)
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, `df.to_json(orient='records')`):
///
/// ```json
/// [
///   {
///     "Dimension 1": 1.5, "Dimension 2": -0.3,
///     "Sentiment": 0.2, "Subjectivity": 0.7,
///     "Month": "April", "RawTweet": "..."
///   },
///   ...
/// ]
/// ```
fn load_json(path: &Path) -> Result<Dataset, DataLoadError> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let root: JsonValue = serde_json::from_str(&text).context("parsing JSON")?;

    let records = root.as_array().context("Expected top-level JSON array")?;

    let mut rows = Vec::with_capacity(records.len());
    for (i, rec) in records.iter().enumerate() {
        let obj = rec
            .as_object()
            .with_context(|| format!("Row {i} is not a JSON object"))?;

        for name in REQUIRED_COLUMNS {
            if !obj.contains_key(name) {
                return Err(DataLoadError::MissingColumn(name));
            }
        }

        rows.push(Row {
            x: json_f64(&obj["Dimension 1"], i, "Dimension 1")?,
            y: json_f64(&obj["Dimension 2"], i, "Dimension 2")?,
            sentiment: json_f64(&obj["Sentiment"], i, "Sentiment")?,
            subjectivity: json_f64(&obj["Subjectivity"], i, "Subjectivity")?,
            month: json_string(&obj["Month"]),
            text: json_string(&obj["RawTweet"]),
        });
    }

    Ok(Dataset::from_rows(rows))
}

fn json_f64(val: &JsonValue, row: usize, col: &str) -> Result<f64, DataLoadError> {
    let v = val
        .as_f64()
        .with_context(|| format!("Row {row}, column '{col}': not a number"))?;
    Ok(v)
}

fn json_string(val: &JsonValue) -> String {
    match val {
        JsonValue::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(name);
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn loads_a_well_formed_csv() {
        let path = write_temp(
            "tweetlens_ok.csv",
            "Dimension 1,Dimension 2,Sentiment,Subjectivity,Month,RawTweet\n\
             1.0,2.0,-0.5,0.1,Jan,hello\n\
             3.0,4.0,0.9,0.6,Feb,world\n",
        );
        let ds = load_file(&path).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.rows[0].month, "Jan");
        assert_eq!(ds.rows[1].text, "world");
        assert_eq!(ds.sentiment_bounds(), [-0.5, 0.9]);
    }

    #[test]
    fn missing_column_is_a_load_error() {
        let path = write_temp(
            "tweetlens_missing.csv",
            "Dimension 1,Dimension 2,Sentiment,Month,RawTweet\n1,2,0.5,Jan,hi\n",
        );
        let err = load_file(&path).unwrap_err();
        assert!(matches!(err, DataLoadError::MissingColumn("Subjectivity")));
    }

    #[test]
    fn absent_file_is_a_load_error() {
        assert!(load_file(Path::new("/nonexistent/tweets.csv")).is_err());
    }

    #[test]
    fn unsupported_extension_is_rejected() {
        let err = load_file(Path::new("tweets.parquet")).unwrap_err();
        assert!(matches!(err, DataLoadError::UnsupportedExtension(ref e) if e == "parquet"));
    }

    #[test]
    fn loads_records_oriented_json() {
        let path = write_temp(
            "tweetlens_ok.json",
            r#"[{"Dimension 1": 1.0, "Dimension 2": 2.0, "Sentiment": 0.3,
                 "Subjectivity": 0.4, "Month": "Mar", "RawTweet": "json row"}]"#,
        );
        let ds = load_file(&path).unwrap();
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.rows[0].text, "json row");
    }
}
