//! Result rendering: plain label lines or a JSON array of per-case records.

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

use crate::solve::CaseResult;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// One INSIDE/OUTSIDE/BORDER line per query; malformed cases print nothing.
    Text,
    /// Array of `{case, classifications}` / `{case, error}` objects.
    Json,
}

#[derive(Serialize)]
struct CaseRecord {
    case: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    classifications: Option<Vec<&'static str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

pub fn render(results: &[CaseResult], format: Format) -> Result<String> {
    match format {
        Format::Text => Ok(render_text(results)),
        Format::Json => render_json(results),
    }
}

pub fn render_text(results: &[CaseResult]) -> String {
    let mut out = String::new();
    for r in results {
        if let Ok(classes) = &r.outcome {
            for c in classes {
                out.push_str(c.as_str());
                out.push('\n');
            }
        }
    }
    out
}

pub fn render_json(results: &[CaseResult]) -> Result<String> {
    let records: Vec<CaseRecord> = results
        .iter()
        .map(|r| match &r.outcome {
            Ok(classes) => CaseRecord {
                case: r.case,
                classifications: Some(classes.iter().map(|c| c.as_str()).collect()),
                error: None,
            },
            Err(err) => CaseRecord {
                case: r.case,
                classifications: None,
                error: Some(err.to_string()),
            },
        })
        .collect();
    let mut s = serde_json::to_string_pretty(&records)?;
    s.push('\n');
    Ok(s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polysweep::{Classification, GeometryError};
    use serde_json::Value;

    fn results() -> Vec<CaseResult> {
        vec![
            CaseResult {
                case: 1,
                outcome: Ok(vec![Classification::Inside, Classification::Border]),
            },
            CaseResult {
                case: 2,
                outcome: Err(GeometryError::ZeroArea),
            },
            CaseResult {
                case: 3,
                outcome: Ok(vec![Classification::Outside]),
            },
        ]
    }

    #[test]
    fn text_skips_malformed_cases() {
        assert_eq!(render_text(&results()), "INSIDE\nBORDER\nOUTSIDE\n");
    }

    #[test]
    fn json_records_errors() {
        let s = render(&results(), Format::Json).unwrap();
        let v: Value = serde_json::from_str(&s).unwrap();
        assert_eq!(v[0]["case"], 1);
        assert_eq!(v[0]["classifications"][1], "BORDER");
        assert!(v[0].get("error").is_none());
        assert_eq!(v[1]["error"], "polygon encloses zero area");
        assert!(v[1].get("classifications").is_none());
        assert_eq!(v[2]["classifications"][0], "OUTSIDE");
    }
}
