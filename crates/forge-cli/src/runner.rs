//! Decide and evaluate runners
//!
//! Both read a JSON array and write one JSON document per line to the given writer.

use anyhow::{Context, Result};
use forge_core::FieldMap;
use forge_sdk::{
    AssistedEngine, EvaluationCase, EvaluationPolicy, ExplainOptions,
    InsightRequest, RevenueEvaluation,
};
use serde::Serialize;
use std::io::Write;

/// Totals for one decide run
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RunReport {
    pub decided: usize,
    pub rejected: usize,
}

#[derive(Serialize)]
struct RejectedLine<'a> {
    index: usize,
    error: &'a str,
}

/// Parse a JSON array of loose input records
pub fn parse_records(content: &str) -> Result<Vec<FieldMap>> {
    serde_json::from_str(content).context("Input must be a JSON array of objects")
}

/// Parse a JSON array of evaluation cases
pub fn parse_cases(content: &str) -> Result<Vec<EvaluationCase>> {
    serde_json::from_str(content).context("Input must be a JSON array of evaluation cases")
}

fn write_line<W: Write, T: Serialize>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

/// Decide every record in order, then print the history summary and, when
/// enabled, strategic insights. Rejected records are reported and skipped.
pub async fn run_decide<W: Write>(
    engine: &AssistedEngine,
    records: &[FieldMap],
    options: &ExplainOptions,
    insights: Option<(&str, usize)>,
    out: &mut W,
) -> Result<RunReport> {
    let mut report = RunReport::default();

    for (index, fields) in records.iter().enumerate() {
        match engine.session().engine().validate_fields(fields) {
            Ok(input) => {
                let result = engine.decide_with_explanation(&input, options).await;
                write_line(out, &result)?;
                report.decided += 1;
            }
            Err(e) => {
                write_line(
                    out,
                    &RejectedLine {
                        index,
                        error: &e.to_string(),
                    },
                )?;
                report.rejected += 1;
            }
        }
    }

    write_line(out, &engine.history_summary())?;

    if let Some((time_period, min_decisions)) = insights {
        match engine.strategic_insights(time_period, min_decisions).await {
            InsightRequest::Disabled => {}
            request => write_line(out, &request)?,
        }
    }

    tracing::info!(
        decided = report.decided,
        rejected = report.rejected,
        "Run complete"
    );
    Ok(report)
}

/// Compare the engine with the churn-cutoff baseline and print the report
pub fn run_evaluate<W: Write>(
    engine: &AssistedEngine,
    cases: &[EvaluationCase],
    out: &mut W,
) -> Result<RevenueEvaluation> {
    let report = RevenueEvaluation::run(
        engine.session().engine(),
        cases,
        &EvaluationPolicy::default(),
    )?;
    write_line(out, &report)?;
    Ok(report)
}
