//! Builds reports of solver runs and writes them as text or json.

#[cfg(test)]
#[path = "../../tests/unit/extensions/report_test.rs"]
mod report_test;

use super::run::{GrowthSample, InstanceComparison, RunOutcome, SolverRun};
use serde::Serialize;
use std::fmt;
use std::io::{BufWriter, Write};
use std::str::FromStr;
use tsp_core::algorithms::permutations::factorial;
use tsp_core::models::{Cost, Node};
use tsp_core::solver::SolverKind;
use tsp_core::utils::{Float, GenericError};

/// Specifies how reports are written.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human readable plain text.
    #[default]
    Text,
    /// Pretty printed json.
    Json,
}

impl FromStr for OutputFormat {
    type Err = GenericError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("unknown output format: '{value}'").into()),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// A report which can be written in any of output formats.
pub trait Report: Serialize {
    /// Writes the report as plain text.
    fn write_text<W: Write>(&self, writer: &mut W) -> std::io::Result<()>;
}

/// Writes the report using the given format.
pub fn write_report<R: Report, W: Write>(
    report: &R,
    format: OutputFormat,
    writer: BufWriter<W>,
) -> Result<(), GenericError> {
    let mut writer = writer;

    match format {
        OutputFormat::Text => report.write_text(&mut writer)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, report)
                .map_err(|err| format!("cannot serialize report: '{err}'"))?;
            writeln!(writer)?;
        }
    }

    writer.flush()?;

    Ok(())
}

/// Describes a single solver run.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunReport {
    /// A solver name.
    pub solver: String,
    /// One of `solved`, `skipped`, `failed`.
    pub status: String,
    /// A closed tour, when solved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tour: Option<Vec<Node>>,
    /// A tour cost, when solved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<Cost>,
    /// Time spent in milliseconds, when solved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<Float>,
    /// A reason of skip or failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl From<&SolverRun> for RunReport {
    fn from(run: &SolverRun) -> Self {
        let solver = run.kind.to_string();

        match &run.outcome {
            RunOutcome::Solved { tour, duration } => RunReport {
                solver,
                status: "solved".to_string(),
                tour: Some(tour.path().to_vec()),
                cost: Some(tour.cost()),
                duration_ms: Some(duration.as_secs_f64() * 1000.),
                message: None,
            },
            RunOutcome::Skipped(reason) => RunReport {
                solver,
                status: "skipped".to_string(),
                tour: None,
                cost: None,
                duration_ms: None,
                message: Some(reason.clone()),
            },
            RunOutcome::Failed(err) => RunReport {
                solver,
                status: "failed".to_string(),
                tour: None,
                cost: None,
                duration_ms: None,
                message: Some(err.to_string()),
            },
        }
    }
}

/// A report of solvers run on one problem.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SolveReport {
    /// A problem name.
    pub problem: String,
    /// Amount of cities.
    pub size: usize,
    /// A start city.
    pub start: Node,
    /// Whether weights satisfy triangle inequality, always true when approximate solver is not run.
    pub metric: bool,
    /// Solver runs in order.
    pub runs: Vec<RunReport>,
}

impl SolveReport {
    /// Creates a new instance of `SolveReport`.
    pub fn new(problem: &str, size: usize, start: Node, metric: bool, runs: &[SolverRun]) -> Self {
        Self { problem: problem.to_string(), size, start, metric, runs: runs.iter().map(RunReport::from).collect() }
    }
}

impl Report for SolveReport {
    fn write_text<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writeln!(writer, "problem: {}, cities: {}, start: {}", self.problem, self.size, self.start)?;
        if !self.metric {
            writeln!(writer, "warning: weights violate triangle inequality, approximate bound does not hold")?;
        }

        self.runs.iter().try_for_each(|run| match (&run.tour, run.cost, run.duration_ms) {
            (Some(tour), Some(cost), Some(duration)) => {
                let tour = tour.iter().map(|city| city.to_string()).collect::<Vec<_>>().join(" -> ");
                writeln!(writer, "{:<18} cost: {cost:<10} time: {duration:.3}ms", run.solver)?;
                writeln!(writer, "{:<18} tour: {tour}", "")
            }
            _ => writeln!(writer, "{:<18} {}: {}", run.solver, run.status, run.message.as_deref().unwrap_or_default()),
        })
    }
}

/// A single entry of exact solver growth.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthEntry {
    /// Amount of cities.
    pub size: usize,
    /// Amount of permutations explored.
    pub permutations: usize,
    /// Optimal tour cost.
    pub cost: Cost,
    /// Time spent in milliseconds.
    pub duration_ms: Float,
}

/// A report of exact solver running time growth.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthReport {
    /// A seed used to generate instances.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Entries ordered by size.
    pub entries: Vec<GrowthEntry>,
}

impl GrowthReport {
    /// Creates a new instance of `GrowthReport`.
    pub fn new(seed: Option<u64>, samples: &[GrowthSample]) -> Self {
        let entries = samples
            .iter()
            .map(|sample| GrowthEntry {
                size: sample.size,
                permutations: factorial(sample.size.saturating_sub(1)),
                cost: sample.cost,
                duration_ms: sample.duration.as_secs_f64() * 1000.,
            })
            .collect();

        Self { seed, entries }
    }
}

impl Report for GrowthReport {
    fn write_text<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writeln!(writer, "{:>6} {:>14} {:>10} {:>14}", "cities", "permutations", "cost", "time (ms)")?;
        self.entries.iter().try_for_each(|entry| {
            writeln!(
                writer,
                "{:>6} {:>14} {:>10} {:>14.3}",
                entry.size, entry.permutations, entry.cost, entry.duration_ms
            )
        })
    }
}

/// A heuristic run summary used by comparison.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeuristicSummary {
    /// A tour cost.
    pub cost: Cost,
    /// Time spent in milliseconds.
    pub duration_ms: Float,
}

/// A comparison of heuristics on one instance.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonEntry {
    /// A path to the instance.
    pub instance: String,
    /// Amount of cities.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<usize>,
    /// Nearest neighbor result.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nearest_neighbor: Option<HeuristicSummary>,
    /// Approximate result.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approximate: Option<HeuristicSummary>,
    /// An error which prevented comparison.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// A report of heuristics comparison on several instances.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonReport {
    /// Entries in order of given instances.
    pub entries: Vec<ComparisonEntry>,
}

impl ComparisonReport {
    /// Creates a new instance of `ComparisonReport`.
    pub fn new(comparisons: &[InstanceComparison]) -> Self {
        let summary_of = |comparison: &InstanceComparison, kind: SolverKind| {
            comparison.runs.iter().find(|run| run.kind == kind).and_then(|run| match &run.outcome {
                RunOutcome::Solved { tour, duration } => {
                    Some(HeuristicSummary { cost: tour.cost(), duration_ms: duration.as_secs_f64() * 1000. })
                }
                _ => None,
            })
        };

        let error_of = |comparison: &InstanceComparison| {
            comparison.error.clone().or_else(|| {
                let errors = comparison
                    .runs
                    .iter()
                    .filter_map(|run| match &run.outcome {
                        RunOutcome::Failed(err) => Some(format!("{}: {err}", run.kind)),
                        _ => None,
                    })
                    .collect::<Vec<_>>();

                if errors.is_empty() { None } else { Some(errors.join(", ")) }
            })
        };

        let entries = comparisons
            .iter()
            .map(|comparison| ComparisonEntry {
                instance: comparison.instance.clone(),
                size: comparison.size,
                nearest_neighbor: summary_of(comparison, SolverKind::NearestNeighbor),
                approximate: summary_of(comparison, SolverKind::Approximate),
                error: error_of(comparison),
            })
            .collect();

        Self { entries }
    }
}

impl Report for ComparisonReport {
    fn write_text<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writeln!(
            writer,
            "{:<32} {:>6} {:>12} {:>12} {:>12} {:>12}",
            "instance", "cities", "nn cost", "nn ms", "mst cost", "mst ms"
        )?;

        let cell = |summary: &Option<HeuristicSummary>| match summary {
            Some(summary) => (summary.cost.to_string(), format!("{:.3}", summary.duration_ms)),
            None => ("-".to_string(), "-".to_string()),
        };

        self.entries.iter().try_for_each(|entry| {
            if let Some(error) = &entry.error {
                return writeln!(writer, "{:<32} error: {error}", entry.instance);
            }

            let size = entry.size.map(|size| size.to_string()).unwrap_or_else(|| "-".to_string());
            let (nn_cost, nn_time) = cell(&entry.nearest_neighbor);
            let (mst_cost, mst_time) = cell(&entry.approximate);

            writeln!(
                writer,
                "{:<32} {size:>6} {nn_cost:>12} {nn_time:>12} {mst_cost:>12} {mst_time:>12}",
                entry.instance
            )
        })
    }
}
