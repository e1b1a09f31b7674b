//! Harness runner: run one search and bind its outcome into a report.
//!
//! The runner uses only engine and kernel APIs. It does not search or hash
//! anything itself.
//!
//! # Pipeline
//!
//! ```text
//! policy.validate() → search() → build_report()
//!   → canonical_json_bytes() → canonical_hash(RunReport)
//! ```
//!
//! The report is canonical JSON, so two runs of the same problem under the
//! same policy produce byte-identical reports and equal digests, in-process
//! or across processes.

use std::fmt::Debug;
use std::path::Path;

use serde_json::{json, Value};

use wayfind_kernel::proof::canon::canonical_json_bytes;
use wayfind_kernel::proof::hash::{canonical_hash, ContentHash};
use wayfind_kernel::proof::hash_domain::HashDomain;
use wayfind_search::error::SearchError;
use wayfind_search::result::SearchStats;
use wayfind_search::{search, Heuristic, SearchPolicy, SearchProblem, SearchResult, Termination};

/// Report schema identifier.
pub const REPORT_SCHEMA_VERSION: &str = "search_report.v1";

/// Error during a harness run.
#[derive(Debug)]
pub enum RunError {
    /// The engine rejected the policy.
    Search(SearchError),
    /// Canonical JSON serialization failed.
    CanonFailed { detail: String },
    /// Writing the report failed.
    WriteFailed { path: String, detail: String },
}

impl std::fmt::Display for RunError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Search(e) => write!(f, "search failed: {e}"),
            Self::CanonFailed { detail } => write!(f, "report canonicalization failed: {detail}"),
            Self::WriteFailed { path, detail } => {
                write!(f, "failed to write report {path}: {detail}")
            }
        }
    }
}

impl std::error::Error for RunError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Search(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SearchError> for RunError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}

/// Canonical record of one search run.
#[derive(Debug, Clone)]
pub struct SearchReport {
    /// The report as JSON.
    pub value: Value,
    /// Canonical JSON bytes of `value`.
    pub bytes: Vec<u8>,
    /// `canonical_hash(RunReport, bytes)`.
    pub digest: ContentHash,
}

impl SearchReport {
    /// Write the canonical bytes to `path`.
    ///
    /// # Errors
    ///
    /// Returns [`RunError::WriteFailed`] on I/O failure.
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<(), RunError> {
        let path = path.as_ref();
        std::fs::write(path, &self.bytes).map_err(|e| RunError::WriteFailed {
            path: path.display().to_string(),
            detail: e.to_string(),
        })
    }
}

/// Run `problem` under `policy` and build its report.
///
/// # Errors
///
/// Returns [`RunError::Search`] if the policy fails validation and
/// [`RunError::CanonFailed`] if the report cannot be canonicalized.
pub fn run_search<P, H>(
    problem: &P,
    heuristic: &H,
    policy: &SearchPolicy,
) -> Result<(SearchResult<P::State>, SearchReport), RunError>
where
    P: SearchProblem,
    H: Heuristic<P::State> + ?Sized,
{
    let result = search(problem, heuristic, policy)?;
    let report = build_report(&result, policy)?;
    tracing::debug!(
        problem = problem.problem_id(),
        termination = result.termination.as_str(),
        nodes_visited = result.nodes_visited,
        digest = %report.digest,
        "search report built"
    );
    Ok((result, report))
}

/// Bind a finished result and the policy that produced it into a report.
///
/// States are recorded by their `Debug` rendering, so the report is only as
/// deterministic as the state type's `Debug` impl.
///
/// # Errors
///
/// Returns [`RunError::CanonFailed`] if canonicalization fails.
pub fn build_report<S: Debug>(
    result: &SearchResult<S>,
    policy: &SearchPolicy,
) -> Result<SearchReport, RunError> {
    let path: Vec<String> = result.path.iter().map(|s| format!("{s:?}")).collect();
    let path_bytes = canonical_json_bytes(&json!(path)).map_err(canon_failed)?;
    let path_digest = canonical_hash(HashDomain::SolutionPath, &path_bytes);

    let mut value = json!({
        "description": result.description(),
        "heuristic": result.heuristic_name,
        "nodes_visited": result.nodes_visited,
        "path": path,
        "path_cost": result.path_cost,
        "path_digest": path_digest.as_str(),
        "policy": policy_to_json(policy),
        "problem_id": result.problem_id,
        "schema_version": REPORT_SCHEMA_VERSION,
        "solution_length": result.solution_length(),
        "stats": stats_to_json(&result.stats),
        "termination": termination_to_json(result.termination),
    });

    if let Some(trace) = &result.trace {
        let digest = trace.digest().map_err(canon_failed)?;
        value["trace_digest"] = json!(digest.as_str());
        value["trace_events"] = json!(trace.len());
    }

    let bytes = canonical_json_bytes(&value).map_err(canon_failed)?;
    let digest = canonical_hash(HashDomain::RunReport, &bytes);
    Ok(SearchReport {
        value,
        bytes,
        digest,
    })
}

/// Serialize a [`SearchPolicy`] for digest binding.
#[must_use]
pub fn policy_to_json(policy: &SearchPolicy) -> Value {
    json!({
        "max_expansions": policy.max_expansions,
        "record_trace": policy.record_trace,
        "stale_policy": policy.stale_policy.as_str(),
        "tie_break": policy.tie_break.as_str(),
    })
}

fn termination_to_json(termination: Termination) -> Value {
    match termination {
        Termination::GoalReached { node_id } => json!({
            "type": termination.as_str(),
            "node_id": node_id.creation_order(),
        }),
        _ => json!({ "type": termination.as_str() }),
    }
}

fn stats_to_json(stats: &SearchStats) -> Value {
    json!({
        "frontier_high_water": stats.frontier_high_water,
        "nodes_created": stats.nodes_created,
        "rejected": stats.rejected,
        "relaxations": stats.relaxations,
        "stale_skipped": stats.stale_skipped,
    })
}

#[allow(clippy::needless_pass_by_value)]
fn canon_failed(e: wayfind_kernel::proof::canon::CanonError) -> RunError {
    RunError::CanonFailed {
        detail: e.to_string(),
    }
}
