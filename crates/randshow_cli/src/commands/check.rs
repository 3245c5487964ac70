//! Check command implementation
//!
//! Runs the bucket-uniformity check against one engine or all of them and
//! fails when any bucket count leaves the tolerance band.

use randshow_core::quality::UniformityCheck;
use std::io::Write;
use tracing::{info, warn};

use crate::config::CheckConfig;
use crate::engine::{EngineKind, SelectedEngine};
use crate::{CliError, Result};

/// Run the check command
pub fn run<W: Write>(
    kinds: &[EngineKind],
    seed: Option<u64>,
    params: CheckConfig,
    out: &mut W,
) -> Result<()> {
    let check = UniformityCheck::new(params.range, params.per_bucket, params.tolerance)?;
    info!(
        range = check.range(),
        per_bucket = check.per_bucket(),
        tolerance = check.tolerance(),
        "running uniformity check"
    );

    let mut failed = Vec::new();
    for &kind in kinds {
        let mut engine = SelectedEngine::new(kind, seed);
        let report = check.run(&mut engine);
        let failing = report.failing_buckets();

        writeln!(
            out,
            "{:<14} {} worst_deviation={:.4} failing_buckets={}",
            kind,
            if report.passed() { "PASS" } else { "FAIL" },
            report.worst_deviation(),
            failing.len()
        )?;

        if !report.passed() {
            for (bucket, count) in failing.iter().take(5) {
                warn!(engine = %kind, bucket, count, expected = report.expected(), "bucket out of band");
            }
            failed.push(kind.to_string());
        }
    }

    if failed.is_empty() {
        Ok(())
    } else {
        Err(CliError::CheckFailed(failed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_engines_pass_default_check() {
        let mut out = Vec::new();
        run(&EngineKind::ALL, Some(2024), CheckConfig::default(), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 5);
        assert!(text.lines().all(|line| line.contains("PASS")));
    }

    #[test]
    fn test_impossible_tolerance_fails() {
        // A single draw per bucket cannot land every bucket on exactly 1.
        let params = CheckConfig {
            range: 1_000,
            per_bucket: 1,
            tolerance: 0.01,
        };
        let mut out = Vec::new();
        let result = run(&[EngineKind::Pcg64], Some(1), params, &mut out);

        match result {
            Err(CliError::CheckFailed(engines)) => assert_eq!(engines, vec!["pcg64"]),
            other => panic!("Expected check failure, got {:?}", other),
        }
        assert!(String::from_utf8(out).unwrap().contains("FAIL"));
    }

    #[test]
    fn test_invalid_parameters_are_reported() {
        let params = CheckConfig {
            range: 0,
            ..CheckConfig::default()
        };
        let result = run(&[EngineKind::Lcg], Some(1), params, &mut Vec::new());
        assert!(matches!(result, Err(CliError::Engine(_))));
    }
}
