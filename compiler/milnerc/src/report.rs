//! Running samples and rendering their outcomes.

use std::fmt;

use milner_ir::{ExprArena, StringInterner};
use milner_types::{infer, prelude::standard_env, Pool, TypeError};

use crate::config::DriverConfig;
use crate::samples::Sample;

/// The outcome of inferring one sample.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Report {
    pub name: &'static str,
    /// The sample's expression, rendered.
    pub expr: String,
    /// The rendered type, or why there is none.
    pub outcome: Result<String, TypeError>,
}

/// Infer one sample in a pool of its own.
///
/// A failed inference leaves partial bindings in its pool, so pools are
/// never shared between samples.
#[tracing::instrument(level = "debug", skip_all, fields(sample = sample.name))]
pub fn check_sample(
    arena: &ExprArena,
    interner: &StringInterner,
    sample: &Sample,
    config: &DriverConfig,
) -> Report {
    let mut pool = Pool::new();
    let env = standard_env(&mut pool, interner);

    let outcome = infer(&mut pool, interner, arena, sample.expr, &env).map(|ty| {
        if config.raw {
            pool.format_type(ty)
        } else {
            pool.normalized(ty)
        }
    });
    match &outcome {
        Ok(_) => tracing::debug!(types = pool.len(), "inferred"),
        Err(err) => tracing::debug!(kind = ?err.kind(), types = pool.len(), "no type"),
    }

    Report {
        name: sample.name,
        expr: arena.display(sample.expr, interner).to_string(),
        outcome,
    }
}

/// Run every sample the config selects, in order.
pub fn run_samples(
    arena: &ExprArena,
    interner: &StringInterner,
    samples: &[Sample],
    config: &DriverConfig,
) -> Vec<Report> {
    tracing::debug!(
        nodes = arena.len(),
        names = interner.len(),
        samples = samples.len(),
        "running samples"
    );
    samples
        .iter()
        .filter(|sample| config.selects(sample.name))
        .map(|sample| check_sample(arena, interner, sample, config))
        .collect()
}

/// `Display` adapter for a [`Report`].
pub struct ReportDisplay<'a> {
    report: &'a Report,
    verbose: bool,
}

impl Report {
    /// Render as `name: type`, with the expression on its own line first
    /// when `verbose` is set.
    pub fn display(&self, verbose: bool) -> ReportDisplay<'_> {
        ReportDisplay {
            report: self,
            verbose,
        }
    }
}

impl fmt::Display for ReportDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.report;
        if self.verbose {
            writeln!(f, "{}", report.expr)?;
        }
        match &report.outcome {
            Ok(ty) => write!(f, "{}: {ty}", report.name),
            Err(err) => write!(f, "{}: error: {err}", report.name),
        }
    }
}
