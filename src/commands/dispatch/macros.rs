//! Phase timing for commands

/// Log the time since startup at the end of a command phase
///
/// ```ignore
/// trace_phase!(ctx, "load_graph");
/// ```
macro_rules! trace_phase {
    ($ctx:expr, $phase:literal) => {
        ::tracing::debug!(
            phase = $phase,
            elapsed = ?$ctx.start.elapsed(),
            verbose = $ctx.cli.verbose,
            "phase done"
        )
    };
}

pub(crate) use trace_phase;
