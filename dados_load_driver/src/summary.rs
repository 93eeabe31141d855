use std::{collections::BTreeMap, fmt, process::ExitCode, time::Duration};

use crate::CallOutcome;

/// Aggregate of one batch. Built by a single owner after the join, so no counter is shared between tasks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
    /// Failed calls that did get a response, keyed by status code.
    pub failures_by_status: BTreeMap<u16, usize>,
    pub transport_errors: usize,
    /// Wall-clock time from the start of dispatch until the last call completed, in whole milliseconds.
    pub elapsed: Duration,
}

impl RunSummary {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            ..Default::default()
        }
    }

    pub fn record(&mut self, outcome: &CallOutcome) {
        match outcome {
            CallOutcome::Created => self.succeeded += 1,
            CallOutcome::UnexpectedStatus(status) => {
                self.failed += 1;
                *self.failures_by_status.entry(*status).or_default() += 1;
            }
            CallOutcome::Transport(_) => {
                self.failed += 1;
                self.transport_errors += 1;
            }
        }
    }

    pub fn finish(mut self, elapsed: Duration) -> Self {
        self.elapsed = round_to_millis(elapsed);
        self
    }

    pub fn all_succeeded(&self) -> bool {
        self.failed == 0
    }

    /// Failed calls only fail the process when `fail_on_error` is set.
    pub fn fails_process(&self, fail_on_error: bool) -> bool {
        fail_on_error && !self.all_succeeded()
    }

    pub fn exit_code(&self, fail_on_error: bool) -> ExitCode {
        if self.fails_process(fail_on_error) {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        }
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "#### Teste Concluído ####")?;
        writeln!(f, "Total de Requisições: {}", self.total)?;
        writeln!(f, "Sucessos: {}", self.succeeded)?;
        writeln!(f, "Falhas: {}", self.failed)?;
        for (status, count) in &self.failures_by_status {
            writeln!(f, "  Status {status}: {count}")?;
        }
        if self.transport_errors > 0 {
            writeln!(f, "  Erros de conexão: {}", self.transport_errors)?;
        }
        write!(f, "Tempo Total Decorrido: {:?}", self.elapsed)
    }
}

fn round_to_millis(duration: Duration) -> Duration {
    let millis = (duration.as_micros() + 500) / 1000;
    Duration::from_millis(millis as u64)
}
