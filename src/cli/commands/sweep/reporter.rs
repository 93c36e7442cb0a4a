use crate::core::sweep::{Mode, RunCounters};
use crate::ui::StatusSink;

pub struct SweepReporter {
    mode: Mode,
}

impl SweepReporter {
    pub fn new(mode: Mode) -> Self {
        Self { mode }
    }

    pub fn show_results(&self, counters: &RunCounters, sink: &mut dyn StatusSink) {
        for line in self.render(counters) {
            sink.line(&line);
        }
    }

    pub fn render(&self, counters: &RunCounters) -> Vec<String> {
        let verb = if self.mode.is_dry_run() {
            "Would delete"
        } else {
            "Deleted"
        };

        let mut lines = vec![
            String::new(),
            "Summary".to_string(),
            "=======".to_string(),
            format!("  {} local branches: {}", verb, counters.deleted_local),
            format!("  {} remote branches: {}", verb, counters.deleted_remote),
            format!("  Kept: {}", counters.kept.len()),
        ];

        for kept in &counters.kept {
            lines.push(format!("    - {} ({})", kept.label, kept.reason));
        }

        if self.mode.is_dry_run() && counters.total_deleted() > 0 {
            lines.push(String::new());
            lines.push("Dry run only. Re-run with --execute to delete.".to_string());
        }

        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_counters() -> RunCounters {
        let mut counters = RunCounters::new();
        counters.deleted_local = 2;
        counters.deleted_remote = 1;
        counters.keep("feature-y", "open PR");
        counters.keep("origin/old-fix", "different author: bob@example.com");
        counters
    }

    #[test]
    fn test_execute_summary() {
        let lines = SweepReporter::new(Mode::Execute).render(&sample_counters());
        assert!(lines.contains(&"  Deleted local branches: 2".to_string()));
        assert!(lines.contains(&"  Deleted remote branches: 1".to_string()));
        assert!(lines.contains(&"  Kept: 2".to_string()));
        assert!(lines.contains(&"    - feature-y (open PR)".to_string()));
        assert!(!lines.iter().any(|l| l.contains("--execute")));
    }

    #[test]
    fn test_dry_run_summary_hints_execute() {
        let lines = SweepReporter::new(Mode::DryRun).render(&sample_counters());
        assert!(lines.contains(&"  Would delete local branches: 2".to_string()));
        assert!(lines.last().unwrap().contains("--execute"));
    }

    #[test]
    fn test_kept_order_is_preserved() {
        let lines = SweepReporter::new(Mode::Execute).render(&sample_counters());
        let first = lines.iter().position(|l| l.contains("feature-y")).unwrap();
        let second = lines.iter().position(|l| l.contains("origin/old-fix")).unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_empty_run() {
        let lines = SweepReporter::new(Mode::DryRun).render(&RunCounters::new());
        assert!(lines.contains(&"  Kept: 0".to_string()));
        assert!(!lines.iter().any(|l| l.contains("--execute")));
    }
}
