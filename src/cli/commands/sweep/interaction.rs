use crate::core::sweep::Confirmer;
use crate::ui::{ConsoleSink, StatusSink, Tag};
use dialoguer::Confirm;

/// Prompts on the controlling terminal. Declines when no terminal is attached.
pub struct TerminalConfirmer {
    non_interactive: bool,
}

impl TerminalConfirmer {
    pub fn new() -> Self {
        Self {
            non_interactive: is_non_interactive(
                std::env::var_os("BRANCHSWEEP_NON_INTERACTIVE").is_some(),
                atty::is(atty::Stream::Stdin),
            ),
        }
    }
}

fn is_non_interactive(env_override: bool, stdin_is_tty: bool) -> bool {
    env_override || !stdin_is_tty
}

impl Default for TerminalConfirmer {
    fn default() -> Self {
        Self::new()
    }
}

impl Confirmer for TerminalConfirmer {
    fn confirm(&self, branch_label: &str) -> bool {
        if self.non_interactive {
            ConsoleSink::new().emit(
                Tag::Warn,
                &format!("{}: no terminal to confirm deletion, keeping it", branch_label),
            );
            return false;
        }

        Confirm::new()
            .with_prompt(format!(
                "Delete '{}'? It is not merged and has no pull request",
                branch_label
            ))
            .default(false)
            .interact()
            .unwrap_or(false)
    }
}
