use console::{Term, style};
use indicatif::{ProgressBar, ProgressStyle};

use crate::constants::progress::{SPINNER_FRAMES, TICK_INTERVAL};
use crate::utils::string::pluralize;

const SPINNER_TEMPLATE: &str = "{spinner:.cyan} {msg} [{elapsed_precise}]";

/// Interactive status output for the depth-first passes
///
/// Writes to stderr; only worth creating when stderr is a terminal.
pub struct ProgressReporter {
    term: Term,
    current_spinner: Option<ProgressBar>,
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
            current_spinner: None,
        }
    }

    /// A reporter if stderr is interactive, `None` otherwise
    pub fn for_terminal() -> Option<Self> {
        if Term::stderr().is_term() {
            Some(Self::new())
        } else {
            None
        }
    }

    fn create_spinner(&self, message: String) -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template(SPINNER_TEMPLATE)
                .expect("Spinner template should be valid")
                .tick_strings(SPINNER_FRAMES),
        );
        pb.set_message(message);
        pb.enable_steady_tick(TICK_INTERVAL);
        pb
    }

    pub fn start_cycle_check(&mut self, vertices: usize, edges: usize) {
        let _ = self.term.clear_line();
        let spinner = self.create_spinner(format!(
            "Searching {} {} and {} {} for cycles...",
            vertices,
            pluralize("vertex", vertices),
            edges,
            pluralize("edge", edges)
        ));
        self.current_spinner = Some(spinner);
    }

    pub fn finish_cycle_check(&mut self, cyclic: bool) {
        if let Some(pb) = self.current_spinner.take() {
            pb.finish_and_clear();
        }
        if cyclic {
            eprintln!("{} Cycle detected", style("⚠").yellow().bold());
        } else {
            eprintln!("{} No cycles detected", style("✓").green().bold());
        }
    }

    pub fn start_components(&mut self) {
        let spinner =
            self.create_spinner("Collecting strongly connected components...".to_string());
        self.current_spinner = Some(spinner);
    }

    pub fn finish_components(&mut self, count: usize) {
        if let Some(pb) = self.current_spinner.take() {
            pb.finish_and_clear();
        }
        eprintln!(
            "{} Found {} strongly connected {}",
            style("✓").green(),
            style(count).yellow().bold(),
            pluralize("component", count)
        );
    }
}
