//! Progress reporting for consultations

use colored::Colorize;
use council_application::ports::progress::ProgressNotifier;
use council_domain::{Backend, Role, Tier};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Reports consultation progress with a terminal progress bar
pub struct ProgressReporter {
    panel_bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            panel_bar: Mutex::new(None),
        }
    }

    fn panel_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("=>-")
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold} {msg}")
            .unwrap()
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_panel_start(&self, tier: Tier, total_roles: usize) {
        let pb = ProgressBar::new(total_roles as u64);
        pb.set_style(Self::panel_style());
        pb.set_prefix(format!("{tier} panel (budget {})", tier.latency_budget()));
        pb.set_message("Consulting...");

        *self.panel_bar.lock().unwrap() = Some(pb);
    }

    fn on_role_complete(&self, role: &Role, success: bool) {
        if let Some(pb) = self.panel_bar.lock().unwrap().as_ref() {
            let status = if success {
                format!("{} {}", "v".green(), role.display_name)
            } else {
                format!("{} {}", "x".red(), role.display_name)
            };
            pb.set_message(status);
            pb.inc(1);
        }
    }

    fn on_panel_complete(&self, _tier: Tier) {
        if let Some(pb) = self.panel_bar.lock().unwrap().take() {
            pb.finish_with_message(format!("{}", "panel complete".green()));
        }
    }

    fn on_synthesis_start(&self, backend: &Backend) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_prefix("Synthesis");
        pb.set_message(format!("merging via {}", backend.id));
        pb.enable_steady_tick(Duration::from_millis(100));

        *self.panel_bar.lock().unwrap() = Some(pb);
    }

    fn on_synthesis_complete(&self, success: bool) {
        if let Some(pb) = self.panel_bar.lock().unwrap().take() {
            if success {
                pb.finish_with_message(format!("{}", "done".green()));
            } else {
                pb.finish_with_message(format!("{}", "failed".red()));
            }
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_panel_start(&self, tier: Tier, total_roles: usize) {
        println!("[{tier}] consulting {total_roles} roles...");
    }

    fn on_role_complete(&self, role: &Role, success: bool) {
        let mark = if success { "ok" } else { "failed" };
        println!("  {} - {mark}", role.display_name);
    }

    fn on_panel_complete(&self, _tier: Tier) {
        println!("panel complete");
    }

    fn on_synthesis_start(&self, backend: &Backend) {
        println!("synthesizing via {}...", backend.id);
    }

    fn on_synthesis_complete(&self, success: bool) {
        if success {
            println!("synthesis complete");
        } else {
            println!("synthesis failed");
        }
    }
}
