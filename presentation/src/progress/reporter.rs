//! Progress reporting for workflow runs

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use route_application::ports::progress::WorkflowProgress;
use route_domain::{AiTask, Route};
use std::sync::Mutex;
use std::time::Duration;

/// Shows a spinner while a remote model call is in flight
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn task_display_name(task: AiTask) -> &'static str {
        match task {
            AiTask::Qa => "Answering",
            AiTask::Conversation => "Chatting",
            AiTask::Summary => "Summarizing",
            AiTask::Translate => "Translating",
            AiTask::Sentiment => "Analyzing sentiment",
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkflowProgress for ProgressReporter {
    fn on_route_selected(&self, _route: Route) {}

    fn on_remote_start(&self, task: AiTask) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_prefix(Self::task_display_name(task));
        pb.set_message("waiting for model...");
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut slot) = self.spinner.lock() {
            *slot = Some(pb);
        }
    }

    fn on_remote_end(&self, _task: AiTask, _success: bool) {
        if let Some(pb) = self.spinner.lock().ok().and_then(|mut slot| slot.take()) {
            pb.finish_and_clear();
        }
    }
}

/// Simple text-based progress (no fancy UI), written to stderr
pub struct SimpleProgress;

impl WorkflowProgress for SimpleProgress {
    fn on_route_selected(&self, route: Route) {
        eprintln!("{} {}", "->".cyan(), route.as_str().bold());
    }

    fn on_remote_start(&self, task: AiTask) {
        eprintln!("  {} {}...", "..".dimmed(), ProgressReporter::task_display_name(task));
    }

    fn on_remote_end(&self, _task: AiTask, success: bool) {
        if success {
            eprintln!("  {} done", "v".green());
        } else {
            eprintln!("  {} failed", "x".red());
        }
    }
}
