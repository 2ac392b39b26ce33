//! Progress notification port
//!
//! Lets the presentation layer show what a run is doing, most usefully a
//! spinner while a remote model call is in flight.

use route_domain::{AiTask, Route};

/// Callbacks fired during one workflow run
pub trait WorkflowProgress: Send + Sync {
    /// Called once `decide` has picked a route
    fn on_route_selected(&self, route: Route);

    /// Called before the chat gateway is contacted
    fn on_remote_start(&self, _task: AiTask) {}

    /// Called when the chat gateway call finished, successfully or not
    fn on_remote_end(&self, _task: AiTask, _success: bool) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl WorkflowProgress for NoProgress {
    fn on_route_selected(&self, _route: Route) {}
}
