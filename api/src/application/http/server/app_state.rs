use std::sync::Arc;

use fitcoach_core::{application::FitcoachService, domain::submission::SubmissionLimits};

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: FitcoachService,
    pub limits: SubmissionLimits,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: FitcoachService, limits: SubmissionLimits) -> Self {
        Self {
            args,
            service,
            limits,
        }
    }
}
