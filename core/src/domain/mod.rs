pub mod capture;
pub mod coaching;
pub mod common;
pub mod diet_plan;
pub mod exercise;
pub mod flow;
pub mod media;
pub mod submission;
pub mod video_suggestion;
