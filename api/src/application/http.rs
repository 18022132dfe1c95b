pub mod coaching;
pub mod diet_plan;
pub mod exercise;
pub mod health;
pub mod server;
pub mod video_suggestion;

#[cfg(test)]
pub(crate) mod test_support;
