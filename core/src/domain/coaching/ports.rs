use std::future::Future;

use crate::domain::{
    coaching::entities::{ChatAnswer, ChatQuery},
    common::entities::app_errors::CoreError,
};

/// Service trait for the fitness Q&A chatbot
pub trait CoachingService: Send + Sync {
    fn answer_fitness_query(
        &self,
        query: ChatQuery,
    ) -> impl Future<Output = Result<ChatAnswer, CoreError>> + Send;
}
