use crate::domain::flow::PromptTemplate;

pub const VIDEO_SUGGESTION_PROMPT: PromptTemplate = PromptTemplate::new(
    "suggest_relevant_videos",
    "You are a fitness assistant recommending workout videos from YouTube.

User Profile: {{user_profile}}
Fitness Goals: {{fitness_goals}}

Suggest exactly 3 short YouTube search queries (a few words each) that will surface \
relevant, good-quality exercise videos for this person. Return search queries only, never URLs.",
);
