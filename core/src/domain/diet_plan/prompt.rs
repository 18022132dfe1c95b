use crate::domain::flow::PromptTemplate;

pub const DIET_PLAN_PROMPT: PromptTemplate = PromptTemplate::new(
    "generate_diet_plan",
    "You are a certified nutritionist. Write a personalised 7-day diet plan for the person below.
Organise it day by day, listing meals with rough portions.

User Biography: {{biography}}
Fitness Goals: {{fitness_goals}}

Diet Plan:",
);
