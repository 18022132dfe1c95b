use crate::domain::flow::PromptTemplate;

pub const VIDEO_ANALYSIS_PROMPT: PromptTemplate = PromptTemplate::new(
    "analyze_exercise_video",
    "You are an experienced fitness coach with a background in biomechanics. \
Watch the attached video of someone performing {{exercise}}.

Count only full, completed repetitions. For {{exercise}}, one repetition means: {{criterion}}.
Partial reps and setup movements do not count.

If you see a significant form problem (short range of motion, poor posture, unsafe movement), \
give one or two sentences of concrete, actionable feedback. If the form is good, leave the feedback out.

Answer with the repetition count and the optional feedback in the requested JSON format.",
);
