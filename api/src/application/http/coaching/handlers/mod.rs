pub mod answer_fitness_query;
