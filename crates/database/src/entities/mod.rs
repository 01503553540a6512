pub mod core_learning_outcomes;
pub mod course_learning_outcomes;
pub mod courses;
pub mod credit_types;
pub mod degree_programs;
pub mod dp_course_generic;
pub mod dp_course_specific;
pub mod dp_course_substitute_generic;
pub mod dp_course_substitute_specific;
