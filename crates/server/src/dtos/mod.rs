pub mod course;
pub mod outcome;
pub mod program;
pub mod root;
