pub mod credit_type;
pub mod credits;
pub mod outcome;
pub mod program_data;
pub mod similarity;
