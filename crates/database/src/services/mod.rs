pub mod query_course;
pub mod query_outcome;
pub mod query_program;
pub mod save_program;
pub mod seed;
pub mod teardown;

#[cfg(test)]
pub(crate) mod test_support;
