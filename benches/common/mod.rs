pub mod chaikin;
pub mod samples;
