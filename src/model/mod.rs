pub mod criteria;
pub mod error;
pub mod matrix;
pub mod scores;
