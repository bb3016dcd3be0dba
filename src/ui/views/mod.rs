pub mod check;
pub mod plan;
pub mod sequence;
pub mod version;
