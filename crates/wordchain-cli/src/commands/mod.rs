pub mod generate;
pub mod pairs;
