pub mod evaluate;
pub mod model;
pub mod rules;
