pub mod authenticity;
pub mod category_score;
pub mod metric;
pub mod repository;
