pub mod scoring;
pub mod settings;
