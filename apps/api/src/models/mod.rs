pub mod competency;
pub mod story;
