pub mod generation_controller;
pub mod gpt;
