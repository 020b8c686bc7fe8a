pub mod generation_models;
