pub mod mapping;
pub mod models;
pub mod predictor_client;

pub use predictor_client::PredictorClient;
