pub mod config;
pub mod logging;

pub mod features;
pub mod predictor;
pub mod report;
pub mod samples;
pub mod session;
pub mod url_model;
