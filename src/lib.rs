// Resumebot - persona chat grounded by a resume PDF and a summary file
// Library exports

pub mod audit;
pub mod chat;
pub mod config;
pub mod context;
pub mod groq;
pub mod prompt;
pub mod server;
