//! Request handlers

pub mod chat;
pub mod status;
pub mod transcribe;
