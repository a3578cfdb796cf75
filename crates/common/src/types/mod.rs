use serde::{Deserialize, Serialize};

pub const WELCOME: &str = "Welcome to the Clinic Booking System API!";

#[derive(Serialize, Deserialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

/// Plain `{"message": ...}` body returned by delete/link endpoints and the root route.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}
