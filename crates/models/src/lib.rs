pub mod errors;
pub mod db;
pub mod timestamp;
pub mod patient;
pub mod doctor;
pub mod treatment;
pub mod appointment;
pub mod appointment_treatment;

#[cfg(test)]
mod tests;
