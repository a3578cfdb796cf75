//! Record operations for the clinic entities on top of `models`.
//! - One module per entity, all with the same create/get/list/update/delete shape.
//! - Appointment module also owns treatment linking and the read-only views.
//! - Every operation takes the connection explicitly; nothing is global.

pub mod errors;
pub mod update;
pub mod patient_service;
pub mod doctor_service;
pub mod treatment_service;
pub mod appointment_service;
#[cfg(test)]
pub mod test_support;
