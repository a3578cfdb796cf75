//! Migrator registering the clinic schema in dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20241001_000001_create_patients;
mod m20241001_000002_create_doctors;
mod m20241001_000003_create_treatments;
mod m20241001_000004_create_appointments;
mod m20241001_000005_create_appointment_treatments;
mod m20241001_000010_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20241001_000001_create_patients::Migration),
            Box::new(m20241001_000002_create_doctors::Migration),
            Box::new(m20241001_000003_create_treatments::Migration),
            Box::new(m20241001_000004_create_appointments::Migration),
            Box::new(m20241001_000005_create_appointment_treatments::Migration),
            // Indexes should always be applied last
            Box::new(m20241001_000010_add_indexes::Migration),
        ]
    }
}
