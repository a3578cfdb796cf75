use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct MessageResponse { pub message: String }

#[derive(Serialize, ToSchema)]
pub struct NewPatientDoc {
    #[serde(rename = "FullName")]
    #[schema(max_length = 100)]
    pub full_name: String,
    #[serde(rename = "DateOfBirth")]
    pub date_of_birth: NaiveDate,
    #[serde(rename = "PhoneNumber")]
    #[schema(max_length = 15)]
    pub phone_number: String,
    #[serde(rename = "Email")]
    #[schema(max_length = 100)]
    pub email: Option<String>,
    #[serde(rename = "Gender")]
    #[schema(max_length = 20)]
    pub gender: String,
}

/// Empty strings are ignored, same as absent fields.
#[derive(Serialize, ToSchema)]
pub struct PatientChangesDoc {
    #[serde(rename = "FullName")]
    pub full_name: Option<String>,
    #[serde(rename = "DateOfBirth")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(rename = "PhoneNumber")]
    pub phone_number: Option<String>,
    #[serde(rename = "Email")]
    pub email: Option<String>,
    #[serde(rename = "Gender")]
    pub gender: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct NewDoctorDoc {
    #[serde(rename = "FullName")]
    #[schema(max_length = 100)]
    pub full_name: String,
    #[serde(rename = "Specialty")]
    #[schema(max_length = 100)]
    pub specialty: String,
    #[serde(rename = "PhoneNumber")]
    #[schema(max_length = 15)]
    pub phone_number: Option<String>,
    #[serde(rename = "Email")]
    #[schema(max_length = 100)]
    pub email: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct DoctorChangesDoc {
    #[serde(rename = "FullName")]
    pub full_name: Option<String>,
    #[serde(rename = "Specialty")]
    pub specialty: Option<String>,
    #[serde(rename = "PhoneNumber")]
    pub phone_number: Option<String>,
    #[serde(rename = "Email")]
    pub email: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct NewTreatmentDoc {
    #[serde(rename = "Name")]
    #[schema(max_length = 100)]
    pub name: String,
    #[serde(rename = "Description")]
    pub description: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct TreatmentChangesDoc {
    #[serde(rename = "Name")]
    pub name: Option<String>,
    #[serde(rename = "Description")]
    pub description: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct NewAppointmentDoc {
    #[serde(rename = "PatientID")]
    pub patient_id: i32,
    #[serde(rename = "DoctorID")]
    pub doctor_id: Option<i32>,
    #[serde(rename = "AppointmentDate")]
    pub appointment_date: NaiveDateTime,
    #[serde(rename = "Reason")]
    #[schema(max_length = 255)]
    pub reason: Option<String>,
}

/// Zero ids and empty strings are ignored, same as absent fields.
#[derive(Serialize, ToSchema)]
pub struct AppointmentChangesDoc {
    #[serde(rename = "PatientID")]
    pub patient_id: Option<i32>,
    #[serde(rename = "DoctorID")]
    pub doctor_id: Option<i32>,
    #[serde(rename = "AppointmentDate")]
    pub appointment_date: Option<NaiveDateTime>,
    #[serde(rename = "Reason")]
    pub reason: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::root,
        crate::routes::patients::create,
        crate::routes::patients::list,
        crate::routes::patients::get_one,
        crate::routes::patients::update,
        crate::routes::patients::delete,
        crate::routes::doctors::create,
        crate::routes::doctors::list,
        crate::routes::doctors::get_one,
        crate::routes::doctors::update,
        crate::routes::doctors::delete,
        crate::routes::treatments::create,
        crate::routes::treatments::list,
        crate::routes::treatments::get_one,
        crate::routes::treatments::update,
        crate::routes::treatments::delete,
        crate::routes::appointments::create,
        crate::routes::appointments::list,
        crate::routes::appointments::get_one,
        crate::routes::appointments::update,
        crate::routes::appointments::delete,
        crate::routes::appointments::link_treatments,
        crate::routes::appointments::list_treatments,
        crate::routes::appointments::upcoming,
        crate::routes::appointments::details,
    ),
    components(
        schemas(
            HealthResponse,
            MessageResponse,
            NewPatientDoc,
            PatientChangesDoc,
            NewDoctorDoc,
            DoctorChangesDoc,
            NewTreatmentDoc,
            TreatmentChangesDoc,
            NewAppointmentDoc,
            AppointmentChangesDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "patients"),
        (name = "doctors"),
        (name = "treatments"),
        (name = "appointments")
    )
)]
pub struct ApiDoc;
