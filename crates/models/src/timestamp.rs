use chrono::{SubsecRound, Utc};
use sea_orm::prelude::DateTimeWithTimeZone;

/// Current UTC instant at microsecond precision, the finest every supported backend stores.
pub fn now() -> DateTimeWithTimeZone {
    Utc::now().trunc_subsecs(6).into()
}
