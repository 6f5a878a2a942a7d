//! Contest request DTOs

use serde::Deserialize;
use validator::Validate;

/// Fields a contest must carry before it is sent upstream.
///
/// Only presence is checked here; every other inbound field is forwarded
/// untouched.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateContestRequest {
    #[validate(required, length(min = 1))]
    pub title: Option<String>,

    #[validate(required, length(min = 1))]
    pub slug: Option<String>,

    #[validate(required, length(min = 1))]
    pub start_date: Option<String>,

    #[validate(required, length(min = 1))]
    pub end_date: Option<String>,
}
