//! JSON shapes exchanged with the registration service

use super::error::{ApiError, ApiResult};
use crate::state::{ErrorMap, FormState, OptionEntry, OptionKind};
use serde::{Deserialize, Serialize};

/// Ids arrive as strings or as bare numbers depending on the backend
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum WireId {
    Text(String),
    Number(i64),
}

impl From<WireId> for String {
    fn from(id: WireId) -> Self {
        match id {
            WireId::Text(s) => s,
            WireId::Number(n) => n.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct DegreesBody {
    degrees: Vec<DegreeRow>,
}

#[derive(Debug, Deserialize)]
struct DegreeRow {
    degreeid: WireId,
    degreename: String,
}

#[derive(Debug, Deserialize)]
struct DegreeLevelsBody {
    #[serde(rename = "degreeLevels")]
    degree_levels: Vec<DegreeLevelRow>,
}

#[derive(Debug, Deserialize)]
struct DegreeLevelRow {
    degreelevelid: WireId,
    degreelevelname: String,
}

#[derive(Debug, Deserialize)]
struct InterestsBody {
    interests: Vec<InterestRow>,
}

#[derive(Debug, Deserialize)]
struct InterestRow {
    interestid: WireId,
    interestname: String,
}

/// Decode the body of one of the reference list endpoints
pub(crate) fn parse_options(kind: OptionKind, body: &str) -> ApiResult<Vec<OptionEntry>> {
    let decode_err = |e: serde_json::Error| ApiError::Decode(format!("{}: {e}", kind.label()));
    let entries = match kind {
        OptionKind::Degrees => serde_json::from_str::<DegreesBody>(body)
            .map_err(decode_err)?
            .degrees
            .into_iter()
            .map(|r| OptionEntry::new(r.degreeid, r.degreename))
            .collect(),
        OptionKind::DegreeLevels => serde_json::from_str::<DegreeLevelsBody>(body)
            .map_err(decode_err)?
            .degree_levels
            .into_iter()
            .map(|r| OptionEntry::new(r.degreelevelid, r.degreelevelname))
            .collect(),
        OptionKind::Interests => serde_json::from_str::<InterestsBody>(body)
            .map_err(decode_err)?
            .interests
            .into_iter()
            .map(|r| OptionEntry::new(r.interestid, r.interestname))
            .collect(),
    };
    Ok(entries)
}

/// Body of `POST /api/signup`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub re_password: String,
    pub degree_id: String,
    pub degree_level_id: String,
    pub international: bool,
    pub start_year: String,
    pub end_year: String,
    pub interest_ids: Vec<String>,
}

impl From<&FormState> for SignupRequest {
    fn from(form: &FormState) -> Self {
        Self {
            username: form.username.clone(),
            first_name: form.first_name.clone(),
            last_name: form.last_name.clone(),
            email: form.email.clone(),
            password: form.password.clone(),
            re_password: form.re_password.clone(),
            degree_id: form.degree_id.clone(),
            degree_level_id: form.degree_level_id.clone(),
            international: form.international,
            start_year: form.start_year.clone(),
            end_year: form.end_year.clone(),
            interest_ids: form.sorted_interest_ids(),
        }
    }
}

/// What the service tells us about a newly created account
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisteredAccount {
    pub user_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SignupBody {
    #[serde(rename = "userId")]
    user_id: Option<WireId>,
}

#[derive(Debug, Deserialize)]
struct RejectionBody {
    errors: ErrorMap,
}

/// Map a signup response onto the outcome the form acts on
pub(crate) fn interpret_signup_response(status: u16, body: &str) -> ApiResult<RegisteredAccount> {
    if (200..300).contains(&status) {
        let user_id = match serde_json::from_str::<SignupBody>(body) {
            Ok(parsed) => parsed.user_id.map(String::from),
            Err(e) => {
                tracing::debug!("Signup succeeded without a readable account body: {e}");
                None
            }
        };
        return Ok(RegisteredAccount { user_id });
    }

    match serde_json::from_str::<RejectionBody>(body) {
        Ok(rejection) if !rejection.errors.is_empty() => Err(ApiError::Rejected(rejection.errors)),
        _ => Err(ApiError::Status {
            status,
            body: body.to_string(),
        }),
    }
}
