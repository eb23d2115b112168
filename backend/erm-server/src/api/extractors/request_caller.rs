//! Axum extractor for the authenticated caller

use crate::ApiError;

use erm_auth::{Caller, bearer_token};
use erm_service::AppState;

use std::future::Future;
use std::panic::Location;

use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, header::AUTHORIZATION, request::Parts},
};
use error_location::ErrorLocation;

pub const USER_ID_HEADER: &str = "X-User-Id";
pub const USER_ROLE_HEADER: &str = "X-User-Role";

/// Identity of the request's caller
///
/// With a JWT validator configured, `Authorization: Bearer <token>` is required.
/// Without one (development), `X-User-Id` / `X-User-Role` headers are honoured and the
/// configured dev user fills in whatever is absent.
pub struct RequestCaller(pub Caller);

impl FromRequestParts<AppState> for RequestCaller {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let headers = &parts.headers;

            if let Some(validator) = state.jwt_validator.as_ref() {
                let header = headers.get(AUTHORIZATION).map(|value| value.to_str());
                let header = match header {
                    Some(Ok(value)) => Some(value),
                    Some(Err(_)) => {
                        return Err(ApiError::Unauthorized {
                            message: "Authorization header is not valid text".to_string(),
                            location: ErrorLocation::from(Location::caller()),
                        });
                    }
                    None => None,
                };

                let token = bearer_token(header)?;
                let caller = validator.authenticate(token)?;
                log::debug!("Authenticated {} ({})", caller.user_id, caller.role);
                return Ok(RequestCaller(caller));
            }

            dev_caller(headers, state).map(RequestCaller)
        }
    }
}

fn dev_caller(headers: &HeaderMap, state: &AppState) -> Result<Caller, ApiError> {
    let user_id = header_text(headers, USER_ID_HEADER)?;
    let role = header_text(headers, USER_ROLE_HEADER)?;

    if user_id.is_none() && role.is_none() {
        log::debug!("Using dev user {}", state.dev_caller.user_id);
        return Ok(state.dev_caller);
    }

    let default_id = state.dev_caller.user_id.to_string();
    let caller = Caller::parse(
        user_id.unwrap_or(&default_id),
        role.unwrap_or(state.dev_caller.role.as_str()),
    )?;
    log::debug!("Using caller from headers: {} ({})", caller.user_id, caller.role);
    Ok(caller)
}

#[track_caller]
fn header_text<'h>(headers: &'h HeaderMap, name: &str) -> Result<Option<&'h str>, ApiError> {
    match headers.get(name) {
        None => Ok(None),
        Some(value) => value.to_str().map(Some).map_err(|_| ApiError::Unauthorized {
            message: format!("{} header is not valid text", name),
            location: ErrorLocation::from(Location::caller()),
        }),
    }
}
