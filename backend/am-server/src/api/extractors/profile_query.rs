//! Query-string extractor for profile updates

use crate::ApiError;

use am_core::ProfileFields;

use std::future::Future;
use std::panic::Location;

use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use error_location::ErrorLocation;

/// Editable profile fields taken from the query string.
///
/// Missing parameters default to empty strings. A query that cannot be
/// decoded is rejected with a JSON `BAD_REQUEST` body.
pub struct ProfileQuery(pub ProfileFields);

impl<S> FromRequestParts<S> for ProfileQuery
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            match Query::<ProfileFields>::try_from_uri(&parts.uri) {
                Ok(Query(fields)) => Ok(ProfileQuery(fields)),
                Err(rejection) => Err(ApiError::BadRequest {
                    message: rejection.body_text(),
                    location: ErrorLocation::from(Location::caller()),
                }),
            }
        }
    }
}
