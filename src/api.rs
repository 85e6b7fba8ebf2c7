//! Transport-agnostic request handlers.
//!
//! Each handler takes what a web framework extracts from a request (a path
//! segment, a JSON body), drives the [SatelliteService] and answers with a
//! [Response]: a status plus an optional JSON body. Mounting them on routes is
//! left to the framework.

use crate::{SatErr, SatelliteService, SatelliteStore, satellite};
pub use http::StatusCode;
use serde::Serialize;
use serde_json::{Value as Json, json};
use tracing::{debug, warn};

/// Body message of a rejected create or patch
pub const INVALID_PROPERTIES: &str = "Invalid properties provided.";

/// Body message of a lookup for an unknown satellite
pub const SATELLITE_NOT_FOUND: &str = "Satellite not found.";

/// What a handler answers with
#[derive(Clone, Debug, PartialEq)]
pub struct Response {
    pub status: StatusCode,
    pub body: Option<Json>,
}

impl Response {
    /// `200` with `value` as the JSON body
    pub fn ok<T>(value: &T) -> Self
    where
        T: Serialize,
    {
        match serde_json::to_value(value) {
            Ok(body) => Self {
                status: StatusCode::OK,
                body: Some(body),
            },
            Err(err) => {
                warn!("failed to serialize response body: {err}");
                Self::internal_error()
            }
        }
    }

    /// `{"message": ...}` with the given status
    pub fn message(status: StatusCode, message: &str) -> Self {
        Self {
            status,
            body: Some(json!({ "message": message })),
        }
    }

    /// `500` without a body
    pub fn internal_error() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: None,
        }
    }

    /// Map a service failure onto a response; internal details never reach the body
    pub fn from_err(err: &SatErr) -> Self {
        match err {
            SatErr::ValidationRejected(reason) => {
                debug!("rejected payload: {reason}");
                Self::message(StatusCode::BAD_REQUEST, INVALID_PROPERTIES)
            }
            SatErr::NotFound(_) => Self::message(StatusCode::NOT_FOUND, SATELLITE_NOT_FOUND),
            SatErr::InternalFault(reason) => {
                warn!("internal fault: {reason}");
                Self::internal_error()
            }
        }
    }
}

impl<T> From<Result<T, SatErr>> for Response
where
    T: Serialize,
{
    fn from(res: Result<T, SatErr>) -> Self {
        match res {
            Ok(value) => Self::ok(&value),
            Err(err) => Self::from_err(&err),
        }
    }
}

/// `GET /satellites`
pub fn list<S>(service: &SatelliteService<S>) -> Response
where
    S: SatelliteStore,
{
    Response::ok(&service.get_all())
}

/// `GET /satellites/:id`
///
/// An id that does not parse as an unsigned integer is as unknown as one that is
/// not in the store.
pub fn get_by_id<S>(service: &SatelliteService<S>, raw_id: &str) -> Response
where
    S: SatelliteStore,
{
    let id = raw_id.trim().parse::<u64>().ok();
    match id.filter(|id| service.is_valid_id(*id)) {
        Some(id) => service.get_one(id).into(),
        None => Response::message(StatusCode::NOT_FOUND, SATELLITE_NOT_FOUND),
    }
}

/// `POST /satellites`
pub fn create<S>(service: &mut SatelliteService<S>, body: Json) -> Response
where
    S: SatelliteStore,
{
    let payload = match satellite::ActiveModel::from_json(body) {
        Ok(payload) if service.can_create(&payload) => payload,
        Ok(_) => return Response::message(StatusCode::BAD_REQUEST, INVALID_PROPERTIES),
        Err(err) => return Response::from_err(&err),
    };
    service.create(payload).into()
}

/// `PATCH /satellites`
pub fn patch<S>(service: &mut SatelliteService<S>, body: Json) -> Response
where
    S: SatelliteStore,
{
    let payload = match satellite::ActiveModel::from_json(body) {
        Ok(payload) if service.can_patch(&payload) => payload,
        Ok(_) => return Response::message(StatusCode::BAD_REQUEST, INVALID_PROPERTIES),
        Err(err) => return Response::from_err(&err),
    };
    service.patch(payload).into()
}

/// `GET /satellites/model`, a sample of the record shape
pub fn model() -> Response {
    Response::ok(&satellite::Model::example())
}
