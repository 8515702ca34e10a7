use derive_more::Display;

pub type BoxedError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Display)]
pub struct UnknownError(BoxedError);

impl std::error::Error for UnknownError {}

impl UnknownError {
    pub fn new(err: BoxedError) -> Self {
        Self(err)
    }
}

impl From<sqlx::error::Error> for UnknownError {
    fn from(err: sqlx::error::Error) -> Self {
        Self::new(err.into())
    }
}

pub mod app {
    use derive_more::Display;
    use salvo::{prelude::StatusError, writer::Json, Piece};
    use serde::Serialize;

    use super::{
        http::ErrorResponse,
        mapping::MappingError,
        persistence::PersistenceError,
        resource::{ConflictError, NotFoundError, ValidationError},
    };

    #[derive(Debug, Display, Serialize)]
    pub enum ApplicationError<R> {
        NotFound(NotFoundError),
        Validation(ValidationError<R>),
        Conflict(ConflictError),
        Mapping(MappingError),
        Persistence(PersistenceError),
    }

    impl<R: std::fmt::Debug> std::error::Error for ApplicationError<R> {}

    impl<R> From<NotFoundError> for ApplicationError<R> {
        fn from(err: NotFoundError) -> Self {
            Self::NotFound(err)
        }
    }

    impl<R> From<ValidationError<R>> for ApplicationError<R> {
        fn from(err: ValidationError<R>) -> Self {
            Self::Validation(err)
        }
    }

    impl<R> From<ConflictError> for ApplicationError<R> {
        fn from(err: ConflictError) -> Self {
            Self::Conflict(err)
        }
    }

    impl<R> From<MappingError> for ApplicationError<R> {
        fn from(err: MappingError) -> Self {
            Self::Mapping(err)
        }
    }

    impl<R> From<PersistenceError> for ApplicationError<R> {
        fn from(err: PersistenceError) -> Self {
            match err {
                PersistenceError::VersionConflict(conflict) => Self::Conflict(conflict),
                err => Self::Persistence(err),
            }
        }
    }

    impl<R: Serialize + Send> Piece for ApplicationError<R> {
        fn render(self, res: &mut salvo::Response) {
            let status = match &self {
                ApplicationError::Persistence(_) => StatusError::service_unavailable(),
                ApplicationError::Validation(_) => StatusError::bad_request(),
                ApplicationError::NotFound(_) => StatusError::not_found(),
                ApplicationError::Conflict(_) => StatusError::conflict(),
                ApplicationError::Mapping(err) => {
                    tracing::error!("failed to map beer resource: {err}");
                    StatusError::internal_server_error()
                }
            };
            res.render(Json(ErrorResponse::from_status_error(&status, self)));
            res.set_status_error(status);
        }
    }
}

pub mod mapping {
    use derive_more::Display;
    use serde::Serialize;

    use super::resource::ValidationFieldError;

    /// Conversion failure between the persisted and the wire representation.
    #[derive(Debug, Display, Serialize)]
    pub enum MappingError {
        /// A required conversion input was absent.
        #[display(fmt = "invalid argument: {_0}")]
        InvalidArgument(&'static str),
        /// Stored data does not fit the wire model.
        #[display(fmt = "invalid state: {_0}")]
        InvalidState(ValidationFieldError),
    }

    impl std::error::Error for MappingError {}
}

pub mod service {
    use derive_more::Display;

    use crate::error::UnknownError;

    #[derive(Debug, Display)]
    pub enum DispatchError {
        #[display(fmt = "Dispatched operation timed out in {_0:?}")]
        Timeout(Option<std::time::Duration>),
        #[display(fmt = "IO error dispatching {_0}")]
        IO(std::io::Error),
        #[display(fmt = "Unknown dispatch error {_0}")]
        Unknown(UnknownError),
    }

    impl std::error::Error for DispatchError {}
}

pub mod persistence {
    use std::io;

    use derive_more::Display;
    use serde::Serialize;

    use super::{resource::ConflictError, service::DispatchError, UnknownError};

    pub type SqlState = String;

    #[derive(Debug, Display)]
    pub enum PersistenceError {
        #[display(fmt = "database persistence error: SQLSTATE {_0:?}")]
        Database(Option<SqlState>),
        #[display(fmt = "persistence layer connection error: {_0}")]
        Connection(DispatchError),
        #[display(fmt = "PersistenceError decoding data")]
        DecodeData,
        #[display(fmt = "PersistenceError version conflict: {_0}")]
        VersionConflict(ConflictError),
        #[display(fmt = "unknown persistence error: {_0}")]
        Unknown(UnknownError),
    }

    impl std::error::Error for PersistenceError {}

    impl Serialize for PersistenceError {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.serialize_none()
        }
    }

    type SqlxError = sqlx::error::Error;

    impl From<SqlxError> for PersistenceError {
        fn from(err: SqlxError) -> Self {
            match err {
                SqlxError::Configuration(_) => {
                    Self::Connection(DispatchError::IO(io::ErrorKind::InvalidInput.into()))
                }
                SqlxError::Database(db) => Self::Database(db.code().map(|code| code.into())),
                SqlxError::Io(io) => Self::Connection(DispatchError::IO(io)),
                SqlxError::Tls(_) => {
                    Self::Connection(DispatchError::IO(io::ErrorKind::ConnectionRefused.into()))
                }
                SqlxError::Protocol(msg) => Self::Connection(DispatchError::IO(io::Error::new(
                    io::ErrorKind::InvalidData,
                    msg,
                ))),
                SqlxError::TypeNotFound { .. } => Self::DecodeData,
                SqlxError::ColumnIndexOutOfBounds { .. } => Self::DecodeData,
                SqlxError::ColumnNotFound(_) => Self::DecodeData,
                SqlxError::ColumnDecode { .. } => Self::DecodeData,
                SqlxError::Decode(_) => Self::DecodeData,
                SqlxError::PoolTimedOut => Self::Connection(DispatchError::Timeout(None)),
                SqlxError::PoolClosed => {
                    Self::Connection(DispatchError::IO(io::ErrorKind::NotConnected.into()))
                }
                SqlxError::WorkerCrashed => {
                    tracing::error!("FATAL: sqlx background worker error, {err}");
                    Self::Connection(DispatchError::Unknown(err.into()))
                }
                _ => PersistenceError::Unknown(err.into()),
            }
        }
    }
}

pub mod resource {
    use derive_more::Display;
    use serde::{Deserialize, Serialize};
    use uuid::Uuid;

    use crate::base::ResourceID;

    #[derive(Debug, Display, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub enum ValidationErrorKind {
        /// Maximum inclusive string length.
        MaxLength(u64),
        /// Minimum inclusive string length.
        MinLength(u64),
        /// When some number is not positive.
        Positive,
        /// The input value doesn't match any of specified options.
        UnknownVariant,
        /// Generic kind.
        Invalid,
    }

    impl std::error::Error for ValidationErrorKind {}

    #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
    pub struct ValidationError<R> {
        /// Resource value
        pub resource: R,
        /// Name of the resource
        pub resource_type: &'static str,
        /// Invalid resource fields
        pub fields: Vec<ValidationFieldError>,
    }

    impl<R> ValidationError<R> {
        pub fn from_resource(resource: R, fields: Vec<ValidationFieldError>) -> Self
        where
            R: ResourceID,
        {
            Self {
                resource,
                resource_type: R::resource_id(),
                fields,
            }
        }
    }

    impl<R> std::fmt::Display for ValidationError<R> {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_fmt(format_args!(
                "Invalid resource {}, fields {:?}",
                self.resource_type, self.fields
            ))
        }
    }

    #[derive(Debug, Display, Clone, PartialEq, Eq, Hash, Serialize)]
    #[display(fmt = "{path}: {value:?}, {kinds:?}")]
    pub struct ValidationFieldError {
        /// Resource field path with invalid value
        pub path: String,
        /// Displayed invalid value
        pub value: String,
        /// Value type id
        pub type_id: &'static str,
        /// Kinds of validation errors
        pub kinds: Vec<ValidationErrorKind>,
    }

    impl std::error::Error for ValidationFieldError {}

    impl ValidationFieldError {
        pub fn from_resource<T>(
            value: String,
            path: String,
            kinds: Vec<ValidationErrorKind>,
        ) -> Self
        where
            T: ResourceID,
        {
            Self {
                path,
                type_id: T::resource_id(),
                value,
                kinds,
            }
        }

        pub fn new(
            type_id: &'static str,
            value: String,
            path: String,
            kinds: Vec<ValidationErrorKind>,
        ) -> Self {
            Self {
                path,
                type_id,
                value,
                kinds,
            }
        }
    }

    #[derive(Debug, Display, Clone, PartialEq, Eq, Hash, Serialize)]
    #[display(fmt = "Resource {resource_type} of id {resource_id} not found")]
    pub struct NotFoundError {
        /// Requested resource id
        pub resource_id: Uuid,
        /// Name of the resource
        pub resource_type: &'static str,
    }

    impl NotFoundError {
        pub fn of<R: ResourceID>(resource_id: Uuid) -> Self {
            Self {
                resource_id,
                resource_type: R::resource_id(),
            }
        }
    }

    #[derive(Debug, Display, Clone, PartialEq, Eq, Hash, Serialize)]
    #[display(fmt = "Conflicting resource {resource_type} of id {resource_id} at version {version}")]
    pub struct ConflictError {
        /// Resource id
        pub resource_id: Uuid,
        /// Name of the resource
        pub resource_type: &'static str,
        /// Version the conflicting write was based on
        pub version: u32,
    }

    impl ConflictError {
        pub fn of<R: ResourceID>(resource_id: Uuid, version: u32) -> Self {
            Self {
                resource_id,
                resource_type: R::resource_id(),
                version,
            }
        }
    }
}

pub mod http {
    use derive_more::Display;
    use salvo::{http::ParseError, prelude::StatusError, writer::Json, Piece, Response};
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Display, Clone, Serialize, Deserialize)]
    pub enum BadRequest {
        InvalidContent,
        #[display(fmt = "InvalidPathParam {_0}")]
        InvalidPathParam(String),
    }

    impl std::error::Error for BadRequest {}

    #[derive(Debug, Display, Clone, Serialize, Deserialize)]
    #[display(fmt = "Response error: {title}, {message}")]
    pub struct ErrorResponse<T> {
        pub title: String,
        pub message: String,
        pub error: T,
    }

    impl<T> ErrorResponse<T> {
        pub fn from_status_error(status: &StatusError, err: T) -> Self {
            Self {
                title: status.name.clone(),
                message: status
                    .summary
                    .clone()
                    .unwrap_or_else(|| status.name.clone()),
                error: err,
            }
        }
    }

    impl From<ParseError> for BadRequest {
        fn from(_: ParseError) -> Self {
            BadRequest::InvalidContent
        }
    }

    impl Piece for BadRequest {
        fn render(self, res: &mut Response) {
            let status = StatusError::bad_request();
            res.render(Json(ErrorResponse::from_status_error(&status, self)));
            res.set_status_error(status);
        }
    }
}
