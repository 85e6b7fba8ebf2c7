use thiserror::Error;

/// An error from an unsuccessful store or service operation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SatErr {
    /// The payload does not describe a complete, well-formed satellite
    #[error("Validation Rejected: {0}")]
    ValidationRejected(String),
    /// The referenced satellite does not exist in the store
    #[error("Record Not Found: {0}")]
    NotFound(String),
    /// An unexpected failure while reading or mutating the store
    #[error("Internal Fault: {0}")]
    InternalFault(String),
}

impl SatErr {
    /// Whether this is a [SatErr::ValidationRejected]
    pub fn is_validation_rejected(&self) -> bool {
        matches!(self, Self::ValidationRejected(_))
    }

    /// Whether this is a [SatErr::NotFound]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Whether this is a [SatErr::InternalFault]
    pub fn is_internal_fault(&self) -> bool {
        matches!(self, Self::InternalFault(_))
    }

    pub(crate) fn not_found(id: u64) -> Self {
        Self::NotFound(format!("Satellite with id {id} does not exist"))
    }
}
