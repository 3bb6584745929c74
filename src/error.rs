use crate::auth::AuthError;
use crate::booking::BookingError;
use crate::catalog::CatalogError;
use crate::config::ConfigError;
use crate::telemetry::TelemetryError;
use thiserror::Error;

// Any failure surfaced to the presentation layer
#[derive(Error, Debug)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("booking error: {0}")]
    Booking(#[from] BookingError),

    #[error("authentication error: {0}")]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Telemetry(#[from] TelemetryError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wraps_module_errors() {
        let err: AppError = BookingError::NoHotelSelected.into();
        assert_eq!(err.to_string(), "booking error: No hotel selected");

        let err: AppError = AuthError::MissingFields.into();
        assert_eq!(
            err.to_string(),
            "authentication error: Please fill in all fields"
        );

        let err: AppError = CatalogError::UnknownAmenity("sauna".to_string()).into();
        assert!(matches!(err, AppError::Catalog(_)));
    }
}
