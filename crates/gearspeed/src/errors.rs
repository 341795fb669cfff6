//! Error handling and exit codes.

use gearspeed_core::constants::exit_codes;
use gearspeed_core::GearError;

/// Map an analysis error to its exit code.
pub fn handle_error(err: &GearError) -> i32 {
    match err {
        GearError::InvalidInput(_) => exit_codes::ERROR_INVALID_INPUT,
        GearError::EmptyInput(_) => exit_codes::ERROR_EMPTY_INPUT,
        GearError::Config(_) => exit_codes::ERROR_CONFIG,
    }
}

/// Exit code for any application error.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<GearError>()
        .map_or(exit_codes::ERROR_GENERIC, handle_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes() {
        assert_eq!(handle_error(&GearError::InvalidInput("0 teeth".into())), 2);
        assert_eq!(handle_error(&GearError::EmptyInput("speed statistics")), 3);
        assert_eq!(handle_error(&GearError::Config("bad".into())), 4);
    }

    #[test]
    fn anyhow_codes() {
        let err = anyhow::Error::from(GearError::Config("bad".into()));
        assert_eq!(exit_code(&err), exit_codes::ERROR_CONFIG);
        assert_eq!(
            exit_code(&anyhow::anyhow!("disk full")),
            exit_codes::ERROR_GENERIC
        );
    }
}
