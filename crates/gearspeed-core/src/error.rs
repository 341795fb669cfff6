//! Error type for drivetrain calculations and analysis.

/// Error type for gear calculations and analyzers.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GearError {
    /// A gear size or motor speed was zero.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An analyzer was given no setups.
    #[error("{0} requires at least one gear setup")]
    EmptyInput(&'static str),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        assert_eq!(
            GearError::InvalidInput("driving gear has 0 teeth".into()).to_string(),
            "invalid input: driving gear has 0 teeth"
        );
        assert_eq!(
            GearError::EmptyInput("extremal search").to_string(),
            "extremal search requires at least one gear setup"
        );
        assert_eq!(
            GearError::Config("bad sort".into()).to_string(),
            "configuration error: bad sort"
        );
    }
}
