use std::io;

/// Failures that stop a compilation unit from producing output.
///
/// Ordinary lexical and syntax problems are not errors here: they go to the
/// [`crate::diagnostics::Reporter`] and the parse carries on.
#[derive(thiserror::Error, Debug)]
pub enum FrontendError {
    /// The input stream could not be read
    #[error("failed to read source: {0}")]
    Io(#[from] io::Error),
    /// The unit parsed but diagnostics were reported
    #[error("Generated {0} errors")]
    Diagnostics(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = FrontendError::Diagnostics(3);
        assert_eq!(err.to_string(), "Generated 3 errors");

        let err: FrontendError = io::Error::new(io::ErrorKind::Other, "disk gone").into();
        assert_eq!(err.to_string(), "failed to read source: disk gone");
    }
}
