//! Error types shared across the noisegen workspace.

use thiserror::Error;

/// Errors produced by engine configuration and the rendering layer.
///
/// Sampling itself is infallible; errors arise only at the edges, when
/// parsing strategy names, validating recorded recipes, or writing images.
#[derive(Debug, Error)]
pub enum NoiseError {
    /// A noise-kind name was not recognized.
    #[error("unknown noise kind: {0}")]
    UnknownNoiseKind(String),

    /// A distribution name was not recognized.
    #[error("unknown distribution: {0}")]
    UnknownDistribution(String),

    /// A hash name was not recognized.
    #[error("unknown hash: {0}")]
    UnknownHash(String),

    /// A spline name was not recognized.
    #[error("unknown spline: {0}")]
    UnknownSpline(String),

    /// Width or height was zero when creating a noise map.
    #[error("invalid dimensions: width and height must be non-zero")]
    InvalidDimensions,

    /// A recorded table size was not one the engine can be constructed with.
    #[error("unsupported table size: {0} (must be a power of two between 16 and 1024)")]
    BadTableSize(usize),

    /// An I/O failure while writing a snapshot.
    #[error("io error: {0}")]
    Io(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_name_errors_include_the_offending_name() {
        let cases: [(NoiseError, &str); 4] = [
            (NoiseError::UnknownNoiseKind("worley".into()), "worley"),
            (NoiseError::UnknownDistribution("poisson".into()), "poisson"),
            (NoiseError::UnknownHash("fnv".into()), "fnv"),
            (NoiseError::UnknownSpline("hermite".into()), "hermite"),
        ];
        for (err, name) in cases {
            let msg = format!("{err}");
            assert!(msg.contains(name), "expected '{name}' in: {msg}");
        }
    }

    #[test]
    fn invalid_dimensions_displays_readable_message() {
        let err = NoiseError::InvalidDimensions;
        let msg = format!("{err}");
        assert!(
            msg.contains("width") && msg.contains("height"),
            "expected message mentioning width and height, got: {msg}"
        );
    }

    #[test]
    fn bad_table_size_includes_the_requested_size() {
        let err = NoiseError::BadTableSize(100);
        let msg = format!("{err}");
        assert!(msg.contains("100"), "missing size in: {msg}");
        assert!(msg.contains("power of two"), "missing constraint in: {msg}");
    }

    #[test]
    fn io_error_includes_message() {
        let err = NoiseError::Io("disk full".into());
        let msg = format!("{err}");
        assert!(msg.contains("disk full"), "missing message in: {msg}");
    }

    #[test]
    fn noise_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<NoiseError>();
    }

    #[test]
    fn noise_error_implements_std_error() {
        fn assert_std_error<T: std::error::Error>() {}
        assert_std_error::<NoiseError>();
    }
}
