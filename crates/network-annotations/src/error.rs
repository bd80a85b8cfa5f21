//! Annotation codec errors

use thiserror::Error;

/// Maximum number of characters of an offending payload echoed in error messages.
const INPUT_PREVIEW_LEN: usize = 256;

/// Errors returned by annotation marshal/parse operations
#[derive(Debug, Error)]
pub enum AnnotationError {
    /// The value could not be rendered as annotation text
    #[error("failed to encode {schema} annotation: {source}")]
    Encode {
        /// Schema being encoded
        schema: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// The text is not a valid encoding of the target schema
    #[error("failed to decode {schema} annotation {}: {source}", preview(.input))]
    Decode {
        /// Schema being decoded
        schema: &'static str,
        /// The offending annotation text, verbatim
        input: String,
        #[source]
        source: serde_json::Error,
    },

    /// A codec failure for a value stored under an object annotation key
    #[error("annotation {key}: {source}")]
    Annotation {
        /// Metadata key the value was read from or written to
        key: &'static str,
        #[source]
        source: Box<AnnotationError>,
    },
}

impl AnnotationError {
    /// True if the input text could not be decoded
    pub fn is_decode(&self) -> bool {
        match self {
            Self::Decode { .. } => true,
            Self::Encode { .. } => false,
            Self::Annotation { source, .. } => source.is_decode(),
        }
    }

    /// True if a value could not be encoded
    pub fn is_encode(&self) -> bool {
        match self {
            Self::Encode { .. } => true,
            Self::Decode { .. } => false,
            Self::Annotation { source, .. } => source.is_encode(),
        }
    }

    /// The offending input of a decode failure, if any
    pub fn input(&self) -> Option<&str> {
        match self {
            Self::Decode { input, .. } => Some(input),
            Self::Encode { .. } => None,
            Self::Annotation { source, .. } => source.input(),
        }
    }

    pub(crate) fn with_key(self, key: &'static str) -> Self {
        Self::Annotation {
            key,
            source: Box::new(self),
        }
    }
}

fn preview(input: &str) -> String {
    match input.char_indices().nth(INPUT_PREVIEW_LEN) {
        Some((end, _)) => format!("{:?}...", &input[..end]),
        None => format!("{input:?}"),
    }
}
