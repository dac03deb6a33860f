use super::CodedError;
use core::fmt::Display;

impl Display for CodedError {
    /// `{}` shows the client-safe message, `{:#}` the full debug summary.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if !f.alternate() {
            return f.write_str(&self.message);
        }
        f.write_str(&self.debug_summary())
    }
}

impl core::error::Error for CodedError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        self.cause.as_deref().map(|cause| cause as &(dyn core::error::Error + 'static))
    }
}

impl PartialEq for CodedError {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for CodedError {}
