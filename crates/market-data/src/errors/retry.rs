/// Classification for what a caller should do after a failure.
///
/// The pipeline itself never retries. Front ends use this to choose between
/// re-prompting, asking the user to wait, or giving up.
///
/// # Behavior Summary
///
/// | Class | Same request later? | Different input? |
/// |-------|---------------------|------------------|
/// | `Never` | No | No |
/// | `WithBackoff` | Yes | Not needed |
/// | `ChangeInput` | No | Yes |
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RetryClass {
    /// Never retry - missing configuration, or the provider sent something
    /// we cannot interpret.
    Never,

    /// Retry the identical request after a pause.
    ///
    /// Used for rate limiting and transport failures.
    WithBackoff,

    /// Retrying the same request is pointless, but another symbol or date
    /// window may succeed.
    ChangeInput,
}
