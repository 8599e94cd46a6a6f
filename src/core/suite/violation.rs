use thiserror::Error;

/// Misuse of a suite context. These are programmer errors, so they are
/// raised as panics rather than returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContractViolation {
    #[error("suite context is not live (tag {found:#010x}): never created, already released, or corrupted")]
    BadTag { found: u32 },

    #[error("suite {counter} count overflowed")]
    Overflow { counter: &'static str },
}

impl ContractViolation {
    #[track_caller]
    pub(crate) fn raise(self) -> ! {
        tracing::error!("{}", self);
        panic!("{}", self)
    }
}
