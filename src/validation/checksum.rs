/// Final gate run on a number whose fields are all in range.
///
/// No check-digit scheme ships with this crate. A caller that has settled on
/// one implements this trait and passes it to
/// [`crate::IdNumberValidator::with_check_digit`]; a rejection is reported as
/// [`crate::models::ErrorReason::InvalidCheckDigit`].
pub trait CheckDigit: Send + Sync {
    /// `raw` is always 13 ASCII digits when this is called.
    fn verify(&self, raw: &str) -> bool;
}

/// Accepts every number.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCheckDigit;

impl CheckDigit for NoCheckDigit {
    fn verify(&self, _raw: &str) -> bool {
        true
    }
}

impl<F> CheckDigit for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn verify(&self, raw: &str) -> bool {
        self(raw)
    }
}
