use std::error::Error;

use log::{debug, warn};

use crate::models::{ValidationVerdict, ID_LENGTH};
use crate::utils::{mask, IdCheckError};
use crate::validation::{classify_with, CheckDigit, NoCheckDigit};

/// The two external services consulted once a number is structurally valid.
///
/// Implementations own transport, timeouts and retries. Both calls receive
/// the original 13-digit string.
pub trait RemoteIdService {
    type Payload;
    type Error: Error + Send + Sync + 'static;

    /// Existence and format re-check against the registry.
    fn check_id(&self, id: &str) -> Result<(), Self::Error>;

    /// Reference data lookup for a number that passed `check_id`.
    fn lookup(&self, id: &str) -> Result<Self::Payload, Self::Error>;
}

/// Whether enough characters have been entered to attempt a check.
pub fn is_ready(raw: &str) -> bool {
    raw.chars().count() == ID_LENGTH
}

/// Classifies `raw` and, only when it is valid, runs the remote re-check
/// followed by the lookup.
///
/// Either remote failure becomes [`IdCheckError::Remote`]; callers do not
/// learn which of the two calls failed.
pub fn check_remote<S: RemoteIdService>(
    raw: &str,
    service: &S,
) -> Result<S::Payload, IdCheckError> {
    check_remote_with(raw, &NoCheckDigit, service)
}

pub fn check_remote_with<S: RemoteIdService>(
    raw: &str,
    check_digit: &dyn CheckDigit,
    service: &S,
) -> Result<S::Payload, IdCheckError> {
    if let ValidationVerdict::Invalid(reason) = classify_with(raw, check_digit) {
        return Err(IdCheckError::Invalid(reason));
    }

    debug!("{} is structurally valid, calling remote services", mask(raw));

    service.check_id(raw).map_err(|err| remote_failure(raw, "check", err))?;
    service.lookup(raw).map_err(|err| remote_failure(raw, "lookup", err))
}

fn remote_failure<E>(raw: &str, call: &str, err: E) -> IdCheckError
where
    E: Error + Send + Sync + 'static,
{
    warn!("remote {} failed for {}: {}", call, mask(raw), err);
    IdCheckError::Remote(Box::new(err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ErrorReason;
    use std::cell::RefCell;
    use std::fmt;

    #[derive(Debug)]
    struct ServiceDown;

    impl fmt::Display for ServiceDown {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            write!(f, "service unavailable")
        }
    }

    impl Error for ServiceDown {}

    #[derive(Default)]
    struct FakeService {
        fail_check: bool,
        fail_lookup: bool,
        calls: RefCell<Vec<String>>,
    }

    impl RemoteIdService for FakeService {
        type Payload = String;
        type Error = ServiceDown;

        fn check_id(&self, id: &str) -> Result<(), ServiceDown> {
            self.calls.borrow_mut().push(format!("check:{}", id));
            if self.fail_check {
                Err(ServiceDown)
            } else {
                Ok(())
            }
        }

        fn lookup(&self, id: &str) -> Result<String, ServiceDown> {
            self.calls.borrow_mut().push(format!("lookup:{}", id));
            if self.fail_lookup {
                Err(ServiceDown)
            } else {
                Ok(format!("holidays for {}", &id[..6]))
            }
        }
    }

    #[test]
    fn test_is_ready() {
        assert!(is_ready("8001015009087"));
        assert!(!is_ready("800101500908"));
        assert!(!is_ready("80010150090871"));
        // Ready only means "long enough to try", not valid.
        assert!(is_ready("abcdefghijklm"));
    }

    #[test]
    fn test_valid_number_calls_both_in_order() {
        let service = FakeService::default();
        let payload = check_remote("8001015009087", &service).unwrap();
        assert_eq!(payload, "holidays for 800101");
        assert_eq!(
            *service.calls.borrow(),
            vec!["check:8001015009087", "lookup:8001015009087"]
        );
    }

    #[test]
    fn test_invalid_number_never_calls_remote() {
        let service = FakeService::default();
        let err = check_remote("8013015009087", &service).unwrap_err();
        assert_eq!(err.reason(), ErrorReason::InvalidMonth);

        let err = check_remote("not an id", &service).unwrap_err();
        assert_eq!(err.reason(), ErrorReason::MalformedInput);

        assert!(service.calls.borrow().is_empty());
    }

    #[test]
    fn test_check_failure_skips_lookup() {
        let service = FakeService {
            fail_check: true,
            ..Default::default()
        };
        let err = check_remote("8001015009087", &service).unwrap_err();
        assert_eq!(err.reason(), ErrorReason::RemoteValidationFailed);
        assert_eq!(*service.calls.borrow(), vec!["check:8001015009087"]);
    }

    #[test]
    fn test_lookup_failure_is_same_error() {
        let service = FakeService {
            fail_lookup: true,
            ..Default::default()
        };
        let err = check_remote("8001015009087", &service).unwrap_err();
        assert_eq!(err.reason(), ErrorReason::RemoteValidationFailed);
        assert_eq!(
            err.to_string(),
            "The provided South African ID number is invalid - Something went wrong while validating the ID."
        );
        assert_eq!(service.calls.borrow().len(), 2);
    }

    #[test]
    fn test_check_digit_rejection_skips_remote() {
        let service = FakeService::default();
        let err = check_remote_with("8001015009087", &|_: &str| false, &service).unwrap_err();
        assert_eq!(err.reason(), ErrorReason::InvalidCheckDigit);
        assert!(service.calls.borrow().is_empty());
    }
}
