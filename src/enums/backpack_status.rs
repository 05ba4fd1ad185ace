use crate::error::BackpackError;
use num_enum::TryFromPrimitive;

/// Status codes from `GetPlayerItems` responses.
#[derive(Debug, TryFromPrimitive, PartialEq, Eq, Clone, Copy)]
#[repr(u32)]
pub enum BackpackStatus {
    Ok = 1,
    // 8 and 18 both indicate a SteamID the API could not resolve.
    #[num_enum(alternatives = [18])]
    InvalidSteamId = 8,
    Private = 15,
}

impl BackpackStatus {
    /// Converts a raw status code into a result, reporting non-ok statuses as errors.
    pub fn check(code: u32) -> Result<(), BackpackError> {
        match Self::try_from_primitive(code) {
            Ok(Self::Ok) => Ok(()),
            Ok(Self::InvalidSteamId) => Err(BackpackError::InvalidSteamId),
            Ok(Self::Private) => Err(BackpackError::Private),
            Err(_) => Err(BackpackError::UnknownStatus(code)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_status_codes() {
        assert!(BackpackStatus::check(1).is_ok());
        assert_eq!(BackpackStatus::check(8), Err(BackpackError::InvalidSteamId));
        assert_eq!(BackpackStatus::check(18), Err(BackpackError::InvalidSteamId));
        assert_eq!(BackpackStatus::check(15), Err(BackpackError::Private));
        assert_eq!(BackpackStatus::check(2), Err(BackpackError::UnknownStatus(2)));
    }
}
