use crate::utils::error::{ProbeError, Result};
use std::time::Duration;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_zero_duration(field_name: &str, value: Duration) -> Result<()> {
    if value.is_zero() {
        return Err(ProbeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: format!("{:?}", value),
            reason: "Duration must be greater than zero".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Debug + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(ProbeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: format!("{:?}", value),
            reason: format!("Value must be between {:?} and {:?}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_zero_duration() {
        assert!(validate_non_zero_duration("grace_period", Duration::from_secs(5)).is_ok());
        assert!(validate_non_zero_duration("grace_period", Duration::from_millis(1)).is_ok());
        assert!(validate_non_zero_duration("grace_period", Duration::ZERO).is_err());
    }

    #[test]
    fn test_validate_range() {
        let max = Duration::from_secs(60);
        assert!(validate_range("keepalive_interval", Duration::from_secs(1), Duration::ZERO, max).is_ok());
        assert!(validate_range("keepalive_interval", max, Duration::ZERO, max).is_ok());
        assert!(validate_range("keepalive_interval", Duration::from_secs(61), Duration::ZERO, max).is_err());
    }
}
