use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::errors::JwtError;

/// Registered JWT claims carried by access tokens.
///
/// All fields are optional on the wire so that a token missing a claim still
/// decodes and the caller decides how to treat the gap.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (login identity)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,

    /// Expiration time (Unix timestamp)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,

    /// Issued at (Unix timestamp)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
}

impl Claims {
    /// Create new empty claims.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create claims for a subject, issued at `now` and valid for `ttl`.
    ///
    /// # Errors
    /// * `EncodingFailed` - `now + ttl` is outside the representable date range
    pub fn for_subject(
        sub: impl ToString,
        now: DateTime<Utc>,
        ttl: Duration,
    ) -> Result<Self, JwtError> {
        let expires_at = now
            .checked_add_signed(ttl)
            .ok_or_else(|| JwtError::EncodingFailed("token expiry out of range".to_string()))?;

        Ok(Self {
            sub: Some(sub.to_string()),
            exp: Some(expires_at.timestamp()),
            iat: Some(now.timestamp()),
        })
    }

    /// Set subject.
    pub fn with_subject(mut self, sub: impl ToString) -> Self {
        self.sub = Some(sub.to_string());
        self
    }

    /// Set expiration (Unix timestamp).
    pub fn with_expiration(mut self, exp: i64) -> Self {
        self.exp = Some(exp);
        self
    }

    /// Set issued at (Unix timestamp).
    pub fn with_issued_at(mut self, iat: i64) -> Self {
        self.iat = Some(iat);
        self
    }

    /// Subject, treating an empty string as absent.
    pub fn subject(&self) -> Option<&str> {
        self.sub.as_deref().filter(|s| !s.is_empty())
    }

    /// Check if token is expired.
    ///
    /// A token is only valid while `exp` is strictly in the future, so a token
    /// whose expiry equals `current_timestamp` is already expired.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp.map_or(false, |exp| exp <= current_timestamp)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_new_claims() {
        let claims = Claims::new().with_subject("bruno");
        assert_eq!(claims.sub, Some("bruno".to_string()));
        assert!(claims.exp.is_none());
    }

    #[test]
    fn test_for_subject() {
        let now = Utc.with_ymd_and_hms(2025, 3, 20, 10, 0, 0).unwrap();
        let claims = Claims::for_subject("bruno", now, Duration::minutes(30)).unwrap();

        assert_eq!(claims.subject(), Some("bruno"));
        assert_eq!(claims.iat, Some(now.timestamp()));
        assert_eq!(claims.exp.unwrap() - claims.iat.unwrap(), 30 * 60);
    }

    #[test]
    fn test_for_subject_rejects_overflowing_ttl() {
        let result = Claims::for_subject("bruno", Utc::now(), Duration::days(100_000_000));
        assert!(matches!(result, Err(JwtError::EncodingFailed(_))));
    }

    #[test]
    fn test_builder_pattern() {
        let claims = Claims::new()
            .with_subject("fernanda")
            .with_expiration(1234567890)
            .with_issued_at(1234567800);

        assert_eq!(claims.sub, Some("fernanda".to_string()));
        assert_eq!(claims.exp, Some(1234567890));
        assert_eq!(claims.iat, Some(1234567800));
    }

    #[test]
    fn test_empty_subject_is_absent() {
        let claims = Claims::new().with_subject("");
        assert_eq!(claims.subject(), None);
    }

    #[test]
    fn test_is_expired() {
        let claims = Claims::new().with_expiration(1000);

        assert!(!claims.is_expired(999)); // Not expired
        assert!(claims.is_expired(1000)); // Exactly at expiration
        assert!(claims.is_expired(1001)); // Expired
    }

    #[test]
    fn test_is_expired_no_exp_claim() {
        let claims = Claims::new();
        assert!(!claims.is_expired(9999999999));
    }

    #[test]
    fn test_serialization_skips_absent_claims() {
        let json = serde_json::to_value(Claims::new().with_subject("bruno")).unwrap();
        assert_eq!(json, serde_json::json!({ "sub": "bruno" }));
    }
}
