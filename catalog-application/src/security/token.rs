use crate::error::{AppError, AppResult as Result};
use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// JWT 载荷
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: i64,
    pub iat: i64,
}

/// 令牌签发
pub trait TokenIssuer: Send + Sync {
    /// 为主体签发一个在 `expires_in` 后过期的令牌
    fn issue(&self, subject: &str, expires_in: Duration) -> Result<String>;
}

/// HS256 JWT 签发与校验
#[derive(Clone)]
pub struct JwtTokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtTokenIssuer {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// 校验签名与过期时间，返回载荷（对应请求侧中间件）
    pub fn verify(&self, token: &str) -> Result<Claims> {
        let mut validation = Validation::default();
        validation.leeway = 0;
        Ok(decode::<Claims>(token, &self.decoding_key, &validation)?.claims)
    }
}

impl TokenIssuer for JwtTokenIssuer {
    fn issue(&self, subject: &str, expires_in: Duration) -> Result<String> {
        let now = Utc::now().timestamp();
        let exp = i64::try_from(expires_in.as_secs())
            .ok()
            .and_then(|ttl| now.checked_add(ttl))
            .ok_or_else(|| {
                AppError::Validation(format!("token lifetime out of range: {expires_in:?}"))
            })?;
        let claims = Claims {
            sub: subject.to_string(),
            exp,
            iat: now,
        };

        Ok(encode(&Header::default(), &claims, &self.encoding_key)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issue_then_verify() {
        let issuer = JwtTokenIssuer::new("test-secret");
        let token = issuer.issue("user-1", Duration::from_secs(60)).unwrap();

        let claims = issuer.verify(&token).unwrap();
        assert_eq!(claims.sub, "user-1");
        assert_eq!(claims.exp - claims.iat, 60);
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = JwtTokenIssuer::new("secret-a")
            .issue("user-1", Duration::from_secs(60))
            .unwrap();

        let err = JwtTokenIssuer::new("secret-b").verify(&token).unwrap_err();
        assert!(matches!(err, AppError::Token(_)));
    }

    #[test]
    fn expired_token_is_rejected() {
        let issuer = JwtTokenIssuer::new("test-secret");
        let claims = Claims {
            sub: "user-1".into(),
            exp: Utc::now().timestamp() - 10,
            iat: Utc::now().timestamp() - 70,
        };
        let token = encode(&Header::default(), &claims, &issuer.encoding_key).unwrap();

        assert!(matches!(issuer.verify(&token).unwrap_err(), AppError::Token(_)));
    }

    #[test]
    fn oversized_lifetime_is_rejected_instead_of_wrapping() {
        let issuer = JwtTokenIssuer::new("test-secret");

        let err = issuer
            .issue("user-1", Duration::from_secs(u64::MAX))
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        let err = issuer
            .issue("user-1", Duration::from_secs(i64::MAX as u64))
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
