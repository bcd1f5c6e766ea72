//! 凭证（Credential）协议
//!
//! 领域层只关心“单向哈希”与“明文是否匹配哈希”两件事，
//! 具体算法（如 bcrypt）由基础设施层实现并注入。
//!
use crate::error::DomainResult as Result;

/// 口令哈希器
pub trait PasswordHasher: Send + Sync {
    /// 生成可存储的单向哈希
    fn hash(&self, plain: &str) -> Result<String>;

    /// 校验明文与已存储哈希是否匹配；哈希格式非法时视为不匹配
    fn verify(&self, plain: &str, hash: &str) -> bool;
}
