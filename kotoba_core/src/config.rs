//! 查询相关配置（TOML）。core 只负责反序列化，读文件交给调用方。
//!
//! ```toml
//! system_dictionary = "asset/lexicon.tsv"
//! user_dictionary = "~/.kotoba/user.tsv"
//! max_candidates = 4096
//! print_limit = 20
//! ```
use std::path::PathBuf;

use serde::Deserialize;

use crate::{
    allocator::CandidateAllocator,
    error::{Error, Result},
};

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LookupConfig {
    /// 系统词典（TSV）
    pub system_dictionary: Option<PathBuf>,
    /// 用户词典（TSV，可选）
    pub user_dictionary: Option<PathBuf>,
    /// 单次查询分配的候选上限；None 表示不限。
    ///
    /// 这是硬上限：查询命中超过它时 `CandidateAllocator::new_candidate` 会 panic，
    /// 整个进程随之中止。只在能确定候选规模时设置。
    pub max_candidates: Option<usize>,
    /// 展示时最多打印多少条候选
    pub print_limit: usize,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            system_dictionary: None,
            user_dictionary: None,
            max_candidates: None,
            print_limit: 20,
        }
    }
}

impl LookupConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| Error::Config(e.to_string()))
    }

    /// 按配置创建分配器。
    ///
    /// # Panics
    /// 返回的分配器在超过 `max_candidates` 时 panic，见字段说明。
    pub fn allocator(&self) -> CandidateAllocator {
        match self.max_candidates {
            Some(limit) => CandidateAllocator::with_capacity(limit.min(1024)).with_limit(limit),
            None => CandidateAllocator::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let cfg = LookupConfig::from_toml_str("").unwrap();
        assert!(cfg.system_dictionary.is_none());
        assert_eq!(cfg.print_limit, 20);
    }

    #[test]
    fn parses_all_fields() {
        let cfg = LookupConfig::from_toml_str(
            r#"
system_dictionary = "lexicon.tsv"
user_dictionary = "user.tsv"
max_candidates = 8
print_limit = 5
"#,
        )
        .unwrap();
        assert_eq!(cfg.system_dictionary, Some(PathBuf::from("lexicon.tsv")));
        assert_eq!(cfg.user_dictionary, Some(PathBuf::from("user.tsv")));
        assert_eq!(cfg.max_candidates, Some(8));
        assert_eq!(cfg.print_limit, 5);
    }

    #[test]
    fn unknown_field_is_config_error() {
        let err = LookupConfig::from_toml_str("dictionary = 1").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    #[should_panic(expected = "候选分配器耗尽")]
    fn max_candidates_is_a_hard_limit() {
        let cfg = LookupConfig::from_toml_str("max_candidates = 1").unwrap();
        let mut alloc = cfg.allocator();
        alloc.new_candidate();
        alloc.new_candidate();
    }
}
