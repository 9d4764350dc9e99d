use std::sync::Arc;

use crate::allocator::{CandidateAllocator, CandidateChain};

/// 查询关系。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    /// 词条 reading 是查询串的非空前缀
    Prefix,
    /// 查询串是词条 reading 的前缀（补全）
    Predictive,
    /// 词条 surface 是查询串的非空前缀（反查）
    Reverse,
}

/// 词典抽象：core 不关心索引是编译好的、用户添加的、组合的还是测试替身。
///
/// 约定：
/// - `key` 必须非空；空查询属于调用方违约，实现应调用 `assert_query` 直接 panic
/// - 每个命中的词条在 `alloc` 中分配恰好一个候选，返回覆盖它们的 `CandidateChain`
/// - 无命中返回空链，不是错误
/// - 链内顺序没有约定，调用方只能依赖“完整且不去重”
pub trait Dictionary: Send + Sync {
    /// 前缀查询：返回 reading 为 `key` 非空前缀（含相等）的全部词条。
    fn lookup_prefix(&self, key: &str, alloc: &mut CandidateAllocator) -> CandidateChain;

    /// 预测查询：返回以 `key` 为前缀的全部词条（含相等）。
    fn lookup_predictive(&self, key: &str, alloc: &mut CandidateAllocator) -> CandidateChain;

    /// 反查：返回 surface 为 `key` 非空前缀（含相等）的全部词条。
    fn lookup_reverse(&self, key: &str, alloc: &mut CandidateAllocator) -> CandidateChain;

    /// 按关系分派。
    fn lookup(&self, relation: Relation, key: &str, alloc: &mut CandidateAllocator) -> CandidateChain {
        match relation {
            Relation::Prefix => self.lookup_prefix(key, alloc),
            Relation::Predictive => self.lookup_predictive(key, alloc),
            Relation::Reverse => self.lookup_reverse(key, alloc),
        }
    }
}

/// 查询边界检查：空查询直接 panic，尽早暴露调用方 bug。
#[track_caller]
pub fn assert_query(key: &str) {
    assert!(!key.is_empty(), "词典查询串不能为空");
}

impl<D: Dictionary + ?Sized> Dictionary for Arc<D> {
    fn lookup_prefix(&self, key: &str, alloc: &mut CandidateAllocator) -> CandidateChain {
        (**self).lookup_prefix(key, alloc)
    }

    fn lookup_predictive(&self, key: &str, alloc: &mut CandidateAllocator) -> CandidateChain {
        (**self).lookup_predictive(key, alloc)
    }

    fn lookup_reverse(&self, key: &str, alloc: &mut CandidateAllocator) -> CandidateChain {
        (**self).lookup_reverse(key, alloc)
    }
}

impl<D: Dictionary + ?Sized> Dictionary for &D {
    fn lookup_prefix(&self, key: &str, alloc: &mut CandidateAllocator) -> CandidateChain {
        (**self).lookup_prefix(key, alloc)
    }

    fn lookup_predictive(&self, key: &str, alloc: &mut CandidateAllocator) -> CandidateChain {
        (**self).lookup_predictive(key, alloc)
    }

    fn lookup_reverse(&self, key: &str, alloc: &mut CandidateAllocator) -> CandidateChain {
        (**self).lookup_reverse(key, alloc)
    }
}
