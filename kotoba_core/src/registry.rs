//! `registry`：当前生效词典的唯一入口。
//!
//! 生产代码统一经由注册表取词典，测试可以换成 `MockDictionary` 而不改调用点。
//!
//! 用法：
//! - 应用：启动时 `DictionaryRegistry::global().set_dictionary(Some(..))`，退出时 `set_dictionary(None)`
//! - 测试：各自 `DictionaryRegistry::new()`，互不干扰，可以并行
//!
//! 替换用读写锁保护，后写者生效；已经取到 `Arc` 的查询方不受替换影响。

use std::sync::{Arc, LazyLock};

use parking_lot::RwLock;
use tracing::debug;

use crate::{
    dictionary::Dictionary,
    error::{Error, Result},
};

static GLOBAL: LazyLock<DictionaryRegistry> = LazyLock::new(DictionaryRegistry::new);

#[derive(Default)]
pub struct DictionaryRegistry {
    active: RwLock<Option<Arc<dyn Dictionary>>>,
}

impl DictionaryRegistry {
    /// 新建一个独立的（初始为空的）注册表。
    pub fn new() -> Self {
        Self::default()
    }

    /// 进程级注册表。
    pub fn global() -> &'static DictionaryRegistry {
        &GLOBAL
    }

    /// 安装（`Some`）或清空（`None`）当前词典，返回被替换的旧值。
    pub fn set_dictionary(&self, dictionary: Option<Arc<dyn Dictionary>>) -> Option<Arc<dyn Dictionary>> {
        debug!(installed = dictionary.is_some(), "swap active dictionary");
        std::mem::replace(&mut *self.active.write(), dictionary)
    }

    /// 当前词典；未设置时返回 `None`。
    pub fn get_dictionary(&self) -> Option<Arc<dyn Dictionary>> {
        self.active.read().clone()
    }

    /// 同 `get_dictionary`，但未设置时返回 `Error::DictionaryUnset`（启动阶段的配置错误）。
    pub fn require(&self) -> Result<Arc<dyn Dictionary>> {
        self.get_dictionary().ok_or(Error::DictionaryUnset)
    }

    pub fn is_set(&self) -> bool {
        self.active.read().is_some()
    }

    /// 临时安装词典，guard 析构时恢复原来的词典。
    pub fn scoped(&self, dictionary: Arc<dyn Dictionary>) -> ScopedDictionary<'_> {
        let previous = self.set_dictionary(Some(dictionary));
        ScopedDictionary {
            registry: self,
            previous,
        }
    }
}

/// `DictionaryRegistry::scoped` 返回的 guard。
pub struct ScopedDictionary<'a> {
    registry: &'a DictionaryRegistry,
    previous: Option<Arc<dyn Dictionary>>,
}

impl Drop for ScopedDictionary<'_> {
    fn drop(&mut self) {
        self.registry.set_dictionary(self.previous.take());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{allocator::CandidateAllocator, mock::MockDictionary, model::Attributes};

    #[test]
    fn starts_unset() {
        let registry = DictionaryRegistry::new();
        assert!(registry.get_dictionary().is_none());
        assert!(matches!(registry.require(), Err(Error::DictionaryUnset)));
    }

    #[test]
    fn last_writer_wins_and_clear() {
        let registry = DictionaryRegistry::new();
        let first: Arc<dyn Dictionary> = Arc::new(MockDictionary::new());
        let mock = MockDictionary::new();
        mock.add_lookup_prefix("そら", "そら", "空", Attributes::empty());
        let second: Arc<dyn Dictionary> = Arc::new(mock);

        assert!(registry.set_dictionary(Some(first)).is_none());
        assert!(registry.set_dictionary(Some(second)).is_some());

        let mut alloc = CandidateAllocator::new();
        let dict = registry.require().unwrap();
        assert_eq!(dict.lookup_prefix("そら", &mut alloc).len(), 1);

        assert!(registry.set_dictionary(None).is_some());
        assert!(!registry.is_set());
    }

    #[test]
    fn held_dictionary_survives_swap() {
        let registry = DictionaryRegistry::new();
        let mock = MockDictionary::new();
        mock.add_lookup_reverse("海", "うみ", "海", Attributes::empty());
        let mock: Arc<dyn Dictionary> = Arc::new(mock);
        registry.set_dictionary(Some(mock));

        let held = registry.require().unwrap();
        registry.set_dictionary(None);

        let mut alloc = CandidateAllocator::new();
        assert_eq!(held.lookup_reverse("海", &mut alloc).len(), 1);
    }

    #[test]
    fn scoped_restores_previous() {
        let registry = DictionaryRegistry::new();
        {
            let _guard = registry.scoped(Arc::new(MockDictionary::new()));
            assert!(registry.is_set());
        }
        assert!(!registry.is_set());
    }
}
