//! 系统词典：加载时一次性建好索引，之后只读。
//!
//! 没有任何内部可变状态，多个线程可以同时查询同一个实例（各自持有分配器即可），不需要锁。
use std::{fs, path::Path};

use kotoba_core::{CandidateAllocator, CandidateChain, Dictionary, Entry, Relation, Result};
use tracing::info;

use crate::{index::LexiconIndex, tsv};

#[derive(Debug, Clone)]
pub struct SystemDictionary {
    index: LexiconIndex,
}

impl SystemDictionary {
    pub fn builder() -> SystemDictionaryBuilder {
        SystemDictionaryBuilder::default()
    }

    pub fn from_entries(entries: impl IntoIterator<Item = Entry>) -> Result<Self> {
        let mut builder = Self::builder();
        for e in entries {
            builder.add(e)?;
        }
        Ok(builder.build())
    }

    pub fn from_tsv_str(s: &str) -> Result<Self> {
        Self::from_entries(tsv::parse_lexicon(s)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let s = fs::read_to_string(path)?;
        let dict = Self::from_tsv_str(&s)?;
        info!(path = %path.display(), entries = dict.len(), "loaded system dictionary");
        Ok(dict)
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.len() == 0
    }
}

impl Dictionary for SystemDictionary {
    fn lookup_prefix(&self, key: &str, alloc: &mut CandidateAllocator) -> CandidateChain {
        self.index.lookup(Relation::Prefix, key, alloc)
    }

    fn lookup_predictive(&self, key: &str, alloc: &mut CandidateAllocator) -> CandidateChain {
        self.index.lookup(Relation::Predictive, key, alloc)
    }

    fn lookup_reverse(&self, key: &str, alloc: &mut CandidateAllocator) -> CandidateChain {
        self.index.lookup(Relation::Reverse, key, alloc)
    }
}

/// 系统词典构建器：`build()` 之后不能再添加词条。
#[derive(Debug, Default)]
pub struct SystemDictionaryBuilder {
    index: LexiconIndex,
}

impl SystemDictionaryBuilder {
    /// 添加词条；reading 或 surface 为空时返回 `Error::EmptyKey`。
    pub fn add(&mut self, entry: Entry) -> Result<&mut Self> {
        self.index.insert(entry)?;
        Ok(self)
    }

    pub fn build(self) -> SystemDictionary {
        info!(
            entries = self.index.len(),
            nodes = self.index.node_count(),
            "built system dictionary"
        );
        SystemDictionary { index: self.index }
    }
}
