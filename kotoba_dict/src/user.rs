//! 用户词典：运行中可以继续添加词条。
//!
//! 写入与查询用读写锁串行化：同一时刻只有一个写者，查询方可以并发读。
//! 查询拿到的候选是拷贝，写锁释放后再添加词条不会影响已经发出的候选。
use std::{fs, path::Path};

use kotoba_core::{CandidateAllocator, CandidateChain, Dictionary, Entry, Relation, Result};
use parking_lot::RwLock;
use tracing::debug;

use crate::{index::LexiconIndex, tsv};

#[derive(Debug, Default)]
pub struct UserDictionary {
    index: RwLock<LexiconIndex>,
}

impl UserDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// 添加一个词条（原样保存属性）。
    pub fn add_entry(&self, entry: Entry) -> Result<()> {
        debug!(reading = %entry.reading, surface = %entry.surface, "add user entry");
        self.index.write().insert(entry)
    }

    /// 批量导入 TSV 文本，返回导入条数。整份文本先解析，解析失败时不写入任何词条。
    pub fn load_tsv_str(&self, s: &str) -> Result<usize> {
        let entries = tsv::parse_lexicon(s)?;
        let n = entries.len();
        let mut index = self.index.write();
        for e in entries {
            index.insert(e)?;
        }
        debug!(entries = n, total = index.len(), "loaded user entries");
        Ok(n)
    }

    pub fn load_path(&self, path: impl AsRef<Path>) -> Result<usize> {
        let s = fs::read_to_string(path)?;
        self.load_tsv_str(&s)
    }

    pub fn len(&self) -> usize {
        self.index.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lookup(&self, relation: Relation, key: &str, alloc: &mut CandidateAllocator) -> CandidateChain {
        self.index.read().lookup(relation, key, alloc)
    }
}

impl Dictionary for UserDictionary {
    fn lookup_prefix(&self, key: &str, alloc: &mut CandidateAllocator) -> CandidateChain {
        self.lookup(Relation::Prefix, key, alloc)
    }

    fn lookup_predictive(&self, key: &str, alloc: &mut CandidateAllocator) -> CandidateChain {
        self.lookup(Relation::Predictive, key, alloc)
    }

    fn lookup_reverse(&self, key: &str, alloc: &mut CandidateAllocator) -> CandidateChain {
        self.lookup(Relation::Reverse, key, alloc)
    }
}
