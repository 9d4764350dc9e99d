use kotoba_core::{
    CandidateAllocator, CandidateChain, Entry, Error, Relation, Result, dictionary::assert_query,
};
use tracing::trace;

use crate::trie::Trie;

/// 词条存储 + 两棵 trie：reading 做主索引，surface 做反查索引。
///
/// 系统词典与用户词典共用；本身不加锁。
#[derive(Debug, Clone, Default)]
pub(crate) struct LexiconIndex {
    entries: Vec<Entry>,
    by_reading: Trie,
    by_surface: Trie,
}

impl LexiconIndex {
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn node_count(&self) -> usize {
        self.by_reading.node_count() + self.by_surface.node_count()
    }

    pub(crate) fn insert(&mut self, entry: Entry) -> Result<()> {
        if entry.reading.is_empty() {
            return Err(Error::EmptyKey { field: "reading" });
        }
        if entry.surface.is_empty() {
            return Err(Error::EmptyKey { field: "surface" });
        }
        let id = self.entries.len();
        self.by_reading.insert(&entry.reading, id);
        self.by_surface.insert(&entry.surface, id);
        self.entries.push(entry);
        Ok(())
    }

    pub(crate) fn lookup(&self, relation: Relation, key: &str, alloc: &mut CandidateAllocator) -> CandidateChain {
        assert_query(key);
        let mark = alloc.mark();
        let entries = &self.entries;
        let mut emit = |id: usize| alloc.push_entry(&entries[id]);
        match relation {
            Relation::Prefix => self.by_reading.common_prefix(key, &mut emit),
            Relation::Predictive => self.by_reading.predictive(key, &mut emit),
            Relation::Reverse => self.by_surface.common_prefix(key, &mut emit),
        }
        let chain = alloc.chain_since(mark);
        trace!(?relation, key, hits = chain.len(), "lexicon lookup");
        chain
    }
}
