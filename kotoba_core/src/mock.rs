//! `mock`：可编程的词典测试替身。
//!
//! 不建索引：每种查询关系各有一张“登记串 -> 预先登记的词条”表，查询时原样返回登记的词条（或空），
//! 用于在没有真实词典的情况下测试调用方。
//!
//! - 前缀 / 反查：返回登记串是查询串前缀（含相等）的全部登记，与真实词典的前缀关系一致
//! - 预测：只返回登记串与查询串完全相同的登记
//!
//! 表放在 `RwLock` 里，所以 `Arc<MockDictionary>` 装进注册表之后仍然可以继续登记。

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::{
    allocator::{CandidateAllocator, CandidateChain},
    dictionary::{Dictionary, Relation, assert_query},
    model::{Attributes, Entry},
};

type Table = FxHashMap<String, Vec<Entry>>;

#[derive(Default)]
struct Tables {
    prefix: Table,
    predictive: Table,
    reverse: Table,
}

impl Tables {
    fn get(&self, relation: Relation) -> &Table {
        match relation {
            Relation::Prefix => &self.prefix,
            Relation::Predictive => &self.predictive,
            Relation::Reverse => &self.reverse,
        }
    }

    fn get_mut(&mut self, relation: Relation) -> &mut Table {
        match relation {
            Relation::Prefix => &mut self.prefix,
            Relation::Predictive => &mut self.predictive,
            Relation::Reverse => &mut self.reverse,
        }
    }
}

#[derive(Default)]
pub struct MockDictionary {
    tables: RwLock<Tables>,
}

impl MockDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// 登记：`lookup_prefix(query)` 时返回 (reading, surface, attributes)。
    pub fn add_lookup_prefix(&self, query: &str, reading: &str, surface: &str, attributes: Attributes) {
        self.add(Relation::Prefix, query, reading, surface, attributes);
    }

    /// 登记：`lookup_predictive(query)` 时返回 (reading, surface, attributes)。
    pub fn add_lookup_predictive(&self, query: &str, reading: &str, surface: &str, attributes: Attributes) {
        self.add(Relation::Predictive, query, reading, surface, attributes);
    }

    /// 登记：`lookup_reverse(query)` 时返回 (reading, surface, attributes)。
    pub fn add_lookup_reverse(&self, query: &str, reading: &str, surface: &str, attributes: Attributes) {
        self.add(Relation::Reverse, query, reading, surface, attributes);
    }

    /// 登记完整词条（需要 cost / 连接 id 时用）。
    pub fn add_entry(&self, relation: Relation, query: &str, entry: Entry) {
        self.tables
            .write()
            .get_mut(relation)
            .entry(query.to_owned())
            .or_default()
            .push(entry);
    }

    pub fn clear(&self) {
        *self.tables.write() = Tables::default();
    }

    fn add(&self, relation: Relation, query: &str, reading: &str, surface: &str, attributes: Attributes) {
        self.add_entry(relation, query, Entry::new(reading, surface).attributes(attributes));
    }

    fn replay(&self, relation: Relation, key: &str, alloc: &mut CandidateAllocator) -> CandidateChain {
        assert_query(key);
        let mark = alloc.mark();
        let tables = self.tables.read();
        let table = tables.get(relation);
        match relation {
            Relation::Prefix | Relation::Reverse => {
                for (i, c) in key.char_indices() {
                    for e in table.get(&key[..i + c.len_utf8()]).into_iter().flatten() {
                        alloc.push_entry(e);
                    }
                }
            }
            Relation::Predictive => {
                for e in table.get(key).into_iter().flatten() {
                    alloc.push_entry(e);
                }
            }
        }
        alloc.chain_since(mark)
    }
}

impl Dictionary for MockDictionary {
    fn lookup_prefix(&self, key: &str, alloc: &mut CandidateAllocator) -> CandidateChain {
        self.replay(Relation::Prefix, key, alloc)
    }

    fn lookup_predictive(&self, key: &str, alloc: &mut CandidateAllocator) -> CandidateChain {
        self.replay(Relation::Predictive, key, alloc)
    }

    fn lookup_reverse(&self, key: &str, alloc: &mut CandidateAllocator) -> CandidateChain {
        self.replay(Relation::Reverse, key, alloc)
    }
}
