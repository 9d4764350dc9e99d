//! `composite`：把多个子词典合并成一个词典（例如 系统词典 + 用户词典）。
//!
//! 子词典按加入顺序依次追加到同一个分配器，因此各自的结果在池内天然相邻，
//! 合并结果就是从查询开始位置到结束位置的整段区间，无需复制。

use std::sync::Arc;

use tracing::trace;

use crate::{
    allocator::{CandidateAllocator, CandidateChain},
    dictionary::{Dictionary, Relation, assert_query},
};

/// 组合词典：自身没有词条，只持有子词典的引用。
#[derive(Default, Clone)]
pub struct CompositeDictionary {
    children: Vec<Arc<dyn Dictionary>>,
}

impl CompositeDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// builder 风格追加子词典。
    pub fn with(mut self, child: Arc<dyn Dictionary>) -> Self {
        self.children.push(child);
        self
    }

    pub fn push(&mut self, child: Arc<dyn Dictionary>) {
        self.children.push(child);
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    fn fan_out(&self, relation: Relation, key: &str, alloc: &mut CandidateAllocator) -> CandidateChain {
        assert_query(key);
        let mark = alloc.mark();
        for child in &self.children {
            child.lookup(relation, key, alloc);
        }
        let chain = alloc.chain_since(mark);
        trace!(?relation, key, children = self.children.len(), hits = chain.len(), "composite lookup");
        chain
    }
}

impl Dictionary for CompositeDictionary {
    fn lookup_prefix(&self, key: &str, alloc: &mut CandidateAllocator) -> CandidateChain {
        self.fan_out(Relation::Prefix, key, alloc)
    }

    fn lookup_predictive(&self, key: &str, alloc: &mut CandidateAllocator) -> CandidateChain {
        self.fan_out(Relation::Predictive, key, alloc)
    }

    fn lookup_reverse(&self, key: &str, alloc: &mut CandidateAllocator) -> CandidateChain {
        self.fan_out(Relation::Reverse, key, alloc)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{mock::MockDictionary, model::Attributes};

    fn surfaces(alloc: &CandidateAllocator, chain: CandidateChain) -> Vec<String> {
        let mut v: Vec<String> = alloc.candidates(chain).iter().map(|c| c.surface.clone()).collect();
        v.sort();
        v
    }

    #[test]
    fn concatenates_children() {
        let system = MockDictionary::new();
        system.add_lookup_prefix("きょう", "きょう", "今日", Attributes::empty());
        system.add_lookup_prefix("き", "き", "木", Attributes::empty());
        let user = MockDictionary::new();
        user.add_lookup_prefix("きょう", "きょう", "京", Attributes::USER_DICTIONARY);

        let composite = CompositeDictionary::new().with(Arc::new(system)).with(Arc::new(user));
        let mut alloc = CandidateAllocator::new();
        let chain = composite.lookup_prefix("きょう", &mut alloc);

        assert_eq!(surfaces(&alloc, chain), vec!["京", "今日", "木"]);
        assert!(
            alloc
                .candidates(chain)
                .iter()
                .any(|c| c.matches("きょう", "京", Attributes::USER_DICTIONARY))
        );
    }

    #[test]
    fn empty_children_contribute_nothing() {
        let hit = MockDictionary::new();
        hit.add_lookup_reverse("今", "いま", "今", Attributes::empty());
        let composite = CompositeDictionary::new()
            .with(Arc::new(MockDictionary::new()))
            .with(Arc::new(hit))
            .with(Arc::new(MockDictionary::new()));

        let mut alloc = CandidateAllocator::new();
        let chain = composite.lookup_reverse("今", &mut alloc);
        assert_eq!(surfaces(&alloc, chain), vec!["今"]);

        let chain = composite.lookup_predictive("今", &mut alloc);
        assert!(chain.is_empty());
    }

    #[test]
    fn chain_excludes_earlier_allocations() {
        let child = MockDictionary::new();
        child.add_lookup_predictive("は", "はな", "花", Attributes::empty());
        let composite = CompositeDictionary::new().with(Arc::new(child));

        let mut alloc = CandidateAllocator::new();
        let first = composite.lookup_predictive("は", &mut alloc);
        let second = composite.lookup_predictive("は", &mut alloc);
        assert_eq!(first.len(), 1);
        assert_eq!(second.len(), 1);
        assert_eq!(alloc.len(), 2);
    }

    #[test]
    fn no_children_yields_empty_chain() {
        let mut alloc = CandidateAllocator::new();
        assert!(CompositeDictionary::new().lookup_prefix("あ", &mut alloc).is_empty());
    }
}
