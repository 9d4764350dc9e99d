//! `allocator`：一次查询（或一次转换过程）内所有候选的内存池。
//!
//! 约定：
//! - 分配器拥有它发出的全部 `Candidate`；`reset()` 一次性释放（按键一次、reset 一次）
//! - 查询结果不是链表，而是池内一段连续区间，用 `CandidateChain` 句柄表示
//! - `reset()` 之后旧的 `CandidateChain` 全部失效；再读取会 panic（`try_candidates` 返回错误）
//! - `Mark` 同样带 generation：拿 reset 之前的 mark 收链会 panic
use std::sync::atomic::{AtomicU32, Ordering};

use crate::{
    error::{Error, Result},
    model::{Candidate, Entry},
};

/// 候选链句柄：指向某个分配器池内的 `[start, end)` 区间。
///
/// 句柄本身不持有候选，只能通过产生它的分配器解析。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateChain {
    owner: u32,
    generation: u64,
    start: usize,
    end: usize,
}

impl CandidateChain {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// `mark()` 记下的位置，只在同一个 generation 内有效。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mark {
    generation: u64,
    pos: usize,
}

static NEXT_ALLOCATOR_ID: AtomicU32 = AtomicU32::new(1);

/// 候选分配器（arena）。
#[derive(Debug)]
pub struct CandidateAllocator {
    /// 分配器编号，用来拒绝别的分配器发出的候选链
    id: u32,
    pool: Vec<Candidate>,
    /// 每次 reset 自增，用来识别过期的候选链和 mark；u64 实际上不会回绕
    generation: u64,
    /// 候选数量硬上限；None 表示不限
    limit: Option<usize>,
}

impl Default for CandidateAllocator {
    fn default() -> Self {
        Self {
            id: NEXT_ALLOCATOR_ID.fetch_add(1, Ordering::Relaxed),
            pool: Vec::new(),
            generation: 0,
            limit: None,
        }
    }
}

impl CandidateAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// 预分配池容量（减少查询时扩容）。
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            pool: Vec::with_capacity(capacity),
            ..Self::default()
        }
    }

    /// 设置候选数量硬上限；超出即视为资源耗尽（panic）。
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn len(&self) -> usize {
        self.pool.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pool.is_empty()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// 发出一个零初始化的新候选；每次调用都是不同的槽位。
    ///
    /// # Panics
    /// 超过 `with_limit` 设定的上限时 panic：拿不到候选的查询无法继续。
    pub fn new_candidate(&mut self) -> &mut Candidate {
        if let Some(limit) = self.limit
            && self.pool.len() >= limit
        {
            panic!("候选分配器耗尽：已分配 {} 个（上限 {limit}）", self.pool.len());
        }
        self.pool.push(Candidate::default());
        let last = self.pool.len() - 1;
        &mut self.pool[last]
    }

    /// 为词条分配一个候选并拷贝字段。
    pub fn push_entry(&mut self, entry: &Entry) {
        self.new_candidate().fill_from(entry);
    }

    /// 记录当前位置；配合 `chain_since` 把之后分配的候选收成一条链。
    pub fn mark(&self) -> Mark {
        Mark {
            generation: self.generation,
            pos: self.pool.len(),
        }
    }

    /// 把 `mark` 之后分配的所有候选收成一条链（可能为空）。
    ///
    /// # Panics
    /// `mark` 取自 `reset()` 之前时 panic：那段区间已经不存在。
    pub fn chain_since(&self, mark: Mark) -> CandidateChain {
        if mark.generation != self.generation || mark.pos > self.pool.len() {
            panic!(
                "mark 来自 reset 之前：{mark:?}（当前 generation = {}）",
                self.generation
            );
        }
        CandidateChain {
            owner: self.id,
            generation: self.generation,
            start: mark.pos,
            end: self.pool.len(),
        }
    }

    /// 解析候选链。
    ///
    /// # Panics
    /// 候选链来自 `reset()` 之前或来自其他分配器时 panic。
    pub fn candidates(&self, chain: CandidateChain) -> &[Candidate] {
        match self.try_candidates(chain) {
            Ok(cands) => cands,
            Err(e) => panic!("{e}"),
        }
    }

    pub fn try_candidates(&self, chain: CandidateChain) -> Result<&[Candidate]> {
        if chain.owner != self.id || chain.generation != self.generation || chain.end > self.pool.len() {
            return Err(Error::StaleChain {
                chain,
                current: self.generation,
            });
        }
        Ok(&self.pool[chain.start..chain.end])
    }

    /// 批量释放所有候选；之前发出的候选链全部失效。
    pub fn reset(&mut self) {
        self.pool.clear();
        self.generation += 1;
    }
}
