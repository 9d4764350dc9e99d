use bitflags::bitflags;

bitflags! {
    /// 词条属性位。core 只负责存储与原样复制，含义由转换层决定。
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Attributes: u32 {
        /// 拼写纠错词条
        const SPELLING_CORRECTION = 1 << 0;
        /// 用户词典添加的词条
        const USER_DICTIONARY = 1 << 1;
        /// 最优候选标记
        const BEST_CANDIDATE = 1 << 2;
        const NO_VARIANTS_EXPANSION = 1 << 3;
    }
}

/// 词典词条：一个 (reading, surface) 对以及转换层需要的元数据。
///
/// 注意：
/// - 词条写入索引后不可变，生命周期与所属索引一致
/// - 故意不实现 `PartialEq`：字段完全相同的两个词条仍是两个词条，查询时各自产生候选
#[derive(Debug, Clone)]
pub struct Entry {
    /// 读音（查询 key，例如 "きょう"）
    pub reading: String,
    /// 表记（展示值，例如 "今日"）
    pub surface: String,
    /// 代价（越小越可能），core 不解释
    pub cost: i32,
    /// 左连接 id
    pub lid: u16,
    /// 右连接 id
    pub rid: u16,
    pub attributes: Attributes,
}

impl Entry {
    pub fn new(reading: impl Into<String>, surface: impl Into<String>) -> Self {
        Self {
            reading: reading.into(),
            surface: surface.into(),
            cost: 0,
            lid: 0,
            rid: 0,
            attributes: Attributes::empty(),
        }
    }

    pub fn cost(mut self, cost: i32) -> Self {
        self.cost = cost;
        self
    }

    pub fn context_ids(mut self, lid: u16, rid: u16) -> Self {
        self.lid = lid;
        self.rid = rid;
        self
    }

    pub fn attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }
}

/// 候选：某次查询中一个命中词条的实例。
///
/// 由 `CandidateAllocator` 持有；创建后与来源 `Entry` 完全解耦（字段是拷贝）。
/// `Default` 即“零初始化”的候选。
#[derive(Debug, Clone, Default)]
pub struct Candidate {
    pub reading: String,
    pub surface: String,
    pub cost: i32,
    pub lid: u16,
    pub rid: u16,
    /// 从词条原样复制，不做重新解释
    pub attributes: Attributes,
}

impl Candidate {
    /// 用词条的全部字段覆盖当前候选。
    pub fn fill_from(&mut self, entry: &Entry) {
        self.reading.clone_from(&entry.reading);
        self.surface.clone_from(&entry.surface);
        self.cost = entry.cost;
        self.lid = entry.lid;
        self.rid = entry.rid;
        self.attributes = entry.attributes;
    }

    pub fn matches(&self, reading: &str, surface: &str, attributes: Attributes) -> bool {
        self.reading == reading && self.surface == surface && self.attributes == attributes
    }
}

impl From<&Entry> for Candidate {
    fn from(entry: &Entry) -> Self {
        let mut c = Candidate::default();
        c.fill_from(entry);
        c
    }
}
