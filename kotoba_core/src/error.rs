//! 统一错误类型。
//!
//! 只有“可恢复”的情况走 `Result`：词典文件解析、配置读取、注册表未设置等。
//! 调用方违约（空查询、读取已失效的候选链、分配器耗尽）直接 panic。
use thiserror::Error;

use crate::allocator::CandidateChain;

#[derive(Error, Debug)]
pub enum Error {
    /// `DictionaryRegistry` 尚未安装词典
    #[error("词典未设置：请先调用 set_dictionary")]
    DictionaryUnset,
    /// 词条的 reading/surface 为空，无法写入索引
    #[error("词条字段 `{field}` 不能为空")]
    EmptyKey { field: &'static str },
    /// 候选链来自分配器 reset 之前
    #[error("候选链已失效：{chain:?}（当前 generation = {current}）")]
    StaleChain { chain: CandidateChain, current: u64 },
    /// 词典文本格式错误（行号从 1 开始）
    #[error("词典第 {line} 行：{message}")]
    Parse { line: usize, message: String },
    #[error("配置错误：{0}")]
    Config(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
