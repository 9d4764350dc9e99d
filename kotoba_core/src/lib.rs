//! `kotoba_core`：词典查询的纯逻辑层（不做文件 I/O）。
//!
//! 组成：
//! - **model**：词条 `Entry` 与候选 `Candidate`
//! - **allocator**：一次查询内候选的内存池，结果以 `CandidateChain` 句柄返回
//! - **dictionary**：三种查询关系（前缀 / 预测 / 反查）的抽象
//! - **composite / mock**：组合词典与可编程测试替身
//! - **registry**：当前生效词典的唯一入口
//!
//! 具体索引（trie、系统词典、用户词典）在 `kotoba_dict`。
pub mod allocator;
pub mod composite;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod mock;
pub mod model;
pub mod registry;

pub use allocator::{CandidateAllocator, CandidateChain, Mark};
pub use composite::CompositeDictionary;
pub use dictionary::{Dictionary, Relation};
pub use error::{Error, Result};
pub use model::{Attributes, Candidate, Entry};
pub use registry::DictionaryRegistry;
