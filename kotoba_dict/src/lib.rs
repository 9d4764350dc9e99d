//! `kotoba_dict`：具体的词典索引。
//!
//! - `SystemDictionary`：只读，加载后不再变化，可无锁并发查询
//! - `UserDictionary`：可追加，内部读写锁（单写多读）
//! - 两者都是 reading trie + surface trie；反查按 surface 前缀匹配（与前缀查询同一关系）
mod index;
pub mod system;
pub mod trie;
pub mod tsv;
pub mod user;

pub use system::{SystemDictionary, SystemDictionaryBuilder};
pub use user::UserDictionary;
