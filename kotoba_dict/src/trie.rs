//! 按字符建的 trie。节点放在一个 `Vec` 里（arena），子节点按字符排序、二分查找。
//!
//! 每个节点挂若干 payload（词条下标）；同一个 key 可以挂多个 payload。

#[derive(Debug, Clone, Default)]
struct Node {
    /// (字符, 子节点下标)，按字符升序
    children: Vec<(char, usize)>,
    /// 以该节点结尾的词条下标
    values: Vec<usize>,
}

#[derive(Debug, Clone)]
pub struct Trie {
    nodes: Vec<Node>,
}

impl Default for Trie {
    fn default() -> Self {
        Self {
            nodes: vec![Node::default()],
        }
    }
}

impl Trie {
    pub fn new() -> Self {
        Self::default()
    }

    /// 节点数（含根节点）。
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// 插入 `key -> value`。空 key 由调用方拒绝。
    pub fn insert(&mut self, key: &str, value: usize) {
        debug_assert!(!key.is_empty());
        let mut cur = 0;
        for ch in key.chars() {
            cur = self.child_or_insert(cur, ch);
        }
        self.nodes[cur].values.push(value);
    }

    /// 沿 `query` 从根往下走，每经过一个终结节点就回调它的全部 payload。
    ///
    /// 即：所有 key 为 `query` 非空前缀的 payload。
    pub fn common_prefix(&self, query: &str, mut f: impl FnMut(usize)) {
        let mut cur = 0;
        for ch in query.chars() {
            let Some(next) = self.child(cur, ch) else {
                return;
            };
            cur = next;
            for &v in &self.nodes[cur].values {
                f(v);
            }
        }
    }

    /// 走到 `prefix` 对应的节点，回调其子树（含自身）里的全部 payload。
    pub fn predictive(&self, prefix: &str, mut f: impl FnMut(usize)) {
        let Some(start) = self.find(prefix) else {
            return;
        };
        let mut stack = vec![start];
        while let Some(n) = stack.pop() {
            let node = &self.nodes[n];
            for &v in &node.values {
                f(v);
            }
            stack.extend(node.children.iter().map(|&(_, c)| c));
        }
    }

    fn find(&self, key: &str) -> Option<usize> {
        let mut cur = 0;
        for ch in key.chars() {
            cur = self.child(cur, ch)?;
        }
        Some(cur)
    }

    fn child(&self, node: usize, ch: char) -> Option<usize> {
        let children = &self.nodes[node].children;
        children
            .binary_search_by_key(&ch, |&(c, _)| c)
            .ok()
            .map(|i| children[i].1)
    }

    fn child_or_insert(&mut self, node: usize, ch: char) -> usize {
        match self.nodes[node].children.binary_search_by_key(&ch, |&(c, _)| c) {
            Ok(i) => self.nodes[node].children[i].1,
            Err(i) => {
                let id = self.nodes.len();
                self.nodes.push(Node::default());
                self.nodes[node].children.insert(i, (ch, id));
                id
            }
        }
    }
}
