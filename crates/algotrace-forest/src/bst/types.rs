use crate::types::{KeyNode, Node};

#[derive(Clone, Debug)]
pub struct BstNode<K> {
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub k: K,
}

impl<K> BstNode<K> {
    pub fn new(k: K) -> Self {
        Self { l: None, r: None, k }
    }
}

impl<K> Node for BstNode<K> {
    fn l(&self) -> Option<u32> {
        self.l
    }

    fn r(&self) -> Option<u32> {
        self.r
    }

    fn set_l(&mut self, v: Option<u32>) {
        self.l = v;
    }

    fn set_r(&mut self, v: Option<u32>) {
        self.r = v;
    }
}

impl<K> KeyNode<K> for BstNode<K> {
    fn key(&self) -> &K {
        &self.k
    }

    fn set_key(&mut self, key: K) {
        self.k = key;
    }
}
