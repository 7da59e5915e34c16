use serde::Serialize;

use crate::types::{KeyNode, Node, ParentNode};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Black,
}

impl Color {
    /// One-letter tag used in level listings.
    pub fn suffix(self) -> char {
        match self {
            Color::Red => 'R',
            Color::Black => 'B',
        }
    }
}

#[derive(Clone, Debug)]
pub struct RbNode<K> {
    pub p: Option<u32>,
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub k: K,
    pub color: Color,
}

impl<K> RbNode<K> {
    /// New nodes start red.
    pub fn new(k: K) -> Self {
        Self {
            p: None,
            l: None,
            r: None,
            k,
            color: Color::Red,
        }
    }
}

impl<K> Node for RbNode<K> {
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

impl<K> ParentNode for RbNode<K> {
    fn p(&self) -> Option<u32> {
        self.p
    }

    fn set_p(&mut self, v: Option<u32>) {
        self.p = v;
    }
}

impl<K> KeyNode<K> for RbNode<K> {
    fn key(&self) -> &K {
        &self.k
    }

    fn set_key(&mut self, key: K) {
        self.k = key;
    }
}

/// Red-black specific node behavior.
pub trait RbNodeLike<K>: KeyNode<K> + ParentNode {
    fn color(&self) -> Color;
    fn set_color(&mut self, color: Color);
}

impl<K> RbNodeLike<K> for RbNode<K> {
    fn color(&self) -> Color {
        self.color
    }

    fn set_color(&mut self, color: Color) {
        self.color = color;
    }
}
