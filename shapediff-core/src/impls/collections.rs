use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::hash::BuildHasher;

use crate::{Node, Reflect};

impl<T: Reflect> Reflect for [T] {
    fn reflect(&self) -> Node<'_> {
        Node::list(self)
    }
}

impl<T: Reflect, const N: usize> Reflect for [T; N] {
    fn reflect(&self) -> Node<'_> {
        Node::list(self)
    }
}

impl<T: Reflect> Reflect for Vec<T> {
    fn reflect(&self) -> Node<'_> {
        Node::list(self)
    }
}

impl<T: Reflect> Reflect for VecDeque<T> {
    fn reflect(&self) -> Node<'_> {
        Node::list(self)
    }
}

impl<K: Reflect, V: Reflect> Reflect for BTreeMap<K, V> {
    fn reflect(&self) -> Node<'_> {
        Node::map(self)
    }
}

impl<K: Reflect, V: Reflect, S: BuildHasher> Reflect for HashMap<K, V, S> {
    fn reflect(&self) -> Node<'_> {
        Node::map(self).unordered()
    }
}

impl<T: Reflect> Reflect for BTreeSet<T> {
    fn reflect(&self) -> Node<'_> {
        Node::set(self)
    }
}

impl<T: Reflect, S: BuildHasher> Reflect for HashSet<T, S> {
    fn reflect(&self) -> Node<'_> {
        Node::set(self).unordered()
    }
}
