use std::hash::Hash;
use std::ops::Index;

use bimap::BiHashMap;

/// A list of distinct elements, each assigned an ordinal in insertion order.
/// Ordinals are stable: once assigned they are never changed or reused.
#[derive(Clone, Debug)]
pub struct IndexList<E>
where E: Eq + Hash {
    data: BiHashMap<usize, E>
}

impl<E> IndexList<E>
where E: Eq + Hash {
    pub fn new() -> Self {
        Self { data: BiHashMap::new() }
    }

    pub fn len(&self) -> usize { 
        self.data.len()
    }

    pub fn is_empty(&self) -> bool { 
        self.data.is_empty()
    }

    /// Appends `x` unless it is already present.
    /// Returns the index of `x` and whether it was newly added.
    pub fn push(&mut self, x: E) -> (usize, bool) { 
        if let Some(i) = self.index_of(&x) { 
            return (i, false)
        }
        let i = self.len();
        self.data.insert(i, x);
        (i, true)
    }

    pub fn index_of(&self, x: &E) -> Option<usize> {
        self.data.get_by_right(x).cloned()
    }

    pub fn contains(&self, x: &E) -> bool { 
        self.data.contains_right(x)
    }

    pub fn get(&self, i: usize) -> Option<&E> { 
        self.data.get_by_left(&i)
    }

    pub fn iter(&self) -> impl Iterator<Item = &E> { 
        let n = self.len();
        (0..n).filter_map(|i| 
            self.data.get_by_left(&i)
        )
    }
}

impl<E> Default for IndexList<E>
where E: Eq + Hash {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> FromIterator<E> for IndexList<E>
where E: Eq + Hash {
    fn from_iter<T: IntoIterator<Item = E>>(iter: T) -> Self {
        let mut list = Self::new();
        for x in iter { 
            list.push(x);
        }
        list
    }
}

impl<E> Index<usize> for IndexList<E>
where E: Eq + Hash {
    type Output = E;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index).unwrap_or_else(|| 
            panic!("index {index} out of range (len = {}).", self.len())
        )
    }
}

#[cfg(test)]
mod tests { 
    use super::*;

    #[test]
    fn test() {
        let list = IndexList::from_iter([3,7,4,5,1]);
        assert_eq!(list[0], 3);
        assert_eq!(list[4], 1);
        assert_eq!(list.index_of(&3), Some(0));
        assert_eq!(list.index_of(&4), Some(2));
        assert_eq!(list.index_of(&2), None);
        assert_eq!(list.get(5), None);
    }

    #[test]
    fn push() { 
        let mut list = IndexList::new();
        assert_eq!(list.push('a'), (0, true));
        assert_eq!(list.push('b'), (1, true));
        assert_eq!(list.push('a'), (0, false));
        assert_eq!(list.push('c'), (2, true));
        assert_eq!(list.len(), 3);
        assert_eq!(list.iter().collect::<String>(), "abc");
    }

    #[test]
    fn from_iter_dedup() { 
        let list = IndexList::from_iter([1, 2, 1, 3, 2]);
        assert_eq!(list.len(), 3);
        assert_eq!(list.index_of(&3), Some(2));
    }
}
