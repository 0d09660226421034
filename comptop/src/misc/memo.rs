use std::cell::OnceCell;
use derive_more::Display;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Display)]
pub enum MemoState { 
    #[display("uncomputed")]
    Uncomputed,
    #[display("computed")]
    Computed,
    #[display("invalidated")]
    Invalidated
}

/// A lazily computed value that can be discarded by its owner.
/// 
/// Reads go through `&self`; discarding requires `&mut self`, 
/// so a value can never be dropped while a reference to it is alive.
#[derive(Debug)]
pub struct Memo<T> { 
    cell: OnceCell<T>,
    invalidated: bool
}

impl<T> Memo<T> { 
    pub fn new() -> Self { 
        Self { cell: OnceCell::new(), invalidated: false }
    }

    pub fn state(&self) -> MemoState { 
        if self.cell.get().is_some() { 
            MemoState::Computed
        } else if self.invalidated { 
            MemoState::Invalidated
        } else { 
            MemoState::Uncomputed
        }
    }

    pub fn is_computed(&self) -> bool { 
        self.state() == MemoState::Computed
    }

    pub fn get(&self) -> Option<&T> { 
        self.cell.get()
    }

    pub fn get_or_init<F>(&self, f: F) -> &T
    where F: FnOnce() -> T { 
        self.cell.get_or_init(f)
    }

    pub fn invalidate(&mut self) { 
        if self.cell.take().is_some() { 
            self.invalidated = true;
        }
    }
}

impl<T> Default for Memo<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests { 
    use std::cell::Cell;
    use super::*;

    #[test]
    fn compute_once() { 
        let count = Cell::new(0);
        let m = Memo::new();
        assert_eq!(m.state(), MemoState::Uncomputed);

        let a = *m.get_or_init(|| { count.set(count.get() + 1); 42 });
        let b = *m.get_or_init(|| { count.set(count.get() + 1); 0 });

        assert_eq!(a, 42);
        assert_eq!(b, 42);
        assert_eq!(count.get(), 1);
        assert_eq!(m.state(), MemoState::Computed);
    }

    #[test]
    fn invalidate() { 
        let mut m = Memo::new();
        m.invalidate();
        assert_eq!(m.state(), MemoState::Uncomputed);

        m.get_or_init(|| 1);
        m.invalidate();
        assert_eq!(m.state(), MemoState::Invalidated);
        assert_eq!(m.get(), None);

        assert_eq!(m.get_or_init(|| 2), &2);
        assert_eq!(m.state(), MemoState::Computed);
    }

    #[test]
    fn display_state() { 
        assert_eq!(MemoState::Invalidated.to_string(), "invalidated");
    }
}
