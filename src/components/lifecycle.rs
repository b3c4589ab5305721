use std::cell::Cell;
use std::rc::Rc;

/// Shared "still mounted" flag handed to browser callbacks.
///
/// A component creates one in its mount effect, clones it into every closure it
/// registers with the browser, and calls [`Liveness::end`] from the effect's
/// destructor. Callbacks that fire late check the flag and drop their update.
#[derive(Clone, Debug)]
pub struct Liveness(Rc<Cell<bool>>);

impl Liveness {
    pub fn new() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    pub fn is_alive(&self) -> bool {
        self.0.get()
    }

    pub fn end(&self) {
        self.0.set(false);
    }

    /// Runs `f` only while the owner is mounted.
    pub fn guard<T>(&self, f: impl FnOnce() -> T) -> Option<T> {
        if self.is_alive() {
            Some(f())
        } else {
            None
        }
    }
}

impl Default for Liveness {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_flag() {
        let owner = Liveness::new();
        let callback_copy = owner.clone();
        assert!(callback_copy.is_alive());

        owner.end();
        assert!(!callback_copy.is_alive());
    }

    #[test]
    fn guard_skips_work_after_end() {
        let alive = Liveness::new();
        assert_eq!(alive.guard(|| 7), Some(7));

        alive.end();
        let mut ran = false;
        assert_eq!(alive.guard(|| ran = true), None);
        assert!(!ran);
    }
}
