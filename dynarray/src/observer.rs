//! Operation tracing through an injected observer.
//!
//! An array without an observer does no tracing work beyond an `Option`
//! check. Copies of an observed array report to the same observer.

use alloc::vec::Vec;
use core::cell::RefCell;

/// One traced operation of a `DynamicArray`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A buffer of `capacity` slots was allocated (never emitted for 0)
    Allocated {
        /// Slot count of the new buffer
        capacity: usize,
    },
    /// A buffer of `capacity` slots was released (never emitted for 0)
    Released {
        /// Slot count of the released buffer
        capacity: usize,
    },
    /// A size-tight copy of `len` elements was constructed
    Cloned {
        /// Number of elements copied
        len: usize,
    },
    /// An existing array was overwritten with a copy of `len` elements
    Assigned {
        /// Number of elements copied
        len: usize,
    },
    /// `reserve` was called; `reallocated` is false for the no-op fast path
    Reserved {
        /// Capacity passed to `reserve`
        requested: usize,
        /// Whether a reallocation happened
        reallocated: bool,
    },
    /// Bounds-checked element access
    Accessed {
        /// Index that was accessed
        index: usize,
    },
}

#[cfg(feature = "display")]
impl core::fmt::Display for Event {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Event::Allocated { capacity } => write!(f, "alloc: {capacity} slots"),
            Event::Released { capacity } => write!(f, "release: {capacity} slots"),
            Event::Cloned { len } => write!(f, "copy: {len} elements"),
            Event::Assigned { len } => write!(f, "copy-assign: {len} elements"),
            Event::Reserved {
                requested,
                reallocated,
            } => {
                write!(f, "reserve({requested}): ")?;
                if *reallocated {
                    write!(f, "reallocated")
                } else {
                    write!(f, "no-op")
                }
            }
            Event::Accessed { index } => write!(f, "index: [{index}]"),
        }
    }
}

/// Receiver of `Event`s.
///
/// Takes `&self` because one observer is shared by an array and all of
/// its copies; implementations use interior mutability.
pub trait Observer {
    fn notify(&self, event: &Event);
}

/// Records every event in memory.
#[derive(Debug, Default)]
pub struct EventLog {
    events: RefCell<Vec<Event>>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of the recorded events, oldest first.
    #[must_use]
    pub fn events(&self) -> Vec<Event> {
        self.events.borrow().clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    /// Number of `Allocated` events seen so far.
    #[must_use]
    pub fn allocations(&self) -> usize {
        self.count(|event| matches!(event, Event::Allocated { .. }))
    }

    /// Number of `Released` events seen so far.
    #[must_use]
    pub fn releases(&self) -> usize {
        self.count(|event| matches!(event, Event::Released { .. }))
    }

    /// Number of reallocating `reserve` calls seen so far.
    #[must_use]
    pub fn reallocations(&self) -> usize {
        self.count(|event| matches!(event, Event::Reserved { reallocated: true, .. }))
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }

    fn count(&self, predicate: impl Fn(&Event) -> bool) -> usize {
        self.events.borrow().iter().filter(|e| predicate(e)).count()
    }
}

impl Observer for EventLog {
    fn notify(&self, event: &Event) {
        self.events.borrow_mut().push(*event);
    }
}

/// Prints every event to stdout, one per line.
#[cfg(feature = "std")]
#[derive(Debug, Default, Clone, Copy)]
pub struct PrintObserver;

#[cfg(feature = "std")]
impl Observer for PrintObserver {
    fn notify(&self, event: &Event) {
        std::println!("\t{event}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_log_counts() {
        let log = EventLog::new();
        assert!(log.is_empty());

        log.notify(&Event::Allocated { capacity: 5 });
        log.notify(&Event::Reserved {
            requested: 5,
            reallocated: true,
        });
        log.notify(&Event::Reserved {
            requested: 9,
            reallocated: false,
        });
        log.notify(&Event::Released { capacity: 5 });

        assert_eq!(log.len(), 4);
        assert_eq!(log.allocations(), 1);
        assert_eq!(log.releases(), 1);
        assert_eq!(log.reallocations(), 1);

        log.clear();
        assert!(log.is_empty());
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_print_observer_on_array() {
        use crate::DynamicArray;
        use alloc::rc::Rc;

        let mut array: DynamicArray<i32> = DynamicArray::with_observer(Rc::new(PrintObserver));
        array.push_back(1).unwrap();
        assert_eq!(array.len(), 1);
    }

    #[cfg(feature = "display")]
    #[test]
    fn test_event_display() {
        use alloc::string::ToString;

        assert_eq!(
            Event::Allocated { capacity: 3 }.to_string(),
            "alloc: 3 slots"
        );
        assert_eq!(
            Event::Reserved {
                requested: 8,
                reallocated: false
            }
            .to_string(),
            "reserve(8): no-op"
        );
    }
}
