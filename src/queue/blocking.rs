//! Mutex + condvar blocking queue with runtime-adjustable capacity.

use super::{QueueError, QueueResult};
use parking_lot::{Condvar, Mutex};
use std::collections::VecDeque;

/// Internal sentinel for "no capacity bound".
const UNBOUNDED: usize = usize::MAX;

/// Buffer, capacity bound and closed flag live under a single lock.
struct State<T> {
    items: VecDeque<T>,
    capacity: usize,
    closed: bool,
}

/// A bounded FIFO queue with blocking and non-blocking operations.
///
/// One mutex guards the buffer, the capacity bound and the closed flag; two
/// condition variables signal the "not empty" and "not full" transitions.
/// The capacity can be changed at runtime and the queue can be closed, which
/// wakes every blocked producer and consumer.
///
/// Closing is one-way: once closed, pushes fail immediately, while items
/// buffered before the close remain poppable until drained. A blocking
/// [`pop`](Self::pop) returns [`QueueError::Disconnected`] only once the
/// queue is both closed and empty, which is the end-of-stream signal.
///
/// # Example
///
/// ```rust
/// use message_thread_system::queue::{BlockingQueue, QueueError};
/// use std::sync::Arc;
/// use std::thread;
///
/// let queue = Arc::new(BlockingQueue::bounded(8));
///
/// let q = Arc::clone(&queue);
/// let consumer = thread::spawn(move || {
///     let mut received = Vec::new();
///     while let Ok(item) = q.pop() {
///         received.push(item);
///     }
///     received
/// });
///
/// for i in 0..20 {
///     queue.push(i).unwrap();
/// }
/// queue.close();
///
/// assert_eq!(consumer.join().unwrap(), (0..20).collect::<Vec<_>>());
/// ```
pub struct BlockingQueue<T> {
    state: Mutex<State<T>>,
    not_empty: Condvar,
    not_full: Condvar,
}

impl<T> BlockingQueue<T> {
    /// Creates a new queue with no capacity bound.
    pub fn new() -> Self {
        Self::with_capacity(UNBOUNDED)
    }

    /// Creates a new queue bounded to `capacity` items.
    ///
    /// A `capacity` of `0` means unbounded, matching
    /// [`set_capacity`](Self::set_capacity).
    pub fn bounded(capacity: usize) -> Self {
        Self::with_capacity(if capacity == 0 { UNBOUNDED } else { capacity })
    }

    fn with_capacity(capacity: usize) -> Self {
        Self {
            state: Mutex::new(State {
                items: VecDeque::new(),
                capacity,
                closed: false,
            }),
            not_empty: Condvar::new(),
            not_full: Condvar::new(),
        }
    }

    /// Sets the capacity bound, `0` meaning unbounded.
    ///
    /// Producers blocked on a full queue are woken so they can re-check
    /// against the new bound. Lowering the capacity below the current length
    /// never evicts buffered items; the excess drains naturally.
    pub fn set_capacity(&self, capacity: usize) {
        {
            let mut state = self.state.lock();
            state.capacity = if capacity == 0 { UNBOUNDED } else { capacity };
        }
        self.not_full.notify_all();
    }

    /// Returns the capacity bound, or `None` if the queue is unbounded.
    pub fn capacity(&self) -> Option<usize> {
        let state = self.state.lock();
        match state.capacity {
            UNBOUNDED => None,
            capacity => Some(capacity),
        }
    }

    /// Closes the queue, waking every blocked producer and consumer.
    ///
    /// Idempotent. Pushes fail from this point on; buffered items remain
    /// poppable until drained.
    pub fn close(&self) {
        {
            let mut state = self.state.lock();
            state.closed = true;
        }
        self.not_empty.notify_all();
        self.not_full.notify_all();
    }

    /// Returns `true` if the queue has been closed.
    pub fn is_closed(&self) -> bool {
        self.state.lock().closed
    }

    /// Pushes a value, blocking while the queue is full.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::Closed`] with the value handed back if the queue
    /// is closed, including when the close happens while this call is blocked
    /// waiting for space.
    pub fn push(&self, value: T) -> QueueResult<(), T> {
        let mut state = self.state.lock();
        while !state.closed && state.items.len() >= state.capacity {
            self.not_full.wait(&mut state);
        }
        if state.closed {
            return Err(QueueError::Closed(value));
        }
        state.items.push_back(value);
        drop(state);
        self.not_empty.notify_one();
        Ok(())
    }

    /// Pushes a value without blocking.
    ///
    /// # Errors
    ///
    /// - [`QueueError::Closed`] if the queue is closed
    /// - [`QueueError::Full`] if the queue is at capacity
    ///
    /// Both variants return the value to the caller.
    pub fn try_push(&self, value: T) -> QueueResult<(), T> {
        let mut state = self.state.lock();
        if state.closed {
            return Err(QueueError::Closed(value));
        }
        if state.items.len() >= state.capacity {
            return Err(QueueError::Full(value));
        }
        state.items.push_back(value);
        drop(state);
        self.not_empty.notify_one();
        Ok(())
    }

    /// Pops the front value, blocking while the queue is empty and open.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::Disconnected`] once the queue is closed and
    /// drained. Items buffered before the close are still returned in order.
    pub fn pop(&self) -> QueueResult<T, T> {
        let mut state = self.state.lock();
        while !state.closed && state.items.is_empty() {
            self.not_empty.wait(&mut state);
        }
        match state.items.pop_front() {
            Some(value) => {
                drop(state);
                self.not_full.notify_one();
                Ok(value)
            }
            None => Err(QueueError::Disconnected),
        }
    }

    /// Pops the front value without blocking.
    ///
    /// # Errors
    ///
    /// - [`QueueError::Empty`] if the queue is empty but still open
    /// - [`QueueError::Disconnected`] if the queue is closed and drained
    pub fn try_pop(&self) -> QueueResult<T, T> {
        let mut state = self.state.lock();
        match state.items.pop_front() {
            Some(value) => {
                drop(state);
                self.not_full.notify_one();
                Ok(value)
            }
            None if state.closed => Err(QueueError::Disconnected),
            None => Err(QueueError::Empty),
        }
    }

    /// Applies `f` to the front value under the lock, blocking while the
    /// queue is empty and open.
    ///
    /// The closure runs inside the critical section, so the observed element
    /// cannot be popped concurrently while `f` executes.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::Disconnected`] once the queue is closed and
    /// drained.
    pub fn peek_with<R>(&self, f: impl FnOnce(&T) -> R) -> QueueResult<R, T> {
        let mut state = self.state.lock();
        while !state.closed && state.items.is_empty() {
            self.not_empty.wait(&mut state);
        }
        match state.items.front() {
            Some(item) => Ok(f(item)),
            None => Err(QueueError::Disconnected),
        }
    }

    /// Mutable variant of [`peek_with`](Self::peek_with): applies `f` to the
    /// front value in place, blocking while the queue is empty and open.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::Disconnected`] once the queue is closed and
    /// drained.
    pub fn peek_with_mut<R>(&self, f: impl FnOnce(&mut T) -> R) -> QueueResult<R, T> {
        let mut state = self.state.lock();
        while !state.closed && state.items.is_empty() {
            self.not_empty.wait(&mut state);
        }
        match state.items.front_mut() {
            Some(item) => Ok(f(item)),
            None => Err(QueueError::Disconnected),
        }
    }

    /// Returns the current number of buffered items.
    pub fn len(&self) -> usize {
        self.state.lock().items.len()
    }

    /// Returns `true` if the queue holds no items.
    pub fn is_empty(&self) -> bool {
        self.state.lock().items.is_empty()
    }
}

impl<T> Default for BlockingQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
