/// Minimum capacity of a freshly created buffer.
const MIN_CAPACITY: usize = 16;

/// Growable byte buffer with amortized-doubling growth.
///
/// Used to hold request bodies and to serialize responses. Growth policy:
/// when an append would exceed capacity, the new capacity is
/// `max(old_capacity * 2, new_length)`, which makes repeated appends
/// amortized O(1). Capacity never shrinks.
#[derive(Debug)]
pub struct GrowableBuffer {
    data: Vec<u8>,
}

impl GrowableBuffer {
    /// Creates an empty buffer with capacity at least `max(16, hint)`.
    pub fn with_capacity(hint: usize) -> Self {
        Self {
            data: Vec::with_capacity(hint.max(MIN_CAPACITY)),
        }
    }

    /// Creates a buffer seeded with a copy of `seed`.
    pub fn from_str(hint: usize, seed: &str) -> Self {
        let mut buf = Self::with_capacity(hint.max(seed.len()));
        buf.append(seed.as_bytes());
        buf
    }

    /// Appends `bytes` to the end, growing storage if needed.
    pub fn append(&mut self, bytes: &[u8]) {
        let needed = self.data.len() + bytes.len();
        if needed > self.data.capacity() {
            let new_capacity = needed.max(self.data.capacity() * 2);
            self.data.reserve_exact(new_capacity - self.data.len());
        }
        self.data.extend_from_slice(bytes);
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }
}
