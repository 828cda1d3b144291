/// Tiny on-stack set of up to 4 group ids, one for each side of a tile.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct StackVec4 {
    values: [u16; 4],
}

impl StackVec4 {
    pub fn new() -> Self {
        StackVec4 { values: [u16::MAX; 4] }
    }

    pub fn is_empty(&self) -> bool {
        self.values == [u16::MAX; 4]
    }

    pub fn len(&self) -> usize {
        self.values.iter().filter(|&&x| x != u16::MAX).count()
    }

    pub fn contains(&self, value: u16) -> bool {
        debug_assert_ne!(value, u16::MAX);
        self.values.contains(&value)
    }

    /// Push a value if it's not yet present.
    pub fn insert(&mut self, value: u16) {
        debug_assert_ne!(value, u16::MAX);
        if self.contains(value) {
            return;
        }
        let slot = self
            .values
            .iter_mut()
            .find(|v| **v == u16::MAX)
            .expect("StackVec4 can hold at most 4 values");
        *slot = value;
    }

    pub fn iter(&self) -> impl Iterator<Item = u16> + '_ {
        self.values.iter().copied().filter(|&v| v != u16::MAX)
    }
}
