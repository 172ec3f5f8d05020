/// Byte offset of the caret in the document a tree was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cursor {
    offset: usize,
}

impl Cursor {
    pub fn new(offset: usize) -> Self {
        Self { offset }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl From<usize> for Cursor {
    fn from(offset: usize) -> Self {
        Self::new(offset)
    }
}
