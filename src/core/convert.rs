use anyhow::Result;

/// Conversion from a dense index (array slot, protocol number) into a value
pub trait FromIndex: Sized {
    fn from_index(idx: usize) -> Result<Self>;
}
