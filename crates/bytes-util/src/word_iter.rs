use std::{marker::PhantomData, slice::ChunksExact};

use crate::LeWord;

/// Iterator over the full little-endian words of a buffer. The trailing bytes
/// that do not fill a word are available through [`Words::tail`].
#[derive(Debug, Clone)]
pub struct Words<'a, W> {
    chunks: ChunksExact<'a, u8>,
    _word: PhantomData<W>,
}

pub fn words<W: LeWord>(data: &[u8]) -> Words<'_, W> {
    Words {
        chunks: data.chunks_exact(W::WIDTH),
        _word: PhantomData,
    }
}

impl<'a, W: LeWord> Words<'a, W> {
    /// Bytes after the last full word, `0..W::WIDTH` of them.
    #[inline]
    pub fn tail(&self) -> &'a [u8] {
        self.chunks.remainder()
    }

    /// The tail folded into a single word, or `None` when the buffer length is
    /// a multiple of the word width.
    #[inline]
    pub fn tail_word(&self) -> Option<W> {
        let tail = self.tail();
        (!tail.is_empty()).then(|| W::from_tail(tail))
    }
}

impl<W: LeWord> Iterator for Words<'_, W> {
    type Item = W;

    #[inline]
    fn next(&mut self) -> Option<W> {
        self.chunks.next().map(W::from_le_chunk)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl<W: LeWord> ExactSizeIterator for Words<'_, W> {}
