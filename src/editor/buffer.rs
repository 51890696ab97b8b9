use std::fmt;
use std::io::{self, Read, Write};
use std::sync::Arc;

use crate::input::keys::LF;

/// A single line of the buffer: an immutable, shareable run of bytes.
///
/// Rows carry no terminator and no encoding. Cloning a row only bumps a
/// reference count, which is what lets untouched rows be shared between
/// the buffer before and after an edit.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Row(Arc<[u8]>);

impl Row {
    /// An empty row.
    pub fn empty() -> Self {
        Self(Arc::from(&[][..]))
    }

    /// The row's bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Length of the row in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the row has no bytes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl From<Vec<u8>> for Row {
    fn from(bytes: Vec<u8>) -> Self {
        Self(Arc::from(bytes))
    }
}

impl From<&[u8]> for Row {
    fn from(bytes: &[u8]) -> Self {
        Self(Arc::from(bytes))
    }
}

impl fmt::Debug for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", String::from_utf8_lossy(&self.0))
    }
}

/// An ordered sequence of byte rows.
///
/// Every editing operation borrows the buffer and returns a new one; the
/// receiver is never modified. Rows the edit does not touch are shared
/// with the returned buffer rather than copied, so an edit costs one
/// pointer per row plus the bytes of the rows it rewrites.
///
/// Row and column arguments are byte offsets. Out-of-range arguments are
/// handled by fixed no-op or append policies and never panic.
///
/// # Example
///
/// ```
/// use tined::editor::LineBuffer;
///
/// let before = LineBuffer::from_bytes(b"abcd");
/// let after = before.move_after_to_new_row(0, 2);
/// assert_eq!(after.to_bytes(), b"ab\ncd");
/// assert_eq!(before.to_bytes(), b"abcd");
/// ```
#[derive(Clone, Default, PartialEq, Eq)]
pub struct LineBuffer {
    rows: Vec<Row>,
}

impl LineBuffer {
    /// Create a buffer with no rows.
    pub const fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Create a buffer holding one empty row.
    pub fn single_empty_row() -> Self {
        Self {
            rows: vec![Row::empty()],
        }
    }

    /// Create a buffer from an ordered collection of rows.
    pub fn from_rows<I, R>(rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[u8]>,
    {
        Self {
            rows: rows.into_iter().map(|row| Row::from(row.as_ref())).collect(),
        }
    }

    /// Split a byte stream into rows on line-feed bytes.
    ///
    /// The delimiter is discarded. Trailing bytes after the last line feed
    /// form the final row, and a trailing line feed yields a final empty
    /// row, so [`to_bytes`](Self::to_bytes) reproduces `bytes` exactly.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::from_rows(bytes.split(|&b| b == LF))
    }

    /// Read a byte stream to its end and split it into rows.
    ///
    /// # Errors
    ///
    /// Returns any error the reader reports other than end-of-stream.
    pub fn from_reader<R: Read>(mut reader: R) -> io::Result<Self> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Ok(Self::from_bytes(&bytes))
    }

    /// Join the rows with line-feed bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.rows.iter().map(|r| r.len() + 1).sum());
        for (idx, row) in self.rows.iter().enumerate() {
            if idx > 0 {
                out.push(LF);
            }
            out.extend_from_slice(row.as_bytes());
        }
        out
    }

    /// Write the rows joined with line-feed bytes.
    ///
    /// # Errors
    ///
    /// Returns any error the writer reports.
    pub fn write_to<W: Write>(&self, mut writer: W) -> io::Result<()> {
        for (idx, row) in self.rows.iter().enumerate() {
            if idx > 0 {
                writer.write_all(&[LF])?;
            }
            writer.write_all(row.as_bytes())?;
        }
        writer.flush()
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the buffer has no rows at all.
    ///
    /// A buffer holding one empty row is not empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The bytes of a row, if it exists.
    pub fn row(&self, row: usize) -> Option<&[u8]> {
        self.rows.get(row).map(Row::as_bytes)
    }

    /// Iterate over the rows in order.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.rows.iter().map(Row::as_bytes)
    }

    /// Length of a row in bytes; 0 for a row that does not exist.
    pub fn row_len(&self, row: usize) -> usize {
        self.rows.get(row).map_or(0, Row::len)
    }

    /// Whether `other` holds the very same row allocations as `self`.
    ///
    /// True exactly when one buffer was returned unchanged from an
    /// operation on the other; cheaper than comparing contents.
    pub fn is_same_as(&self, other: &Self) -> bool {
        self.rows.len() == other.rows.len()
            && self.rows.iter().zip(&other.rows).all(|(a, b)| a.ptr_eq(b))
    }

    /// Insert an empty row before index `row`, or append one if `row` is
    /// past the end.
    pub fn insert_row_at(&self, row: usize) -> Self {
        let mut rows = self.rows.clone();
        rows.insert(row.min(rows.len()), Row::empty());
        Self { rows }
    }

    /// Insert `byte` into row `row` at offset `col`.
    ///
    /// A column at or past the row end appends. On a buffer with no rows
    /// the position is ignored and the result is a single one-byte row.
    /// A missing row leaves the buffer unchanged.
    pub fn insert_character_at(&self, row: usize, col: usize, byte: u8) -> Self {
        if self.rows.is_empty() {
            return Self {
                rows: vec![Row::from(vec![byte])],
            };
        }
        let Some(current) = self.row(row) else {
            return self.clone();
        };
        let col = col.min(current.len());
        let mut bytes = Vec::with_capacity(current.len() + 1);
        bytes.extend_from_slice(&current[..col]);
        bytes.push(byte);
        bytes.extend_from_slice(&current[col..]);
        self.with_row(row, bytes)
    }

    /// Remove row `row`, shifting later rows up. Missing rows are a no-op.
    pub fn remove_row_at(&self, row: usize) -> Self {
        if row >= self.rows.len() {
            return self.clone();
        }
        let mut rows = self.rows.clone();
        rows.remove(row);
        Self { rows }
    }

    /// Remove the byte at offset `col` of row `row`.
    ///
    /// An empty row, a column past the row end, or a missing row leaves
    /// the buffer unchanged.
    pub fn remove_character_at(&self, row: usize, col: usize) -> Self {
        let Some(current) = self.row(row) else {
            return self.clone();
        };
        if col >= current.len() {
            return self.clone();
        }
        let mut bytes = Vec::with_capacity(current.len() - 1);
        bytes.extend_from_slice(&current[..col]);
        bytes.extend_from_slice(&current[col + 1..]);
        self.with_row(row, bytes)
    }

    /// Truncate row `row` to its first `col` bytes.
    pub fn trim_row_at(&self, row: usize, col: usize) -> Self {
        let Some(current) = self.row(row) else {
            return self.clone();
        };
        if col >= current.len() {
            return self.clone();
        }
        self.with_row(row, current[..col].to_vec())
    }

    /// Split row `row` at `col`: `[0, col)` stays, `[col, end)` becomes a
    /// new row right after it. Past the last row, appends an empty row.
    pub fn move_after_to_new_row(&self, row: usize, col: usize) -> Self {
        let Some(current) = self.row(row) else {
            return self.insert_row_at(self.rows.len());
        };
        let col = col.min(current.len());
        let (head, tail) = current.split_at(col);
        let tail = Row::from(tail);
        let mut rows = self.rows.clone();
        rows[row] = Row::from(head);
        rows.insert(row + 1, tail);
        Self { rows }
    }

    /// Append row `row` onto the end of row `row - 1` and remove it.
    ///
    /// No-op for row 0 or a missing row.
    pub fn join_with_previous(&self, row: usize) -> Self {
        if row == 0 || row >= self.rows.len() {
            return self.clone();
        }
        let previous = self.rows[row - 1].as_bytes();
        let current = self.rows[row].as_bytes();
        let mut joined = Vec::with_capacity(previous.len() + current.len());
        joined.extend_from_slice(previous);
        joined.extend_from_slice(current);
        let mut rows = self.rows.clone();
        rows[row - 1] = Row::from(joined);
        rows.remove(row);
        Self { rows }
    }

    fn with_row(&self, row: usize, bytes: Vec<u8>) -> Self {
        let mut rows = self.rows.clone();
        rows[row] = Row::from(bytes);
        Self { rows }
    }
}

impl fmt::Debug for LineBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.rows).finish()
    }
}
