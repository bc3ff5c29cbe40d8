//! Append-only response body buffer.
//!
//! The client appends each body chunk as it arrives; callers read the
//! contents once the request has completed. There is no way to truncate or
//! overwrite what was received.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseBuffer {
    bytes: Vec<u8>,
}

impl ResponseBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn append(&mut self, chunk: &[u8]) {
        self.bytes.extend_from_slice(chunk);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Strict UTF-8 decode. Invalid sequences are an error.
    pub fn to_utf8(&self) -> Result<String, std::string::FromUtf8Error> {
        String::from_utf8(self.bytes.clone())
    }

    pub fn to_utf8_lossy(&self) -> String {
        String::from_utf8_lossy(&self.bytes).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chunks_accumulate_in_order() {
        let mut buf = ResponseBuffer::new();
        assert!(buf.is_empty());

        buf.append(b"hello ");
        buf.append(b"");
        buf.append(b"world");

        assert_eq!(buf.len(), 11);
        assert_eq!(buf.as_bytes(), b"hello world");
        assert_eq!(buf.to_utf8().unwrap(), "hello world");
    }

    #[test]
    fn strict_decode_rejects_invalid_utf8() {
        let mut buf = ResponseBuffer::new();
        buf.append(b"\xff\xfehello");

        assert!(buf.to_utf8().is_err());
        assert!(buf.to_utf8_lossy().ends_with("hello"));
    }

    #[test]
    fn multibyte_sequence_split_across_chunks() {
        let mut buf = ResponseBuffer::new();
        // UTF-8 snowman split over two appends
        buf.append(b"\xe2\x98");
        buf.append(b"\x83");
        assert_eq!(buf.to_utf8().unwrap(), "\u{2603}");
    }
}
