//! Form bodies built from ordered `key=value` pairs.
//!
//! [`FormBody::encode`] writes pairs verbatim (no percent-escaping), joined by
//! `&`, and always yields UTF-8 bytes. Non-ASCII keys or values therefore go
//! out as their UTF-8 byte sequences rather than failing or being transcoded.
//! Use [`FormBody::encode_escaped`] when the receiving side needs a strictly
//! valid `application/x-www-form-urlencoded` payload.
use log::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormBody {
    pairs: Vec<(String, String)>,
}

impl FormBody {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a pair. Duplicate keys are kept, in order.
    pub fn field<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.pairs.push((key.into(), value.into()));
        self
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// True when every key and value is plain ASCII.
    pub fn is_ascii(&self) -> bool {
        self.pairs.iter().all(|(k, v)| k.is_ascii() && v.is_ascii())
    }

    /// `k1=v1&k2=v2` as UTF-8 bytes.
    pub fn encode(&self) -> Vec<u8> {
        let joined = self
            .pairs
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&");

        if !self.is_ascii() {
            debug!("form body contains non-ASCII data, sending {} UTF-8 bytes", joined.len());
        }

        joined.into_bytes()
    }

    /// Percent-escaped `application/x-www-form-urlencoded` serialization.
    pub fn encode_escaped(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter())
            .finish()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormBody {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            pairs: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}
