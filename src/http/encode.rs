use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Everything outside the RFC 3986 unreserved set (`A-Za-z0-9-_.~`) is
/// percent-encoded.
const FORM_SAFE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-encode `raw` for use as a form field name or value.
pub fn escape(raw: &str) -> String {
    utf8_percent_encode(raw, FORM_SAFE).to_string()
}

/// Build a `field1=value1&field2=value2` body. Each field and value is
/// escaped independently; pair order is preserved exactly as given, since the
/// receiving side is observed positionally in tests.
pub fn form_body(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .map(|(field, value)| format!("{}={}", escape(field), escape(value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Wrapper shape for records produced to the Kafka REST proxy, fixed once
/// per process.
#[derive(Debug, Clone)]
pub enum Envelope {
    /// `{"records":[{"value":<record>}]}`
    Simple,
    /// `{"records":[{"value":{"receiver":"<id>","data":<record>}}]}`
    Attributed { receiver: String },
}

impl Envelope {
    pub fn for_receiver(receiver: Option<String>) -> Self {
        match receiver {
            Some(id) => Envelope::Attributed { receiver: id },
            None => Envelope::Simple,
        }
    }

    /// Wrap one pre-serialized JSON record.
    ///
    /// The record is spliced in byte-for-byte: no parsing, no
    /// re-serialization, no whitespace normalization. Whether it is valid
    /// JSON is the caller's responsibility; a malformed record yields a
    /// malformed envelope that the broker rejects downstream.
    pub fn wrap(&self, record: &str) -> String {
        match self {
            Envelope::Simple => format!(r#"{{"records":[{{"value":{record}}}]}}"#),
            Envelope::Attributed { receiver } => {
                // JSON-encode the receiver id so quotes or backslashes in it
                // cannot corrupt the wrapper.
                let receiver = serde_json::Value::String(receiver.clone()).to_string();
                format!(r#"{{"records":[{{"value":{{"receiver":{receiver},"data":{record}}}}}]}}"#)
            }
        }
    }
}
