use serde::{Deserialize, Serialize};

use crate::model::record::FormRecord;

/// The JSON body posted to the script endpoint.
///
/// Built once per submit attempt from a snapshot of the record, the resolved
/// signature and the submission time; never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionPayload {
    #[serde(flatten)]
    record: FormRecord,
    /// Signature image as a base64 data URI.
    signature: String,
    /// Submission time, ISO-8601.
    timestamp: String,
}

impl SubmissionPayload {
    pub fn new(record: FormRecord, signature: String, timestamp: String) -> Self {
        Self {
            record,
            signature,
            timestamp,
        }
    }

    pub fn record(&self) -> &FormRecord {
        &self.record
    }

    pub fn signature(&self) -> &str {
        &self.signature
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn serializes_with_the_endpoint_keys() {
        let record = FormRecord {
            nama: "Siti".into(),
            nrp: "A-77".into(),
            materi: "Pilihan 3".into(),
            instruktur: "Nama 12".into(),
            tanggal: "2024-05-02".into(),
            persetujuan: true,
        };
        let payload = SubmissionPayload::new(
            record,
            "data:image/png;base64,AAAA".into(),
            "2024-05-02T03:04:05.000Z".into(),
        );

        let value: Value = serde_json::from_str(&payload.to_json().unwrap()).unwrap();
        assert_eq!(
            value,
            json!({
                "nama": "Siti",
                "nrp": "A-77",
                "materi": "Pilihan 3",
                "instruktur": "Nama 12",
                "tanggal": "2024-05-02",
                "persetujuan": true,
                "signature": "data:image/png;base64,AAAA",
                "timestamp": "2024-05-02T03:04:05.000Z"
            })
        );
    }
}
