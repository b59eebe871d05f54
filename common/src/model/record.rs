use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The user-entered, non-signature part of the statement.
///
/// Field names follow the payload keys the script endpoint expects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormRecord {
    /// Trainee name.
    pub nama: String,
    /// Trainee employee number (NRP).
    pub nrp: String,
    /// Selected training topic, as the option value (`"Pilihan N"`).
    pub materi: String,
    /// Selected instructor, as the option value (`"Nama N"`).
    pub instruktur: String,
    /// Training date as produced by an `<input type="date">` (`YYYY-MM-DD`).
    pub tanggal: String,
    /// "Saya menyatakan telah menerima penjelasan materi pelatihan".
    pub persetujuan: bool,
}

/// Addressable fields of a [`FormRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Nama,
    Nrp,
    Materi,
    Instruktur,
    Tanggal,
    Persetujuan,
}

/// Text fields that must be non-empty, in the order they are checked.
pub const REQUIRED_TEXT_FIELDS: [Field; 5] = [
    Field::Nama,
    Field::Nrp,
    Field::Materi,
    Field::Instruktur,
    Field::Tanggal,
];

impl Field {
    /// The `name` attribute of the input, which is also the JSON key.
    pub fn name(self) -> &'static str {
        match self {
            Field::Nama => "nama",
            Field::Nrp => "nrp",
            Field::Materi => "materi",
            Field::Instruktur => "instruktur",
            Field::Tanggal => "tanggal",
            Field::Persetujuan => "persetujuan",
        }
    }

    /// Human readable label used in notifications.
    pub fn label(self) -> &'static str {
        match self {
            Field::Nama => "Nama",
            Field::Nrp => "NRP",
            Field::Materi => "Materi",
            Field::Instruktur => "Instruktur",
            Field::Tanggal => "Tanggal",
            Field::Persetujuan => "Persetujuan",
        }
    }

    pub fn from_name(name: &str) -> Option<Field> {
        match name {
            "nama" => Some(Field::Nama),
            "nrp" => Some(Field::Nrp),
            "materi" => Some(Field::Materi),
            "instruktur" => Some(Field::Instruktur),
            "tanggal" => Some(Field::Tanggal),
            "persetujuan" => Some(Field::Persetujuan),
            _ => None,
        }
    }

    pub fn is_checkbox(self) -> bool {
        matches!(self, Field::Persetujuan)
    }
}

/// A value coming from an input element: checkboxes carry a flag, everything
/// else carries text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("field `{0}` expects a checkbox value")]
    ExpectedFlag(&'static str),
    #[error("field `{0}` expects a text value")]
    ExpectedText(&'static str),
}

impl FormRecord {
    /// Overwrites one field. The value kind must match the field kind.
    pub fn set(&mut self, field: Field, value: FieldValue) -> Result<(), FieldError> {
        match (field, value) {
            (Field::Persetujuan, FieldValue::Flag(flag)) => self.persetujuan = flag,
            (Field::Persetujuan, FieldValue::Text(_)) => {
                return Err(FieldError::ExpectedFlag(field.name()));
            }
            (_, FieldValue::Flag(_)) => return Err(FieldError::ExpectedText(field.name())),
            (Field::Nama, FieldValue::Text(text)) => self.nama = text,
            (Field::Nrp, FieldValue::Text(text)) => self.nrp = text,
            (Field::Materi, FieldValue::Text(text)) => self.materi = text,
            (Field::Instruktur, FieldValue::Text(text)) => self.instruktur = text,
            (Field::Tanggal, FieldValue::Text(text)) => self.tanggal = text,
        }
        Ok(())
    }

    /// Text content of a text field; `None` for the checkbox.
    pub fn text(&self, field: Field) -> Option<&str> {
        match field {
            Field::Nama => Some(&self.nama),
            Field::Nrp => Some(&self.nrp),
            Field::Materi => Some(&self.materi),
            Field::Instruktur => Some(&self.instruktur),
            Field::Tanggal => Some(&self.tanggal),
            Field::Persetujuan => None,
        }
    }

    /// First required text field that is empty or whitespace only.
    pub fn first_missing(&self) -> Option<Field> {
        REQUIRED_TEXT_FIELDS
            .into_iter()
            .find(|field| self.text(*field).is_none_or(|text| text.trim().is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_routes_values_to_their_fields() {
        let mut record = FormRecord::default();
        record.set(Field::Nama, FieldValue::Text("Budi".into())).unwrap();
        record.set(Field::Tanggal, FieldValue::Text("2024-05-02".into())).unwrap();
        record.set(Field::Persetujuan, FieldValue::Flag(true)).unwrap();

        assert_eq!(record.nama, "Budi");
        assert_eq!(record.tanggal, "2024-05-02");
        assert!(record.persetujuan);
    }

    #[test]
    fn set_rejects_mismatched_kinds() {
        let mut record = FormRecord::default();
        assert_eq!(
            record.set(Field::Persetujuan, FieldValue::Text("on".into())),
            Err(FieldError::ExpectedFlag("persetujuan"))
        );
        assert_eq!(
            record.set(Field::Nrp, FieldValue::Flag(true)),
            Err(FieldError::ExpectedText("nrp"))
        );
        assert_eq!(record, FormRecord::default());
    }

    #[test]
    fn first_missing_follows_field_order_and_ignores_whitespace() {
        let mut record = FormRecord {
            nama: "Budi".into(),
            nrp: "   ".into(),
            materi: String::new(),
            ..Default::default()
        };
        assert_eq!(record.first_missing(), Some(Field::Nrp));

        record.nrp = "12345".into();
        assert_eq!(record.first_missing(), Some(Field::Materi));
    }

    #[test]
    fn field_names_round_trip() {
        for field in REQUIRED_TEXT_FIELDS.into_iter().chain([Field::Persetujuan]) {
            assert_eq!(Field::from_name(field.name()), Some(field));
        }
        assert_eq!(Field::from_name("signature"), None);
    }
}
