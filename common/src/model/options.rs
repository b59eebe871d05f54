//! Fixed dropdown contents. Each entry is `(value, label)`; the value is what
//! ends up in the payload.

pub type SelectOption = (&'static str, &'static str);

pub const MATERI_PLACEHOLDER: &str = "Pilih Materi";
pub const INSTRUKTUR_PLACEHOLDER: &str = "Pilih Instruktur";

pub const MATERI: [SelectOption; 15] = [
    ("Pilihan 1", "Pengetahuan Unit"),
    ("Pilihan 2", "Methode Operasi Unit"),
    ("Pilihan 3", "Defensive Driving"),
    ("Pilihan 4", "Fatigue Management"),
    ("Pilihan 5", "Traffict Management"),
    ("Pilihan 6", "Emergency Response"),
    ("Pilihan 7", "Productivity"),
    ("Pilihan 8", "Prosedur Operasi"),
    ("Pilihan 9", "Jigsaw/Mine Pro"),
    ("Pilihan 10", "P2H"),
    ("Pilihan 11", "Persiapan Operasi"),
    ("Pilihan 12", "Pengoperasian Unit"),
    ("Pilihan 13", "Metode Parkir"),
    ("Pilihan 14", "Defensive  Driving 'praktek'"),
    ("Pilihan 15", "Emergency  Response 'praktek'"),
];

pub const INSTRUKTUR: [SelectOption; 36] = [
    ("Nama 1", "ABDUL RAHMAN SIDIK"),
    ("Nama 2", "ANANTO NINGGAR SEJATI"),
    ("Nama 3", "DWI HARIONO"),
    ("Nama 4", "HADI SUTARTO"),
    ("Nama 5", "HERRY KISWANTO KANONENG"),
    ("Nama 6", "IRI SAEFUDDIN"),
    ("Nama 7", "DARTO"),
    ("Nama 8", "KHAIRULLAH MILKAN AZMI"),
    ("Nama 9", "KHUMAIDI NOVAL"),
    ("Nama 10", "ANTON SERSANDI WAHYU"),
    ("Nama 11", "MUHAMMAD SYAUKANI"),
    ("Nama 12", "MUJIANSYAH"),
    ("Nama 13", "IRWANUDDIN"),
    ("Nama 14", "WAHYUDI"),
    ("Nama 15", "NASRULLAH"),
    ("Nama 16", "RAHMAT"),
    ("Nama 17", "RYAN PAMUNGKAS"),
    ("Nama 18", "SINTAR"),
    ("Nama 19", "SOLIHIN ROSADI"),
    ("Nama 20", "SUNARWOTO"),
    ("Nama 21", "SYAIFUL DAFIT ADI SAPUTRA"),
    ("Nama 22", "TEGUH ARIFIATNA"),
    ("Nama 23", "WAHYU UTOMO"),
    ("Nama 24", "IRWAN"),
    ("Nama 25", "ABDUL KODIR"),
    ("Nama 26", "RUDI MARDIANTO"),
    ("Nama 27", "MOHAMMAD KHOIRUL UMAM"),
    ("Nama 28", "BUDIMAN"),
    ("Nama 29", "MUHAMMAD ABDIANNOOR"),
    ("Nama 30", "ASEP CAHYADI"),
    ("Nama 31", "ADLIN ZAID ISMAIL"),
    ("Nama 32", "NARYONO"),
    ("Nama 33", "INDRA HARAPAN"),
    ("Nama 34", "GATOT SETIAWAN"),
    ("Nama 35", "SLAMET HERIANTO"),
    ("Nama 36", "YULIAN MUSTOFA"),
];
