//! Explanatory text shown when hovering a field

use std::collections::BTreeMap;

use heartform_rules::FieldId;

const STANDARD_TOOLTIPS: [(FieldId, &str); 13] = [
    (FieldId::Age, "Usia pasien dalam tahun. Risiko penyakit jantung meningkat seiring bertambahnya usia."),
    (FieldId::Sex, "Jenis kelamin pasien. Laki-laki memiliki risiko lebih tinggi terkena penyakit jantung."),
    (FieldId::Cp, "Jenis nyeri dada yang dialami pasien. Nyeri tipikal sering dikaitkan dengan penyakit jantung."),
    (
        FieldId::Trestbps,
        "Tekanan darah sistolik saat istirahat. Tekanan darah tinggi meningkatkan risiko penyakit jantung.",
    ),
    (FieldId::Chol, "Kadar kolesterol total dalam darah. Kolesterol tinggi dapat menyumbat pembuluh darah."),
    (FieldId::Fbs, "Gula darah puasa. Diabetes meningkatkan risiko penyakit jantung secara signifikan."),
    (
        FieldId::Restecg,
        "Hasil elektrokardiogram saat istirahat. Kelainan dapat mengindikasikan masalah jantung.",
    ),
    (
        FieldId::Thalach,
        "Detak jantung maksimal yang dicapai. Detak jantung abnormal dapat mengindikasikan masalah.",
    ),
    (
        FieldId::Exang,
        "Apakah pasien mengalami nyeri dada saat berolahraga. Gejala angina dapat mengindikasikan penyakit jantung.",
    ),
    (FieldId::Oldpeak, "Depresi segmen ST pada EKG. Nilai tinggi mengindikasikan kerusakan otot jantung."),
    (FieldId::Slope, "Kemiringan segmen ST pada EKG. Kemiringan menurun mengindikasikan masalah jantung."),
    (FieldId::Ca, "Jumlah pembuluh darah utama yang tersumbat. Semakin banyak, semakin tinggi risikonya."),
    (FieldId::Thal, "Hasil tes thalassemia. Kelainan darah dapat mempengaruhi kesehatan jantung."),
];

/// Static field -> tooltip text lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TooltipTable {
    texts: BTreeMap<FieldId, &'static str>,
}

impl TooltipTable {
    pub fn new(texts: impl IntoIterator<Item = (FieldId, &'static str)>) -> Self {
        Self {
            texts: texts.into_iter().collect(),
        }
    }

    pub fn standard() -> Self {
        Self::new(STANDARD_TOOLTIPS)
    }

    pub fn get(&self, field: FieldId) -> Option<&'static str> {
        self.texts.get(&field).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldId, &'static str)> + '_ {
        self.texts.iter().map(|(field, text)| (*field, *text))
    }
}

impl Default for TooltipTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_field_has_tooltip() {
        let tooltips = TooltipTable::standard();
        for field in FieldId::ALL {
            assert!(tooltips.get(field).is_some_and(|text| !text.is_empty()), "{field}");
        }
    }
}
