use csv::StringRecord;

/// One data record of the export, as (header, cell) pairs in header order.
///
/// The headers of Garmin exports vary with the account's language, so instead of a fixed
/// struct the record is kept as-is and fields are looked up through `Column::resolve`.
#[derive(Debug, PartialEq)]
pub struct Row(Vec<(String, String)>);

impl Row {
    /// Pairs cells with headers by position. Headers past the end of a short record are left
    /// out, so their columns resolve as absent; cells past the last header are dropped.
    pub fn from_record(headers: &StringRecord, record: &StringRecord) -> Self {
        headers.iter().zip(record.iter()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .iter()
            .map(|(header, value)| (header.as_str(), value.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(header, value)| (header.into(), value.into()))
                .collect(),
        )
    }
}
