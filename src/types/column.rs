use super::Row;

/// The logical fields of a Garmin swim export we care about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Interval,
    SwimStroke,
    Distance,
    Time,
    AvgPace,
    BestPace,
    AvgSwolf,
    AvgStrokes,
}

impl Column {
    /// Accepted header spellings, already lowercased and without periods.
    pub fn synonyms(self) -> &'static [&'static str] {
        match self {
            Self::Interval => &["intervals", "intervalos"],
            Self::SwimStroke => &["swim stroke", "estilo de natación", "estilo"],
            Self::Distance => &["distance", "distancia"],
            Self::Time => &["time", "tiempo"],
            Self::AvgPace => &["avg pace", "ritmo medio"],
            Self::BestPace => &["best pace", "mejor ritmo"],
            Self::AvgSwolf => &["avg swolf", "swolf medio"],
            Self::AvgStrokes => &["avg strokes", "brazadas medias"],
        }
    }

    /// Returns the cell of the first header in `row` that is one of our synonyms.
    pub fn resolve(self, row: &Row) -> Option<&str> {
        let synonyms = self.synonyms();

        row.iter()
            .find(|(header, _)| synonyms.contains(&normalize_header(header).as_str()))
            .map(|(_, value)| value)
    }
}

impl std::fmt::Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The English spelling is the canonical one
        write!(f, "\"{}\"", self.synonyms()[0])
    }
}

/// "Avg. Swolf " -> "avg swolf"
pub fn normalize_header(header: &str) -> String {
    header.trim().to_lowercase().replace('.', "")
}

/// Stroke values marking a pause between intervals.
const REST_STROKES: &[&str] = &["rest", "descanso"];

/// Interval values marking the session summary.
const SUMMARY_INTERVALS: &[&str] = &["summary", "resumen"];

pub fn is_rest(stroke: &str) -> bool {
    matches_any(stroke, REST_STROKES)
}

pub fn is_summary(interval: &str) -> bool {
    matches_any(interval, SUMMARY_INTERVALS)
}

fn matches_any(value: &str, candidates: &[&str]) -> bool {
    let value = value.trim().to_lowercase();
    candidates.contains(&value.as_str())
}

#[cfg(test)]
mod tests {
    use super::{is_rest, is_summary, normalize_header, Column};
    use crate::types::Row;

    #[test]
    fn test_normalize_header() {
        assert_eq!(normalize_header("Avg. Swolf"), "avg swolf");
        assert_eq!(normalize_header("avg swolf"), "avg swolf");
        assert_eq!(normalize_header("AVG SWOLF"), "avg swolf");
        assert_eq!(normalize_header(" Estilo de Natación "), "estilo de natación");
    }

    #[test]
    fn test_resolve_ignores_case_and_periods() {
        for header in ["Avg. Swolf", "avg swolf", "AVG SWOLF"] {
            let row = Row::from_iter([("Intervals", "1"), (header, "35")]);
            assert_eq!(Column::AvgSwolf.resolve(&row), Some("35"));
        }
    }

    #[test]
    fn test_resolve_spanish_headers() {
        let row = Row::from_iter([
            ("Intervalos", "2"),
            ("Estilo de natación", "Espalda"),
            ("Distancia", "1.000"),
            ("Tiempo", "20:00"),
            ("Ritmo medio", "2:00"),
            ("Mejor ritmo", "1:50"),
            ("Swolf medio", "40"),
            ("Brazadas medias", "15"),
        ]);

        assert_eq!(Column::Interval.resolve(&row), Some("2"));
        assert_eq!(Column::SwimStroke.resolve(&row), Some("Espalda"));
        assert_eq!(Column::Distance.resolve(&row), Some("1.000"));
        assert_eq!(Column::Time.resolve(&row), Some("20:00"));
        assert_eq!(Column::AvgPace.resolve(&row), Some("2:00"));
        assert_eq!(Column::BestPace.resolve(&row), Some("1:50"));
        assert_eq!(Column::AvgSwolf.resolve(&row), Some("40"));
        assert_eq!(Column::AvgStrokes.resolve(&row), Some("15"));
    }

    #[test]
    fn test_resolve_independent_of_column_order() {
        let row = Row::from_iter([("Time", "1:00"), ("Distance", "50"), ("Intervals", "3")]);
        assert_eq!(Column::Interval.resolve(&row), Some("3"));
        assert_eq!(Column::Distance.resolve(&row), Some("50"));

        // First match in row order wins
        let row = Row::from_iter([("Distance", "50"), ("Distancia", "75")]);
        assert_eq!(Column::Distance.resolve(&row), Some("50"));
    }

    #[test]
    fn test_resolve_missing() {
        let row = Row::from_iter([("Intervals", "1")]);
        assert_eq!(Column::AvgPace.resolve(&row), None);
        // Prefixes don't count
        let row = Row::from_iter([("Avg Pace (min/100m)", "1:45")]);
        assert_eq!(Column::AvgPace.resolve(&row), None);
    }

    #[test]
    fn test_sentinels() {
        assert!(is_rest("Rest"));
        assert!(is_rest(" DESCANSO "));
        assert!(!is_rest("Free"));

        assert!(is_summary("Summary"));
        assert!(is_summary("resumen"));
        assert!(!is_summary("1"));
    }

    #[test]
    fn test_display() {
        assert_eq!(Column::AvgStrokes.to_string(), "\"avg strokes\"");
    }
}
