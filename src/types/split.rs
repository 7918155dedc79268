use super::{column, Column, Row};

/// Placeholder Garmin writes into cells that have no value.
const PLACEHOLDER: &str = "--";

/// Interval label of a summary computed from the retained splits.
const COMPUTED_SUMMARY: &str = "Summary";

/// One recorded swim interval, or the summary of the whole session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Split {
    pub number: String,
    pub stroke_style: String,
    /// Meters; -1 if the export left it blank.
    pub distance: i64,
    pub time: String,
    pub avg_pace: String,
    pub best_pace: String,
    pub swolf: Option<i64>,
    /// 0 if the export left it blank.
    pub avg_strokes: i64,
    pub rest_time: String,
}

impl Split {
    pub fn summary(distance: i64) -> Self {
        Self {
            number: COMPUTED_SUMMARY.into(),
            distance,
            ..Default::default()
        }
    }

    pub fn is_summary(&self) -> bool {
        column::is_summary(&self.number)
    }

    pub fn set_rest(&mut self, rest_time: &str) {
        self.rest_time = rest_time.trim().into();
    }
}

impl TryFrom<&Row> for Split {
    type Error = FieldError;

    fn try_from(row: &Row) -> Result<Self, Self::Error> {
        let field = move |column: Column| column.resolve(row).unwrap_or("").trim();

        let avg_strokes = match field(Column::AvgStrokes) {
            "" | PLACEHOLDER => 0,
            raw => parse_truncated(Column::AvgStrokes, raw)?,
        };

        let swolf = match field(Column::AvgSwolf) {
            "" => None,
            raw => Some(parse_truncated(Column::AvgSwolf, raw)?),
        };

        Ok(Self {
            number: field(Column::Interval).into(),
            stroke_style: field(Column::SwimStroke).to_lowercase(),
            distance: convert_distance(field(Column::Distance))?,
            time: field(Column::Time).into(),
            avg_pace: pace(field(Column::AvgPace)),
            best_pace: pace(field(Column::BestPace)),
            swolf,
            avg_strokes,
            rest_time: String::new(),
        })
    }
}

fn pace(raw: &str) -> String {
    if raw == PLACEHOLDER {
        String::new()
    } else {
        raw.into()
    }
}

/// Converts a distance cell to meters. Periods are thousands separators ("1.500" is 1500m),
/// and a blank cell gives -1.
pub fn convert_distance(raw: &str) -> Result<i64, FieldError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(-1);
    }

    parse_truncated(Column::Distance, &raw.replace('.', ""))
}

/// Parses a number the way the exports write them (possibly "12.0") and drops the fraction.
fn parse_truncated(column: Column, raw: &str) -> Result<i64, FieldError> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value.trunc() as i64),
        _ => Err(FieldError::InvalidNumber {
            column,
            value: raw.into(),
        }),
    }
}

impl std::fmt::Display for Split {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let is_summary = self.is_summary();

        if !is_summary {
            write!(f, "    #{} ", self.number)?;
        }

        write!(f, "{}m {} {}", self.distance, self.stroke_style, self.time)?;

        if !self.avg_pace.is_empty() && self.avg_pace != "0" {
            let separator = if is_summary { " " } else { "\n\t" };
            write!(f, "{}{}/100m", separator, self.avg_pace)?;
        }

        if let Some(swolf) = self.swolf.filter(|&swolf| swolf != 0) {
            write!(f, " SWOLF:{}", swolf)?;
        }

        if !matches!(self.best_pace.as_str(), "" | "0" | "0:") {
            write!(f, " (best: {}/100m)", self.best_pace)?;
        }

        if self.avg_strokes > 0 {
            write!(f, " AvgStrokes:{}", self.avg_strokes)?;
        }

        if !self.rest_time.is_empty() {
            write!(f, " d({})", self.rest_time)?;
        }

        writeln!(f)
    }
}

/// This error is returned when a cell of a row can't be turned into a `Split` field.
#[derive(Debug, thiserror::Error)]
pub enum FieldError {
    #[error("no {0} column")]
    MissingColumn(Column),
    #[error("{column} value \"{value}\" is not a number")]
    InvalidNumber { column: Column, value: String },
}
