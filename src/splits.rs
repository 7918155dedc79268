use super::{
    error::ReadError,
    types::{column, Column, FieldError, Row, Split},
};
use tracing::{debug, info, trace};

#[derive(Debug, Default)]
pub struct SplitCollection {
    splits: Vec<Split>,
    summary: Option<Split>,
}

impl SplitCollection {
    /// Consumes rows until the input ends or the first error, which is returned. Splits built
    /// before the error stay in the collection.
    pub fn read<I>(&mut self, rows: I) -> Result<(), ReadError>
    where
        I: IntoIterator<Item = Result<Row, ReadError>>,
    {
        for (index, row) in rows.into_iter().enumerate() {
            self.process(&row?)
                .map_err(|source| ReadError::Field { row: index, source })?;
        }

        info!(splits = self.splits.len(), "finished reading splits");
        Ok(())
    }

    pub fn process(&mut self, row: &Row) -> Result<(), FieldError> {
        let stroke = Column::SwimStroke
            .resolve(row)
            .ok_or(FieldError::MissingColumn(Column::SwimStroke))?;
        let interval = Column::Interval.resolve(row).unwrap_or("").trim();

        // "1.2" is the second length of interval 1
        if interval.contains('.') {
            trace!(interval, "discarding length row");
            return Ok(());
        }

        // A pause belongs to the interval before it
        if column::is_rest(stroke) {
            let rest_time = Column::Time.resolve(row).unwrap_or("");
            if let Some(last) = self.splits.last_mut() {
                debug!(interval = %last.number, rest_time, "attaching rest");
                last.set_rest(rest_time);
            }
            return Ok(());
        }

        if interval.is_empty() {
            trace!("discarding row without interval");
            return Ok(());
        }

        let split = Split::try_from(row)?;

        if split.is_summary() {
            debug!(distance = split.distance, "summary row found");
            self.summary = Some(split);
        } else {
            self.splits.push(split);
        }

        Ok(())
    }

    pub fn splits(&self) -> &[Split] {
        &self.splits
    }

    /// The summary row of the export, or one computed from the splits if there was none.
    pub fn summary(&self) -> Split {
        self.summary
            .clone()
            .unwrap_or_else(|| self.calculate_summary())
    }

    fn calculate_summary(&self) -> Split {
        Split::summary(self.splits.iter().map(|split| split.distance).sum())
    }

    pub fn write<Writer: std::io::Write>(&self, mut f: Writer) -> Result<(), std::io::Error> {
        write!(f, "{}", self.summary())?;

        for split in self.splits() {
            write!(f, "{}", split)?;
        }

        writeln!(f)
    }
}
