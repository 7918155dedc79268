use super::{error::ReadError, types::Row};
use std::path::Path;

pub struct CsvFileReader<R> {
    reader: csv::Reader<R>,
    record: csv::StringRecord,
    done: bool,
}

impl CsvFileReader<std::fs::File> {
    pub fn new(input_filename: &Path) -> Result<Self, std::io::Error> {
        Ok(Self::from_reader(std::fs::File::open(input_filename)?))
    }
}

impl<R: std::io::Read> CsvFileReader<R> {
    pub fn from_reader(input: R) -> Self {
        Self {
            reader: csv::ReaderBuilder::new()
                .has_headers(true)
                .trim(csv::Trim::All)
                .flexible(true)
                .from_reader(input),
            record: csv::StringRecord::new(),
            done: false,
        }
    }

    fn read_row(&mut self) -> Result<Option<Row>, ReadError> {
        // Surfaces a badly encoded header row before any record is read
        self.reader.headers()?;

        if !self.reader.read_record(&mut self.record)? {
            return Ok(None);
        }

        Ok(Some(Row::from_record(self.reader.headers()?, &self.record)))
    }
}

impl<R: std::io::Read> Iterator for CsvFileReader<R> {
    type Item = Result<Row, ReadError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let result = self.read_row().transpose();
        // Nothing is read past the first error
        if !matches!(result, Some(Ok(_))) {
            self.done = true;
        }
        result
    }
}
