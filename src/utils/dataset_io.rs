use crate::models::Error;
use crate::types::{Dataset, Label, Sample};
use csv::{ReaderBuilder, WriterBuilder};
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use log::debug;
use std::fmt::Display;
use std::fs::File;
use std::io::{BufReader, BufWriter, Cursor, Read, Write};
use std::path::Path;
use std::str::FromStr;

/// Writes a dataset as headerless CSV, one sample per row: the label followed by
/// one field per token. Rows may differ in length.
pub fn write_dataset_csv<T, W>(dataset: &[Sample<T>], writer: W) -> Result<(), Error>
where
    T: Display,
    W: Write,
{
    let mut csv_writer = WriterBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_writer(writer);

    for sample in dataset {
        let mut record = Vec::with_capacity(sample.features.len() + 1);
        record.push(sample.label.to_string());
        record.extend(sample.features.iter().map(|token| token.to_string()));

        csv_writer.write_record(&record)?;
    }

    csv_writer.flush()?;

    Ok(())
}

/// Reads a dataset written by `write_dataset_csv`.
///
/// # Errors
/// * `Error::ParserError` if a row has no label, or a label or token fails to parse.
/// * `Error::CsvError` on malformed CSV.
pub fn read_dataset_csv<T, R>(reader: R) -> Result<Dataset<T>, Error>
where
    T: FromStr,
    T::Err: Display,
    R: Read,
{
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut dataset = Dataset::new();

    for (row, record) in csv_reader.records().enumerate() {
        let record = record?;

        let label_field = record
            .get(0)
            .ok_or_else(|| Error::ParserError(format!("Missing label on row {}", row)))?;

        let label = label_field.trim().parse::<Label>().map_err(|e| {
            Error::ParserError(format!(
                "Invalid label {:?} on row {}: {}",
                label_field, row, e
            ))
        })?;

        let features = record
            .iter()
            .skip(1)
            .map(|field| {
                field.parse::<T>().map_err(|e| {
                    Error::ParserError(format!(
                        "Invalid token {:?} on row {}: {}",
                        field, row, e
                    ))
                })
            })
            .collect::<Result<Vec<T>, Error>>()?;

        dataset.push(Sample::new(features, label));
    }

    Ok(dataset)
}

/// Parses a dataset from a CSV-formatted string.
pub fn read_dataset_from_string<T>(csv: &str) -> Result<Dataset<T>, Error>
where
    T: FromStr,
    T::Err: Display,
{
    // Use a cursor to simulate a file reader from the string
    read_dataset_csv(Cursor::new(csv))
}

/// Decompresses and parses a dataset from Gzip-compressed CSV bytes.
pub fn read_dataset_from_gz_bytes<T>(bytes: &[u8]) -> Result<Dataset<T>, Error>
where
    T: FromStr,
    T::Err: Display,
{
    let mut decoder = GzDecoder::new(bytes);
    let mut decompressed_data = String::new();
    decoder.read_to_string(&mut decompressed_data)?;

    read_dataset_from_string(&decompressed_data)
}

fn is_gzip_path(path: &Path) -> bool {
    path.extension().is_some_and(|extension| extension == "gz")
}

/// Saves a dataset to `path`, Gzip-compressed when the path ends in `.gz`.
pub fn save_dataset<T, P>(dataset: &[Sample<T>], path: P) -> Result<(), Error>
where
    T: Display,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::create(path)?;

    if is_gzip_path(path) {
        let mut encoder = GzEncoder::new(file, Compression::default());
        write_dataset_csv(dataset, &mut encoder)?;
        encoder.finish()?;
    } else {
        write_dataset_csv(dataset, BufWriter::new(file))?;
    }

    debug!("Saved {} samples to {:?}", dataset.len(), path);

    Ok(())
}

/// Loads a dataset saved by `save_dataset`.
pub fn load_dataset<T, P>(path: P) -> Result<Dataset<T>, Error>
where
    T: FromStr,
    T::Err: Display,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path)?;

    let dataset = if is_gzip_path(path) {
        read_dataset_csv(GzDecoder::new(BufReader::new(file)))?
    } else {
        read_dataset_csv(BufReader::new(file))?
    };

    debug!("Loaded {} samples from {:?}", dataset.len(), path);

    Ok(dataset)
}
