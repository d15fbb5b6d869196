/**
 * Likewise
 * Copyright (C) 2018 Sebastian Schelter
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program. If not, see <http://www.gnu.org/licenses/>.
 */

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use crate::errors::LikewiseError;
use crate::SimilarityModel;

/// Reads a CSV input file. We expect a header line naming the columns, with
/// comma separation. The reader tolerates records of varying length, missing
/// fields are reported as `InputFormat` errors during extraction instead.
pub fn csv_reader(file: &str) -> Result<csv::Reader<File>, csv::Error> {
    let reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(Path::new(file))?;

    Ok(reader)
}

/// Extracts the (user, item) interaction pairs from a CSV source. The user
/// and item columns are selected by name from the header line. Fails with
/// `InputFormat` if a column is not present in the header, or if a record is
/// too short to contain the selected columns.
pub fn interactions_from_csv<R>(
    reader: &mut csv::Reader<R>,
    user_column: &str,
    item_column: &str,
) -> Result<Vec<(String, String)>, LikewiseError>
    where R: std::io::Read {

    let headers = reader.headers()?.clone();

    let user_position = headers.iter()
        .position(|header| header == user_column)
        .ok_or_else(|| LikewiseError::InputFormat(
            format!("no column named '{}' in the header", user_column)))?;

    let item_position = headers.iter()
        .position(|header| header == item_column)
        .ok_or_else(|| LikewiseError::InputFormat(
            format!("no column named '{}' in the header", item_column)))?;

    let mut interactions = Vec::new();

    for record in reader.records() {
        let record = record?;

        let user = record.get(user_position)
            .ok_or_else(|| LikewiseError::InputFormat(
                format!("record {:?} has no '{}' field", record, user_column)))?;

        let item = record.get(item_position)
            .ok_or_else(|| LikewiseError::InputFormat(
                format!("record {:?} has no '{}' field", record, item_column)))?;

        interactions.push((user.to_string(), item.to_string()));
    }

    Ok(interactions)
}

/// Writes a similarity model to a file in JSON format. Loading the file with
/// `read_model` reproduces the model exactly.
pub fn write_model(model: &SimilarityModel, path: &str) -> Result<(), LikewiseError> {

    let file = File::create(Path::new(path))?;
    serde_json::to_writer(BufWriter::new(file), model)?;

    Ok(())
}

/// Reads back a similarity model written by `write_model`.
pub fn read_model(path: &str) -> Result<SimilarityModel, LikewiseError> {

    let file = File::open(Path::new(path))?;
    let model = serde_json::from_reader(BufReader::new(file))?;

    Ok(model)
}

#[cfg(test)]
mod tests {

    use super::interactions_from_csv;
    use crate::errors::LikewiseError;

    fn reader_over(data: &str) -> csv::Reader<&[u8]> {
        csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(data.as_bytes())
    }

    #[test]
    fn columns_selected_by_name() {

        let data = "user,artist\nalice,the beatles\nbob,miles davis\n";

        let mut reader = reader_over(data);
        let interactions = interactions_from_csv(&mut reader, "user", "artist").unwrap();

        assert_eq!(
            interactions,
            vec![
                (String::from("alice"), String::from("the beatles")),
                (String::from("bob"), String::from("miles davis")),
            ],
        );
    }

    #[test]
    fn column_order_does_not_matter() {

        let data = "artist,user\nthe beatles,alice\n";

        let mut reader = reader_over(data);
        let interactions = interactions_from_csv(&mut reader, "user", "artist").unwrap();

        assert_eq!(interactions, vec![(String::from("alice"), String::from("the beatles"))]);
    }

    #[test]
    fn missing_column_is_an_input_format_error() {

        let data = "user,song\nalice,yesterday\n";

        let mut reader = reader_over(data);

        match interactions_from_csv(&mut reader, "user", "artist") {
            Err(LikewiseError::InputFormat(_)) => (),
            other => panic!("Expected an InputFormat error, got {:?}", other),
        }
    }

    #[test]
    fn short_record_is_an_input_format_error() {

        let data = "user,artist\nalice,the beatles\nbob\n";

        let mut reader = reader_over(data);

        match interactions_from_csv(&mut reader, "user", "artist") {
            Err(LikewiseError::InputFormat(_)) => (),
            other => panic!("Expected an InputFormat error, got {:?}", other),
        }
    }
}
