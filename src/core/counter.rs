use crate::domain::model::CountTable;
use crate::utils::error::Result;
use std::io::Read;

/// Count the occurrence of each word in a text stream.
///
/// Tokens are split on arbitrary whitespace, stripped of ASCII punctuation
/// at both ends only (interior punctuation such as mid-word apostrophes is
/// preserved), lowercased, and discarded if nothing remains after
/// stripping. Any stream that can be read to completion yields a valid,
/// possibly empty, table.
pub fn count_words<R: Read>(mut reader: R) -> Result<CountTable> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;

    let mut counts = CountTable::new();
    for chunk in text.split_whitespace() {
        let word = chunk.trim_matches(|c: char| c.is_ascii_punctuation());
        if word.is_empty() {
            continue;
        }
        counts.add(&word.to_lowercase(), 1);
    }
    Ok(counts)
}
