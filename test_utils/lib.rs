pub mod constants;

use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use quick_xml::events::Event;
use quick_xml::Reader;
use std::fs;
use std::io::{Read, Write};
use std::path::Path;

/// Returns the unescaped text content of every `<tag>` element, in document
/// order.
///
/// Panics if the document is not well-formed XML.
pub fn extract_element_texts(xml: &str, tag: &str) -> Vec<String> {
    let mut texts = Vec::new();
    let mut current_tag = String::new();

    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                current_tag = String::from_utf8_lossy(e.name().as_ref()).to_string();
            }
            Ok(Event::Text(ref e)) => {
                if current_tag == tag {
                    let text = e.unescape().expect("Failed to unescape element text");
                    texts.push(text.to_string());
                }
            }
            Ok(Event::End(_)) => current_tag.clear(),
            Ok(Event::Eof) => break,
            Err(e) => panic!(
                "Malformed XML at position {}: {}",
                reader.error_position(),
                e
            ),
            _ => {}
        }
        buf.clear();
    }

    texts
}

/// All `<loc>` values of a rendered sitemap.
pub fn extract_locs(xml: &str) -> Vec<String> {
    extract_element_texts(xml, "loc")
}

/// Number of `<url>` elements in a rendered sitemap.
///
/// Panics if the document is not well-formed XML.
pub fn count_url_elements(xml: &str) -> usize {
    let mut count = 0;

    let mut reader = Reader::from_str(xml);
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) if e.name().as_ref() == b"url" => count += 1,
            Ok(Event::Eof) => break,
            Err(e) => panic!(
                "Malformed XML at position {}: {}",
                reader.error_position(),
                e
            ),
            _ => {}
        }
        buf.clear();
    }

    count
}

/// Builds a single-column `ticker` CSV from raw cell values.
pub fn ticker_csv(tickers: &[&str]) -> String {
    let mut writer = csv::Writer::from_writer(vec![]);
    writer.write_record(["ticker"]).expect("Failed to write header");
    for ticker in tickers {
        writer.write_record([ticker]).expect("Failed to write record");
    }

    let bytes = match writer.into_inner() {
        Ok(bytes) => bytes,
        Err(_) => panic!("Failed to flush CSV"),
    };

    String::from_utf8(bytes).expect("CSV is not valid UTF-8")
}

/// Writes `contents` gzip-compressed to `path`.
pub fn write_gzip_file(path: &Path, contents: &str) {
    let file = fs::File::create(path).expect("Failed to create gzip file");
    let mut encoder = GzEncoder::new(file, Compression::default());
    encoder
        .write_all(contents.as_bytes())
        .expect("Failed to write gzip file");
    encoder.finish().expect("Failed to finish gzip file");
}

/// Reads and decompresses a gzip file.
pub fn read_gzip_file(path: &Path) -> String {
    let file = fs::File::open(path).expect("Failed to open gzip file");
    let mut decoder = GzDecoder::new(file);
    let mut contents = String::new();
    decoder
        .read_to_string(&mut contents)
        .expect("Failed to decompress gzip file");
    contents
}
