use color_eyre::eyre::Result;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Read lines until the first empty line or the end of input and join them with `\n`. A trailing
/// carriage return is dropped from every line. Bytes that are not valid UTF-8 are replaced with
/// U+FFFD so every input can still be classified.
pub fn read_until_blank_line<R: BufRead>(mut reader: R) -> Result<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut buf: Vec<u8> = Vec::new();

    loop {
        buf.clear();

        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        let raw = buf.strip_suffix(b"\n").unwrap_or(&buf[..]);
        let raw = raw.strip_suffix(b"\r").unwrap_or(raw);

        if raw.is_empty() {
            break;
        }

        lines.push(String::from_utf8_lossy(raw).into_owned());
    }

    Ok(lines.join("\n"))
}

/// Same as `read_until_blank_line`, reading from a file on disk
pub fn read_source_file(file_path: &Path) -> Result<String> {
    let file = File::open(file_path)?;
    read_until_blank_line(BufReader::new(file))
}
