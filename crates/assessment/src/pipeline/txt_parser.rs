use std::path::Path;

use crate::error::{AssessmentError, AssessmentResult};
use crate::model::{BoundingBox, ExpectedWord};
use crate::pipeline::json_input::OcrPage;

/// Synthetic glyph width in pixels for plain-text passages.
const CHAR_WIDTH: f64 = 10.0;
/// Synthetic line height in pixels for plain-text passages.
const LINE_HEIGHT: f64 = 20.0;

/// Lays a plain-text passage out as if it were an OCR page.
///
/// Each text line becomes a row of the grid and each character one column,
/// so boxes keep their reading order and relative positions. Blank lines
/// still take up a row.
pub fn parse_passage_str(content: &str) -> OcrPage {
    let mut words = Vec::new();
    let mut widest = 0usize;
    let mut rows = 0usize;

    for (row, line) in content.lines().enumerate() {
        rows = row + 1;
        let mut column = 0usize;
        let mut token_start: Option<usize> = None;
        let mut token = String::new();

        for c in line.chars().chain(std::iter::once(' ')) {
            if c.is_whitespace() {
                if let Some(start) = token_start.take() {
                    words.push(ExpectedWord {
                        text: std::mem::take(&mut token),
                        bounding_box: BoundingBox {
                            x: start as f64 * CHAR_WIDTH,
                            y: row as f64 * LINE_HEIGHT,
                            width: (column - start) as f64 * CHAR_WIDTH,
                            height: LINE_HEIGHT,
                        },
                    });
                }
            } else {
                token_start.get_or_insert(column);
                token.push(c);
            }
            column += 1;
        }
        widest = widest.max(line.chars().count());
    }

    OcrPage {
        width: widest as f64 * CHAR_WIDTH,
        height: rows as f64 * LINE_HEIGHT,
        words,
    }
}

/// Reads a plain-text passage file.
pub fn load_passage_txt(path: impl AsRef<Path>) -> AssessmentResult<OcrPage> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .map_err(|e| AssessmentError::io(format!("reading passage '{}'", path.display()), e))?;
    Ok(parse_passage_str(&content))
}
