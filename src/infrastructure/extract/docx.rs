use docx_rust::document::{BodyContent, Paragraph, TableCell, TableCellContent, TableRowContent};
use docx_rust::DocxFile;
use std::io::Cursor;

use crate::domain::{DocumentKind, DomainError, ExtractedText, Fragment};

/// Body paragraphs first, then every table cell (tables, rows and cells in
/// document order).
pub fn extract(name: &str, bytes: &[u8]) -> Result<ExtractedText, DomainError> {
    let file =
        DocxFile::from_reader(Cursor::new(bytes)).map_err(|e| DomainError::extraction(name, format!("{e:?}")))?;
    let docx = file
        .parse()
        .map_err(|e| DomainError::extraction(name, format!("{e:?}")))?;

    let mut paragraphs = Vec::new();
    let mut cells = Vec::new();

    for content in &docx.document.body.content {
        match content {
            BodyContent::Paragraph(paragraph) => {
                paragraphs.push(Fragment::block(paragraph_text(paragraph)));
            }
            BodyContent::Table(table) => {
                for row in &table.rows {
                    for cell in &row.cells {
                        if let TableRowContent::TableCell(cell) = cell {
                            cells.push(Fragment::block(cell_text(cell)));
                        }
                    }
                }
            }
            _ => {}
        }
    }

    paragraphs.extend(cells);
    Ok(ExtractedText::new(name, DocumentKind::Docx, paragraphs))
}

fn paragraph_text(paragraph: &Paragraph) -> String {
    let mut text = String::new();
    for run_text in paragraph.iter_text() {
        text.push_str(run_text);
    }
    text
}

/// Cell paragraphs joined by newlines.
fn cell_text(cell: &TableCell) -> String {
    cell.content
        .iter()
        .filter_map(|content| match content {
            TableCellContent::Paragraph(paragraph) => Some(paragraph_text(paragraph)),
            #[allow(unreachable_patterns)]
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("\n")
}
