//! Excel export functionality.

use crate::models::supplier::Supplier;
use chrono::Local;
use rust_xlsxwriter::{Color, Format, FormatBorder, Workbook, XlsxError};
use std::path::{Path, PathBuf};

/// Open save file dialog and return selected path.
pub fn show_save_dialog(default_name: &str) -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_file_name(default_name)
        .add_filter("Excel Files", &["xlsx"])
        .save_file()
}

/// Generate default filename for export.
pub fn generate_export_filename(prefix: &str) -> String {
    let now = Local::now();
    format!("{prefix}_{ts}.xlsx", ts = now.format("%Y%m%d_%H%M%S"))
}

/// Export suppliers to Excel file.
pub fn export_suppliers_to_excel<'a>(
    suppliers: impl IntoIterator<Item = &'a Supplier>,
    path: &Path,
) -> Result<usize, XlsxError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    worksheet.set_name("Suppliers")?;

    let header_format = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0x4472C4))
        .set_font_color(Color::White)
        .set_border(FormatBorder::Thin);

    let headers = ["ID", "Name", "Contact", "Email", "Address", "Status"];

    for (col, header) in headers.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
    }

    worksheet.set_column_width(0, 6)?; // ID
    worksheet.set_column_width(1, 30)?; // Name
    worksheet.set_column_width(2, 18)?; // Contact
    worksheet.set_column_width(3, 30)?; // Email
    worksheet.set_column_width(4, 40)?; // Address
    worksheet.set_column_width(5, 10)?; // Status

    let mut rows = 0;
    for supplier in suppliers {
        let row = (rows + 1) as u32;

        worksheet.write_number(row, 0, supplier.id as f64)?;
        worksheet.write_string(row, 1, &supplier.name)?;
        worksheet.write_string(row, 2, &supplier.contact)?;
        worksheet.write_string(row, 3, &supplier.email)?;
        worksheet.write_string(row, 4, &supplier.address)?;
        worksheet.write_string(row, 5, supplier.status.as_str())?;

        rows += 1;
    }

    if rows > 0 {
        worksheet.autofilter(0, 0, rows as u32, 5)?;
    }

    worksheet.set_freeze_panes(1, 0)?;

    workbook.save(path)?;
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::supplier_book::SupplierBook;

    #[test]
    fn test_generate_export_filename() {
        let name = generate_export_filename("suppliers");
        assert!(name.starts_with("suppliers_"));
        assert!(name.ends_with(".xlsx"));
        // suppliers_YYYYMMDD_HHMMSS.xlsx
        assert_eq!(name.len(), "suppliers_".len() + 15 + ".xlsx".len());
    }

    #[test]
    fn test_export_suppliers_writes_file() {
        let book = SupplierBook::sample();
        let path = std::env::temp_dir().join(format!("erp-shell-export-{}.xlsx", std::process::id()));

        let rows = export_suppliers_to_excel(book.iter(), &path).unwrap();
        assert_eq!(rows, 3);
        assert!(path.exists());

        let _ = std::fs::remove_file(&path);
    }
}
