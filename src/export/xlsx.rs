// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::excel_date::parse_to_excel_date;
use crate::export::model::{EntryExport, entry_to_row, get_headers};
use crate::export::notify_export_success;
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::io;
use std::path::Path;
use unicode_width::UnicodeWidthStr;

const HEADER_BG: u32 = 0x2F75B5;
const BAND_EVEN: u32 = 0xEAF3FB;
const BAND_ODD: u32 = 0xFFFFFF;

/// Timecard workbook: one styled row per entry plus a totals row.
pub(crate) fn export_xlsx(rows: &[EntryExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Timecard").map_err(to_io_app_error)?;

    if rows.is_empty() {
        worksheet
            .write(0, 0, "No time entries")
            .map_err(to_io_app_error)?;
        workbook.save(path_str(path)?).map_err(to_io_app_error)?;
        notify_export_success("XLSX (empty timecard)", path);
        return Ok(());
    }

    let headers = get_headers();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(HEADER_BG))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_io_app_error)?;
    }

    worksheet.set_freeze_panes(1, 0).ok();

    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    for (row_index, entry) in rows.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band = if row_index % 2 == 0 { BAND_EVEN } else { BAND_ODD };

        for (col, value) in entry_to_row(entry).iter().enumerate() {
            // the id column stays text so Excel does not render it in E-notation
            if col == 0 {
                write_text(worksheet, row, 0, value, Color::RGB(band))?;
            } else {
                write_xlsx_cell(worksheet, row, col as u16, value, Color::RGB(band))?;
            }
            col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(value.as_str()));
        }
    }

    write_totals(worksheet, rows)?;

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_io_app_error)?;
    }

    workbook.save(path_str(path)?).map_err(to_io_app_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

fn write_totals(worksheet: &mut Worksheet, rows: &[EntryExport]) -> AppResult<()> {
    let row = (rows.len() + 1) as u32;
    let bold = Format::new().set_bold().set_border_top(FormatBorder::Thin);
    let bold_num = bold.clone().set_align(FormatAlign::Right).set_num_format("0.00");

    let hours = rows.iter().fold(0.0, |acc, r| acc + r.hours);
    let earnings = rows.iter().fold(0.0, |acc, r| acc + r.earnings);

    worksheet
        .write_with_format(row, 0, "Total", &bold)
        .map_err(to_io_app_error)?;
    worksheet
        .write_with_format(row, 4, hours, &bold_num)
        .map_err(to_io_app_error)?;
    worksheet
        .write_with_format(row, 5, earnings, &bold_num)
        .map_err(to_io_app_error)?;

    Ok(())
}

/// Dates become Excel serials, numbers stay numeric, anything else is text.
fn write_xlsx_cell(worksheet: &mut Worksheet, row: u32, col: u16, s: &str, bg: Color) -> AppResult<()> {
    if let Some((num_format, serial)) = parse_to_excel_date(s) {
        let fmt = Format::new()
            .set_num_format(num_format)
            .set_background_color(bg)
            .set_pattern(FormatPattern::Solid)
            .set_border(FormatBorder::Thin);

        worksheet
            .write_with_format(row, col, serial, &fmt)
            .map_err(to_io_app_error)?;
        return Ok(());
    }

    if let Ok(num) = s.parse::<f64>() {
        let fmt = Format::new()
            .set_align(FormatAlign::Right)
            .set_num_format("0.00")
            .set_background_color(bg)
            .set_pattern(FormatPattern::Solid)
            .set_border(FormatBorder::Thin);

        worksheet
            .write_with_format(row, col, num, &fmt)
            .map_err(to_io_app_error)?;
        return Ok(());
    }

    write_text(worksheet, row, col, s, bg)
}

fn write_text(worksheet: &mut Worksheet, row: u32, col: u16, s: &str, bg: Color) -> AppResult<()> {
    let fmt = Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    worksheet
        .write_with_format(row, col, s, &fmt)
        .map_err(to_io_app_error)?;
    Ok(())
}

fn to_io_app_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}

fn path_str(path: &Path) -> AppResult<&str> {
    path.to_str()
        .ok_or_else(|| AppError::from(io::Error::other("invalid path")))
}
