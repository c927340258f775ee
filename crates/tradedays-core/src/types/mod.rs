//! Date types shared by every calendar and offset.

mod date;
mod excel;

pub use date::{days_in_month, is_leap_year, Date};
pub use excel::{datetime_to_excel, excel_to_datetime, DateMode, ExcelValue};
