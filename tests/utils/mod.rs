use canasta::{Household, Person, ReferencePeriod, Sex};
use rand::Rng;
use rust_xlsxwriter::{ExcelDateTime, Format, Workbook, XlsxError};
use std::path::Path;

/// Basket values used by the worked examples
#[must_use]
pub fn reference_period() -> ReferencePeriod {
    ReferencePeriod::new(3, 2025, 150_000.0, 300_000.0).unwrap()
}

/// Household of 2.5 adult equivalents (1.02 + 0.76 + 0.37 + 0.35)
#[must_use]
pub fn example_household() -> Household {
    Household::new(Person::new(25, Sex::Male))
        .with_member(Person::new(27, Sex::Female))
        .with_member(Person::new(1, Sex::Male))
        .with_member(Person::new(0, Sex::Female))
}

/// Household with 1 to 8 members of random age and sex
pub fn random_household(rng: &mut impl Rng) -> Household {
    let size = rng.random_range(1..=8);
    let members = (0..size).map(|_| {
        let sex = if rng.random_bool(0.5) {
            Sex::Male
        } else {
            Sex::Female
        };
        Person::new(rng.random_range(0..=120), sex)
    });
    Household::from_members(members.collect::<Vec<_>>()).unwrap()
}

/// One month of the basket series: (year, month, CBA, CBT)
pub type BasketMonth = (u16, u8, f64, f64);

/// Write a workbook laid out like the INDEC basket series: banner text in the
/// first five rows, a header in the sixth, then one `mmm-yy` date cell and the
/// CBA, variation and CBT columns per month. `first_row` and `first_col`
/// move the banner and the whole table away from A1.
pub fn write_basket_workbook(
    path: &Path,
    first_row: u32,
    first_col: u16,
    months: &[BasketMonth],
) -> Result<(), XlsxError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    let month_format = Format::new().set_num_format("mmm-yy");

    sheet.write_string(
        first_row,
        first_col,
        "Canasta básica alimentaria y canasta básica total",
    )?;
    sheet.write_string(4, first_col, "Gran Buenos Aires, por adulto equivalente")?;
    for (offset, title) in ["Período", "CBA", "Var. %", "CBT"].into_iter().enumerate() {
        sheet.write_string(5, first_col + offset as u16, title)?;
    }

    for (idx, &(year, month, cba, cbt)) in months.iter().enumerate() {
        let row = 6 + idx as u32;
        let date = ExcelDateTime::from_ymd(year, month, 1)?;
        sheet.write_datetime_with_format(row, first_col, &date, &month_format)?;
        sheet.write_number(row, first_col + 1, cba)?;
        sheet.write_number(row, first_col + 2, 1.5)?;
        sheet.write_number(row, first_col + 3, cbt)?;
    }
    sheet.write_string(6 + months.len() as u32, first_col, "Fuente: INDEC")?;

    workbook.save(path)
}
