use canasta::{
    Calculator, CalculatorConfig, CalculatorError, Classification, FileSource, Household,
    Perception, Person, Region, Sex, SheetLayout, load_reference,
};
use tempfile::TempDir;

use crate::utils::{BasketMonth, write_basket_workbook};

/// January, March and February 2025, out of order
const MONTHS: [BasketMonth; 3] = [
    (2025, 1, 140_000.0, 310_000.0),
    (2025, 3, 150_000.0, 330_000.0),
    (2025, 2, 145_000.0, 320_000.0),
];

fn workbook(first_row: u32, first_col: u16) -> (TempDir, FileSource) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("serie_cba_cbt.xlsx");
    write_basket_workbook(&path, first_row, first_col, &MONTHS).unwrap();
    (dir, FileSource::new(path))
}

#[tokio::test]
async fn test_latest_month_is_loaded_from_file() {
    let (_dir, source) = workbook(0, 0);
    let period = load_reference(&source, &SheetLayout::default())
        .await
        .unwrap();

    assert_eq!((period.month, period.year), (3, 2025));
    assert_eq!(period.cba_base, 150_000.0);
    assert_eq!(period.cbt_base, 330_000.0);
    assert_eq!(period.label(), "marzo de 2025");
}

#[tokio::test]
async fn test_table_away_from_a1() {
    // Used range starts at B3
    let (_dir, source) = workbook(2, 1);
    let layout = SheetLayout {
        date_column: 1,
        cba_column: 2,
        cbt_column: 4,
        ..SheetLayout::default()
    };

    let period = load_reference(&source, &layout).await.unwrap();
    assert_eq!((period.month, period.year), (3, 2025));
    assert_eq!(period.cbt_base, 330_000.0);
}

#[tokio::test]
async fn test_swapped_basket_columns_fail_at_load() {
    let (_dir, source) = workbook(0, 0);
    let layout = SheetLayout {
        cba_column: 3,
        cbt_column: 1,
        ..SheetLayout::default()
    };
    let config = CalculatorConfig::default().with_layout(layout);

    let err = Calculator::load(&source, &config).await.unwrap_err();
    assert!(matches!(err, CalculatorError::ParseError(_)));
}

#[tokio::test]
async fn test_assess_with_loaded_period() {
    let (_dir, source) = workbook(0, 0);
    let calculator = Calculator::load(&source, &CalculatorConfig::default())
        .await
        .unwrap();

    let household = Household::new(Person::new(30, Sex::Male));
    let assessment = calculator
        .assess(Region::Cuyo, &household, 100_000.0, Perception::Unsure)
        .unwrap();

    // 0.945 of the March baskets for one adult equivalent
    assert_eq!(assessment.thresholds.poverty_line, 311_850.0);
    assert_eq!(assessment.thresholds.destitution_line, 141_750.0);
    assert_eq!(assessment.classification, Classification::Destitute);
}
