use canasta::algorithm::thresholds::regional_baskets;
use canasta::{
    Calculator, Classification, Perception, PerceptionOutcome, Region, Stratum, classify, gap,
    thresholds,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::utils::{example_household, random_household, reference_period};

#[test]
fn test_worked_example_poor_household() {
    let household = example_household();
    assert!((household.equivalence_units() - 2.5).abs() < 1e-9);

    let lines = thresholds(
        Region::GranBuenosAires,
        household.equivalence_units(),
        &reference_period(),
    )
    .unwrap();
    assert!((lines.poverty_line - 750_000.0).abs() < 1e-6);
    assert!((lines.destitution_line - 375_000.0).abs() < 1e-6);

    let classification = classify(400_000.0, lines.poverty_line, lines.destitution_line).unwrap();
    assert_eq!(classification, Classification::Poor);

    let deficit = gap(400_000.0, lines.poverty_line);
    assert!((deficit.nominal + 350_000.0).abs() < 1e-6);
    assert_eq!(format!("{:.1}", deficit.percent.unwrap()), "-46.7");

    let surplus = gap(400_000.0, lines.destitution_line);
    assert!((surplus.nominal - 25_000.0).abs() < 1e-6);
    assert_eq!(format!("{:.1}", surplus.percent.unwrap()), "6.7");
}

#[test]
fn test_worked_example_affluent_household() {
    let classification = classify(3_200_000.0, 750_000.0, 375_000.0).unwrap();
    assert_eq!(classification, Classification::NotPoor(Stratum::Affluent));
}

#[test]
fn test_lines_scale_with_region() {
    let period = reference_period();
    let household = example_household();
    let base = thresholds(Region::GranBuenosAires, household.equivalence_units(), &period).unwrap();

    for region in Region::ALL {
        let baskets = regional_baskets(region, &period);
        let lines = thresholds(region, household.equivalence_units(), &period).unwrap();

        assert!((lines.poverty_line - baskets.cbt * 2.5).abs() < 1e-6);
        assert!((lines.destitution_line - baskets.cba * 2.5).abs() < 1e-6);
        assert!(lines.destitution_line <= lines.poverty_line);
        match region {
            Region::Patagonia => assert!(lines.poverty_line > base.poverty_line),
            Region::GranBuenosAires => assert_eq!(lines, base),
            _ => assert!(lines.poverty_line < base.poverty_line),
        }
    }
}

#[test]
fn test_same_income_classifies_differently_by_region() {
    // 720,000 is poor in Patagonia (line 863,250) but not in the Noroeste (603,000)
    let calculator = Calculator::new(reference_period());
    let household = example_household();

    let south = calculator
        .assess(Region::Patagonia, &household, 720_000.0, Perception::BelowLine)
        .unwrap();
    let north = calculator
        .assess(Region::Noroeste, &household, 720_000.0, Perception::BelowLine)
        .unwrap();

    assert_eq!(south.classification, Classification::Poor);
    assert_eq!(south.perception_outcome, PerceptionOutcome::MatchesVulnerability);
    assert_eq!(north.classification, Classification::NotPoor(Stratum::Fragile));
    assert_eq!(north.perception_outcome, PerceptionOutcome::Differs);
}

#[test]
fn test_repeated_assessments_are_identical() {
    let calculator = Calculator::new(reference_period());
    let mut rng = StdRng::seed_from_u64(2025);

    for _ in 0..50 {
        let household = random_household(&mut rng);
        for region in Region::ALL {
            let first = calculator
                .assess(region, &household, 900_000.0, Perception::Unsure)
                .unwrap();
            let second = calculator
                .assess(region, &household, 900_000.0, Perception::Unsure)
                .unwrap();
            assert_eq!(first, second);
        }
    }
}
