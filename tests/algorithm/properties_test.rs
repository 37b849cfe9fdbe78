use canasta::{Classification, ReferencePeriod, Region, Sex, Stratum, classify, equivalence, thresholds};
use proptest::prelude::*;

fn region() -> impl Strategy<Value = Region> {
    prop::sample::select(Region::ALL.to_vec())
}

fn sex() -> impl Strategy<Value = Sex> {
    prop_oneof![Just(Sex::Male), Just(Sex::Female)]
}

proptest! {
    #[test]
    fn thresholds_grow_with_units(
        region in region(),
        units in 0.0f64..30.0,
        extra in 0.0f64..10.0,
    ) {
        let period = ReferencePeriod::new(1, 2025, 150_000.0, 300_000.0).unwrap();
        let low = thresholds(region, units, &period).unwrap();
        let high = thresholds(region, units + extra, &period).unwrap();

        prop_assert!(high.poverty_line >= low.poverty_line);
        prop_assert!(high.destitution_line >= low.destitution_line);
        prop_assert!(low.destitution_line <= low.poverty_line);
    }

    #[test]
    fn thresholds_grow_with_baskets(
        region in region(),
        units in 0.0f64..30.0,
        cba in 0.0f64..1_000_000.0,
        raise in 0.0f64..500_000.0,
    ) {
        let low = ReferencePeriod::new(1, 2025, cba, cba * 2.0).unwrap();
        let high = ReferencePeriod::new(1, 2025, cba + raise, (cba + raise) * 2.0).unwrap();

        let low = thresholds(region, units, &low).unwrap();
        let high = thresholds(region, units, &high).unwrap();
        prop_assert!(high.poverty_line >= low.poverty_line);
        prop_assert!(high.destitution_line >= low.destitution_line);
    }

    #[test]
    fn equivalence_is_defined_for_all_ages(age in 0i64..=120, sex in sex()) {
        let factor = equivalence(age, sex).unwrap();
        prop_assert!(factor >= 0.0);
        prop_assert!(factor <= 1.1);
    }

    #[test]
    fn equivalence_rejects_negative_ages(age in i64::MIN..0, sex in sex()) {
        prop_assert!(equivalence(age, sex).is_err());
    }

    #[test]
    fn classification_partitions_income(
        destitution in 0.0f64..1_000_000.0,
        spread in 0.0f64..1_000_000.0,
        income in 0.0f64..20_000_000.0,
    ) {
        let poverty = destitution + spread;
        let class = classify(income, poverty, destitution).unwrap();

        let expected = if income < destitution {
            Classification::Destitute
        } else if income < poverty {
            Classification::Poor
        } else if income <= 1.25 * poverty {
            Classification::NotPoor(Stratum::Fragile)
        } else if income <= 4.0 * poverty {
            Classification::NotPoor(Stratum::MiddleClass)
        } else {
            Classification::NotPoor(Stratum::Affluent)
        };
        prop_assert_eq!(class, expected);
    }

    #[test]
    fn lower_bounds_are_closed(destitution in 1.0f64..1_000_000.0, spread in 1.0f64..1_000_000.0) {
        let poverty = destitution + spread;
        prop_assert_eq!(classify(destitution, poverty, destitution).unwrap(), Classification::Poor);
        prop_assert_eq!(
            classify(poverty, poverty, destitution).unwrap(),
            Classification::NotPoor(Stratum::Fragile)
        );
    }
}
