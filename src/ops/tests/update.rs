#[cfg(test)]
mod tests {
    use crate::{
        change,
        ops::tests::{Quota, QuotaKey, abc, arb_small_map, ordered},
        update,
    };
    use proptest::prelude::ProptestConfig;
    use proptest::proptest;
    use std::cell::Cell;

    #[test]
    fn update_existing_key() {
        let result = update(&abc(), "b", |v| v.map(|v| v * 10));

        assert_eq!(ordered(&result), vec![("a", 1), ("b", 20), ("c", 3)]);
    }

    #[test]
    fn update_receives_none_for_missing_key_and_inserts() {
        let result = update(&abc(), "d", |v| {
            assert_eq!(v, None);
            Some(4)
        });

        assert_eq!(
            ordered(&result),
            vec![("a", 1), ("b", 2), ("c", 3), ("d", 4)]
        );
    }

    #[test]
    fn update_returning_none_deletes() {
        let m = abc();
        let result = update(&m, "a", |_| None);

        assert_eq!(ordered(&result), vec![("b", 2), ("c", 3)]);
        assert_eq!(m, abc());
    }

    #[test]
    fn update_missing_key_returning_none_is_a_no_op() {
        let result = update(&abc(), "z", |_| None);

        assert_eq!(ordered(&result), ordered(&abc()));
    }

    #[test]
    fn update_record_field() {
        let quota = Quota {
            cpu: Some(1),
            memory: None,
            disk: Some(10),
        };

        let result = update(&quota, QuotaKey::Memory, |v| Some(v.copied().unwrap_or(0) + 64));
        let result = update(&result, QuotaKey::Disk, |_| None);

        assert_eq!(
            result,
            Quota {
                cpu: Some(1),
                memory: Some(64),
                disk: None,
            }
        );
    }

    #[test]
    fn change_existing_key() {
        let result = change(&abc(), "c", |v| v + 1);

        assert_eq!(ordered(&result), vec![("a", 1), ("b", 2), ("c", 4)]);
    }

    #[test]
    fn change_missing_key_does_not_call_updater() {
        let called = Cell::new(false);
        let m = abc();

        let result = change(&m, "z", |v| {
            called.set(true);
            *v
        });

        assert!(!called.get());
        assert_eq!(ordered(&result), ordered(&m));
    }

    #[test]
    fn change_absent_record_field_is_a_no_op() {
        let quota = Quota {
            cpu: Some(1),
            memory: None,
            disk: None,
        };

        let result = change(&quota, QuotaKey::Memory, |v| v * 2);

        assert_eq!(result, quota);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]
        #[test]
        fn random_test_update_identity(map in arb_small_map(20), key in 0u8..40) {
            //値をそのまま返すupdaterは何も変えないはず
            let result = update(&map, key, |v| v.copied());
            assert_eq!(ordered(&result), ordered(&map));
        }
    }
}
