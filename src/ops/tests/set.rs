#[cfg(test)]
mod tests {
    use crate::{
        Mapping,
        ops::tests::{Quota, QuotaKey, abc, arb_small_map, entries, ordered},
        set,
    };
    use proptest::prelude::ProptestConfig;
    use proptest::proptest;

    #[test]
    fn set_adds_missing_key_at_the_end() {
        let m = abc();
        let result = set(&m, "d", 4);

        assert_eq!(
            ordered(&result),
            vec![("a", 1), ("b", 2), ("c", 3), ("d", 4)]
        );
        //元のマップは変わらないはず
        assert_eq!(m, abc());
    }

    #[test]
    fn set_replaces_existing_key_in_place() {
        let result = set(&abc(), "b", 20);

        assert_eq!(ordered(&result), vec![("a", 1), ("b", 20), ("c", 3)]);
    }

    #[test]
    fn set_on_record_field() {
        let quota = Quota {
            cpu: Some(1),
            memory: None,
            disk: None,
        };

        let result = set(&quota, QuotaKey::Memory, 256);

        assert_eq!(result.memory, Some(256));
        assert_eq!(result.cpu, Some(1));
        assert_eq!(quota.memory, None);
    }

    #[test]
    fn set_is_idempotent() {
        let once = set(&abc(), "z", 9);
        let twice = set(&once, "z", 9);

        assert_eq!(ordered(&once), ordered(&twice));
        assert_eq!(twice, entries(&[("a", 1), ("b", 2), ("c", 3), ("z", 9)]));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]
        #[test]
        fn random_test_set(map in arb_small_map(20), key in 0u8..40, value in -100i32..100) {
            let before = map.clone();
            let result = set(&map, key, value);

            assert_eq!(result.get(&key), Some(&value));
            assert_eq!(map, before, "input must not be modified");

            //他のキーは変わらないはず
            for (k, v) in Mapping::iter(&map) {
                if *k != key {
                    assert_eq!(result.get(k), Some(v));
                }
            }
        }
    }
}
