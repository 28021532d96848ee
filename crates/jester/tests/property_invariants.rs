use jester::{codec, Data, Key, Map, Value};
use proptest::prelude::*;

fn arb_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        any::<u64>().prop_map(Value::from),
        (-1.0e12f64..1.0e12).prop_map(Value::from),
        "[a-zA-Z0-9 _\"\\\\/\n]{0,12}".prop_map(Value::from),
    ];
    leaf.prop_recursive(4, 64, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::from),
            prop::collection::vec(("[a-z]{1,6}", inner), 0..6)
                .prop_map(|entries| Value::from(entries.into_iter().collect::<Map>())),
        ]
    })
}

fn arb_key() -> impl Strategy<Value = Key> {
    prop_oneof![
        "[a-z]{1,4}".prop_map(Key::from),
        (0i64..4).prop_map(Key::Index),
    ]
}

proptest! {
    #[test]
    fn round_trip_preserves_structure(value in arb_value()) {
        let doc = Data::new(value);
        let text = codec::to_vec(&doc).unwrap();
        let back = codec::from_slice(&text).unwrap();
        prop_assert_eq!(back, doc);
    }

    #[test]
    fn missing_paths_fail_every_strict_accessor(
        value in arb_value(),
        tail in prop::collection::vec(arb_key(), 0..4),
        default in any::<i64>(),
    ) {
        let doc = Data::new(value);
        let mut path = vec![Key::from("\u{0}absent")];
        path.extend(tail);
        let miss = doc.get(&path);

        prop_assert!(miss.is_null());
        prop_assert!(miss.bool().is_err());
        prop_assert!(miss.string().is_err());
        prop_assert!(miss.bytes().is_err());
        prop_assert!(miss.int().is_err());
        prop_assert!(miss.int64().is_err());
        prop_assert!(miss.uint64().is_err());
        prop_assert!(miss.float64().is_err());
        prop_assert!(miss.string_array().is_err());
        prop_assert!(miss.array().is_err());
        prop_assert!(miss.object().is_err());
        prop_assert_eq!(miss.int64_or(default), default);
        prop_assert_eq!(miss.string_or("dflt".into()), "dflt");
    }

    #[test]
    fn empty_path_write_replaces_root(before in arb_value(), after in arb_value()) {
        let mut doc = Data::new(before);
        doc.set_path(Vec::<Key>::new(), after.clone());
        prop_assert_eq!(doc.raw(), &after);
    }

    #[test]
    fn set_path_on_empty_object_is_readable(
        path in prop::collection::vec(arb_key(), 1..6),
        leaf in "[a-z]{0,8}",
    ) {
        let mut doc = Data::empty();
        doc.set_path(&path, leaf.as_str());
        prop_assert_eq!(doc.get(&path).string().unwrap(), leaf);
    }

    #[test]
    fn string_array_is_all_or_nothing(
        items in prop::collection::vec(prop::option::of("[a-z]{0,4}"), 0..8),
        intruder in prop::option::of((any::<usize>(), any::<i32>())),
    ) {
        let mut values: Vec<Value> = items.iter().cloned().map(Value::from).collect();
        let expected: Vec<String> = items.into_iter().map(Option::unwrap_or_default).collect();

        match intruder {
            None => {
                let got = Data::new(values).string_array().unwrap();
                prop_assert_eq!(got, expected);
            }
            Some((pos, n)) => {
                let pos = pos % (values.len() + 1);
                values.insert(pos, Value::from(n));
                prop_assert!(Data::new(values).string_array().is_err());
            }
        }
    }

    #[test]
    fn int_is_int64_narrowed(n in any::<i64>(), f in -1.0e15f64..1.0e15) {
        for doc in [Data::new(n), Data::new(f)] {
            prop_assert_eq!(doc.int().unwrap(), doc.int64().unwrap() as isize);
        }
        prop_assert_eq!(Data::new(f).int64().unwrap(), f.trunc() as i64);
    }
}
