use std::cell::Cell;

use optval::Optional;
use proptest::option;
use proptest::prelude::any;

proptest::proptest! {
    #[test]
    fn optional_new_matches_flag(v: i64, valid: bool) {
        let o = Optional::new(v, valid);
        if valid {
            assert_eq!(o, Optional::some(v));
            assert_eq!(o.unwrap(), (v, true));
        } else {
            assert_eq!(o, Optional::none());
            assert_eq!(o.unwrap(), (0, false));
        }
    }

    #[test]
    fn optional_map_identity(v: String) {
        let o = Optional::some(v.clone());
        assert_eq!(o.map(|x| x), Optional::some(v));
    }

    #[test]
    fn optional_or_consistent(a in option::of(any::<u32>()), b in option::of(any::<u32>())) {
        let oa: Optional<u32> = a.into();
        let ob: Optional<u32> = b.into();

        assert_eq!(oa.or(ob).into_option(), a.or(b));
        assert_eq!(oa.or_some(7), a.unwrap_or(7));
        assert_eq!(oa.or_default(), a.unwrap_or_default());
    }

    #[test]
    fn optional_or_else_consistent(a in option::of(any::<u32>()), fb in option::of(any::<u32>())) {
        let calls = Cell::new(0);
        let oa: Optional<u32> = a.into();
        let r = oa.or_else(|| {
            calls.set(calls.get() + 1);
            fb.into()
        });

        assert_eq!(r.into_option(), a.or(fb));
        assert_eq!(calls.get(), usize::from(a.is_none()));
    }

    #[test]
    fn optional_mutations_consistent(init in option::of(any::<u8>()), ops in proptest::collection::vec(option::of(any::<u8>()), 0..64)) {
        // Model each mutation against std Option: Some(v) is replace, None is take.
        let mut model = init;
        let mut x: Optional<u8> = init.into();

        for op in ops {
            match op {
                Some(v) => {
                    assert_eq!(x.replace(v).into_option(), model.replace(v));
                }
                None => {
                    assert_eq!(x.take().into_option(), model.take());
                }
            }
            assert_eq!(x.into_option(), model);
            assert_eq!(x.is_some(), model.is_some());
        }

        x.reset();
        assert!(x.is_none());
        assert_eq!(x.unwrap(), (0, false));
    }
}
