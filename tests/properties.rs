use bytesize::{Notation, Prefix, Size, Unit, UnitSystem};
use proptest::prelude::*;

fn notation() -> impl Strategy<Value = Notation> {
    prop_oneof![
        Just(Notation::BINARY),
        Just(Notation::from(Prefix::Jedec)),
        Just(Notation::DECIMAL),
    ]
}

#[test]
fn documented_examples() {
    assert_eq!(Size::new(40.0).bytes(), 40.0);
    assert_eq!(Size::new(10.04).bytes(), 10.0);
    assert_eq!(Size::new(10.09).bytes(), 10.125);

    assert_eq!(Size::from_kilobytes(1.5, UnitSystem::Binary).bytes(), 1536.0);
    assert_eq!(Size::from_kilobytes(1.5, UnitSystem::Decimal).bytes(), 1500.0);

    let kib = Size::with_notation(1536.0, (UnitSystem::Binary, Prefix::Iec));
    assert_eq!(kib.to_string(), "1.5 KiB");
    assert_eq!(Size::parse(&kib.to_string_with_precision(2)).unwrap(), kib);

    assert_eq!(Size::new(100.0), Size::new(100.05));
    assert_ne!(Size::new(100.0), Size::new(100.2));

    assert_eq!(Size::try_parse("5 XYZ"), Some(Size::from_bits(5.0, Notation::default())));
    assert_eq!(Size::try_parse("abc KiB"), None);

    let sum = Size::from_bytes(10.0, UnitSystem::Decimal) + Size::from_bytes(10.0, UnitSystem::Binary);
    assert_eq!(sum.unit_system(), UnitSystem::Decimal);
}

proptest! {
    /// Any whole number of bits survives construction unchanged.
    #[test]
    fn construction_is_lossless(bits in 0u64..(1u64 << 52)) {
        let bytes = bits as f64 / 8.0;
        prop_assert_eq!(Size::new(bytes).bytes(), bytes);
    }

    /// The stored magnitude is never more than half a bit away from the input.
    #[test]
    fn rounding_stays_within_half_a_bit(bytes in -1e12f64..1e12) {
        let stored = Size::new(bytes).bytes();
        prop_assert!((stored - bytes).abs() <= 0.0625 + 1e-9);
        prop_assert_eq!(stored % 0.125, 0.0);
    }

    /// Printing with enough precision and parsing back gives an equal size.
    #[test]
    fn text_round_trips(bits in 0u64..(1u64 << 40), n in notation()) {
        let size = Size::with_notation(bits as f64 / 8.0, n);
        let text = size.to_string_with_precision(12);
        let back = Size::parse_as(&text, n.system()).unwrap();
        prop_assert_eq!(back, size, "{}", text);
    }

    /// Negative sizes pick the same tier as their positive counterpart.
    #[test]
    fn negative_uses_same_tier(bytes in 0.125f64..1e15, n in notation()) {
        let pos = Size::with_notation(bytes, n);
        let neg = Size::with_notation(-bytes, n);
        prop_assert_eq!(pos.largest_unit(), neg.largest_unit());
        prop_assert_eq!(pos.largest_unit_symbol(), neg.largest_unit_symbol());
    }

    /// Reading a size back in the unit it was built from gives the
    /// bit-rounded input.
    #[test]
    fn unit_conversion_inverts(bits in 0u64..(1u64 << 40), n in notation()) {
        let size = Size::with_notation(bits as f64 / 8.0, n);
        for unit in Unit::ALL {
            let again = Size::from_unit(size.to_unit(unit), unit, n);
            prop_assert_eq!(again, size, "{:?}", unit);
        }
    }
}
