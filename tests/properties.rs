use proptest::prelude::*;
use sizeconv::{FormatOptions, Unit, best_unit, convert, format_size};

fn any_unit() -> impl Strategy<Value = Unit> {
    (0usize..Unit::ALL.len()).prop_map(|index| Unit::ALL[index])
}

proptest! {
    #[test]
    fn conversion_round_trips(size in 0.0f64..1e15, from in any_unit(), to in any_unit()) {
        let there = convert(size, from, to).unwrap();
        let back = convert(there, to, from).unwrap();
        prop_assert!((back - size).abs() <= size * 1e-12);
    }

    #[test]
    fn bytes_to_kilobytes_divides_by_1024(size in 0.0f64..1e15) {
        prop_assert_eq!(convert(size, Unit::Bytes, Unit::Kilobytes).unwrap(), size / 1024.0);
    }

    #[test]
    fn best_unit_scales_into_range(bytes in 0.0f64..1e18) {
        let (size, unit) = best_unit(bytes).unwrap();
        match unit {
            Unit::Bytes => prop_assert!(size < 1024.0),
            Unit::Petabytes => prop_assert!(size >= 1.0),
            _ => prop_assert!((1.0..1024.0).contains(&size)),
        }
        prop_assert_eq!(convert(size, unit, Unit::Bytes).unwrap(), bytes);
    }

    #[test]
    fn formatted_size_has_requested_precision(size in -1e9f64..1e9, places in 0usize..8, unit in any_unit()) {
        let options = FormatOptions::default().with_decimal_places(places);
        let rendered = format_size(size, unit, &options);
        let (number, suffix) = rendered.split_once(' ').unwrap();
        prop_assert_eq!(suffix, unit.suffix());
        let fraction = number.split_once('.').map(|(_, digits)| digits.len()).unwrap_or(0);
        prop_assert_eq!(fraction, places);
    }
}
