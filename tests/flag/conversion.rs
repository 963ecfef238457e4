use flag::{ConvertError, NumberMode, ParseOutcome, RangeError, Registry};

use super::diagnostic;

#[derive(Debug, Default, PartialEq)]
struct KeyValue {
    key: String,
    value: String,
}

fn key_value(text: &str) -> Result<KeyValue, ConvertError> {
    let invalid = || ConvertError::invalid("my_custom_type must be of format 'key:value'");
    let (key, value) = text.split_once(':').ok_or_else(invalid)?;
    if key.is_empty() || value.is_empty() {
        return Err(invalid());
    }
    Ok(KeyValue {
        key: key.to_owned(),
        value: value.to_owned(),
    })
}

#[test]
fn u8_accepts_255_rejects_256() {
    let mut n = 0u8;
    {
        let mut flags = Registry::new();
        flags.add(&mut n, "n", "").unwrap();
        assert_eq!(flags.try_parse(&["prog", "-n", "255"]), Ok(vec![]));
    }
    assert_eq!(n, 255);

    let mut m = 7u8;
    {
        let mut flags = Registry::new();
        flags.add(&mut m, "n", "").unwrap();
        let d = diagnostic(flags.try_parse(&["prog", "-n", "256"]));
        assert_eq!(d.outcome(), ParseOutcome::InvalidValue);
        assert_eq!(d.value(), Some("256"));
        assert_eq!(d.cause(), Some(&ConvertError::Range(RangeError::TooLarge)));
        assert_eq!(d.description(), Some("value too large"));
    }
    assert_eq!(m, 7);
}

#[test]
fn signed_range_errors() {
    let mut small = 0i8;
    let mut flags = Registry::new();
    flags.add(&mut small, "s", "").unwrap();
    let d = diagnostic(flags.try_parse(&["prog", "-s", "-129"]));
    assert_eq!(d.cause(), Some(&ConvertError::Range(RangeError::TooSmall)));
    let d = diagnostic(flags.try_parse(&["prog", "-s", "128"]));
    assert_eq!(d.cause(), Some(&ConvertError::Range(RangeError::TooLarge)));
}

#[test]
fn radix_detection() {
    let (mut hex, mut oct, mut dec) = (0i32, 0i32, 0u16);
    {
        let mut flags = Registry::new();
        flags.add(&mut hex, "x", "").unwrap();
        flags.add(&mut oct, "o", "").unwrap();
        flags.add(&mut dec, "d", "").unwrap();
        flags
            .try_parse(&["prog", "-x", "0x1F", "-o", "010", "-d", "  +42"])
            .unwrap();
    }
    assert_eq!((hex, oct, dec), (31, 8, 42));
}

#[test]
fn permissive_numbers_keep_the_prefix() {
    let (mut n, mut scale) = (1i64, 1.0f64);
    {
        let mut flags = Registry::new();
        flags.add(&mut n, "n", "").unwrap();
        flags.add(&mut scale, "scale", "").unwrap();
        flags
            .try_parse(&["prog", "-n", "12abc", "-scale", "2.5x"])
            .unwrap();
    }
    assert_eq!(n, 12);
    assert_eq!(scale, 2.5);

    let (mut n, mut scale) = (1i64, 1.0f32);
    {
        let mut flags = Registry::new();
        flags.add(&mut n, "n", "").unwrap();
        flags.add(&mut scale, "scale", "").unwrap();
        flags.try_parse(&["prog", "-n", "abc", "-scale", "abc"]).unwrap();
    }
    assert_eq!(n, 0);
    assert_eq!(scale, 0.0);
}

#[test]
fn strict_numbers_reject_garbage() {
    let mut n = 3i32;
    {
        let mut flags = Registry::new();
        flags.strict_numbers(true);
        flags.add(&mut n, "n", "").unwrap();
        let d = diagnostic(flags.try_parse(&["prog", "-n", "12abc"]));
        assert_eq!(d.outcome(), ParseOutcome::InvalidValue);
        assert_eq!(d.description(), Some("‘12abc’ is not a valid integer"));
    }
    assert_eq!(n, 3);
}

#[test]
fn unsigned_negative_wraps() {
    let (mut wide, mut narrow) = (0u64, 0u32);
    let mut flags = Registry::new();
    flags.add(&mut wide, "w", "").unwrap();
    flags.add(&mut narrow, "n", "").unwrap();
    flags.try_parse(&["prog", "-w", "-1"]).unwrap();
    let d = diagnostic(flags.try_parse(&["prog", "-n", "-1"]));
    assert_eq!(d.cause(), Some(&ConvertError::Range(RangeError::TooLarge)));
    drop(flags);
    assert_eq!(wide, u64::MAX);
}

#[test]
fn strings_are_raw() {
    let mut s = String::from("baz");
    {
        let mut flags = Registry::new();
        flags.add(&mut s, "bar", "").unwrap();
        flags.try_parse(&["prog", "-bar", "  a=b  "]).unwrap();
    }
    assert_eq!(s, "  a=b  ");
}

#[test]
fn custom_type_through_the_table() {
    let mut x = KeyValue::default();
    {
        let mut flags = Registry::new();
        flags.register_type(Some("key:value"), key_value);
        flags.add(&mut x, "x", "x").unwrap();
        assert_eq!(flags.flags()[0].value_name(), Some("key:value"));

        let d = diagnostic(flags.try_parse(&["prog", "-x", "nocolon"]));
        assert_eq!(d.outcome(), ParseOutcome::InvalidValue);
        assert_eq!(
            d.description(),
            Some("my_custom_type must be of format 'key:value'")
        );
        assert!(matches!(d.cause(), Some(ConvertError::Invalid(_))));

        flags.try_parse(&["prog", "-x=colour:blue"]).unwrap();
    }
    assert_eq!(
        x,
        KeyValue {
            key: "colour".to_owned(),
            value: "blue".to_owned()
        }
    );
}

#[test]
fn per_option_override_wins_over_table() {
    let mut level = 0u32;
    {
        let mut flags = Registry::new();
        flags
            .add_with(&mut level, "level", "", Some("level"), |text: &str| {
                match text {
                    "low" => Ok(1),
                    "high" => Ok(9),
                    _ => Err(ConvertError::invalid("expected low or high")),
                }
            })
            .unwrap();
        flags.try_parse(&["prog", "-level", "high"]).unwrap();
    }
    assert_eq!(level, 9);
}

#[test]
fn conversion_modes_are_exposed() {
    assert_eq!(
        flag::convert::convert_signed::<i16>("0x10", NumberMode::Strict),
        Ok(16)
    );
    assert!(flag::convert::convert_unsigned::<u8>("", NumberMode::Strict).is_err());
    assert_eq!(
        flag::convert::convert_unsigned::<u8>("", NumberMode::Permissive),
        Ok(0)
    );
}
