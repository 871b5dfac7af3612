#![allow(clippy::float_cmp)]

use super::*;

const ALL: [Ease; 17] = [
    Ease::Linear,
    Ease::Power1In,
    Ease::Power1Out,
    Ease::Power1InOut,
    Ease::Power2In,
    Ease::Power2Out,
    Ease::Power2InOut,
    Ease::Power3In,
    Ease::Power3Out,
    Ease::Power3InOut,
    Ease::Power4In,
    Ease::Power4Out,
    Ease::Power4InOut,
    Ease::SineIn,
    Ease::SineOut,
    Ease::SineInOut,
    Ease::BackOut,
];

#[test]
fn every_ease_pins_its_endpoints() {
    for ease in ALL {
        assert!(ease.apply(0.0).abs() < 1e-12, "{ease} at 0");
        assert!((ease.apply(1.0) - 1.0).abs() < 1e-12, "{ease} at 1");
    }
}

#[test]
fn input_is_clamped() {
    assert_eq!(Ease::Power2Out.apply(-3.0), 0.0);
    assert_eq!(Ease::Power2Out.apply(7.0), 1.0);
    assert_eq!(Ease::Linear.apply(f64::NAN), 0.0);
}

#[test]
fn power2_out_front_loads_motion() {
    assert_eq!(Ease::Power2Out.apply(0.5), 0.875);
    assert_eq!(Ease::Power2In.apply(0.5), 0.125);
    assert_eq!(Ease::Power2InOut.apply(0.5), 0.5);
}

#[test]
fn back_out_overshoots_before_settling() {
    let peak = (1..100)
        .map(|i| Ease::BackOut.apply(f64::from(i) / 100.0))
        .fold(f64::MIN, f64::max);
    assert!(peak > 1.0);
}

#[test]
fn non_overshooting_eases_are_monotonic() {
    for ease in ALL.into_iter().filter(|e| *e != Ease::BackOut) {
        let mut prev = 0.0;
        for i in 1..=50 {
            let value = ease.apply(f64::from(i) / 50.0);
            assert!(value >= prev - 1e-12, "{ease} decreased at step {i}");
            prev = value;
        }
    }
}

#[test]
fn parses_gsap_names() {
    assert_eq!("power2.out".parse::<Ease>(), Ok(Ease::Power2Out));
    assert_eq!("power2.in".parse::<Ease>(), Ok(Ease::Power2In));
    assert_eq!("sine.inOut".parse::<Ease>(), Ok(Ease::SineInOut));
    assert_eq!("none".parse::<Ease>(), Ok(Ease::Linear));
    assert_eq!(" power3 ".parse::<Ease>(), Ok(Ease::Power3Out));
}

#[test]
fn rejects_unknown_names() {
    let err = "elastic.out".parse::<Ease>().unwrap_err();
    assert_eq!(err.name, "elastic.out");
    assert!("power2.sideways".parse::<Ease>().is_err());
}

#[test]
fn names_round_trip_through_parse() {
    for ease in ALL {
        assert_eq!(ease.name().parse::<Ease>(), Ok(ease));
    }
}

#[test]
fn serde_uses_gsap_names() {
    let json = serde_json::to_string(&Ease::Power2InOut).unwrap();
    assert_eq!(json, "\"power2.inOut\"");
    let parsed: Ease = serde_json::from_str("\"back.out\"").unwrap();
    assert_eq!(parsed, Ease::BackOut);
    assert!(serde_json::from_str::<Ease>("\"bounce\"").is_err());
}

#[test]
fn default_is_power2_out() {
    assert_eq!(Ease::default(), Ease::Power2Out);
}
