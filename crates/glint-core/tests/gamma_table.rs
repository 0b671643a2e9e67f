use glint_core::gamma::table::MAX_TABLE_LEN;
use glint_core::{GammaTable, GlintError};

#[test]
fn tables_are_monotonic_for_common_gammas() {
    for gamma in [0.25f32, 0.5, 1.0, 1.8, 2.2, 2.8, 4.0, 16.0] {
        let t = GammaTable::with_gamma(gamma).unwrap();
        assert!(t.len() >= 4, "gamma={gamma} len={}", t.len());
        assert!(t.len() <= MAX_TABLE_LEN);
        for w in t.as_slice().windows(2) {
            assert!(w[0] <= w[1], "gamma={gamma} not monotonic");
        }
        assert_eq!(t[0], 0);
    }
}

#[test]
fn lookups_clamp_both_ends() {
    let t = GammaTable::with_gamma(2.2).unwrap();
    let last = *t.as_slice().last().unwrap();
    assert_eq!(t.get(-5.0), t[0]);
    assert_eq!(t.get(1.0), last);
    assert_eq!(t.get(42.0), last);
    assert_eq!(t.get(f32::NAN), t[0]);
}

#[test]
fn narrowed_range_stays_inside_bounds() {
    let t = GammaTable::new(2.0, 16, 32).unwrap();
    assert!(t.as_slice().iter().all(|&b| (16..=32).contains(&b)));
    assert_eq!(t.get(0.0), 16);
    assert_eq!(t.get(1.0), 32);
}

#[test]
fn higher_gamma_darkens_midtones() {
    let lin = GammaTable::with_gamma(1.0).unwrap();
    let srgb = GammaTable::with_gamma(2.2).unwrap();
    assert_eq!(lin.get(0.5), 128);
    assert!(srgb.get(0.5) < lin.get(0.5));
}

#[test]
fn bad_parameters_fail_fast() {
    for g in [0.0f32, -2.0, f32::NAN, f32::INFINITY] {
        let e = GammaTable::with_gamma(g).unwrap_err();
        assert!(matches!(e, GlintError::InvalidParameter(_)), "gamma={g}");
    }
    assert!(GammaTable::new(2.0, 9, 8).is_err());
}

#[test]
fn table_id_is_parameter_sensitive() {
    let a = GammaTable::with_gamma(2.2).unwrap();
    let b = GammaTable::with_gamma(2.2).unwrap();
    let c = GammaTable::new(2.2, 0, 254).unwrap();
    assert_eq!(a.id_hex(), b.id_hex());
    assert_ne!(a.id_hex(), c.id_hex());
    assert_eq!(a.id_hex().len(), 32);
}
