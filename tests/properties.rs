// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

// Distribution-level identities checked for every registered family at one
// representative parameter set: CDF range and monotonicity, tail complement,
// quantile round trips, log-scale consistency and density normalisation. The
// normal mixture sits outside the registry and gets the same checks directly.

mod util;

mod property_tests {
    use super::util::{dense, linspace, midpoints};
    use dist_kernels::distributions::registry::DistributionKind;
    use dist_kernels::distributions::shared::broadcast::Column;
    use dist_kernels::distributions::univariate::normal_mixture::{
        normal_mixture_cdf, normal_mixture_pdf, ComponentRows,
    };

    struct Case {
        kind: DistributionKind,
        params: &'static [f64],
        /// x range for CDF scans, reaching past the support on both sides
        scan: (f64, f64),
        /// Integration range for continuous families, summation range for discrete ones
        mass: (f64, f64),
        discrete: bool,
    }

    const CASES: [Case; 8] = [
        Case {
            kind: DistributionKind::DiscreteUniform,
            params: &[-2.0, 5.0],
            scan: (-4.0, 7.0),
            mass: (-2.0, 5.0),
            discrete: true,
        },
        Case {
            kind: DistributionKind::DiscreteWeibull,
            params: &[0.8, 1.2],
            scan: (-1.0, 30.0),
            mass: (0.0, 2000.0),
            discrete: true,
        },
        Case {
            kind: DistributionKind::Gompertz,
            params: &[0.5, 1.0],
            scan: (-1.0, 6.0),
            mass: (0.0, 8.0),
            discrete: false,
        },
        Case {
            kind: DistributionKind::Gumbel,
            params: &[0.5, 2.0],
            scan: (-10.0, 20.0),
            mass: (-20.0, 70.0),
            discrete: false,
        },
        Case {
            kind: DistributionKind::Kumaraswamy,
            params: &[2.0, 3.0],
            scan: (-0.5, 1.5),
            mass: (0.0, 1.0),
            discrete: false,
        },
        Case {
            kind: DistributionKind::Lomax,
            params: &[1.0, 3.0],
            scan: (-1.0, 50.0),
            mass: (0.0, 1000.0),
            discrete: false,
        },
        Case {
            kind: DistributionKind::Power,
            params: &[2.0, 2.0],
            scan: (-1.0, 3.0),
            mass: (0.0, 2.0),
            discrete: false,
        },
        Case {
            kind: DistributionKind::TruncatedNormal,
            params: &[1.0, 2.0, -1.0, 4.0],
            scan: (-3.0, 6.0),
            mass: (-1.0, 4.0),
            discrete: false,
        },
    ];

    fn columns(params: &'static [f64]) -> Vec<Column<'static>> {
        params.iter().map(|v| Column::from(core::slice::from_ref(v))).collect()
    }

    #[test]
    fn cdf_in_unit_interval_and_non_decreasing() {
        for case in &CASES {
            let theta = columns(case.params);
            let x = linspace(case.scan.0, case.scan.1, 401);
            let f = dense(&case.kind.cumulative(Column::from(&x), &theta, true, false).unwrap());
            let s = dense(&case.kind.cumulative(Column::from(&x), &theta, false, false).unwrap());
            for i in 0..x.len() {
                assert!((0.0..=1.0).contains(&f[i]), "{}: F({}) = {}", case.kind, x[i], f[i]);
                assert!(
                    (f[i] + s[i] - 1.0).abs() < 1e-12,
                    "{}: F + S at {} = {}",
                    case.kind,
                    x[i],
                    f[i] + s[i]
                );
                if i > 0 {
                    assert!(f[i] >= f[i - 1], "{}: F decreases at {}", case.kind, x[i]);
                }
            }
            assert!(f[0] < 1e-12, "{}: F at scan start {}", case.kind, f[0]);
        }
    }

    #[test]
    fn quantile_round_trip_continuous() {
        let p = [0.001, 0.01, 0.1, 0.3, 0.5, 0.7, 0.9, 0.99, 0.999];
        for case in CASES.iter().filter(|c| !c.discrete) {
            let theta = columns(case.params);
            for lower_tail in [true, false] {
                let q = dense(
                    &case
                        .kind
                        .quantile(Column::from(&p), &theta, lower_tail, false)
                        .unwrap(),
                );
                let back = dense(
                    &case
                        .kind
                        .cumulative(Column::from(&q), &theta, lower_tail, false)
                        .unwrap(),
                );
                for (pi, bi) in p.iter().zip(back.iter()) {
                    assert!(
                        (pi - bi).abs() < 1e-6,
                        "{} (lower_tail = {lower_tail}): p {pi} -> {bi}",
                        case.kind
                    );
                }
            }
        }
    }

    #[test]
    fn quantile_is_smallest_x_reaching_p_discrete() {
        let p = [0.05, 0.33, 0.61, 0.87];
        for case in CASES.iter().filter(|c| c.discrete) {
            let theta = columns(case.params);
            let q = dense(&case.kind.quantile(Column::from(&p), &theta, true, false).unwrap());
            let below: Vec<f64> = q.iter().map(|v| v - 1.0).collect();
            let at = dense(&case.kind.cumulative(Column::from(&q), &theta, true, false).unwrap());
            let before =
                dense(&case.kind.cumulative(Column::from(&below), &theta, true, false).unwrap());
            for i in 0..p.len() {
                assert_eq!(q[i], q[i].floor(), "{}: non-integral quantile", case.kind);
                assert!(at[i] >= p[i], "{}: F(Q({})) = {}", case.kind, p[i], at[i]);
                assert!(before[i] < p[i], "{}: F(Q({}) - 1) = {}", case.kind, p[i], before[i]);
            }
        }
    }

    #[test]
    fn log_scale_matches_natural_scale() {
        for case in &CASES {
            let theta = columns(case.params);
            let x = linspace(case.scan.0, case.scan.1, 97);
            let d = dense(&case.kind.density(Column::from(&x), &theta, false).unwrap());
            let ld = dense(&case.kind.density(Column::from(&x), &theta, true).unwrap());
            let f = dense(&case.kind.cumulative(Column::from(&x), &theta, true, false).unwrap());
            let lf = dense(&case.kind.cumulative(Column::from(&x), &theta, true, true).unwrap());
            let s = dense(&case.kind.cumulative(Column::from(&x), &theta, false, false).unwrap());
            let ls = dense(&case.kind.cumulative(Column::from(&x), &theta, false, true).unwrap());
            for i in 0..x.len() {
                for (v, lv, what) in [(d[i], ld[i], "density"), (f[i], lf[i], "cdf"), (s[i], ls[i], "sf")] {
                    if v > 1e-200 {
                        assert!(
                            (v.ln() - lv).abs() < 1e-9,
                            "{} {what} at {}: ln {} vs {}",
                            case.kind,
                            x[i],
                            v.ln(),
                            lv
                        );
                    } else if v == 0.0 {
                        assert_eq!(lv, f64::NEG_INFINITY, "{} {what} at {}", case.kind, x[i]);
                    }
                }
            }
        }
    }

    #[test]
    fn log_probability_quantile_input() {
        let p = [0.2, 0.5, 0.8];
        let log_p: Vec<f64> = p.iter().map(|v: &f64| v.ln()).collect();
        for case in CASES.iter().filter(|c| !c.discrete) {
            let theta = columns(case.params);
            for lower_tail in [true, false] {
                let a = dense(&case.kind.quantile(Column::from(&p), &theta, lower_tail, false).unwrap());
                let b = dense(
                    &case
                        .kind
                        .quantile(Column::from(&log_p), &theta, lower_tail, true)
                        .unwrap(),
                );
                for (ai, bi) in a.iter().zip(b.iter()) {
                    assert!((ai - bi).abs() < 1e-9 * ai.abs().max(1.0), "{}", case.kind);
                }
            }
        }
    }

    #[test]
    fn density_normalises() {
        for case in &CASES {
            let theta = columns(case.params);
            let total = if case.discrete {
                let x: Vec<f64> = (case.mass.0 as i64..=case.mass.1 as i64)
                    .map(|k| k as f64)
                    .collect();
                dense(&case.kind.density(Column::from(&x), &theta, false).unwrap())
                    .iter()
                    .sum::<f64>()
            } else {
                let cells = if case.kind == DistributionKind::Lomax {
                    1_000_000
                } else {
                    200_000
                };
                let (x, h) = midpoints(case.mass.0, case.mass.1, cells);
                dense(&case.kind.density(Column::from(&x), &theta, false).unwrap())
                    .iter()
                    .sum::<f64>()
                    * h
            };
            assert!((total - 1.0).abs() < 1e-4, "{}: total mass {total}", case.kind);
        }
    }

    const MIX_MU: [f64; 2] = [-2.0, 3.0];
    const MIX_SIGMA: [f64; 2] = [1.0, 0.5];
    const MIX_ALPHA: [f64; 2] = [1.0, 3.0];

    fn mixture_cdf(x: &[f64], lower_tail: bool, log_prob: bool) -> Vec<f64> {
        dense(
            &normal_mixture_cdf(
                x,
                ComponentRows::single_row(&MIX_MU).unwrap(),
                ComponentRows::single_row(&MIX_SIGMA).unwrap(),
                ComponentRows::single_row(&MIX_ALPHA).unwrap(),
                lower_tail,
                log_prob,
            )
            .unwrap(),
        )
    }

    #[test]
    fn mixture_cdf_bounded_monotone_and_complementary() {
        let x = linspace(-10.0, 10.0, 401);
        let f = mixture_cdf(&x, true, false);
        let s = mixture_cdf(&x, false, false);
        let lf = mixture_cdf(&x, true, true);
        let ls = mixture_cdf(&x, false, true);
        for i in 0..x.len() {
            assert!((0.0..=1.0).contains(&f[i]), "mixture: F({}) = {}", x[i], f[i]);
            assert!((0.0..=1.0).contains(&s[i]), "mixture: S({}) = {}", x[i], s[i]);
            assert!((f[i] + s[i] - 1.0).abs() < 1e-12, "mixture: F + S at {} = {}", x[i], f[i] + s[i]);
            if i > 0 {
                assert!(f[i] >= f[i - 1], "mixture: F decreases at {}", x[i]);
                assert!(s[i] <= s[i - 1], "mixture: S increases at {}", x[i]);
            }
            for (v, lv) in [(f[i], lf[i]), (s[i], ls[i])] {
                if v > 1e-200 {
                    assert!((v.ln() - lv).abs() < 1e-9, "mixture at {}: ln {} vs {}", x[i], v.ln(), lv);
                }
            }
        }
        assert!(f[0] < 1e-12, "mixture: F at scan start {}", f[0]);
        assert!(s[x.len() - 1] < 1e-12, "mixture: S at scan end {}", s[x.len() - 1]);
    }

    #[test]
    fn mixture_density_normalises() {
        let (x, h) = midpoints(-15.0, 15.0, 200_000);
        let total = dense(
            &normal_mixture_pdf(
                &x,
                ComponentRows::single_row(&MIX_MU).unwrap(),
                ComponentRows::single_row(&MIX_SIGMA).unwrap(),
                ComponentRows::single_row(&MIX_ALPHA).unwrap(),
                false,
            )
            .unwrap(),
        )
        .iter()
        .sum::<f64>()
            * h;
        assert!((total - 1.0).abs() < 1e-4, "mixture: total mass {total}");
    }
}
