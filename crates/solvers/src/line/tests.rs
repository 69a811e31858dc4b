use super::*;

use approx::assert_relative_eq;

fn parabola(x: f64) -> f64 {
    x * (2.0 * x - 3.0)
}

fn assert_bracket(bracket: &Bracket, expected: [f64; 3]) {
    let [a, m, b] = bracket.points();
    assert_relative_eq!(a.x, expected[0], epsilon = 1e-9);
    assert_relative_eq!(m.x, expected[1], epsilon = 1e-9);
    assert_relative_eq!(b.x, expected[2], epsilon = 1e-9);
}

#[test]
fn sven_expands_toward_the_right() {
    let g = |x: f64| (100.0 - x).powi(2);

    let bracket = sven(&g, 30.0, 5.0, 100).expect("should bracket");

    assert_bracket(&bracket, [65.0, 105.0, 145.0]);
    assert!(bracket.is_unimodal());
}

#[test]
fn sven_expands_toward_the_left_and_orders_the_result() {
    let bracket = sven(&parabola, 3.5, 0.1, 100).expect("should bracket");

    assert_bracket(&bracket, [-1.2, 0.4, 2.0]);
    assert!(bracket.contains(0.75));
}

#[test]
fn sven_ignores_the_sign_of_the_step() {
    let forward = sven(&parabola, 3.5, 0.1, 100).expect("should bracket");
    let backward = sven(&parabola, 3.5, -0.1, 100).expect("should bracket");

    assert_eq!(forward, backward);
}

#[test]
fn sven_returns_the_probes_when_already_centered() {
    let g = |x: f64| x * x;

    let bracket = sven(&g, 0.0, 1.0, 100).expect("should bracket");

    assert_bracket(&bracket, [-1.0, 0.0, 1.0]);
}

#[test]
fn sven_rejects_a_local_maximum() {
    let g = |x: f64| -x * x;

    let result = sven(&g, 0.0, 0.5, 100);

    let Err(Error::NotUnimodal {
        left,
        center,
        right,
    }) = result
    else {
        panic!("expected NotUnimodal, got {result:?}");
    };
    assert_relative_eq!(left.x, -0.5);
    assert_relative_eq!(center.x, 0.0);
    assert_relative_eq!(right.x, 0.5);
}

#[test]
fn sven_gives_up_on_an_unbounded_descent() {
    let g = |x: f64| -x;

    let result = sven(&g, 0.0, 0.1, 10);

    assert_eq!(
        result,
        Err(Error::NoConvergence {
            phase: Phase::Bracketing,
            iters: 10
        })
    );
}

#[test]
fn refiners_find_the_parabola_minimum() {
    let bracket = Bracket::evaluate(&parabola, [-1.2, 0.4, 2.0]).expect("valid bracket");

    let golden = golden_section(&parabola, &bracket, 0.01, 1000).expect("should converge");
    let quadratic =
        quadratic_interpolation(&parabola, &bracket, 0.01, 1000).expect("should converge");

    assert_relative_eq!(golden.x, 0.75, epsilon = 0.01);
    assert_relative_eq!(quadratic.x, 0.75, epsilon = 1e-6);
    assert_relative_eq!(quadratic.value, -1.125, epsilon = 1e-6);
    assert!((golden.x - quadratic.x).abs() <= 0.01);
}

#[test]
fn refiner_dispatches_to_each_strategy() {
    let bracket = Bracket::evaluate(&parabola, [-1.2, 0.4, 2.0]).expect("valid bracket");

    for refiner in [Refiner::GoldenSection, Refiner::QuadraticInterpolation] {
        let point = refiner
            .refine(&parabola, &bracket, 0.01, 1000)
            .expect("should converge");
        assert_relative_eq!(point.x, 0.75, epsilon = 0.01);
    }
}

#[test]
fn refined_minimum_stays_inside_the_bracket() {
    let functions: [fn(f64) -> f64; 3] = [
        |x| x.exp() - 2.0 * x,
        |x| (x - 0.3).powi(4),
        |x| 1.0 - (-(x - 0.5).powi(2)).exp(),
    ];

    for g in functions {
        for refiner in [Refiner::GoldenSection, Refiner::QuadraticInterpolation] {
            let config = Config {
                refiner,
                ..Config::default()
            };
            let outcome = search(&g, 0.0, &config).expect("should converge");
            assert!(
                outcome.bracket.contains(outcome.minimum.x),
                "{refiner}: {} outside [{}, {}]",
                outcome.minimum.x,
                outcome.bracket.left().x,
                outcome.bracket.right().x,
            );
        }
    }
}

#[test]
fn flat_bracket_falls_back_to_the_center() {
    let g = |_: f64| 1.0;
    let bracket = Bracket::evaluate(&g, [0.0, 1.0, 2.0]).expect("valid bracket");

    let point = quadratic_interpolation(&g, &bracket, 0.01, 10).expect("should converge");

    assert_eq!(point, Point::new(1.0, 1.0));
}

#[test]
fn search_brackets_then_refines() {
    let g = |x: f64| (x - 3.0).powi(2);

    let outcome = search(&g, 0.0, &Config::default()).expect("should converge");

    assert_bracket(&outcome.bracket, [1.5, 3.1, 4.7]);
    assert_relative_eq!(outcome.minimum.x, 3.0, epsilon = 1e-6);
}

#[test]
fn search_rejects_an_invalid_config() {
    let config = Config {
        accuracy: 0.0,
        ..Config::default()
    };

    let result = search(&parabola, 0.0, &config);

    assert_eq!(
        result,
        Err(Error::InvalidConfig(ConfigError::Accuracy(0.0)))
    );
}

#[test]
fn refiners_parse_from_names() {
    assert_eq!(
        "golden_section".parse::<Refiner>(),
        Ok(Refiner::GoldenSection)
    );
    assert_eq!(
        "quadratic_interpolation".parse::<Refiner>(),
        Ok(Refiner::QuadraticInterpolation)
    );

    let err = "dichotomy".parse::<Refiner>().unwrap_err();
    assert_eq!(err.option(), "line refiner");
}
