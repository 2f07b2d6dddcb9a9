use signratio::{RatioError, SignRatios, compute_ratios, format_ratios, report_ratios};

fn is_six_digit_line(line: &str) -> bool {
    let Some((int, frac)) = line.split_once('.') else {
        return false;
    };
    int.len() == 1
        && int.chars().all(|c| c.is_ascii_digit())
        && frac.len() == 6
        && frac.chars().all(|c| c.is_ascii_digit())
}

fn report(values: &[f64]) -> anyhow::Result<String> {
    let mut out = Vec::new();
    report_ratios(values, &mut out)?;
    Ok(String::from_utf8(out)?)
}

#[test]
fn demo_sequence_report() {
    let s = report(&[-4.0, 3.0, -9.0, 0.0, 4.0, 1.0]).unwrap();
    assert_eq!(s, "0.500000\n0.333333\n0.166667\n");
}

#[test]
fn every_line_has_six_fraction_digits() {
    let inputs: Vec<Vec<f64>> = vec![
        vec![1.0],
        vec![0.0, 0.0, 0.0],
        vec![-1.0, 2.0, 0.0],
        vec![1.0, 1.0, 1.0, 1.0, 1.0, 1.0, -1.0],
    ];
    for values in inputs {
        let s = report(&values).unwrap();
        let lines: Vec<&str> = s.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(s.ends_with('\n'));
        for line in lines {
            assert!(is_six_digit_line(line), "bad line {:?}", line);
        }
    }
}

#[test]
fn all_positive_report() {
    let s = report(&[3.0, 0.5, 8.0]).unwrap();
    assert_eq!(s, "1.000000\n0.000000\n0.000000\n");
}

#[test]
fn rounding_to_nearest() {
    let r = SignRatios {
        positive: 2.0 / 3.0,
        negative: 1.0 / 7.0,
        zero: 0.0,
    };
    assert_eq!(format_ratios(&r), "0.666667\n0.142857\n0.000000\n");
}

#[test]
fn exact_ties_round_to_even() {
    // 1/128 = 0.0078125 and 3/128 = 0.0234375 are exact in binary.
    let mut values = vec![0.0; 124];
    values.push(1.0);
    values.extend([-1.0, -1.0, -1.0]);
    let r = compute_ratios(&values).unwrap();
    assert_eq!(r.positive, 0.0078125);
    assert_eq!(r.negative, 0.0234375);
    let s = format_ratios(&r);
    let lines: Vec<&str> = s.lines().collect();
    assert_eq!(lines[0], "0.007812");
    assert_eq!(lines[1], "0.023438");
}

#[test]
fn repeated_reports_match() {
    let values = [-1.0, -2.0, 5.0, 0.0, 0.0];
    assert_eq!(report(&values).unwrap(), report(&values).unwrap());
}

#[test]
fn empty_input_writes_nothing() {
    let mut out = Vec::new();
    let err = report_ratios(&[], &mut out).unwrap_err();
    assert_eq!(
        err.downcast_ref::<RatioError>(),
        Some(&RatioError::EmptyInput)
    );
    assert!(out.is_empty());
}

#[test]
fn nan_input_writes_nothing() {
    let mut out = Vec::new();
    let err = report_ratios(&[1.0, f64::NAN], &mut out).unwrap_err();
    assert_eq!(
        err.downcast_ref::<RatioError>(),
        Some(&RatioError::InvalidElement { index: 1 })
    );
    assert!(out.is_empty());
}
