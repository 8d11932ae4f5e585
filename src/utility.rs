pub(crate) mod dms {
    /// Degrees per quarter turn
    pub const QD: i32 = 90;
    /// Degrees per half turn
    pub const HD: i32 = 2 * QD;
    /// Width of a UTM zone in degrees
    pub const ZD: i32 = 6;
}

/// Evaluate a polynomial, coefficients ordered from the highest power down
pub(crate) fn polyval(p: &[f64], x: f64) -> f64 {
    p
        .iter()
        .fold(0_f64, |acc, val| acc*x + val)
}

/// Splits a coordinate string on whitespace and parses each piece as `f64`.
/// `what` names the coordinate kind in the error message.
pub(crate) fn parse_fields<const N: usize>(value: &str, what: &str) -> Result<[f64; N], String> {
    let pieces = value.split_whitespace().collect::<Vec<_>>();
    if pieces.len() != N {
        return Err(format!("{what} \"{value}\" must have {N} fields, found {}", pieces.len()));
    }

    let mut out = [0_f64; N];
    for (slot, piece) in out.iter_mut().zip(pieces) {
        *slot = piece
            .parse()
            .map_err(|_| format!("{what} field \"{piece}\" is not a number"))?;
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polyval_is_horner() {
        // 2x^2 - 3x + 1 at x = 4
        assert!((polyval(&[2., -3., 1.], 4.) - 21.).abs() < f64::EPSILON);
        assert!(polyval(&[], 4.).abs() < f64::EPSILON);
    }

    #[test]
    fn parse_fields_counts() {
        assert_eq!(parse_fields::<2>(" 1.5\t-2 ", "pair"), Ok([1.5, -2.]));
        assert!(parse_fields::<2>("1.5", "pair").is_err());
        assert!(parse_fields::<2>("1.5 east", "pair").is_err());
    }
}
