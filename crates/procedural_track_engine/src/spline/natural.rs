//! Steigungen des natürlichen kubischen Splines.

/// Löst das tridiagonale Steigungssystem (Thomas-Algorithmus).
///
/// Randbedingung: zweite Ableitung 0 am ersten und letzten Knoten.
pub(super) fn slopes(x: &[f64], y: &[f64]) -> Vec<f64> {
    let n = x.len();
    let h: Vec<f64> = x.windows(2).map(|w| w[1] - w[0]).collect();
    let delta: Vec<f64> = (0..n - 1).map(|i| (y[i + 1] - y[i]) / h[i]).collect();

    let mut sub = vec![0.0; n];
    let mut diag = vec![0.0; n];
    let mut sup = vec![0.0; n];
    let mut rhs = vec![0.0; n];

    diag[0] = 2.0;
    sup[0] = 1.0;
    rhs[0] = 3.0 * delta[0];

    for i in 1..n - 1 {
        sub[i] = h[i];
        diag[i] = 2.0 * (h[i - 1] + h[i]);
        sup[i] = h[i - 1];
        rhs[i] = 3.0 * (h[i] * delta[i - 1] + h[i - 1] * delta[i]);
    }

    sub[n - 1] = 1.0;
    diag[n - 1] = 2.0;
    rhs[n - 1] = 3.0 * delta[n - 2];

    // Vorwärtselimination
    for i in 1..n {
        let m = sub[i] / diag[i - 1];
        diag[i] -= m * sup[i - 1];
        rhs[i] -= m * rhs[i - 1];
    }

    // Rückwärtseinsetzen
    let mut slopes = vec![0.0; n];
    slopes[n - 1] = rhs[n - 1] / diag[n - 1];
    for i in (0..n - 1).rev() {
        slopes[i] = (rhs[i] - sup[i] * slopes[i + 1]) / diag[i];
    }
    slopes
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_second_derivative_vanishes_at_ends() {
        let x = [0.0, 1.0, 2.5, 3.0, 5.0];
        let y = [0.0, 2.0, 1.0, 3.0, 0.5];
        let s = slopes(&x, &y);

        // f''(x0) = 2*c2 des ersten Segments
        let h0 = x[1] - x[0];
        let c2 = (3.0 * (y[1] - y[0]) / h0 - 2.0 * s[0] - s[1]) / h0;
        assert_relative_eq!(c2, 0.0, epsilon = 1e-12);

        // f''(x_n) = 2*c2 + 6*c3*h des letzten Segments
        let k = x.len() - 2;
        let h = x[k + 1] - x[k];
        let c2 = (3.0 * (y[k + 1] - y[k]) / h - 2.0 * s[k] - s[k + 1]) / h;
        let c3 = (2.0 * (y[k] - y[k + 1]) / h + s[k] + s[k + 1]) / (h * h);
        assert_relative_eq!(2.0 * c2 + 6.0 * c3 * h, 0.0, epsilon = 1e-12);
    }
}
