//! Akima-Steigungen ("robuster" kubischer Spline).
//!
//! Innen: nach Sekanten-Differenzen gewichtetes Mittel der Nachbarsekanten.
//! An den beiden äußersten Knoten je Seite: Ableitung der Parabel durch die
//! drei Randpunkte.

/// Gewichte unterhalb dieser Schwelle gelten als 0.
const ALMOST_ZERO: f64 = 10.0 * f64::EPSILON / 2.0;

/// Steigungen an allen Knoten. Erwartet validierte Knoten (n ≥ 5).
pub(super) fn slopes(x: &[f64], y: &[f64]) -> Vec<f64> {
    let n = x.len();

    let secants: Vec<f64> = (0..n - 1)
        .map(|i| (y[i + 1] - y[i]) / (x[i + 1] - x[i]))
        .collect();

    let mut weights = vec![0.0; n - 1];
    for i in 1..n - 1 {
        weights[i] = (secants[i] - secants[i - 1]).abs();
    }

    let mut slopes = vec![0.0; n];
    for i in 2..n - 2 {
        let (w_left, w_right) = (weights[i - 1], weights[i + 1]);
        slopes[i] = if w_left.abs() < ALMOST_ZERO && w_right.abs() < ALMOST_ZERO {
            ((x[i + 1] - x[i]) * secants[i - 1] + (x[i] - x[i - 1]) * secants[i])
                / (x[i + 1] - x[i - 1])
        } else {
            (w_right * secants[i - 1] + w_left * secants[i]) / (w_right + w_left)
        };
    }

    slopes[0] = three_point_derivative(x, y, 0, [0, 1, 2]);
    slopes[1] = three_point_derivative(x, y, 1, [0, 1, 2]);
    slopes[n - 2] = three_point_derivative(x, y, n - 2, [n - 3, n - 2, n - 1]);
    slopes[n - 1] = three_point_derivative(x, y, n - 1, [n - 3, n - 2, n - 1]);

    slopes
}

/// Ableitung der Parabel durch die drei Punkte `support` an Knoten `at`.
fn three_point_derivative(x: &[f64], y: &[f64], at: usize, support: [usize; 3]) -> f64 {
    let [i0, i1, i2] = support;
    let (y0, y1, y2) = (y[i0], y[i1], y[i2]);
    let t = x[at] - x[i0];
    let t1 = x[i1] - x[i0];
    let t2 = x[i2] - x[i0];
    let a = (y2 - y0 - (t2 / t1 * (y1 - y0))) / (t2 * t2 - t1 * t2);
    let b = (y1 - y0 - a * t1 * t1) / t1;
    2.0 * a * t + b
}
