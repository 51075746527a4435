//! Numerieke basisfuncties: graden/radialen en de stabiele varianten
//! van de cosinusregel.

/// Hoeken onder deze grens (radialen) lopen via de kleine-hoek
/// benadering in [`solve_side`].
const SMALL_ANGLE_RAD: f64 = 0.001;

/// Bovengrens voor `acos`; tussen deze waarde en 1 verliest `acos`
/// precisie en schakelt [`solve_angle`] over op de wortelvorm.
const COS_STABLE_MAX: f64 = 0.999_999_9;

#[must_use]
pub fn deg_to_rad(degrees: f64) -> f64 {
    degrees / 180.0 * std::f64::consts::PI
}

#[must_use]
pub fn rad_to_deg(radians: f64) -> f64 {
    radians / std::f64::consts::PI * 180.0
}

/// Cosinusregel: de derde zijde uit twee zijden en de ingesloten hoek
/// (graden).
///
/// Nabij 0° dooft `a² + b² - 2ab·cos(C)` catastrofaal uit wanneer `a`
/// en `b` vrijwel gelijk zijn; daar wordt de reeksontwikkeling
/// `(a-b)² + ab·C²·(1 - C²/12)` gebruikt.
#[must_use]
pub fn solve_side(a: f64, b: f64, gamma_deg: f64) -> f64 {
    let gamma = deg_to_rad(gamma_deg);
    if gamma > SMALL_ANGLE_RAD {
        (a * a + b * b - 2.0 * a * b * gamma.cos()).sqrt()
    } else {
        ((a - b) * (a - b) + a * b * gamma * gamma * (1.0 - gamma * gamma / 12.0)).sqrt()
    }
}

/// Cosinusregel: de hoek (graden) tegenover zijde `c`.
///
/// Geeft `None` wanneer de cosinus boven 1 uitkomt, wat voor een echte
/// driehoek onmogelijk is. Tussen [`COS_STABLE_MAX`] en 1 wordt de
/// equivalente wortelvorm `sqrt((c² - (a-b)²) / ab)` gebruikt.
#[must_use]
pub fn solve_angle(a: f64, b: f64, c: f64) -> Option<f64> {
    let temp = (a * a + b * b - c * c) / (2.0 * a * b);
    if (-1.0..=COS_STABLE_MAX).contains(&temp) {
        Some(rad_to_deg(temp.acos()))
    } else if temp <= 1.0 {
        Some(rad_to_deg(((c * c - (a - b) * (a - b)) / (a * b)).sqrt()))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::{deg_to_rad, rad_to_deg, solve_angle, solve_side};

    #[test]
    fn degree_radian_roundtrip() {
        assert!((deg_to_rad(180.0) - std::f64::consts::PI).abs() < 1e-12);
        assert!((rad_to_deg(std::f64::consts::FRAC_PI_2) - 90.0).abs() < 1e-12);
        assert!((rad_to_deg(deg_to_rad(37.25)) - 37.25).abs() < 1e-12);
    }

    #[test]
    fn solve_side_matches_pythagoras_at_right_angle() {
        assert!((solve_side(3.0, 4.0, 90.0) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn solve_side_is_stable_for_tiny_included_angles() {
        // Twee vrijwel gelijke benen met een minuscule tophoek: de
        // naïeve formule zou hier vrijwel alle cijfers verliezen.
        let side = solve_side(1.0, 1.0, 1e-5);
        let expected = 2.0 * deg_to_rad(1e-5 / 2.0).sin();
        assert!((side - expected).abs() < expected * 1e-9);
    }

    #[test]
    fn solve_angle_recovers_right_angle() {
        let angle = solve_angle(3.0, 4.0, 5.0).expect("geldige driehoek");
        assert!((angle - 90.0).abs() < 1e-9);
    }

    #[test]
    fn solve_angle_is_stable_near_degenerate_triangles() {
        // Bijna-vlakke driehoek: cos ≈ 1, net binnen het geldige bereik.
        let angle = solve_angle(1.0, 1.0, 1e-8).expect("geldige driehoek");
        assert!(angle > 0.0);
        assert!(angle < 1e-5);
    }

    #[test]
    fn solve_angle_rejects_cosines_above_one() {
        assert!(solve_angle(10.0, 1.0, 1.0).is_none());
        assert!(solve_angle(1.0, 10.0, 1.0).is_none());
    }

    #[test]
    fn solve_side_and_solve_angle_are_mutual_inverses() {
        let (a, b, c) = (4.0, 6.0, 8.5);
        let gamma = solve_angle(a, b, c).expect("geldige driehoek");
        assert!((solve_side(a, b, gamma) - c).abs() < 1e-9);
    }
}
