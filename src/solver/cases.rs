//! De vier klassieke oplosgevallen: SSS, ASA, SAS en het
//! dubbelzinnige SSA.
//!
//! Elke functie krijgt de al geclassificeerde invoer aangereikt en
//! levert een [`CaseOutcome`] in canonieke volgorde (a, b, c / α, β, γ).

use super::numeric::{deg_to_rad, rad_to_deg, solve_angle, solve_side};
use super::value::SolvedValue;
use super::{SolveError, SolveResult, TriangleCase};

/// Uitkomst van één oplosgeval, nog zonder etiket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct CaseOutcome {
    pub sides: [SolvedValue; 3],
    pub angles: [SolvedValue; 3],
    pub area: SolvedValue,
    pub unique: bool,
}

/// SSA-configuratie: een zijde met haar overstaande hoek, plus een
/// tweede zijde waarvan de overstaande hoek onbekend is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct SsaPair {
    pub known: usize,
    pub known_side: f64,
    pub known_angle: f64,
    pub partial: usize,
    pub partial_side: f64,
}

/// Drie zijden: hoeken via de cosinusregel, oppervlakte via Heron.
pub(super) fn sss(sides: [f64; 3]) -> SolveResult<CaseOutcome> {
    let [a, b, c] = sides;
    if a + b <= c || b + c <= a || c + a <= b {
        return Err(SolveError::NoSolution(TriangleCase::Sss));
    }

    let no_solution = || SolveError::NoSolution(TriangleCase::Sss);
    let alpha = solve_angle(b, c, a).ok_or_else(no_solution)?;
    let beta = solve_angle(c, a, b).ok_or_else(no_solution)?;
    let gamma = solve_angle(a, b, c).ok_or_else(no_solution)?;

    let s = (a + b + c) / 2.0;
    let area = (s * (s - a) * (s - b) * (s - c)).sqrt();

    Ok(CaseOutcome {
        sides: sides.map(SolvedValue::Single),
        angles: [alpha, beta, gamma].map(SolvedValue::Single),
        area: SolvedValue::Single(area),
        unique: true,
    })
}

/// Twee hoeken en één zijde: de derde hoek volgt uit de hoekensom, de
/// ontbrekende zijden uit de sinusregel.
pub(super) fn asa(
    angles: [Option<f64>; 3],
    side_index: usize,
    side: f64,
) -> SolveResult<CaseOutcome> {
    // Precies één hoek ontbreekt; voor de twee bekende slots is de
    // terugvalwaarde dood gewicht.
    let known_sum: f64 = angles.iter().flatten().sum();
    let filled = angles.map(|slot| slot.unwrap_or(180.0 - known_sum));
    if filled.iter().any(|angle| *angle <= 0.0) {
        return Err(SolveError::NoSolution(TriangleCase::Asa));
    }

    let sines = filled.map(|angle| deg_to_rad(angle).sin());
    let ratio = side / sines[side_index];
    let area =
        side * ratio * sines[(side_index + 1) % 3] * sines[(side_index + 2) % 3] / 2.0;

    let mut sides = [SolvedValue::Single(side); 3];
    for index in 0..3 {
        if index != side_index {
            sides[index] = SolvedValue::Single(ratio * sines[index]);
        }
    }

    Ok(CaseOutcome {
        sides,
        angles: filled.map(SolvedValue::Single),
        area: SolvedValue::Single(area),
        unique: true,
    })
}

/// Twee zijden en de ingesloten hoek: de derde zijde via de stabiele
/// cosinusregel, daarna de resterende hoeken uit het volledige
/// zijdentriple.
pub(super) fn sas(vertex: usize, angle: f64, flanks: (f64, f64)) -> SolveResult<CaseOutcome> {
    if angle >= 180.0 {
        return Err(SolveError::NoSolution(TriangleCase::Sas));
    }

    let (first, second) = flanks;
    let opposite = solve_side(first, second, angle);

    let no_solution = || SolveError::NoSolution(TriangleCase::Sas);
    let angle_first = solve_angle(second, opposite, first).ok_or_else(no_solution)?;
    let angle_second = solve_angle(opposite, first, second).ok_or_else(no_solution)?;

    let area = first * second * deg_to_rad(angle).sin() / 2.0;

    let mut sides = [SolvedValue::Single(opposite); 3];
    sides[(vertex + 1) % 3] = SolvedValue::Single(first);
    sides[(vertex + 2) % 3] = SolvedValue::Single(second);

    let mut angles = [SolvedValue::Single(angle); 3];
    angles[(vertex + 1) % 3] = SolvedValue::Single(angle_first);
    angles[(vertex + 2) % 3] = SolvedValue::Single(angle_second);

    Ok(CaseOutcome {
        sides,
        angles,
        area: SolvedValue::Single(area),
        unique: true,
    })
}

/// Het dubbelzinnige geval: een zijde-hoekpaar plus een losse zijde
/// kan nul, één of twee geldige driehoeken opleveren.
pub(super) fn ssa(pair: SsaPair) -> SolveResult<CaseOutcome> {
    let SsaPair {
        known,
        known_side,
        known_angle,
        partial,
        partial_side,
    } = pair;
    let unknown = 3 - known - partial;

    if known_angle >= 180.0 {
        return Err(SolveError::NoSolution(TriangleCase::Ssa));
    }

    let ratio = known_side / deg_to_rad(known_angle).sin();
    // sin van de hoek tegenover de losse zijde
    let temp = partial_side / ratio;

    if temp > 1.0 || (known_angle >= 90.0 && known_side <= partial_side) {
        return Err(SolveError::NoSolution(TriangleCase::Ssa));
    }

    let mut sides = [SolvedValue::Single(0.0); 3];
    sides[known] = SolvedValue::Single(known_side);
    sides[partial] = SolvedValue::Single(partial_side);

    let mut angles = [SolvedValue::Single(0.0); 3];
    angles[known] = SolvedValue::Single(known_angle);

    if temp >= 1.0 || known_side >= partial_side {
        let partial_angle = rad_to_deg(temp.asin());
        let unknown_angle = 180.0 - known_angle - partial_angle;
        let unknown_side = ratio * deg_to_rad(unknown_angle).sin();
        let area = known_side * partial_side * deg_to_rad(unknown_angle).sin() / 2.0;

        angles[partial] = SolvedValue::Single(partial_angle);
        angles[unknown] = SolvedValue::Single(unknown_angle);
        sides[unknown] = SolvedValue::Single(unknown_side);

        Ok(CaseOutcome {
            sides,
            angles,
            area: SolvedValue::Single(area),
            unique: true,
        })
    } else {
        // Twee oplossingen: de tweede hoek is het supplement van de
        // eerste; alle afgeleide velden volgen per index.
        let partial_angle_0 = rad_to_deg(temp.asin());
        let partial_angle_1 = 180.0 - partial_angle_0;
        let unknown_angle_0 = 180.0 - known_angle - partial_angle_0;
        let unknown_angle_1 = 180.0 - known_angle - partial_angle_1;
        let unknown_side_0 = ratio * deg_to_rad(unknown_angle_0).sin();
        let unknown_side_1 = ratio * deg_to_rad(unknown_angle_1).sin();
        let area_0 = known_side * partial_side * deg_to_rad(unknown_angle_0).sin() / 2.0;
        let area_1 = known_side * partial_side * deg_to_rad(unknown_angle_1).sin() / 2.0;

        angles[partial] = SolvedValue::Pair(partial_angle_0, partial_angle_1);
        angles[unknown] = SolvedValue::Pair(unknown_angle_0, unknown_angle_1);
        sides[unknown] = SolvedValue::Pair(unknown_side_0, unknown_side_1);

        Ok(CaseOutcome {
            sides,
            angles,
            area: SolvedValue::Pair(area_0, area_1),
            unique: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{CaseOutcome, SsaPair, asa, sas, ssa, sss};
    use crate::solver::value::SolvedValue;
    use crate::solver::{SolveError, TriangleCase};

    fn single(value: SolvedValue) -> f64 {
        match value {
            SolvedValue::Single(inner) => inner,
            SolvedValue::Pair(..) => panic!("verwacht Single, kreeg {value:?}"),
        }
    }

    fn angle_sum(outcome: &CaseOutcome) -> f64 {
        outcome.angles.iter().map(|angle| single(*angle)).sum()
    }

    #[test]
    fn sss_rejects_triangle_inequality_violations() {
        assert_eq!(
            sss([1.0, 1.0, 3.0]),
            Err(SolveError::NoSolution(TriangleCase::Sss))
        );
        // Niet-strikt: een exact vlakke driehoek is ook ongeldig.
        assert_eq!(
            sss([1.0, 2.0, 3.0]),
            Err(SolveError::NoSolution(TriangleCase::Sss))
        );
    }

    #[test]
    fn sss_angles_sum_to_half_turn() {
        let outcome = sss([3.5, 4.25, 6.0]).expect("geldige driehoek");
        assert!((angle_sum(&outcome) - 180.0).abs() < 1e-6);
        assert!(outcome.unique);
    }

    #[test]
    fn asa_rejects_angle_sum_overflow() {
        let result = asa([Some(120.0), Some(75.0), None], 0, 10.0);
        assert_eq!(result, Err(SolveError::NoSolution(TriangleCase::Asa)));
    }

    #[test]
    fn asa_supplied_side_may_sit_at_any_vertex() {
        // Gelijkzijdig: alle zijden moeten de opgegeven lengte krijgen.
        for index in 0..3 {
            let mut angles = [Some(60.0); 3];
            angles[(index + 1) % 3] = None;
            let outcome = asa(angles, index, 4.0).expect("geldige driehoek");
            for side in outcome.sides {
                assert!((single(side) - 4.0).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn sas_rejects_reflex_included_angle() {
        assert_eq!(
            sas(2, 180.0, (5.0, 7.0)),
            Err(SolveError::NoSolution(TriangleCase::Sas))
        );
    }

    #[test]
    fn sas_places_results_at_the_right_vertices() {
        let outcome = sas(2, 60.0, (5.0, 7.0)).expect("geldige driehoek");
        assert!((single(outcome.sides[0]) - 5.0).abs() < 1e-9);
        assert!((single(outcome.sides[1]) - 7.0).abs() < 1e-9);
        assert!((single(outcome.sides[2]) - 6.244_997_998_398_398).abs() < 1e-9);
        assert!((single(outcome.angles[2]) - 60.0).abs() < 1e-9);
        assert!((angle_sum(&outcome) - 180.0).abs() < 1e-6);
    }

    #[test]
    fn ssa_with_longer_known_side_is_unique() {
        let outcome = ssa(SsaPair {
            known: 0,
            known_side: 10.0,
            known_angle: 30.0,
            partial: 1,
            partial_side: 7.0,
        })
        .expect("geldige driehoek");
        assert!(outcome.unique);
        assert!(!outcome.area.is_pair());
    }

    #[test]
    fn ssa_with_shorter_known_side_yields_two_solutions() {
        let outcome = ssa(SsaPair {
            known: 0,
            known_side: 7.0,
            known_angle: 30.0,
            partial: 1,
            partial_side: 10.0,
        })
        .expect("geldige driehoek");
        assert!(!outcome.unique);

        let beta = outcome.angles[1];
        assert!((beta.first() - 45.584_691_402_807_02).abs() < 1e-6);
        assert!((beta.second() - 134.415_308_597_193).abs() < 1e-6);
        // Bekende waarden blijven enkelvoudig.
        assert!(!outcome.sides[0].is_pair());
        assert!(!outcome.sides[1].is_pair());
        assert!(!outcome.angles[0].is_pair());
        // Afgeleide velden zijn per index consistent.
        assert!(outcome.sides[2].is_pair());
        assert!(outcome.angles[2].is_pair());
        assert!(outcome.area.is_pair());
        assert!(
            (outcome.angles[0].first() + beta.first() + outcome.angles[2].first() - 180.0).abs()
                < 1e-6
        );
        assert!(
            (outcome.angles[0].second() + beta.second() + outcome.angles[2].second() - 180.0)
                .abs()
                < 1e-6
        );
    }

    #[test]
    fn ssa_equal_sides_with_acute_angle_still_unique() {
        // knownSide == partialSide valt in de unieke tak.
        let outcome = ssa(SsaPair {
            known: 0,
            known_side: 5.0,
            known_angle: 40.0,
            partial: 2,
            partial_side: 5.0,
        })
        .expect("geldige driehoek");
        assert!(outcome.unique);
        // Gelijkbenig: de overstaande hoeken zijn gelijk.
        assert!((single(outcome.angles[2]) - 40.0).abs() < 1e-9);
    }

    #[test]
    fn ssa_rejects_unreachable_configurations() {
        // sin(partialAngle) > 1: de losse zijde kan de driehoek niet sluiten.
        let too_far = ssa(SsaPair {
            known: 0,
            known_side: 2.0,
            known_angle: 60.0,
            partial: 1,
            partial_side: 10.0,
        });
        assert_eq!(too_far, Err(SolveError::NoSolution(TriangleCase::Ssa)));

        // Stompe bekende hoek met een niet-langere bekende zijde.
        let obtuse = ssa(SsaPair {
            known: 0,
            known_side: 5.0,
            known_angle: 120.0,
            partial: 1,
            partial_side: 5.0,
        });
        assert_eq!(obtuse, Err(SolveError::NoSolution(TriangleCase::Ssa)));
    }
}
