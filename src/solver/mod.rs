//! Kern van de driehoeksoplosser: invoervalidatie, classificatie van
//! het oplosgeval en dispatch naar de bijbehorende algoritmen.
//!
//! De module is volledig toestandsloos; elke aanroep van [`solve`]
//! staat op zichzelf.

use thiserror::Error;

mod cases;
pub mod numeric;
pub mod value;

use cases::SsaPair;
use value::SolvedValue;

/// Result type voor het oplossen van driehoeken.
pub type SolveResult<T> = Result<T, SolveError>;

/// Beschrijft waarom een invoer geen oplossing heeft.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SolveError {
    /// Het aantal opgegeven waarden is niet precies drie.
    #[error("geef precies drie waarden op")]
    InvalidInputCount,
    /// Drie hoeken leggen de grootte van een driehoek niet vast.
    #[error("geef minstens één zijde op")]
    InsufficientSides,
    /// Een opgegeven waarde is niet-eindig of niet positief.
    #[error("ongeldige waarde voor {field}: {value}")]
    InvalidValue { field: &'static str, value: f64 },
    /// De configuratie is meetkundig inconsistent.
    #[error("{0} - geen oplossing")]
    NoSolution(TriangleCase),
}

/// De vier klassieke oplosgevallen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriangleCase {
    Sss,
    Asa,
    Sas,
    Ssa,
}

impl TriangleCase {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Sss => "zijde zijde zijde (SSS)",
            Self::Asa => "hoek zijde hoek (ASA)",
            Self::Sas => "zijde hoek zijde (SAS)",
            Self::Ssa => "zijde zijde hoek (SSA)",
        }
    }
}

impl std::fmt::Display for TriangleCase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Invoer voor de oplosser: drie zijden en hun overstaande hoeken
/// (graden), elk optioneel. Precies drie velden moeten gevuld zijn.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct TriangleInput {
    pub a: Option<f64>,
    pub b: Option<f64>,
    pub c: Option<f64>,
    pub alpha: Option<f64>,
    pub beta: Option<f64>,
    pub gamma: Option<f64>,
}

impl TriangleInput {
    #[must_use]
    fn sides(&self) -> [Option<f64>; 3] {
        [self.a, self.b, self.c]
    }

    #[must_use]
    fn angles(&self) -> [Option<f64>; 3] {
        [self.alpha, self.beta, self.gamma]
    }

    /// Controleert dat alle opgegeven waarden eindig en positief zijn.
    /// De bovengrens van hoeken wordt per oplosgeval bewaakt.
    fn validate(&self) -> SolveResult<()> {
        let fields = [
            ("a", self.a),
            ("b", self.b),
            ("c", self.c),
            ("alpha", self.alpha),
            ("beta", self.beta),
            ("gamma", self.gamma),
        ];
        for (field, slot) in fields {
            if let Some(value) = slot {
                if !value.is_finite() || value <= 0.0 {
                    return Err(SolveError::InvalidValue { field, value });
                }
            }
        }
        Ok(())
    }
}

/// Volledig opgeloste driehoek. Velden die in het dubbelzinnige
/// SSA-geval twee waarden hebben zijn een [`SolvedValue::Pair`];
/// element 0 van elk paar hoort bij dezelfde fysieke driehoek, net als
/// element 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangleSolution {
    pub a: SolvedValue,
    pub b: SolvedValue,
    pub c: SolvedValue,
    pub alpha: SolvedValue,
    pub beta: SolvedValue,
    pub gamma: SolvedValue,
    pub area: SolvedValue,
    pub case: TriangleCase,
    pub unique: bool,
}

impl TriangleSolution {
    /// Leesbaar etiket van het gebruikte oplosgeval, inclusief of de
    /// uitkomst eenduidig is.
    #[must_use]
    pub fn label(&self) -> String {
        match self.case {
            TriangleCase::Ssa if self.unique => format!("{} - unieke oplossing", self.case),
            TriangleCase::Ssa => format!("{} - twee oplossingen", self.case),
            other => other.label().to_owned(),
        }
    }
}

/// Geclassificeerde invoer, inclusief de al uitgepakte waarden zodat
/// de oplosgevallen geen aanwezigheidscontroles hoeven te herhalen.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Classified {
    Sss {
        sides: [f64; 3],
    },
    Asa {
        side_index: usize,
        side: f64,
    },
    Sas {
        vertex: usize,
        angle: f64,
        flanks: (f64, f64),
    },
    Ssa(SsaPair),
}

impl Classified {
    fn case(&self) -> TriangleCase {
        match self {
            Self::Sss { .. } => TriangleCase::Sss,
            Self::Asa { .. } => TriangleCase::Asa,
            Self::Sas { .. } => TriangleCase::Sas,
            Self::Ssa(_) => TriangleCase::Ssa,
        }
    }
}

/// Bepaalt welk oplosgeval op de invoer van toepassing is.
pub fn classify(input: &TriangleInput) -> SolveResult<TriangleCase> {
    classify_detailed(input).map(|classified| classified.case())
}

fn classify_detailed(input: &TriangleInput) -> SolveResult<Classified> {
    let sides = input.sides();
    let angles = input.angles();
    let side_count = sides.iter().flatten().count();
    let angle_count = angles.iter().flatten().count();

    if side_count + angle_count != 3 {
        return Err(SolveError::InvalidInputCount);
    }
    if side_count == 0 {
        return Err(SolveError::InsufficientSides);
    }

    if let [Some(a), Some(b), Some(c)] = sides {
        return Ok(Classified::Sss { sides: [a, b, c] });
    }

    if angle_count == 2 {
        // Eén zijde bekend; welke maakt voor de sinusregel niet uit.
        let Some((side_index, side)) = first_known(&sides) else {
            unreachable!("side_count > 0 garandeert een bekende zijde");
        };
        return Ok(Classified::Asa { side_index, side });
    }

    // Twee zijden en één hoek. SAS wanneer de hoek ingesloten ligt
    // tussen de bekende zijden, oftewel: het hoekpunt met de bekende
    // hoek mist juist zijn overstaande zijde.
    for vertex in 0..3 {
        if let (Some(angle), None) = (angles[vertex], sides[vertex]) {
            if let (Some(first), Some(second)) =
                (sides[(vertex + 1) % 3], sides[(vertex + 2) % 3])
            {
                return Ok(Classified::Sas {
                    vertex,
                    angle,
                    flanks: (first, second),
                });
            }
        }
    }

    // Anders staat de bekende hoek tegenover een bekende zijde: SSA.
    for known in 0..3 {
        if let (Some(known_side), Some(known_angle)) = (sides[known], angles[known]) {
            for partial in 0..3 {
                if partial == known || angles[partial].is_some() {
                    continue;
                }
                if let Some(partial_side) = sides[partial] {
                    return Ok(Classified::Ssa(SsaPair {
                        known,
                        known_side,
                        known_angle,
                        partial,
                        partial_side,
                    }));
                }
            }
        }
    }

    unreachable!("twee zijden en één hoek vallen altijd in SAS of SSA");
}

fn first_known(values: &[Option<f64>; 3]) -> Option<(usize, f64)> {
    values
        .iter()
        .enumerate()
        .find_map(|(index, slot)| slot.map(|value| (index, value)))
}

/// Lost een driehoek op uit precies drie bekende grootheden.
///
/// # Errors
///
/// Zie [`SolveError`]: verkeerd aantal invoerwaarden, geen zijden,
/// ongeldige getallen, of een meetkundig onmogelijke configuratie.
pub fn solve(input: &TriangleInput) -> SolveResult<TriangleSolution> {
    input.validate()?;
    let classified = classify_detailed(input)?;
    crate::debug_log!("oplossen als {}", classified.case());

    let outcome = match classified {
        Classified::Sss { sides } => cases::sss(sides),
        Classified::Asa { side_index, side } => cases::asa(input.angles(), side_index, side),
        Classified::Sas {
            vertex,
            angle,
            flanks,
        } => cases::sas(vertex, angle, flanks),
        Classified::Ssa(pair) => cases::ssa(pair),
    }?;

    let [a, b, c] = outcome.sides;
    let [alpha, beta, gamma] = outcome.angles;
    Ok(TriangleSolution {
        a,
        b,
        c,
        alpha,
        beta,
        gamma,
        area: outcome.area,
        case: classified.case(),
        unique: outcome.unique,
    })
}
