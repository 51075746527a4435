#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod solver;

use std::fmt;

use serde::Serialize;
use solver::value::SolvedValue;
use solver::{TriangleInput, TriangleSolution};
use wasm_bindgen::JsError;
use wasm_bindgen::prelude::*;

cfg_if::cfg_if! {
    if #[cfg(all(feature = "console_error_panic_hook", target_arch = "wasm32"))] {
        #[wasm_bindgen(start)]
        pub fn initialize() {
            console_error_panic_hook::set_once();
            init_logger();
        }
    } else {
        #[wasm_bindgen(start)]
        pub fn initialize() {
            // no-op fallback when panic hook is disabled
            init_logger();
        }
    }
}

#[cfg(feature = "debug_logs")]
fn init_logger() {
    use log::LevelFilter;
    use wasm_bindgen_console_logger::DEFAULT_LOGGER;
    log::set_logger(&DEFAULT_LOGGER).expect("error initializing logger");
    log::set_max_level(LevelFilter::Debug);
}

#[cfg(not(feature = "debug_logs"))]
fn init_logger() {
    // no-op fallback when debug logs are disabled
}

#[macro_export]
macro_rules! debug_log {
    ($($t:tt)*) => {{
        #[cfg(feature = "debug_logs")]
        {
            #[cfg(target_arch = "wasm32")]
            {
                ::web_sys::console::log_1(&::wasm_bindgen::JsValue::from_str(&format!($($t)*)));
            }
            #[cfg(not(target_arch = "wasm32"))]
            {
                println!("{}", format!($($t)*));
            }
        }
    }};
}

/// Exportvorm van een oplossing richting JavaScript. Elke waarde is
/// een kaal getal of een array van twee getallen; `two_solutions`
/// stuurt in de frontend de zichtbaarheid van de tweede resultaatrij.
#[derive(Debug, Serialize, Clone, PartialEq)]
struct SolutionExport {
    a: SolvedValue,
    b: SolvedValue,
    c: SolvedValue,
    alpha: SolvedValue,
    beta: SolvedValue,
    gamma: SolvedValue,
    area: SolvedValue,
    status: String,
    two_solutions: bool,
}

impl From<&TriangleSolution> for SolutionExport {
    fn from(solution: &TriangleSolution) -> Self {
        Self {
            a: solution.a,
            b: solution.b,
            c: solution.c,
            alpha: solution.alpha,
            beta: solution.beta,
            gamma: solution.gamma,
            area: solution.area,
            status: solution.label(),
            two_solutions: !solution.unique,
        }
    }
}

/// Public entry point for consumers.
#[wasm_bindgen]
pub struct Engine {
    initialized: bool,
    last_solution: Option<TriangleSolution>,
}

#[wasm_bindgen]
impl Engine {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Engine {
        Engine {
            initialized: true,
            last_solution: None,
        }
    }

    /// Geeft terug of de engine de minimale initialisatie heeft doorlopen.
    #[wasm_bindgen]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Lost een driehoek op uit de zes optionele invoervelden (zijden
    /// `a`/`b`/`c`, overstaande hoeken in graden) en geeft de
    /// geserialiseerde oplossing terug.
    ///
    /// Bij een fout wordt de bewaarde oplossing gewist, zodat de
    /// frontend geen verouderd resultaat blijft tonen.
    #[wasm_bindgen]
    #[allow(clippy::similar_names)]
    pub fn solve(
        &mut self,
        a: Option<f64>,
        b: Option<f64>,
        c: Option<f64>,
        alpha: Option<f64>,
        beta: Option<f64>,
        gamma: Option<f64>,
    ) -> Result<JsValue, JsValue> {
        let input = TriangleInput {
            a,
            b,
            c,
            alpha,
            beta,
            gamma,
        };

        match solver::solve(&input) {
            Ok(solution) => {
                self.last_solution = Some(solution);
                export_solution(&solution)
            }
            Err(error) => {
                self.last_solution = None;
                Err(to_js_error(error))
            }
        }
    }

    /// De laatst berekende oplossing, voor hover-weergave in de
    /// frontend; `null` wanneer er geen (geldige) oplossing is.
    #[wasm_bindgen]
    pub fn last_solution(&self) -> Result<JsValue, JsValue> {
        match self.last_solution.as_ref() {
            Some(solution) => export_solution(solution),
            None => Ok(JsValue::NULL),
        }
    }

    /// Wist de bewaarde oplossing.
    #[wasm_bindgen]
    pub fn clear(&mut self) {
        self.last_solution = None;
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

fn export_solution(solution: &TriangleSolution) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&SolutionExport::from(solution))
        .map_err(|err| JsError::new(&err.to_string()).into())
}

fn to_js_error<E: fmt::Display>(error: E) -> JsValue {
    js_error(&error.to_string())
}

fn js_error(message: &str) -> JsValue {
    #[cfg(target_arch = "wasm32")]
    {
        JsError::new(message).into()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = message;
        JsValue::NULL
    }
}
