//! Interactive prompts
//!
//! Each question is repeated until the answer parses. End of input aborts
//! the session with an [`CalculatorError::InvalidInput`].

use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::error::{CalculatorError, Result};
use crate::loader::date_utils::parse_amount;
use crate::models::{Household, MAX_AGE, Perception, Person, Region, Sex, region_for_province};

/// Additional members accepted after the respondent
pub const MAX_ADDITIONAL_MEMBERS: usize = 20;

/// Line-oriented question and answer session
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Create a prompter over an input and an output stream
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn write(&mut self, text: &str) -> Result<()> {
        self.output
            .write_all(text.as_bytes())
            .and_then(|()| self.output.flush())
            .map_err(|e| CalculatorError::invalid(format!("cannot write prompt: {e}")))
    }

    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| CalculatorError::invalid(format!("cannot read answer: {e}")))?;
        if read == 0 {
            return Err(CalculatorError::invalid("input ended before all questions were answered"));
        }
        Ok(line.trim().to_string())
    }

    /// Ask until `parse` accepts the answer
    pub fn ask_with<T>(
        &mut self,
        question: &str,
        parse: impl Fn(&str) -> Result<T>,
    ) -> Result<T> {
        loop {
            self.write(&format!("{question} "))?;
            let answer = self.read_line()?;
            match parse(&answer) {
                Ok(value) => return Ok(value),
                Err(e) => self.write(&format!("  {e}\n"))?,
            }
        }
    }

    /// Ask for any value with a `FromStr` implementation returning our error
    pub fn ask<T>(&mut self, question: &str) -> Result<T>
    where
        T: FromStr<Err = CalculatorError>,
    {
        self.ask_with(question, str::parse::<T>)
    }

    /// Ask for an age within [0, `MAX_AGE`]
    pub fn ask_age(&mut self, question: &str) -> Result<u32> {
        self.ask_with(question, |answer| parse_bounded(answer, u64::from(MAX_AGE), "age"))
            .map(|age| age as u32)
    }

    /// Ask for the respondent's perception
    pub fn ask_perception(&mut self) -> Result<Perception> {
        self.write(concat!(
            "¿Cómo creés que está tu hogar?\n",
            "  1 - Creo que estamos por debajo de la línea de pobreza\n",
            "  2 - Creo que estamos por encima\n",
            "  3 - No estoy seguro/a\n",
        ))?;
        self.ask_with("Elegí una opción [3]:", |answer| {
            if answer.is_empty() {
                Ok(Perception::default())
            } else {
                answer.parse()
            }
        })
    }

    /// Ask for the respondent and the other members
    pub fn ask_household(&mut self) -> Result<Household> {
        self.write("Contanos sobre vos\n")?;
        let age = self.ask_age("¿Qué edad tenés?")?;
        let sex: Sex = self.ask("¿Cuál es tu sexo? (varón/mujer)")?;
        let mut household = Household::new(Person::new(age, sex));

        let others = self.ask_with("¿Cuántas personas más viven con vos?", |answer| {
            parse_bounded(answer, MAX_ADDITIONAL_MEMBERS as u64, "number of people")
        })?;

        for idx in 1..=others {
            self.write(&format!("Datos de la persona {idx}\n"))?;
            let age = self.ask_age("  Edad:")?;
            let sex: Sex = self.ask("  Sexo (varón/mujer):")?;
            household.push(Person::new(age, sex));
        }

        Ok(household)
    }

    /// Ask for the region, by code, name or province
    pub fn ask_region(&mut self) -> Result<Region> {
        let mut menu = String::from("Ubicación del hogar\n");
        for region in Region::ALL {
            menu.push_str(&format!("  {:>2} - {}\n", region.code(), region.label()));
        }
        self.write(&menu)?;
        self.ask_with("Región (código, nombre o provincia):", |answer| {
            answer
                .parse::<Region>()
                .or_else(|_| region_for_province(answer))
        })
    }

    /// Ask for the total monthly income
    pub fn ask_income(&mut self, period_label: &str) -> Result<f64> {
        self.write(&format!(
            "Los valores de pobreza e indigencia corresponden a {period_label}.\n"
        ))?;
        self.ask_with(
            "¿Cuál es el ingreso total mensual del hogar (en pesos)?",
            parse_income,
        )
    }
}

/// Parse a non-negative income, accepting `1.234,56` and `$` signs
pub fn parse_income(answer: &str) -> Result<f64> {
    parse_amount(answer)
        .filter(|value| value.is_finite() && *value >= 0.0)
        .ok_or_else(|| CalculatorError::invalid(format!("'{answer}' is not a valid amount")))
}

fn parse_bounded(answer: &str, max: u64, what: &str) -> Result<u64> {
    let value: i64 = answer
        .parse()
        .map_err(|_| CalculatorError::invalid(format!("{what} must be a whole number")))?;
    u64::try_from(value)
        .ok()
        .filter(|value| *value <= max)
        .ok_or_else(|| CalculatorError::invalid(format!("{what} must be between 0 and {max}")))
}
