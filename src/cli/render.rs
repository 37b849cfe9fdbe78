//! Text and JSON rendering of an assessment

use std::fmt::Write;

use crate::algorithm::{Classification, Stratum, ThresholdGap};
use crate::calculator::Assessment;

/// Width of the longest bar in the text chart
pub const CHART_WIDTH: usize = 40;

/// Format pesos with two decimals and thousands separators: `$1,234,567.89`
#[must_use]
pub fn format_money(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let (units, cents) = (cents / 100, cents % 100);

    let digits = units.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, digit) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 && (units > 0 || cents > 0) { "-" } else { "" };
    format!("{sign}${grouped}.{cents:02}")
}

fn format_gap(gap: &ThresholdGap) -> String {
    let word = if gap.is_deficit() { "faltan" } else { "sobran" };
    match gap.percent {
        Some(percent) => format!(
            "{word} {} ({:.1}%)",
            format_money(gap.nominal.abs()),
            percent.abs()
        ),
        None => format!("{word} {}", format_money(gap.nominal.abs())),
    }
}

fn verdict(classification: Classification) -> &'static str {
    match classification {
        Classification::Destitute => "Tu hogar está por debajo de la línea de indigencia.",
        Classification::Poor => "Tu hogar está por debajo de la línea de pobreza.",
        Classification::NotPoor(_) => "Tu hogar no está por debajo de la línea de pobreza.",
    }
}

fn stratum_note(stratum: Stratum) -> &'static str {
    match stratum {
        Stratum::Fragile => "Sus ingresos superan la línea de pobreza por menos de un 25%: situación vulnerable.",
        Stratum::MiddleClass => "Sus ingresos están entre 1,25 y 4 veces la línea de pobreza: sectores medios.",
        Stratum::Affluent => "Sus ingresos superan 4 veces la línea de pobreza: sectores acomodados.",
    }
}

/// Horizontal bars for income and both lines, scaled to the largest value
#[must_use]
pub fn render_bar_chart(assessment: &Assessment, width: usize) -> String {
    let bars = [
        ("Ingreso del hogar", assessment.income),
        ("Línea de indigencia", assessment.thresholds.destitution_line),
        ("Línea de pobreza", assessment.thresholds.poverty_line),
    ];
    let max = bars.iter().map(|(_, value)| *value).fold(0.0_f64, f64::max);

    let mut out = String::new();
    for (label, value) in bars {
        let len = if max > 0.0 {
            ((value / max) * width as f64).round() as usize
        } else {
            0
        };
        let _ = writeln!(
            out,
            "{label:<20} {:<width$} {}",
            "█".repeat(len),
            format_money(value)
        );
    }
    out
}

/// Narrative report
#[must_use]
pub fn render_text(assessment: &Assessment) -> String {
    let household = &assessment.household;
    let mut out = String::new();

    let _ = writeln!(out, "## Resumen del hogar");
    let _ = writeln!(out, "Total de personas: {}", household.size);
    let _ = writeln!(
        out,
        "Adultos equivalentes (estimados): {:.2}",
        household.equivalence_units
    );
    let _ = writeln!(out, "Menores de 18 años: {}", household.minors);
    let _ = writeln!(out, "Mayores de 64 años: {}", household.seniors);
    let _ = writeln!(out);

    let _ = writeln!(out, "## Resultado ({})", assessment.period_label);
    let _ = writeln!(out, "Región: {}", assessment.region);
    let _ = writeln!(
        out,
        "Línea de pobreza: {}",
        format_money(assessment.thresholds.poverty_line)
    );
    let _ = writeln!(
        out,
        "Línea de indigencia: {}",
        format_money(assessment.thresholds.destitution_line)
    );
    let _ = writeln!(out, "Ingreso del hogar: {}", format_money(assessment.income));
    let _ = writeln!(
        out,
        "Respecto de la línea de pobreza: {}",
        format_gap(&assessment.poverty_gap)
    );
    let _ = writeln!(
        out,
        "Respecto de la línea de indigencia: {}",
        format_gap(&assessment.destitution_gap)
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", verdict(assessment.classification));
    if let Some(stratum) = assessment.classification.stratum() {
        let _ = writeln!(out, "{}", stratum_note(stratum));
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "### Comparación con tu percepción");
    let _ = writeln!(out, "{}", assessment.perception_outcome.message());
    let _ = writeln!(out);

    out.push_str(&render_bar_chart(assessment, CHART_WIDTH));
    out
}

/// JSON report
pub fn render_json(assessment: &Assessment) -> serde_json::Result<String> {
    serde_json::to_string_pretty(assessment)
}
