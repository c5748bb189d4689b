use crate::core::form::{ConversionForm, FormOutcome, MIN_VALUE, NOT_SUPPORTED_MESSAGE};
use crate::core::ConversionTable;
use crate::error::{ConvertError, ConvertResult};
use crate::types::{parse_selection, ConversionRequest, Unit};
use colored::Colorize;
use serde_json::json;
use std::io::{self, BufRead, Write};

/// Smallest magnitude shown in fixed-point notation
const FIXED_MIN: f64 = 1e-6;
/// Magnitudes at or above this are shown in scientific notation
const FIXED_MAX: f64 = 1e15;

/// Format a number for display, removing unnecessary decimal places
///
/// Magnitudes in `[1e-6, 1e15)` print with up to 6 decimals; anything
/// smaller or larger prints in scientific notation so no digits are lost.
pub(crate) fn format_number(n: f64) -> String {
    if !n.is_finite() {
        return n.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }
    let magnitude = n.abs();
    if !(FIXED_MIN..FIXED_MAX).contains(&magnitude) {
        return format!("{n:e}");
    }
    format!("{n:.6}")
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

/// Execute the convert command
pub fn convert(
    value: f64,
    from: Unit,
    to: Unit,
    json_output: bool,
    verbose: bool,
) -> ConvertResult<()> {
    let table = ConversionTable::global();
    let request = ConversionRequest::new(value, from, to);

    if verbose && !json_output {
        println!("{}", "🔁 Unit Converter".bold().green());
        println!("   Value: {}", format_number(value));
        println!("   From:  {}", from.label().bright_blue());
        println!("   To:    {}", to.label().bright_blue());
        match table.factor(from, to) {
            Some(factor) => println!("   Factor: {}\n", format_number(factor).cyan()),
            None => println!("   Factor: {}\n", "none registered".yellow()),
        }
    }

    let result = request.evaluate(table);

    if json_output {
        let body = match result {
            Ok(converted) => json!({
                "value": value,
                "from": from,
                "to": to,
                "result": converted,
            }),
            Err(e) => json!({
                "value": value,
                "from": from,
                "to": to,
                "error": NOT_SUPPORTED_MESSAGE,
                "detail": e.to_string(),
            }),
        };
        println!("{}", serde_json::to_string_pretty(&body)?);
        return result.map(|_| ()).map_err(ConvertError::from);
    }

    match result {
        Ok(converted) => {
            println!(
                "{} {} = {} {}",
                format_number(value),
                from.id(),
                format_number(converted).bold().green(),
                to.id()
            );
            Ok(())
        }
        Err(e) => {
            println!("{}", format!("❌ {NOT_SUPPORTED_MESSAGE}").bold().red());
            if !table.targets(from).is_empty() {
                let targets: Vec<&str> = table.targets(from).iter().map(Unit::id).collect();
                println!("   {} converts to: {}", from.id(), targets.join(", ").cyan());
            }
            Err(e.into())
        }
    }
}

/// Execute the units command - list units and the rule table
pub fn units() -> ConvertResult<()> {
    let table = ConversionTable::global();

    println!("{}", "📏 Units".bold().green());
    for unit in Unit::ALL {
        println!("   {:<10} {}", unit.id().bright_blue(), unit.label());
    }
    println!();

    println!("{}", "🔁 Conversion rules".bold().green());
    for rule in table.rules() {
        println!(
            "   {:<10} → {:<10} × {}",
            rule.from.id(),
            rule.to.id(),
            format_number(rule.factor).cyan()
        );
    }
    println!();
    println!(
        "{}",
        "   Any other pair (including same-unit) is not supported".yellow()
    );

    Ok(())
}

/// Execute the form command - interactive prompt on stdin/stdout
pub fn form(verbose: bool) -> ConvertResult<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut output = stdout.lock();

    writeln!(output, "{}", "🔁 Unit Converter".bold().green())?;
    if verbose {
        writeln!(
            output,
            "   Units: {}",
            Unit::ALL.iter().map(Unit::id).collect::<Vec<_>>().join(", ")
        )?;
    }
    writeln!(output)?;

    let outcome = run_form(&mut input, &mut output, ConversionTable::global())?;
    if outcome.is_supported() {
        writeln!(output, "{}", outcome.message().bold().green())?;
    } else {
        writeln!(output, "{}", outcome.message().bold().yellow())?;
    }
    Ok(())
}

/// Drive the form from `input`, writing prompts to `output`
///
/// Re-prompts on blank selections, unknown units and out-of-range values.
/// Fails only if `input` ends early or an I/O error occurs.
pub fn run_form<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    table: &ConversionTable,
) -> ConvertResult<FormOutcome> {
    let mut form = ConversionForm {
        value: prompt_value(input, output)?,
        ..ConversionForm::default()
    };
    while !form.can_submit() {
        if form.from.is_none() {
            form.from = prompt_unit(input, output, "Convert from")?;
        } else {
            form.to = prompt_unit(input, output, "Convert to")?;
        }
    }

    form.submit(table)
}

fn read_answer<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> ConvertResult<String> {
    write!(output, "{prompt}: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(ConvertError::Io(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input ended before the form was complete",
        )));
    }
    Ok(line.trim().to_string())
}

fn prompt_value<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> ConvertResult<f64> {
    let prompt = format!("Enter the value [{}]", format_number(MIN_VALUE));
    loop {
        let answer = read_answer(input, output, &prompt)?;
        if answer.is_empty() {
            return Ok(MIN_VALUE);
        }
        match answer.parse::<f64>() {
            Ok(v) if v >= MIN_VALUE => return Ok(v),
            Ok(_) => writeln!(
                output,
                "   Value must be at least {}",
                format_number(MIN_VALUE)
            )?,
            Err(_) => writeln!(output, "   '{answer}' is not a number")?,
        }
    }
}

/// Ask once for a unit; `None` leaves the selector on its placeholder
fn prompt_unit<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> ConvertResult<Option<Unit>> {
    let choices = Unit::ALL.iter().map(Unit::id).collect::<Vec<_>>().join("/");
    let answer = read_answer(input, output, &format!("{label} ({choices})"))?;
    match parse_selection(&answer) {
        Ok(selection @ Some(_)) => Ok(selection),
        Ok(None) => {
            writeln!(output, "   Select unit")?;
            Ok(None)
        }
        Err(e) => {
            writeln!(output, "   {e}")?;
            Ok(None)
        }
    }
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
