//! Median calculator menu.

use std::io::{self, BufRead, Write};

use kitbag_stats::{parse_numbers, sample, samples, summarize, Summary};

use crate::console::{parse_index, Console};

/// `[1.0, -5.0, 3.5]`
fn format_numbers(values: &[f64]) -> String {
    format!("{:?}", values)
}

/// Run the menu until the user exits or input ends.
///
/// # Errors
///
/// Only I/O failures on the console are returned; bad input is reported
/// and the loop carries on.
pub fn run<R: BufRead, W: Write>(console: &mut Console<R, W>) -> io::Result<()> {
    loop {
        console.blank()?;
        console.say("Median calculator")?;
        console.say("-----------------")?;
        console.say("1. Enter numbers manually")?;
        console.say("2. Use a predefined test array")?;
        console.say("0. Exit")?;

        let Some(choice) = console.prompt("Choose an option: ")? else {
            console.say("Goodbye.")?;
            return Ok(());
        };

        match choice.as_str() {
            "1" => manual_input(console)?,
            "2" => predefined_sample(console)?,
            "0" => {
                console.say("Goodbye.")?;
                return Ok(());
            }
            _ => console.say("Unknown option, please try again.")?,
        }
    }
}

fn manual_input<R: BufRead, W: Write>(console: &mut Console<R, W>) -> io::Result<()> {
    let Some(line) = console.prompt("Enter numbers separated by spaces: ")? else {
        return Ok(());
    };

    let parsed = parse_numbers(&line);
    for token in &parsed.rejected {
        console.say(format!("Skipping invalid value: '{}'", token))?;
    }

    match summarize(&parsed.numbers) {
        Ok(summary) => {
            console.blank()?;
            console.say(format!("Input numbers : {}", format_numbers(&summary.input)))?;
            print_result(console, &summary)
        }
        Err(e) => console.say(e.user_message()),
    }
}

fn predefined_sample<R: BufRead, W: Write>(console: &mut Console<R, W>) -> io::Result<()> {
    console.blank()?;
    console.say("Predefined test arrays:")?;
    for (idx, values) in samples().iter().enumerate() {
        console.say(format!("  {}. {}", idx + 1, format_numbers(values)))?;
    }

    let Some(choice) = console.prompt("Select a test case number (or press Enter to cancel): ")?
    else {
        return Ok(());
    };
    if choice.is_empty() {
        return console.say("No test case selected.");
    }

    let Some(index) = parse_index(&choice) else {
        return console.say("Invalid selection.");
    };

    let values = match sample(index) {
        Ok(values) => values,
        Err(e) => {
            tracing::debug!("rejected sample selection: {}", e);
            return console.say(e.user_message());
        }
    };

    console.blank()?;
    console.say(format!("Selected test array: {}", format_numbers(values)))?;

    match summarize(values) {
        Ok(summary) => print_result(console, &summary),
        Err(e) => console.say(e.user_message()),
    }
}

fn print_result<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    summary: &Summary,
) -> io::Result<()> {
    console.say(format!("Sorted numbers: {}", format_numbers(&summary.sorted)))?;
    console.say(format!("Median        : {:?}", summary.median))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
    use super::*;

    #[test]
    fn test_format_numbers() {
        assert_eq!(format_numbers(&[1.0, -5.0, 3.5]), "[1.0, -5.0, 3.5]");
        assert_eq!(format_numbers(&[]), "[]");
    }
}
