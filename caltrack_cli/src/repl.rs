//! Line-oriented tracking session.
//!
//! Each input line is one command. Bad input prints an error and the
//! session carries on; it ends at EOF or `quit`.

use caltrack_core::*;
use std::fs::File;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;

const HELP: &str = "\
Commands:
  profile AGE GENDER WEIGHT_KG HEIGHT_CM   set biometrics
  goals KCAL CARBS_G PROTEIN_G FAT_G       set daily goals
  add food|drink KCAL CARBS PROTEIN FAT [ITEM...]
                                           log an intake entry
  intake                                   list logged entries
  report [json]                            BMI, progress and suggestions
  record                                   append today's totals to history
  history                                  show progress history
  export intake|history PATH               write a table as CSV
  help                                     show this help
  quit                                     end the session";

/// Table selector for `export`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Table {
    Intake,
    History,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Profile(Biometrics),
    Goals(Goals),
    Add(IntakeEntry),
    Intake,
    Report { json: bool },
    Record,
    History,
    Export { table: Table, path: PathBuf },
    Help,
    Quit,
}

fn parse_value<T: FromStr>(name: &str, value: Option<&str>) -> Result<T> {
    let raw = value.ok_or_else(|| Error::Parse(format!("missing {}", name)))?;
    raw.parse()
        .map_err(|_| Error::Parse(format!("invalid {}: {}", name, raw)))
}

fn parse_amount(name: &str, value: Option<&str>) -> Result<f64> {
    let amount: f64 = parse_value(name, value)?;
    if !amount.is_finite() || amount < 0.0 {
        return Err(Error::Parse(format!(
            "{} must be a non-negative number, got {}",
            name, amount
        )));
    }
    Ok(amount)
}

/// Parse one input line; blank lines yield `None`
pub fn parse_command(line: &str) -> Result<Option<Command>> {
    let mut parts = line.split_whitespace();
    let Some(keyword) = parts.next() else {
        return Ok(None);
    };

    let command = match keyword.to_lowercase().as_str() {
        "profile" => {
            let biometrics = Biometrics {
                age: parse_value("age", parts.next())?,
                gender: parse_value("gender", parts.next())?,
                weight_kg: parse_amount("weight", parts.next())?,
                height_cm: parse_amount("height", parts.next())?,
            };
            biometrics.validate()?;
            Command::Profile(biometrics)
        }
        "goals" => Command::Goals(Goals {
            calories: parse_value("calorie goal", parts.next())?,
            carbs_g: parse_value("carbohydrate goal", parts.next())?,
            protein_g: parse_value("protein goal", parts.next())?,
            fat_g: parse_value("fat goal", parts.next())?,
        }),
        "add" => {
            let kind: IntakeKind = parse_value("intake type", parts.next())?;
            let calories = parse_amount("calories", parts.next())?;
            let carbs_g = parse_amount("carbs", parts.next())?;
            let protein_g = parse_amount("protein", parts.next())?;
            let fat_g = parse_amount("fat", parts.next())?;
            let item = parts.collect::<Vec<_>>().join(" ");
            Command::Add(IntakeEntry {
                kind,
                item,
                calories,
                carbs_g,
                protein_g,
                fat_g,
            })
        }
        "intake" => Command::Intake,
        "report" => match parts.next() {
            None => Command::Report { json: false },
            Some("json") => Command::Report { json: true },
            Some(other) => {
                return Err(Error::Parse(format!("unknown report format: {}", other)))
            }
        },
        "record" => Command::Record,
        "history" => Command::History,
        "export" => {
            let table = match parts.next() {
                Some("intake") => Table::Intake,
                Some("history") => Table::History,
                Some(other) => return Err(Error::Parse(format!("unknown table: {}", other))),
                None => return Err(Error::Parse("missing table (intake|history)".into())),
            };
            let path = parts
                .next()
                .map(PathBuf::from)
                .ok_or_else(|| Error::Parse("missing export path".into()))?;
            Command::Export { table, path }
        }
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(Error::Parse(format!("unknown command: {}", other))),
    };

    Ok(Some(command))
}

/// Drive a session from `input` until EOF or `quit`
pub fn run<R, W, S>(
    input: R,
    mut out: W,
    store: &mut S,
    id: SessionId,
    rate: &ExerciseRate,
) -> Result<()>
where
    R: BufRead,
    W: Write,
    S: SessionStore,
{
    writeln!(out, "Caltrack session started. Type 'help' for commands.")?;

    for line in input.lines() {
        let line = line?;
        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                writeln!(out, "error: {}", e)?;
                continue;
            }
        };

        if command == Command::Quit {
            break;
        }

        let session = store.require_mut(id)?;
        if let Err(e) = execute(command, session, rate, &mut out) {
            tracing::warn!("Command failed: {}", e);
            writeln!(out, "error: {}", e)?;
        }
    }

    writeln!(out, "Session ended.")?;
    Ok(())
}

fn execute<W: Write>(
    command: Command,
    session: &mut TrackingSession,
    rate: &ExerciseRate,
    out: &mut W,
) -> Result<()> {
    match command {
        Command::Profile(biometrics) => {
            session.set_biometrics(biometrics);
            match session.biometrics().classify() {
                Ok((bmi, category)) => {
                    writeln!(out, "Profile updated. BMI: {:.2} ({})", bmi, category)?
                }
                Err(e) => writeln!(out, "Profile updated. BMI unavailable: {}", e)?,
            }
        }
        Command::Goals(goals) => {
            session.set_goals(goals);
            writeln!(
                out,
                "Goals updated: {} kcal, {} g carbs, {} g protein, {} g fat",
                goals.calories, goals.carbs_g, goals.protein_g, goals.fat_g
            )?;
        }
        Command::Add(entry) => {
            writeln!(
                out,
                "Added {} '{}' ({} kcal).",
                entry.kind, entry.item, entry.calories
            )?;
            session.log_intake(entry);
        }
        Command::Intake => print_intake(session.ledger(), out)?,
        Command::Report { json } => {
            let evaluation = session.evaluate(rate);
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&evaluation)?)?;
            } else {
                print_report(&evaluation, out)?;
            }
        }
        Command::Record => {
            let record = session.record_progress();
            writeln!(
                out,
                "Recorded day {}: {} / {} kcal",
                record.day, record.total_calories, record.goal_calories
            )?;
        }
        Command::History => print_history(session.history(), out)?,
        Command::Export { table, path } => {
            let file = File::create(&path)?;
            let rows = match table {
                Table::Intake => write_intake_csv(session.ledger(), file)?,
                Table::History => write_progress_csv(session.history(), file)?,
            };
            writeln!(out, "Exported {} rows to {}", rows, path.display())?;
        }
        Command::Help => writeln!(out, "{}", HELP)?,
        Command::Quit => {}
    }
    Ok(())
}

fn print_intake<W: Write>(ledger: &IntakeLedger, out: &mut W) -> Result<()> {
    if ledger.is_empty() {
        writeln!(out, "No intake logged yet.")?;
        return Ok(());
    }

    writeln!(
        out,
        "{:<6} {:<20} {:>9} {:>8} {:>8} {:>8}",
        "Type", "Item", "Calories", "Carbs", "Protein", "Fat"
    )?;
    for entry in ledger.entries() {
        writeln!(
            out,
            "{:<6} {:<20} {:>9.1} {:>8.1} {:>8.1} {:>8.1}",
            entry.kind.to_string(),
            entry.item,
            entry.calories,
            entry.carbs_g,
            entry.protein_g,
            entry.fat_g
        )?;
    }
    Ok(())
}

fn print_report<W: Write>(evaluation: &Evaluation, out: &mut W) -> Result<()> {
    match (&evaluation.bmi, &evaluation.bmi_error) {
        (Some(reading), _) => {
            writeln!(out, "BMI: {:.2} ({})", reading.value, reading.category)?
        }
        (None, Some(reason)) => writeln!(out, "BMI unavailable: {}", reason)?,
        (None, None) => writeln!(out, "BMI unavailable")?,
    }
    writeln!(out)?;
    writeln!(
        out,
        "{:<20} {:>10} {:>10} {:>10}",
        "Goal", "Goal Value", "Consumed", "Remaining"
    )?;
    for budget in &evaluation.budgets {
        let label = format!("{} ({})", budget.dimension, budget.dimension.unit());
        writeln!(
            out,
            "{:<20} {:>10} {:>10.1} {:>10.1}",
            label, budget.goal_value, budget.consumed, budget.remaining
        )?;
    }

    writeln!(out)?;
    writeln!(out, "Dashboard:")?;
    for budget in &evaluation.budgets {
        let progress = budget
            .fraction_of_goal()
            .map(|f| format!("{:.0}%", f * 100.0))
            .unwrap_or_else(|| "no goal".into());
        writeln!(
            out,
            "  {}: {} / {} {} ({})",
            budget.dimension,
            budget.consumed,
            budget.goal_value,
            budget.dimension.unit(),
            progress
        )?;
    }

    if !evaluation.suggestions.is_empty() {
        writeln!(out)?;
        writeln!(out, "Suggestions:")?;
        for suggestion in &evaluation.suggestions {
            writeln!(out, "  {}", suggestion)?;
        }
    }
    Ok(())
}

fn print_history<W: Write>(history: &ProgressHistory, out: &mut W) -> Result<()> {
    if history.is_empty() {
        writeln!(out, "No progress recorded yet.")?;
        return Ok(());
    }

    writeln!(out, "{:>4} {:>15} {:>14}", "Day", "Total Calories", "Goal Calories")?;
    for record in history.series() {
        writeln!(
            out,
            "{:>4} {:>15.1} {:>14}",
            record.day, record.total_calories, record.goal_calories
        )?;
    }
    Ok(())
}
