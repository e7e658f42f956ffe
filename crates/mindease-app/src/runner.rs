//! Plain-text questionnaire over any line reader and writer.

use std::io::{BufRead, Write};

use eyre::Result;

use mindease_core::models::scale::ScaleKind;
use mindease_instruments::assessment::AssessmentResult;
use mindease_instruments::instrument_for;
use mindease_storage::KeyValueStore;

use crate::session::{AssessmentSession, SessionError, Step};

/// Run one assessment: opt-in question, optional restore of the last saved
/// result, both questionnaires, then the result.
pub fn run<S: KeyValueStore>(
    input: &mut impl BufRead,
    out: &mut impl Write,
    store: S,
) -> Result<()> {
    let mut session = AssessmentSession::new(store);

    writeln!(
        out,
        "MindEase self-check (PHQ-9 + GAD-7). Results are educational hints, not a diagnosis.\n"
    )?;

    let allow = ask_yes_no(
        input,
        out,
        &format!(
            "Save the latest result on this device? [{}]",
            if session.allow_save() { "Y/n" } else { "y/N" }
        ),
        session.allow_save(),
    )?;
    session.set_allow_save(allow);

    if session.last_saved().is_some()
        && ask_yes_no(input, out, "Show your last saved result? [y/N]", false)?
    {
        match session.restore_last_saved() {
            Ok(()) => {
                print_result(out, &session)?;
                return Ok(());
            }
            Err(e) => {
                tracing::warn!(error = %e, "could not restore saved result, starting fresh");
                writeln!(out, "The saved result could not be loaded; starting a new check.")?;
            }
        }
    }

    session.start();
    while session.step() != Step::Result {
        let kind = match session.step() {
            Step::Phq9 => ScaleKind::Phq9,
            Step::Gad7 => ScaleKind::Gad7,
            Step::Intro | Step::Result => break,
        };
        ask_scale(input, out, &mut session, kind)?;
        match session.advance() {
            Ok(_) | Err(SessionError::Incomplete { .. }) => {}
            Err(e) => return Err(e.into()),
        }
    }

    print_result(out, &session)
}

fn ask_scale<S: KeyValueStore>(
    input: &mut impl BufRead,
    out: &mut impl Write,
    session: &mut AssessmentSession<S>,
    kind: ScaleKind,
) -> Result<()> {
    let instrument = instrument_for(kind);
    writeln!(
        out,
        "\n{}: over the last two weeks, how often have you been bothered by the following?",
        instrument.name()
    )?;
    for option in instrument.options() {
        writeln!(out, "  {} = {}", option.value, option.label)?;
    }

    for (index, item) in instrument.items().iter().enumerate() {
        if session.responses(kind).is_answered(index) {
            continue;
        }
        loop {
            write!(
                out,
                "[{}/{}] {}. {}: ",
                session.answered_count(kind) + 1,
                instrument.item_count(),
                item.number,
                item.prompt
            )?;
            out.flush()?;
            let line = read_line(input)?;
            let choice = line
                .trim()
                .parse::<i32>()
                .ok()
                .filter(|v| instrument.options().iter().any(|o| o.value == *v));
            match choice.map(|v| session.answer(kind, index, v)) {
                Some(Ok(())) => break,
                _ => writeln!(out, "Please enter a number from 0 to 3.")?,
            }
        }
    }
    Ok(())
}

fn print_result<S: KeyValueStore>(
    out: &mut impl Write,
    session: &AssessmentSession<S>,
) -> Result<()> {
    let result: AssessmentResult = session.result();

    writeln!(out, "\n== Result ==")?;
    for kind in ScaleKind::ALL {
        writeln!(
            out,
            "\n{}",
            instrument_for(kind).format_responses(session.responses(kind))
        )?;
    }

    writeln!(
        out,
        "PHQ-9: {} ({}) - {}",
        result.phq_total, result.phq_info.label, result.phq_info.description
    )?;
    writeln!(out, "  {}", result.phq_info.recommendation)?;
    writeln!(
        out,
        "GAD-7: {} ({}) - {}",
        result.gad_total, result.gad_info.label, result.gad_info.description
    )?;
    writeln!(out, "  {}", result.gad_info.recommendation)?;

    if result.triage.needs_attention() {
        writeln!(out, "\nSafety check: {}", result.triage.level)?;
        for reason in &result.triage.reasons {
            writeln!(out, "  ! {reason}")?;
        }
        for line in &result.support_tips {
            writeln!(out, "  - {line}")?;
        }
    }

    writeln!(out, "\nSelf-help tips:")?;
    for (n, tip) in result.tips.iter().enumerate() {
        writeln!(out, "  {}. {tip}", n + 1)?;
    }
    Ok(())
}

fn ask_yes_no(
    input: &mut impl BufRead,
    out: &mut impl Write,
    prompt: &str,
    default: bool,
) -> Result<bool> {
    write!(out, "{prompt} ")?;
    out.flush()?;
    let line = read_line(input)?;
    Ok(match line.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => true,
        "n" | "no" => false,
        _ => default,
    })
}

fn read_line(input: &mut impl BufRead) -> Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(eyre::eyre!("input closed before the assessment finished"));
    }
    Ok(line)
}
