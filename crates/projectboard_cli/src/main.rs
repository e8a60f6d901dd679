//! Text front-end for the project board.
//!
//! # Responsibility
//! - Read one submission per stdin line as `title|description|people`.
//! - Print the active and finished lists after every accepted submission.

use projectboard_core::{init_logging, App, CoreConfig, ListKind, ProjectList, RawProjectInput};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = match CoreConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("projectboard: {err}");
            return ExitCode::FAILURE;
        }
    };
    if let Some(dir) = &config.log_dir {
        if let Err(err) = init_logging(config.log_level, dir) {
            eprintln!("projectboard: {err}");
            return ExitCode::FAILURE;
        }
    }

    match run(io::stdin().lock(), io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("projectboard: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(input: impl BufRead, mut output: impl Write) -> io::Result<()> {
    let app = App::new();
    let mut form = app.project_input();
    let lists = [
        app.project_list(ListKind::Active),
        app.project_list(ListKind::Finished),
    ];

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        form.fill(parse_line(&line));
        match form.submit() {
            Ok(_) => {
                for list in &lists {
                    render(list, &mut output)?;
                }
            }
            Err(err) => eprintln!("{err}"),
        }
    }
    Ok(())
}

/// Splits `title|description|people`; missing parts read as blank.
fn parse_line(line: &str) -> RawProjectInput {
    let mut parts = line.splitn(3, '|');
    let mut next = || parts.next().unwrap_or_default().trim().to_string();
    let title = next();
    let description = next();
    let people = next();
    RawProjectInput::new(title, description, people)
}

fn render(list: &ProjectList, output: &mut impl Write) -> io::Result<()> {
    writeln!(output, "{}", list.heading())?;
    for title in list.rendered_titles() {
        writeln!(output, "  - {title}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{parse_line, run};

    #[test]
    fn parse_line_fills_missing_parts_with_blanks() {
        let parsed = parse_line(" Board | Kanban board | 3 ");
        assert_eq!(parsed.title, "Board");
        assert_eq!(parsed.description, "Kanban board");
        assert_eq!(parsed.people, "3");

        let parsed = parse_line("Board");
        assert_eq!(parsed.description, "");
        assert_eq!(parsed.people, "");
    }

    #[test]
    fn run_prints_both_lists_for_accepted_lines_only() {
        let input = "Board|Kanban board|3\n\nBad|x|9\nDocs|Write the guide|1\n";
        let mut output = Vec::new();
        run(input.as_bytes(), &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert_eq!(
            text,
            "ACTIVE PROJECTS\n  - Board\nFINISHED PROJECTS\n\
             ACTIVE PROJECTS\n  - Board\n  - Docs\nFINISHED PROJECTS\n"
        );
    }
}
