use std::io::{BufRead, Write};

use tracing::info;

use crate::cli::Cli;
use crate::error::{Result, VisitError};
use crate::school::School;
use crate::visitor::{Doctor, Salesman};

/// Runs the doctor pass, a blank separator line, then the salesman pass.
pub fn run(cli: &Cli, out: &mut dyn Write) -> Result<()> {
    let school = School::new();

    let doctor = Doctor::new(cli.doctor.as_str());
    school.perform_operation(&doctor, out)?;

    writeln!(out)?;

    let salesman = Salesman::new(cli.salesman.as_str());
    school.perform_operation(&salesman, out)?;

    out.flush()?;
    info!(doctor = doctor.name(), salesman = salesman.name(), "Both visits complete");
    Ok(())
}

/// Blocks until a line (or end of input) arrives. Has no effect on output.
pub fn pause(input: &mut dyn BufRead) -> Result<()> {
    let mut line = String::new();
    input.read_line(&mut line).map_err(VisitError::Input)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Cursor;

    #[test]
    fn test_run_with_custom_names() {
        let cli = Cli::try_parse_from(["school-visitors", "--doctor", "Grace", "--salesman", "Ada"]).unwrap();
        let mut out = Vec::new();
        run(&cli, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "Doctor: Grace did a health checkup of the child: Ram");
        assert_eq!(lines[3], "");
        assert_eq!(lines[6], "Salesman: Ada gave a school bag to the child: Pam");
    }

    #[test]
    fn test_pause_consumes_one_line() {
        let mut input = Cursor::new("\nleftover\n");
        pause(&mut input).unwrap();
        assert_eq!(input.position(), 1);
    }

    #[test]
    fn test_pause_at_end_of_input() {
        let mut input = Cursor::new("");
        assert!(pause(&mut input).is_ok());
    }
}
