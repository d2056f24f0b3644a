use std::cell::Cell;
use std::process::ExitCode;

use dropt::prelude::*;
use dropt::{Bool, ConsoleInterface, Custom, ErrorKind, HelpParams, Integer, OptionSpec, ParseContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Face {
    Unknown,
    Heads,
    Tails,
}

fn handle_face(face: &mut Face, value: Option<&str>) -> Result<(), ErrorKind> {
    match value {
        None | Some("") => Err(ErrorKind::InsufficientArguments),
        Some("heads") => {
            *face = Face::Heads;
            Ok(())
        }
        Some("tails") => {
            *face = Face::Tails;
            Ok(())
        }
        Some(_) => Err(ErrorKind::Mismatch),
    }
}

// Both `-h` and `-?` write the same flag.
fn help_flag(
    show_help: &Cell<bool>,
) -> Custom<impl FnMut(Option<&str>) -> Result<(), ErrorKind> + '_> {
    Custom::flag(move |value: Option<&str>| {
        let mut flag = false;
        Bool::new(&mut flag).handle(value)?;
        show_help.set(flag);
        Ok(())
    })
}

fn main() -> ExitCode {
    let show_help = Cell::new(false);
    let mut show_version = false;
    let mut i: i32 = 0;
    let mut face = Face::Unknown;

    let table = vec![
        OptionSpec::new(Some('h'), Some("help"), help_flag(&show_help))
            .description("Shows help.")
            .halt(),
        OptionSpec::new(Some('?'), None, help_flag(&show_help))
            .halt()
            .hidden(),
        OptionSpec::new(None, Some("version"), Bool::new(&mut show_version))
            .description("Shows version information.")
            .halt(),
        OptionSpec::new(Some('i'), Some("int"), Integer::new(&mut i))
            .description("Sample integer option.")
            .argument("value"),
        OptionSpec::new(
            Some('f'),
            Some("face"),
            Custom::new(|value: Option<&str>| handle_face(&mut face, value)),
        )
        .description("Sample custom option.")
        .argument("{heads, tails}"),
    ];
    let mut context = match ParseContext::new(table) {
        Ok(context) => context,
        Err(error) => {
            eprintln!("dropt_example: {error}");
            return ExitCode::FAILURE;
        }
    };

    let interface = ConsoleInterface::default();
    let rest = match context.parse_or_report("dropt_example", std::env::args().skip(1), &interface) {
        Ok(rest) => rest,
        Err(code) => return ExitCode::from(code as u8),
    };
    let help = context.render_help(&HelpParams::default());
    drop(context);

    if show_help.get() {
        interface.print(format!(
            "Usage: dropt_example [options] [--] [operands]\n\nOptions:\n{help}"
        ));
    } else if show_version {
        interface.print("dropt_example 1.0".to_string());
    } else {
        println!("int value: {i}");
        println!("face value: {face:?}");
        println!("Operands: {}", rest.join(" "));
    }

    ExitCode::SUCCESS
}
