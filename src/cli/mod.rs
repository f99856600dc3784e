pub mod display;
pub mod error;
pub mod handlers;
pub mod menu;
pub mod session;
pub mod terminal;

pub use error::CliError;
pub use menu::MenuChoice;
pub use session::Session;
pub use terminal::Terminal;

use std::io::{self, BufRead, Write};

use menu::{CHOICE_PROMPT, MENU};

/// メニューループを実行する
///
/// 「6. Exit」または入力の終端で終了する。
pub fn run<R: BufRead, W: Write>(session: &mut Session, input: R, output: W) -> io::Result<()> {
    let mut term = Terminal::new(input, output);

    loop {
        term.say(MENU)?;
        let Some(raw) = term.prompt(CHOICE_PROMPT)? else {
            break;
        };

        match raw.parse::<MenuChoice>() {
            Ok(MenuChoice::Exit) => {
                term.say("Exiting Library Management System. Goodbye!")?;
                break;
            }
            Ok(choice) => handlers::dispatch(session, &mut term, choice)?,
            Err(_) => term.say("Invalid choice. Please try again.")?,
        }
    }

    Ok(())
}
