use thiserror::Error;
use tokio::{
    io::{AsyncBufRead, AsyncBufReadExt},
    sync::mpsc,
};
use tracing::{debug, warn};

use crate::{
    error::KioskError,
    kiosk::Action,
    model::{Category, OrderType},
};


// One line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Kiosk(Action),
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown command {0:?}")]
    Unknown(String),

    #[error("{0:?} needs an argument")]
    MissingArgument(&'static str),

    #[error("invalid position {0:?}")]
    BadPosition(String),

    #[error("unknown category {0:?}")]
    BadCategory(String),
}

// Parse a line like `m 3`, `c burger` or `y`
pub fn parse_command(line: &str) -> Result<Command, ParseError> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Err(ParseError::Unknown(String::new()));
    };
    let arg = words.next();

    let action = match head {
        "d" => Action::ChooseOrderType(OrderType::DineIn),
        "t" => Action::ChooseOrderType(OrderType::Takeaway),
        "c" => Action::SetCategory(parse_category(required(arg, "c")?)?),
        "m" => Action::PressTile(parse_position(required(arg, "m")?)?),
        "o" => Action::PressOption(parse_position(required(arg, "o")?)?),
        "y" => Action::ConfirmSelection,
        "n" => Action::CancelSelection,
        "x" => Action::ClearCart,
        "p" => Action::BeginCheckout,
        "r" => Action::CompleteCheckout,
        "q" => return Ok(Command::Quit),
        other => return Err(ParseError::Unknown(other.to_string())),
    };
    Ok(Command::Kiosk(action))
}

fn required<'a>(arg: Option<&'a str>, command: &'static str) -> Result<&'a str, ParseError> {
    arg.ok_or(ParseError::MissingArgument(command))
}

fn parse_position(word: &str) -> Result<usize, ParseError> {
    match word.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ParseError::BadPosition(word.to_string())),
    }
}

// Tabs by index, English or Korean name
fn parse_category(word: &str) -> Result<Category, ParseError> {
    if let Ok(i) = word.parse::<usize>() {
        return Category::TABS
            .get(i)
            .copied()
            .ok_or_else(|| ParseError::BadCategory(word.to_string()));
    }
    Category::TABS
        .into_iter()
        .find(|c| c.label() == word || format!("{:?}", c).eq_ignore_ascii_case(word))
        .ok_or_else(|| ParseError::BadCategory(word.to_string()))
}


// Read lines and forward parsed commands until EOF, `q` or the receiver closes
pub async fn input_task<R>(
    reader: R,
    commands_tx: mpsc::Sender<Command>,
) -> Result<(), KioskError>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        match parse_command(&line) {
            Ok(command) => {
                debug!(?command, "input");
                let quit = command == Command::Quit;
                if commands_tx.send(command).await.is_err() || quit {
                    return Ok(());
                }
            }
            Err(err) => warn!(%err, "ignored input"),
        }
    }

    // EOF behaves like quitting
    let _ = commands_tx.send(Command::Quit).await;
    Ok(())
}
