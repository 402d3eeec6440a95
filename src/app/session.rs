use crate::adapters::view::TerminalView;
use crate::core::controller::FormController;
use crate::core::{ActionStatus, FormView, Gender, KeyValueStore, Predictor};
use crate::utils::error::Result;
use futures::future::BoxFuture;
use futures::stream::{FuturesUnordered, StreamExt};
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

const HELP: &str =
    "commands: name <text> | male | female | submit | save | clear | wait | show | help | quit";

/// One line of the interactive form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Name(String),
    Check(Gender),
    Submit,
    Save,
    Clear,
    /// Block until every in-flight prediction has settled.
    Wait,
    Show,
    Help,
    Quit,
}

impl SessionCommand {
    pub fn parse(line: &str) -> std::result::Result<Self, String> {
        let line = line.trim_end_matches(['\r', '\n']);
        let (word, rest) = match line.trim_start().split_once(' ') {
            Some((word, rest)) => (word, Some(rest)),
            None => (line.trim(), None),
        };

        match word.to_ascii_lowercase().as_str() {
            // everything after the first space is the raw field value
            "name" => Ok(SessionCommand::Name(rest.unwrap_or_default().to_string())),
            "male" => Ok(SessionCommand::Check(Gender::Male)),
            "female" => Ok(SessionCommand::Check(Gender::Female)),
            "submit" => Ok(SessionCommand::Submit),
            "save" => Ok(SessionCommand::Save),
            "clear" => Ok(SessionCommand::Clear),
            "wait" => Ok(SessionCommand::Wait),
            "show" => Ok(SessionCommand::Show),
            "help" | "?" => Ok(SessionCommand::Help),
            "quit" | "exit" => Ok(SessionCommand::Quit),
            other => Err(format!("unknown command '{}'", other)),
        }
    }
}

/// Runs the form until `quit` or end of input. Submits run in the background
/// while further lines are read, so a slow prediction never blocks the form.
/// At end of input pending predictions are awaited; `quit` drops them.
/// Validation and prediction failures are shown and the loop continues;
/// storage errors end the session.
pub async fn run_session<S, P, R, W>(
    controller: &FormController<S, P, TerminalView>,
    input: R,
    out: &mut W,
) -> Result<()>
where
    S: KeyValueStore,
    P: Predictor,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    writeln!(out, "{}", HELP)?;
    let mut lines = input.lines();
    let mut pending: FuturesUnordered<BoxFuture<'_, Result<ActionStatus>>> =
        FuturesUnordered::new();
    let mut input_open = true;

    loop {
        tokio::select! {
            Some(status) = pending.next(), if !pending.is_empty() => {
                report(controller, status?, out)?;
            }
            line = lines.next_line(), if input_open => {
                let Some(line) = line? else {
                    input_open = false;
                    continue;
                };
                if line.trim().is_empty() {
                    continue;
                }

                let command = match SessionCommand::parse(&line) {
                    Ok(command) => command,
                    Err(e) => {
                        writeln!(out, "{}\n{}", e, HELP)?;
                        continue;
                    }
                };
                tracing::debug!("Session command: {:?}", command);

                match command {
                    SessionCommand::Name(name) => controller.view().type_name(&name),
                    SessionCommand::Check(gender) => controller.view().check(gender),
                    SessionCommand::Submit => pending.push(Box::pin(controller.submit())),
                    SessionCommand::Save => report(controller, controller.save()?, out)?,
                    SessionCommand::Clear => report(controller, controller.clear()?, out)?,
                    SessionCommand::Wait => {
                        while let Some(status) = pending.next().await {
                            report(controller, status?, out)?;
                        }
                    }
                    SessionCommand::Show => writeln!(out, "{}", controller.view().snapshot())?,
                    SessionCommand::Help => writeln!(out, "{}", HELP)?,
                    SessionCommand::Quit => {
                        if !pending.is_empty() {
                            tracing::debug!(
                                "Quitting with {} prediction(s) in flight",
                                pending.len()
                            );
                        }
                        break;
                    }
                }
            }
            else => break,
        }
    }

    Ok(())
}

fn report<S, P, W>(
    controller: &FormController<S, P, TerminalView>,
    status: ActionStatus,
    out: &mut W,
) -> Result<()>
where
    S: KeyValueStore,
    P: Predictor,
    W: Write,
{
    if status == ActionStatus::Superseded {
        // the newer submit reports the state
        tracing::debug!("Prediction superseded");
        return Ok(());
    }
    if !status.is_done() {
        tracing::debug!("Action ended with {:?}", status);
    }
    writeln!(out, "{}", controller.view().snapshot())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            SessionCommand::parse("name Mary Ann"),
            Ok(SessionCommand::Name("Mary Ann".to_string()))
        );
        assert_eq!(
            SessionCommand::parse("name"),
            Ok(SessionCommand::Name(String::new()))
        );
        assert_eq!(
            SessionCommand::parse("FEMALE\r\n"),
            Ok(SessionCommand::Check(Gender::Female))
        );
        assert_eq!(SessionCommand::parse("exit"), Ok(SessionCommand::Quit));
        assert!(SessionCommand::parse("launch").is_err());
    }

    #[test]
    fn test_name_keeps_inner_whitespace() {
        assert_eq!(
            SessionCommand::parse("name  Jean  Luc "),
            Ok(SessionCommand::Name(" Jean  Luc ".to_string()))
        );
    }
}
