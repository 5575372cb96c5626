//! Interactive session for the contact assistant.
//!
//! This module runs the read-eval-print loop: it reads command lines, hands
//! them to [`CommandHandler`], and writes replies. [`run_assistant`] wraps the
//! loop with loading and saving so the address book is persisted however the
//! session ends.

pub mod command;
pub mod handlers;

pub use command::Command;
pub use handlers::CommandHandler;

use crate::error::SessionError;
use crate::models::AddressBook;
use crate::repositories::AddressBookRepository;
use chrono::Local;
use std::future::Future;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info};

const GREETING: &str = "Welcome to the assistant bot!";
const PROMPT: &str = "Enter a command: ";
const FAREWELL: &str = "Good bye!";

/// How a session came to an end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user typed `exit` or `close`
    Exit,
    /// Input was closed (Ctrl-D or end of piped input)
    EndOfInput,
    /// The shutdown signal fired (Ctrl-C)
    Interrupted,
}

async fn write_out<W>(output: &mut W, text: &str) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    output.write_all(text.as_bytes()).await?;
    output.flush().await
}

/// Read one line, decoding invalid UTF-8 lossily. `None` at end of input.
async fn read_line<R>(input: &mut R, buf: &mut Vec<u8>) -> std::io::Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
{
    buf.clear();
    if input.read_until(b'\n', buf).await? == 0 {
        return Ok(None);
    }

    let line = String::from_utf8_lossy(buf);
    Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
}

/// Run the command loop over `input` until exit, end of input, or `shutdown`.
///
/// The book is mutated in place; persisting it is left to the caller.
pub async fn run_session<R, W, S>(
    book: &mut AddressBook,
    handler: &CommandHandler,
    mut input: R,
    output: &mut W,
    shutdown: S,
) -> std::io::Result<SessionEnd>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
    S: Future,
{
    tokio::pin!(shutdown);
    let mut buf = Vec::new();

    write_out(output, &format!("{}\n", GREETING)).await?;

    loop {
        write_out(output, PROMPT).await?;

        let line = tokio::select! {
            biased;
            _ = &mut shutdown => {
                info!("Interrupted, ending session");
                write_out(output, &format!("\n{}\n", FAREWELL)).await?;
                return Ok(SessionEnd::Interrupted);
            }
            line = read_line(&mut input, &mut buf) => line?,
        };

        let Some(line) = line else {
            info!("Input closed, ending session");
            write_out(output, &format!("\n{}\n", FAREWELL)).await?;
            return Ok(SessionEnd::EndOfInput);
        };

        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                write_out(output, &format!("{}\n", e)).await?;
                continue;
            }
        };

        let is_exit = command == Command::Exit;
        let today = Local::now().date_naive();
        let reply = handler
            .handle(book, command, today)
            .unwrap_or_else(|e| {
                debug!(error = %e, "Command rejected");
                e.to_string()
            });
        write_out(output, &format!("{}\n", reply)).await?;

        if is_exit {
            return Ok(SessionEnd::Exit);
        }
    }
}

/// Load the address book, run a session, and save the book afterwards.
///
/// The book is saved on every way out of the session, including interrupts
/// and terminal I/O failures.
pub async fn run_assistant<P, R, W, S>(
    repository: &P,
    handler: &CommandHandler,
    input: R,
    mut output: W,
    shutdown: S,
) -> Result<SessionEnd, SessionError>
where
    P: AddressBookRepository + ?Sized,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
    S: Future,
{
    let mut book = repository.load();
    let outcome = run_session(&mut book, handler, input, &mut output, shutdown).await;

    repository.save(&book)?;
    info!(records = book.len(), "Address book saved on exit");

    Ok(outcome?)
}
