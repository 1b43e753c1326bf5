//! Interactive bot session.
//!
//! This module wires the command handler to a line-oriented reader and
//! writer. The binary runs it over stdin/stdout; tests run it over
//! in-memory buffers.

pub mod clock;
pub mod command;
pub mod handlers;

pub use clock::{Clock, FixedClock, SystemClock};
pub use command::Command;
pub use handlers::{CommandHandler, Reply};

use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::info;

/// Run a bot session until `close`/`exit` or end of input.
///
/// Before each line is read, `prompt` is written and flushed. Every reply
/// line is written followed by a newline. Input that is not valid UTF-8 is
/// decoded lossily, so a bad line gets a reply instead of ending the session.
///
/// # Arguments
/// * `handler` - Handler owning the address book for this session
/// * `reader` - Source of command lines
/// * `writer` - Destination for prompts and replies
/// * `prompt` - Text written before each read
///
/// # Returns
/// The handler, so callers can inspect the final state of the book
pub async fn run_session<R, W>(
    mut handler: CommandHandler,
    mut reader: R,
    mut writer: W,
    prompt: &str,
) -> Result<CommandHandler>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut buf = Vec::new();

    loop {
        writer.write_all(prompt.as_bytes()).await?;
        writer.flush().await?;

        buf.clear();
        if reader.read_until(b'\n', &mut buf).await? == 0 {
            info!("Input closed, ending session");
            break;
        }

        // Undecodable bytes become U+FFFD and fall through to an invalid-command reply
        let line = String::from_utf8_lossy(&buf);
        let line = line.trim_end_matches(['\n', '\r']);

        let reply = handler.handle_line(line);
        for text in reply.lines() {
            writer.write_all(text.as_bytes()).await?;
            writer.write_all(b"\n").await?;
        }
        writer.flush().await?;

        if reply.is_exit() {
            info!("Exit requested, ending session");
            break;
        }
    }

    Ok(handler)
}
