//! Terminal chat loop
//!
//! Reads one line per turn, shows the reply stamped with its local time and
//! the lead snapshot. A line holding only a number picks the matching quick
//! reply.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use lead_agent_agent::ChatSession;

use crate::ServerError;

/// One parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleInput {
    /// Text to submit as a user turn
    Utterance(String),
    /// Print the lead snapshot
    Snapshot,
    /// End the session
    Quit,
    /// Blank line
    Empty,
}

/// Parse a console line. `quick_replies` is 1-indexed for the user.
pub fn parse_input(line: &str, quick_replies: &[String]) -> ConsoleInput {
    let line = line.trim();
    match line {
        "" => ConsoleInput::Empty,
        "/quit" | "/exit" => ConsoleInput::Quit,
        "/snapshot" => ConsoleInput::Snapshot,
        _ => match line.parse::<usize>() {
            Ok(n) if (1..=quick_replies.len()).contains(&n) => {
                ConsoleInput::Utterance(quick_replies[n - 1].clone())
            }
            _ => ConsoleInput::Utterance(line.to_string()),
        },
    }
}

/// Drive `session` from `reader` until EOF or `/quit`, writing to `writer`
pub async fn run_console<R, W>(
    session: &ChatSession,
    reader: R,
    mut writer: W,
) -> Result<(), ServerError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    write_intro(session, &mut writer).await?;

    let mut lines = reader.lines();
    loop {
        writer.write_all(b"\n> ").await?;
        writer.flush().await?;

        let Some(line) = lines.next_line().await? else {
            session.close("input closed");
            break;
        };

        match parse_input(&line, session.quick_replies()) {
            ConsoleInput::Empty => continue,
            ConsoleInput::Quit => {
                session.close("user quit");
                break;
            }
            ConsoleInput::Snapshot => {
                let snapshot = session.lead_snapshot();
                writer.write_all(snapshot.to_string().as_bytes()).await?;
            }
            ConsoleInput::Utterance(text) => {
                writer.write_all(format!("you: {text}\n").as_bytes()).await?;
                writer.flush().await?;

                let Some(outcome) = session.submit(&text).await? else {
                    continue;
                };

                let sent_at = session
                    .transcript()
                    .last()
                    .map(|message| message.display_time())
                    .unwrap_or_default();
                writer
                    .write_all(format!("\n[{}] {}\n\n", sent_at, outcome.reply).as_bytes())
                    .await?;
                writer
                    .write_all(outcome.context.snapshot().to_string().as_bytes())
                    .await?;
                if outcome.became_hot() {
                    writer.write_all(b"(handed over to an expert)\n").await?;
                }
            }
        }
    }

    writer.flush().await?;
    Ok(())
}

async fn write_intro<W>(session: &ChatSession, writer: &mut W) -> Result<(), ServerError>
where
    W: AsyncWrite + Unpin,
{
    let mut intro = format!("{}\n\nQuick replies:\n", session.greeting());
    for (i, reply) in session.quick_replies().iter().enumerate() {
        intro.push_str(&format!("  {}. {}\n", i + 1, reply));
    }
    intro.push_str("Commands: /snapshot, /quit\n");
    writer.write_all(intro.as_bytes()).await?;
    Ok(())
}
