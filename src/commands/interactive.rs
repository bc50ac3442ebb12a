use std::future::Future;

use mileconv::report::render_rows;
use mileconv::Session;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::sync::oneshot;

const BANNER: &str = "Miles to Multiple Units Converter\n\
    Tip: Use decimals and commas (e.g., 1,234.5). Type `clear` to reset, `quit` to exit.\n";

/// Convert distances typed line by line
#[derive(clap::Parser)]
pub struct Opts {
    /// Don't print the prompt before each line
    #[clap(long)]
    no_prompt: bool,
}

enum Line {
    Convert(String),
    Clear,
    Quit,
}

fn classify(line: &str) -> Line {
    match line.trim() {
        "clear" => Line::Clear,
        "quit" | "exit" => Line::Quit,
        _ => Line::Convert(line.to_string()),
    }
}

/// Runs the session on stdin/stdout until EOF, `quit` or until `shutdown` fires.
///
/// The blocking stdin read can't be cancelled, so the caller has to end the process once this
/// returns.
pub async fn execute(opts: Opts, shutdown: oneshot::Receiver<()>) -> Result<(), super::Error> {
    let shutdown = async move {
        // a dropped sender means no signal will ever arrive
        if shutdown.await.is_err() {
            std::future::pending::<()>().await;
        }
    };

    run(
        &opts,
        BufReader::new(tokio::io::stdin()),
        &mut tokio::io::stdout(),
        shutdown,
    )
    .await
}

async fn run<R, W>(
    opts: &Opts,
    input: R,
    output: &mut W,
    shutdown: impl Future<Output = ()>,
) -> Result<(), super::Error>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    tokio::pin!(shutdown);

    let mut session = Session::new();
    let mut lines = input.lines();

    output.write_all(BANNER.as_bytes()).await?;
    write_line(output, session.status()).await?;

    loop {
        if !opts.no_prompt {
            output.write_all(b"miles> ").await?;
        }
        output.flush().await?;

        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = &mut shutdown => {
                tracing::debug!("interrupted");
                None
            }
        };
        let line = match line {
            Some(line) => line,
            None => break,
        };

        match classify(&line) {
            Line::Quit => break,
            Line::Clear => session.clear(),
            Line::Convert(text) => {
                if session.submit(&text) {
                    output
                        .write_all(render_rows(session.rows()).as_bytes())
                        .await?;
                } else if let Some(err) = session.error() {
                    write_line(output, err).await?;
                }
            }
        }
        write_line(output, session.status()).await?;
    }

    output.write_all(b"\n").await?;
    output.flush().await?;
    Ok(())
}

async fn write_line<W: AsyncWrite + Unpin>(output: &mut W, line: &str) -> std::io::Result<()> {
    output.write_all(line.as_bytes()).await?;
    output.write_all(b"\n").await
}
