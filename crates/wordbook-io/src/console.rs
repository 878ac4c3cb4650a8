use std::future::Future;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

/// Hand every line typed on stdin to `on_line`, in order, until input closes
pub async fn watch_stdin<F, Fut>(on_line: F) -> Result<(), anyhow::Error>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = Result<(), anyhow::Error>>,
{
    watch_lines(BufReader::new(tokio::io::stdin()), on_line).await
}

pub async fn watch_lines<R, F, Fut>(reader: R, mut on_line: F) -> Result<(), anyhow::Error>
where
    R: AsyncBufRead + Unpin,
    F: FnMut(String) -> Fut,
    Fut: Future<Output = Result<(), anyhow::Error>>,
{
    let mut lines = reader.lines();

    while let Some(line) = lines.next_line().await? {
        on_line(line).await?;
    }

    tracing::debug!("Console input closed");
    Ok(())
}
