use std::path::{Path, PathBuf};

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use kanal::AsyncSender;
use tokio_util::sync::CancellationToken;
use wordbook_types::AppEvent;

const HELP: &str = "\
commands:
  <word>              look up a word
  /detail [word]      open the detail screen
  /camera             toggle the camera
  /close              close the camera
  /capture <file>     take the profile photo from an image file
  /lang <code>        switch language
  /quit               exit";

/// What one console line asks for
#[derive(Debug)]
pub enum ConsoleInput {
    Event(AppEvent),
    /// Stand-in for a camera shot: read the image from disk
    CaptureFile(PathBuf),
    Help,
    Unknown(String),
}

pub fn parse_line(line: &str) -> ConsoleInput {
    let Some(command) = line.trim_start().strip_prefix('/') else {
        return ConsoleInput::Event(AppEvent::LookupWord(line.to_string()));
    };

    let (name, arg) = match command.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (command.trim(), ""),
    };

    match (name, arg) {
        ("camera", _) => ConsoleInput::Event(AppEvent::ToggleCamera),
        ("close", _) => ConsoleInput::Event(AppEvent::CloseCamera),
        ("capture", "") => ConsoleInput::Unknown(line.to_string()),
        ("capture", path) => ConsoleInput::CaptureFile(PathBuf::from(path)),
        ("lang", "") => ConsoleInput::Unknown(line.to_string()),
        ("lang", code) => ConsoleInput::Event(AppEvent::UpdateLanguage(code.to_string())),
        ("detail", "") => ConsoleInput::Event(AppEvent::OpenDetail(None)),
        ("detail", word) => ConsoleInput::Event(AppEvent::OpenDetail(Some(word.to_string()))),
        ("quit" | "exit", _) => ConsoleInput::Event(AppEvent::Shutdown),
        ("help", _) => ConsoleInput::Help,
        _ => ConsoleInput::Unknown(line.to_string()),
    }
}

/// Encode an image file the way a camera hands over a shot
pub async fn capture_from_file(path: &Path) -> anyhow::Result<String> {
    let bytes = tokio::fs::read(path).await?;
    Ok(format!("data:image/png;base64,{}", STANDARD.encode(bytes)))
}

async fn forward_line(line: String, event_tx: &AsyncSender<AppEvent>) -> anyhow::Result<()> {
    let event = match parse_line(&line) {
        ConsoleInput::Event(event) => event,
        ConsoleInput::CaptureFile(path) => match capture_from_file(&path).await {
            Ok(data) => AppEvent::PhotoCaptured(data),
            Err(e) => {
                tracing::error!("Unable to read image {}: {}", path.display(), e);
                return Ok(());
            }
        },
        ConsoleInput::Help => {
            println!("{HELP}");
            return Ok(());
        }
        ConsoleInput::Unknown(line) => {
            tracing::warn!("Unknown command: {} (try /help)", line);
            return Ok(());
        }
    };

    event_tx.send(event).await?;
    Ok(())
}

/// Console bridge standing in for the host UI's event handlers
pub async fn watcher_io(
    cancel: CancellationToken,
    event_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    tracing::info!("Starting console watcher");

    let tx = event_tx.clone();
    tokio::select! {
        result = wordbook_io::console::watch_stdin(move |line| {
            let tx = tx.clone();
            async move { forward_line(line, &tx).await }
        }) => {
            if let Err(e) = result {
                tracing::error!("Console watcher error: {}", e);
            }
            // Input closed, nothing more can drive the app
            let _ = event_tx.send(AppEvent::Shutdown).await;
        }
        _ = cancel.cancelled() => {
            tracing::info!("Console watcher stopping");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_lines_are_lookups() {
        assert!(matches!(
            parse_line("serendipity"),
            ConsoleInput::Event(AppEvent::LookupWord(w)) if w == "serendipity"
        ));
        assert!(matches!(
            parse_line("   "),
            ConsoleInput::Event(AppEvent::LookupWord(w)) if w == "   "
        ));
    }

    #[test]
    fn commands_map_to_events() {
        assert!(matches!(
            parse_line("/camera"),
            ConsoleInput::Event(AppEvent::ToggleCamera)
        ));
        assert!(matches!(
            parse_line("/close"),
            ConsoleInput::Event(AppEvent::CloseCamera)
        ));
        assert!(matches!(
            parse_line("/lang  zh "),
            ConsoleInput::Event(AppEvent::UpdateLanguage(c)) if c == "zh"
        ));
        assert!(matches!(
            parse_line("/detail"),
            ConsoleInput::Event(AppEvent::OpenDetail(None))
        ));
        assert!(matches!(
            parse_line("/detail cat"),
            ConsoleInput::Event(AppEvent::OpenDetail(Some(w))) if w == "cat"
        ));
        assert!(matches!(
            parse_line("/quit"),
            ConsoleInput::Event(AppEvent::Shutdown)
        ));
        assert!(matches!(
            parse_line("/capture me.png"),
            ConsoleInput::CaptureFile(p) if p == PathBuf::from("me.png")
        ));
    }

    #[test]
    fn incomplete_commands_are_unknown() {
        assert!(matches!(parse_line("/lang"), ConsoleInput::Unknown(_)));
        assert!(matches!(parse_line("/capture"), ConsoleInput::Unknown(_)));
        assert!(matches!(parse_line("/dance"), ConsoleInput::Unknown(_)));
    }

    #[tokio::test]
    async fn captured_file_becomes_data_uri() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("me.png");
        std::fs::write(&path, b"ABC").unwrap();

        let data = capture_from_file(&path).await.unwrap();
        assert_eq!(data, "data:image/png;base64,QUJD");
    }

    #[tokio::test]
    async fn forwarded_lines_arrive_in_order() {
        let (tx, rx) = kanal::unbounded_async::<AppEvent>();

        forward_line("cat".to_string(), &tx).await.unwrap();
        forward_line("/dance".to_string(), &tx).await.unwrap();
        forward_line("/lang zh".to_string(), &tx).await.unwrap();

        assert!(matches!(rx.recv().await, Ok(AppEvent::LookupWord(w)) if w == "cat"));
        assert!(matches!(rx.recv().await, Ok(AppEvent::UpdateLanguage(c)) if c == "zh"));
        assert!(rx.is_empty());
    }
}
