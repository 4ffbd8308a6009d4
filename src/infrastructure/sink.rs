//! Record sink writing formatted events to an output stream

use tokio::io::{AsyncWrite, AsyncWriteExt, Stdout};
use tracing::error;

use crate::domain::event::LogEvent;
use crate::infrastructure::formatter::JsonRecordFormatter;
use crate::infrastructure::log_messages::diagnostics;
use crate::Result;

/// Writes one record per line and flushes after each one
///
/// Downstream collectors tail the stream, so nothing is held back in a
/// buffer. A failed write or flush is returned to the caller as-is.
pub struct RecordSink<W> {
    writer: W,
    formatter: JsonRecordFormatter,
    records_written: u64,
}

impl RecordSink<Stdout> {
    pub fn stdout() -> Self {
        Self::new(tokio::io::stdout())
    }
}

impl<W: AsyncWrite + Unpin> RecordSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            formatter: JsonRecordFormatter,
            records_written: 0,
        }
    }

    pub async fn emit(&mut self, event: &LogEvent) -> Result<()> {
        let mut line = self.formatter.format(event);
        line.push('\n');

        if let Err(e) = self.write_line(line.as_bytes()).await {
            error!("{}: {}", diagnostics::RECORD_WRITE_FAILED, e);
            return Err(e.into());
        }

        self.records_written += 1;
        Ok(())
    }

    async fn write_line(&mut self, line: &[u8]) -> std::io::Result<()> {
        self.writer.write_all(line).await?;
        self.writer.flush().await
    }

    pub fn records_written(&self) -> u64 {
        self.records_written
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::event::{LogLevel, SourceLocation};
    use crate::domain::types::LoggerName;
    use crate::Error;
    use std::io;
    use std::pin::Pin;
    use std::task::{Context, Poll};

    struct BrokenPipe;

    impl AsyncWrite for BrokenPipe {
        fn poll_write(
            self: Pin<&mut Self>,
            _cx: &mut Context<'_>,
            _buf: &[u8],
        ) -> Poll<io::Result<usize>> {
            Poll::Ready(Err(io::Error::from(io::ErrorKind::BrokenPipe)))
        }

        fn poll_flush(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<io::Result<()>> {
            Poll::Ready(Ok(()))
        }

        fn poll_shutdown(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<io::Result<()>> {
            Poll::Ready(Ok(()))
        }
    }

    fn event(message: &str) -> LogEvent {
        LogEvent::new(
            LogLevel::Info,
            LoggerName::try_new("test-app".to_string()).unwrap(),
            message,
            SourceLocation::new("m", "f", 1),
        )
    }

    #[tokio::test]
    async fn test_each_record_is_one_line() {
        let mut sink = RecordSink::new(Vec::new());
        sink.emit(&event("one")).await.unwrap();
        sink.emit(&event("two")).await.unwrap();

        let output = String::from_utf8(sink.into_inner()).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(output.ends_with('\n'));
        assert!(lines[0].contains(r#""message":"one""#));
        assert!(lines[1].contains(r#""message":"two""#));
    }

    #[tokio::test]
    async fn test_counts_written_records() {
        let mut sink = RecordSink::new(Vec::new());
        assert_eq!(sink.records_written(), 0);
        sink.emit(&event("one")).await.unwrap();
        assert_eq!(sink.records_written(), 1);
        assert!(!sink.get_ref().is_empty());
    }

    #[tokio::test]
    async fn test_broken_pipe_is_reported() {
        let mut sink = RecordSink::new(BrokenPipe);
        let result = sink.emit(&event("lost")).await;

        match result {
            Err(Error::Io(e)) => assert_eq!(e.kind(), io::ErrorKind::BrokenPipe),
            other => panic!("expected broken pipe, got {other:?}"),
        }
        assert_eq!(sink.records_written(), 0);
    }
}
