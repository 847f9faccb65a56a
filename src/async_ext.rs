use crate::error::{RespondError, Result};
use crate::sink::RecordingSink;
use tokio::io::{AsyncWrite, AsyncWriteExt};

impl RecordingSink {
    /// Flush the committed response to an async stream.
    ///
    /// A sink that never committed has no bytes to ship; that is an
    /// I/O error here rather than a silent empty write.
    pub async fn write_to_stream<S>(&self, stream: &mut S) -> Result<()>
    where
        S: AsyncWrite + Unpin,
    {
        if !self.is_written() {
            return Err(RespondError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "response not committed",
            )));
        }

        stream.write_all(self.raw_bytes()).await?;
        stream.flush().await?;
        Ok(())
    }
}
