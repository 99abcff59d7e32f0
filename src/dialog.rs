//! Blocking confirmation and alert dialogs.
//!
//! DESIGN
//! ======
//! The screen never talks to a terminal (or any widget) directly; it issues
//! a `ConfirmRequest` or an `Alert` through the `Dialog` trait and suspends
//! until the dialog resolves. `TerminalDialog` renders on any async
//! reader/writer pair (stdin/stderr in the binary), `AssumeYes` answers every
//! confirmation positively for non-interactive use.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Stderr, Stdin};
use tokio::sync::Mutex;
use tracing::{info, warn};

// =============================================================================
// REQUESTS
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
}

impl Icon {
    fn tag(self) -> &'static str {
        match self {
            Self::Success => "[ok]",
            Self::Error => "[error]",
            Self::Warning => "[warning]",
        }
    }
}

/// A question the user must explicitly confirm or cancel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmRequest {
    pub title: &'static str,
    pub text: &'static str,
    pub icon: Icon,
    pub confirm_label: &'static str,
    pub cancel_label: &'static str,
}

/// A message the user acknowledges. Carries no answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub icon: Icon,
    pub title: &'static str,
    pub text: &'static str,
}

impl Alert {
    #[must_use]
    pub const fn success(title: &'static str, text: &'static str) -> Self {
        Self { icon: Icon::Success, title, text }
    }

    #[must_use]
    pub const fn error(title: &'static str, text: &'static str) -> Self {
        Self { icon: Icon::Error, title, text }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Cancelled,
}

// =============================================================================
// DIALOG TRAIT
// =============================================================================

/// Modal dialog service. Enables scripted dialogs in tests.
#[async_trait::async_trait]
pub trait Dialog: Send + Sync {
    /// Show a confirmation and wait for the user's answer.
    async fn confirm(&self, request: &ConfirmRequest) -> Confirmation;

    /// Show an alert and wait until it has been acknowledged.
    async fn alert(&self, alert: &Alert);
}

#[async_trait::async_trait]
impl<T: Dialog + ?Sized> Dialog for Box<T> {
    async fn confirm(&self, request: &ConfirmRequest) -> Confirmation {
        (**self).confirm(request).await
    }

    async fn alert(&self, alert: &Alert) {
        (**self).alert(alert).await;
    }
}

// =============================================================================
// TERMINAL DIALOG
// =============================================================================

/// Line-oriented dialog. Prompts go to the writer; answers come from the
/// reader. Only `y`/`yes` (any case) confirms; EOF and read errors cancel.
pub struct TerminalDialog<R, W> {
    io: Mutex<(R, W)>,
}

impl TerminalDialog<BufReader<Stdin>, Stderr> {
    /// Prompt on stderr, read answers from stdin. Stdout stays free for output.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()), tokio::io::stderr())
    }
}

impl<R, W> TerminalDialog<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    pub fn new(reader: R, writer: W) -> Self {
        Self { io: Mutex::new((reader, writer)) }
    }

    /// Recover the reader and writer, e.g. to inspect what was written.
    pub fn into_inner(self) -> (R, W) {
        self.io.into_inner()
    }
}

#[async_trait::async_trait]
impl<R, W> Dialog for TerminalDialog<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    async fn confirm(&self, request: &ConfirmRequest) -> Confirmation {
        let mut io = self.io.lock().await;
        let (reader, writer) = &mut *io;

        let prompt = format!(
            "{} {}\n{}\n{} / {} [y/N] ",
            request.icon.tag(),
            request.title,
            request.text,
            request.confirm_label,
            request.cancel_label
        );
        if let Err(e) = write_flush(writer, &prompt).await {
            warn!(error = %e, "dialog prompt write failed; treating as cancel");
            return Confirmation::Cancelled;
        }

        let mut answer = String::new();
        match reader.read_line(&mut answer).await {
            Ok(_) => parse_answer(&answer),
            Err(e) => {
                warn!(error = %e, "dialog answer read failed; treating as cancel");
                Confirmation::Cancelled
            }
        }
    }

    async fn alert(&self, alert: &Alert) {
        let mut io = self.io.lock().await;
        let (_, writer) = &mut *io;
        let line = format!("{} {}: {}\n", alert.icon.tag(), alert.title, alert.text);
        if let Err(e) = write_flush(writer, &line).await {
            warn!(error = %e, title = alert.title, "dialog alert write failed");
        }
    }
}

async fn write_flush<W: AsyncWrite + Unpin>(writer: &mut W, text: &str) -> std::io::Result<()> {
    writer.write_all(text.as_bytes()).await?;
    writer.flush().await
}

fn parse_answer(answer: &str) -> Confirmation {
    match answer.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Confirmation::Confirmed,
        _ => Confirmation::Cancelled,
    }
}

// =============================================================================
// ASSUME YES
// =============================================================================

/// Confirms every request without asking; alerts pass through to `inner`.
pub struct AssumeYes<D> {
    inner: D,
}

impl<D> AssumeYes<D> {
    pub fn new(inner: D) -> Self {
        Self { inner }
    }
}

#[async_trait::async_trait]
impl<D: Dialog> Dialog for AssumeYes<D> {
    async fn confirm(&self, request: &ConfirmRequest) -> Confirmation {
        info!(title = request.title, "confirmation assumed");
        Confirmation::Confirmed
    }

    async fn alert(&self, alert: &Alert) {
        self.inner.alert(alert).await;
    }
}

#[cfg(test)]
#[path = "dialog_test.rs"]
mod tests;
