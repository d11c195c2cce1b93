use std::process::Stdio;

use translate_logging::{translate_debug, translate_warn};

use crate::extract::{extract_translation, strip_generation_stats};
use crate::{CommandSettings, TranslateError};

#[async_trait::async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, prompt: &str) -> Result<String, TranslateError>;
}

/// Runs the model as a child process and waits for it to exit.
#[derive(Debug, Clone)]
pub struct CommandTranslator {
    settings: CommandSettings,
}

impl CommandTranslator {
    pub fn new(settings: CommandSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &CommandSettings {
        &self.settings
    }
}

#[async_trait::async_trait]
impl Translator for CommandTranslator {
    async fn translate(&self, prompt: &str) -> Result<String, TranslateError> {
        let program = self.settings.program.display().to_string();
        let child = tokio::process::Command::new(&self.settings.program)
            .args(self.settings.args_for(prompt))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            // A timed-out wait drops the child; make sure it dies with it.
            .kill_on_drop(true)
            .spawn()
            .map_err(|err| TranslateError::InvocationFailure(format!("{program}: {err}")))?;

        let waited = match self.settings.timeout {
            Some(limit) => tokio::time::timeout(limit, child.wait_with_output())
                .await
                .map_err(|_| {
                    TranslateError::InvocationFailure(format!(
                        "{program} did not finish within {}s",
                        limit.as_secs_f32()
                    ))
                })?,
            None => child.wait_with_output().await,
        };
        let output = waited.map_err(|err| TranslateError::InvocationFailure(err.to_string()))?;

        translate_debug!(
            "{} exited with {} (stdout {} bytes, stderr {} bytes)",
            program,
            output.status,
            output.stdout.len(),
            output.stderr.len()
        );

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            translate_warn!("{} failed with {}", program, output.status);
            return Err(TranslateError::ProcessFailure { stderr });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stdout = if self.settings.strip_generation_stats {
            strip_generation_stats(&stdout)
        } else {
            stdout.into_owned()
        };
        Ok(extract_translation(&stdout, prompt))
    }
}
