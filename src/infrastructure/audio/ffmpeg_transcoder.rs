use std::io::ErrorKind;
use std::path::PathBuf;
use std::process::Command;

use crate::application::ports::{AudioTranscoder, TranscoderError};
use crate::domain::AudioFormat;

/// Subprocess wrapper around the external `ffmpeg` binary. Input and output
/// travel through named temporary files whose handles delete them on drop,
/// so transient files are removed on every exit path, failures included.
pub struct FfmpegTranscoder {
    binary: String,
    work_dir: Option<PathBuf>,
}

impl FfmpegTranscoder {
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
            work_dir: None,
        }
    }

    /// Place transient files under `dir` instead of the system temp
    /// directory.
    pub fn with_work_dir(mut self, dir: PathBuf) -> Self {
        self.work_dir = Some(dir);
        self
    }

    fn temp_file(&self, suffix: &str) -> Result<tempfile::NamedTempFile, std::io::Error> {
        let mut builder = tempfile::Builder::new();
        builder.prefix("rapporteur-").suffix(suffix);
        match &self.work_dir {
            Some(dir) => builder.tempfile_in(dir),
            None => builder.tempfile(),
        }
    }
}

impl Default for FfmpegTranscoder {
    fn default() -> Self {
        Self::new("ffmpeg")
    }
}

impl AudioTranscoder for FfmpegTranscoder {
    fn transcode_to_wav(
        &self,
        data: &[u8],
        format: AudioFormat,
    ) -> Result<Vec<u8>, TranscoderError> {
        let input = self.temp_file(&format!(".{}", format.extension()))?;
        std::fs::write(input.path(), data)?;

        let output = self.temp_file(".wav")?;

        tracing::debug!(
            source_format = format.extension(),
            input_bytes = data.len(),
            "Invoking ffmpeg for mono/16kHz WAV conversion"
        );

        let run = Command::new(&self.binary)
            .arg("-y")
            .arg("-i")
            .arg(input.path())
            .args(["-ac", "1", "-ar", "16000", "-f", "wav"])
            .arg(output.path())
            .output();

        let result = match run {
            Err(e) if e.kind() == ErrorKind::NotFound => Err(TranscoderError::Unavailable(
                format!("{} not found in PATH", self.binary),
            )),
            Err(e) => Err(TranscoderError::Io(e)),
            Ok(out) if !out.status.success() => {
                let stderr = String::from_utf8_lossy(&out.stderr);
                Err(TranscoderError::ConversionFailed(format!(
                    "{} exited with {}: {}",
                    self.binary,
                    out.status,
                    last_line(&stderr)
                )))
            }
            Ok(_) => {
                let wav = std::fs::read(output.path())?;
                tracing::debug!(wav_bytes = wav.len(), "Conversion completed");
                Ok(wav)
            }
        };

        // `input` and `output` handles drop here, deleting both files no
        // matter which branch was taken.
        result
    }
}

/// Checks that the transcoder binary is invocable at all.
pub fn check_ffmpeg_binary(binary: &str) -> Result<(), TranscoderError> {
    match Command::new(binary).arg("-version").output() {
        Ok(out) if out.status.success() => Ok(()),
        Ok(out) => Err(TranscoderError::Unavailable(format!(
            "{} -version exited with {}",
            binary, out.status
        ))),
        Err(e) if e.kind() == ErrorKind::NotFound => Err(TranscoderError::Unavailable(format!(
            "{} not found in PATH",
            binary
        ))),
        Err(e) => Err(TranscoderError::Io(e)),
    }
}

fn last_line(stderr: &str) -> &str {
    stderr.lines().rev().find(|l| !l.trim().is_empty()).unwrap_or("no output")
}
