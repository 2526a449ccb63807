mod ffmpeg_transcoder;
mod symphonia_decoder;

pub use ffmpeg_transcoder::{FfmpegTranscoder, check_ffmpeg_binary};
pub use symphonia_decoder::SymphoniaDecoder;
