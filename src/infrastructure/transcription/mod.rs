mod mock_transcriber;
mod openai_transcriber;

pub use mock_transcriber::MockTranscriber;
pub use openai_transcriber::OpenAiTranscriber;
