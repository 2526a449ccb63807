mod meeting_test;
mod waveform_test;
