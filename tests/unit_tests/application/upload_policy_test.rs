use rapporteur::application::services::{DIARIZATION_MAX_BYTES, UploadPolicy, UploadPolicyError};
use rapporteur::domain::{AudioBlob, AudioFormat, PreparationMode, TranscriptionMode};

const MIB: u64 = 1024 * 1024;

fn blob_of_size(filename: &str, size: usize) -> AudioBlob {
    AudioBlob::new(filename.to_string(), vec![0u8; size])
}

fn policy() -> UploadPolicy {
    UploadPolicy::new(200 * MIB)
}

#[test]
fn given_26mib_wav_when_diarized_then_rejected_for_diarization() {
    let blob = blob_of_size("meeting.wav", 26 * MIB as usize);

    let result = policy().validate(
        &blob,
        TranscriptionMode::Diarized,
        PreparationMode::Passthrough,
    );

    assert!(matches!(
        result,
        Err(UploadPolicyError::FileTooLargeForDiarization { size_bytes, .. })
            if size_bytes == 26 * MIB
    ));
}

#[test]
fn given_26mib_wav_when_segmented_with_decode_then_accepted() {
    let blob = blob_of_size("meeting.wav", 26 * MIB as usize);

    let result = policy().validate(&blob, TranscriptionMode::Segmented, PreparationMode::Decode);

    assert_eq!(result.unwrap(), AudioFormat::Wav);
}

#[test]
fn given_26mib_wav_when_segmented_passthrough_then_request_ceiling_applies() {
    let blob = blob_of_size("meeting.wav", 26 * MIB as usize);

    let result = policy().validate(
        &blob,
        TranscriptionMode::Segmented,
        PreparationMode::Passthrough,
    );

    assert!(matches!(
        result,
        Err(UploadPolicyError::FileTooLarge { limit_bytes, .. })
            if limit_bytes == DIARIZATION_MAX_BYTES
    ));
}

#[test]
fn given_ogg_when_validating_then_unsupported_regardless_of_size() {
    let small = blob_of_size("clip.ogg", 10);

    let result = policy().validate(&small, TranscriptionMode::Segmented, PreparationMode::Decode);

    assert!(matches!(
        result,
        Err(UploadPolicyError::UnsupportedFormat(ext)) if ext == "ogg"
    ));
}

#[test]
fn given_missing_extension_when_validating_then_unsupported() {
    let blob = blob_of_size("recording", 10);

    let result = policy().validate(&blob, TranscriptionMode::Segmented, PreparationMode::Decode);

    assert!(matches!(result, Err(UploadPolicyError::UnsupportedFormat(_))));
}

#[test]
fn given_upload_over_soft_ceiling_when_segmented_decode_then_rejected() {
    let policy = UploadPolicy::new(10 * MIB);
    let blob = blob_of_size("meeting.mp3", 11 * MIB as usize);

    let result = policy.validate(&blob, TranscriptionMode::Segmented, PreparationMode::Decode);

    assert!(matches!(
        result,
        Err(UploadPolicyError::FileTooLarge { limit_bytes, .. }) if limit_bytes == 10 * MIB
    ));
}

#[test]
fn given_amr_under_limits_when_validating_then_accepted_with_format() {
    let blob = blob_of_size("note.amr", 1024);

    let result = policy().validate(
        &blob,
        TranscriptionMode::Diarized,
        PreparationMode::Passthrough,
    );

    assert_eq!(result.unwrap(), AudioFormat::Amr);
}
