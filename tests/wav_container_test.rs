//! Checks that encoded buffers are readable by a standard WAV decoder.

use std::io::Cursor;

use speechwav::core::audio::{AudioFormat, WAV_HEADER_SIZE, encode_wav, pcm_payload_to_wav};

fn pcm_from_samples(samples: &[i16]) -> Vec<u8> {
    samples.iter().flat_map(|s| s.to_le_bytes()).collect()
}

#[test]
fn test_hound_reads_encoded_wav() {
    let samples: Vec<i16> = vec![0, 16384, 32767, 16384, 0, -16384, -32768, -16384];
    let wav = encode_wav(&pcm_from_samples(&samples), AudioFormat::GEMINI_PCM).unwrap();

    let mut reader = hound::WavReader::new(Cursor::new(wav)).expect("valid WAV");
    let spec = reader.spec();
    assert_eq!(spec.channels, 1);
    assert_eq!(spec.sample_rate, 24_000);
    assert_eq!(spec.bits_per_sample, 16);
    assert_eq!(spec.sample_format, hound::SampleFormat::Int);
    assert_eq!(reader.duration(), samples.len() as u32);

    let decoded: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();
    assert_eq!(decoded, samples);
}

#[test]
fn test_hound_reads_empty_wav() {
    let wav = encode_wav(&[], AudioFormat::GEMINI_PCM).unwrap();
    assert_eq!(wav.len(), WAV_HEADER_SIZE);

    let reader = hound::WavReader::new(Cursor::new(wav)).expect("valid WAV");
    assert_eq!(reader.duration(), 0);
}

#[test]
fn test_hound_reads_one_second_of_audio() {
    // 24000 samples of a 440 Hz square wave
    let samples: Vec<i16> = (0..24_000)
        .map(|i| if (i / 27) % 2 == 0 { 8_000 } else { -8_000 })
        .collect();
    let wav = encode_wav(&pcm_from_samples(&samples), AudioFormat::GEMINI_PCM).unwrap();
    assert_eq!(wav.len(), WAV_HEADER_SIZE + 48_000);

    let reader = hound::WavReader::new(Cursor::new(wav)).expect("valid WAV");
    assert_eq!(reader.duration(), 24_000);
    assert_eq!(reader.len(), 24_000);
}

#[test]
fn test_payload_roundtrip_through_hound() {
    // Samples [256, 255] as little-endian bytes: 00 01 FF 00
    let wav = pcm_payload_to_wav("AAH/AA==", AudioFormat::GEMINI_PCM).unwrap();

    let mut reader = hound::WavReader::new(Cursor::new(wav)).expect("valid WAV");
    let decoded: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();
    assert_eq!(decoded, vec![256, 255]);
}
