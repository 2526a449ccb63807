/// Static cost estimate for a transcription run: duration times the per-minute
/// rate. Pure arithmetic, total over non-negative inputs.
pub fn estimate_transcription_cost(duration_minutes: f64, price_per_minute_usd: f64) -> f64 {
    duration_minutes * price_per_minute_usd
}
