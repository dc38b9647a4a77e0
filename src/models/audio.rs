use crate::constants::MAX_RESAMPLED_LENGTH;
use crate::models::{AudioConfig, Error};
use crate::types::TokenIndex;
use log::{debug, warn};

/// Resamples a signal from `from_rate` to `to_rate` Hz with linear interpolation.
///
/// # Errors
/// * `Error::InvalidConfig` if either rate is zero, or if the resampled signal
///   would exceed `MAX_RESAMPLED_LENGTH` samples.
pub fn resample(signal: &[f32], from_rate: u32, to_rate: u32) -> Result<Vec<f32>, Error> {
    if from_rate == 0 || to_rate == 0 {
        return Err(Error::InvalidConfig(
            "sampling rates must be non-zero".to_string(),
        ));
    }

    if signal.is_empty() || from_rate == to_rate {
        return Ok(signal.to_vec());
    }

    let ratio = from_rate as f64 / to_rate as f64;
    let output_length = ((signal.len() as f64) / ratio).round().max(1.0);
    if output_length > MAX_RESAMPLED_LENGTH as f64 {
        return Err(Error::InvalidConfig(format!(
            "resampling {} samples from {} Hz to {} Hz exceeds {} samples",
            signal.len(),
            from_rate,
            to_rate,
            MAX_RESAMPLED_LENGTH
        )));
    }
    let output_length = output_length as usize;
    let last = signal.len() - 1;

    let resampled = (0..output_length)
        .map(|i| {
            let position = i as f64 * ratio;
            let lower = (position.floor() as usize).min(last);
            let upper = (lower + 1).min(last);
            let fraction = (position - lower as f64).clamp(0.0, 1.0) as f32;

            signal[lower] * (1.0 - fraction) + signal[upper] * fraction
        })
        .collect();

    Ok(resampled)
}

/// Scales a signal so that its peak absolute amplitude is `1.0`. Silent signals
/// are returned unchanged.
pub fn normalize(signal: &[f32]) -> Vec<f32> {
    let peak = signal
        .iter()
        .filter(|value| value.is_finite())
        .fold(0.0_f32, |peak, value| peak.max(value.abs()));

    if peak == 0.0 {
        return signal.to_vec();
    }

    signal.iter().map(|value| value / peak).collect()
}

/// Maps each amplitude to the nearest of `levels` evenly spaced bins over
/// `[-1, 1]`. Amplitudes outside that range are clipped.
///
/// The bin indices are suitable as tokens for the one-hot encoder.
///
/// # Errors
/// * `Error::InvalidConfig` if `levels` is below 2.
/// * `Error::InvalidInput` if the signal holds a non-finite value.
pub fn quantize(signal: &[f32], levels: usize) -> Result<Vec<TokenIndex>, Error> {
    if levels < 2 {
        return Err(Error::InvalidConfig(format!(
            "quantization needs at least 2 levels, got {}",
            levels
        )));
    }

    let max_level = (levels - 1) as f32;
    let mut clipped = 0;

    let quantized = signal
        .iter()
        .map(|&value| {
            if !value.is_finite() {
                return Err(Error::InvalidInput(format!(
                    "cannot quantize non-finite amplitude {}",
                    value
                )));
            }

            if !(-1.0..=1.0).contains(&value) {
                clipped += 1;
            }

            let scaled = (value.clamp(-1.0, 1.0) + 1.0) / 2.0 * max_level;
            Ok((scaled.round() as TokenIndex).min(levels - 1))
        })
        .collect::<Result<Vec<_>, Error>>()?;

    if clipped > 0 {
        warn!(
            "Clipped {} of {} amplitudes outside [-1, 1] during quantization",
            clipped,
            signal.len()
        );
    }

    Ok(quantized)
}

/// Resamples, normalizes and quantizes a raw clip recorded at `from_rate`.
pub fn prepare_audio_tokens(
    signal: &[f32],
    from_rate: u32,
    config: &AudioConfig,
) -> Result<Vec<TokenIndex>, Error> {
    let resampled = resample(signal, from_rate, config.sampling_rate)?;
    let normalized = normalize(&resampled);
    let tokens = quantize(&normalized, config.quantization_levels)?;

    debug!(
        "Prepared {} audio tokens from {} samples at {} Hz",
        tokens.len(),
        signal.len(),
        from_rate
    );

    Ok(tokens)
}
