//! Gear ratio and output speed math.
//!
//! The ratio is `driven / driving`: a ratio above 1 reduces speed and
//! multiplies torque, a ratio below 1 does the opposite.

use serde::Serialize;

use crate::error::GearError;

/// Compute the gear ratio `driven / driving`.
///
/// # Errors
///
/// Returns [`GearError::InvalidInput`] if the driving gear has no teeth.
pub fn compute_ratio(driving: u32, driven: u32) -> Result<f64, GearError> {
    if driving == 0 {
        return Err(GearError::InvalidInput(
            "driving gear must have at least one tooth".into(),
        ));
    }
    Ok(f64::from(driven) / f64::from(driving))
}

/// Compute the output speed (RPM) for a motor speed through a gear pair.
///
/// Equal to `input_speed / ratio`.
///
/// # Errors
///
/// Returns [`GearError::InvalidInput`] if either gear has no teeth.
pub fn compute_output_speed(input_speed: u32, driving: u32, driven: u32) -> Result<f64, GearError> {
    if driven == 0 {
        return Err(GearError::InvalidInput(
            "driven gear must have at least one tooth".into(),
        ));
    }
    let ratio = compute_ratio(driving, driven)?;
    Ok(f64::from(input_speed) / ratio)
}

/// Result of evaluating a single gear setup on demand.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SetupCalculation {
    /// Motor speed (RPM).
    pub input_speed: u32,
    /// Teeth on the motor-side gear.
    pub driving_teeth: u32,
    /// Teeth on the wheel-side gear.
    pub driven_teeth: u32,
    /// `driven / driving`.
    pub ratio: f64,
    /// Output speed (RPM).
    pub output_speed: f64,
    /// Output speed relative to input speed (`1 / ratio`).
    pub speed_factor: f64,
    /// Output torque relative to input torque (`ratio`).
    pub torque_factor: f64,
}

/// Evaluate one gear setup, including its speed and torque factors.
///
/// # Errors
///
/// Returns [`GearError::InvalidInput`] if either gear has no teeth.
pub fn calculate_setup(
    input_speed: u32,
    driving: u32,
    driven: u32,
) -> Result<SetupCalculation, GearError> {
    let output_speed = compute_output_speed(input_speed, driving, driven)?;
    let ratio = compute_ratio(driving, driven)?;
    Ok(SetupCalculation {
        input_speed,
        driving_teeth: driving,
        driven_teeth: driven,
        ratio,
        output_speed,
        speed_factor: 1.0 / ratio,
        torque_factor: ratio,
    })
}
