// Fixed approximations: average step length and calorie burn per step.
// The report tests pin these exact values.
const KILOMETERS_IN_STEP: f64 = 0.00075;
const CALORIES_IN_STEP: f64 = 50.0;
const KILOCALORIES_IN_CALORIES: f64 = 0.001;

pub fn kilometers(steps: u64) -> f64 {
    steps as f64 * KILOMETERS_IN_STEP
}

pub fn calories(steps: u64) -> f64 {
    steps as f64 * CALORIES_IN_STEP
}

pub fn kilocalories(steps: u64) -> f64 {
    calories(steps) * KILOCALORIES_IN_CALORIES
}
