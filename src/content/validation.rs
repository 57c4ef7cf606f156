//! Validation for loaded movement tuning values.

use crate::movement::MovementTuning;

/// A tuning value outside its allowed range.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub field: &'static str,
    pub value: f32,
    pub requirement: &'static str,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "movement.{} = {} must be {}",
            self.field, self.value, self.requirement
        )
    }
}

const NORMAL_BODY_FIELDS: [&str; 3] = [
    "normal_body.gravity_scale",
    "normal_body.mass",
    "normal_body.drag",
];
const DASH_BODY_FIELDS: [&str; 3] = ["dash_body.gravity_scale", "dash_body.mass", "dash_body.drag"];

/// Push an error unless `$value` satisfies `$check`.
macro_rules! check_value {
    ($errors:expr, $field:expr, $value:expr, $check:expr, $requirement:expr) => {
        let value: f32 = $value;
        if !value.is_finite() || !$check(value) {
            $errors.push(ValidationError {
                field: $field,
                value,
                requirement: $requirement,
            });
        }
    };
}

fn non_negative(v: f32) -> bool {
    v >= 0.0
}

fn positive(v: f32) -> bool {
    v > 0.0
}

fn any(_: f32) -> bool {
    true
}

/// Validate every tuning field.
/// Returns a list of validation errors, empty if the tuning is usable.
pub fn validate_tuning(tuning: &MovementTuning) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let t = tuning;

    check_value!(errors, "speed", t.speed, non_negative, "finite and >= 0");
    check_value!(errors, "jump_power", t.jump_power, non_negative, "finite and >= 0");
    check_value!(errors, "coyote_time", t.coyote_time, non_negative, "finite and >= 0");
    check_value!(errors, "wall_jump_x", t.wall_jump_x, non_negative, "finite and >= 0");
    check_value!(errors, "wall_jump_y", t.wall_jump_y, non_negative, "finite and >= 0");
    check_value!(errors, "dash_force", t.dash_force, non_negative, "finite and >= 0");
    check_value!(errors, "dash_duration", t.dash_duration, non_negative, "finite and >= 0");
    check_value!(errors, "dash_cooldown", t.dash_cooldown, non_negative, "finite and >= 0");
    check_value!(
        errors,
        "double_tap_window",
        t.double_tap_window,
        positive,
        "finite and > 0"
    );
    check_value!(
        errors,
        "probe_distance",
        t.probe_distance,
        non_negative,
        "finite and >= 0"
    );

    for (fields, profile) in [
        (NORMAL_BODY_FIELDS, &t.normal_body),
        (DASH_BODY_FIELDS, &t.dash_body),
    ] {
        let [gravity_field, mass_field, drag_field] = fields;
        check_value!(errors, gravity_field, profile.gravity_scale, any, "finite");
        check_value!(errors, mass_field, profile.mass, positive, "finite and > 0");
        check_value!(errors, drag_field, profile.drag, non_negative, "finite and >= 0");
    }

    errors
}
