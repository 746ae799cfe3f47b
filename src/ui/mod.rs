// ui/ - Commands coming from the DOM control panel
//
// The host maps each button/select/slider event to a (name, value) pair.
// Scenes consume the parsed Command and answer with label updates; they
// never touch the DOM themselves.

mod toggle;

pub use toggle::{Label, Toggle};

use crate::error::{Error, Result};
use crate::material::parse_hex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Axis {
    X,
    #[default]
    Y,
    Z,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LightKind {
    #[default]
    Point,
    Spot,
    Directional,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    // Animation toggles
    ToggleRotation,
    TogglePulse,
    ToggleColor,
    ToggleSpeed,
    ToggleDirection,
    ToggleScaleAnimation,
    ToggleJump,
    TriggerEffect,
    SetRotationAxis(Axis),

    // Materials
    ToggleTextures,
    SetMaterial(String),
    CycleMaterial,
    RandomColor,
    RandomScale,

    // Lights
    ToggleSceneLight,
    ToggleModelLight,
    ToggleDirectionalLight,
    SetLightKind(LightKind),
    SetLightIntensity(f32),
    SetLightColor(u32),
    IncreaseLight,
    DecreaseLight,
    CycleLightColor,
}

impl Command {
    /// Parse a host event. `value` carries select/slider/picker input.
    pub fn parse(name: &str, value: Option<&str>) -> Result<Self> {
        let cmd = match name {
            "toggle_rotation" => Command::ToggleRotation,
            "toggle_pulse" => Command::TogglePulse,
            "toggle_color" => Command::ToggleColor,
            "toggle_speed" => Command::ToggleSpeed,
            "toggle_direction" => Command::ToggleDirection,
            "toggle_scale_animation" => Command::ToggleScaleAnimation,
            "toggle_jump" => Command::ToggleJump,
            "special_effect" => Command::TriggerEffect,
            "rotation_axis" => Command::SetRotationAxis(match required(name, value)? {
                "x" => Axis::X,
                "y" => Axis::Y,
                "z" => Axis::Z,
                other => return Err(invalid(name, other)),
            }),

            "toggle_textures" => Command::ToggleTextures,
            "set_material" => Command::SetMaterial(required(name, value)?.to_string()),
            "cycle_material" => Command::CycleMaterial,
            "random_color" => Command::RandomColor,
            "random_scale" => Command::RandomScale,

            "toggle_scene_light" => Command::ToggleSceneLight,
            "toggle_model_light" => Command::ToggleModelLight,
            "toggle_directional_light" => Command::ToggleDirectionalLight,
            "light_type" => Command::SetLightKind(match required(name, value)? {
                "point" => LightKind::Point,
                "spot" => LightKind::Spot,
                "directional" => LightKind::Directional,
                other => return Err(invalid(name, other)),
            }),
            "light_intensity" => {
                let v = required(name, value)?;
                let f: f32 = v.trim().parse().map_err(|_| invalid(name, v))?;
                if !f.is_finite() {
                    return Err(invalid(name, v));
                }
                Command::SetLightIntensity(f)
            }
            "light_color" => {
                let v = required(name, value)?;
                Command::SetLightColor(parse_hex(v).ok_or_else(|| invalid(name, v))?)
            }
            "increase_light" => Command::IncreaseLight,
            "decrease_light" => Command::DecreaseLight,
            "cycle_light_color" => Command::CycleLightColor,

            other => return Err(Error::UnknownCommand(other.to_string())),
        };
        Ok(cmd)
    }
}

fn required<'a>(name: &str, value: Option<&'a str>) -> Result<&'a str> {
    value.ok_or_else(|| invalid(name, "<missing>"))
}

fn invalid(name: &str, value: &str) -> Error {
    Error::InvalidCommand { command: name.to_string(), value: value.to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valued_commands() {
        assert_eq!(
            Command::parse("rotation_axis", Some("z")).unwrap(),
            Command::SetRotationAxis(Axis::Z)
        );
        assert_eq!(
            Command::parse("light_intensity", Some("2.5")).unwrap(),
            Command::SetLightIntensity(2.5)
        );
        assert_eq!(
            Command::parse("light_color", Some("#ff8800")).unwrap(),
            Command::SetLightColor(0xff8800)
        );
        assert_eq!(
            Command::parse("set_material", Some("gold")).unwrap(),
            Command::SetMaterial("gold".into())
        );
    }

    #[test]
    fn rejects_bad_input() {
        assert!(matches!(Command::parse("warp", None), Err(Error::UnknownCommand(_))));
        assert!(matches!(
            Command::parse("rotation_axis", Some("w")),
            Err(Error::InvalidCommand { .. })
        ));
        assert!(matches!(
            Command::parse("light_intensity", None),
            Err(Error::InvalidCommand { .. })
        ));
        assert!(matches!(
            Command::parse("light_intensity", Some("NaN")),
            Err(Error::InvalidCommand { .. })
        ));
    }
}
