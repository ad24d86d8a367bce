//! Style Configuration - colors and marker sizes.

use serde::{Deserialize, Serialize};

use crate::models::PlayerRole;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleConfig {
    // === Role colors ===
    pub attacker_color: String,
    pub defender_color: String,
    pub goalkeeper_color: String,
    pub neutral_color: String,

    // === Surface ===
    pub grass_light: String,
    pub grass_dark: String,
    /// Width of one grass stripe in field units (default: 10.0)
    pub stripe_width: f32,
    pub line_color: String,
    /// Marking stroke width in pixels (default: 1.5)
    pub line_width: f32,

    // === Equipment ===
    pub cone_color: String,
    pub mannequin_color: String,
    pub goal_color: String,
    pub net_color: String,

    // === Actions ===
    pub pass_color: String,
    pub run_color: String,
    pub dribble_color: String,
    pub shot_color: String,
    /// Dash pattern for runs, in pixels (default: 5 3)
    pub run_dash: Vec<f32>,

    // === Marker sizes (field units) ===
    /// Player marker radius (default: 1.4)
    pub player_radius: f32,
    /// Ball radius (default: 1.0)
    pub ball_radius: f32,
    /// Cone triangle half-width (default: 0.9)
    pub cone_size: f32,
    /// Label font size in pixels (default: 7.0)
    pub font_size: f32,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            attacker_color: "#e63946".into(),
            defender_color: "#457b9d".into(),
            goalkeeper_color: "#f1fa3c".into(),
            neutral_color: "#f4a261".into(),

            grass_light: "#6fbf4a".into(),
            grass_dark: "#63b043".into(),
            stripe_width: 10.0,
            line_color: "white".into(),
            line_width: 1.5,

            cone_color: "#f4a261".into(),
            mannequin_color: "#2d3436".into(),
            goal_color: "white".into(),
            net_color: "gray".into(),

            pass_color: "white".into(),
            run_color: "white".into(),
            dribble_color: "white".into(),
            shot_color: "red".into(),
            run_dash: vec![5.0, 3.0],

            player_radius: 1.4,
            ball_radius: 1.0,
            cone_size: 0.9,
            font_size: 7.0,
        }
    }
}

impl StyleConfig {
    pub fn role_color(&self, role: PlayerRole) -> &str {
        match role {
            PlayerRole::Attacker => &self.attacker_color,
            PlayerRole::Defender => &self.defender_color,
            PlayerRole::Goalkeeper => &self.goalkeeper_color,
            PlayerRole::Neutral => &self.neutral_color,
        }
    }

    pub fn presentation() -> Self {
        Self { line_width: 2.0, player_radius: 1.8, ball_radius: 1.2, font_size: 9.0, ..Self::default() }
    }
}
