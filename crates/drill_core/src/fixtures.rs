//! Shared drill documents for tests.

use crate::models::Drill;

fn load(json: &str) -> Drill {
    Drill::from_json(json).expect("fixture must parse")
}

/// Three attackers passing in a triangle, no goals.
pub fn passing_triangle() -> Drill {
    load(
        r#"{
        "name": "Passing Triangle",
        "description": "One-touch passing around a triangle",
        "field": { "type": "HALF", "attacking_direction": "NORTH", "markings": true, "goals": 0 },
        "players": [
            { "id": "A1", "role": "ATTACKER", "position": { "x": 30, "y": 60 } },
            { "id": "A2", "role": "ATTACKER", "position": { "x": 70, "y": 60 } },
            { "id": "A3", "role": "ATTACKER", "position": { "x": 50, "y": 40 } }
        ],
        "balls": [{ "position": { "x": 30, "y": 60 } }],
        "actions": [
            { "type": "PASS", "from_player": "A1", "to_player": "A2" },
            { "type": "PASS", "from_player": "A2", "to_player": "A3" },
            { "type": "PASS", "from_player": "A3", "to_player": "A1" }
        ],
        "coaching_points": ["Open body shape to receive"]
    }"#,
    )
}

/// Two attackers against one defender, finishing on the attacking goal.
pub fn two_v_one() -> Drill {
    load(
        r#"{
        "name": "2v1 Finishing",
        "description": "Two attackers against one defender, quick combination and finish",
        "field": { "type": "HALF", "attacking_direction": "NORTH", "markings": true, "goals": 1 },
        "players": [
            { "id": "GK", "role": "GOALKEEPER", "position": { "x": 50, "y": 98 } },
            { "id": "A1", "role": "ATTACKER", "position": { "x": 35, "y": 65 } },
            { "id": "A2", "role": "ATTACKER", "position": { "x": 65, "y": 65 } },
            { "id": "D1", "role": "DEFENDER", "position": { "x": 50, "y": 78 } }
        ],
        "balls": [{ "position": { "x": 35, "y": 65 } }],
        "actions": [
            { "type": "DRIBBLE", "player": "A1", "to_position": { "x": 42, "y": 75 } },
            { "type": "RUN", "player": "A2", "to_position": { "x": 58, "y": 85 } },
            { "type": "PASS", "from_player": "A1", "to_player": "A2" },
            { "type": "SHOT", "player": "A2", "target": "GOAL" }
        ],
        "coaching_points": ["Commit the defender before passing", "Finish across the goalkeeper"],
        "variations": ["Add second defender"]
    }"#,
    )
}

/// Single dribbler through three horizontal gates; one vertical gate off to the side.
pub fn gates() -> Drill {
    load(
        r#"{
        "name": "Dribble Through Gates",
        "field": { "goals": 0 },
        "players": [
            { "id": "A1", "role": "ATTACKER", "position": { "x": 50, "y": 30 } }
        ],
        "cone_gates": [
            { "id": "G1", "center": { "x": 50, "y": 45 }, "width": 8, "orientation": "HORIZONTAL" },
            { "id": "G2", "center": { "x": 50, "y": 60 }, "width": 8, "orientation": "HORIZONTAL" },
            { "id": "G3", "center": { "x": 50, "y": 75 }, "width": 8, "orientation": "HORIZONTAL" },
            { "id": "G4", "center": { "x": 72, "y": 60 }, "width": 8, "orientation": "VERTICAL" }
        ],
        "balls": [{ "position": { "x": 50, "y": 30 } }],
        "actions": [
            { "type": "DRIBBLE", "player": "A1", "to_position": { "x": 50, "y": 45 }, "through_gate": "G1" },
            { "type": "DRIBBLE", "player": "A1", "to_position": { "x": 50, "y": 60 }, "through_gate": "G2" },
            { "type": "DRIBBLE", "player": "A1", "to_position": { "x": 50, "y": 75 }, "through_gate": "G3" }
        ]
    }"#,
    )
}

/// Dribble, run, pass to the runner, shot: every arrow chains off the last.
pub fn chained_demo() -> Drill {
    load(
        r#"{
        "name": "Chained Actions Demo",
        "field": { "type": "HALF", "attacking_direction": "NORTH", "goals": 1 },
        "players": [
            { "id": "A1", "role": "ATTACKER", "position": { "x": 30, "y": 50 } },
            { "id": "A2", "role": "ATTACKER", "position": { "x": 70, "y": 50 } }
        ],
        "balls": [{ "position": { "x": 30, "y": 50 } }],
        "actions": [
            { "type": "DRIBBLE", "player": "A1", "to_position": { "x": 35, "y": 70 } },
            { "type": "RUN", "player": "A2", "to_position": { "x": 55, "y": 88 } },
            { "type": "PASS", "from_player": "A1", "to_player": "A2" },
            { "type": "SHOT", "player": "A2" }
        ]
    }"#,
    )
}

pub fn single_player() -> Drill {
    load(
        r#"{
        "name": "Ball Mastery",
        "players": [
            { "id": "A1", "role": "ATTACKER", "position": { "x": 50, "y": 50 } }
        ],
        "balls": [{ "position": { "x": 50, "y": 50 } }]
    }"#,
    )
}

/// Coned area with two boundary lines (plus one dangling index) and two pugg goals.
pub fn mini_goals() -> Drill {
    load(
        r#"{
        "name": "Small-Sided Mini Goals",
        "field": { "goals": 0 },
        "players": [
            { "id": "A1", "role": "ATTACKER", "position": { "x": 40, "y": 55 } },
            { "id": "A2", "role": "ATTACKER", "position": { "x": 60, "y": 55 } }
        ],
        "cones": [
            { "position": { "x": 30, "y": 40 } },
            { "position": { "x": 70, "y": 40 } },
            { "position": { "x": 70, "y": 70 } },
            { "position": { "x": 30, "y": 70 } }
        ],
        "cone_lines": [
            { "from_cone": 0, "to_cone": 1 },
            { "from_cone": 2, "to_cone": 3 },
            { "from_cone": 1, "to_cone": 7 }
        ],
        "mini_goals": [
            { "position": { "x": 40, "y": 75 }, "rotation": 0 },
            { "position": { "x": 60, "y": 35 }, "rotation": 180 }
        ],
        "balls": [{ "position": { "x": 40, "y": 55 } }],
        "actions": [
            { "type": "PASS", "from_player": "A1", "to_player": "A2" }
        ]
    }"#,
    )
}
