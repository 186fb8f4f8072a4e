//! Combat transcript
//!
//! Turns a resolved encounter into the human-readable log lines the shell
//! prints and appends to the transcript file.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use hq_core::Face;
use hq_core::combat::{Combat, Role};

fn face_name(face: &Face) -> &'static str {
    match face {
        Face::Hit => "sword",
        Face::Block => "shield",
    }
}

fn pool(faces: &[Face]) -> String {
    let names: Vec<_> = faces.iter().map(|f| format!("'{}'", face_name(f))).collect();
    format!("[{}]", names.join(", "))
}

/// Log lines for one encounter, in the order the rounds happened
pub fn combat_lines(combat: &Combat) -> Vec<String> {
    let mut lines = vec![format!("Encountered monster at {}", combat.location)];

    for round in &combat.rounds {
        let defender = round.defender();
        lines.push(format!(
            "{} attacks: {} vs {}",
            round.attacker,
            pool(&round.attack_faces),
            pool(&round.defense_faces)
        ));
        if round.damage > 0 {
            lines.push(format!(
                "{} takes {} damage (HP={})",
                defender, round.damage, round.defender_hit_points
            ));
        } else {
            lines.push(format!("{} blocks the attack", defender));
        }
        if round.defender_hit_points <= 0 {
            lines.push(match defender {
                Role::Monster => "Monster defeated!".to_string(),
                Role::Hero => "Hero defeated!".to_string(),
            });
        }
    }

    lines
}

/// Optional file sink for combat logs
pub struct Transcript {
    writer: Option<BufWriter<File>>,
}

impl Transcript {
    /// Create (truncating) the file at `path`, or a no-op sink without one
    pub fn open(path: Option<&Path>) -> Result<Self> {
        let writer = match path {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("creating transcript {}", path.display()))?;
                Some(BufWriter::new(file))
            }
            None => None,
        };
        Ok(Self { writer })
    }

    pub fn write(&mut self, lines: &[String]) -> Result<()> {
        if let Some(writer) = self.writer.as_mut() {
            for line in lines {
                writeln!(writer, "{}", line)?;
            }
            writer.flush()?;
        }
        Ok(())
    }
}
